//! Flat AST types for expressions, designators and array specs.
//!
//! - No `Box<Expr>`; children are `ExprId(u32)` indices
//! - Sealed sum types at every level, matched exhaustively
//! - Plain-data types are `Copy`; numeric payloads live in the constant table
//!
//! # Module Structure
//!
//! - `expr`: `Expr`, `ExprKind`, `ExprClass`
//! - `constant`: literal payloads and literal token parsers
//! - `designator`: addressing forms
//! - `array_spec`: declaration-time shape specs
//! - `operators`: built-in unary and binary operators
//! - `intrinsic`: intrinsic function tags
//! - `decl`: variable declarations

mod array_spec;
mod constant;
mod decl;
mod designator;
mod expr;
mod intrinsic;
mod operators;

pub use array_spec::{ArraySpec, ArraySpecKind, ExplicitShape};
pub use constant::{parse_boz, parse_logical, BozKind, Constant, ConstantValue};
pub use decl::{DeclFlags, VarDecl};
pub use designator::{ComplexPart, Designator, SectionSubscript};
pub use expr::{Expr, ExprClass, ExprKind};
pub use intrinsic::{IntrinsicFunction, IntrinsicGroup};
pub use operators::{BinaryOp, OperatorLevel, UnaryOp};

#[cfg(test)]
mod tests;
