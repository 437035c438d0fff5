//! ftn IR - Expression AST core for the ftn Fortran front end
//!
//! This crate contains the node model the parser builds and Sema consumes:
//! - Locations and closed spans for diagnostics
//! - Names for interned identifiers
//! - Arbitrary-precision integers and IEEE floats for literal values
//! - Constants, designators, operators and intrinsic calls
//! - Array shape specifications
//! - Arena allocation owned by a per-compilation [`AstContext`]
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32)
//! - **Flatten Everything**: No Box<Expr>, use ExprId(u32) indices
//! - **Factories Only**: every node is built by an `AstContext` method that
//!   fixes its span and initial type; nodes are never constructed directly
//!
//! Literal values keep their exact bit patterns (ApInt words, IEEE bits)
//! so nodes stay `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod context;
mod error;
mod expr_id;
mod interner;
mod name;
pub mod numeric;
mod span;
mod stack;
mod types;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{
    ArraySpec, ArraySpecKind, BinaryOp, BozKind, ComplexPart, Constant, ConstantValue, DeclFlags,
    Designator, ExplicitShape, Expr, ExprClass, ExprKind, IntrinsicFunction, IntrinsicGroup,
    OperatorLevel, SectionSubscript, UnaryOp, VarDecl,
};
pub use context::{AstContext, ExprDisplay};
pub use error::LiteralError;
pub use expr_id::{
    ArraySpecId, CharRange, ConstId, DeclId, ExplicitShapeRange, ExprId, ExprRange,
    SectionSubscriptRange,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use numeric::{ApFloat, ApInt, FloatSemantics};
pub use span::{Loc, Span, SpanError};
pub use types::{TypeDisplay, TypeId, TypeKind, TypePool};

/// Bit width of integer literals without a kind selector.
///
/// Wider than the default `INTEGER` kind so that literals Sema later
/// narrows are never truncated at construction.
pub const DEFAULT_INTEGER_WIDTH: u32 = 64;

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Initialize tracing for AST construction debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ftn_ir=trace` to see every node allocation, or
/// `RUST_LOG=ftn_ir=debug` for type-slot and kind-selector overwrites.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}
