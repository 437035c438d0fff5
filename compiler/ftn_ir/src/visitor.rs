//! AST visitors.
//!
//! Two traversal styles are provided:
//!
//! - [`Visitor`]: a walker. Default implementations call `walk_*`
//!   functions that traverse children; override `visit_*` methods to add
//!   behavior at specific nodes. The visitor may mutate its own state, the
//!   AST stays immutable.
//! - [`ExprVisitor`]: value-returning dispatch for code generation. Every
//!   method is required, so adding a node variant breaks every
//!   implementation until it handles the new case.
//!
//! # Example
//!
//! ```text
//! struct CountConstants {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountConstants {
//!     fn visit_constant(&mut self, id: ExprId, constant: &'ast Constant, ctx: &'ast AstContext) {
//!         self.count += 1;
//!         walk_constant(self, id, constant, ctx);
//!     }
//! }
//! ```

use crate::ast::{
    ArraySpec, BinaryOp, Constant, Designator, ExprKind, IntrinsicFunction, SectionSubscript,
    UnaryOp,
};
use crate::{AstContext, ExprId, Name};

// Walker

/// AST walker.
///
/// Override `visit_*` methods to add custom behavior at specific nodes.
/// Call `walk_*` functions to continue traversal into children.
pub trait Visitor<'ast> {
    /// Visit an expression by ID.
    fn visit_expr(&mut self, id: ExprId, ctx: &'ast AstContext) {
        walk_expr(self, id, ctx);
    }

    /// Visit a constant; its kind selector is its only child.
    fn visit_constant(&mut self, id: ExprId, constant: &'ast Constant, ctx: &'ast AstContext) {
        walk_constant(self, id, constant, ctx);
    }

    /// Visit a designator.
    fn visit_designator(
        &mut self,
        id: ExprId,
        designator: &'ast Designator,
        ctx: &'ast AstContext,
    ) {
        walk_designator(self, id, designator, ctx);
    }

    /// Visit one array-section subscript.
    fn visit_section_subscript(
        &mut self,
        subscript: &'ast SectionSubscript,
        ctx: &'ast AstContext,
    ) {
        walk_section_subscript(self, subscript, ctx);
    }

    /// Visit an array shape spec (declarations, not reached from expressions).
    fn visit_array_spec(&mut self, spec: &'ast ArraySpec, ctx: &'ast AstContext) {
        walk_array_spec(self, spec, ctx);
    }
}

/// Walk an expression's children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    ctx: &'ast AstContext,
) {
    match ctx.kind(id) {
        ExprKind::Constant(_) => {
            if let Some(constant) = ctx.constant(id) {
                visitor.visit_constant(id, constant, ctx);
            }
        }
        ExprKind::Designator(designator) => visitor.visit_designator(id, designator, ctx),
        ExprKind::Unary { operand, .. } | ExprKind::DefinedUnary { operand, .. } => {
            visitor.visit_expr(*operand, ctx);
        }
        ExprKind::Binary { lhs, rhs, .. } | ExprKind::DefinedBinary { lhs, rhs, .. } => {
            visitor.visit_expr(*lhs, ctx);
            visitor.visit_expr(*rhs, ctx);
        }
        ExprKind::IntrinsicCall { args, .. } => {
            for &arg in ctx.arena().get_expr_list(*args) {
                visitor.visit_expr(arg, ctx);
            }
        }
    }
}

/// Walk a constant's kind selector.
pub fn walk_constant<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _id: ExprId,
    constant: &'ast Constant,
    ctx: &'ast AstContext,
) {
    if let Some(selector) = constant.kind_selector() {
        visitor.visit_expr(selector, ctx);
    }
}

/// Walk a designator's base object and subscripts, in source order.
pub fn walk_designator<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    _id: ExprId,
    designator: &'ast Designator,
    ctx: &'ast AstContext,
) {
    match designator {
        Designator::Var { .. } => {}
        Designator::ArrayElement { target, subscripts } => {
            visitor.visit_expr(*target, ctx);
            for &sub in ctx.arena().get_expr_list(*subscripts) {
                visitor.visit_expr(sub, ctx);
            }
        }
        Designator::ArraySection { target, subscripts } => {
            visitor.visit_expr(*target, ctx);
            for sub in ctx.arena().get_section_subscripts(*subscripts) {
                visitor.visit_section_subscript(sub, ctx);
            }
        }
        Designator::Substring { target, start, end } => {
            visitor.visit_expr(*target, ctx);
            for bound in [start, end].into_iter().flatten() {
                visitor.visit_expr(*bound, ctx);
            }
        }
        Designator::ComplexPart { target, .. } => visitor.visit_expr(*target, ctx),
        Designator::StructureComponent { parent, .. } => visitor.visit_expr(*parent, ctx),
        Designator::Coindexed {
            target,
            cosubscripts,
        } => {
            visitor.visit_expr(*target, ctx);
            for &sub in ctx.arena().get_expr_list(*cosubscripts) {
                visitor.visit_expr(sub, ctx);
            }
        }
    }
}

/// Walk the present parts of a section subscript.
pub fn walk_section_subscript<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    subscript: &'ast SectionSubscript,
    ctx: &'ast AstContext,
) {
    match subscript {
        SectionSubscript::Subscript(e) => visitor.visit_expr(*e, ctx),
        SectionSubscript::Triplet {
            lower,
            upper,
            stride,
        } => {
            for part in [lower, upper, stride].into_iter().flatten() {
                visitor.visit_expr(*part, ctx);
            }
        }
    }
}

/// Walk the bound expressions of an array spec.
pub fn walk_array_spec<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    spec: &'ast ArraySpec,
    ctx: &'ast AstContext,
) {
    match spec {
        ArraySpec::ExplicitShape(shape) => {
            if let Some(lower) = shape.lower {
                visitor.visit_expr(lower, ctx);
            }
            visitor.visit_expr(shape.upper, ctx);
        }
        ArraySpec::AssumedSize { dims, lower, .. } => {
            for shape in ctx.explicit_shapes(*dims) {
                if let Some(lower) = shape.lower {
                    visitor.visit_expr(lower, ctx);
                }
                visitor.visit_expr(shape.upper, ctx);
            }
            if let Some(lower) = lower {
                visitor.visit_expr(*lower, ctx);
            }
        }
        ArraySpec::AssumedShape { lower } | ArraySpec::ImpliedShape { lower, .. } => {
            if let Some(lower) = lower {
                visitor.visit_expr(*lower, ctx);
            }
        }
        ArraySpec::DeferredShape => {}
    }
}

// Dispatch

/// Value-returning, exhaustive dispatch over expression variants.
///
/// Callers go through [`dispatch`], which checks the kind tag and hands
/// each method only the fields of its variant.
pub trait ExprVisitor {
    type Output;

    fn visit_constant(&mut self, ctx: &AstContext, id: ExprId, constant: &Constant)
        -> Self::Output;

    fn visit_designator(
        &mut self,
        ctx: &AstContext,
        id: ExprId,
        designator: &Designator,
    ) -> Self::Output;

    fn visit_unary(&mut self, ctx: &AstContext, id: ExprId, op: UnaryOp, operand: ExprId)
        -> Self::Output;

    fn visit_defined_unary(
        &mut self,
        ctx: &AstContext,
        id: ExprId,
        op: Name,
        operand: ExprId,
    ) -> Self::Output;

    fn visit_binary(
        &mut self,
        ctx: &AstContext,
        id: ExprId,
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    ) -> Self::Output;

    fn visit_defined_binary(
        &mut self,
        ctx: &AstContext,
        id: ExprId,
        op: Name,
        lhs: ExprId,
        rhs: ExprId,
    ) -> Self::Output;

    fn visit_intrinsic_call(
        &mut self,
        ctx: &AstContext,
        id: ExprId,
        function: IntrinsicFunction,
        args: &[ExprId],
    ) -> Self::Output;
}

/// Route `id` to the [`ExprVisitor`] method for its variant.
pub fn dispatch<V: ExprVisitor + ?Sized>(
    visitor: &mut V,
    ctx: &AstContext,
    id: ExprId,
) -> V::Output {
    match *ctx.kind(id) {
        ExprKind::Constant(c) => visitor.visit_constant(ctx, id, ctx.arena().get_constant(c)),
        ExprKind::Designator(ref designator) => visitor.visit_designator(ctx, id, designator),
        ExprKind::Unary { op, operand } => visitor.visit_unary(ctx, id, op, operand),
        ExprKind::DefinedUnary { op, operand } => {
            visitor.visit_defined_unary(ctx, id, op, operand)
        }
        ExprKind::Binary { op, lhs, rhs } => visitor.visit_binary(ctx, id, op, lhs, rhs),
        ExprKind::DefinedBinary { op, lhs, rhs } => {
            visitor.visit_defined_binary(ctx, id, op, lhs, rhs)
        }
        ExprKind::IntrinsicCall { function, args } => {
            visitor.visit_intrinsic_call(ctx, id, function, ctx.arena().get_expr_list(args))
        }
    }
}

#[cfg(test)]
mod tests;
