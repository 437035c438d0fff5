use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{DeclFlags, ExplicitShape};
use crate::{Loc, TypeId};

fn loc(n: u32) -> Loc {
    Loc::new(n)
}

/// Records every expression visited, in order.
#[derive(Default)]
struct Collect {
    seen: Vec<ExprId>,
    constants: usize,
}

impl<'ast> Visitor<'ast> for Collect {
    fn visit_expr(&mut self, id: ExprId, ctx: &'ast AstContext) {
        self.seen.push(id);
        walk_expr(self, id, ctx);
    }

    fn visit_constant(&mut self, id: ExprId, constant: &'ast Constant, ctx: &'ast AstContext) {
        self.constants += 1;
        walk_constant(self, id, constant, ctx);
    }
}

/// `a(1:n) + 4_8`
fn section_plus_constant(ctx: &mut AstContext) -> (ExprId, [ExprId; 6]) {
    let vector = ctx.types_mut().array(TypeId::INTEGER, 1);
    let name = ctx.intern("a");
    let decl = ctx.declare_var(name, loc(0), vector, DeclFlags::empty());
    let a = ctx.var(loc(0), decl);
    let one = ctx.integer_constant(loc(2), loc(2), "1");
    let n_name = ctx.intern("n");
    let n_decl = ctx.declare_var(n_name, loc(4), TypeId::INTEGER, DeclFlags::empty());
    let n = ctx.var(loc(4), n_decl);
    let section = ctx.array_section(
        loc(1),
        a,
        &[SectionSubscript::Triplet {
            lower: Some(one),
            upper: Some(n),
            stride: None,
        }],
    );
    let four = ctx.integer_constant(loc(9), loc(9), "4");
    let kind = ctx.integer_constant(loc(11), loc(11), "8");
    ctx.set_kind_selector(four, kind);
    let sum = ctx.binary(loc(7), BinaryOp::Plus, section, four);
    (sum, [section, a, one, n, four, kind])
}

#[test]
fn walker_visits_in_source_order() {
    let mut ctx = AstContext::new();
    let (sum, [section, a, one, n, four, kind]) = section_plus_constant(&mut ctx);

    let mut collect = Collect::default();
    collect.visit_expr(sum, &ctx);
    assert_eq!(collect.seen, vec![sum, section, a, one, n, four, kind]);
    assert_eq!(collect.constants, 3);
}

#[test]
fn walker_reaches_array_spec_bounds() {
    let mut ctx = AstContext::new();
    let lower = ctx.integer_constant(loc(0), loc(0), "0");
    let upper = ctx.integer_constant(loc(2), loc(2), "9");
    let spec = ctx.assumed_size_spec(
        &[ExplicitShape {
            lower: Some(lower),
            upper,
        }],
        None,
        loc(4),
    );

    let mut collect = Collect::default();
    collect.visit_array_spec(ctx.array_spec(spec), &ctx);
    assert_eq!(collect.seen, vec![lower, upper]);

    let deferred = ctx.deferred_shape_spec();
    let mut collect = Collect::default();
    collect.visit_array_spec(ctx.array_spec(deferred), &ctx);
    assert!(collect.seen.is_empty());
}

/// Counts nodes by dispatching on every child explicitly.
struct Size;

impl ExprVisitor for Size {
    type Output = usize;

    fn visit_constant(&mut self, ctx: &AstContext, _: ExprId, constant: &Constant) -> usize {
        1 + constant
            .kind_selector()
            .map_or(0, |selector| dispatch(self, ctx, selector))
    }

    fn visit_designator(&mut self, ctx: &AstContext, _: ExprId, designator: &Designator) -> usize {
        1 + designator.base().map_or(0, |base| dispatch(self, ctx, base))
    }

    fn visit_unary(&mut self, ctx: &AstContext, _: ExprId, _: UnaryOp, operand: ExprId) -> usize {
        1 + dispatch(self, ctx, operand)
    }

    fn visit_defined_unary(&mut self, ctx: &AstContext, _: ExprId, _: Name, operand: ExprId) -> usize {
        1 + dispatch(self, ctx, operand)
    }

    fn visit_binary(
        &mut self,
        ctx: &AstContext,
        _: ExprId,
        _: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    ) -> usize {
        1 + dispatch(self, ctx, lhs) + dispatch(self, ctx, rhs)
    }

    fn visit_defined_binary(
        &mut self,
        ctx: &AstContext,
        _: ExprId,
        _: Name,
        lhs: ExprId,
        rhs: ExprId,
    ) -> usize {
        1 + dispatch(self, ctx, lhs) + dispatch(self, ctx, rhs)
    }

    fn visit_intrinsic_call(
        &mut self,
        ctx: &AstContext,
        _: ExprId,
        _: IntrinsicFunction,
        args: &[ExprId],
    ) -> usize {
        1 + args.iter().map(|&arg| dispatch(self, ctx, arg)).sum::<usize>()
    }
}

#[test]
fn dispatch_routes_each_variant() {
    let mut ctx = AstContext::new();
    let (sum, _) = section_plus_constant(&mut ctx);
    // Designators count only their base object here, not subscripts.
    assert_eq!(dispatch(&mut Size, &ctx, sum), 5);

    let op = ctx.intern("dot");
    let neg = ctx.unary(loc(0), UnaryOp::Minus, sum);
    let call = ctx.intrinsic_call(loc(0), IntrinsicFunction::ABS, &[neg], None);
    let user = ctx.defined_binary(loc(0), op, call, call);
    let wrapped = ctx.defined_unary(loc(0), op, user);
    assert_eq!(dispatch(&mut Size, &ctx, wrapped), 1 + 1 + 2 * (1 + 1 + 5));
}
