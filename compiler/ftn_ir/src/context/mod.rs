//! The per-compilation AST context.
//!
//! [`AstContext`] owns the arena, the type pool, the identifier interner
//! and the declaration table. Every node is built through one of its
//! factory methods; there is no other way to obtain an [`ExprId`]. Two
//! contexts never share storage, and ids from one are meaningless in the
//! other.
//!
//! # Module Structure
//!
//! - `constants`: literal factories, typed readers, kind selectors, folding
//! - `designators`: variable, element, section, substring and friends
//! - `operators`: unary, binary, defined operators and intrinsic calls
//! - `array_specs`: the five shape-spec factories
//! - `print`: diagnostic rendering

mod array_specs;
mod constants;
mod designators;
mod operators;
mod print;

pub use print::ExprDisplay;

use tracing::{debug, error, trace};

use crate::ast::{
    Constant, ConstantValue, DeclFlags, Designator, Expr, ExprClass, ExprKind, SectionSubscript,
    VarDecl,
};
use crate::stack::ensure_sufficient_stack;
use crate::{
    DeclId, ExprArena, ExprId, ExprRange, Loc, Name, Span, StringInterner, TypeId, TypePool,
};

/// Arena context for one compilation.
#[derive(Clone, Debug, Default)]
pub struct AstContext {
    arena: ExprArena,
    types: TypePool,
    interner: StringInterner,
    decls: Vec<VarDecl>,
}

impl AstContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with an arena sized for `source_len` bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        AstContext {
            arena: ExprArena::with_capacity(source_len),
            ..Self::default()
        }
    }

    #[inline]
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    #[inline]
    pub fn types(&self) -> &TypePool {
        &self.types
    }

    #[inline]
    pub fn types_mut(&mut self) -> &mut TypePool {
        &mut self.types
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn intern(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    #[track_caller]
    pub fn lookup(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    // ===== Declarations =====

    /// Declare a variable of type `ty` named at `loc`.
    pub fn declare_var(&mut self, name: Name, loc: Loc, ty: TypeId, flags: DeclFlags) -> DeclId {
        let id = DeclId::new(crate::arena::to_u32(self.decls.len(), "declarations"));
        self.decls.push(VarDecl {
            name,
            loc,
            ty,
            flags,
            init: None,
            first_use: None,
        });
        id
    }

    /// Declare a named constant with its initializer.
    pub fn declare_parameter(&mut self, name: Name, loc: Loc, ty: TypeId, init: ExprId) -> DeclId {
        let id = self.declare_var(name, loc, ty, DeclFlags::PARAMETER);
        self.decls[id.index()].init = Some(init);
        id
    }

    /// Get declaration by ID.
    ///
    /// # Panics
    /// Panics if `id` did not come from this context.
    #[inline]
    #[track_caller]
    pub fn decl(&self, id: DeclId) -> &VarDecl {
        &self.decls[id.index()]
    }

    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    // ===== Nodes =====

    /// Allocate a node whose own text runs from `loc` to `end`.
    fn alloc(&mut self, kind: ExprKind, loc: Loc, end: Loc, ty: Option<TypeId>) -> ExprId {
        let id = self.arena.alloc_expr(Expr::new(kind, loc, end), ty);
        trace!(?id, class = ?self.class(id), ?loc, ?end, "alloc expr");
        id
    }

    /// Get expression by ID.
    #[inline]
    #[track_caller]
    pub fn expr(&self, id: ExprId) -> &Expr {
        self.arena.get_expr(id)
    }

    #[inline]
    #[track_caller]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        self.arena.get_expr(id).kind()
    }

    /// Semantic type, or `None` while unresolved.
    #[inline]
    #[track_caller]
    pub fn expr_type(&self, id: ExprId) -> Option<TypeId> {
        self.arena.expr_type(id)
    }

    /// Assign a node's semantic type.
    ///
    /// Normally called once per node by Sema; later calls (re-analysis
    /// after error recovery) overwrite the slot.
    #[track_caller]
    pub fn resolve_type(&mut self, id: ExprId, ty: TypeId) {
        if let Some(previous) = self.arena.set_expr_type(id, ty) {
            if previous != ty {
                debug!(?id, ?previous, new = ?ty, "type slot overwritten");
            }
        }
    }

    /// Nodes whose type slot is still empty, in allocation order.
    ///
    /// A driver can refuse to start code generation while this is
    /// non-empty.
    pub fn unresolved_exprs(&self) -> Vec<ExprId> {
        self.arena.untyped_exprs().collect()
    }

    /// Number of nodes built so far.
    pub fn expr_count(&self) -> usize {
        self.arena.expr_count()
    }

    // ===== Dispatch =====

    /// Concrete variant of a node.
    pub fn class(&self, id: ExprId) -> ExprClass {
        match *self.kind(id) {
            ExprKind::Constant(c) => match self.arena.get_constant(c).value() {
                ConstantValue::Integer(_) => ExprClass::IntegerConstant,
                ConstantValue::Real(_) => ExprClass::RealConstant,
                ConstantValue::DoublePrecision(_) => ExprClass::DoublePrecisionConstant,
                ConstantValue::Complex { .. } => ExprClass::ComplexConstant,
                ConstantValue::Character(_) => ExprClass::CharacterConstant,
                ConstantValue::Boz { .. } => ExprClass::BozConstant,
                ConstantValue::Logical(_) => ExprClass::LogicalConstant,
            },
            ExprKind::Designator(d) => match d {
                Designator::Var { .. } => ExprClass::Var,
                Designator::ArrayElement { .. } => ExprClass::ArrayElement,
                Designator::ArraySection { .. } => ExprClass::ArraySection,
                Designator::Substring { .. } => ExprClass::Substring,
                Designator::ComplexPart { .. } => ExprClass::ComplexPart,
                Designator::StructureComponent { .. } => ExprClass::StructureComponent,
                Designator::Coindexed { .. } => ExprClass::Coindexed,
            },
            ExprKind::Unary { .. } => ExprClass::Unary,
            ExprKind::DefinedUnary { .. } => ExprClass::DefinedUnary,
            ExprKind::Binary { .. } => ExprClass::Binary,
            ExprKind::DefinedBinary { .. } => ExprClass::DefinedBinary,
            ExprKind::IntrinsicCall { .. } => ExprClass::IntrinsicCall,
        }
    }

    /// Constant payload, if `id` is a constant.
    pub fn constant(&self, id: ExprId) -> Option<&Constant> {
        match *self.kind(id) {
            ExprKind::Constant(c) => Some(self.arena.get_constant(c)),
            _ => None,
        }
    }

    /// Addressing form, if `id` is a designator.
    pub fn designator(&self, id: ExprId) -> Option<&Designator> {
        match self.kind(id) {
            ExprKind::Designator(d) => Some(d),
            _ => None,
        }
    }

    // ===== Source ranges =====
    //
    // Extents are derived from children on every query, never cached, so
    // a kind selector attached after the parent was built still counts.

    /// First location covered by the node.
    ///
    /// Binary operators start at their left operand; designators with a
    /// base object start where the base starts.
    pub fn min_loc(&self, id: ExprId) -> Loc {
        let expr = self.expr(id);
        match *expr.kind() {
            ExprKind::Binary { lhs, .. } | ExprKind::DefinedBinary { lhs, .. } => {
                ensure_sufficient_stack(|| self.min_loc(lhs))
            }
            ExprKind::Designator(d) => match d.base() {
                Some(base) => ensure_sufficient_stack(|| self.min_loc(base)),
                None => expr.loc(),
            },
            _ => expr.loc(),
        }
    }

    /// Last location covered by the node (inclusive).
    ///
    /// Constants end at their kind selector, else their own text;
    /// operators end at their last operand; list forms end at their last
    /// entry.
    pub fn max_loc(&self, id: ExprId) -> Loc {
        let expr = self.expr(id);
        match *expr.kind() {
            ExprKind::Constant(c) => match self.arena.get_constant(c).kind_selector() {
                Some(selector) => ensure_sufficient_stack(|| self.max_loc(selector)),
                None => expr.end(),
            },
            ExprKind::Designator(d) => self.designator_end(expr, &d),
            ExprKind::Unary { operand, .. } | ExprKind::DefinedUnary { operand, .. } => {
                ensure_sufficient_stack(|| self.max_loc(operand))
            }
            ExprKind::Binary { rhs, .. } | ExprKind::DefinedBinary { rhs, .. } => {
                ensure_sufficient_stack(|| self.max_loc(rhs))
            }
            ExprKind::IntrinsicCall { args, .. } => self.list_end(expr, args),
        }
    }

    /// `min_loc..=max_loc` for underlining in diagnostics.
    pub fn span(&self, id: ExprId) -> Span {
        let start = self.min_loc(id);
        Span::new(start, self.max_loc(id).max(start))
    }

    fn designator_end(&self, expr: &Expr, designator: &Designator) -> Loc {
        match *designator {
            Designator::Var { .. }
            | Designator::ComplexPart { .. }
            | Designator::StructureComponent { .. } => expr.end(),
            Designator::ArrayElement { subscripts: list, .. }
            | Designator::Coindexed {
                cosubscripts: list, ..
            } => self.list_end(expr, list),
            Designator::ArraySection { target, subscripts } => {
                let last = self
                    .arena
                    .get_section_subscripts(subscripts)
                    .iter()
                    .rev()
                    .find_map(SectionSubscript::last_expr);
                ensure_sufficient_stack(|| self.max_loc(last.unwrap_or(target)))
            }
            Designator::Substring { target, start, end } => {
                let last = end.or(start).unwrap_or(target);
                ensure_sufficient_stack(|| self.max_loc(last))
            }
        }
    }

    /// End of the last list entry, or the node's own end for an empty list.
    fn list_end(&self, expr: &Expr, list: ExprRange) -> Loc {
        match self.arena.get_expr_list(list).last() {
            Some(&last) => ensure_sufficient_stack(|| self.max_loc(last)),
            None => expr.end(),
        }
    }
}

/// Log and abort on a broken construction contract.
#[track_caller]
fn contract_violation(id: Option<ExprId>, message: &str) -> ! {
    error!(?id, message, "AST construction contract violated");
    panic!("{message}")
}
