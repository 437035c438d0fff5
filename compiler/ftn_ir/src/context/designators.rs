//! Designator factories.
//!
//! Every designator with a base object starts where that object starts.
//! Where a designator ends depends on its form; see each factory.

use super::{contract_violation, AstContext};
use crate::ast::{ComplexPart, Designator, ExprKind, SectionSubscript};
use crate::numeric::ApInt;
use crate::{DeclId, ExprId, Loc, Name, TypeId};

impl AstContext {
    /// `end` is the last location of the designator's own text; children
    /// that follow it extend the range on query.
    fn alloc_designator(
        &mut self,
        designator: Designator,
        loc: Loc,
        end: Loc,
        ty: Option<TypeId>,
    ) -> ExprId {
        self.alloc(ExprKind::Designator(designator), loc, end, ty)
    }

    /// Reference to a declared variable.
    ///
    /// Marks the declaration as used and records the first use location.
    /// The span covers the variable's name.
    pub fn var(&mut self, loc: Loc, decl: DeclId) -> ExprId {
        let record = &mut self.decls[decl.index()];
        record.mark_used_as_variable(loc);
        let (name, ty) = (record.name, record.ty);

        let name_len = u32::try_from(self.interner.lookup(name).len()).unwrap_or(u32::MAX);
        let end = loc.advance(name_len.saturating_sub(1));
        self.alloc_designator(Designator::Var { decl }, loc, end, Some(ty))
    }

    /// `target(subscripts)`.
    ///
    /// The element type is taken from the target's resolved array type, so
    /// the target must be typed first. Ends at the last subscript.
    ///
    /// # Panics
    /// Panics if the target has no resolved array type.
    #[track_caller]
    pub fn array_element(&mut self, loc: Loc, target: ExprId, subscripts: &[ExprId]) -> ExprId {
        let element = self
            .expr_type(target)
            .and_then(|ty| self.types.element_type(ty));
        let Some(element) = element else {
            contract_violation(
                Some(target),
                "array element target has no resolved array type",
            )
        };
        let subscripts = self.arena.alloc_expr_list(subscripts.iter().copied());
        self.alloc_designator(
            Designator::ArrayElement { target, subscripts },
            loc,
            loc,
            Some(element),
        )
    }

    /// `target(s, l:u:s, ...)`. Typed like its target until Sema computes
    /// the section's rank.
    pub fn array_section(
        &mut self,
        loc: Loc,
        target: ExprId,
        subscripts: &[SectionSubscript],
    ) -> ExprId {
        let ty = self.expr_type(target);
        let subscripts = self.arena.alloc_section_subscripts(subscripts.iter().copied());
        self.alloc_designator(
            Designator::ArraySection { target, subscripts },
            loc,
            loc,
            ty,
        )
    }

    /// `target([start]:[end])`.
    ///
    /// Ends at the end bound, else the start bound, else the target; with
    /// neither bound the span is exactly the target's.
    ///
    /// Always `CHARACTER`. The length is known only when every bound that
    /// matters is an integer constant: a missing start is 1 and a missing
    /// end is the target's known length.
    pub fn substring(
        &mut self,
        loc: Loc,
        target: ExprId,
        start: Option<ExprId>,
        end: Option<ExprId>,
    ) -> ExprId {
        let len = self.substring_len(target, start, end);
        let ty = self.types.character(len);
        self.alloc_designator(
            Designator::Substring { target, start, end },
            loc,
            loc,
            Some(ty),
        )
    }

    fn substring_len(
        &self,
        target: ExprId,
        start: Option<ExprId>,
        end: Option<ExprId>,
    ) -> Option<u32> {
        let first = match start {
            Some(bound) => self.integer_value(bound).and_then(ApInt::to_u64)?,
            None => 1,
        };
        let last = match end {
            Some(bound) => self.integer_value(bound).and_then(ApInt::to_u64)?,
            None => u64::from(
                self.expr_type(target)
                    .and_then(|ty| self.types.character_len(ty))?,
            ),
        };
        // An empty range is a zero-length string.
        let len = last.checked_sub(first).map_or(0, |d| d.saturating_add(1));
        u32::try_from(len).ok()
    }

    /// `target%RE` / `target%IM`, ending at the selector text.
    ///
    /// Typed as the real part type when the target is a resolved complex.
    pub fn complex_part(
        &mut self,
        loc: Loc,
        target: ExprId,
        part: ComplexPart,
        part_loc: Loc,
    ) -> ExprId {
        let ty = self
            .expr_type(target)
            .and_then(|ty| self.types.complex_part_type(ty));
        self.alloc_designator(
            Designator::ComplexPart { target, part },
            loc,
            part_loc.advance(1),
            ty,
        )
    }

    /// `parent%component`, ending at the component name.
    ///
    /// The component type comes from the derived-type definition, which
    /// Sema supplies.
    pub fn structure_component(
        &mut self,
        loc: Loc,
        parent: ExprId,
        component: Name,
        component_loc: Loc,
        ty: Option<TypeId>,
    ) -> ExprId {
        let name_len = u32::try_from(self.interner.lookup(component).len()).unwrap_or(u32::MAX);
        self.alloc_designator(
            Designator::StructureComponent { parent, component },
            loc,
            component_loc.advance(name_len.saturating_sub(1)),
            ty,
        )
    }

    /// `target[cosubscripts]`, typed like its target.
    pub fn coindexed(&mut self, loc: Loc, target: ExprId, cosubscripts: &[ExprId]) -> ExprId {
        let ty = self.expr_type(target);
        let cosubscripts = self.arena.alloc_expr_list(cosubscripts.iter().copied());
        self.alloc_designator(
            Designator::Coindexed {
                target,
                cosubscripts,
            },
            loc,
            loc,
            ty,
        )
    }
}
