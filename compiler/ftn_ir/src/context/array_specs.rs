//! Array shape specification factories.
//!
//! One factory per kind, each accepting only the bound fields its grammar
//! allows. Specs are declaration data, not expressions; they live in
//! their own arena table.

use tracing::trace;

use super::AstContext;
use crate::ast::{ArraySpec, ExplicitShape};
use crate::{ArraySpecId, ExplicitShapeRange, ExprId, Loc, TypeId};

impl AstContext {
    fn alloc_array_spec(&mut self, spec: ArraySpec) -> ArraySpecId {
        let id = self.arena.alloc_array_spec(spec);
        trace!(?id, kind = ?spec.kind(), "alloc array spec");
        id
    }

    /// `[lower :] upper`
    pub fn explicit_shape_spec(&mut self, lower: Option<ExprId>, upper: ExprId) -> ArraySpecId {
        self.alloc_array_spec(ArraySpec::ExplicitShape(ExplicitShape { lower, upper }))
    }

    /// `[lower] :`
    pub fn assumed_shape_spec(&mut self, lower: Option<ExprId>) -> ArraySpecId {
        self.alloc_array_spec(ArraySpec::AssumedShape { lower })
    }

    /// `:`
    pub fn deferred_shape_spec(&mut self) -> ArraySpecId {
        self.alloc_array_spec(ArraySpec::DeferredShape)
    }

    /// `[explicit-shape-spec ,]... [lower :] *`
    pub fn assumed_size_spec(
        &mut self,
        dims: &[ExplicitShape],
        lower: Option<ExprId>,
        star: Loc,
    ) -> ArraySpecId {
        let dims = self.arena.alloc_explicit_shapes(dims.iter().copied());
        self.alloc_array_spec(ArraySpec::AssumedSize { dims, lower, star })
    }

    /// `[lower :] *`, shape taken from the initializer.
    pub fn implied_shape_spec(&mut self, lower: Option<ExprId>, star: Loc) -> ArraySpecId {
        self.alloc_array_spec(ArraySpec::ImpliedShape { lower, star })
    }

    /// Get array spec by ID.
    #[inline]
    #[track_caller]
    pub fn array_spec(&self, id: ArraySpecId) -> &ArraySpec {
        self.arena.get_array_spec(id)
    }

    /// Leading dimensions of an assumed-size spec.
    #[inline]
    pub fn explicit_shapes(&self, range: ExplicitShapeRange) -> &[ExplicitShape] {
        self.arena.get_explicit_shapes(range)
    }

    /// Number of dimensions a spec list declares.
    pub fn spec_rank(&self, specs: &[ArraySpecId]) -> usize {
        specs
            .iter()
            .map(|&id| match self.array_spec(id) {
                ArraySpec::AssumedSize { dims, .. } => dims.len() + 1,
                _ => 1,
            })
            .sum()
    }

    /// Array type of `element` with the rank declared by `specs`.
    pub fn array_type(&mut self, element: TypeId, specs: &[ArraySpecId]) -> TypeId {
        let rank = u8::try_from(self.spec_rank(specs)).unwrap_or(u8::MAX);
        self.types.array(element, rank)
    }
}
