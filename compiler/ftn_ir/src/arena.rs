//! Index-based arena for the expression tree.
//!
//! - Contiguous storage for all nodes and payloads of one compilation
//! - Nodes are addressed by index, never relocated, never freed singly
//! - Bulk teardown when the arena is dropped
//!
//! [`ExprArena`] uses struct-of-arrays layout: `exprs` and `types` are
//! parallel arrays indexed by [`ExprId`]. Everything a node needs beyond
//! its fixed-size kind lives in a side table addressed by an id or range.

use crate::ast::{ArraySpec, Constant, Expr, ExplicitShape, SectionSubscript};
use crate::{
    ArraySpecId, CharRange, ConstId, ExplicitShapeRange, ExprId, ExprRange,
    SectionSubscriptRange, TypeId,
};

/// Convert a table length to a `u32` index.
///
/// # Panics
/// Panics if the table has outgrown the `u32` index space.
#[track_caller]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    match u32::try_from(len) {
        Ok(n) => n,
        Err(_) => {
            tracing::error!(len, what, "arena index space exhausted");
            panic!("too many {what}: {len} exceeds u32::MAX")
        }
    }
}

/// Convert a list length to a `u16` range length.
///
/// # Panics
/// Panics if the list is longer than `u16::MAX`.
#[track_caller]
pub(crate) fn to_u16(len: usize, what: &str) -> u16 {
    match u16::try_from(len) {
        Ok(n) => n,
        Err(_) => {
            tracing::error!(len, what, "list too long for a range");
            panic!("{what} too long: {len} exceeds u16::MAX")
        }
    }
}

/// Storage for every node and payload built during one compilation.
///
/// # Index Spaces
///
/// - `exprs`/`types`: parallel arrays indexed by [`ExprId`]
/// - `constants`: indexed by [`ConstId`]
/// - `expr_lists`: flat `Vec<ExprId>` indexed by [`ExprRange`]
/// - `section_subscripts`: indexed by [`SectionSubscriptRange`]
/// - `explicit_shapes`: indexed by [`ExplicitShapeRange`]
/// - `array_specs`: indexed by [`ArraySpecId`]
/// - `chars`: byte pool indexed by [`CharRange`], each run NUL-terminated
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    /// Expression nodes (parallel with `types`).
    exprs: Vec<Expr>,
    /// Semantic type slots; `None` until resolved (parallel with `exprs`).
    types: Vec<Option<TypeId>>,
    /// Literal payloads.
    constants: Vec<Constant>,
    /// Flattened subscript, cosubscript and argument lists.
    expr_lists: Vec<ExprId>,
    /// Flattened array-section subscript lists.
    section_subscripts: Vec<SectionSubscript>,
    /// Leading dimensions of assumed-size specs.
    explicit_shapes: Vec<ExplicitShape>,
    /// Array shape specs.
    array_specs: Vec<ArraySpec>,
    /// Character literal bytes.
    chars: Vec<u8>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena pre-allocated based on source length.
    ///
    /// Heuristic: ~1 expression per 20 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 20;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            types: Vec::with_capacity(estimated),
            constants: Vec::with_capacity(estimated / 4),
            expr_lists: Vec::with_capacity(estimated / 4),
            ..Self::default()
        }
    }

    // ===== Expressions =====

    /// Allocate an expression with its initial type slot.
    #[inline]
    pub(crate) fn alloc_expr(&mut self, expr: Expr, ty: Option<TypeId>) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        self.types.push(ty);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Type slot of an expression.
    #[inline]
    #[track_caller]
    pub fn expr_type(&self, id: ExprId) -> Option<TypeId> {
        self.types[id.index()]
    }

    /// Overwrite a type slot, returning the previous value.
    #[inline]
    #[track_caller]
    pub(crate) fn set_expr_type(&mut self, id: ExprId, ty: TypeId) -> Option<TypeId> {
        self.types[id.index()].replace(ty)
    }

    /// Ids of every expression whose type slot is still empty.
    pub fn untyped_exprs(&self) -> impl Iterator<Item = ExprId> + '_ {
        self.types
            .iter()
            .enumerate()
            .filter(|(_, ty)| ty.is_none())
            .map(|(i, _)| ExprId::new(to_u32(i, "expressions")))
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    // ===== Constants =====

    pub(crate) fn alloc_constant(&mut self, constant: Constant) -> ConstId {
        let id = ConstId::new(to_u32(self.constants.len(), "constants"));
        self.constants.push(constant);
        id
    }

    /// Get constant payload by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_constant(&self, id: ConstId) -> &Constant {
        &self.constants[id.index()]
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get_constant_mut(&mut self, id: ConstId) -> &mut Constant {
        &mut self.constants[id.index()]
    }

    // ===== Expression lists =====

    /// Allocate expression list, return range.
    pub(crate) fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend(exprs);
        let len = to_u16(self.expr_lists.len() - start as usize, "expression list");
        if len == 0 {
            ExprRange::EMPTY
        } else {
            ExprRange::new(start, len)
        }
    }

    /// Get expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // ===== Section subscripts =====

    pub(crate) fn alloc_section_subscripts(
        &mut self,
        subscripts: impl IntoIterator<Item = SectionSubscript>,
    ) -> SectionSubscriptRange {
        let start = to_u32(self.section_subscripts.len(), "section subscripts");
        self.section_subscripts.extend(subscripts);
        let len = to_u16(
            self.section_subscripts.len() - start as usize,
            "section subscript list",
        );
        if len == 0 {
            SectionSubscriptRange::EMPTY
        } else {
            SectionSubscriptRange::new(start, len)
        }
    }

    #[inline]
    pub fn get_section_subscripts(&self, range: SectionSubscriptRange) -> &[SectionSubscript] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.section_subscripts[start..start + range.len()]
    }

    // ===== Array specs =====

    pub(crate) fn alloc_explicit_shapes(
        &mut self,
        shapes: impl IntoIterator<Item = ExplicitShape>,
    ) -> ExplicitShapeRange {
        let start = to_u32(self.explicit_shapes.len(), "explicit shapes");
        self.explicit_shapes.extend(shapes);
        let len = to_u16(
            self.explicit_shapes.len() - start as usize,
            "explicit shape list",
        );
        if len == 0 {
            ExplicitShapeRange::EMPTY
        } else {
            ExplicitShapeRange::new(start, len)
        }
    }

    #[inline]
    pub fn get_explicit_shapes(&self, range: ExplicitShapeRange) -> &[ExplicitShape] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.explicit_shapes[start..start + range.len()]
    }

    pub(crate) fn alloc_array_spec(&mut self, spec: ArraySpec) -> ArraySpecId {
        let id = ArraySpecId::new(to_u32(self.array_specs.len(), "array specs"));
        self.array_specs.push(spec);
        id
    }

    /// Get array spec by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_array_spec(&self, id: ArraySpecId) -> &ArraySpec {
        &self.array_specs[id.index()]
    }

    // ===== Character data =====

    /// Copy bytes into the pool followed by a NUL terminator.
    pub(crate) fn alloc_chars(&mut self, bytes: &[u8]) -> CharRange {
        let start = to_u32(self.chars.len(), "character bytes");
        let len = to_u32(bytes.len(), "character literal");
        self.chars.reserve(bytes.len() + 1);
        self.chars.extend_from_slice(bytes);
        self.chars.push(0);
        CharRange::new(start, len)
    }

    /// Literal bytes without the terminator.
    #[inline]
    pub fn get_chars(&self, range: CharRange) -> &[u8] {
        let start = range.start as usize;
        &self.chars[start..start + range.len()]
    }

    /// Literal bytes including the NUL terminator.
    #[inline]
    pub fn get_chars_with_nul(&self, range: CharRange) -> &[u8] {
        let start = range.start as usize;
        &self.chars[start..=start + range.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ExprKind;
    use crate::Loc;

    fn leaf(n: u32) -> Expr {
        Expr::new(
            ExprKind::Constant(ConstId::new(n)),
            Loc::new(n),
            Loc::new(n),
        )
    }

    #[test]
    fn test_alloc_expr() {
        let mut arena = ExprArena::new();

        let id1 = arena.alloc_expr(leaf(1), None);
        let id2 = arena.alloc_expr(leaf(2), Some(TypeId::INTEGER));

        assert_eq!(id1.index(), 0);
        assert_eq!(id2.index(), 1);
        assert_eq!(arena.expr_count(), 2);
        assert_eq!(arena.get_expr(id2).loc(), Loc::new(2));
        assert_eq!(arena.expr_type(id1), None);
        assert_eq!(arena.expr_type(id2), Some(TypeId::INTEGER));
    }

    #[test]
    fn test_set_expr_type_returns_previous() {
        let mut arena = ExprArena::new();
        let id = arena.alloc_expr(leaf(0), None);

        assert_eq!(arena.set_expr_type(id, TypeId::REAL), None);
        assert_eq!(arena.set_expr_type(id, TypeId::LOGICAL), Some(TypeId::REAL));
        assert_eq!(arena.expr_type(id), Some(TypeId::LOGICAL));
    }

    #[test]
    fn test_untyped_exprs() {
        let mut arena = ExprArena::new();
        let a = arena.alloc_expr(leaf(0), None);
        let _ = arena.alloc_expr(leaf(1), Some(TypeId::REAL));
        let c = arena.alloc_expr(leaf(2), None);

        let untyped: Vec<_> = arena.untyped_exprs().collect();
        assert_eq!(untyped, vec![a, c]);
    }

    #[test]
    fn test_alloc_expr_list() {
        let mut arena = ExprArena::new();
        let ids: Vec<_> = (0..3).map(|n| arena.alloc_expr(leaf(n), None)).collect();

        let range = arena.alloc_expr_list(ids.iter().copied());
        assert_eq!(range.len(), 3);
        assert_eq!(arena.get_expr_list(range), ids.as_slice());

        let empty = arena.alloc_expr_list(std::iter::empty());
        assert_eq!(empty, ExprRange::EMPTY);
        assert!(arena.get_expr_list(empty).is_empty());
    }

    #[test]
    fn test_chars_are_nul_terminated() {
        let mut arena = ExprArena::new();
        let a = arena.alloc_chars(b"hello");
        let b = arena.alloc_chars(b"");

        assert_eq!(arena.get_chars(a), b"hello");
        assert_eq!(arena.get_chars_with_nul(a), b"hello\0");
        assert_eq!(arena.get_chars(b), b"");
        assert_eq!(arena.get_chars_with_nul(b), b"\0");
    }

    #[test]
    fn test_with_capacity() {
        let arena = ExprArena::with_capacity(2000);
        assert!(arena.is_empty());
        assert!(arena.exprs.capacity() >= 100);
    }

    #[test]
    #[should_panic(expected = "exceeds u16::MAX")]
    fn test_list_length_limit() {
        let _ = to_u16(usize::from(u16::MAX) + 1, "expression list");
    }
}
