//! Index handles and ranges for the flat AST.
//!
//! Nodes never hold pointers to each other: children are `u32` indices
//! into the owning [`ExprArena`](crate::ExprArena), and lists are
//! `(start, len)` windows into flattened side tables.

use std::fmt;

/// Macro to define `u32` index handles into an arena table.
macro_rules! define_id {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => { $(
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Index into the owning table.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    )* };
}

define_id!(
    /// Index into the expression table.
    ExprId,
    /// Index into the constant payload table.
    ConstId,
    /// Index into the declaration table.
    DeclId,
    /// Index into the array-spec table.
    ArraySpecId,
);

/// Macro to define `(start: u32, len: u16)` ranges over a flattened table.
///
/// Each generated type has an `EMPTY` constant, `new()`, `is_empty()`,
/// `len()`, `indices()`, and a `Debug` implementation showing the range as
/// `TypeName(start..end)`.
macro_rules! define_range {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => { $(
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Iterator over table indices in this range.
            #[inline]
            pub fn indices(&self) -> impl Iterator<Item = u32> {
                self.start..(self.start + u32::from(self.len))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + u32::from(self.len))
            }
        }
    )* };
}

define_range!(
    /// Range of expression ids (subscripts, cosubscripts, call arguments).
    ExprRange,
    /// Range of section subscripts for an array section.
    SectionSubscriptRange,
    /// Range of explicit-shape dimensions for an assumed-size spec.
    ExplicitShapeRange,
);

/// Range of bytes in the arena's character pool.
///
/// `len` counts the literal bytes only; the pool stores a terminating NUL
/// right after them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CharRange {
    pub start: u32,
    pub len: u32,
}

impl CharRange {
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        CharRange { start, len }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharRange({}..{})", self.start, self.start + self.len)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{CharRange, ExprId, ExprRange};
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(ExprRange, 8);
    crate::static_assert_size!(CharRange, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_id_index() {
        let id = ExprId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{id:?}"), "ExprId(42)");
    }

    #[test]
    fn test_expr_range() {
        let range = ExprRange::new(10, 5);
        assert!(!range.is_empty());
        assert_eq!(range.len(), 5);
        let indices: Vec<_> = range.indices().collect();
        assert_eq!(indices, vec![10, 11, 12, 13, 14]);
        assert_eq!(format!("{range:?}"), "ExprRange(10..15)");
    }

    #[test]
    fn test_ranges_empty() {
        assert!(ExprRange::EMPTY.is_empty());
        assert!(ExprRange::default().is_empty());
        assert!(SectionSubscriptRange::EMPTY.is_empty());
        assert!(ExplicitShapeRange::EMPTY.is_empty());
        assert!(CharRange::default().is_empty());
    }

    #[test]
    fn test_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(DeclId::new(1));
        set.insert(DeclId::new(1)); // duplicate
        set.insert(DeclId::new(2));
        assert_eq!(set.len(), 2);
    }
}
