//! Semantic types referenced from expression type slots.
//!
//! The AST core only needs enough of the type system to compute the
//! handful of result types that are structural (logical results of
//! relational operators, concatenation lengths, array element types,
//! float widths for real literals). Everything else is Sema's business.
//!
//! Intrinsic types are pre-interned at fixed indices so that literal
//! factories can stamp them without touching the pool.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::numeric::FloatSemantics;

/// Interned type identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-interned intrinsic types
    pub const INTEGER: TypeId = TypeId(0);
    pub const REAL: TypeId = TypeId(1);
    pub const DOUBLE_PRECISION: TypeId = TypeId(2);
    pub const COMPLEX: TypeId = TypeId(3);
    pub const DOUBLE_COMPLEX: TypeId = TypeId(4);
    pub const LOGICAL: TypeId = TypeId(5);
    /// `CHARACTER` with the default length of one.
    pub const CHARACTER: TypeId = TypeId(6);
    /// `REAL(KIND=2)`, IEEE half precision.
    pub const HALF: TypeId = TypeId(7);
    /// `REAL(KIND=16)`, IEEE quad precision.
    pub const QUAD: TypeId = TypeId(8);

    /// First ID for dynamically interned types.
    pub const FIRST_COMPOUND: u32 = 9;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is one of the pre-interned intrinsic types.
    #[inline]
    pub const fn is_pre_interned(self) -> bool {
        self.0 < Self::FIRST_COMPOUND
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INTEGER => write!(f, "TypeId::INTEGER"),
            Self::REAL => write!(f, "TypeId::REAL"),
            Self::DOUBLE_PRECISION => write!(f, "TypeId::DOUBLE_PRECISION"),
            Self::COMPLEX => write!(f, "TypeId::COMPLEX"),
            Self::DOUBLE_COMPLEX => write!(f, "TypeId::DOUBLE_COMPLEX"),
            Self::LOGICAL => write!(f, "TypeId::LOGICAL"),
            Self::CHARACTER => write!(f, "TypeId::CHARACTER"),
            Self::HALF => write!(f, "TypeId::HALF"),
            Self::QUAD => write!(f, "TypeId::QUAD"),
            TypeId(raw) => write!(f, "TypeId({raw})"),
        }
    }
}

/// Structure of an interned type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Integer { kind: u8 },
    /// Real with a byte-size kind (2, 4, 8 or 16).
    Real { kind: u8 },
    /// Complex whose parts are `Real { kind }`.
    Complex { kind: u8 },
    Logical { kind: u8 },
    /// `None` is an assumed length (`CHARACTER(LEN=*)`).
    Character { len: Option<u32> },
    Array { element: TypeId, rank: u8 },
}

/// Deduplicating store of [`TypeKind`]s.
#[derive(Clone, Debug)]
pub struct TypePool {
    types: Vec<TypeKind>,
    map: FxHashMap<TypeKind, TypeId>,
}

impl TypePool {
    /// Create a pool with the intrinsic types at their fixed ids.
    pub fn new() -> Self {
        let mut pool = TypePool {
            types: Vec::with_capacity(32),
            map: FxHashMap::default(),
        };
        let pre_interned = [
            (TypeId::INTEGER, TypeKind::Integer { kind: 4 }),
            (TypeId::REAL, TypeKind::Real { kind: 4 }),
            (TypeId::DOUBLE_PRECISION, TypeKind::Real { kind: 8 }),
            (TypeId::COMPLEX, TypeKind::Complex { kind: 4 }),
            (TypeId::DOUBLE_COMPLEX, TypeKind::Complex { kind: 8 }),
            (TypeId::LOGICAL, TypeKind::Logical { kind: 4 }),
            (TypeId::CHARACTER, TypeKind::Character { len: Some(1) }),
            (TypeId::HALF, TypeKind::Real { kind: 2 }),
            (TypeId::QUAD, TypeKind::Real { kind: 16 }),
        ];
        for (expected, kind) in pre_interned {
            let id = pool.intern(kind);
            debug_assert_eq!(id, expected);
        }
        pool
    }

    /// Intern a type, returning the existing id for a structurally equal type.
    pub fn intern(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.map.get(&kind) {
            return id;
        }
        let id = TypeId(crate::arena::to_u32(self.types.len(), "types"));
        self.types.push(kind);
        self.map.insert(kind, id);
        id
    }

    /// Structure of a type.
    ///
    /// # Panics
    /// Panics if `id` did not come from this pool.
    #[track_caller]
    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.types[id.index()]
    }

    pub fn character(&mut self, len: Option<u32>) -> TypeId {
        self.intern(TypeKind::Character { len })
    }

    pub fn real(&mut self, kind: u8) -> TypeId {
        self.intern(TypeKind::Real { kind })
    }

    pub fn complex(&mut self, kind: u8) -> TypeId {
        self.intern(TypeKind::Complex { kind })
    }

    /// Array type; a zero rank collapses to the element type.
    pub fn array(&mut self, element: TypeId, rank: u8) -> TypeId {
        if rank == 0 {
            return element;
        }
        self.intern(TypeKind::Array { element, rank })
    }

    /// Element type of an array type.
    pub fn element_type(&self, id: TypeId) -> Option<TypeId> {
        match self.kind(id) {
            TypeKind::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    pub fn rank(&self, id: TypeId) -> u8 {
        match self.kind(id) {
            TypeKind::Array { rank, .. } => rank,
            _ => 0,
        }
    }

    pub fn is_character(&self, id: TypeId) -> bool {
        matches!(self.kind(id), TypeKind::Character { .. })
    }

    pub fn is_complex(&self, id: TypeId) -> bool {
        matches!(self.kind(id), TypeKind::Complex { .. })
    }

    /// Length of a character type (`None` for assumed length or non-character).
    pub fn character_len(&self, id: TypeId) -> Option<u32> {
        match self.kind(id) {
            TypeKind::Character { len } => len,
            _ => None,
        }
    }

    /// Floating-point format backing a real or complex type.
    ///
    /// Returns `None` for non-floating types and for kinds without an IEEE
    /// interchange format.
    pub fn float_semantics(&self, id: TypeId) -> Option<FloatSemantics> {
        match self.kind(id) {
            TypeKind::Real { kind } | TypeKind::Complex { kind } => {
                FloatSemantics::from_bit_width(u32::from(kind) * 8)
            }
            _ => None,
        }
    }

    /// Real type of each part of a complex type.
    pub fn complex_part_type(&mut self, id: TypeId) -> Option<TypeId> {
        match self.kind(id) {
            TypeKind::Complex { kind } => Some(self.real(kind)),
            _ => None,
        }
    }

    /// Display adapter for diagnostics.
    pub fn display(&self, id: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { pool: self, id }
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a type the way it would be spelled in a declaration.
pub struct TypeDisplay<'a> {
    pool: &'a TypePool,
    id: TypeId,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pool.kind(self.id) {
            TypeKind::Integer { kind } => write!(f, "INTEGER({kind})"),
            TypeKind::Real { kind } => write!(f, "REAL({kind})"),
            TypeKind::Complex { kind } => write!(f, "COMPLEX({kind})"),
            TypeKind::Logical { kind } => write!(f, "LOGICAL({kind})"),
            TypeKind::Character { len: Some(len) } => write!(f, "CHARACTER(LEN={len})"),
            TypeKind::Character { len: None } => write!(f, "CHARACTER(LEN=*)"),
            TypeKind::Array { element, rank } => {
                write!(f, "{}", self.pool.display(element))?;
                f.write_str(", DIMENSION(")?;
                for i in 0..rank {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(":")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests;
