use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_pre_interned_ids() {
    let pool = TypePool::new();
    assert_eq!(pool.kind(TypeId::INTEGER), TypeKind::Integer { kind: 4 });
    assert_eq!(pool.kind(TypeId::DOUBLE_PRECISION), TypeKind::Real { kind: 8 });
    assert_eq!(pool.kind(TypeId::CHARACTER), TypeKind::Character { len: Some(1) });
    assert_eq!(pool.kind(TypeId::QUAD), TypeKind::Real { kind: 16 });
    assert_eq!(pool.len(), TypeId::FIRST_COMPOUND as usize);
    assert!(TypeId::LOGICAL.is_pre_interned());
}

#[test]
fn test_intern_dedup() {
    let mut pool = TypePool::new();
    assert_eq!(pool.real(8), TypeId::DOUBLE_PRECISION);
    let a = pool.array(TypeId::REAL, 2);
    let b = pool.array(TypeId::REAL, 2);
    let c = pool.array(TypeId::REAL, 3);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(!a.is_pre_interned());
}

#[test]
fn test_array_queries() {
    let mut pool = TypePool::new();
    let arr = pool.array(TypeId::INTEGER, 3);
    assert_eq!(pool.element_type(arr), Some(TypeId::INTEGER));
    assert_eq!(pool.rank(arr), 3);
    assert_eq!(pool.element_type(TypeId::INTEGER), None);
    assert_eq!(pool.array(TypeId::LOGICAL, 0), TypeId::LOGICAL);
}

#[test]
fn test_float_semantics_by_kind() {
    let mut pool = TypePool::new();
    assert_eq!(pool.float_semantics(TypeId::HALF), Some(FloatSemantics::Half));
    assert_eq!(pool.float_semantics(TypeId::REAL), Some(FloatSemantics::Single));
    assert_eq!(
        pool.float_semantics(TypeId::DOUBLE_COMPLEX),
        Some(FloatSemantics::Double)
    );
    assert_eq!(pool.float_semantics(TypeId::QUAD), Some(FloatSemantics::Quad));
    assert_eq!(pool.float_semantics(TypeId::INTEGER), None);
    let odd = pool.real(10);
    assert_eq!(pool.float_semantics(odd), None);
}

#[test]
fn test_character_len() {
    let mut pool = TypePool::new();
    let c5 = pool.character(Some(5));
    let assumed = pool.character(None);
    assert!(pool.is_character(c5));
    assert_eq!(pool.character_len(c5), Some(5));
    assert_eq!(pool.character_len(assumed), None);
    assert_eq!(pool.character_len(TypeId::INTEGER), None);
}

#[test]
fn test_type_display() {
    let mut pool = TypePool::new();
    let arr = pool.array(TypeId::DOUBLE_PRECISION, 2);
    let assumed = pool.character(None);
    assert_eq!(pool.display(arr).to_string(), "REAL(8), DIMENSION(:,:)");
    assert_eq!(pool.display(assumed).to_string(), "CHARACTER(LEN=*)");
    assert_eq!(pool.display(TypeId::LOGICAL).to_string(), "LOGICAL(4)");
}
