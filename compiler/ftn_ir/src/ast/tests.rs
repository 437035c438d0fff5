use pretty_assertions::assert_eq;

use super::*;
use crate::{DeclId, ExplicitShapeRange, ExprId, ExprRange, Loc, Name};

#[test]
fn binary_levels() {
    assert_eq!(BinaryOp::Eqv.level(), OperatorLevel::Logical);
    assert_eq!(BinaryOp::GreaterThanEqual.level(), OperatorLevel::Relational);
    assert_eq!(BinaryOp::Concat.level(), OperatorLevel::Concatenation);
    assert_eq!(BinaryOp::Power.level(), OperatorLevel::Numeric);
    assert!(OperatorLevel::Logical < OperatorLevel::Numeric);
}

#[test]
fn binary_precedence_orders_tiers() {
    assert!(BinaryOp::Power.precedence() > BinaryOp::Multiply.precedence());
    assert!(BinaryOp::Multiply.precedence() > BinaryOp::Plus.precedence());
    assert!(BinaryOp::Plus.precedence() > BinaryOp::Concat.precedence());
    assert!(BinaryOp::Concat.precedence() > BinaryOp::Equal.precedence());
    assert!(BinaryOp::Equal.precedence() > BinaryOp::And.precedence());
    assert!(BinaryOp::And.precedence() > BinaryOp::Or.precedence());
    assert!(BinaryOp::Or.precedence() > BinaryOp::Eqv.precedence());
    assert!(BinaryOp::Power.is_right_associative());
    assert!(!BinaryOp::Minus.is_right_associative());
}

#[test]
fn logical_results() {
    assert!(BinaryOp::LessThan.yields_logical());
    assert!(BinaryOp::Neqv.yields_logical());
    assert!(!BinaryOp::Concat.yields_logical());
    assert!(!BinaryOp::Divide.yields_logical());
}

#[test]
fn operator_symbols() {
    assert_eq!(UnaryOp::Not.as_symbol(), ".NOT.");
    assert_eq!(UnaryOp::Minus.level(), OperatorLevel::Numeric);
    assert_eq!(BinaryOp::NotEqual.as_symbol(), "/=");
    assert_eq!(BinaryOp::Concat.as_symbol(), "//");
    assert_eq!(BinaryOp::Power.as_symbol(), "**");
}

#[test]
fn array_spec_kind_round_trip() {
    let upper = ExprId::new(1);
    let lower = Some(ExprId::new(0));
    let specs = [
        (
            ArraySpec::ExplicitShape(ExplicitShape { lower, upper }),
            ArraySpecKind::ExplicitShape,
        ),
        (ArraySpec::AssumedShape { lower }, ArraySpecKind::AssumedShape),
        (ArraySpec::DeferredShape, ArraySpecKind::DeferredShape),
        (
            ArraySpec::AssumedSize {
                dims: ExplicitShapeRange::EMPTY,
                lower,
                star: Loc::new(9),
            },
            ArraySpecKind::AssumedSize,
        ),
        (
            ArraySpec::ImpliedShape {
                lower: None,
                star: Loc::new(4),
            },
            ArraySpecKind::ImpliedShape,
        ),
    ];
    for (spec, kind) in specs {
        assert_eq!(spec.kind(), kind);
    }
}

#[test]
fn array_spec_bounds() {
    let explicit = ArraySpec::ExplicitShape(ExplicitShape {
        lower: None,
        upper: ExprId::new(3),
    });
    assert_eq!(explicit.lower_bound(), None);
    assert_eq!(explicit.upper_bound(), Some(ExprId::new(3)));

    assert_eq!(ArraySpec::DeferredShape.lower_bound(), None);
    assert_eq!(ArraySpec::DeferredShape.upper_bound(), None);

    let assumed = ArraySpec::AssumedShape {
        lower: Some(ExprId::new(2)),
    };
    assert_eq!(assumed.lower_bound(), Some(ExprId::new(2)));
    assert_eq!(assumed.upper_bound(), None);
}

#[test]
fn designator_base() {
    let target = ExprId::new(7);
    assert_eq!(Designator::Var { decl: DeclId::new(0) }.base(), None);
    assert_eq!(
        Designator::ArrayElement {
            target,
            subscripts: ExprRange::EMPTY
        }
        .base(),
        Some(target)
    );
    assert_eq!(
        Designator::StructureComponent {
            parent: target,
            component: Name::from_raw(2)
        }
        .base(),
        Some(target)
    );
}

#[test]
fn triplet_last_expr() {
    let e = |n| Some(ExprId::new(n));
    assert_eq!(SectionSubscript::Subscript(ExprId::new(4)).last_expr(), e(4));
    assert_eq!(
        SectionSubscript::Triplet {
            lower: e(1),
            upper: e(2),
            stride: None
        }
        .last_expr(),
        e(2)
    );
    assert_eq!(
        SectionSubscript::Triplet {
            lower: e(1),
            upper: None,
            stride: None
        }
        .last_expr(),
        e(1)
    );
    assert_eq!(
        SectionSubscript::Triplet {
            lower: None,
            upper: None,
            stride: None
        }
        .last_expr(),
        None
    );
}

#[test]
fn class_groups_are_disjoint() {
    let classes = [
        ExprClass::IntegerConstant,
        ExprClass::LogicalConstant,
        ExprClass::Var,
        ExprClass::Coindexed,
        ExprClass::Unary,
        ExprClass::DefinedBinary,
        ExprClass::IntrinsicCall,
    ];
    for class in classes {
        let groups = [class.is_constant(), class.is_designator(), class.is_operator()];
        assert!(groups.iter().filter(|&&g| g).count() <= 1, "{class:?}");
    }
    assert!(ExprClass::BozConstant.is_constant());
    assert!(ExprClass::Substring.is_designator());
    assert!(ExprClass::DefinedUnary.is_operator());
    assert!(!ExprClass::IntrinsicCall.is_operator());
}

#[test]
fn decl_flags() {
    let flags = DeclFlags::ARGUMENT | DeclFlags::USED_AS_VARIABLE;
    assert!(flags.contains(DeclFlags::ARGUMENT));
    assert!(!flags.contains(DeclFlags::PARAMETER));
    assert_eq!(DeclFlags::default(), DeclFlags::empty());
}
