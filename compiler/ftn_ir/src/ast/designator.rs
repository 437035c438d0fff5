//! Designators: expressions that name a storage location.

use crate::{DeclId, ExprId, ExprRange, Name, SectionSubscriptRange};

/// Addressing form of a designator expression.
///
/// Absent substring or triplet bounds mean "whole extent" and are never
/// errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Designator {
    /// Plain reference to a declared variable.
    Var { decl: DeclId },
    /// `target(s1, s2, ...)`; arity is checked against rank by Sema.
    ArrayElement {
        target: ExprId,
        subscripts: ExprRange,
    },
    /// `target(s1, l:u:s, ...)`
    ArraySection {
        target: ExprId,
        subscripts: SectionSubscriptRange,
    },
    /// `target([start]:[end])`
    Substring {
        target: ExprId,
        start: Option<ExprId>,
        end: Option<ExprId>,
    },
    /// `target%RE` or `target%IM`
    ComplexPart { target: ExprId, part: ComplexPart },
    /// `parent%component`
    StructureComponent { parent: ExprId, component: Name },
    /// `target[c1, c2, ...]`
    Coindexed {
        target: ExprId,
        cosubscripts: ExprRange,
    },
}

impl Designator {
    /// Base object the designator is applied to, if the form has one.
    pub fn base(&self) -> Option<ExprId> {
        match *self {
            Designator::Var { .. } => None,
            Designator::ArrayElement { target, .. }
            | Designator::ArraySection { target, .. }
            | Designator::Substring { target, .. }
            | Designator::ComplexPart { target, .. }
            | Designator::Coindexed { target, .. } => Some(target),
            Designator::StructureComponent { parent, .. } => Some(parent),
        }
    }
}

/// One entry of an array-section subscript list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionSubscript {
    /// A single scalar or vector subscript.
    Subscript(ExprId),
    /// `[lower]:[upper][:stride]`
    Triplet {
        lower: Option<ExprId>,
        upper: Option<ExprId>,
        stride: Option<ExprId>,
    },
}

impl SectionSubscript {
    /// Last present component, in source order.
    pub fn last_expr(&self) -> Option<ExprId> {
        match *self {
            SectionSubscript::Subscript(expr) => Some(expr),
            SectionSubscript::Triplet {
                lower,
                upper,
                stride,
            } => stride.or(upper).or(lower),
        }
    }
}

/// Selected part of a complex value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ComplexPart {
    Re,
    Im,
}

impl ComplexPart {
    pub const fn as_str(self) -> &'static str {
        match self {
            ComplexPart::Re => "RE",
            ComplexPart::Im => "IM",
        }
    }
}
