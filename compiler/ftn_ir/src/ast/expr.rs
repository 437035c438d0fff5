//! Expression nodes.
//!
//! Children are `ExprId` indices into the same arena, lists are ranges
//! into flattened side tables, and constant payloads live in their own
//! table behind a `ConstId`. The semantic type slot is stored in a
//! parallel array in [`ExprArena`](crate::ExprArena), not in the node.

use std::fmt;

use super::designator::Designator;
use super::intrinsic::IntrinsicFunction;
use super::operators::{BinaryOp, UnaryOp};
use crate::{ConstId, ExprId, ExprRange, Loc, Name};

/// Expression node.
///
/// `loc` is the node's own point (operator, literal start, name start) and
/// `end` is the last location of the node's own text: a literal's last
/// character, a name's last letter, a `%RE` selector's last letter. For
/// nodes whose extent is set by their children, `end` is `loc`. Full
/// extents are derived from children on demand by
/// [`AstContext::span`](crate::AstContext::span), so they follow later
/// edits such as an attached kind selector.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    kind: ExprKind,
    loc: Loc,
    end: Loc,
}

impl Expr {
    pub(crate) fn new(kind: ExprKind, loc: Loc, end: Loc) -> Self {
        Expr {
            kind,
            loc,
            end: end.max(loc),
        }
    }

    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    #[inline]
    pub fn loc(&self) -> Loc {
        self.loc
    }

    /// Last location of the node's own text.
    #[inline]
    pub fn end(&self) -> Loc {
        self.end
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}..={:?}", self.kind, self.loc, self.end)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Literal constant; payload in the constant table.
    Constant(ConstId),
    Designator(Designator),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    /// `.NAME. operand`, resolved to a function by Sema.
    DefinedUnary {
        op: Name,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
    /// `lhs .NAME. rhs`, resolved to a function by Sema.
    DefinedBinary {
        op: Name,
        lhs: ExprId,
        rhs: ExprId,
    },
    IntrinsicCall {
        function: IntrinsicFunction,
        args: ExprRange,
    },
}

/// Flat tag with one entry per concrete node variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprClass {
    IntegerConstant,
    RealConstant,
    DoublePrecisionConstant,
    ComplexConstant,
    CharacterConstant,
    BozConstant,
    LogicalConstant,

    Var,
    ArrayElement,
    ArraySection,
    Substring,
    ComplexPart,
    StructureComponent,
    Coindexed,

    Unary,
    DefinedUnary,
    Binary,
    DefinedBinary,

    IntrinsicCall,
}

impl ExprClass {
    pub const fn is_constant(self) -> bool {
        matches!(
            self,
            Self::IntegerConstant
                | Self::RealConstant
                | Self::DoublePrecisionConstant
                | Self::ComplexConstant
                | Self::CharacterConstant
                | Self::BozConstant
                | Self::LogicalConstant
        )
    }

    pub const fn is_designator(self) -> bool {
        matches!(
            self,
            Self::Var
                | Self::ArrayElement
                | Self::ArraySection
                | Self::Substring
                | Self::ComplexPart
                | Self::StructureComponent
                | Self::Coindexed
        )
    }

    /// Built-in or defined, unary or binary.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Unary | Self::DefinedUnary | Self::Binary | Self::DefinedBinary
        )
    }
}
