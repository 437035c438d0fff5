//! Declaration-time array shape specifications.
//!
//! ```text
//! explicit-shape-spec := [ lower-bound : ] upper-bound
//! assumed-shape-spec  := [ lower-bound ] :
//! deferred-shape-spec := :
//! assumed-size-spec   := [ explicit-shape-spec , ]... [ lower-bound : ] *
//! implied-shape-spec  := [ lower-bound : ] *
//! ```
//!
//! Each variant carries exactly the bound fields its grammar allows.

use crate::{ExplicitShapeRange, ExprId, Loc};

/// `[lower :] upper`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplicitShape {
    pub lower: Option<ExprId>,
    pub upper: ExprId,
}

/// One array shape specification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArraySpec {
    ExplicitShape(ExplicitShape),
    AssumedShape {
        lower: Option<ExprId>,
    },
    DeferredShape,
    AssumedSize {
        /// Leading explicit-shape dimensions.
        dims: ExplicitShapeRange,
        /// Lower bound of the final dimension.
        lower: Option<ExprId>,
        /// Location of the `*`.
        star: Loc,
    },
    ImpliedShape {
        lower: Option<ExprId>,
        /// Location of the `*`.
        star: Loc,
    },
}

/// Discriminant of an [`ArraySpec`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArraySpecKind {
    ExplicitShape,
    AssumedShape,
    DeferredShape,
    AssumedSize,
    ImpliedShape,
}

impl ArraySpec {
    pub fn kind(&self) -> ArraySpecKind {
        match self {
            ArraySpec::ExplicitShape(_) => ArraySpecKind::ExplicitShape,
            ArraySpec::AssumedShape { .. } => ArraySpecKind::AssumedShape,
            ArraySpec::DeferredShape => ArraySpecKind::DeferredShape,
            ArraySpec::AssumedSize { .. } => ArraySpecKind::AssumedSize,
            ArraySpec::ImpliedShape { .. } => ArraySpecKind::ImpliedShape,
        }
    }

    /// Lower bound of the (last) dimension this spec describes.
    pub fn lower_bound(&self) -> Option<ExprId> {
        match *self {
            ArraySpec::ExplicitShape(shape) => shape.lower,
            ArraySpec::AssumedShape { lower }
            | ArraySpec::AssumedSize { lower, .. }
            | ArraySpec::ImpliedShape { lower, .. } => lower,
            ArraySpec::DeferredShape => None,
        }
    }

    /// Upper bound; only explicit shapes have one.
    pub fn upper_bound(&self) -> Option<ExprId> {
        match *self {
            ArraySpec::ExplicitShape(shape) => Some(shape.upper),
            _ => None,
        }
    }
}
