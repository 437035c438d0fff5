//! Variable declarations referenced by designators.

use bitflags::bitflags;

use crate::{ExprId, Loc, Name, TypeId};

bitflags! {
    /// Declaration properties consumed by later passes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct DeclFlags: u8 {
        /// Referenced by at least one variable designator.
        const USED_AS_VARIABLE = 1 << 0;
        /// Dummy argument of the enclosing procedure.
        const ARGUMENT = 1 << 1;
        /// Named constant (`PARAMETER`); has an initializer.
        const PARAMETER = 1 << 2;
    }
}

/// A declared variable or named constant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub name: Name,
    pub loc: Loc,
    pub ty: TypeId,
    pub(crate) flags: DeclFlags,
    pub(crate) init: Option<ExprId>,
    pub(crate) first_use: Option<Loc>,
}

impl VarDecl {
    #[inline]
    pub fn flags(&self) -> DeclFlags {
        self.flags
    }

    pub fn is_used_as_variable(&self) -> bool {
        self.flags.contains(DeclFlags::USED_AS_VARIABLE)
    }

    pub fn is_argument(&self) -> bool {
        self.flags.contains(DeclFlags::ARGUMENT)
    }

    pub fn is_parameter(&self) -> bool {
        self.flags.contains(DeclFlags::PARAMETER)
    }

    /// Initializer of a named constant.
    #[inline]
    pub fn init(&self) -> Option<ExprId> {
        self.init
    }

    /// Location of the first variable reference, once there is one.
    #[inline]
    pub fn first_use(&self) -> Option<Loc> {
        self.first_use
    }

    /// Record a variable reference at `loc`; the first one is kept.
    pub(crate) fn mark_used_as_variable(&mut self, loc: Loc) {
        self.flags |= DeclFlags::USED_AS_VARIABLE;
        self.first_use.get_or_insert(loc);
    }
}
