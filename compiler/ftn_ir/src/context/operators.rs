//! Operator and intrinsic-call factories.

use super::AstContext;
use crate::ast::{BinaryOp, ExprKind, IntrinsicFunction, UnaryOp};
use crate::{ExprId, Loc, Name, TypeId};

impl AstContext {
    /// Built-in unary operator at `loc`, ending at its operand.
    ///
    /// `.NOT.` is always `LOGICAL`; signs take the operand's type.
    pub fn unary(&mut self, loc: Loc, op: UnaryOp, operand: ExprId) -> ExprId {
        let ty = match op {
            UnaryOp::Not => Some(TypeId::LOGICAL),
            UnaryOp::Plus | UnaryOp::Minus => self.expr_type(operand),
        };
        self.alloc(ExprKind::Unary { op, operand }, loc, loc, ty)
    }

    /// User-defined unary operator `.op. operand`, typed like its operand
    /// until Sema resolves the operator function.
    pub fn defined_unary(&mut self, loc: Loc, op: Name, operand: ExprId) -> ExprId {
        let ty = self.expr_type(operand);
        self.alloc(ExprKind::DefinedUnary { op, operand }, loc, loc, ty)
    }

    /// Built-in binary operator spanning `lhs` start to `rhs` end.
    ///
    /// Only the structural result types are set here: relational and
    /// logical operators yield `LOGICAL`; `//` of two character operands
    /// yields a character whose length is the sum of theirs. Every other
    /// result type is left for Sema.
    pub fn binary(&mut self, loc: Loc, op: BinaryOp, lhs: ExprId, rhs: ExprId) -> ExprId {
        let ty = if op.yields_logical() {
            Some(TypeId::LOGICAL)
        } else if op == BinaryOp::Concat {
            self.concat_type(lhs, rhs)
        } else {
            None
        };
        self.alloc(ExprKind::Binary { op, lhs, rhs }, loc, loc, ty)
    }

    /// User-defined binary operator `lhs .op. rhs`.
    ///
    /// The type slot stays empty until Sema resolves the operator function
    /// and calls [`resolve_type`](Self::resolve_type).
    pub fn defined_binary(&mut self, loc: Loc, op: Name, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.alloc(ExprKind::DefinedBinary { op, lhs, rhs }, loc, loc, None)
    }

    /// Intrinsic function call, ending at its last argument.
    pub fn intrinsic_call(
        &mut self,
        loc: Loc,
        function: IntrinsicFunction,
        args: &[ExprId],
        ty: Option<TypeId>,
    ) -> ExprId {
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.alloc(ExprKind::IntrinsicCall { function, args }, loc, loc, ty)
    }

    /// Result of `lhs // rhs` when both sides are resolved characters.
    fn concat_type(&mut self, lhs: ExprId, rhs: ExprId) -> Option<TypeId> {
        let (l, r) = (self.expr_type(lhs)?, self.expr_type(rhs)?);
        if !(self.types.is_character(l) && self.types.is_character(r)) {
            return None;
        }
        let len = match (self.types.character_len(l), self.types.character_len(r)) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        Some(self.types.character(len))
    }
}
