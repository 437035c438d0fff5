//! Literal constant factories and readers.

use tracing::{debug, error};

use super::{contract_violation, AstContext};
use crate::ast::{parse_boz, parse_logical, BozKind, Constant, ConstantValue, ExprKind};
use crate::numeric::{ApFloat, ApInt, FloatSemantics};
use crate::{ConstId, ExprId, LiteralError, Loc, TypeId, DEFAULT_INTEGER_WIDTH};

/// Abort on literal text the parser should have rejected.
#[track_caller]
fn malformed_literal(text: &str, err: &LiteralError) -> ! {
    error!(text, %err, "malformed literal reached a constant factory");
    panic!("malformed literal {text:?}: {err}")
}

impl AstContext {
    fn alloc_constant(
        &mut self,
        loc: Loc,
        max_loc: Loc,
        value: ConstantValue,
        ty: TypeId,
    ) -> ExprId {
        let c = self.arena.alloc_constant(Constant::new(value, max_loc));
        self.alloc(ExprKind::Constant(c), loc, max_loc, Some(ty))
    }

    fn const_id(&self, id: ExprId) -> Option<ConstId> {
        match *self.kind(id) {
            ExprKind::Constant(c) => Some(c),
            _ => None,
        }
    }

    // ===== Factories =====

    /// Decimal integer literal at [`DEFAULT_INTEGER_WIDTH`] bits.
    ///
    /// # Panics
    /// Panics if `text` is not a non-empty run of decimal digits.
    #[track_caller]
    pub fn integer_constant(&mut self, loc: Loc, max_loc: Loc, text: &str) -> ExprId {
        let value = ApInt::from_str_radix(DEFAULT_INTEGER_WIDTH, text, 10)
            .unwrap_or_else(|err| malformed_literal(text, &err));
        self.alloc_constant(loc, max_loc, ConstantValue::Integer(value), TypeId::INTEGER)
    }

    /// Real literal rounded to the format of `ty`.
    ///
    /// # Panics
    /// Panics if `ty` has no IEEE format or `text` is malformed.
    #[track_caller]
    pub fn real_constant(&mut self, loc: Loc, max_loc: Loc, text: &str, ty: TypeId) -> ExprId {
        let Some(semantics) = self.types.float_semantics(ty) else {
            contract_violation(None, "real literal type has no floating-point format")
        };
        let value =
            ApFloat::parse(semantics, text).unwrap_or_else(|err| malformed_literal(text, &err));
        self.alloc_constant(loc, max_loc, ConstantValue::Real(value), ty)
    }

    /// `DOUBLE PRECISION` literal (`1.0D0`).
    #[track_caller]
    pub fn double_precision_constant(&mut self, loc: Loc, max_loc: Loc, text: &str) -> ExprId {
        let value = ApFloat::parse(FloatSemantics::Double, text)
            .unwrap_or_else(|err| malformed_literal(text, &err));
        self.alloc_constant(
            loc,
            max_loc,
            ConstantValue::DoublePrecision(value),
            TypeId::DOUBLE_PRECISION,
        )
    }

    /// Complex literal from its already-parsed parts.
    ///
    /// # Panics
    /// Panics if the parts use different formats.
    #[track_caller]
    pub fn complex_constant(
        &mut self,
        loc: Loc,
        max_loc: Loc,
        re: ApFloat,
        im: ApFloat,
        ty: TypeId,
    ) -> ExprId {
        if re.semantics() != im.semantics() {
            contract_violation(None, "complex literal parts have different formats");
        }
        self.alloc_constant(loc, max_loc, ConstantValue::Complex { re, im }, ty)
    }

    /// Character literal; the bytes are copied into the arena.
    #[track_caller]
    pub fn character_constant(&mut self, loc: Loc, max_loc: Loc, bytes: &[u8]) -> ExprId {
        let range = self.arena.alloc_chars(bytes);
        let ty = self.types.character(Some(range.len));
        self.alloc_constant(loc, max_loc, ConstantValue::Character(range), ty)
    }

    /// BOZ literal such as `B'1010'`, `O'17'` or `Z'FF'`.
    ///
    /// # Panics
    /// Panics on an unknown prefix, a missing delimiter or bad digits.
    #[track_caller]
    pub fn boz_constant(&mut self, loc: Loc, max_loc: Loc, text: &str) -> ExprId {
        let (kind, value) = parse_boz(text).unwrap_or_else(|err| malformed_literal(text, &err));
        self.alloc_constant(
            loc,
            max_loc,
            ConstantValue::Boz { kind, value },
            TypeId::INTEGER,
        )
    }

    /// Logical literal; only `.TRUE.` (any case) is true.
    pub fn logical_constant(&mut self, loc: Loc, max_loc: Loc, text: &str) -> ExprId {
        let value = parse_logical(text);
        self.alloc_constant(loc, max_loc, ConstantValue::Logical(value), TypeId::LOGICAL)
    }

    // ===== Post-construction updates =====

    /// Attach a trailing kind selector.
    ///
    /// The constant and every node built over it now end at the selector.
    ///
    /// # Panics
    /// Panics if `id` is not a constant.
    #[track_caller]
    pub fn set_kind_selector(&mut self, id: ExprId, selector: ExprId) {
        let Some(c) = self.const_id(id) else {
            contract_violation(Some(id), "kind selector attached to a non-constant")
        };
        if let Some(previous) = self.arena.get_constant_mut(c).kind_selector.replace(selector) {
            debug!(?id, ?previous, ?selector, "kind selector replaced");
        }
    }

    /// Replace an integer constant's value (constant folding).
    ///
    /// # Panics
    /// Panics if `id` is not an integer constant.
    #[track_caller]
    pub fn replace_integer_value(&mut self, id: ExprId, value: ApInt) {
        let Some(c) = self.const_id(id) else {
            contract_violation(Some(id), "integer value replaced on a non-constant")
        };
        match &mut self.arena.get_constant_mut(c).value {
            ConstantValue::Integer(slot) => {
                if !slot.is_inline() {
                    debug!(?id, words = slot.num_words(), "released spilled integer buffer");
                }
                *slot = value;
            }
            _ => contract_violation(Some(id), "integer value replaced on a non-integer constant"),
        }
    }

    /// Replace a real or double precision constant's value.
    ///
    /// # Panics
    /// Panics if `id` is not a real constant, or if `value` is in a
    /// different format than the value it replaces.
    #[track_caller]
    pub fn replace_real_value(&mut self, id: ExprId, value: ApFloat) {
        let Some(c) = self.const_id(id) else {
            contract_violation(Some(id), "real value replaced on a non-constant")
        };
        match &mut self.arena.get_constant_mut(c).value {
            ConstantValue::Real(slot) | ConstantValue::DoublePrecision(slot) => {
                if slot.semantics() != value.semantics() {
                    contract_violation(Some(id), "real value replaced with a different format");
                }
                if !slot.bits().is_inline() {
                    debug!(?id, words = slot.bits().num_words(), "released spilled real buffer");
                }
                *slot = value;
            }
            _ => contract_violation(Some(id), "real value replaced on a non-real constant"),
        }
    }

    // ===== Readers =====

    /// Kind selector of a constant.
    pub fn kind_selector(&self, id: ExprId) -> Option<ExprId> {
        self.constant(id)?.kind_selector()
    }

    pub fn integer_value(&self, id: ExprId) -> Option<&ApInt> {
        match self.constant(id)?.value() {
            ConstantValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Value of a real or double precision constant.
    pub fn real_value(&self, id: ExprId) -> Option<&ApFloat> {
        match self.constant(id)?.value() {
            ConstantValue::Real(v) | ConstantValue::DoublePrecision(v) => Some(v),
            _ => None,
        }
    }

    /// Real and imaginary parts of a complex constant.
    pub fn complex_value(&self, id: ExprId) -> Option<(&ApFloat, &ApFloat)> {
        match self.constant(id)?.value() {
            ConstantValue::Complex { re, im } => Some((re, im)),
            _ => None,
        }
    }

    /// Character literal bytes, without the terminator.
    pub fn character_value(&self, id: ExprId) -> Option<&[u8]> {
        match self.constant(id)?.value() {
            ConstantValue::Character(range) => Some(self.arena.get_chars(*range)),
            _ => None,
        }
    }

    /// Character literal bytes followed by their NUL terminator.
    pub fn character_value_with_nul(&self, id: ExprId) -> Option<&[u8]> {
        match self.constant(id)?.value() {
            ConstantValue::Character(range) => Some(self.arena.get_chars_with_nul(*range)),
            _ => None,
        }
    }

    pub fn boz_value(&self, id: ExprId) -> Option<(BozKind, &ApInt)> {
        match self.constant(id)?.value() {
            ConstantValue::Boz { kind, value } => Some((*kind, value)),
            _ => None,
        }
    }

    pub fn logical_value(&self, id: ExprId) -> Option<bool> {
        match self.constant(id)?.value() {
            ConstantValue::Logical(v) => Some(*v),
            _ => None,
        }
    }
}
