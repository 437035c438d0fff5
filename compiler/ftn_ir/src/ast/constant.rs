//! Literal constant payloads and the token parsers that build them.

use crate::numeric::{ApFloat, ApInt};
use crate::{CharRange, ExprId, LiteralError, Loc};

/// Radix of a BOZ literal, selected by its one-letter prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BozKind {
    /// `B'...'`
    Binary,
    /// `O'...'`
    Octal,
    /// `Z'...'` or `X'...'`
    Hexadecimal,
}

impl BozKind {
    /// Prefix letter to radix, case-insensitive.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'B' => Some(BozKind::Binary),
            'O' => Some(BozKind::Octal),
            'Z' | 'X' => Some(BozKind::Hexadecimal),
            _ => None,
        }
    }

    pub const fn radix(self) -> u32 {
        match self {
            BozKind::Binary => 2,
            BozKind::Octal => 8,
            BozKind::Hexadecimal => 16,
        }
    }

    pub const fn bits_per_digit(self) -> u32 {
        match self {
            BozKind::Binary => 1,
            BozKind::Octal => 3,
            BozKind::Hexadecimal => 4,
        }
    }

    /// Canonical prefix letter.
    pub const fn prefix(self) -> char {
        match self {
            BozKind::Binary => 'B',
            BozKind::Octal => 'O',
            BozKind::Hexadecimal => 'Z',
        }
    }
}

/// Value of a literal constant.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstantValue {
    Integer(ApInt),
    Real(ApFloat),
    DoublePrecision(ApFloat),
    /// Built from two already-parsed parts.
    Complex { re: ApFloat, im: ApFloat },
    /// Bytes in the arena's character pool (NUL-terminated there).
    Character(CharRange),
    Boz { kind: BozKind, value: ApInt },
    Logical(bool),
}

/// Constant payload stored in the arena's constant table.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Constant {
    pub(crate) value: ConstantValue,
    pub(crate) kind_selector: Option<ExprId>,
    /// Last location of the literal text itself.
    pub(crate) text_end: Loc,
}

impl Constant {
    pub(crate) fn new(value: ConstantValue, text_end: Loc) -> Self {
        Constant {
            value,
            kind_selector: None,
            text_end,
        }
    }

    #[inline]
    pub fn value(&self) -> &ConstantValue {
        &self.value
    }

    /// Trailing `_kind` annotation, if one was attached.
    #[inline]
    pub fn kind_selector(&self) -> Option<ExprId> {
        self.kind_selector
    }

    #[inline]
    pub fn text_end(&self) -> Loc {
        self.text_end
    }
}

/// Split a BOZ token such as `Z'FF'` into its radix and value.
///
/// The character after the prefix is the delimiter and the value ends at
/// the last occurrence of that delimiter. The value is as wide as its
/// digits (one, three or four bits per digit).
pub fn parse_boz(text: &str) -> Result<(BozKind, ApInt), LiteralError> {
    let mut chars = text.chars();
    let prefix = chars.next().ok_or(LiteralError::NoDigits)?;
    let kind = BozKind::from_prefix(prefix).ok_or(LiteralError::UnknownBozPrefix(prefix))?;

    let rest = chars.as_str();
    let quote = rest
        .chars()
        .next()
        .filter(|c| matches!(c, '\'' | '"'))
        .ok_or(LiteralError::MissingBozDelimiter)?;
    let body = &rest[quote.len_utf8()..];
    let close = body.rfind(quote).ok_or(LiteralError::UnterminatedBoz(quote))?;
    let digits = &body[..close];

    let digit_count = u32::try_from(digits.len()).unwrap_or(u32::MAX);
    let width = digit_count.saturating_mul(kind.bits_per_digit()).max(1);
    let value = ApInt::from_str_radix(width, digits, kind.radix())?;
    Ok((kind, value))
}

/// `.TRUE.` in any letter case is true; every other spelling is false.
pub fn parse_logical(text: &str) -> bool {
    text.eq_ignore_ascii_case(".TRUE.")
}
