//! Arbitrary-precision numeric payloads for literal constants.
//!
//! [`ApInt`] is a fixed-width, unsigned two's-complement bit pattern stored
//! in 64-bit words. Widths up to one word live inline in the node; wider
//! values spill to a heap buffer owned by the node (and therefore by the
//! arena that owns the node). Exactly one representation is active and it
//! is chosen solely by the word count.
//!
//! Digit conversion goes through [`BigUint`]; only the fixed-width words
//! are stored.
//!
//! [`ApFloat`] reinterprets an `ApInt` of width 16, 32, 64 or 128 as an
//! IEEE interchange value, so reals never round-trip through a host float
//! unless the host has that exact format.

mod decimal;
mod float;

use std::fmt;

use num_bigint::BigUint;
use smallvec::{smallvec, SmallVec};

use crate::LiteralError;

pub use float::{ApFloat, FloatSemantics};

/// Bits per storage word.
pub const WORD_BITS: u32 = 64;

/// Number of storage words needed for `bit_width` bits (at least one).
#[inline]
pub const fn words_for(bit_width: u32) -> usize {
    let words = (bit_width as usize).div_ceil(WORD_BITS as usize);
    if words == 0 {
        1
    } else {
        words
    }
}

/// Fixed-width arbitrary-precision integer.
///
/// Arithmetic helpers wrap modulo `2^bit_width`; bits above the width are
/// always zero. Reads never mutate the storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApInt {
    bit_width: u32,
    /// Little-endian words; `words.len() == words_for(bit_width)`.
    words: SmallVec<[u64; 1]>,
}

impl ApInt {
    /// Zero of the given width.
    ///
    /// # Panics
    /// Panics if `bit_width` is zero.
    pub fn zero(bit_width: u32) -> Self {
        assert!(bit_width > 0, "ApInt width must be non-zero");
        ApInt {
            bit_width,
            words: smallvec![0; words_for(bit_width)],
        }
    }

    /// Value truncated to `bit_width` bits.
    pub fn from_u64(bit_width: u32, value: u64) -> Self {
        let mut int = Self::zero(bit_width);
        int.words[0] = value;
        int.clear_unused_bits();
        int
    }

    /// Value truncated to `bit_width` bits.
    #[expect(clippy::cast_possible_truncation, reason = "splitting into words")]
    pub fn from_u128(bit_width: u32, value: u128) -> Self {
        Self::from_words(bit_width, &[value as u64, (value >> 64) as u64])
    }

    /// Build from little-endian words; missing words are zero, extra words
    /// and bits beyond the width are dropped.
    pub fn from_words(bit_width: u32, words: &[u64]) -> Self {
        let mut int = Self::zero(bit_width);
        for (dst, src) in int.words.iter_mut().zip(words) {
            *dst = *src;
        }
        int.clear_unused_bits();
        int
    }

    /// Parse digit text in radix 2, 8, 10 or 16.
    ///
    /// The value wraps modulo `2^bit_width` if the text does not fit.
    pub fn from_str_radix(bit_width: u32, text: &str, radix: u32) -> Result<Self, LiteralError> {
        if bit_width == 0 {
            return Err(LiteralError::ZeroWidth);
        }
        if !matches!(radix, 2 | 8 | 10 | 16) {
            return Err(LiteralError::UnsupportedRadix(radix));
        }
        if text.is_empty() {
            return Err(LiteralError::NoDigits);
        }
        let digits = text
            .chars()
            .map(|c| {
                c.to_digit(radix)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(LiteralError::InvalidDigit { digit: c, radix })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let value = BigUint::from_radix_be(&digits, radix)
            .ok_or(LiteralError::UnsupportedRadix(radix))?;
        Ok(Self::from_biguint(bit_width, &value))
    }

    /// `value` truncated to `bit_width` bits.
    pub fn from_biguint(bit_width: u32, value: &BigUint) -> Self {
        Self::from_words(bit_width, &value.to_u64_digits())
    }

    /// The unsigned value as a [`BigUint`].
    pub fn to_biguint(&self) -> BigUint {
        let bytes: Vec<u8> = self.words.iter().flat_map(|w| w.to_le_bytes()).collect();
        BigUint::from_bytes_le(&bytes)
    }

    #[inline]
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Little-endian storage words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// True when the value fits in the inline word (no external buffer).
    #[inline]
    pub fn is_inline(&self) -> bool {
        !self.words.spilled()
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of bits needed to represent the value (0 for zero).
    #[expect(clippy::cast_possible_truncation, reason = "word index < 2^26")]
    pub fn active_bits(&self) -> u32 {
        for (i, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                return i as u32 * WORD_BITS + (WORD_BITS - word.leading_zeros());
            }
        }
        0
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.words[1..].iter().all(|&w| w == 0) {
            Some(self.words[0])
        } else {
            None
        }
    }

    /// The value as a `u128`, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.words.len() > 2 && self.words[2..].iter().any(|&w| w != 0) {
            return None;
        }
        let low = u128::from(self.words[0]);
        let high = u128::from(self.words.get(1).copied().unwrap_or(0));
        Some(low | (high << 64))
    }

    /// Zero-extend or truncate to a new width.
    #[must_use]
    pub fn resize(&self, bit_width: u32) -> ApInt {
        Self::from_words(bit_width, &self.words)
    }

    /// Render the unsigned value in the given radix (2..=36), upper case.
    ///
    /// # Panics
    /// Panics if `radix` is outside `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix {radix} out of range");
        self.to_biguint().to_str_radix(radix).to_ascii_uppercase()
    }

    fn clear_unused_bits(&mut self) {
        let rem = self.bit_width % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }
}

impl fmt::Debug for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApInt(i{}: {})", self.bit_width, self.to_string_radix(10))
    }
}

impl fmt::Display for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(10))
    }
}

#[cfg(test)]
mod tests;
