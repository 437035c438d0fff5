//! IEEE interchange floating-point values.

use std::fmt;

use super::decimal::DecimalLiteral;
use super::ApInt;
use crate::LiteralError;

/// Binary interchange format of a real value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatSemantics {
    /// binary16
    Half,
    /// binary32
    Single,
    /// binary64
    Double,
    /// binary128
    Quad,
}

impl FloatSemantics {
    /// Format for a storage width; only 16, 32, 64 and 128 are defined.
    pub const fn from_bit_width(bit_width: u32) -> Option<Self> {
        match bit_width {
            16 => Some(FloatSemantics::Half),
            32 => Some(FloatSemantics::Single),
            64 => Some(FloatSemantics::Double),
            128 => Some(FloatSemantics::Quad),
            _ => None,
        }
    }

    pub const fn bit_width(self) -> u32 {
        match self {
            FloatSemantics::Half => 16,
            FloatSemantics::Single => 32,
            FloatSemantics::Double => 64,
            FloatSemantics::Quad => 128,
        }
    }

    /// Significand bits, counting the implicit leading bit.
    pub const fn precision(self) -> u32 {
        match self {
            FloatSemantics::Half => 11,
            FloatSemantics::Single => 24,
            FloatSemantics::Double => 53,
            FloatSemantics::Quad => 113,
        }
    }

    pub const fn exponent_bits(self) -> u32 {
        self.bit_width() - self.precision()
    }

    #[expect(clippy::cast_possible_wrap, reason = "exponent field is at most 15 bits")]
    pub const fn exponent_bias(self) -> i32 {
        (1i32 << (self.exponent_bits() - 1)) - 1
    }
}

/// A floating-point value stored as its raw IEEE bit pattern.
///
/// The width of the bit pattern determines the format.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApFloat {
    semantics: FloatSemantics,
    bits: ApInt,
}

impl ApFloat {
    /// Parse decimal literal text, rounding to nearest (ties to even).
    ///
    /// Accepts an optional sign, digits with at most one decimal point and
    /// an optional exponent introduced by `E`, `D` or `Q`.
    pub fn parse(semantics: FloatSemantics, text: &str) -> Result<Self, LiteralError> {
        let literal =
            DecimalLiteral::scan(text).ok_or_else(|| LiteralError::MalformedReal(text.to_owned()))?;
        let malformed = |_| LiteralError::MalformedReal(text.to_owned());
        let bits = match semantics {
            FloatSemantics::Single => {
                let value: f32 = literal.canonical().parse().map_err(malformed)?;
                u128::from(value.to_bits())
            }
            FloatSemantics::Double => {
                let value: f64 = literal.canonical().parse().map_err(malformed)?;
                u128::from(value.to_bits())
            }
            FloatSemantics::Half | FloatSemantics::Quad => literal.to_ieee_bits(semantics),
        };
        Ok(ApFloat {
            semantics,
            bits: ApInt::from_u128(semantics.bit_width(), bits),
        })
    }

    /// Reinterpret a bit pattern, choosing the format by its width.
    ///
    /// # Panics
    /// Panics if the width is not 16, 32, 64 or 128.
    #[track_caller]
    pub fn from_bits(bits: ApInt) -> Self {
        let width = bits.bit_width();
        match Self::try_from_bits(bits) {
            Some(value) => value,
            None => {
                tracing::error!(width, "no floating-point format for bit width");
                unreachable!("no floating-point format for a {width}-bit value")
            }
        }
    }

    /// Reinterpret a bit pattern, or `None` for an unsupported width.
    pub fn try_from_bits(bits: ApInt) -> Option<Self> {
        FloatSemantics::from_bit_width(bits.bit_width()).map(|semantics| ApFloat { semantics, bits })
    }

    pub fn from_f32(value: f32) -> Self {
        ApFloat {
            semantics: FloatSemantics::Single,
            bits: ApInt::from_u64(32, u64::from(value.to_bits())),
        }
    }

    pub fn from_f64(value: f64) -> Self {
        ApFloat {
            semantics: FloatSemantics::Double,
            bits: ApInt::from_u64(64, value.to_bits()),
        }
    }

    #[inline]
    pub fn semantics(&self) -> FloatSemantics {
        self.semantics
    }

    /// Raw bit pattern.
    #[inline]
    pub fn bits(&self) -> &ApInt {
        &self.bits
    }

    pub fn into_bits(self) -> ApInt {
        self.bits
    }

    /// Raw bit pattern widened to `u128` (every format fits).
    pub fn to_bits_u128(&self) -> u128 {
        let words = self.bits.words();
        let low = u128::from(words[0]);
        let high = u128::from(words.get(1).copied().unwrap_or(0));
        low | (high << 64)
    }

    /// Sign bit, biased exponent field, fraction field.
    fn fields(&self) -> (bool, u32, u128) {
        let bits = self.to_bits_u128();
        let fraction_bits = self.semantics.precision() - 1;
        let exponent_mask = (1u128 << self.semantics.exponent_bits()) - 1;
        let fraction = bits & ((1u128 << fraction_bits) - 1);
        #[expect(clippy::cast_possible_truncation, reason = "masked to at most 15 bits")]
        let exponent = ((bits >> fraction_bits) & exponent_mask) as u32;
        let negative = (bits >> (self.semantics.bit_width() - 1)) & 1 == 1;
        (negative, exponent, fraction)
    }

    fn exponent_all_ones(&self) -> u32 {
        (1u32 << self.semantics.exponent_bits()) - 1
    }

    pub fn is_negative(&self) -> bool {
        self.fields().0
    }

    /// Positive or negative zero.
    pub fn is_zero(&self) -> bool {
        let (_, exponent, fraction) = self.fields();
        exponent == 0 && fraction == 0
    }

    pub fn is_infinite(&self) -> bool {
        let (_, exponent, fraction) = self.fields();
        exponent == self.exponent_all_ones() && fraction == 0
    }

    pub fn is_nan(&self) -> bool {
        let (_, exponent, fraction) = self.fields();
        exponent == self.exponent_all_ones() && fraction != 0
    }

    /// Nearest host `f64`.
    ///
    /// Exact for half, single and double; quad values are rounded.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        reason = "quad significands are deliberately rounded to f64"
    )]
    pub fn to_f64(&self) -> f64 {
        match self.semantics {
            FloatSemantics::Single => f64::from(f32::from_bits(self.to_bits_u128() as u32)),
            FloatSemantics::Double => f64::from_bits(self.to_bits_u128() as u64),
            FloatSemantics::Half | FloatSemantics::Quad => {
                let (negative, exponent, fraction) = self.fields();
                let fraction_bits = self.semantics.precision() - 1;
                let magnitude = if exponent == self.exponent_all_ones() {
                    if fraction == 0 {
                        f64::INFINITY
                    } else {
                        f64::NAN
                    }
                } else {
                    let bias = self.semantics.exponent_bias();
                    let (significand, unbiased) = if exponent == 0 {
                        (fraction, 1 - bias)
                    } else {
                        (fraction | (1u128 << fraction_bits), exponent as i32 - bias)
                    };
                    scale_by_power_of_two(significand as f64, unbiased - fraction_bits as i32)
                };
                if negative {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    }
}

/// `value * 2^exp`, stepping so intermediate powers stay finite.
fn scale_by_power_of_two(mut value: f64, mut exp: i32) -> f64 {
    const STEP: i32 = 1000;
    while exp > STEP {
        value *= 2f64.powi(STEP);
        exp -= STEP;
    }
    while exp < -STEP {
        value *= 2f64.powi(-STEP);
        exp += STEP;
    }
    value * 2f64.powi(exp)
}

impl fmt::Debug for ApFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApFloat({:?}, 0x{})",
            self.semantics,
            self.bits.to_string_radix(16)
        )
    }
}

impl fmt::Display for ApFloat {
    #[expect(clippy::cast_possible_truncation, reason = "single is 32 bits")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.semantics {
            FloatSemantics::Single => write!(f, "{:?}", f32::from_bits(self.to_bits_u128() as u32)),
            _ => write!(f, "{:?}", self.to_f64()),
        }
    }
}
