//! Decimal real literal scanning and exact decimal-to-binary rounding.
//!
//! Single and double precision go through the host parser. Half and quad
//! precision have no host type, so the significand is computed here by exact
//! [`BigUint`] division and rounded to nearest, ties to even.

use std::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::FloatSemantics;

/// Decimal magnitude beyond which every supported format overflows (or,
/// negated, underflows to zero).
const MAGNITUDE_LIMIT: i64 = 5000;

/// Clamp for the written exponent so the arithmetic below cannot overflow.
const EXPONENT_CLAMP: i64 = 1_000_000_000;

/// A scanned real literal: `(-1)^negative * digits * 10^exponent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct DecimalLiteral {
    pub(super) negative: bool,
    /// Decimal digit values (0..=9), most significant first.
    pub(super) digits: Vec<u8>,
    pub(super) exponent: i64,
}

impl DecimalLiteral {
    /// Scan `[sign] digits [. digits] [(E|D|Q) [sign] digits]`.
    ///
    /// At least one mantissa digit is required. Exponent letters are case
    /// insensitive.
    pub(super) fn scan(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let mut digits = Vec::with_capacity(bytes.len());
        let mut fraction_digits: i64 = 0;
        let mut seen_point = false;
        while let Some(&b) = bytes.get(pos) {
            match b {
                b'0'..=b'9' => {
                    digits.push(b - b'0');
                    if seen_point {
                        fraction_digits += 1;
                    }
                }
                b'.' if !seen_point => seen_point = true,
                _ => break,
            }
            pos += 1;
        }
        if digits.is_empty() {
            return None;
        }

        let mut exponent: i64 = 0;
        if let Some(&letter) = bytes.get(pos) {
            if !matches!(letter, b'e' | b'E' | b'd' | b'D' | b'q' | b'Q') {
                return None;
            }
            pos += 1;
            let exponent_negative = match bytes.get(pos) {
                Some(b'-') => {
                    pos += 1;
                    true
                }
                Some(b'+') => {
                    pos += 1;
                    false
                }
                _ => false,
            };
            let start = pos;
            while let Some(&b) = bytes.get(pos) {
                if !b.is_ascii_digit() {
                    return None;
                }
                exponent = (exponent * 10 + i64::from(b - b'0')).min(EXPONENT_CLAMP);
                pos += 1;
            }
            if pos == start {
                return None;
            }
            if exponent_negative {
                exponent = -exponent;
            }
        }

        Some(DecimalLiteral {
            negative,
            digits,
            exponent: exponent - fraction_digits,
        })
    }

    /// Spelling accepted by the host float parser (`[-]digitsE[-]n`).
    pub(super) fn canonical(&self) -> String {
        let mut text = String::with_capacity(self.digits.len() + 16);
        if self.negative {
            text.push('-');
        }
        text.extend(self.digits.iter().map(|&d| char::from(b'0' + d)));
        text.push('e');
        text.push_str(&self.exponent.to_string());
        text
    }

    /// Round to the nearest value of `semantics`, returning the raw bits.
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "bit lengths and biased exponents are small and non-negative"
    )]
    pub(super) fn to_ieee_bits(&self, semantics: FloatSemantics) -> u128 {
        let precision = semantics.precision();
        let bias = i64::from(semantics.exponent_bias());
        let min_exponent = 1 - bias;
        let p = i64::from(precision);

        let sign = if self.negative {
            1u128 << (semantics.bit_width() - 1)
        } else {
            0
        };
        let exponent_all_ones = (1u128 << semantics.exponent_bits()) - 1;
        let infinity = sign | (exponent_all_ones << (precision - 1));

        let Some(first) = self.digits.iter().position(|&d| d != 0) else {
            return sign;
        };
        let digits = &self.digits[first..];
        let magnitude = digits.len() as i64 + self.exponent;
        if magnitude > MAGNITUDE_LIMIT {
            return infinity;
        }
        if magnitude < -MAGNITUDE_LIMIT {
            return sign;
        }

        let mantissa = BigUint::from_radix_be(digits, 10).unwrap_or_default();
        let ten_pow = pow10(self.exponent.unsigned_abs());
        let (num, den) = if self.exponent >= 0 {
            (mantissa * ten_pow, BigUint::one())
        } else {
            (mantissa, ten_pow)
        };

        // Pick a binary scale so the quotient carries `precision` bits
        // (one more on the first try when the estimate is short).
        let mut scale = num.bits() as i64 - den.bits() as i64 - p;
        let (mut quotient, mut rem, mut divisor) = scaled_divide(&num, &den, scale, precision + 1);
        if quotient >> precision != 0 {
            scale += 1;
            (quotient, rem, divisor) = scaled_divide(&num, &den, scale, precision + 1);
        }

        let subnormal = scale + p - 1 < min_exponent;
        if subnormal {
            scale = min_exponent - (p - 1);
            (quotient, rem, divisor) = scaled_divide(&num, &den, scale, precision + 1);
        }

        let round_up = match (rem << 1u32).cmp(&divisor) {
            Ordering::Greater => true,
            Ordering::Equal => quotient & 1 == 1,
            Ordering::Less => false,
        };
        if round_up {
            quotient += 1;
        }

        if subnormal {
            // A carry into bit `precision - 1` lands in the exponent field
            // and encodes the smallest normal number.
            return sign | quotient;
        }
        if quotient >> precision != 0 {
            quotient >>= 1;
            scale += 1;
        }
        let exponent = scale + p - 1;
        if exponent > bias {
            return infinity;
        }
        let biased = (exponent + bias) as u128;
        let fraction_mask = (1u128 << (precision - 1)) - 1;
        sign | (biased << (precision - 1)) | (quotient & fraction_mask)
    }
}

fn pow10(exp: u64) -> BigUint {
    BigUint::from(10u32).pow(u32::try_from(exp).unwrap_or(u32::MAX))
}

/// `num / (den * 2^scale)` as a `bits`-bit quotient, with the remainder and
/// the effective divisor.
fn scaled_divide(
    num: &BigUint,
    den: &BigUint,
    scale: i64,
    bits: u32,
) -> (u128, BigUint, BigUint) {
    let (num, den) = if scale >= 0 {
        (num.clone(), den << scale.unsigned_abs())
    } else {
        (num << scale.unsigned_abs(), den.clone())
    };
    let quotient = &num / &den;
    debug_assert!(
        quotient.bits() <= u64::from(bits),
        "quotient did not fit in {bits} bits"
    );
    let rem = num - &quotient * &den;
    (quotient.to_u128().unwrap_or(u128::MAX), rem, den)
}
