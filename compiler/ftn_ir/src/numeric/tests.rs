use pretty_assertions::assert_eq;

use super::*;

// ApInt

#[test]
fn narrow_values_stay_inline() {
    let v = ApInt::from_u64(64, 42);
    assert!(v.is_inline());
    assert_eq!(v.num_words(), 1);
    assert_eq!(v.to_u64(), Some(42));
}

#[test]
fn wide_values_spill_to_buffer() {
    let v = ApInt::from_u128(128, u128::MAX);
    assert!(!v.is_inline());
    assert_eq!(v.num_words(), 2);
    assert_eq!(v.to_u128(), Some(u128::MAX));
    assert_eq!(v.to_u64(), None);
}

#[test]
fn width_truncates_extra_bits() {
    assert_eq!(ApInt::from_u64(8, 0x1FF).to_u64(), Some(0xFF));
    assert_eq!(ApInt::from_u64(1, 3).to_u64(), Some(1));
    assert_eq!(ApInt::from_words(65, &[1, 3, 7]).words(), &[1, 1]);
}

#[test]
fn parse_each_radix() {
    let parse = |text, radix| ApInt::from_str_radix(64, text, radix).map(|v| v.to_u64());
    assert_eq!(parse("1010", 2), Ok(Some(10)));
    assert_eq!(parse("777", 8), Ok(Some(511)));
    assert_eq!(parse("12345", 10), Ok(Some(12345)));
    assert_eq!(parse("FfeE", 16), Ok(Some(0xFFEE)));
}

#[test]
fn parse_wraps_at_width() {
    let v = ApInt::from_str_radix(64, "18446744073709551617", 10);
    assert_eq!(v.map(|v| v.to_u64()), Ok(Some(1)));
}

#[test]
fn parse_wide_value() {
    let Ok(v) = ApInt::from_str_radix(128, "340282366920938463463374607431768211455", 10) else {
        panic!("expected a 128-bit value");
    };
    assert_eq!(v.to_u128(), Some(u128::MAX));
    assert_eq!(v.active_bits(), 128);
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!(ApInt::from_str_radix(64, "", 10), Err(LiteralError::NoDigits));
    assert_eq!(
        ApInt::from_str_radix(64, "12", 2),
        Err(LiteralError::InvalidDigit { digit: '2', radix: 2 })
    );
    assert_eq!(
        ApInt::from_str_radix(64, "1", 7),
        Err(LiteralError::UnsupportedRadix(7))
    );
    assert_eq!(ApInt::from_str_radix(0, "1", 10), Err(LiteralError::ZeroWidth));
}

#[test]
fn active_bits_counts_significant_bits() {
    assert_eq!(ApInt::zero(64).active_bits(), 0);
    assert_eq!(ApInt::from_u64(64, 1).active_bits(), 1);
    assert_eq!(ApInt::from_u64(64, 0x80).active_bits(), 8);
    assert_eq!(ApInt::from_u128(128, 1 << 64).active_bits(), 65);
}

#[test]
fn wide_values_round_trip_through_biguint() {
    // 2^200 - 1 in hexadecimal, parsed at 256 bits and at 130 bits.
    let text = "F".repeat(50);
    let Ok(v) = ApInt::from_str_radix(256, &text, 16) else {
        panic!("expected a 256-bit value");
    };
    assert_eq!(v.num_words(), 4);
    assert_eq!(v.active_bits(), 200);
    assert_eq!(v.to_string_radix(16), text);
    assert_eq!(ApInt::from_biguint(256, &v.to_biguint()), v);

    let narrow = ApInt::from_str_radix(130, &text, 16).map(|n| n.active_bits());
    assert_eq!(narrow, Ok(130));
}

#[test]
fn render_in_radix() {
    let v = ApInt::from_u64(32, 0xBEEF);
    assert_eq!(v.to_string_radix(16), "BEEF");
    assert_eq!(v.to_string_radix(2), "1011111011101111");
    assert_eq!(v.to_string(), "48879");
    assert_eq!(ApInt::zero(16).to_string(), "0");
    assert_eq!(format!("{v:?}"), "ApInt(i32: 48879)");
}

#[test]
fn resize_extends_and_truncates() {
    let v = ApInt::from_u64(64, 0x1234);
    assert_eq!(v.resize(128).to_u128(), Some(0x1234));
    assert_eq!(v.resize(8).to_u64(), Some(0x34));
}

#[test]
fn equality_ignores_representation_history() {
    let a = ApInt::from_u128(128, 5);
    let b = ApInt::from_u64(64, 5).resize(128);
    assert_eq!(a, b);
    assert_ne!(a, ApInt::from_u64(64, 5));
}

// FloatSemantics

#[test]
fn semantics_by_width() {
    assert_eq!(FloatSemantics::from_bit_width(16), Some(FloatSemantics::Half));
    assert_eq!(FloatSemantics::from_bit_width(32), Some(FloatSemantics::Single));
    assert_eq!(FloatSemantics::from_bit_width(64), Some(FloatSemantics::Double));
    assert_eq!(FloatSemantics::from_bit_width(128), Some(FloatSemantics::Quad));
    assert_eq!(FloatSemantics::from_bit_width(80), None);
}

#[test]
fn semantics_layout() {
    assert_eq!(FloatSemantics::Half.exponent_bits(), 5);
    assert_eq!(FloatSemantics::Half.exponent_bias(), 15);
    assert_eq!(FloatSemantics::Single.exponent_bias(), 127);
    assert_eq!(FloatSemantics::Double.exponent_bias(), 1023);
    assert_eq!(FloatSemantics::Quad.exponent_bits(), 15);
    assert_eq!(FloatSemantics::Quad.exponent_bias(), 16383);
}

// ApFloat

fn bits(semantics: FloatSemantics, text: &str) -> u128 {
    match ApFloat::parse(semantics, text) {
        Ok(value) => value.to_bits_u128(),
        Err(err) => panic!("{text}: {err}"),
    }
}

#[test]
fn parse_single_and_double() {
    assert_eq!(bits(FloatSemantics::Single, "1.5"), 0x3FC0_0000);
    assert_eq!(bits(FloatSemantics::Single, "0.1"), 0x3DCC_CCCD);
    assert_eq!(bits(FloatSemantics::Double, "0.1"), 0x3FB9_9999_9999_999A);
    assert_eq!(bits(FloatSemantics::Double, "1.0D0"), 0x3FF0_0000_0000_0000);
    assert_eq!(bits(FloatSemantics::Double, "-2.5"), 0xC004_0000_0000_0000);
}

#[test]
fn parse_half() {
    assert_eq!(bits(FloatSemantics::Half, "1.0"), 0x3C00);
    assert_eq!(bits(FloatSemantics::Half, "1.5"), 0x3E00);
    assert_eq!(bits(FloatSemantics::Half, "0.1"), 0x2E66);
    assert_eq!(bits(FloatSemantics::Half, "65504"), 0x7BFF);
    assert_eq!(bits(FloatSemantics::Half, "-2.0"), 0xC000);
}

#[test]
fn parse_half_rounding_edges() {
    // Halfway between 65504 and 65536 rounds to even, which overflows.
    assert_eq!(bits(FloatSemantics::Half, "65520"), 0x7C00);
    assert_eq!(bits(FloatSemantics::Half, "1E10"), 0x7C00);
    // Smallest subnormal, 2^-24.
    assert_eq!(bits(FloatSemantics::Half, "5.9604644775390625E-8"), 0x0001);
    // Smallest normal, 2^-14.
    assert_eq!(bits(FloatSemantics::Half, "6.103515625E-5"), 0x0400);
    assert_eq!(bits(FloatSemantics::Half, "1E-10"), 0x0000);
    assert_eq!(bits(FloatSemantics::Half, "-0.0"), 0x8000);
}

#[test]
fn parse_quad() {
    assert_eq!(bits(FloatSemantics::Quad, "1.0"), 0x3FFF << 112);
    assert_eq!(
        bits(FloatSemantics::Quad, "0.1"),
        0x3FFB_9999_9999_9999_9999_9999_9999_999A
    );
    assert_eq!(
        bits(FloatSemantics::Quad, "-2.5Q0"),
        0xC000_4000_0000_0000_0000_0000_0000_0000
    );
    assert_eq!(bits(FloatSemantics::Quad, "1Q5000"), 0x7FFF << 112);
}

#[test]
fn parse_rejects_malformed_real() {
    assert_eq!(
        ApFloat::parse(FloatSemantics::Double, "1.0X"),
        Err(LiteralError::MalformedReal("1.0X".to_owned()))
    );
    assert!(ApFloat::parse(FloatSemantics::Half, "").is_err());
}

#[test]
fn width_selects_semantics() {
    let half = ApFloat::from_bits(ApInt::from_u64(16, 0x3C00));
    assert_eq!(half.semantics(), FloatSemantics::Half);
    assert_eq!(half.to_f64(), 1.0);
    assert!(ApFloat::try_from_bits(ApInt::from_u64(80, 0)).is_none());
}

#[test]
#[should_panic(expected = "no floating-point format")]
fn unknown_width_is_fatal() {
    let _ = ApFloat::from_bits(ApInt::from_u64(24, 0));
}

#[test]
fn classification() {
    let inf = ApFloat::from_f64(f64::NEG_INFINITY);
    assert!(inf.is_infinite());
    assert!(inf.is_negative());
    assert!(!inf.is_nan());

    let nan = ApFloat::from_bits(ApInt::from_u64(16, 0x7E00));
    assert!(nan.is_nan());
    assert!(nan.to_f64().is_nan());

    assert!(ApFloat::from_f32(-0.0).is_zero());
    assert!(ApFloat::from_f32(-0.0).is_negative());
}

#[test]
fn to_f64_for_every_format() {
    let half_tenth = ApFloat::from_bits(ApInt::from_u64(16, 0x2E66));
    assert_eq!(half_tenth.to_f64(), 0.099_975_585_937_5);

    let Ok(quad) = ApFloat::parse(FloatSemantics::Quad, "0.1") else {
        panic!("expected quad 0.1");
    };
    assert_eq!(quad.to_f64(), 0.1);
    assert_eq!(ApFloat::from_f32(0.5).to_f64(), 0.5);
}

#[test]
fn display_uses_shortest_round_trip() {
    assert_eq!(ApFloat::from_f32(0.1).to_string(), "0.1");
    assert_eq!(ApFloat::from_f64(2.0).to_string(), "2.0");
    let half = ApFloat::from_bits(ApInt::from_u64(16, 0x3E00));
    assert_eq!(half.to_string(), "1.5");
}
