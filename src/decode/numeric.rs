//! Integer and decimal literal decoding, sharing one digit-scanning
//! algorithm parameterized by width (spec.md §4.2).

use crate::{
    decode::{decode_ws, Decode},
    error::TooShort,
    lex::{is_binary_digit, is_decimal_digit, is_hex_digit},
    value::Decimal,
};

/// An integer literal's sign, magnitude, and the remainder after it.
struct IntLiteral<'s> {
    neg: bool,
    magnitude: u128,
    rest: &'s [u8],
}

/// Parses the shared integer grammar: optional `-`, optional `0b`/`0x` radix
/// prefix, `_` digit separators anywhere in the run. The magnitude is
/// accumulated in a `u128` regardless of target width so that, e.g., `i8`'s
/// `-128` doesn't overflow before the sign is applied.
fn parse_int_literal(input: &[u8]) -> Result<IntLiteral<'_>, TooShort<'_>> {
    let (neg, input) = match input.first() {
        Some(b'-') => (true, &input[1..]),
        _ => (false, input),
    };
    let (radix, is_digit, unprefixed): (u32, fn(u8) -> bool, &[u8]) =
        if let Some(rest) = input.strip_prefix(b"0b") {
            (2, is_binary_digit, rest)
        } else if let Some(rest) = input.strip_prefix(b"0x") {
            (16, is_hex_digit, rest)
        } else {
            (10, is_decimal_digit, input)
        };
    let digit_count = unprefixed.iter().take_while(|&&b| is_digit(b)).count();
    let digits = &unprefixed[..digit_count];
    let rest = &unprefixed[digit_count..];

    let mut magnitude: u128 = 0;
    let mut any_digit = false;
    for &b in digits {
        if b == b'_' {
            continue;
        }
        any_digit = true;
        let digit = (b as char)
            .to_digit(radix)
            .expect("digit class already checked by is_digit") as u128;
        magnitude = magnitude
            .checked_mul(radix as u128)
            .and_then(|v| v.checked_add(digit))
            .ok_or(TooShort::at(rest))?;
    }
    if !any_digit {
        return Err(TooShort::at(rest));
    }
    Ok(IntLiteral {
        neg,
        magnitude,
        rest,
    })
}

macro_rules! impl_unsigned_decode {
    ($(($name:ident, $ty:ty, $doc:literal)),* $(,)?) => {$(
        #[doc = $doc]
        pub fn $name(input: &[u8]) -> Decode<'_, $ty> {
            decode_ws(input, |input| {
                let lit = parse_int_literal(input)?;
                if lit.neg && lit.magnitude != 0 {
                    return Err(TooShort::at(lit.rest));
                }
                let value = <$ty>::try_from(lit.magnitude).map_err(|_| TooShort::at(lit.rest))?;
                Ok((value, lit.rest))
            })
        }
    )*};
}

macro_rules! impl_signed_decode {
    ($(($name:ident, $ty:ty, $doc:literal)),* $(,)?) => {$(
        #[doc = $doc]
        pub fn $name(input: &[u8]) -> Decode<'_, $ty> {
            decode_ws(input, |input| {
                let lit = parse_int_literal(input)?;
                // Narrowing the magnitude through `i128` before negating would
                // reject `$ty::MIN` for the widest signed width, whose magnitude
                // (e.g. `2^127` for `i128`) overflows `i128::MAX`. Stay in `$ty`'s
                // own unsigned-magnitude domain instead, with `$ty::MIN` handled
                // directly since its magnitude has no positive `$ty` counterpart
                // to negate.
                let value = if lit.neg {
                    if lit.magnitude == <$ty>::MIN.unsigned_abs() as u128 {
                        <$ty>::MIN
                    } else {
                        let magnitude =
                            <$ty>::try_from(lit.magnitude).map_err(|_| TooShort::at(lit.rest))?;
                        magnitude.checked_neg().ok_or(TooShort::at(lit.rest))?
                    }
                } else {
                    <$ty>::try_from(lit.magnitude).map_err(|_| TooShort::at(lit.rest))?
                };
                Ok((value, lit.rest))
            })
        }
    )*};
}

impl_unsigned_decode! {
    (decode_u8, u8, "Decodes a `u8` integer literal."),
    (decode_u16, u16, "Decodes a `u16` integer literal."),
    (decode_u32, u32, "Decodes a `u32` integer literal."),
    (decode_u64, u64, "Decodes a `u64` integer literal."),
    (decode_u128, u128, "Decodes a `u128` integer literal."),
}

impl_signed_decode! {
    (decode_i8, i8, "Decodes an `i8` integer literal."),
    (decode_i16, i16, "Decodes an `i16` integer literal."),
    (decode_i32, i32, "Decodes an `i32` integer literal."),
    (decode_i64, i64, "Decodes an `i64` integer literal."),
    (decode_i128, i128, "Decodes an `i128` integer literal."),
}

/// Parses the shared float/decimal grammar: optional `-`, a decimal digit
/// run, and an optional `.` followed by a decimal digit run. The digit runs
/// use the same `_`-tolerant decimal digit class as integer literals
/// (spec.md §4.1); separators are stripped before the platform conversion,
/// which doesn't understand them.
struct DecimalLiteral<'s> {
    neg: bool,
    int_digits: &'s [u8],
    frac_digits: &'s [u8],
    rest: &'s [u8],
}

fn parse_decimal_literal(input: &[u8]) -> Result<DecimalLiteral<'_>, TooShort<'_>> {
    let (neg, after_sign) = match input.first() {
        Some(b'-') => (true, &input[1..]),
        _ => (false, input),
    };
    let int_len = after_sign
        .iter()
        .take_while(|&&b| is_decimal_digit(b))
        .count();
    if int_len == 0 {
        return Err(TooShort::at(after_sign));
    }
    let int_digits = &after_sign[..int_len];
    let after_int = &after_sign[int_len..];
    let mut frac_digits: &[u8] = &[];
    let mut rest = after_int;
    if after_int.first() == Some(&b'.') {
        let after_dot = &after_int[1..];
        let frac_len = after_dot
            .iter()
            .take_while(|&&b| is_decimal_digit(b))
            .count();
        if frac_len > 0 {
            frac_digits = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }
    }
    Ok(DecimalLiteral {
        neg,
        int_digits,
        frac_digits,
        rest,
    })
}

/// Strips `_` digit separators, producing the text a platform numeric parser
/// accepts.
fn strip_separators(digits: &[u8], out: &mut String) {
    for &b in digits {
        if b != b'_' {
            out.push(b as char);
        }
    }
}

/// Decodes an `f32` floating-point literal, delegating to the platform's
/// string-to-float conversion (spec.md §4.2, §9: not guaranteed
/// round-trippable for every binary float, but decodable).
pub fn decode_f32(input: &[u8]) -> Decode<'_, f32> {
    decode_ws(input, |input| {
        let lit = parse_decimal_literal(input)?;
        let mut text = String::new();
        if lit.neg {
            text.push('-');
        }
        strip_separators(lit.int_digits, &mut text);
        if !lit.frac_digits.is_empty() {
            text.push('.');
            strip_separators(lit.frac_digits, &mut text);
        }
        let value = text.parse::<f32>().map_err(|_| TooShort::at(lit.rest))?;
        Ok((value, lit.rest))
    })
}

/// Decodes an `f64` floating-point literal.
pub fn decode_f64(input: &[u8]) -> Decode<'_, f64> {
    decode_ws(input, |input| {
        let lit = parse_decimal_literal(input)?;
        let mut text = String::new();
        if lit.neg {
            text.push('-');
        }
        strip_separators(lit.int_digits, &mut text);
        if !lit.frac_digits.is_empty() {
            text.push('.');
            strip_separators(lit.frac_digits, &mut text);
        }
        let value = text.parse::<f64>().map_err(|_| TooShort::at(lit.rest))?;
        Ok((value, lit.rest))
    })
}

/// Decodes a fixed-point [`Decimal`] literal.
pub fn decode_decimal(input: &[u8]) -> Decode<'_, Decimal> {
    decode_ws(input, |input| {
        let lit = parse_decimal_literal(input)?;
        let mut text = String::new();
        if lit.neg {
            text.push('-');
        }
        strip_separators(lit.int_digits, &mut text);
        strip_separators(lit.frac_digits, &mut text);
        let scale = lit.frac_digits.iter().filter(|&&b| b != b'_').count() as u32;
        let mantissa = text.parse::<i128>().map_err(|_| TooShort::at(lit.rest))?;
        Ok((Decimal::new(mantissa, scale), lit.rest))
    })
}
