//! The skip-decoder: parses any well-formed RVN value and discards it,
//! used to advance past record fields a caller's shape doesn't claim.
//!
//! [`skip`] dispatches on the first byte of a value and is mutually
//! recursive with [`decode_record`] (via [`FieldStep::Skip`]) and
//! [`decode_tuple`]/[`decode_list`] (by using `skip` itself as the element
//! decoder) — there is no separate trait-object detour (spec.md §9).

use crate::{
    decode::{
        decode_bool, decode_list, decode_record, decode_string, decode_tuple, decode_ws, Decode,
        FieldStep, IndexStep,
    },
    error::TooShort,
    lex::{is_binary_digit, is_decimal_digit, is_hex_digit},
};

/// Parses any one well-formed value and discards it.
pub fn skip(input: &[u8]) -> Decode<'_, ()> {
    decode_ws(input, |input| match input.first() {
        Some(b'"') => decode_string(input).map(|(_, rest)| ((), rest)),
        Some(b'B') if input.starts_with(b"Bool.") => {
            decode_bool(input).map(|(_, rest)| ((), rest))
        }
        Some(b'[') => decode_list(input, skip).map(|(_, rest)| ((), rest)),
        Some(b'(') => decode_tuple(input, |_| IndexStep::Next(Box::new(|r| skip(r).map(|(_, rest)| rest)))),
        Some(b'{') => decode_record(input, |_| FieldStep::Skip),
        Some(b'-') | Some(b'0'..=b'9') => {
            // Step 1 of spec.md §4.2's shared numeric grammar (optional `-`)
            // applies before step 2 (the `0b`/`0x` radix prefix) for every
            // numeric codec, including this one — `-0x1a` is a valid value
            // and must not fall through to `skip_decimal`, which doesn't
            // know about radix prefixes at all.
            let after_sign = input.strip_prefix(b"-").unwrap_or(input);
            if after_sign.starts_with(b"0b") || after_sign.starts_with(b"0x") {
                skip_wide_int(input)
            } else {
                skip_decimal(input)
            }
        }
        _ => Err(TooShort::at(input)),
    })
}

/// Skips a `-`-optional, `0b`/`0x`-prefixed integer literal without computing
/// its value, so there is no width to overflow (spec.md §4.9: "using the
/// widest width available to avoid overflow on valid input").
fn skip_wide_int(input: &[u8]) -> Decode<'_, ()> {
    decode_ws(input, |input| {
        let after_sign = input.strip_prefix(b"-").unwrap_or(input);
        let is_digit: fn(u8) -> bool = if after_sign.starts_with(b"0b") {
            is_binary_digit
        } else {
            is_hex_digit
        };
        let unprefixed = &after_sign[2..];
        let end = unprefixed.iter().take_while(|&&b| is_digit(b)).count();
        if end == 0 {
            return Err(TooShort::at(unprefixed));
        }
        Ok(((), &unprefixed[end..]))
    })
}

/// Skips a float/decimal literal without computing its value.
fn skip_decimal(input: &[u8]) -> Decode<'_, ()> {
    decode_ws(input, |input| {
        let after_sign = match input.first() {
            Some(b'-') => &input[1..],
            _ => input,
        };
        let int_len = after_sign
            .iter()
            .take_while(|&&b| is_decimal_digit(b))
            .count();
        if int_len == 0 {
            return Err(TooShort::at(after_sign));
        }
        let after_int = &after_sign[int_len..];
        if after_int.first() == Some(&b'.') {
            let after_dot = &after_int[1..];
            let frac_len = after_dot
                .iter()
                .take_while(|&&b| is_decimal_digit(b))
                .count();
            if frac_len > 0 {
                return Ok(((), &after_dot[frac_len..]));
            }
        }
        Ok(((), after_int))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_string() {
        let (_, rest) = skip(br#""hello""#).unwrap();
        assert_eq!(rest, b"");
    }

    #[test]
    fn skips_bool() {
        let (_, rest) = skip(b"Bool.true").unwrap();
        assert_eq!(rest, b"");
    }

    #[test]
    fn skips_nested_compounds() {
        let (_, rest) = skip(b"{ tuple: (4, { key: [1,2,3] } ) }").unwrap();
        assert_eq!(rest, b"");
    }

    #[test]
    fn skips_hex_int() {
        let (_, rest) = skip(b"0x1a").unwrap();
        assert_eq!(rest, b"");
    }

    #[test]
    fn skips_negative_hex_int() {
        let (_, rest) = skip(b"-0x1a").unwrap();
        assert_eq!(rest, b"");
    }

    #[test]
    fn skips_negative_binary_int_before_closing_bracket() {
        let (_, rest) = skip(b"[-0x1a]").unwrap();
        assert_eq!(rest, b"");
    }

    #[test]
    fn skips_negative_float() {
        let (_, rest) = skip(b"-3.25").unwrap();
        assert_eq!(rest, b"");
    }

    #[test]
    fn tag_shaped_input_fails() {
        // Tag decoding is not provided by the skip-decoder (spec.md §4.9):
        // a bare identifier is not any of the recognized value shapes.
        assert!(skip(b"Foo").is_err());
    }

    #[test]
    fn skips_list_of_tuples() {
        let (_, rest) = skip(b"[(1,2,),(3,4,),]").unwrap();
        assert_eq!(rest, b"");
    }
}
