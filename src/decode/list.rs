//! List decoding: `[` element `,` ... `]`, trailing-comma tolerant.

use crate::{
    decode::{decode_ws, expect_byte, Decode},
    depth::DepthGuard,
    error::TooShort,
    lex::skip_whitespace_indent,
};

/// Decodes a bracket-delimited, comma-separated list, calling `elem` for
/// each element in turn.
///
/// An element-decode failure is tolerated only when the next non-whitespace
/// byte is `]`, in which case the list is treated as terminated early
/// (spec.md §7's open question; this implementation preserves the
/// origin's tolerant behavior). Any other element failure propagates.
pub fn decode_list<'s, T>(
    input: &'s [u8],
    mut elem: impl FnMut(&'s [u8]) -> Decode<'s, T>,
) -> Decode<'s, Vec<T>> {
    decode_ws(input, |input| {
        let mut input = expect_byte(input, b'[')?;
        let _guard = DepthGuard::enter(input)?;
        let mut items = Vec::new();
        loop {
            let stripped = skip_whitespace_indent(input).rest;
            if let Some(rest) = stripped.strip_prefix(b"]") {
                return Ok((items, rest));
            }
            match elem(stripped) {
                Ok((value, rest)) => {
                    items.push(value);
                    let rest = skip_whitespace_indent(rest).rest;
                    match rest.first() {
                        Some(b']') => return Ok((items, &rest[1..])),
                        Some(b',') => input = &rest[1..],
                        _ => return Err(TooShort::at(rest)),
                    }
                }
                Err(_) => {
                    let after = skip_whitespace_indent(stripped).rest;
                    if let Some(rest) = after.strip_prefix(b"]") {
                        return Ok((items, rest));
                    }
                    return Err(TooShort::at(stripped));
                }
            }
        }
    })
}
