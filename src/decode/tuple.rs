//! Tuple decoding: `(` value `,` ... `)`, fixed arity, type-directed by
//! index.

use crate::{
    decode::{decode_ws, expect_byte, Decode, FieldDecoder},
    depth::DepthGuard,
    error::TooShort,
    lex::skip_whitespace_indent,
};

/// What to do for the element at a given tuple index, returned by the
/// caller's `step_field` selector.
pub enum IndexStep<'s, 'a> {
    /// Decode this element with the given decoder.
    Next(FieldDecoder<'s, 'a>),
    /// This index is beyond the tuple's fixed arity.
    TooLong,
}

/// Decodes a paren-delimited, fixed-arity tuple.
///
/// Too few elements (the caller's selector still returns `Next` when the
/// input has reached `)`) fails `TooShort`. Too many (the selector returns
/// `TooLong` while input remains) also fails, with `rest` positioned at the
/// first extra element (spec.md §8, scenario 9).
pub fn decode_tuple<'s, 'a>(
    input: &'s [u8],
    mut step_field: impl FnMut(usize) -> IndexStep<'s, 'a>,
) -> Decode<'s, ()> {
    decode_ws(input, move |input| {
        let mut input = expect_byte(input, b'(')?;
        let _guard = DepthGuard::enter(input)?;
        let mut index = 0usize;
        loop {
            let stripped = skip_whitespace_indent(input).rest;
            match step_field(index) {
                IndexStep::TooLong => {
                    return match stripped.strip_prefix(b")") {
                        Some(rest) => Ok(((), rest)),
                        None => Err(TooShort::at(stripped)),
                    };
                }
                IndexStep::Next(decode_value) => match decode_value(stripped) {
                    Ok(rest) => {
                        let rest = skip_whitespace_indent(rest).rest;
                        match rest.first() {
                            Some(b')') => return Ok(((), &rest[1..])),
                            Some(b',') => {
                                input = &rest[1..];
                                index += 1;
                            }
                            _ => return Err(TooShort::at(rest)),
                        }
                    }
                    Err(_) => {
                        return match stripped.strip_prefix(b")") {
                            Some(rest) => Ok(((), rest)),
                            None => Err(TooShort::at(stripped)),
                        };
                    }
                },
            }
        }
    })
}
