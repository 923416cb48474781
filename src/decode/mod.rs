//! The decoder: a recursive-descent parser over a byte slice, returning
//! `(value, remaining_bytes)` from every primitive, with every failure
//! collapsing to [`TooShort`].

mod bool_;
mod list;
mod numeric;
mod record;
mod skip;
mod string;
mod tuple;

pub use bool_::decode_bool;
pub use list::decode_list;
pub use numeric::*;
pub use record::{decode_record, FieldDecoder, FieldStep};
pub use skip::skip;
pub use string::decode_string;
pub use tuple::{decode_tuple, IndexStep};

use crate::{error::TooShort, format::Mode, lex::skip_whitespace_indent};

/// The result of a decode: the parsed value and the unconsumed remainder, or
/// a [`TooShort`] failure positioned at the point parsing gave up.
pub type Decode<'s, T> = Result<(T, &'s [u8]), TooShort<'s>>;

/// Wraps a primitive decoder so it strips leading whitespace/comments before
/// running and trailing whitespace/comments before returning its remainder
/// (spec.md §4.10). Every exported `decode_*` function in this crate is
/// built on top of this.
pub fn decode_ws<'s, T>(
    input: &'s [u8],
    inner: impl FnOnce(&'s [u8]) -> Decode<'s, T>,
) -> Decode<'s, T> {
    let input = skip_whitespace_indent(input).rest;
    let (value, rest) = inner(input)?;
    let rest = skip_whitespace_indent(rest).rest;
    Ok((value, rest))
}

/// Consumes a single expected byte, or fails at the byte that didn't match.
pub(crate) fn expect_byte<'s>(input: &'s [u8], b: u8) -> Result<&'s [u8], TooShort<'s>> {
    if input.first() == Some(&b) {
        Ok(&input[1..])
    } else {
        Err(TooShort::at(input))
    }
}

/// Decodes `input` with `decoder`, succeeding only if the entire input is
/// consumed (after whitespace stripping).
///
/// `mode` is accepted for interface symmetry with [`encode`](crate::encode)
/// but is not consulted: Compact and Pretty input decode identically
/// (spec.md §8, property 4; §9's note on the unused `indent` parameter).
pub fn decode_full<'s, T>(
    input: &'s [u8],
    _mode: Mode,
    decoder: impl FnOnce(&'s [u8]) -> Decode<'s, T>,
) -> Result<T, TooShort<'s>> {
    let (value, rest) = decoder(input)?;
    if rest.is_empty() {
        Ok(value)
    } else {
        Err(TooShort::at(rest))
    }
}

/// Decodes a prefix of `input` with `decoder`, returning whatever remains
/// unconsumed.
pub fn decode_partial<'s, T>(
    input: &'s [u8],
    _mode: Mode,
    decoder: impl FnOnce(&'s [u8]) -> Decode<'s, T>,
) -> Decode<'s, T> {
    decoder(input)
}
