//! Record decoding: `{` `key:value` `,` ... `}`, type-directed by a
//! caller-supplied field selector.

use crate::{
    decode::{decode_ws, expect_byte, skip, Decode},
    depth::DepthGuard,
    error::TooShort,
    lex::skip_whitespace_indent,
};

/// A decoder for a single field's value. Expected to parse a prefix of its
/// input, recording the decoded value into an accumulator it closes over,
/// and return the remainder.
pub type FieldDecoder<'s, 'a> = Box<dyn FnOnce(&'s [u8]) -> Result<&'s [u8], TooShort<'s>> + 'a>;

/// What to do with a record field, returned by the caller's `step_field`
/// selector for each key encountered.
pub enum FieldStep<'s, 'a> {
    /// Decode this field's value with the given decoder.
    Keep(FieldDecoder<'s, 'a>),
    /// Discard this field's value; it is not part of the caller's shape.
    Skip,
}

/// Decodes a brace-delimited record. For each `key:value` pair, calls
/// `step_field(key)` to ask the caller whether to decode or skip the value.
///
/// There is no separate `finalize` step in this API (spec.md §4.7): the
/// caller's `step_field` closures write directly into an accumulator they
/// capture, and the caller builds its final value from that accumulator
/// after this function returns `Ok`.
pub fn decode_record<'s, 'a>(
    input: &'s [u8],
    mut step_field: impl FnMut(&str) -> FieldStep<'s, 'a>,
) -> Decode<'s, ()> {
    decode_ws(input, move |input| {
        let mut input = expect_byte(input, b'{')?;
        let _guard = DepthGuard::enter(input)?;
        loop {
            let stripped = skip_whitespace_indent(input).rest;
            if let Some(rest) = stripped.strip_prefix(b"}") {
                return Ok(((), rest));
            }
            let key_end = stripped
                .iter()
                .position(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'#' | b':'))
                .unwrap_or(stripped.len());
            if key_end == 0 {
                return Err(TooShort::at(stripped));
            }
            let key = std::str::from_utf8(&stripped[..key_end])
                .map_err(|_| TooShort::at(stripped))?;
            let after_key = skip_whitespace_indent(&stripped[key_end..]).rest;
            let after_colon = expect_byte(after_key, b':')?;

            let rest = match step_field(key) {
                FieldStep::Keep(decode_value) => decode_value(after_colon)?,
                FieldStep::Skip => skip(after_colon)?.1,
            };
            let rest = skip_whitespace_indent(rest).rest;
            match rest.first() {
                Some(b'}') => return Ok(((), &rest[1..])),
                Some(b',') => input = &rest[1..],
                _ => return Err(TooShort::at(rest)),
            }
        }
    })
}
