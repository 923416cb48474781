//! String literal decoding: quote handling and escape unescaping.

use std::borrow::Cow;

use crate::{
    decode::{decode_ws, Decode},
    error::TooShort,
};

/// Decodes a `"`-quoted string literal, unescaping `\n`, `\t`, `\"`, `\\`,
/// and `\$`. Triple-quoted strings and `\u(...)` escapes are not supported
/// (spec.md §1 Non-goals) and fail like any other unknown escape.
///
/// Returns a borrowed slice when the literal contains no escapes, and an
/// owned string otherwise.
pub fn decode_string(input: &[u8]) -> Decode<'_, Cow<'_, str>> {
    decode_ws(input, |input| {
        if input.first() != Some(&b'"') {
            return Err(TooShort::at(input));
        }
        if input.starts_with(b"\"\"\"") {
            // Triple-quoted strings are not supported.
            return Err(TooShort::at(input));
        }
        let body = &input[1..];
        // Bytes, not chars: the literal may contain multi-byte UTF-8
        // sequences, which must round-trip untouched around any escapes.
        let mut owned: Option<Vec<u8>> = None;
        let mut i = 0;
        loop {
            if i >= body.len() {
                return Err(TooShort::at(input));
            }
            match body[i] {
                b'"' => {
                    let rest = &body[i + 1..];
                    let value = match owned {
                        Some(bytes) => Cow::Owned(
                            String::from_utf8(bytes).map_err(|_| TooShort::at(input))?,
                        ),
                        None => Cow::Borrowed(
                            std::str::from_utf8(&body[..i]).map_err(|_| TooShort::at(input))?,
                        ),
                    };
                    return Ok((value, rest));
                }
                b'\\' => {
                    let escaped = match body.get(i + 1) {
                        Some(b'n') => b'\n',
                        Some(b't') => b'\t',
                        Some(b'"') => b'"',
                        Some(b'\\') => b'\\',
                        Some(b'$') => b'$',
                        _ => return Err(TooShort::at(&body[i + 1..])),
                    };
                    let bytes = owned.get_or_insert_with(|| body[..i].to_vec());
                    bytes.push(escaped as u8);
                    i += 2;
                }
                b => {
                    if let Some(bytes) = owned.as_mut() {
                        bytes.push(b);
                    }
                    i += 1;
                }
            }
        }
    })
}
