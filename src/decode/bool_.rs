//! Boolean literal decoding: exactly `Bool.true` or `Bool.false`.

use crate::{
    decode::{decode_ws, Decode},
    error::TooShort,
};

/// Decodes exactly the byte sequence `Bool.true` or `Bool.false`.
pub fn decode_bool(input: &[u8]) -> Decode<'_, bool> {
    decode_ws(input, |input| {
        if let Some(rest) = input.strip_prefix(b"Bool.true") {
            Ok((true, rest))
        } else if let Some(rest) = input.strip_prefix(b"Bool.false") {
            Ok((false, rest))
        } else {
            Err(TooShort::at(input))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_true() {
        assert_eq!(decode_bool(b"Bool.true").unwrap(), (true, &b""[..]));
    }

    #[test]
    fn decodes_false() {
        assert_eq!(decode_bool(b"Bool.false").unwrap(), (false, &b""[..]));
    }

    #[test]
    fn rejects_anything_else() {
        assert!(decode_bool(b"Bool.maybe").is_err());
        assert!(decode_bool(b"true").is_err());
    }

    #[test]
    fn leaves_trailing_bytes() {
        assert_eq!(decode_bool(b"Bool.trueX").unwrap(), (true, &b"X"[..]));
    }
}
