//! String encoding: `"`-quoting and escaping `\n \t " \ $` (spec.md §4.5).

use std::borrow::Cow;

use crate::{encode::Encode, format::FormatState};

fn encode_str(value: &str, buf: &mut Vec<u8>) {
    buf.push(b'"');
    for b in value.bytes() {
        match b {
            b'\n' => buf.extend_from_slice(br"\n"),
            b'\t' => buf.extend_from_slice(br"\t"),
            b'"' => buf.extend_from_slice(br#"\""#),
            b'\\' => buf.extend_from_slice(br"\\"),
            b'$' => buf.extend_from_slice(br"\$"),
            _ => buf.push(b),
        }
    }
    buf.push(b'"');
}

impl Encode for str {
    fn encode(&self, _state: FormatState, buf: &mut Vec<u8>) {
        encode_str(self, buf);
    }
}

impl Encode for String {
    fn encode(&self, state: FormatState, buf: &mut Vec<u8>) {
        self.as_str().encode(state, buf);
    }
}

impl Encode for Cow<'_, str> {
    fn encode(&self, state: FormatState, buf: &mut Vec<u8>) {
        self.as_ref().encode(state, buf);
    }
}
