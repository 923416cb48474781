//! Boolean encoding: the literal `Bool.true` or `Bool.false`.

use crate::{encode::Encode, format::FormatState};

impl Encode for bool {
    fn encode(&self, _state: FormatState, buf: &mut Vec<u8>) {
        buf.extend_from_slice(if *self { b"Bool.true" } else { b"Bool.false" });
    }
}
