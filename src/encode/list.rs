//! List encoding: bracket-delimited, comma-separated, always trailing a
//! comma after the last element (spec.md §4.6).

use crate::{encode::Encode, format::FormatState};

/// Encodes a homogeneous slice as an RVN list.
pub fn encode_list<T: Encode>(buf: &mut Vec<u8>, state: FormatState, items: &[T]) {
    buf.push(b'[');
    if items.is_empty() {
        buf.push(b']');
        return;
    }
    state.newline(buf);
    let inner = state.enter_compound();
    for item in items {
        inner.write_indent(buf);
        item.encode(inner, buf);
        buf.push(b',');
        state.newline(buf);
    }
    state.write_indent(buf);
    buf.push(b']');
}
