//! Tuple encoding: mirrors list encoding with `(`/`)` delimiters, but over
//! a heterogeneous slice of attribute encoders (spec.md §4.8).

use crate::{encode::Encode, format::FormatState};

/// Encodes a fixed-arity tuple. Elements are heterogeneous, so they are
/// passed as trait objects rather than a single typed slice.
pub fn encode_tuple(buf: &mut Vec<u8>, state: FormatState, items: &[&dyn Encode]) {
    buf.push(b'(');
    if items.is_empty() {
        buf.push(b')');
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
    buf.push(b')');
}
