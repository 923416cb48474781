//! Tag encoding: a symbolic name plus space-separated attributes, with
//! conditional parenthesization (spec.md §4.9).
//!
//! Parenthesization is required only when a tag appears as an attribute of
//! another tag (`state.in_tag`) *and* it carries attributes of its own
//! (`!attrs.is_empty()`) — otherwise the enclosing whitespace or brackets
//! already delimit it unambiguously.

use crate::{encode::Encode, format::FormatState};

/// Encodes a tag: its name, and each attribute in order.
///
/// Attributes are heterogeneous, so they're passed as a single slice of
/// trait objects — this also sidesteps needing to know the attribute count
/// before deciding whether to parenthesize, since it's known up front.
pub fn encode_tag(buf: &mut Vec<u8>, state: FormatState, name: &str, attrs: &[&dyn Encode]) {
    let parenthesize = state.in_tag && !attrs.is_empty();
    if parenthesize {
        buf.push(b'(');
        state.newline(buf);
        state.write_indent_levels(buf, state.indent + 1);
        buf.extend_from_slice(name.as_bytes());
        write_attrs(buf, state, state.tag_attr_state_parenthesized(), attrs);
        state.newline(buf);
        state.write_indent(buf);
        buf.push(b')');
    } else {
        buf.extend_from_slice(name.as_bytes());
        write_attrs(buf, state, state.tag_attr_state(), attrs);
    }
}

fn write_attrs(buf: &mut Vec<u8>, state: FormatState, attr_state: FormatState, attrs: &[&dyn Encode]) {
    for attr in attrs {
        if state.mode == crate::format::Mode::Pretty {
            buf.push(b'\n');
            attr_state.write_indent(buf);
        } else {
            buf.push(b' ');
        }
        attr.encode(attr_state, buf);
    }
}
