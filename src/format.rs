//! Encoder output mode and the format state threaded through encoding.

/// The two encoder output modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No insignificant whitespace.
    Compact,
    /// Indented, newline-separated, four spaces per nesting level.
    Pretty,
}

/// The number of spaces a single indent level contributes in [`Mode::Pretty`].
const INDENT_WIDTH: usize = 4;

/// Format state passed by value through the encoder's recursion.
///
/// Entering a compound (list/record/tuple) increments `indent` and clears
/// `in_tag`. Entering a tag's attribute increments `indent` (by one, or by
/// two when the tag is parenthesized) and sets `in_tag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatState {
    /// Compact or Pretty.
    pub mode: Mode,
    /// Current nesting depth; each level is four spaces in Pretty.
    pub indent: u32,
    /// True iff the immediately enclosing context is a tag's attribute list.
    pub in_tag: bool,
}

impl FormatState {
    /// The initial state for a top-level `encode` call: no indent, not in a
    /// tag.
    pub const fn new(mode: Mode) -> Self {
        FormatState {
            mode,
            indent: 0,
            in_tag: false,
        }
    }

    /// The state on entering a list, record, or tuple: indent one level
    /// deeper, `in_tag` cleared.
    pub const fn enter_compound(self) -> Self {
        FormatState {
            mode: self.mode,
            indent: self.indent + 1,
            in_tag: false,
        }
    }

    /// The state for an attribute at the given indent level, always with
    /// `in_tag` set.
    const fn attr_state(self, indent: u32) -> Self {
        FormatState {
            mode: self.mode,
            indent,
            in_tag: true,
        }
    }

    /// Appends a newline, only in Pretty mode.
    pub fn newline(self, buf: &mut Vec<u8>) {
        if self.mode == Mode::Pretty {
            buf.push(b'\n');
        }
    }

    /// Appends `levels` indent steps (four spaces each), only in Pretty mode.
    pub fn write_indent_levels(self, buf: &mut Vec<u8>, levels: u32) {
        if self.mode == Mode::Pretty {
            for _ in 0..levels {
                buf.extend_from_slice(&[b' '; INDENT_WIDTH]);
            }
        }
    }

    /// Appends the current indent (`self.indent` levels), only in Pretty
    /// mode.
    pub fn write_indent(self, buf: &mut Vec<u8>) {
        self.write_indent_levels(buf, self.indent);
    }
}

/// Encodes a value in the given mode, returning the encoded bytes.
pub fn encode<T: crate::encode::Encode + ?Sized>(value: &T, mode: Mode) -> Vec<u8> {
    let mut buf = Vec::new();
    value.encode(FormatState::new(mode), &mut buf);
    buf
}

impl FormatState {
    /// The attribute-level state when emitting a tag's attributes without
    /// parenthesization: `indent + 1`, `in_tag = true`.
    pub(crate) const fn tag_attr_state(self) -> Self {
        self.attr_state(self.indent + 1)
    }

    /// The attribute-level state when the tag is parenthesized:
    /// `indent + 2`, `in_tag = true`.
    pub(crate) const fn tag_attr_state_parenthesized(self) -> Self {
        self.attr_state(self.indent + 2)
    }
}
