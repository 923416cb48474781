//! Record encoding: brace-delimited `key:value` fields, in caller-supplied
//! order (spec.md §4.7).

use crate::{encode::Encode, format::FormatState};

/// A builder that accumulates a record's fields, in the order `field` is
/// called, and closes the record on [`finish`](RecordEncoder::finish).
pub struct RecordEncoder<'b> {
    buf: &'b mut Vec<u8>,
    state: FormatState,
    inner: FormatState,
    has_fields: bool,
}

impl<'b> RecordEncoder<'b> {
    /// Opens a record, writing `{` (and, in Pretty, the following newline).
    pub fn new(buf: &'b mut Vec<u8>, state: FormatState) -> Self {
        buf.push(b'{');
        RecordEncoder {
            buf,
            state,
            inner: state.enter_compound(),
            has_fields: false,
        }
    }

    /// Appends one `key:value` field.
    pub fn field<T: Encode + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        if !self.has_fields {
            self.state.newline(self.buf);
            self.has_fields = true;
        }
        self.inner.write_indent(self.buf);
        self.buf.extend_from_slice(key.as_bytes());
        self.buf.push(b':');
        if self.state.mode == crate::format::Mode::Pretty {
            self.buf.push(b' ');
        }
        value.encode(self.inner, self.buf);
        self.buf.push(b',');
        self.state.newline(self.buf);
        self
    }

    /// Closes the record, writing the outer indent (Pretty only) and `}`.
    pub fn finish(self) {
        if self.has_fields {
            self.state.write_indent(self.buf);
        }
        self.buf.push(b'}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Mode;

    #[test]
    fn empty_record() {
        let mut buf = Vec::new();
        RecordEncoder::new(&mut buf, FormatState::new(Mode::Compact)).finish();
        assert_eq!(buf, b"{}");
    }

    #[test]
    fn compact_fields() {
        let mut buf = Vec::new();
        let mut rec = RecordEncoder::new(&mut buf, FormatState::new(Mode::Compact));
        rec.field("a", &1u8).field("b", &2u8);
        rec.finish();
        assert_eq!(buf, b"{a:1,b:2,}");
    }

    #[test]
    fn pretty_fields_are_indented() {
        let mut buf = Vec::new();
        let mut rec = RecordEncoder::new(&mut buf, FormatState::new(Mode::Pretty));
        rec.field("a", &1u8);
        rec.finish();
        assert_eq!(buf, b"{\n    a: 1,\n}");
    }
}
