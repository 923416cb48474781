//! The codec's single error type.

use std::fmt::{self, Display, Formatter};

/// A decode failure.
///
/// Every failure in this codec — a truncated input, a malformed digit, an
/// unknown escape, a width overflow, a missing delimiter — collapses to this
/// one tag. Richer diagnosis is a caller concern; this type only localizes
/// the failure by keeping the unconsumed input at the point it gave up.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TooShort<'s> {
    /// The input remaining at the point of failure. Always a suffix of the
    /// slice originally given to the decoder that failed.
    pub rest: &'s [u8],
}

impl<'s> TooShort<'s> {
    /// Constructs a failure positioned at `rest`.
    pub const fn at(rest: &'s [u8]) -> Self {
        TooShort { rest }
    }
}

impl fmt::Debug for TooShort<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use bstr::ByteSlice;
        f.debug_struct("TooShort")
            .field("rest", &self.rest.as_bstr())
            .finish()
    }
}

impl Display for TooShort<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed or truncated RVN value ({} byte(s) unparsed)",
            self.rest.len()
        )
    }
}

impl std::error::Error for TooShort<'_> {}
