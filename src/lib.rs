//! A codec for RVN, a human-editable data-interchange format.
//!
//! Encoding is type-directed: implement [`encode::Encode`] for a type (or use
//! the free functions in [`encode`] for compounds) and call [`format::encode`]
//! to get Compact or Pretty bytes out. Decoding is also type-directed and
//! caller-driven: each `decode_*` function in [`decode`] takes the bytes to
//! parse and returns the value plus whatever's left unconsumed, so callers
//! compose primitive decoders into decoders for their own types rather than
//! parsing into a universal value tree.

pub mod decode;
mod depth;
pub mod encode;
pub mod error;
pub mod format;
mod lex;
pub mod value;
