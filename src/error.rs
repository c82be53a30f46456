//! Errors raised when the low-level lookup API is misused.
//!
//! Problems with the *content* of a domain name are never reported here;
//! they are collected in [`Errors`](crate::Errors) instead.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The queried value is not a Unicode code point.
    #[error("code point {0:#X} is outside the Unicode range 0..=0x10FFFF")]
    CodePointOutOfRange(u32),

    /// The mapping table has no entry for a valid code point.
    #[error("code point U+{0:04X} is missing from the mapping table")]
    Unclassified(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
