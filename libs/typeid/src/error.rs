//! Error types for identifier validation, parsing, and generation.

use thiserror::Error;

use crate::codec::ENCODED_LEN;
use crate::tag::MAX_TAG_LEN;

/// A broken tag rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    /// The tag exceeds the maximum length.
    #[error("tag is {0} characters long, limit is {max}", max = MAX_TAG_LEN)]
    TooLong(usize),

    /// The tag contains a character outside `a`-`z` and `_`.
    #[error("tag contains illegal character {0:?} (allowed: 'a'-'z' and '_')")]
    IllegalChar(char),

    /// The tag starts or ends with an underscore.
    #[error("tag must not start or end with '_'")]
    UnderscoreEdge,

    /// The tag is empty where one is required.
    #[error("tag cannot be empty here")]
    Empty,
}

/// A malformed 26-character suffix.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SuffixError {
    /// The suffix is not exactly 26 characters.
    #[error("suffix is {0} characters long, expected exactly {len}", len = ENCODED_LEN)]
    WrongLength(usize),

    /// The suffix contains a character outside the base32 alphabet.
    #[error("suffix contains {0:?}, not in the base32 alphabet")]
    IllegalChar(char),

    /// The decoded value would exceed 128 bits.
    #[error("suffix overflows 128 bits (first character must be '0'-'7')")]
    Overflow,
}

/// Errors surfaced by the identifier API.
///
/// `InvalidTag`, `InvalidSuffix`, `Parse`, and `TagMismatch` describe
/// malformed or unexpected input and map to a client-facing validation
/// response; `Generation` is an internal fault of the entropy source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeIdError {
    /// The tag half is invalid.
    #[error("invalid tag: {0}")]
    InvalidTag(#[from] TagError),

    /// The suffix half is invalid.
    #[error("invalid suffix: {0}")]
    InvalidSuffix(#[from] SuffixError),

    /// The string does not split into a tag/suffix pair.
    #[error("malformed identifier: {0}")]
    Parse(String),

    /// The tag is valid but names a different identifier type.
    ///
    /// Returned by statically-tagged wrappers (see [`define_typed_id!`]).
    ///
    /// [`define_typed_id!`]: crate::define_typed_id
    #[error("expected tag '{expected}', got '{actual}'")]
    TagMismatch {
        expected: &'static str,
        actual: String,
    },

    /// The random source failed to produce bytes.
    #[error("identifier generation failed: {0}")]
    Generation(String),
}

impl TypeIdError {
    /// Returns true if the error was caused by malformed input rather
    /// than an internal fault.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, TypeIdError::Generation(_))
    }
}
