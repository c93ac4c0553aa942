//! Errors raised while scanning an identifier.

use thiserror::Error;

/// Failure of an identifier scan.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubtokenError {
    /// A character outside `_`, digits, and cased letters was reached.
    ///
    /// `offset` is the byte offset of `ch` within `identifier`.
    #[error("invalid character {ch:?} at offset {offset} in identifier `{identifier}`")]
    InvalidCharacter {
        ch: char,
        offset: usize,
        identifier: String,
    },

    /// The identifier had no characters.
    #[error("cannot subtokenize an empty identifier")]
    EmptyIdentifier,

    /// A subtoken was requested after the scanner already reported its end.
    #[error("subtoken requested after the scan was exhausted")]
    ExhaustedScan,
}
