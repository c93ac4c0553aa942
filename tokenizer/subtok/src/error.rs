//! Error types for splitting, reassembly, and vocabulary I/O.

use std::path::PathBuf;

use subtok_core::SubtokenError;
use thiserror::Error;

/// Failure while splitting a token stream.
///
/// `index` is the position of the offending token in its input sequence.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// A zero-length token was passed in.
    #[error("token {index} is empty")]
    EmptyToken { index: usize },

    /// An identifier-like token contained a character the scanner rejects.
    #[error("token {index}: {source}")]
    Subtokenize {
        index: usize,
        #[source]
        source: SubtokenError,
    },

    /// Error from one of several streams split together.
    #[error("stream {stream}: {source}")]
    InStream {
        stream: usize,
        #[source]
        source: Box<SplitError>,
    },
}

/// Failure while regrouping a subtoken stream by its lengths.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReassembleError {
    /// The lengths do not add up to the number of subtokens.
    #[error("lengths cover {expected} subtokens but the stream has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A token was recorded as expanding to zero subtokens.
    #[error("token {index} has length 0")]
    ZeroLength { index: usize },

    /// A non-final subtoken of a multi-part token lacks the marker.
    #[error("subtoken {position} (`{subtoken}`) is missing the continuation marker")]
    MissingMarker { position: usize, subtoken: String },
}

/// Failure while saving or loading a vocabulary file.
#[derive(Debug, Error)]
pub enum VocabError {
    /// Refused to overwrite an existing file.
    #[error("vocabulary file '{}' already exists", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
