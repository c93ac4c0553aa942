//! Token-stream subtokenizer.
//!
//! Applies the identifier scanner from [`subtok_core`] across a sequence of
//! lexical tokens and produces a flat subtoken stream:
//!
//! ```text
//! ["fooBar", "=", "1"]  ──►  ["foo@@", "Bar", "=", "1"]   lengths [2, 1, 1]
//! ```
//!
//! Every subtoken of a multi-part token except the last carries the
//! continuation marker [`CONTINUATION_MARKER`]; the length sequence records
//! how many subtokens each input token expanded to, so the stream can be
//! regrouped with [`reassemble`].
//!
//! The [`Vocabulary`] assigns stable integer ids to subtoken strings for
//! downstream consumers.

mod error;
mod options;
mod reassemble;
mod split;
mod tracing_setup;
mod vocab;

pub use error::{ReassembleError, SplitError, VocabError};
pub use options::{InvalidTokenPolicy, SplitOptions};
pub use reassemble::{reassemble, strip_marker};
pub use split::{split_streams, split_tokens, SplitOutput, CONTINUATION_MARKER};
pub use tracing_setup::init_tracing;
pub use vocab::Vocabulary;

// Re-export the identifier scanner so callers need a single dependency.
pub use subtok_core::{subtokenize, CharClass, IdentifierScanner, SubtokenError};
