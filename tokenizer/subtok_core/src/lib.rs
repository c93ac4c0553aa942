//! Identifier subtokenizer core.
//!
//! Splits one source-code identifier into its linguistic parts by scanning
//! character classes left to right:
//!
//! ```text
//! fooBarBaz   -> foo | Bar | Baz
//! HTTPServer  -> HTTP | Server
//! item123     -> item | 123
//! my_var_2    -> my | _ | var | _ | 2
//! ```
//!
//! This crate has no knowledge of token streams, continuation markers, or
//! vocabularies; those live in the `subtok` crate. External tools that only
//! need identifier splitting can depend on this crate alone.
//!
//! # Layers
//!
//! - [`CharClass`]: closed classification of a single character.
//! - `Cursor` (private): forward-only position over the identifier with a
//!   non-advancing one-character lookahead.
//! - [`IdentifierScanner`]: produces one subtoken per call.

mod class;
mod cursor;
mod error;
mod scanner;

pub use class::{is_identifier_start, CharClass};
pub use error::SubtokenError;
pub use scanner::IdentifierScanner;

/// Split `identifier` into subtokens.
///
/// With `underscore_as_own_subtoken`, every `_` becomes a subtoken of its
/// own; otherwise an underscore is glued to the lowercase run that follows
/// it (`_foo` stays whole).
///
/// The returned slices borrow from `identifier` and concatenate back to it
/// exactly.
pub fn subtokenize(
    identifier: &str,
    underscore_as_own_subtoken: bool,
) -> Result<Vec<&str>, SubtokenError> {
    IdentifierScanner::new(identifier, underscore_as_own_subtoken)?.collect()
}
