//! Splitting configuration.

/// What to do with an identifier-like token the scanner rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidTokenPolicy {
    /// Fail the whole call with [`SplitError::Subtokenize`](crate::SplitError).
    #[default]
    Abort,
    /// Emit the token unsplit, as if it were not identifier-like.
    KeepWhole,
}

/// Options for [`split_tokens`](crate::split_tokens).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOptions {
    /// Lowercase every emitted subtoken and pass-through token.
    pub lowercase: bool,
    /// Emit each `_` as its own subtoken instead of gluing it to the next word.
    pub underscore_as_own_subtoken: bool,
    /// Return the per-token length sequence alongside the subtokens.
    pub emit_lengths: bool,
    /// Handling of identifier-like tokens that fail to scan.
    pub on_invalid: InvalidTokenPolicy,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            lowercase: false,
            underscore_as_own_subtoken: true,
            emit_lengths: false,
            on_invalid: InvalidTokenPolicy::Abort,
        }
    }
}

impl SplitOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    #[must_use]
    pub fn with_underscore_as_own_subtoken(mut self, own: bool) -> Self {
        self.underscore_as_own_subtoken = own;
        self
    }

    #[must_use]
    pub fn with_lengths(mut self, emit_lengths: bool) -> Self {
        self.emit_lengths = emit_lengths;
        self
    }

    #[must_use]
    pub fn with_invalid_policy(mut self, policy: InvalidTokenPolicy) -> Self {
        self.on_invalid = policy;
        self
    }

    /// Apply output casing to one emitted piece.
    pub fn render(&self, text: &str) -> String {
        if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_owned()
        }
    }
}
