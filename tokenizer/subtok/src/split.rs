//! Token stream splitting.
//!
//! A token is identifier-like when its first character is `_` or a letter.
//! Identifier-like tokens go through the scanner; everything else (numbers,
//! operators, punctuation) is emitted whole with length 1.

use rayon::prelude::*;
use subtok_core::{is_identifier_start, subtokenize};

use crate::error::SplitError;
use crate::options::{InvalidTokenPolicy, SplitOptions};

/// Suffix marking a subtoken as glued to the one after it.
pub const CONTINUATION_MARKER: &str = "@@";

/// Result of splitting one token sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitOutput {
    /// Flat subtoken stream, in input order.
    pub subtokens: Vec<String>,
    /// Subtoken count per input token; present when
    /// [`SplitOptions::emit_lengths`] is set.
    pub lengths: Option<Vec<usize>>,
}

/// Split a sequence of lexical tokens into subtokens.
///
/// Fails on the first empty token, and on the first identifier-like token
/// that does not scan unless [`SplitOptions::on_invalid`] is
/// [`InvalidTokenPolicy::KeepWhole`].
#[tracing::instrument(level = "debug", skip_all, fields(count = tokens.len()))]
pub fn split_tokens<S: AsRef<str>>(
    tokens: &[S],
    options: &SplitOptions,
) -> Result<SplitOutput, SplitError> {
    let mut subtokens = Vec::with_capacity(tokens.len());
    let mut lengths = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let Some(first) = token.chars().next() else {
            return Err(SplitError::EmptyToken { index });
        };

        let len = if is_identifier_start(first) {
            match subtokenize(token, options.underscore_as_own_subtoken) {
                Ok(parts) => {
                    push_marked(&mut subtokens, &parts, options);
                    parts.len()
                }
                Err(source) if options.on_invalid == InvalidTokenPolicy::KeepWhole => {
                    tracing::trace!(index, %source, "keeping unscannable token whole");
                    subtokens.push(options.render(token));
                    1
                }
                Err(source) => return Err(SplitError::Subtokenize { index, source }),
            }
        } else {
            subtokens.push(options.render(token));
            1
        };
        lengths.push(len);
    }

    tracing::debug!(subtokens = subtokens.len(), "split complete");
    Ok(SplitOutput {
        subtokens,
        lengths: options.emit_lengths.then_some(lengths),
    })
}

/// Split many independent token sequences in parallel.
///
/// Output order matches input order. If any sequence fails, the error of
/// the earliest failing sequence is returned, wrapped in
/// [`SplitError::InStream`].
#[tracing::instrument(level = "debug", skip_all, fields(streams = streams.len()))]
pub fn split_streams<S: AsRef<str> + Sync>(
    streams: &[Vec<S>],
    options: &SplitOptions,
) -> Result<Vec<SplitOutput>, SplitError> {
    let results: Vec<_> = streams
        .par_iter()
        .map(|tokens| split_tokens(tokens, options))
        .collect();

    results
        .into_iter()
        .enumerate()
        .map(|(stream, result)| {
            result.map_err(|source| SplitError::InStream {
                stream,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Append one token's subtokens, marking all but the last.
fn push_marked(out: &mut Vec<String>, parts: &[&str], options: &SplitOptions) {
    let Some((last, init)) = parts.split_last() else {
        return;
    };
    for part in init {
        out.push(options.render(&format!("{part}{CONTINUATION_MARKER}")));
    }
    out.push(options.render(last));
}
