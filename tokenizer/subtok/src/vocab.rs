//! Subtoken vocabulary.
//!
//! Maps subtoken strings to dense `u32` ids in insertion order and counts
//! how often each was added. Reserved words (padding, unknown, and similar
//! markers) occupy the first ids and keep them through [`Vocabulary::prune`]
//! and [`Vocabulary::sort`].
//!
//! # File Format
//!
//! One word per line, line number = id:
//!
//! ```text
//! <pad>
//! <unk>
//! foo@@
//! Bar
//! ```

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::VocabError;

/// Bidirectional word ↔ id table with frequency counts.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Words in id order.
    words: Vec<String>,
    /// Parallel to `words`.
    frequencies: Vec<u64>,
    index: FxHashMap<String, u32>,
    /// Number of leading entries that are reserved.
    reserved: usize,
}

impl Vocabulary {
    /// Create an empty vocabulary with no reserved words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary whose first ids are `reserved`, in order.
    ///
    /// Duplicates in `reserved` collapse to one entry.
    pub fn with_reserved<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::new();
        vocab.add_all(reserved);
        vocab.reserved = vocab.len();
        vocab
    }

    /// Add one occurrence of `word` and return its id.
    ///
    /// A new word gets the next free id and frequency 1; a known word keeps
    /// its id and its frequency goes up by one.
    pub fn add(&mut self, word: impl Into<String>) -> u32 {
        let word = word.into();
        if let Some(&id) = self.index.get(&word) {
            self.frequencies[id as usize] += 1;
            return id;
        }
        self.push_new(word, 1)
    }

    /// Add every word of `words`.
    pub fn add_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.add(word);
        }
    }

    /// Id of `word`, if present.
    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.index.get(word).copied()
    }

    /// Word with id `id`, if present.
    pub fn word(&self, id: u32) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    /// How many times `word` was added; 0 if absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.index_of(word).map_or(0, |id| self.frequencies[id as usize])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of reserved words at the front of the table.
    pub fn reserved_len(&self) -> usize {
        self.reserved
    }

    /// All words in id order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Map each subtoken to its id, using `unknown` for words not present.
    pub fn ids<S: AsRef<str>>(&self, subtokens: &[S], unknown: u32) -> Vec<u32> {
        subtokens
            .iter()
            .map(|s| self.index_of(s.as_ref()).unwrap_or(unknown))
            .collect()
    }

    /// Drop every non-reserved word added fewer than `min_frequency` times.
    ///
    /// Surviving words are renumbered densely, keeping their relative order
    /// and their frequencies.
    pub fn prune(&mut self, min_frequency: u64) {
        let before = self.len();
        let words = std::mem::take(&mut self.words);
        let frequencies = std::mem::take(&mut self.frequencies);
        self.index.clear();

        for (position, (word, frequency)) in words.into_iter().zip(frequencies).enumerate() {
            if position < self.reserved || frequency >= min_frequency {
                self.push_new(word, frequency);
            }
        }
        tracing::debug!(before, after = self.len(), min_frequency, "pruned vocabulary");
    }

    /// Sort the non-reserved words lexicographically and renumber them.
    ///
    /// Reserved words keep their ids; frequencies move with their words.
    pub fn sort(&mut self) {
        let reserved = self.reserved;
        let mut tail: Vec<(String, u64)> = self
            .words
            .drain(reserved..)
            .zip(self.frequencies.drain(reserved..))
            .collect();
        tail.sort_by(|a, b| a.0.cmp(&b.0));

        for (word, frequency) in tail {
            self.push_new(word, frequency);
        }
        tracing::debug!(words = self.len(), "sorted vocabulary");
    }

    /// Write the vocabulary to `path`, one word per line in id order.
    ///
    /// Fails with [`VocabError::AlreadyExists`] if `path` exists and
    /// `overwrite` is false.
    pub fn save(&self, path: &Path, overwrite: bool) -> Result<(), VocabError> {
        if !overwrite && path.exists() {
            return Err(VocabError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let io_err = |source: std::io::Error| VocabError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        for word in &self.words {
            writeln!(out, "{word}").map_err(io_err)?;
        }
        out.flush().map_err(io_err)?;
        tracing::debug!(path = %path.display(), words = self.len(), "saved vocabulary");
        Ok(())
    }

    /// Add every line of the file at `path` as a word.
    ///
    /// Lines are trimmed; blank lines are skipped. Words already present
    /// have their frequency bumped, as with [`Vocabulary::add`].
    pub fn load(&mut self, path: &Path) -> Result<(), VocabError> {
        let content = fs::read_to_string(path).map_err(|source| VocabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_all(content.lines().map(str::trim).filter(|line| !line.is_empty()));
        tracing::debug!(path = %path.display(), words = self.len(), "loaded vocabulary");
        Ok(())
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "vocabularies stay far below u32::MAX entries"
    )]
    fn push_new(&mut self, word: String, frequency: u64) -> u32 {
        let id = self.words.len() as u32;
        self.index.insert(word.clone(), id);
        self.words.push(word);
        self.frequencies.push(frequency);
        id
    }
}

#[cfg(test)]
mod tests;
