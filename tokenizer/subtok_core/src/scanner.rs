//! Single-pass subtoken scanner.
//!
//! Each call to [`IdentifierScanner::next_subtoken`] seeds a new subtoken
//! with the character under the cursor, then keeps absorbing characters
//! while the class transition allows it:
//!
//! | next class   | absorbed when                                          |
//! |--------------|--------------------------------------------------------|
//! | `Underscore` | never                                                  |
//! | `Digit`      | previous class is `Digit`                              |
//! | `Lower`      | always                                                 |
//! | `Upper`      | previous class is `Upper` and the character after next |
//! |              | is absent or also `Upper`                              |
//!
//! The last rule splits an acronym run so that its final capital starts the
//! following word: `HTTPServer` is `HTTP` + `Server`. A run at the very end
//! of the identifier stays whole (`ABC` is one subtoken).

use std::iter::FusedIterator;

use crate::class::CharClass;
use crate::cursor::Cursor;
use crate::error::SubtokenError;

/// Lazy subtoken sequence over one identifier.
///
/// Not restartable: once [`next_subtoken`](Self::next_subtoken) has returned
/// `Ok(None)` or an error, the scan is finished and further calls return
/// [`SubtokenError::ExhaustedScan`]. Iterating with [`Iterator::next`] stops
/// cleanly instead.
#[derive(Debug)]
pub struct IdentifierScanner<'a> {
    cursor: Cursor<'a>,
    underscore_as_own_subtoken: bool,
    /// Set when the end has been reported or a scan error occurred.
    finished: bool,
}

impl<'a> IdentifierScanner<'a> {
    /// Create a scanner over `identifier`.
    ///
    /// Fails with [`SubtokenError::EmptyIdentifier`] for `""`.
    pub fn new(
        identifier: &'a str,
        underscore_as_own_subtoken: bool,
    ) -> Result<Self, SubtokenError> {
        if identifier.is_empty() {
            return Err(SubtokenError::EmptyIdentifier);
        }
        Ok(Self {
            cursor: Cursor::new(identifier),
            underscore_as_own_subtoken,
            finished: false,
        })
    }

    /// Produce the next subtoken.
    ///
    /// Returns `Ok(None)` once the identifier is fully consumed.
    pub fn next_subtoken(&mut self) -> Result<Option<&'a str>, SubtokenError> {
        if self.finished {
            return Err(SubtokenError::ExhaustedScan);
        }
        let start = self.cursor.pos();
        let Some(seed) = self.cursor.current() else {
            self.finished = true;
            return Ok(None);
        };

        let mut last = self.classify(start, seed)?;
        self.cursor.advance();

        if last == CharClass::Underscore && self.underscore_as_own_subtoken {
            return Ok(Some(self.cursor.slice_from(start)));
        }

        while let Some(ch) = self.cursor.current() {
            let offset = self.cursor.pos();
            let current = self.classify(offset, ch)?;
            let absorb = match current {
                CharClass::Underscore => false,
                CharClass::Digit => last == CharClass::Digit,
                CharClass::Lower => true,
                CharClass::Upper => {
                    last == CharClass::Upper && self.acronym_continues(offset + ch.len_utf8())?
                }
            };
            if !absorb {
                break;
            }
            self.cursor.advance();
            last = current;
        }

        Ok(Some(self.cursor.slice_from(start)))
    }

    /// Returns `true` once the scanner has reported its end or failed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Inside an uppercase run, decide whether the capital under the cursor
    /// still belongs to the run. Looks at the character after it without
    /// advancing; `next_offset` is that character's byte offset.
    fn acronym_continues(&mut self, next_offset: usize) -> Result<bool, SubtokenError> {
        match self.cursor.peek() {
            Some(next) => Ok(self.classify(next_offset, next)? == CharClass::Upper),
            None => Ok(true),
        }
    }

    fn classify(&mut self, offset: usize, ch: char) -> Result<CharClass, SubtokenError> {
        CharClass::of(ch).ok_or_else(|| {
            self.finished = true;
            SubtokenError::InvalidCharacter {
                ch,
                offset,
                identifier: self.cursor.source().to_owned(),
            }
        })
    }
}

impl<'a> Iterator for IdentifierScanner<'a> {
    type Item = Result<&'a str, SubtokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.next_subtoken().transpose()
    }
}

impl FusedIterator for IdentifierScanner<'_> {}
