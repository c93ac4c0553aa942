//! Forward-only cursor over one identifier.
//!
//! The cursor walks the identifier one `char` at a time. `pos` is a byte
//! offset that always sits on a character boundary, so slices taken between
//! two cursor positions are valid `&str`. There is no way to move the cursor
//! backwards: lookahead goes through [`Cursor::peek`], which reads without
//! advancing.

#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    /// The identifier being scanned.
    src: &'a str,
    /// Current byte offset into `src`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at the end.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Returns the character one position ahead of current.
    ///
    /// `None` when the current character is the last one, or at the end.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advance past the current character. No-op at the end.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(ch) = self.current() {
            self.pos += ch.len_utf8();
        }
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The whole identifier.
    pub(crate) fn source(&self) -> &'a str {
        self.src
    }

    /// Extract the text from `start` to the current position.
    ///
    /// `start` must be a position previously returned by [`Cursor::pos`].
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds position");
        &self.src[start..self.pos]
    }
}
