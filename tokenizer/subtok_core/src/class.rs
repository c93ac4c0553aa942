//! Character classes driving the subtoken scan.

/// Class of a single identifier character.
///
/// The scanner only distinguishes these four. Anything else inside an
/// identifier is an error, reported by the scanner with its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `_`
    Underscore,
    /// Any numeric character (`0-9`, and other Unicode numerics).
    Digit,
    /// Lowercase letter.
    Lower,
    /// Uppercase letter.
    Upper,
}

impl CharClass {
    /// Classify `ch`, or `None` if it belongs to none of the four classes.
    ///
    /// Letters without case (CJK ideographs, for instance) are `None`: they
    /// are alphabetic, but the scan has no rule for them.
    #[inline]
    pub fn of(ch: char) -> Option<Self> {
        if ch == '_' {
            Some(Self::Underscore)
        } else if ch.is_numeric() {
            Some(Self::Digit)
        } else if ch.is_lowercase() {
            Some(Self::Lower)
        } else if ch.is_uppercase() {
            Some(Self::Upper)
        } else {
            None
        }
    }
}

/// Returns `true` if a token starting with `ch` should be scanned as an
/// identifier rather than passed through whole.
///
/// Only the first character decides; the rest of the token is not looked at.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

#[cfg(test)]
mod tests;
