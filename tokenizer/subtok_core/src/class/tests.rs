use super::*;

// === CharClass::of ===

#[test]
fn underscore_class() {
    assert_eq!(CharClass::of('_'), Some(CharClass::Underscore));
}

#[test]
fn ascii_digits_are_digit() {
    for ch in '0'..='9' {
        assert_eq!(CharClass::of(ch), Some(CharClass::Digit), "{ch:?}");
    }
}

#[test]
fn ascii_letters_split_by_case() {
    for ch in 'a'..='z' {
        assert_eq!(CharClass::of(ch), Some(CharClass::Lower), "{ch:?}");
    }
    for ch in 'A'..='Z' {
        assert_eq!(CharClass::of(ch), Some(CharClass::Upper), "{ch:?}");
    }
}

#[test]
fn cased_non_ascii_letters() {
    assert_eq!(CharClass::of('é'), Some(CharClass::Lower));
    assert_eq!(CharClass::of('É'), Some(CharClass::Upper));
    assert_eq!(CharClass::of('ß'), Some(CharClass::Lower));
}

#[test]
fn non_ascii_numeric_is_digit() {
    assert_eq!(CharClass::of('٣'), Some(CharClass::Digit));
}

#[test]
fn punctuation_and_whitespace_have_no_class() {
    for ch in [' ', '\t', '-', '$', '.', '@', '=', '\0'] {
        assert_eq!(CharClass::of(ch), None, "{ch:?}");
    }
}

#[test]
fn caseless_letter_has_no_class() {
    assert_eq!(CharClass::of('変'), None);
}

// === is_identifier_start ===

#[test]
fn identifier_starts() {
    assert!(is_identifier_start('_'));
    assert!(is_identifier_start('a'));
    assert!(is_identifier_start('Z'));
    assert!(is_identifier_start('変'));
}

#[test]
fn non_identifier_starts() {
    assert!(!is_identifier_start('1'));
    assert!(!is_identifier_start('='));
    assert!(!is_identifier_start('-'));
    assert!(!is_identifier_start('"'));
}
