//! Property-based tests for the identifier scanner.
//!
//! Generates identifiers over letters, digits and `_` and checks that the
//! scan is lossless, deterministic, and never yields an empty subtoken.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use subtok_core::{subtokenize, CharClass, SubtokenError};

/// Identifier-shaped strings: any mix of cases, digits and underscores.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_]{1,24}").expect("valid regex")
}

/// Identifiers containing exactly one character the scanner rejects.
fn poisoned_identifier_strategy() -> impl Strategy<Value = (String, char)> {
    (
        prop::string::string_regex("[a-z]{1,8}").expect("valid regex"),
        prop::sample::select(vec![' ', '-', '.', '$', '@', '+']),
        prop::string::string_regex("[A-Za-z0-9_]{0,8}").expect("valid regex"),
    )
        .prop_map(|(head, bad, tail)| (format!("{head}{bad}{tail}"), bad))
}

proptest! {
    #[test]
    fn scan_is_lossless(ident in identifier_strategy(), own in any::<bool>()) {
        let parts = subtokenize(&ident, own).unwrap();
        prop_assert_eq!(parts.concat(), ident);
    }

    #[test]
    fn scan_is_deterministic(ident in identifier_strategy(), own in any::<bool>()) {
        prop_assert_eq!(subtokenize(&ident, own), subtokenize(&ident, own));
    }

    #[test]
    fn subtokens_are_never_empty(ident in identifier_strategy(), own in any::<bool>()) {
        let parts = subtokenize(&ident, own).unwrap();
        prop_assert!(!parts.is_empty());
        prop_assert!(parts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn underscores_stand_alone_when_requested(ident in identifier_strategy()) {
        for part in subtokenize(&ident, true).unwrap() {
            if part.contains('_') {
                prop_assert_eq!(part, "_");
            }
        }
    }

    #[test]
    fn digits_never_follow_letters_within_a_subtoken(ident in identifier_strategy()) {
        for part in subtokenize(&ident, true).unwrap() {
            let classes: Vec<_> = part.chars().filter_map(CharClass::of).collect();
            for pair in classes.windows(2) {
                if pair[1] == CharClass::Digit {
                    prop_assert_eq!(pair[0], CharClass::Digit, "in subtoken {:?}", part);
                }
            }
        }
    }

    #[test]
    fn invalid_character_is_reported((ident, bad) in poisoned_identifier_strategy()) {
        let is_invalid_bad = matches!(
            subtokenize(&ident, true),
            Err(SubtokenError::InvalidCharacter { ch, .. }) if ch == bad
        );
        prop_assert!(is_invalid_bad);
    }
}
