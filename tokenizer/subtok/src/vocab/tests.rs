#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use pretty_assertions::assert_eq;

use super::*;

fn words(vocab: &Vocabulary) -> Vec<&str> {
    vocab.words().collect()
}

// === Insertion ===

#[test]
fn ids_follow_insertion_order() {
    let mut vocab = Vocabulary::new();
    assert_eq!(vocab.add("foo@@"), 0);
    assert_eq!(vocab.add("Bar"), 1);
    assert_eq!(vocab.add("foo@@"), 0);
    assert_eq!(vocab.len(), 2);
    assert_eq!(vocab.frequency("foo@@"), 2);
    assert_eq!(vocab.frequency("Bar"), 1);
    assert_eq!(vocab.frequency("missing"), 0);
}

#[test]
fn lookups_in_both_directions() {
    let mut vocab = Vocabulary::new();
    vocab.add_all(["a", "b"]);
    assert_eq!(vocab.index_of("b"), Some(1));
    assert_eq!(vocab.index_of("c"), None);
    assert_eq!(vocab.word(0), Some("a"));
    assert_eq!(vocab.word(2), None);
    assert!(vocab.contains("a"));
    assert!(!vocab.is_empty());
}

#[test]
fn reserved_words_come_first() {
    let vocab = Vocabulary::with_reserved(["<pad>", "<unk>", "<pad>"]);
    assert_eq!(words(&vocab), vec!["<pad>", "<unk>"]);
    assert_eq!(vocab.reserved_len(), 2);
}

#[test]
fn ids_map_unknown_words() {
    let mut vocab = Vocabulary::with_reserved(["<unk>"]);
    vocab.add_all(["foo@@", "Bar"]);
    assert_eq!(vocab.ids(&["foo@@", "Baz", "Bar"], 0), vec![1, 0, 2]);
}

// === Pruning ===

#[test]
fn prune_drops_rare_words_and_renumbers() {
    let mut vocab = Vocabulary::with_reserved(["<unk>"]);
    vocab.add_all(["rare", "common", "common", "other", "other", "other"]);
    vocab.prune(2);
    assert_eq!(words(&vocab), vec!["<unk>", "common", "other"]);
    assert_eq!(vocab.index_of("common"), Some(1));
    assert_eq!(vocab.index_of("rare"), None);
    assert_eq!(vocab.frequency("other"), 3);
}

#[test]
fn prune_keeps_reserved_words_regardless_of_frequency() {
    let mut vocab = Vocabulary::with_reserved(["<pad>"]);
    vocab.add_all(["x", "x"]);
    vocab.prune(5);
    assert_eq!(words(&vocab), vec!["<pad>"]);
}

// === Sorting ===

#[test]
fn sort_orders_non_reserved_words() {
    let mut vocab = Vocabulary::with_reserved(["<unk>"]);
    vocab.add_all(["zeta", "alpha", "mid", "alpha"]);
    vocab.sort();
    assert_eq!(words(&vocab), vec!["<unk>", "alpha", "mid", "zeta"]);
    assert_eq!(vocab.index_of("zeta"), Some(3));
    assert_eq!(vocab.frequency("alpha"), 2);
}

// === Files ===

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.txt");

    let mut vocab = Vocabulary::with_reserved(["<unk>"]);
    vocab.add_all(["foo@@", "Bar"]);
    vocab.save(&path, false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "<unk>\nfoo@@\nBar\n");

    let mut loaded = Vocabulary::new();
    loaded.load(&path).unwrap();
    assert_eq!(words(&loaded), words(&vocab));
}

#[test]
fn save_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.txt");
    fs::write(&path, "old\n").unwrap();

    let vocab = Vocabulary::with_reserved(["<unk>"]);
    assert!(matches!(
        vocab.save(&path, false),
        Err(VocabError::AlreadyExists { .. })
    ));
    vocab.save(&path, true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "<unk>\n");
}

#[test]
fn load_skips_blank_lines_and_trims() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.txt");
    fs::write(&path, "a\n\n  b \r\na\n").unwrap();

    let mut vocab = Vocabulary::new();
    vocab.load(&path).unwrap();
    assert_eq!(words(&vocab), vec!["a", "b"]);
    assert_eq!(vocab.frequency("a"), 2);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut vocab = Vocabulary::new();
    assert!(matches!(
        vocab.load(&dir.path().join("nope.txt")),
        Err(VocabError::Io { .. })
    ));
}
