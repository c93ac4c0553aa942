//! `vocab` command: build a subtoken vocabulary from a file.

use std::io::Write;
use std::path::Path;

use subtok::Vocabulary;

use super::{split_file, write_failed, CommandOptions};

/// Split `path`, count its subtokens, and save the vocabulary to `output`.
///
/// Reserved words come first; pruning runs before sorting. A summary line is
/// written to `out` once the file is saved.
pub fn run_vocab(
    path: &Path,
    output: &Path,
    options: &CommandOptions,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut vocab = Vocabulary::with_reserved(options.reserved.iter().map(String::as_str));
    for split in split_file(path, options)? {
        vocab.add_all(split.subtokens);
    }

    if let Some(threshold) = options.min_frequency {
        vocab.prune(threshold);
    }
    if options.sort {
        vocab.sort();
    }

    vocab
        .save(output, options.force)
        .map_err(|e| format!("error: {e}"))?;
    writeln!(
        out,
        "Wrote {} words ({} reserved) to '{}'",
        vocab.len(),
        vocab.reserved_len(),
        output.display()
    )
    .map_err(|e| write_failed(&e))
}
