//! `split` command: subtokenize a whitespace-tokenized file line by line.

use std::io::Write;
use std::path::Path;

use super::{split_file, write_failed, CommandOptions};

/// Write one line of space-separated subtokens per input line.
///
/// With `--lengths`, a tab and the space-separated length sequence follow.
/// Nothing is written if any line fails to split.
pub fn run_split(path: &Path, options: &CommandOptions, out: &mut impl Write) -> Result<(), String> {
    for output in split_file(path, options)? {
        let line = output.subtokens.join(" ");
        match output.lengths {
            Some(lengths) => {
                let lengths: Vec<String> = lengths.iter().map(ToString::to_string).collect();
                writeln!(out, "{line}\t{}", lengths.join(" "))
            }
            None => writeln!(out, "{line}"),
        }
        .map_err(|e| write_failed(&e))?;
    }
    Ok(())
}
