//! `ident` command: split identifiers given on the command line.

use std::io::Write;

use subtok::subtokenize;

use super::{write_failed, CommandOptions};

/// Write `name: sub sub sub` for each identifier.
///
/// Every identifier is attempted. Failures go to `err` as `name: message`
/// and the call fails afterwards if there were any.
pub fn run_ident(
    names: &[String],
    options: &CommandOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), String> {
    let mut failed = 0usize;
    for name in names {
        match subtokenize(name, options.split.underscore_as_own_subtoken) {
            Ok(parts) => {
                let parts: Vec<String> = parts.iter().map(|p| options.split.render(p)).collect();
                writeln!(out, "{name}: {}", parts.join(" ")).map_err(|e| write_failed(&e))?;
            }
            Err(e) => {
                writeln!(err, "{name}: {e}").map_err(|e| write_failed(&e))?;
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!("{failed} of {} identifiers failed", names.len()));
    }
    Ok(())
}
