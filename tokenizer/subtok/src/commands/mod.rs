//! Command handlers for the subtokenizer CLI.
//!
//! Each submodule implements one command. Option parsing and shared helpers
//! (`read_file`, `split_file`) live here in the module root. Commands write
//! their normal output to a caller-supplied sink and return failures as a
//! message; only `main` touches the process exit status.

use std::path::{Path, PathBuf};

use subtok::{split_streams, split_tokens, InvalidTokenPolicy, SplitError, SplitOptions, SplitOutput};

mod ident;
mod split;
mod vocab;

pub use ident::run_ident;
pub use split::run_split;
pub use vocab::run_vocab;

/// Options shared by all commands.
#[derive(Clone, Debug)]
pub struct CommandOptions {
    /// Options forwarded to the splitter.
    pub split: SplitOptions,
    /// Split lines on the rayon pool.
    pub parallel: bool,
    /// Output path (`-o`).
    pub output: Option<PathBuf>,
    /// Vocabulary pruning threshold.
    pub min_frequency: Option<u64>,
    /// Sort the vocabulary before saving.
    pub sort: bool,
    /// Reserved vocabulary words, in order.
    pub reserved: Vec<String>,
    /// Overwrite an existing output file.
    pub force: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        CommandOptions {
            split: SplitOptions::default(),
            parallel: true,
            output: None,
            min_frequency: None,
            sort: false,
            reserved: Vec::new(),
            force: false,
        }
    }
}

/// Parse command arguments into options and positional arguments.
///
/// Flags may appear anywhere after the command name. `-o` takes the next
/// argument as its value.
pub fn parse_command_options(args: &[String]) -> Result<(CommandOptions, Vec<String>), String> {
    let mut options = CommandOptions::default();
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-o" => {
                let Some(path) = args.get(i + 1) else {
                    return Err("-o requires a path".to_string());
                };
                options.output = Some(PathBuf::from(path));
                i += 1;
            }
            "--lower" => options.split.lowercase = true,
            "--merge-underscores" => options.split.underscore_as_own_subtoken = false,
            "--lengths" => options.split.emit_lengths = true,
            "--keep-invalid" => options.split.on_invalid = InvalidTokenPolicy::KeepWhole,
            "--no-parallel" => options.parallel = false,
            "--sort" => options.sort = true,
            "--force" => options.force = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--min-freq=") {
                    let threshold = value
                        .parse()
                        .map_err(|_| format!("invalid --min-freq value '{value}'"))?;
                    options.min_frequency = Some(threshold);
                } else if let Some(value) = arg.strip_prefix("--reserved=") {
                    options.reserved = value
                        .split(',')
                        .filter(|word| !word.is_empty())
                        .map(str::to_string)
                        .collect();
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option '{arg}'"));
                } else {
                    positional.push(arg.to_string());
                }
            }
        }
        i += 1;
    }

    Ok((options, positional))
}

/// Read a file, turning I/O failures into a user-facing message.
///
/// Never exits; `main` owns the exit status.
fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| {
        let shown = path.display();
        match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{shown}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{shown}'"),
            std::io::ErrorKind::InvalidData => format!("'{shown}' contains invalid UTF-8 data"),
            _ => format!("error reading '{shown}': {e}"),
        }
    })
}

/// Split every line of `path` as a whitespace-separated token sequence.
///
/// The first failing line is reported as `path:line: message`.
fn split_file(path: &Path, options: &CommandOptions) -> Result<Vec<SplitOutput>, String> {
    let content = read_file(path)?;
    let streams: Vec<Vec<&str>> = content
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();
    tracing::debug!(path = %path.display(), lines = streams.len(), parallel = options.parallel, "splitting file");

    let result = if options.parallel {
        split_streams(&streams, &options.split)
    } else {
        streams
            .iter()
            .enumerate()
            .map(|(stream, tokens)| {
                split_tokens(tokens, &options.split).map_err(|source| SplitError::InStream {
                    stream,
                    source: Box::new(source),
                })
            })
            .collect()
    };

    result.map_err(|e| match e {
        SplitError::InStream { stream, source } => {
            format!("{}:{}: {source}", path.display(), stream + 1)
        }
        other => format!("{}: {other}", path.display()),
    })
}

/// Write failures on the output sink (closed pipe, full disk).
fn write_failed(e: &std::io::Error) -> String {
    format!("error writing output: {e}")
}
