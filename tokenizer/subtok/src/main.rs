//! Subtokenizer CLI
//!
//! Splits identifiers and whitespace-tokenized source files into subtokens
//! and builds subtoken vocabularies.

mod commands;

use std::io;
use std::path::Path;

use commands::{parse_command_options, run_ident, run_split, run_vocab};

fn main() {
    subtok::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let (options, positional) = match parse_command_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let result = match command.as_str() {
        "ident" => {
            if positional.is_empty() {
                eprintln!("Usage: subtokc ident <name>... [--merge-underscores]");
                std::process::exit(1);
            }
            run_ident(&positional, &options, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
        "split" => {
            let [path] = positional.as_slice() else {
                eprintln!("Usage: subtokc split <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --lower               Lowercase all output");
                eprintln!("  --merge-underscores   Glue `_` to the following word");
                eprintln!("  --lengths             Append per-token subtoken counts");
                eprintln!("  --keep-invalid        Emit unscannable identifiers whole");
                eprintln!("  --no-parallel         Split lines sequentially");
                std::process::exit(1);
            };
            run_split(Path::new(path), &options, &mut io::stdout().lock())
        }
        "vocab" => {
            let ([path], Some(output)) = (positional.as_slice(), options.output.as_deref()) else {
                eprintln!("Usage: subtokc vocab <file> -o <out> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --lower               Lowercase all subtokens");
                eprintln!("  --merge-underscores   Glue `_` to the following word");
                eprintln!("  --keep-invalid        Count unscannable identifiers whole");
                eprintln!("  --min-freq=<n>        Drop words seen fewer than n times");
                eprintln!("  --sort                Sort words after the reserved block");
                eprintln!("  --reserved=<a,b,..>   Reserved words placed first");
                eprintln!("  --force               Overwrite the output file");
                std::process::exit(1);
            };
            run_vocab(Path::new(path), output, &options, &mut io::stdout().lock())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(msg) = result {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("subtokc - identifier subtokenizer");
    println!();
    println!("Usage: subtokc <command> [args] [options]");
    println!();
    println!("Commands:");
    println!("  ident <name>...        Print the subtokens of each identifier");
    println!("  split <file>           Split each line of a whitespace-tokenized file");
    println!("  vocab <file> -o <out>  Build a subtoken vocabulary from a file");
    println!("  help                   Show this message");
    println!();
    println!("Set RUST_LOG=subtok=debug for tracing output.");
}
