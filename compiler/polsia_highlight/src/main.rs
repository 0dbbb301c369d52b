//! Polsia highlighting CLI
//!
//! Token dumps, re-indentation and evaluation for Polsia documents.

use std::path::Path;

use polsia_highlight::commands::{eval_file, format_file, lex_file};
use polsia_highlight::{init_tracing, CliError, Config};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    if let Err(e) = run(&args[1], &args[2..]) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(command: &str, rest: &[String]) -> Result<(), CliError> {
    match command {
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "lex" => {
            let (_, path, _) = parse_command_args(rest, &[])?;
            lex_file(Path::new(&path))
        }
        "fmt" => {
            let (config, path, switches) = parse_command_args(rest, &["--write", "-w"])?;
            format_file(Path::new(&path), &config, !switches.is_empty())
        }
        "eval" => {
            let (config, path, _) = parse_command_args(rest, &[])?;
            let output = eval_file(Path::new(&path), &config)?;
            print!("{output}");
            Ok(())
        }
        other => Err(CliError::Usage(format!(
            "unknown command `{other}` (run `polsia-hl help`)"
        ))),
    }
}

/// Split a command's arguments into config, the file path and any of the
/// command's own `switches` that were given.
fn parse_command_args(
    args: &[String],
    switches: &[&str],
) -> Result<(Config, String, Vec<String>), CliError> {
    let mut config = Config::from_env();
    let rest = config.apply_flags(args)?;

    let mut path = None;
    let mut seen = Vec::new();
    for arg in rest {
        if switches.contains(&arg.as_str()) {
            seen.push(arg);
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option `{arg}`")));
        } else if path.is_none() {
            path = Some(arg);
        } else {
            return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
        }
    }

    let path = path.ok_or_else(|| CliError::Usage("missing file path".to_owned()))?;
    Ok((config, path, seen))
}

fn print_usage() {
    println!("Polsia highlighting tool");
    println!();
    println!("Usage: polsia-hl <command> [options] <file>");
    println!();
    println!("Commands:");
    println!("  lex <file>               Show classified tokens and the final scan state");
    println!("  fmt <file> [--write]     Re-indent a file (print, or rewrite in place)");
    println!("  eval <file>              Run the configured evaluator on a file");
    println!("  help                     Show this message");
    println!();
    println!("Options:");
    println!("  --indent=<n>             Spaces per nesting level (default: 2)");
    println!("  --evaluator=<cmd>        Evaluation command, reads the document on stdin");
    println!();
    println!("Environment:");
    println!("  POLSIA_INDENT_UNIT       Default for --indent");
    println!("  POLSIA_EVALUATOR         Default for --evaluator");
    println!("  RUST_LOG                 Enable tracing output, e.g. RUST_LOG=debug");
}
