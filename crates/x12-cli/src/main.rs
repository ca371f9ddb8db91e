//! The X12 command line interface (spec.md §6, §S.4): parses an X12 file
//! and prints either raw segments or bound transaction models as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod output;

/// Parses and validates X12 messages, returning segments or models as JSON.
#[derive(Parser, Debug)]
#[command(name = "x12", about = "Parses and validates X12 messages")]
struct Cli {
    /// The path to an ASC X12 file
    file: PathBuf,

    /// Returns X12 segments
    #[arg(short = 's', long = "segment")]
    segment: bool,

    /// Returns X12 models (default)
    #[arg(short = 'm', long = "model", conflicts_with = "segment")]
    model: bool,

    /// Exclude fields set to None in model output
    #[arg(short = 'x', long = "exclude")]
    exclude: bool,

    /// Pretty print output
    #[arg(short = 'p', long = "pretty")]
    pretty: bool,

    /// Include X12 delimiters in output. Only valid when -m (model mode) is used
    #[arg(short = 'd', long = "delimiters", conflicts_with = "segment")]
    delimiters: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let source = match std::fs::read(&cli.file) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("x12: could not read '{}': {err}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let result = if cli.segment {
        output::segments(&source)
    } else {
        output::models(&source, cli.exclude, cli.delimiters)
    };

    let json = match result {
        Ok(value) => value,
        Err(message) => {
            eprintln!("x12: {message}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };

    match rendered {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("x12: failed to render JSON: {err}");
            ExitCode::FAILURE
        }
    }
}
