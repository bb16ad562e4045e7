//! Lector CLI binary.

use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lector::cli::args::LectorArgs;
use lector::cli::commands::execute_command;
use lector::error::LectorError;

fn main() {
    let args = LectorArgs::parse();

    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let corpus = args.corpus.clone();
    if let Err(e) = execute_command(args) {
        eprintln!("{}", error_message(&e, &corpus));
        process::exit(1);
    }
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error, // --quiet
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Failures that come from reading the corpus name the directory.
fn error_message(error: &LectorError, corpus: &Path) -> String {
    match error {
        LectorError::Io(_) | LectorError::EmptyCollection(_) => {
            format!("Error: {error} (corpus: {})", corpus.display())
        }
        _ => format!("Error: {error}"),
    }
}
