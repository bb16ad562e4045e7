//! Command implementation for the Lector CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::LectorArgs;
use crate::cli::output::output_answer;
use crate::engine::Lector;
use crate::error::{LectorError, Result};

/// Prompt shown when no query is passed on the command line.
pub const QUERY_PROMPT: &str = "Query: ";

/// Execute one question-answering run.
pub fn execute_command(args: LectorArgs) -> Result<()> {
    let config = args.to_config()?;
    log::debug!("Effective configuration: {config:?}");

    let lector = Lector::open(&args.corpus, config)?;

    let query = match &args.query {
        Some(query) => query.clone(),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            read_query(&mut stdin.lock(), &mut stdout.lock())?
        }
    };

    let answer = lector.answer(&query)?;
    output_answer(&answer, &args)
}

/// Prompt on `output` and read one line of query text from `input`.
pub fn read_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{QUERY_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LectorError::other("no query given on standard input"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
