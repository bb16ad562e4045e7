//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{LectorArgs, OutputFormat};
use crate::engine::Answer;
use crate::error::Result;

/// Print an answer to stdout in the format selected by `args`.
pub fn output_answer(answer: &Answer, args: &LectorArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_answer(&mut out, answer, args.output_format, args.pretty, args.verbosity())
}

/// Write an answer to `out`.
///
/// Human output is one matching sentence per line; at verbosity 2 and above
/// the matching files and their scores come first.
pub fn write_answer<W: Write>(
    out: &mut W,
    answer: &Answer,
    format: OutputFormat,
    pretty: bool,
    verbosity: u8,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(out, answer, verbosity),
        OutputFormat::Json => write_json(out, answer, pretty),
    }
}

fn write_human<W: Write>(out: &mut W, answer: &Answer, verbosity: u8) -> Result<()> {
    if verbosity > 1 {
        writeln!(out, "Query terms: {}", answer.query.join(" "))?;
        for hit in &answer.files {
            writeln!(out, "  {} ({:.4})", hit.name, hit.score)?;
        }
        writeln!(out)?;
    }

    for hit in &answer.sentences {
        if verbosity > 2 {
            writeln!(
                out,
                "{} [{:.4}, {:.4}]",
                hit.text, hit.matching_word_measure, hit.query_term_density
            )?;
        } else {
            writeln!(out, "{}", hit.text)?;
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{DocumentHit, SentenceHit};

    fn answer() -> Answer {
        Answer {
            query: vec!["cat".to_string()],
            files: vec![DocumentHit {
                name: "cats.txt".to_string(),
                score: 1.5,
            }],
            sentences: vec![
                SentenceHit {
                    text: "A cat sat.".to_string(),
                    matching_word_measure: 0.5,
                    query_term_density: 0.5,
                },
                SentenceHit {
                    text: "Cats purr.".to_string(),
                    matching_word_measure: 0.0,
                    query_term_density: 0.0,
                },
            ],
        }
    }

    fn render(format: OutputFormat, pretty: bool, verbosity: u8) -> String {
        let mut out = Vec::new();
        write_answer(&mut out, &answer(), format, pretty, verbosity).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_output_prints_sentences() {
        assert_eq!(render(OutputFormat::Human, false, 1), "A cat sat.\nCats purr.\n");
        assert_eq!(render(OutputFormat::Human, false, 0), "A cat sat.\nCats purr.\n");
    }

    #[test]
    fn test_verbose_human_output_lists_files() {
        let output = render(OutputFormat::Human, false, 2);

        assert!(output.starts_with("Query terms: cat\n  cats.txt (1.5000)\n\n"));
        assert!(output.ends_with("A cat sat.\nCats purr.\n"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let output = render(OutputFormat::Json, false, 1);

        assert_eq!(output.lines().count(), 1);
        let parsed: Answer = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, answer());
    }

    #[test]
    fn test_pretty_json_spans_lines() {
        let output = render(OutputFormat::Json, true, 1);
        assert!(output.lines().count() > 1);
    }
}
