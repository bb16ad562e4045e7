//! Command line argument parsing for the Lector CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::standard::TokenOrder;
use crate::config::LectorConfig;
use crate::error::Result;
use crate::scoring::UnknownTermPolicy;

/// Lector - answer questions from a directory of text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "lector")]
#[command(about = "Answer a question with the best matching sentence of a text corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LectorArgs {
    /// Directory holding the corpus documents
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Query to answer (prompted for on stdin when omitted)
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Number of top documents to draw sentences from
    #[arg(long = "files", value_name = "N")]
    pub file_matches: Option<usize>,

    /// Number of sentences to print
    #[arg(long = "sentences", value_name = "N")]
    pub sentence_matches: Option<usize>,

    /// Fail when a query term appears in no document, or in no sentence of the top documents
    #[arg(long)]
    pub strict: bool,

    /// Sort analyzed terms instead of keeping their text order
    #[arg(long)]
    pub sorted_tokens: bool,

    /// Stop word file (one word per line) replacing the English list
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Only load corpus files with this extension
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Scoring thread count (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// JSON configuration file; flags given on the command line win
    #[arg(short, long, value_name = "FILE", env = "LECTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl LectorArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the run configuration: the config file (or defaults) with the
    /// command-line flags applied on top.
    pub fn to_config(&self) -> Result<LectorConfig> {
        let mut config = match &self.config {
            Some(path) => LectorConfig::from_file(path)?,
            None => LectorConfig::default(),
        };

        if let Some(n) = self.file_matches {
            config.file_matches = n;
        }
        if let Some(n) = self.sentence_matches {
            config.sentence_matches = n;
        }
        if self.strict {
            config.unknown_terms = UnknownTermPolicy::Fail;
        }
        if self.sorted_tokens {
            config.token_order = TokenOrder::Sorted;
        }
        if self.stop_words.is_some() {
            config.stop_words = self.stop_words.clone();
        }
        if self.extension.is_some() {
            config.extension = self.extension.clone();
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The matching sentences, one per line
    Human,
    /// The full answer as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::LectorError;

    #[test]
    fn test_corpus_is_required() {
        assert!(LectorArgs::try_parse_from(["lector"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(LectorArgs::try_parse_from(["lector", "corpus", "extra"]).is_err());
    }

    #[test]
    fn test_minimal_invocation() {
        let args = LectorArgs::try_parse_from(["lector", "corpus"]).unwrap();

        assert_eq!(args.corpus, PathBuf::from("corpus"));
        assert_eq!(args.query, None);
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.to_config().unwrap().file_matches, 1);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = LectorArgs::try_parse_from([
            "lector",
            "corpus",
            "--query",
            "who?",
            "--files",
            "2",
            "--sentences",
            "4",
            "--strict",
            "--sorted-tokens",
            "--threads",
            "3",
            "-f",
            "json",
            "-vv",
        ])
        .unwrap();

        let config = args.to_config().unwrap();

        assert_eq!(args.query.as_deref(), Some("who?"));
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 2);
        assert_eq!(config.file_matches, 2);
        assert_eq!(config.sentence_matches, 4);
        assert_eq!(config.unknown_terms, UnknownTermPolicy::Fail);
        assert_eq!(config.token_order, TokenOrder::Sorted);
        assert_eq!(config.threads, Some(3));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"file_matches": 5, "sentence_matches": 2}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let args =
            LectorArgs::try_parse_from(["lector", "corpus", "--config", &path, "--files", "1"])
                .unwrap();
        let config = args.to_config().unwrap();

        assert_eq!(config.file_matches, 1);
        assert_eq!(config.sentence_matches, 2);
    }

    #[test]
    fn test_strict_help_covers_both_phases() {
        use clap::CommandFactory;

        let command = LectorArgs::command();
        let strict = command
            .get_arguments()
            .find(|arg| arg.get_id() == "strict")
            .unwrap();

        let help = strict.get_help().unwrap().to_string();
        assert!(help.contains("no document"));
        assert!(help.contains("no sentence of the top documents"));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = LectorArgs::try_parse_from(["lector", "corpus", "-vvv", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_zero_files_rejected() {
        let args = LectorArgs::try_parse_from(["lector", "corpus", "--files", "0"]).unwrap();
        assert!(matches!(args.to_config(), Err(LectorError::Config(_))));
    }
}
