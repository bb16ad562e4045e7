//! Configuration for a question-answering run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::standard::TokenOrder;
use crate::error::{LectorError, Result};
use crate::scoring::UnknownTermPolicy;

/// Configuration for the [`Lector`](crate::engine::Lector) engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LectorConfig {
    /// Number of top documents whose sentences are ranked.
    pub file_matches: usize,

    /// Number of sentences returned per query.
    pub sentence_matches: usize,

    /// Handling of query terms missing from an IDF table.
    pub unknown_terms: UnknownTermPolicy,

    /// Order of analyzed terms.
    pub token_order: TokenOrder,

    /// Stop word file replacing the built-in English list.
    pub stop_words: Option<PathBuf>,

    /// Only load corpus files with this extension.
    pub extension: Option<String>,

    /// Thread pool size for scoring.
    /// If None, uses the number of CPU cores.
    pub threads: Option<usize>,
}

impl Default for LectorConfig {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
            unknown_terms: UnknownTermPolicy::Skip,
            token_order: TokenOrder::Original,
            stop_words: None,
            extension: None,
            threads: None,
        }
    }
}

impl LectorConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: LectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no run can work with.
    pub fn validate(&self) -> Result<()> {
        if self.file_matches == 0 {
            return Err(LectorError::config("file_matches must be at least 1"));
        }
        if self.sentence_matches == 0 {
            return Err(LectorError::config("sentence_matches must be at least 1"));
        }
        if self.threads == Some(0) {
            return Err(LectorError::config("threads must be at least 1"));
        }
        if self.extension.as_deref().is_some_and(|ext| ext.trim().is_empty()) {
            return Err(LectorError::config("extension must not be empty"));
        }
        Ok(())
    }

    /// Effective scoring thread count.
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}
