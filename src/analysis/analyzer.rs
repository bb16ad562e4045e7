//! Analyzers turn raw text into the normalized terms the rankers score.
//!
//! ```text
//! Raw Text → Analyzer → Terms
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`](standard::StandardAnalyzer) - Unicode words, lowercase, English stop words
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can tokenize many
/// documents from the scoring thread pool.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the token texts, in stream order.
    ///
    /// ```
    /// use lector::analysis::analyzer::Analyzer;
    /// use lector::analysis::analyzer::standard::StandardAnalyzer;
    ///
    /// let analyzer = StandardAnalyzer::new();
    /// assert_eq!(analyzer.terms("The cat sat.").unwrap(), vec!["cat", "sat"]);
    /// ```
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

pub mod pipeline;
pub mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::{StandardAnalyzer, TokenOrder};
