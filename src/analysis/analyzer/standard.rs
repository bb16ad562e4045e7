//! Standard analyzer used for documents, sentences and queries alike.
//!
//! # Pipeline
//!
//! 1. UnicodeWordTokenizer (Unicode word boundaries)
//! 2. LowercaseFilter
//! 3. StopFilter (179 English stop words by default)
//! 4. AlphanumericFilter (drops punctuation-only units)
//! 5. SortFilter, only with [`TokenOrder::Sorted`]
//!
//! # Examples
//!
//! ```
//! use lector::analysis::analyzer::Analyzer;
//! use lector::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let terms = analyzer.terms("The quick brown fox, and the dog!").unwrap();
//!
//! assert_eq!(terms, vec!["quick", "brown", "fox", "dog"]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::sort::SortFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Order of the terms an analyzer emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenOrder {
    /// Terms in the order they appear in the text.
    #[default]
    Original,
    /// Terms sorted lexicographically.
    Sorted,
}

/// The analyzer every ranking phase shares.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
    stop_words: usize,
    token_order: TokenOrder,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with the default English stop words.
    pub fn new() -> Self {
        Self::with_options(StopFilter::new(), TokenOrder::Original)
    }

    /// Create a standard analyzer with a custom stop word filter and term order.
    pub fn with_options(stop_filter: StopFilter, token_order: TokenOrder) -> Self {
        let stop_words = stop_filter.len();
        let tokenizer = Arc::new(UnicodeWordTokenizer::new());
        let mut analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(AlphanumericFilter::new()));

        if token_order == TokenOrder::Sorted {
            analyzer = analyzer.add_filter(Arc::new(SortFilter::new()));
        }

        StandardAnalyzer {
            inner: analyzer.with_name("standard"),
            stop_words,
            token_order,
        }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// Order of the emitted terms.
    pub fn token_order(&self) -> TokenOrder {
        self.token_order
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .field("stop_words", &self.stop_words)
            .field("token_order", &self.token_order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();

        let terms = analyzer.terms("Hello the world and test").unwrap();

        assert_eq!(terms, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_punctuation_and_numbers() {
        let analyzer = StandardAnalyzer::new();

        let terms = analyzer
            .terms("In 1969, Apollo 11 landed -- on the Moon!!! ...")
            .unwrap();

        assert_eq!(terms, vec!["1969", "apollo", "11", "landed", "moon"]);
    }

    #[test]
    fn test_contractions_leave_clitic_terms() {
        let analyzer = StandardAnalyzer::new();

        let terms = analyzer.terms("Don't panic; it's fine.").unwrap();

        // `do` and `it` are stop words, the clitics are not
        assert_eq!(terms, vec!["n't", "panic", "'s", "fine"]);
    }

    #[test]
    fn test_possessive_keeps_stem() {
        let analyzer = StandardAnalyzer::new();

        let terms = analyzer.terms("Python's creator").unwrap();

        assert_eq!(terms, vec!["python", "'s", "creator"]);
    }

    #[test]
    fn test_no_stemming() {
        let analyzer = StandardAnalyzer::new();
        assert_eq!(analyzer.terms("cats and dogs").unwrap(), vec!["cats", "dogs"]);
    }

    #[test]
    fn test_sorted_token_order() {
        let analyzer = StandardAnalyzer::with_options(StopFilter::new(), TokenOrder::Sorted);

        let terms = analyzer.terms("Zebras eat grass, zebras sleep").unwrap();

        assert_eq!(terms, vec!["eat", "grass", "sleep", "zebras", "zebras"]);
        assert_eq!(analyzer.token_order(), TokenOrder::Sorted);
    }

    #[test]
    fn test_custom_stop_words() {
        let analyzer = StandardAnalyzer::with_options(
            StopFilter::from_words(vec!["cat"]),
            TokenOrder::Original,
        );

        assert_eq!(analyzer.terms("the cat sat").unwrap(), vec!["the", "sat"]);
    }

    #[test]
    fn test_tokenizing_is_idempotent() {
        let analyzer = StandardAnalyzer::new();
        let text = "Python's creator, Guido van Rossum, released it in 1991 -- \
                    and the language's popularity grew!";

        let first = analyzer.terms(text).unwrap();
        let second = analyzer.terms(&first.join(" ")).unwrap();

        let first: BTreeSet<_> = first.into_iter().collect();
        let second: BTreeSet<_> = second.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(StandardAnalyzer::new().name(), "standard");
    }
}
