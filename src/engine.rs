//! The question-answering engine.
//!
//! [`Lector`] owns a corpus together with everything derived from it once:
//! the analyzed terms of every document and the document-level IDF table.
//! Each call to [`Lector::answer`] then runs the two ranking phases:
//!
//! 1. rank documents by TF-IDF against the document IDF table,
//! 2. split the winning documents into sentences, compute a fresh IDF table
//!    over those sentences only, and rank the sentences.
//!
//! # Examples
//!
//! ```
//! use lector::config::LectorConfig;
//! use lector::corpus::Corpus;
//! use lector::engine::Lector;
//!
//! let corpus = Corpus::from_documents(vec![
//!     ("cats.txt", "Cats purr. A cat sleeps most of the day."),
//!     ("dogs.txt", "Dogs bark. A dog fetches sticks."),
//! ]);
//! let lector = Lector::new(corpus, LectorConfig::default()).unwrap();
//!
//! let answer = lector.answer("What does a dog fetch?").unwrap();
//! assert_eq!(answer.files[0].name, "dogs.txt");
//! assert_eq!(answer.sentences[0].text, "A dog fetches sticks.");
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::sentence::{SentenceSplitter, UnicodeSentenceSplitter};
use crate::analysis::token_filter::stop::StopFilter;
use crate::config::LectorConfig;
use crate::corpus::Corpus;
use crate::error::{LectorError, Result};
use crate::scoring::{
    Collection, DocumentHit, IdfTable, Query, SentenceHit, compute_idfs, rank_files,
    rank_sentences,
};

/// The outcome of one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Distinct analyzed query terms, sorted.
    pub query: Vec<String>,
    /// Best documents, at most `file_matches`.
    pub files: Vec<DocumentHit>,
    /// Best sentences from those documents, at most `sentence_matches`.
    pub sentences: Vec<SentenceHit>,
}

/// Question-answering engine over one corpus.
pub struct Lector {
    config: LectorConfig,
    analyzer: Arc<dyn Analyzer>,
    splitter: Arc<dyn SentenceSplitter>,
    corpus: Corpus,
    files: Collection,
    file_idfs: IdfTable,
    thread_pool: Arc<ThreadPool>,
}

impl Lector {
    /// Build an engine with the standard analyzer and Unicode sentence splitter.
    ///
    /// The stop word list and term order come from `config`.
    pub fn new(corpus: Corpus, config: LectorConfig) -> Result<Self> {
        let stop_filter = match &config.stop_words {
            Some(path) => StopFilter::from_file(path)?,
            None => StopFilter::new(),
        };
        let analyzer = StandardAnalyzer::with_options(stop_filter, config.token_order);

        Self::with_components(
            corpus,
            config,
            Arc::new(analyzer),
            Arc::new(UnicodeSentenceSplitter::new()),
        )
    }

    /// Load the corpus in `dir` and build an engine over it.
    pub fn open<P: AsRef<std::path::Path>>(dir: P, config: LectorConfig) -> Result<Self> {
        let corpus = Corpus::load(dir, config.extension.as_deref())?;
        Self::new(corpus, config)
    }

    /// Build an engine with a custom analyzer and sentence splitter.
    ///
    /// Fails with [`LectorError::EmptyCollection`] when the corpus has no
    /// documents.
    pub fn with_components(
        corpus: Corpus,
        config: LectorConfig,
        analyzer: Arc<dyn Analyzer>,
        splitter: Arc<dyn SentenceSplitter>,
    ) -> Result<Self> {
        config.validate()?;

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.thread_count())
            .thread_name(|i| format!("lector-score-{i}"))
            .build()
            .map_err(|e| LectorError::internal(format!("Failed to create thread pool: {e}")))?;

        let files: Collection = thread_pool.install(|| {
            corpus
                .documents()
                .par_iter()
                .map(|(name, text)| -> Result<(String, Vec<String>)> {
                    Ok((name.clone(), analyzer.terms(text)?))
                })
                .collect::<Result<Collection>>()
        })?;

        let file_idfs = compute_idfs(&files)?;
        log::info!(
            "Indexed {} documents ({} distinct terms) with the {} analyzer",
            files.len(),
            file_idfs.len(),
            analyzer.name()
        );

        Ok(Lector {
            config,
            analyzer,
            splitter,
            corpus,
            files,
            file_idfs,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Analyze raw query text into its distinct terms.
    pub fn query_terms(&self, text: &str) -> Result<Query> {
        let query: Query = self.analyzer.terms(text)?.into_iter().collect();
        if query.is_empty() {
            log::warn!("Query '{}' has no searchable terms", text.trim());
        }
        Ok(query)
    }

    /// Rank documents for `query`, keeping the best `file_matches`.
    pub fn top_files(&self, query: &Query) -> Result<Vec<DocumentHit>> {
        let mut hits = self.thread_pool.install(|| {
            rank_files(query, &self.files, &self.file_idfs, self.config.unknown_terms)
        })?;
        hits.truncate(self.config.file_matches);
        Ok(hits)
    }

    /// Split the named documents into sentences and analyze each one.
    ///
    /// Sentences without any term are left out; identical sentences collapse
    /// into one entry.
    pub fn sentences_of(&self, names: &[String]) -> Result<Collection> {
        let mut texts = Vec::new();
        for name in names {
            let text = self
                .corpus
                .get(name)
                .ok_or_else(|| LectorError::other(format!("unknown document '{name}'")))?;
            texts.extend(self.splitter.split(text));
        }

        let analyzed = self.thread_pool.install(|| {
            texts
                .into_par_iter()
                .map(|sentence| -> Result<(String, Vec<String>)> {
                    let terms = self.analyzer.terms(&sentence)?;
                    Ok((sentence, terms))
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let sentences: Collection = analyzed
            .into_iter()
            .filter(|(_, terms)| !terms.is_empty())
            .collect();
        log::debug!(
            "Collected {} sentences from {} documents",
            sentences.len(),
            names.len()
        );
        Ok(sentences)
    }

    /// Rank `sentences` for `query`, keeping the best `sentence_matches`.
    ///
    /// The IDF table is computed over `sentences` alone.
    pub fn top_sentences(&self, query: &Query, sentences: &Collection) -> Result<Vec<SentenceHit>> {
        let idfs = compute_idfs(sentences)?;
        let mut hits = self.thread_pool.install(|| {
            rank_sentences(query, sentences, &idfs, self.config.unknown_terms)
        })?;
        hits.truncate(self.config.sentence_matches);
        Ok(hits)
    }

    /// Answer a raw query.
    pub fn answer(&self, text: &str) -> Result<Answer> {
        let query = self.query_terms(text)?;

        let files = self.top_files(&query)?;
        let names: Vec<String> = files.iter().map(|hit| hit.name.clone()).collect();
        log::info!("Top documents: {}", names.join(", "));

        let sentences = self.sentences_of(&names)?;
        let sentences = self.top_sentences(&query, &sentences)?;

        Ok(Answer {
            query: query.into_iter().collect(),
            files,
            sentences,
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &LectorConfig {
        &self.config
    }

    /// The loaded corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Analyzed terms of every document.
    pub fn files(&self) -> &Collection {
        &self.files
    }

    /// Document-level IDF weights.
    pub fn file_idfs(&self) -> &IdfTable {
        &self.file_idfs
    }
}

impl std::fmt::Debug for Lector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lector")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .field("splitter", &self.splitter.name())
            .field("documents", &self.files.len())
            .field("terms", &self.file_idfs.len())
            .finish()
    }
}
