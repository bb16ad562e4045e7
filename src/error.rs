//! Error types for the Lector library.
//!
//! All errors are represented by the [`LectorError`] enum. Validation errors
//! (empty collections, unknown query terms, degenerate sentences) are raised
//! before any scoring starts, so a failed query never yields partial scores.
//!
//! # Examples
//!
//! ```
//! use lector::error::{LectorError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LectorError::config("file_matches must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lector operations.
#[derive(Error, Debug)]
pub enum LectorError {
    /// I/O errors (reading the corpus, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration or command-line values
    #[error("Configuration error: {0}")]
    Config(String),

    /// IDF computation over a collection with no members
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// A query term has no entry in the IDF table being used
    #[error("Unknown term: {0}")]
    UnknownTerm(String),

    /// A sentence with no tokens reached the sentence ranker
    #[error("Degenerate sentence: {0}")]
    DegenerateSentence(String),

    /// Analysis-related errors (tokenization, filtering, stop word loading)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LectorError.
pub type Result<T> = std::result::Result<T, LectorError>;

impl LectorError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LectorError::Config(msg.into())
    }

    /// Create a new empty collection error.
    pub fn empty_collection<S: Into<String>>(msg: S) -> Self {
        LectorError::EmptyCollection(msg.into())
    }

    /// Create a new unknown term error.
    pub fn unknown_term<S: Into<String>>(term: S) -> Self {
        LectorError::UnknownTerm(term.into())
    }

    /// Create a new degenerate sentence error.
    pub fn degenerate_sentence<S: Into<String>>(sentence: S) -> Self {
        LectorError::DegenerateSentence(sentence.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LectorError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LectorError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        LectorError::Other(format!("Internal error: {}", msg.into()))
    }
}
