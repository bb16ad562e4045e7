//! # Lector
//!
//! Answer questions from a directory of plain-text documents with TF-IDF.
//!
//! ## Features
//!
//! - Text analysis pipeline (Unicode word tokenizer, lowercase, stop word and
//!   alphanumeric filters)
//! - Document ranking by summed term frequency times IDF
//! - Sentence ranking by matching-word measure with query term density as
//!   the tie-break
//! - Parallel scoring on a dedicated rayon thread pool
//!
//! ## Example
//!
//! ```
//! use lector::prelude::*;
//!
//! let corpus = Corpus::from_documents(vec![
//!     ("a.txt", "The cat sat on the mat."),
//!     ("b.txt", "The dog ran in the park."),
//! ]);
//! let lector = Lector::new(corpus, LectorConfig::default()).unwrap();
//!
//! let answer = lector.answer("Where did the cat sit?").unwrap();
//! assert_eq!(answer.files[0].name, "a.txt");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod scoring;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, StandardAnalyzer, TokenOrder};
    pub use crate::analysis::sentence::{SentenceSplitter, UnicodeSentenceSplitter};
    pub use crate::config::LectorConfig;
    pub use crate::corpus::Corpus;
    pub use crate::engine::{Answer, Lector};
    pub use crate::error::{LectorError, Result};
    pub use crate::scoring::{
        Collection, DocumentHit, IdfTable, Query, SentenceHit, UnknownTermPolicy, compute_idfs,
        top_files, top_sentences,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
