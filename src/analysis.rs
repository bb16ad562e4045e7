//! Text analysis module for Lector.
//!
//! This module turns raw text into the normalized terms used for ranking:
//! tokenizers cut text into units, token filters normalize and drop units,
//! analyzers chain the two, and sentence splitters cut documents into the
//! sentences ranked in the second phase.

pub mod analyzer;
pub mod sentence;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use sentence::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
