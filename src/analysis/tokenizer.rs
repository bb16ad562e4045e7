//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline: they split input
//! text into lexical units and leave normalization to the token filters.
//!
//! # Available Tokenizers
//!
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use lector::analysis::tokenizer::Tokenizer;
//! use lector::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by the
/// scoring thread pool.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lector::analysis::token::{Token, TokenStream};
/// use lector::analysis::tokenizer::Tokenizer;
/// use lector::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;

pub use unicode_word::UnicodeWordTokenizer;
