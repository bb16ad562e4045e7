//! Token filter implementations for token transformation.
//!
//! Filters transform the token stream produced by a tokenizer. They can
//! rewrite token text, drop tokens, or reorder the stream.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words
//! - [`alphanumeric::AlphanumericFilter`] - Removes tokens without letters or digits
//! - [`sort::SortFilter`] - Orders tokens lexicographically
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Alphanumeric → (Sort)
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// # Examples
///
/// ```
/// use lector::analysis::token::{Token, TokenStream};
/// use lector::analysis::token_filter::Filter;
/// use lector::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod lowercase;
pub mod sort;
pub mod stop;

pub use alphanumeric::AlphanumericFilter;
pub use lowercase::LowercaseFilter;
pub use sort::SortFilter;
pub use stop::StopFilter;
