//! Alphanumeric filter implementation.
//!
//! Removes tokens that carry no alphabetic or numeric character at all, such
//! as punctuation marks and symbol runs. The check is permissive: a token
//! with a single letter or digit survives even when the rest of it is
//! punctuation (`--x--`, `c++`).

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that drops tokens made only of non-alphanumeric characters.
///
/// Empty tokens are dropped too.
///
/// # Examples
///
/// ```
/// use lector::analysis::token_filter::Filter;
/// use lector::analysis::token_filter::alphanumeric::AlphanumericFilter;
/// use lector::analysis::token::Token;
///
/// let filter = AlphanumericFilter::new();
/// let tokens = vec![
///     Token::new("cat", 0),
///     Token::new("...", 1),   // Removed: punctuation only
///     Token::new("c++", 2),   // Kept: has a letter
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result[1].text, "c++");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens.filter(Token::has_alphanumeric).collect();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
