//! Sort filter implementation.

use super::Filter;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// A filter that orders tokens lexicographically by their text.
///
/// Word order is lost; token positions keep pointing at the source. Only
/// useful to reproduce term lists that were produced in sorted order.
#[derive(Clone, Debug, Default)]
pub struct SortFilter;

impl SortFilter {
    /// Create a new sort filter.
    pub fn new() -> Self {
        SortFilter
    }
}

impl Filter for SortFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut sorted_tokens: Vec<Token> = tokens.collect();
        sorted_tokens.sort_by(|a, b| a.text.cmp(&b.text));
        Ok(sorted_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "sort"
    }
}
