//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29). Whitespace segments are dropped; words, numbers
//! and punctuation marks are all emitted so later filters decide what counts
//! as a term. Trailing English clitics are cut into units of their own
//! (`Python's` → `Python` + `'s`, `don't` → `do` + `n't`).
//!
//! # Examples
//!
//! ```
//! use lector::analysis::tokenizer::Tokenizer;
//! use lector::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Hello", ",", "world", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Clitic bodies that follow an apostrophe.
const CLITIC_BODIES: [&str; 6] = ["s", "re", "ve", "ll", "d", "m"];

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Decimal numbers stay intact (`3.14`). A word ending in a clitic (`'s`,
/// `'re`, `'ve`, `'ll`, `'d`, `'m`, `n't`, with either a straight or a
/// typographic apostrophe) is emitted as the stem followed by the clitic, so
/// `Python's` still matches a query for `python`.
///
/// # Examples
///
/// ```
/// use lector::analysis::tokenizer::Tokenizer;
/// use lector::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("café résumé").unwrap().collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "café");
/// assert_eq!(tokens[1].text, "résumé");
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut units: Vec<(usize, &str)> = Vec::new();
        let mut segments = text.split_word_bound_indices().peekable();

        while let Some((start, segment)) = segments.next() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            // a clitic standing alone is cut in two by the word rules: `'` + `s`
            if is_apostrophe(segment) {
                if let Some(&(next_start, next)) = segments.peek() {
                    if is_clitic_body(next) {
                        segments.next();
                        units.push((start, &text[start..next_start + next.len()]));
                        continue;
                    }
                }
            }

            match clitic_start(segment) {
                Some(split) => {
                    units.push((start, &segment[..split]));
                    units.push((start + split, &segment[split..]));
                }
                None => units.push((start, segment)),
            }
        }

        Ok(units
            .into_iter()
            .enumerate()
            .map(|(position, (start_offset, unit))| {
                Token::with_offsets(unit, position, start_offset, start_offset + unit.len())
            })
            .collect::<Vec<_>>()
            .into_token_stream())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

fn is_apostrophe(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if APOSTROPHES.contains(&c))
}

fn is_clitic_body(segment: &str) -> bool {
    CLITIC_BODIES
        .iter()
        .any(|body| segment.eq_ignore_ascii_case(body))
}

/// Byte offset where a trailing clitic starts, if `word` has one and a
/// non-empty stem before it.
fn clitic_start(word: &str) -> Option<usize> {
    let apostrophe = word.rfind(&APOSTROPHES[..])?;
    let stem = &word[..apostrophe];
    let body = word[apostrophe..].strip_prefix(&APOSTROPHES[..])?;

    if body.eq_ignore_ascii_case("t") {
        // `n't` belongs to the clitic; `n't` on its own stays whole
        let n = stem.strip_suffix(['n', 'N'])?;
        return (!n.is_empty()).then_some(n.len());
    }
    (is_clitic_body(body) && !stem.is_empty()).then_some(apostrophe)
}
