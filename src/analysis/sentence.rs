//! Sentence splitting for the sentence-ranking phase.
//!
//! A document is first cut into passages on line breaks, then each passage
//! is cut into sentences on Unicode sentence boundaries (UAX #29). A boundary
//! right after a known abbreviation (`Dr.`, `Mr.`, `e.g.`, `U.S.`, a single
//! capital initial) is not a sentence end, so those pieces are joined again.
//!
//! # Examples
//!
//! ```
//! use lector::analysis::sentence::{SentenceSplitter, UnicodeSentenceSplitter};
//!
//! let splitter = UnicodeSentenceSplitter::new();
//! let sentences = splitter.split("The cat sat. The dog ran!\nA new passage");
//!
//! assert_eq!(sentences, vec!["The cat sat.", "The dog ran!", "A new passage"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Trait for splitters that cut raw text into sentences.
pub trait SentenceSplitter: Send + Sync {
    /// Split the text into sentences, in document order.
    ///
    /// Returned sentences are trimmed and never empty.
    fn split(&self, text: &str) -> Vec<String>;

    /// Get the name of this splitter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Titles and other short forms that end in a period but rarely end a
/// sentence. Initialisms (`e.g.`, `U.S.`, `J.`) are recognized by shape.
const ABBREVIATIONS: [&str; 14] = [
    "dr", "mr", "mrs", "ms", "prof", "st", "jr", "sr", "vs", "mt", "rev", "gen", "sen", "rep",
];

/// Splits on line breaks, then on Unicode sentence boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    /// Create a new Unicode sentence splitter.
    pub fn new() -> Self {
        UnicodeSentenceSplitter
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();

        for passage in text.split('\n') {
            let mut pending: Option<usize> = None;

            for (offset, segment) in passage.split_sentence_bound_indices() {
                let start = *pending.get_or_insert(offset);
                let end = offset + segment.len();
                let sentence = passage[start..end].trim();

                if ends_with_abbreviation(sentence) {
                    continue;
                }
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                pending = None;
            }

            if let Some(start) = pending {
                let sentence = passage[start..].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
            }
        }

        sentences
    }

    fn name(&self) -> &'static str {
        "unicode_sentence"
    }
}

fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(last) = sentence.split_whitespace().next_back() else {
        return false;
    };
    let word = last.trim_start_matches(|c: char| !c.is_alphanumeric());
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };

    ABBREVIATIONS
        .iter()
        .any(|abbreviation| stem.eq_ignore_ascii_case(abbreviation))
        || is_initialism(word)
}

/// `U.S.`, `e.g.`, or a single capital initial such as `J.`.
fn is_initialism(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() || chars.len() % 2 != 0 {
        return false;
    }

    let letter_dot_pairs = chars
        .chunks(2)
        .all(|pair| pair[0].is_alphabetic() && pair[1] == '.');
    letter_dot_pairs && (chars.len() > 2 || chars[0].is_uppercase())
}
