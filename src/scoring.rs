//! TF-IDF scoring for the two ranking phases.
//!
//! Both phases share the same shapes: a [`Collection`] maps an identifier
//! (a file name, or a sentence's text) to its analyzed terms, and an
//! [`IdfTable`] is computed over exactly that collection. Each member is
//! scored independently on the rayon pool and the hits are ordered by a
//! single sort whose last key is the identifier itself, so equal scores
//! always come back in lexicographic order.
//!
//! ```text
//! documents ─► IdfTable ─► rank_files ─► top file(s)
//!                                           │ split + analyze
//!                                           ▼
//!                          sentences ─► IdfTable ─► rank_sentences
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{LectorError, Result};

pub mod document;
pub mod idf;
pub mod sentence;

pub use document::{DocumentHit, rank_files, top_files};
pub use idf::{IdfTable, compute_idfs};
pub use sentence::{SentenceHit, rank_sentences, top_sentences};

/// Analyzed members of one ranking phase, keyed by identifier.
pub type Collection = BTreeMap<String, Vec<String>>;

/// The distinct terms of a query.
pub type Query = BTreeSet<String>;

/// What to do with a query term the IDF table has never seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTermPolicy {
    /// The term contributes nothing to any score.
    #[default]
    Skip,
    /// The whole ranking fails with [`LectorError::UnknownTerm`].
    Fail,
}

/// Look up the weight of every query term before any scoring starts.
///
/// Returns `(term, idf)` pairs in query order. Terms missing from `idfs` are
/// dropped under [`UnknownTermPolicy::Skip`] and rejected under
/// [`UnknownTermPolicy::Fail`].
pub(crate) fn weigh_query<'q>(
    query: &'q Query,
    idfs: &IdfTable,
    policy: UnknownTermPolicy,
) -> Result<Vec<(&'q str, f64)>> {
    let mut weights = Vec::with_capacity(query.len());

    for term in query {
        match idfs.get(term) {
            Some(idf) => weights.push((term.as_str(), idf)),
            None => match policy {
                UnknownTermPolicy::Skip => {
                    log::warn!("Query term '{term}' has no IDF weight; skipping")
                }
                UnknownTermPolicy::Fail => return Err(LectorError::unknown_term(term.as_str())),
            },
        }
    }

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(members: &[(&str, &[&str])]) -> Collection {
        members
            .iter()
            .map(|(key, terms)| {
                (
                    key.to_string(),
                    terms.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_weigh_query_skips_unknown_terms() {
        let idfs = compute_idfs(&collection(&[("a", &["cat"]), ("b", &["dog"])])).unwrap();
        let query: Query = ["cat", "zebra"].iter().map(|t| t.to_string()).collect();

        let weights = weigh_query(&query, &idfs, UnknownTermPolicy::Skip).unwrap();

        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].0, "cat");
        assert!((weights[0].1 - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_weigh_query_fails_on_unknown_terms() {
        let idfs = compute_idfs(&collection(&[("a", &["cat"])])).unwrap();
        let query: Query = ["zebra"].iter().map(|t| t.to_string()).collect();

        let result = weigh_query(&query, &idfs, UnknownTermPolicy::Fail);

        match result {
            Err(LectorError::UnknownTerm(term)) => assert_eq!(term, "zebra"),
            other => panic!("Expected unknown term error, got {other:?}"),
        }
    }

    #[test]
    fn test_policy_default_is_skip() {
        assert_eq!(UnknownTermPolicy::default(), UnknownTermPolicy::Skip);
    }
}
