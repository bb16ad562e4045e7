//! Inverse document frequency over a collection.

use ahash::{AHashMap, AHashSet};

use crate::error::{LectorError, Result};
use crate::scoring::Collection;

/// IDF weights for every term of one collection.
///
/// `idf(t) = ln(N / n_t)` where `N` is the number of members and `n_t` the
/// number of members containing `t` at least once. A table is only
/// meaningful for the collection it was computed from.
#[derive(Debug, Clone)]
pub struct IdfTable {
    weights: AHashMap<String, f64>,
    collection_size: usize,
}

impl IdfTable {
    /// Compute the table for `collection`.
    ///
    /// Fails with [`LectorError::EmptyCollection`] when the collection has
    /// no members.
    pub fn compute(collection: &Collection) -> Result<Self> {
        if collection.is_empty() {
            return Err(LectorError::empty_collection(
                "cannot compute IDF weights over zero members",
            ));
        }

        let mut member_counts: AHashMap<&str, usize> = AHashMap::new();
        for terms in collection.values() {
            let distinct: AHashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in distinct {
                *member_counts.entry(term).or_insert(0) += 1;
            }
        }

        let n = collection.len() as f64;
        let weights = member_counts
            .into_iter()
            .map(|(term, count)| (term.to_string(), (n / count as f64).ln()))
            .collect();

        Ok(IdfTable {
            weights,
            collection_size: collection.len(),
        })
    }

    /// Weight of `term`, if any member contains it.
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// Whether any member contains `term`.
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of members the table was computed over (`N`).
    pub fn collection_size(&self) -> usize {
        self.collection_size
    }

    /// Iterate over `(term, weight)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, idf)| (term.as_str(), *idf))
    }
}

/// Compute IDF weights over `collection`. See [`IdfTable::compute`].
pub fn compute_idfs(collection: &Collection) -> Result<IdfTable> {
    IdfTable::compute(collection)
}
