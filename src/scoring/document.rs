//! Document ranking by cumulative TF-IDF.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::{Collection, IdfTable, Query, UnknownTermPolicy, weigh_query};

/// A ranked document: its name and TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHit {
    pub name: String,
    pub score: f64,
}

/// Score every document and return them best first.
///
/// `score(doc) = Σ raw_count(t, doc) · idf(t)` over the query terms `t`
/// present in the document; repeated occurrences raise the score. Equal
/// scores are ordered by name.
pub fn rank_files(
    query: &Query,
    files: &Collection,
    idfs: &IdfTable,
    policy: UnknownTermPolicy,
) -> Result<Vec<DocumentHit>> {
    let weights = weigh_query(query, idfs, policy)?;

    let mut hits: Vec<DocumentHit> = files
        .par_iter()
        .map(|(name, terms)| DocumentHit {
            name: name.clone(),
            score: tf_idf(terms, &weights),
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(hits)
}

/// Names of the `n` best documents for `query`.
pub fn top_files(
    query: &Query,
    files: &Collection,
    idfs: &IdfTable,
    n: usize,
    policy: UnknownTermPolicy,
) -> Result<Vec<String>> {
    let mut hits = rank_files(query, files, idfs, policy)?;
    hits.truncate(n);
    Ok(hits.into_iter().map(|hit| hit.name).collect())
}

fn tf_idf(terms: &[String], weights: &[(&str, f64)]) -> f64 {
    weights
        .iter()
        .map(|&(term, idf)| {
            let count = terms.iter().filter(|t| t.as_str() == term).count();
            count as f64 * idf
        })
        .fold(0.0, |score, part| score + part)
}
