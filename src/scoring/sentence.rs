//! Sentence ranking by matching-word measure, then query term density.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LectorError, Result};
use crate::scoring::{Collection, IdfTable, Query, UnknownTermPolicy, weigh_query};

/// A ranked sentence with both of its sort keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceHit {
    pub text: String,
    /// Sum of the IDF weights of the distinct query terms in the sentence.
    pub matching_word_measure: f64,
    /// Share of the sentence's terms that are query terms, repeats included.
    pub query_term_density: f64,
}

/// Score every sentence and return them best first.
///
/// Sentences are ordered by matching-word measure, then by query term
/// density, both descending, then by text. Every sentence must carry at
/// least one term; otherwise [`LectorError::DegenerateSentence`] is returned
/// before anything is scored.
pub fn rank_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    policy: UnknownTermPolicy,
) -> Result<Vec<SentenceHit>> {
    if let Some((text, _)) = sentences.iter().find(|(_, terms)| terms.is_empty()) {
        return Err(LectorError::degenerate_sentence(text.as_str()));
    }
    let weights = weigh_query(query, idfs, policy)?;

    let mut hits: Vec<SentenceHit> = sentences
        .par_iter()
        .map(|(text, terms)| SentenceHit {
            text: text.clone(),
            matching_word_measure: matching_word_measure(terms, &weights),
            query_term_density: query_term_density(terms, query),
        })
        .collect();

    hits.sort_by(|a, b| {
        b.matching_word_measure
            .total_cmp(&a.matching_word_measure)
            .then_with(|| b.query_term_density.total_cmp(&a.query_term_density))
            .then_with(|| a.text.cmp(&b.text))
    });

    Ok(hits)
}

/// Texts of the `n` best sentences for `query`.
pub fn top_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    n: usize,
    policy: UnknownTermPolicy,
) -> Result<Vec<String>> {
    let mut hits = rank_sentences(query, sentences, idfs, policy)?;
    hits.truncate(n);
    Ok(hits.into_iter().map(|hit| hit.text).collect())
}

fn matching_word_measure(terms: &[String], weights: &[(&str, f64)]) -> f64 {
    weights
        .iter()
        .filter(|(term, _)| terms.iter().any(|t| t.as_str() == *term))
        .fold(0.0, |measure, &(_, idf)| measure + idf)
}

fn query_term_density(terms: &[String], query: &Query) -> f64 {
    let matches = terms.iter().filter(|t| query.contains(t.as_str())).count();
    matches as f64 / terms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compute_idfs;

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

    fn query(terms: &[&str]) -> Query {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_density_breaks_measure_ties() {
        let sentences = collection(&[
            ("cat sat mat", &["cat", "sat", "mat"]),
            ("cat cat cat", &["cat", "cat", "cat"]),
        ]);
        let idfs = compute_idfs(&sentences).unwrap();

        let hits =
            rank_sentences(&query(&["cat"]), &sentences, &idfs, UnknownTermPolicy::Skip).unwrap();

        assert_eq!(hits[0].text, "cat cat cat");
        assert_eq!(hits[0].query_term_density, 1.0);
        assert!((hits[1].query_term_density - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(hits[0].matching_word_measure, hits[1].matching_word_measure);
    }

    #[test]
    fn test_measure_ignores_repeats_but_density_does_not() {
        let sentences = collection(&[
            ("one", &["rust", "fast", "safe"]),
            ("many", &["rust", "rust", "safe"]),
            ("other", &["go"]),
        ]);
        let idfs = compute_idfs(&sentences).unwrap();

        let hits =
            rank_sentences(&query(&["rust"]), &sentences, &idfs, UnknownTermPolicy::Skip).unwrap();

        let idf = (1.5f64).ln();
        let many = hits.iter().find(|h| h.text == "many").unwrap();
        let one = hits.iter().find(|h| h.text == "one").unwrap();
        assert!((many.matching_word_measure - idf).abs() < 1e-12);
        assert!((one.matching_word_measure - idf).abs() < 1e-12);
        assert!((many.query_term_density - 2.0 / 3.0).abs() < 1e-12);
        assert!((one.query_term_density - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_measure_outranks_density() {
        let sentences = collection(&[
            ("dense", &["common", "common"]),
            ("rare", &["rare", "common", "x", "y", "z"]),
            ("plain", &["common", "w"]),
        ]);
        let idfs = compute_idfs(&sentences).unwrap();

        let top = top_sentences(
            &query(&["common", "rare"]),
            &sentences,
            &idfs,
            1,
            UnknownTermPolicy::Skip,
        )
        .unwrap();

        assert_eq!(top, vec!["rare"]);
    }

    #[test]
    fn test_full_ties_are_ordered_by_text() {
        let sentences = collection(&[("b c", &["b", "c"]), ("a d", &["a", "d"])]);
        let idfs = compute_idfs(&sentences).unwrap();

        let top =
            top_sentences(&query(&["zzz"]), &sentences, &idfs, 2, UnknownTermPolicy::Skip).unwrap();

        assert_eq!(top, vec!["a d", "b c"]);
    }

    #[test]
    fn test_empty_sentence_is_rejected() {
        let sentences = collection(&[("fine", &["fine"]), ("...", &[])]);
        let idfs = compute_idfs(&sentences).unwrap();

        let result = top_sentences(&query(&["fine"]), &sentences, &idfs, 1, UnknownTermPolicy::Skip);

        match result {
            Err(LectorError::DegenerateSentence(text)) => assert_eq!(text, "..."),
            other => panic!("Expected degenerate sentence error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_term_fails_under_strict_policy() {
        let sentences = collection(&[("a", &["a"])]);
        let idfs = compute_idfs(&sentences).unwrap();

        let result = top_sentences(&query(&["b"]), &sentences, &idfs, 1, UnknownTermPolicy::Fail);

        assert!(matches!(result, Err(LectorError::UnknownTerm(_))));
    }

    #[test]
    fn test_result_count_bounds() {
        let sentences = collection(&[("a", &["a"]), ("b", &["b"]), ("c", &["a", "b"])]);
        let idfs = compute_idfs(&sentences).unwrap();
        let q = query(&["a"]);

        for n in 0..5 {
            let top = top_sentences(&q, &sentences, &idfs, n, UnknownTermPolicy::Skip).unwrap();
            assert_eq!(top.len(), n.min(sentences.len()));
        }
    }
}
