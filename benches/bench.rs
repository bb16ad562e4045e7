//! Criterion benchmarks for Lector.
//!
//! Covers text analysis, IDF computation and the two ranking phases.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lector::analysis::analyzer::{Analyzer, StandardAnalyzer};
use lector::config::LectorConfig;
use lector::corpus::Corpus;
use lector::engine::Lector;
use lector::scoring::{
    Collection, Query, UnknownTermPolicy, compute_idfs, rank_files, rank_sentences,
};
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "question", "answer", "document", "sentence", "corpus", "term", "frequency", "inverse",
        "weight", "query", "token", "density", "measure", "ranking", "relevance", "the", "a",
        "of", "and", "is", "library", "history", "river", "mountain", "science", "language",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc = String::new();

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc.push_str(words[word_idx]);
            doc.push_str(if j % 12 == 11 { ". " } else { " " });
        }

        documents.push(doc);
    }

    documents
}

fn analyzed_collection(texts: &[String]) -> Collection {
    let analyzer = StandardAnalyzer::new();
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| (format!("doc{i:04}"), analyzer.terms(text).unwrap()))
        .collect()
}

fn query(terms: &[&str]) -> Query {
    terms.iter().map(|t| t.to_string()).collect()
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new();
    let texts = generate_test_documents(1000);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let result = analyzer.terms(black_box(&texts[0]));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let result = analyzer.terms(black_box(text));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark IDF computation and ranking.
fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    let files = analyzed_collection(&generate_test_documents(1000));
    let idfs = compute_idfs(&files).unwrap();
    let q = query(&["river", "history", "mountain"]);

    group.throughput(Throughput::Elements(files.len() as u64));
    group.bench_function("compute_idfs", |b| {
        b.iter(|| black_box(compute_idfs(black_box(&files))))
    });

    group.bench_function("rank_files", |b| {
        b.iter(|| black_box(rank_files(black_box(&q), &files, &idfs, UnknownTermPolicy::Skip)))
    });

    group.bench_function("rank_sentences", |b| {
        b.iter(|| {
            black_box(rank_sentences(
                black_box(&q),
                &files,
                &idfs,
                UnknownTermPolicy::Skip,
            ))
        })
    });

    group.finish();
}

/// Benchmark a full query against a loaded engine.
fn bench_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("answer");

    let corpus = Corpus::from_documents(
        generate_test_documents(200)
            .into_iter()
            .enumerate()
            .map(|(i, text)| (format!("doc{i:04}.txt"), text)),
    );
    let lector = Lector::new(corpus, LectorConfig::default()).unwrap();

    group.bench_function("answer_query", |b| {
        b.iter(|| black_box(lector.answer(black_box("What is the history of the river?"))))
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_scoring, bench_answer);
criterion_main!(benches);
