//! Criterion benchmarks for the Xyston search library.
//!
//! Covers the two hot paths:
//! - Index construction from a line-oriented corpus
//! - Query resolution under each strategy

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use xyston::analysis::analyze;
use xyston::index::InvertedIndex;
use xyston::query::{SearchStrategy, resolve};

/// Generate test records for benchmarking.
fn generate_test_records(count: usize) -> Vec<String> {
    let words = vec![
        "search", "engine", "full", "text", "index", "query", "record", "line", "term", "posting",
        "boolean", "union", "intersection", "difference", "universe", "strategy", "corpus",
        "token", "whitespace", "lowercase", "membership", "position", "result", "match",
    ];

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let record_length = 5 + (i % 10); // Variable length records
        let mut record_words = Vec::with_capacity(record_length);

        for j in 0..record_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            record_words.push(words[word_idx]);
        }

        records.push(record_words.join(" "));
    }

    records
}

/// Benchmark tokenization and index construction.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    let records = generate_test_records(1000);

    group.bench_function("analyze_single_record", |b| {
        b.iter(|| {
            let tokens = analyze(black_box(&records[0]));
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("build_1000_records", |b| {
        b.iter(|| {
            let index = InvertedIndex::build(black_box(&records));
            black_box(index)
        })
    });

    group.finish();
}

/// Benchmark query resolution under each strategy.
fn bench_query_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_resolution");

    let records = generate_test_records(1000);
    let index = InvertedIndex::build(&records);
    let query = "search engine posting";

    for strategy in SearchStrategy::ALL_STRATEGIES {
        group.bench_function(format!("resolve_{strategy}"), |b| {
            b.iter(|| {
                let hits = resolve(strategy, black_box(query), &index);
                black_box(hits)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_index_build, bench_query_resolution);

criterion_main!(benches);
