//! Benchmarks for tokenization and synonym expansion
//!
//! Run with: cargo bench --package sources
//!
//! These are the hot pure functions on the retrieval path; they run once
//! per recommendation request before any store I/O.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sources::profile::build_preference_context;
use sources::expansion::{expand_terms, tokenize};
use catalog::PreferenceProfile;

fn bench_tokenize(c: &mut Criterion) {
    let query = "Show me a navy, casual t-shirt for running and the gym!";

    c.bench_function("tokenize", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(query));
            black_box(tokens)
        })
    });
}

fn bench_expand_terms(c: &mut Criterion) {
    let tokens: Vec<String> = ["women", "navy", "coral", "casual", "tshirt", "sneakers"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    c.bench_function("expand_terms", |b| {
        b.iter(|| {
            let terms = expand_terms(black_box(&tokens));
            black_box(terms)
        })
    });
}

fn bench_build_preference_context(c: &mut Criterion) {
    let profile = PreferenceProfile {
        gender: "Women".to_string(),
        clothing_size: "M".to_string(),
        footwear_size: "8".to_string(),
        favourite_colors: vec!["Navy".to_string(), "Teal".to_string(), "Coral".to_string()],
        style_preferences: vec!["Casual".to_string(), "Sporty".to_string()],
    };

    c.bench_function("build_preference_context", |b| {
        b.iter(|| {
            let context = build_preference_context(black_box(&profile));
            black_box(context)
        })
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_expand_terms,
    bench_build_preference_context
);
criterion_main!(benches);
