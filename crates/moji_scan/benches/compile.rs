//! Shortcode substitution benchmarks.
//!
//! Covers whole-string `compile` on short and long inputs, with and without
//! shortcodes, and the streaming transformer over the same inputs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use moji_scan::{compile, EmojiTransformer};

fn inputs() -> Vec<(&'static str, String)> {
    vec![
        ("one", "A :smile: a day".to_string()),
        (
            "two",
            "A :smile: and a :beer: day keeps the doctor away".to_string(),
        ),
        (
            "many",
            format!("A :smile: a day and 10 {}", ":beer: ".repeat(10)),
        ),
        ("none", "No smiles today.".to_string()),
        (
            "none_long",
            format!("No smiles for you or {}", "you ".repeat(1000)),
        ),
    ]
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for (name, input) in inputs() {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, text| {
            b.iter(|| black_box(compile(black_box(text))));
        });
    }

    group.finish();
}

/// Same inputs through the transformer in 64-byte fragments.
fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/64");

    for (name, input) in inputs() {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, text| {
            b.iter(|| {
                let mut transformer = EmojiTransformer::default();
                let mut out = Vec::with_capacity(text.len());
                let chunks: Vec<&[u8]> = text.as_bytes().chunks(64).collect();
                let last = chunks.len().saturating_sub(1);
                for (i, chunk) in chunks.iter().enumerate() {
                    transformer.transform_into(chunk, i == last, &mut out);
                }
                black_box(out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile, bench_stream);
criterion_main!(benches);
