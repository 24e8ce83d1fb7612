//! Grapheme segmentation performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fixedtext::{GraphemeString, graphemes};
use std::hint::black_box;

const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "Hello, World! This is a test string."),
    ("combining", "cafe\u{0301} nai\u{0308}ve e\u{0301}\u{0303}n\u{0303}o"),
    ("hangul", "\u{1100}\u{1161}\u{11A8}\u{AC00}\u{AC01} \u{D55C}\u{AD6D}\u{C5B4}"),
    ("emoji", "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F44D}\u{1F3FB} \u{1F1FA}\u{1F1F8}\u{2764}\u{FE0F}"),
];

fn segment_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphemes");
    for (name, text) in SAMPLES {
        group.bench_with_input(BenchmarkId::new("count", name), text, |b, input| {
            b.iter(|| graphemes(black_box(input)).count());
        });
    }
    group.finish();
}

fn segment_long(c: &mut Criterion) {
    let ascii = "x".repeat(10_000);
    c.bench_function("graphemes_ascii_10k", |b| {
        b.iter(|| graphemes(black_box(&ascii)).count());
    });

    let mixed = SAMPLES.iter().map(|(_, s)| *s).collect::<Vec<_>>().join(" ").repeat(100);
    c.bench_function("graphemes_mixed_long", |b| {
        b.iter(|| graphemes(black_box(&mixed)).count());
    });
}

fn grapheme_string(c: &mut Criterion) {
    let text = SAMPLES.iter().map(|(_, s)| *s).collect::<Vec<_>>().join(" ").repeat(20);

    c.bench_function("gstring_build_and_len", |b| {
        b.iter(|| GraphemeString::from(black_box(text.as_str())).len());
    });

    let gs = GraphemeString::from(text.as_str());
    let _ = gs.len();
    c.bench_function("gstring_sub_cached", |b| {
        b.iter(|| gs.sub(black_box(10), black_box(-10)));
    });

    c.bench_function("gstring_reverse", |b| {
        b.iter(|| black_box(&gs).reverse());
    });

    c.bench_function("gstring_byte_offset", |b| {
        b.iter(|| gs.byte_offset(black_box(gs.len() / 2)));
    });
}

criterion_group!(benches, segment_samples, segment_long, grapheme_string);
criterion_main!(benches);
