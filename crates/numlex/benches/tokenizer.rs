//! Benchmark - parsing and formatting over a small literal corpus.
#![allow(missing_docs)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use numlex::{Number, Radix, parse, parse_token, to_literal};

const CORPUS: &[&str] = &[
    "0b1010101",
    "0o1234567",
    "01234567",
    "1234567",
    "1234567.123",
    "1.1e12",
    ".123",
    "0x123abcdef",
    "12345n",
    "0x123abcn",
    "  -0x1f",
    "+ 1234567",
    "NaN",
    "-Infinity",
    "012345abc",
    "no number here",
];

fn bench_corpus(c: &mut Criterion) {
    c.bench_function("parse/lenient", |b| {
        b.iter(|| {
            CORPUS
                .iter()
                .filter(|s| parse(black_box(*s), false).is_some())
                .count()
        });
    });

    c.bench_function("parse/strict", |b| {
        b.iter(|| {
            CORPUS
                .iter()
                .filter(|s| parse(black_box(*s), true).is_some())
                .count()
        });
    });

    c.bench_function("parse_token", |b| {
        b.iter(|| {
            CORPUS
                .iter()
                .filter(|s| parse_token(black_box(*s)).is_some())
                .count()
        });
    });

    c.bench_function("to_literal/hex", |b| {
        b.iter(|| to_literal(black_box(&Number::Int(123_456_789)), Radix::Hex));
    });
}

criterion_group!(benches, bench_corpus);
criterion_main!(benches);
