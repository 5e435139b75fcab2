//! Benchmarks for code-to-markup formatting.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::hint::black_box;

use codelist_markup::{SAMPLE, escape, format};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate source text with `lines` lines, every third one needing escapes.
fn generate_source(lines: usize) -> String {
    let mut src = String::with_capacity(lines * 48);
    for i in 0..lines {
        if i % 3 == 0 {
            src.push_str(&format!("    if a < {i} && b > {i} {{ run(); }}\n"));
        } else {
            src.push_str(&format!("    let value_{i} = compute({i});\n"));
        }
    }
    src
}

fn bench_format_sample(c: &mut Criterion) {
    c.bench_function("format_sample", |b| {
        b.iter(|| format(black_box(SAMPLE)));
    });
}

fn bench_escape_safe_text(c: &mut Criterion) {
    let text = "let value = compute(42);".repeat(64);

    c.bench_function("escape_safe_text", |b| {
        b.iter(|| escape(black_box(&text)));
    });
}

fn bench_format_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_by_lines");

    for lines in [10, 100, 1_000, 10_000] {
        let src = generate_source(lines);
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &src, |b, src| {
            b.iter(|| format(black_box(src)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_sample,
    bench_escape_safe_text,
    bench_format_varying_sizes
);
criterion_main!(benches);
