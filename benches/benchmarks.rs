//! Benchmarks for streamhist
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use streamhist::histogram::StreamingHistogram;

/// Deterministic pseudo-random stream so runs are comparable
fn xorshift(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

fn filled_histogram(size: usize, values: u64) -> StreamingHistogram {
    let mut hist = StreamingHistogram::new(size);
    let mut state = 0x9e3779b97f4a7c15u64;
    for _ in 0..values {
        hist.add((xorshift(&mut state) % 100_000) as f64 / 100.0);
    }
    hist
}

// ============================================================================
// Insertion
// ============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.throughput(Throughput::Elements(1));

    for size in [16, 32, 64] {
        group.bench_function(format!("bins_{}", size), |b| {
            let mut hist = StreamingHistogram::new(size);
            let mut state = 1u64;
            b.iter(|| {
                let value = (xorshift(&mut state) % 100_000) as f64 / 100.0;
                hist.add(black_box(value));
            });
        });
    }

    group.bench_function("repeated_value", |b| {
        let mut hist = StreamingHistogram::new(32);
        b.iter(|| hist.add(black_box(42.0)));
    });

    group.finish();
}

// ============================================================================
// Estimators
// ============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let hist = filled_histogram(64, 100_000);

    group.bench_function("percentile", |b| {
        b.iter(|| black_box(hist.percentile(black_box(500.0))));
    });

    group.bench_function("median", |b| {
        b.iter(|| black_box(hist.median()));
    });

    group.bench_function("mean", |b| {
        b.iter(|| black_box(hist.mean()));
    });

    group.bench_function("mode", |b| {
        b.iter(|| black_box(hist.mode()));
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_queries);
criterion_main!(benches);
