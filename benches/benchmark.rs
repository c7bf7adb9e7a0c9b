//! Benchmarks for the random generators and drawing calls.
//!
//! Measures raw word and double generation, Gaussian sampling, and the cost
//! of recording shapes through `Sketch` over `MemoryHost`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sketchpress::random::gaussian::Gaussian;
use sketchpress::random::marsaglia::Marsaglia;
use sketchpress::{random_range, random_seed, MemoryHost, Sketch};

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u32 = 2024;

/// Benchmarks `Marsaglia::next_u32()` and `next_double()`.
fn bench_marsaglia(c: &mut Criterion) {
    let mut group = c.benchmark_group("marsaglia");
    group.throughput(Throughput::Elements(1));

    group.bench_function("next_u32", |b| {
        let mut m = Marsaglia::with_seed(BENCH_SEED);
        b.iter(|| black_box(m.next_u32()));
    });

    group.bench_function("next_double", |b| {
        let mut m = Marsaglia::with_seed(BENCH_SEED);
        b.iter(|| black_box(m.next_double()));
    });

    group.finish();
}

/// Benchmarks `Gaussian::next_gaussian()`.
///
/// Alternating calls hit the cache, so the figure is the average over a
/// computed/cached pair.
fn bench_gaussian(c: &mut Criterion) {
    c.bench_function("next_gaussian", |b| {
        let mut g = Gaussian::with_seed(BENCH_SEED);
        b.iter(|| black_box(g.next_gaussian()));
    });
}

/// Benchmarks the shared generator behind `random_range()`.
fn bench_global(c: &mut Criterion) {
    random_seed(BENCH_SEED);
    c.bench_function("random_range", |b| {
        b.iter(|| black_box(random_range(black_box(-1.0), black_box(1.0))));
    });
}

/// Benchmarks drawing `n` random ellipses into a fresh document.
fn bench_draw_ellipses(c: &mut Criterion) {
    let counts: &[usize] = &[10, 100, 1000];

    let mut group = c.benchmark_group("draw_ellipses");
    for &n in counts {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                random_seed(BENCH_SEED);
                let mut sketch = Sketch::new(MemoryHost::new());
                for _ in 0..n {
                    let x = random_range(0.0, 600.0);
                    let y = random_range(0.0, 800.0);
                    sketch.ellipse(x, y, 10.0, 10.0).unwrap();
                }
                black_box(sketch.into_host())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_marsaglia,
    bench_gaussian,
    bench_global,
    bench_draw_ellipses,
);
criterion_main!(benches);
