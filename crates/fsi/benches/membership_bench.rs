//! Criterion benchmarks for membership evaluation.
//! Each shape is timed on a 10k-point scan across its support with drawn
//! parameters, so the numbers track the per-call comparison/division cost.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fsi::sample::{
    draw_heptagonal, draw_hexagonal, draw_octagonal, draw_trapezoidal, draw_triangular, DrawCfg,
    ReplayToken,
};
use fsi::shape::Shape;

const POINTS: usize = 10_000;

fn scan_inputs(lo: f64, hi: f64) -> Vec<f64> {
    (0..POINTS)
        .map(|i| lo + (hi - lo) * (i as f64) / ((POINTS - 1) as f64))
        .collect()
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let cfg = DrawCfg::default();
    let tok = ReplayToken { seed: 43, index: 0 };

    let tri = draw_triangular(cfg, tok);
    group.bench_with_input(BenchmarkId::new("scan", "triangular"), &tri, |b, s| {
        b.iter_batched(
            || scan_inputs(s.a - 1.0, s.c + 1.0),
            |xs| s.scan(xs).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let tra = draw_trapezoidal(cfg, tok);
    group.bench_with_input(BenchmarkId::new("scan", "trapezoidal"), &tra, |b, s| {
        b.iter_batched(
            || scan_inputs(s.a - 1.0, s.c + 1.0),
            |xs| s.scan(xs).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let hexa = draw_hexagonal(cfg, tok);
    group.bench_with_input(BenchmarkId::new("scan", "hexagonal"), &hexa, |b, s| {
        b.iter_batched(
            || scan_inputs(s.h[0] - 1.0, s.h[5] + 1.0),
            |xs| s.scan(xs).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let hepta = draw_heptagonal(cfg, tok);
    group.bench_with_input(BenchmarkId::new("scan", "heptagonal"), &hepta, |b, s| {
        b.iter_batched(
            || scan_inputs(s.h[0] - 1.0, s.h[6] + 1.0),
            |xs| s.scan(xs).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let octa = draw_octagonal(cfg, tok);
    group.bench_with_input(BenchmarkId::new("scan", "octagonal"), &octa, |b, s| {
        b.iter_batched(
            || scan_inputs(s.h[0] - 1.0, s.h[7] + 1.0),
            |xs| s.scan(xs).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_membership);
criterion_main!(benches);
