//! Benchmarks for the polyline geometry hot paths: chain deviation and
//! bounded smoothing.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use marga_lanes::core::Point3D;
use marga_lanes::{max_deviation, LaneSmoother, SmoothingConfig};

/// Wavy centerline with deterministic "noise" along a gentle curve.
fn noisy_centerline(n_points: usize) -> Vec<Point3D> {
    (0..n_points)
        .map(|i| {
            let s = i as f32 * 0.5;
            let wobble = (i as f32 * 1.7).sin() * 0.2;
            Point3D::new(s, (s * 0.1).sin() * 2.0 + wobble, s * 0.01)
        })
        .collect()
}

fn bench_max_deviation(c: &mut Criterion) {
    let original = noisy_centerline(200);
    let candidate = noisy_centerline(200);

    c.bench_function("max_deviation_200pts", |b| {
        b.iter(|| max_deviation(black_box(&original), black_box(&candidate)))
    });
}

fn bench_smoothing(c: &mut Criterion) {
    let centerline = noisy_centerline(200);
    let smoother = LaneSmoother::new(SmoothingConfig {
        max_deviation: 0.3,
        max_iterations: 20,
    });

    c.bench_function("smooth_200pts_20iter", |b| {
        b.iter(|| smoother.smooth(black_box(&centerline)))
    });
}

criterion_group!(benches, bench_max_deviation, bench_smoothing);
criterion_main!(benches);
