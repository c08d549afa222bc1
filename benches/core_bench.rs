use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use zipline_simulator::core::{max_speed, CableCurve, CableMetrics};

fn sample_curves(count: usize) -> Vec<CableCurve> {
    (0..count)
        .map(|i| {
            let x = (i % 100) as f32 * 7.0;
            let y = ((i * 13) % 100) as f32 * 3.0;
            let tension = (i % 50) as f32 / 100.0;
            CableCurve::build(Vec2::new(x, y), Vec2::new(x + 400.0, y + 250.0), tension)
        })
        .collect()
}

fn bench_curve_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("cable_length");
    let curve = CableCurve::build(Vec2::new(50.0, 80.0), Vec2::new(900.0, 500.0), 0.2);

    for &samples in &[10usize, 50, 200] {
        group.bench_with_input(
            BenchmarkId::new("length_with_samples", samples),
            &samples,
            |b, &samples| b.iter(|| black_box(curve).length_with_samples(black_box(samples))),
        );
    }

    group.finish();
}

fn bench_metrics_during_drag(c: &mut Criterion) {
    let curves = sample_curves(1024);

    c.bench_function("metrics_batch_1024", |b| {
        b.iter(|| {
            let mut total = 0.0f32;
            for curve in &curves {
                let metrics = CableMetrics::compute(black_box(curve), 70.0, 0.1);
                total += metrics.length_m + metrics.max_speed_ms;
            }
            black_box(total)
        })
    });
}

fn bench_render_polyline(c: &mut Criterion) {
    let curve = CableCurve::build(Vec2::new(0.0, 0.0), Vec2::new(1200.0, 700.0), 0.1);

    c.bench_function("polyline_50", |b| {
        b.iter(|| black_box(curve.polyline(black_box(50))).len())
    });
}

fn bench_max_speed(c: &mut Criterion) {
    c.bench_function("max_speed", |b| {
        b.iter(|| max_speed(black_box(70.0), black_box(0.1), black_box(20.0)))
    });
}

criterion_group!(
    benches,
    bench_curve_length,
    bench_metrics_during_drag,
    bench_render_polyline,
    bench_max_speed
);
criterion_main!(benches);
