use criterion::{Criterion, criterion_group, criterion_main};
use oscillator_fill_rs::core::{
    AffineTransform, AggregateColumns, FillDirection, ProjectedPoint, fill_threshold_regions,
    project_columns_into,
};
use std::hint::black_box;

fn oscillating_points(count: usize) -> Vec<ProjectedPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            ProjectedPoint::new(x, (x * 0.05).sin() * 100.0, i)
        })
        .collect()
}

fn bench_threshold_sweep_10k(c: &mut Criterion) {
    let points = oscillating_points(10_000);

    c.bench_function("threshold_sweep_10k", |b| {
        b.iter(|| {
            let regions = fill_threshold_regions(
                black_box(&points),
                black_box(60.0),
                FillDirection::Above,
                black_box(13),
            );
            black_box(regions)
        })
    });
}

fn bench_column_projection_10k(c: &mut Criterion) {
    let count = 10_000;
    let xs: Vec<f64> = (0..count).map(|i| i as f64).collect();
    let min_y: Vec<f64> = (0..count).map(|i| (i as f64 * 0.05).sin() * 100.0).collect();
    let max_y: Vec<f64> = min_y.iter().map(|y| y + 1.0).collect();
    let transform = AffineTransform::new(0.25, -2.0, 0.0, 350.0).expect("transform");
    let mut buffer = Vec::new();

    c.bench_function("column_projection_10k", |b| {
        b.iter(|| {
            let columns =
                AggregateColumns::new(&xs, &xs, &min_y, &max_y, 0).expect("aligned columns");
            project_columns_into(black_box(columns), black_box(transform), &mut buffer);
            black_box(buffer.len())
        })
    });
}

criterion_group!(benches, bench_threshold_sweep_10k, bench_column_projection_10k);
criterion_main!(benches);
