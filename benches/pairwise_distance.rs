use criterion::{criterion_group, criterion_main, Criterion};
use vectorized2d::algorithm::planar::EuclideanDistance;
use vectorized2d::array::Point2D;
use vectorized2d::units::Pairing;

fn create_data(len: usize, offset: f64) -> Point2D {
    let rows: Vec<[f64; 2]> = (0..len)
        .map(|i| {
            let t = i as f64 + offset;
            [t.sin() * 100.0, t.cos() * 100.0]
        })
        .collect();
    Point2D::try_from(rows).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let left = create_data(1_000, 0.0);
    let right = create_data(500, 0.5);

    c.bench_function("euclidean_distance all 1000x500", |b| {
        b.iter(|| {
            let _ = left.euclidean_distance(&right, Pairing::All).unwrap();
        })
    });

    let aligned = create_data(1_000, 0.25);
    c.bench_function("euclidean_distance aligned 1000", |b| {
        b.iter(|| {
            let _ = left.euclidean_distance(&aligned, Pairing::Aligned).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
