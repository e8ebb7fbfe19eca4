use clusterize::{Clusterable, Dbscan};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

struct Vector {
    id: usize,
    coords: Vec<f64>,
}

impl Clusterable for Vector {
    type Id = usize;

    fn id(&self) -> usize {
        self.id
    }

    fn distance(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Generate synthetic blobs around a few random centres
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 4;
    let centres: Vec<Vec<f64>> = (0..8)
        .map(|_| (0..d).map(|_| rng.random::<f64>() * 10.0).collect())
        .collect();

    let data: Vec<Vector> = (0..n)
        .map(|id| {
            let centre = &centres[id % centres.len()];
            let coords = centre
                .iter()
                .map(|x| x + rng.random::<f64>() - 0.5)
                .collect();
            Vector { id, coords }
        })
        .collect();

    group.bench_function("clusterize_n1000_d4", |b| {
        b.iter(|| {
            let model = Dbscan::new(0.5, 5);
            model.clusterize(black_box(&data));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
