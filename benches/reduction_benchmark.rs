//! Benchmarks for the nearest-neighbor reduction
//!
//! Run with: cargo bench --bench reduction_benchmark
//! HTML reports: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nn_cluster::{cluster_distance, find_nearest_pair, reduce_to, ClusterStore, Object};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random points on the [0, 1000]² grid the loader accepts
fn create_benchmark_store(n: usize, seed: u64) -> ClusterStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let objects: Vec<Object> = (0..n)
        .map(|id| {
            Object::new(
                id as i32,
                rng.random_range(0..=1000) as f32,
                rng.random_range(0..=1000) as f32,
            )
        })
        .collect();
    ClusterStore::from_objects(objects).unwrap()
}

/// Full reduction to one cluster, the O(n³) baseline
fn bench_reduce_to_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_to_one");
    group.sample_size(20);

    for &n in &[25usize, 50, 100, 200] {
        let store = create_benchmark_store(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.iter(|| {
                let mut store = store.clone();
                reduce_to(&mut store, black_box(1)).unwrap()
            });
        });
    }

    group.finish();
}

/// One neighbor scan over singleton clusters
fn bench_find_nearest_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_nearest_pair");

    for &n in &[50usize, 100, 400] {
        let store = create_benchmark_store(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.iter(|| find_nearest_pair(black_box(store)));
        });
    }

    group.finish();
}

/// Single-linkage distance between two large clusters
fn bench_cluster_distance(c: &mut Criterion) {
    let mut store = create_benchmark_store(400, 11);
    reduce_to(&mut store, 2).unwrap();
    let first = store.get(0).unwrap().clone();
    let second = store.get(1).unwrap().clone();

    c.bench_function("cluster_distance", |b| {
        b.iter(|| cluster_distance(black_box(&first), black_box(&second)));
    });
}

criterion_group!(
    benches,
    bench_reduce_to_one,
    bench_find_nearest_pair,
    bench_cluster_distance,
);

criterion_main!(benches);
