//! Criterion benchmarks for u-pareto ranking, density and archives.
//!
//! Populations are sampled uniformly from the unit hypercube, so most
//! fronts are small and the sorts spend their time on dominance checks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pareto::archive::{Archive, ArchiveConfig, BoundedArchive};
use u_pareto::density::{DensityEstimator, DensityKind};
use u_pareto::dominance::DominanceComparator;
use u_pareto::ranking::{fast_non_dominated_sort, merge_non_dominated_sort};
use u_pareto::replacement::{RankingAndDensityReplacement, Replacement, ReplacementConfig};

// ===========================================================================
// Synthetic populations
// ===========================================================================

fn uniform_population(n: usize, m: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..m).map(|_| rng.random::<f64>()).collect())
        .collect()
}

/// Points on the linear front `sum(x) = 1`, all mutually non-dominated.
fn linear_front(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x: f64 = rng.random();
            vec![x, 1.0 - x]
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_non_dominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");
    group.sample_size(20);
    let cmp = DominanceComparator::new();

    for (n, m) in [(200usize, 2usize), (1000, 2), (1000, 3), (2000, 5)] {
        let points = uniform_population(n, m, 42);
        let label = format!("n{}_m{}", n, m);
        group.bench_with_input(BenchmarkId::new("fast", &label), &points, |b, p| {
            b.iter(|| black_box(fast_non_dominated_sort(black_box(p), &cmp)))
        });
        group.bench_with_input(BenchmarkId::new("merge", &label), &points, |b, p| {
            b.iter(|| black_box(merge_non_dominated_sort(black_box(p), &cmp)))
        });
    }
    group.finish();
}

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");
    group.sample_size(20);

    for &n in &[100, 400] {
        let front = linear_front(n, 7);
        for (name, kind) in [
            ("crowding", DensityKind::CrowdingDistance),
            ("knn", DensityKind::KNearestNeighbor { k: 1 }),
            (
                "angle",
                DensityKind::Angle {
                    neighbours: 2,
                    normalize: true,
                    reference: None,
                },
            ),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &front, |b, f| {
                b.iter(|| {
                    let mut estimator = DensityEstimator::new(kind.clone()).unwrap();
                    black_box(estimator.sort(black_box(f)).unwrap())
                })
            });
        }
    }
    group.finish();
}

fn bench_archive_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_archive");
    group.sample_size(10);

    for &max_size in &[50, 100] {
        let candidates = linear_front(1000, 3);
        group.bench_with_input(BenchmarkId::from_parameter(max_size), &candidates, |b, cands| {
            b.iter(|| {
                let config = ArchiveConfig::default().with_max_size(max_size);
                let mut archive = BoundedArchive::new(config).unwrap();
                for s in cands {
                    archive.add(s.clone()).unwrap();
                }
                black_box(archive.size())
            })
        });
    }
    group.finish();
}

fn bench_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("replacement");
    group.sample_size(10);

    let population = uniform_population(100, 2, 11);
    let offspring = uniform_population(100, 2, 12);
    for (name, config) in [
        ("nsga2", ReplacementConfig::nsga2()),
        ("spea2", ReplacementConfig::spea2()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut replacement = RankingAndDensityReplacement::new(config.clone()).unwrap();
                black_box(replacement.replace(&population, &offspring).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_non_dominated_sort,
    bench_density,
    bench_archive_insertion,
    bench_replacement
);
criterion_main!(benches);
