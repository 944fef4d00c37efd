//! Union-find benchmarks (`unify`, `find`, `groups`).
#![allow(clippy::expect_used)]

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use heapfind_bench::{SizeTier, Workload, generate_workload};
use heapfind_core::UnionFind;

fn setup(tier: SizeTier) -> Workload {
    generate_workload(&tier.config(42))
}

fn built(w: &Workload) -> UnionFind {
    let mut uf = UnionFind::new(w.universe_size).expect("non-empty universe");
    for &(p, q) in &w.pairs {
        uf.unify(p, q).expect("pairs are in range");
    }
    uf
}

fn bench_unify(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find_unify");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
        ("XL", SizeTier::XLarge),
    ] {
        let w = setup(tier);

        group.bench_function(BenchmarkId::new("all_pairs", name), |b| {
            b.iter(|| built(&w));
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find_queries");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let w = setup(tier);
        let uf = built(&w);

        group.bench_function(BenchmarkId::new("connected_pairs", name), |b| {
            b.iter_batched(
                || uf.clone(),
                |mut uf| {
                    w.pairs
                        .iter()
                        .filter(|&&(p, q)| uf.connected(p, q).expect("in range"))
                        .count()
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(BenchmarkId::new("groups", name), |b| {
            b.iter_batched(
                || uf.clone(),
                |mut uf| uf.groups(),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unify, bench_queries);
criterion_main!(benches);
