//! Criterion benches for the builders and the flip pass.
//! Sizes: square grids with side in {8, 16, 32}.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hamcycle::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &side in &[8usize, 16, 32] {
        group.bench_with_input(BenchmarkId::new("serpentine", side), &side, |b, &side| {
            b.iter(|| serpentine(side, side, &mut NoProgress).unwrap())
        });
        let grid = Grid::new(side, side).unwrap();
        group.bench_with_input(BenchmarkId::new("search", side), &side, |b, _| {
            b.iter_batched(
                || StdRng::seed_from_u64(42),
                |mut rng| search(grid, SearchCfg::default(), &mut rng, &mut NoProgress).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_flips(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip");
    for &side in &[8usize, 16, 32] {
        group.bench_with_input(BenchmarkId::new("attempts_100", side), &side, |b, &side| {
            b.iter_batched(
                || {
                    let tour = serpentine(side, side, &mut NoProgress).unwrap();
                    (tour, StdRng::seed_from_u64(7))
                },
                |(tour, mut rng)| flip(tour, 100, &mut rng, &mut NoProgress),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_builders, bench_flips);
criterion_main!(benches);
