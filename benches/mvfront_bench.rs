//! Criterion benchmarks for the portfolio search strategies.
//!
//! Measures the Pareto selection engine in isolation on synthetic pools,
//! and both runners end-to-end on the 4-asset demonstration universe.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mvfront::config::EvolutionConfig;
use mvfront::ga::GaRunner;
use mvfront::markowitz::Markowitz;
use mvfront::nsga2::pareto::{non_dominated_sort, select_next_generation};
use mvfront::nsga2::Nsga2Runner;
use mvfront::problem::ObjectivePair;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn demo_problem() -> Markowitz {
    Markowitz::new(
        vec![0.00429493, 0.02689857, 0.00827647, 0.00794438],
        vec![
            vec![0.00671900, 0.01193778, 0.00170523, 0.00161020],
            vec![0.01193778, 0.03438852, 0.00402569, 0.00375060],
            vec![0.00170523, 0.00402569, 0.00344421, 0.00185332],
            vec![0.00161020, 0.00375060, 0.00185332, 0.00233944],
        ],
    )
    .expect("demo data is well-formed")
}

/// Random objective pool with a realistic mix of dominated and
/// non-dominated points.
fn random_pool(n: usize, seed: u64) -> Vec<ObjectivePair> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| ObjectivePair::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect()
}

fn bench_non_dominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");

    for n in [50usize, 200, 800] {
        let pool = random_pool(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pool, |b, pool| {
            b.iter(|| non_dominated_sort(black_box(pool)));
        });
    }

    group.finish();
}

fn bench_select_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_next_generation");

    // Pool of 2n truncated to n, the per-generation workload.
    for n in [50usize, 200] {
        let pool = random_pool(2 * n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &pool, |b, pool| {
            b.iter(|| select_next_generation(black_box(pool), n));
        });
    }

    group.finish();
}

fn bench_nsga2_markowitz(c: &mut Criterion) {
    let mut group = c.benchmark_group("nsga2_markowitz");
    group.sample_size(10);

    let problem = demo_problem();
    for (pop, gens) in [(50usize, 50usize), (100, 100)] {
        let config = EvolutionConfig::default()
            .with_population_size(pop)
            .with_max_generations(gens)
            .with_seed(42);
        group.bench_function(BenchmarkId::new("run", format!("{pop}x{gens}")), |b| {
            b.iter(|| Nsga2Runner::run(black_box(&problem), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

fn bench_ga_markowitz(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_markowitz");
    group.sample_size(10);

    let problem = demo_problem();
    let config = EvolutionConfig::default()
        .with_population_size(100)
        .with_max_generations(100)
        .with_seed(42);
    group.bench_function("run/100x100", |b| {
        b.iter(|| GaRunner::run(black_box(&problem), black_box(&config)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_non_dominated_sort,
    bench_select_next_generation,
    bench_nsga2_markowitz,
    bench_ga_markowitz
);
criterion_main!(benches);
