//! Criterion benchmarks for the N-Queens GA.
//!
//! Measures fitness evaluation on its own and complete seeded solves.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_queens::ga::{evaluate, selection, Chromosome, GaConfig, Individual, QueensGa};

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [8usize, 32, 128] {
        let chromosome = Chromosome::random(n, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &chromosome, |b, c| {
            b.iter(|| evaluate(black_box(c)))
        });
    }

    group.finish();
}

fn bench_roulette(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let population: Vec<Individual> = (0..100)
        .map(|_| Individual::new(Chromosome::random(8, &mut rng).unwrap()))
        .collect();

    c.bench_function("roulette/100", |b| {
        b.iter(|| selection::roulette(black_box(&population), &mut rng))
    });
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for n in [6usize, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let config = GaConfig::new(n)
                    .with_mutation_probability(0.9)
                    .with_max_generations(200_000)
                    .with_seed(42);
                QueensGa::new(config).and_then(|mut ga| ga.run())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fitness, bench_roulette, bench_solve);
criterion_main!(benches);
