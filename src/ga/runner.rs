//! GA generation loop.
//!
//! [`QueensGa`] owns the population and the random source and drives the
//! evolutionary process:
//! initialization → selection → crossover → mutation → evaluation → repeat.
//!
//! Every generation fully replaces the population (no elitism). Building a
//! generation stops as soon as one offspring reaches the maximum fitness,
//! so the final population may be smaller than configured.

use super::config::GaConfig;
use super::fitness::max_fitness;
use super::observer::{GenerationObserver, GenerationStats};
use super::operators::{point_mutation, single_point_crossover};
use super::selection::roulette;
use super::types::{Chromosome, Individual};
use crate::error::{QueensError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Engine state. `Solved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaState {
    Running,
    Solved,
}

/// A solved board and how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct GaSolution {
    /// First individual in the final population with maximum fitness.
    pub individual: Individual,

    /// Generations executed before the solution appeared; 0 if the initial
    /// population already held one.
    pub generations: usize,

    /// Best fitness of the initial population followed by the best fitness
    /// after each generation.
    pub fitness_history: Vec<usize>,
}

impl GaSolution {
    pub fn chromosome(&self) -> &Chromosome {
        self.individual.chromosome()
    }
}

/// Genetic search for an N-Queens placement.
///
/// # Usage
///
/// ```
/// use u_queens::ga::{GaConfig, QueensGa};
///
/// let config = GaConfig::new(4).with_seed(7).with_max_generations(10_000);
/// let mut ga = QueensGa::new(config).unwrap();
/// let solution = ga.run().unwrap();
/// assert_eq!(solution.individual.fitness(), 6);
/// ```
#[derive(Debug)]
pub struct QueensGa<R: Rng = StdRng> {
    config: GaConfig,
    max_fitness: usize,
    population: Vec<Individual>,
    generation: usize,
    fitness_history: Vec<usize>,
    rng: R,
}

impl QueensGa<StdRng> {
    /// Builds the engine and its initial population.
    ///
    /// The random source is a [`StdRng`] seeded from `config.seed`, or from
    /// a random seed when none is set.
    ///
    /// # Errors
    /// Any error of [`GaConfig::validate`]; nothing is allocated on failure.
    pub fn new(config: GaConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QueensGa<R> {
    /// Builds the engine with an injected random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let n = config.board_size;
        let chromosomes = (0..config.population_size)
            .map(|_| Chromosome::random(n, &mut rng))
            .collect::<Result<Vec<_>>>()?;
        Self::from_population(config, chromosomes, rng)
    }

    /// Builds the engine around a caller-supplied initial population.
    ///
    /// Later generations use `config.population_size`; `config.seed` is
    /// ignored.
    ///
    /// # Errors
    /// - Any error of [`GaConfig::validate`]
    /// - [`QueensError::InvalidPopulation`] if `chromosomes` is empty
    /// - [`QueensError::LengthMismatch`] if a chromosome is not
    ///   `config.board_size` long
    pub fn from_population(
        config: GaConfig,
        chromosomes: Vec<Chromosome>,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;

        let n = config.board_size;
        if chromosomes.is_empty() {
            return Err(QueensError::InvalidPopulation { size: 0 });
        }
        if let Some(c) = chromosomes.iter().find(|c| c.len() != n) {
            return Err(QueensError::LengthMismatch {
                expected: n,
                actual: c.len(),
            });
        }

        let population = evaluate_population(chromosomes);
        let best = find_best(&population).fitness();

        log::debug!(
            "initial population: n={}, size={}, best={}/{}",
            n,
            population.len(),
            best,
            max_fitness(n)
        );

        Ok(Self {
            max_fitness: max_fitness(n),
            population,
            generation: 0,
            fitness_history: vec![best],
            config,
            rng,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Fitness that marks a solution: `N·(N−1)/2`.
    pub fn max_fitness(&self) -> usize {
        self.max_fitness
    }

    /// Number of generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// First individual with the highest fitness.
    pub fn best(&self) -> &Individual {
        find_best(&self.population)
    }

    /// Snapshot of the current population.
    pub fn stats(&self) -> GenerationStats {
        GenerationStats::from_population(self.generation, &self.population, self.max_fitness)
    }

    pub fn state(&self) -> GaState {
        if self.population.iter().any(|ind| ind.fitness() == self.max_fitness) {
            GaState::Solved
        } else {
            GaState::Running
        }
    }

    /// The first solved individual in the current population, if any.
    pub fn solution(&self) -> Option<GaSolution> {
        self.population
            .iter()
            .find(|ind| ind.fitness() == self.max_fitness)
            .map(|ind| GaSolution {
                individual: ind.clone(),
                generations: self.generation,
                fitness_history: self.fitness_history.clone(),
            })
    }

    /// Runs one generation. Does nothing once solved.
    ///
    /// # Errors
    /// [`QueensError::DegenerateSelection`] if the whole population has
    /// fitness zero; the population is left unchanged.
    pub fn step(&mut self) -> Result<GaState> {
        if self.state() == GaState::Solved {
            return Ok(GaState::Solved);
        }

        let size = self.config.population_size;
        let mut next_gen: Vec<Individual> = Vec::with_capacity(size);

        for _ in 0..size {
            // Selection
            let x = roulette(&self.population, &mut self.rng)?;
            let y = roulette(&self.population, &mut self.rng)?;

            // Crossover
            let mut child = single_point_crossover(
                self.population[x].chromosome(),
                self.population[y].chromosome(),
                &mut self.rng,
            )?;

            // Mutation
            if self.rng.random_range(0.0..1.0) < self.config.mutation_probability {
                child = point_mutation(&child, &mut self.rng);
            }

            let child = Individual::new(child);
            log::trace!(
                "chromosome = {:?}, fitness = {}",
                child.chromosome().genes(),
                child.fitness()
            );

            let solved = child.fitness() == self.max_fitness;
            next_gen.push(child);
            if solved {
                break;
            }
        }

        self.population = next_gen;
        self.generation += 1;

        let stats = self.stats();
        self.fitness_history.push(stats.best_fitness);
        log::debug!(
            "generation {}: best={}/{}, mean={:.2}",
            stats.generation,
            stats.best_fitness,
            self.max_fitness,
            stats.mean_fitness
        );

        Ok(self.state())
    }

    /// Runs until solved, the generation cap is hit, or the selection
    /// degenerates.
    pub fn run(&mut self) -> Result<GaSolution> {
        self.run_with_cancel(&mut (), None)
    }

    /// Like [`run`](Self::run), calling `observer` after each generation.
    pub fn run_with_observer<O>(&mut self, observer: &mut O) -> Result<GaSolution>
    where
        O: GenerationObserver + ?Sized,
    {
        self.run_with_cancel(observer, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The solved check, the generation cap and the flag are all tested at
    /// the top of each generation, in that order.
    ///
    /// # Errors
    /// - [`QueensError::NotConverged`] when `max_generations` is reached
    /// - [`QueensError::Cancelled`] when `cancel` is set
    /// - [`QueensError::DegenerateSelection`] from [`step`](Self::step)
    pub fn run_with_cancel<O>(
        &mut self,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaSolution>
    where
        O: GenerationObserver + ?Sized,
    {
        loop {
            if let Some(solution) = self.solution() {
                log::info!(
                    "solved in generation {}: {:?}",
                    solution.generations,
                    solution.chromosome().genes()
                );
                return Ok(solution);
            }

            if let Some(limit) = self.config.max_generations {
                if self.generation >= limit {
                    return Err(QueensError::NotConverged {
                        generations: self.generation,
                        best_fitness: self.best().fitness(),
                    });
                }
            }

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(QueensError::Cancelled {
                        generations: self.generation,
                    });
                }
            }

            self.step()?;
            observer.on_generation(&self.stats());
        }
    }
}

/// Builds and runs an engine in one call.
pub fn solve(config: GaConfig) -> Result<GaSolution> {
    QueensGa::new(config)?.run()
}

/// Scores freshly drawn chromosomes.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(chromosomes: Vec<Chromosome>) -> Vec<Individual> {
    chromosomes.into_iter().map(Individual::new).collect()
}

/// Scores freshly drawn chromosomes in parallel; order is preserved.
#[cfg(feature = "parallel")]
fn evaluate_population(chromosomes: Vec<Chromosome>) -> Vec<Individual> {
    chromosomes.into_par_iter().map(Individual::new).collect()
}

/// Find the first individual with the highest fitness.
fn find_best(population: &[Individual]) -> &Individual {
    population
        .iter()
        .reduce(|best, ind| if ind.fitness() > best.fitness() { ind } else { best })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
