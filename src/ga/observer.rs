//! Per-generation observation.
//!
//! The engine never prints. Callers that want progress output pass a
//! [`GenerationObserver`] to [`QueensGa::run_with_observer`]; it is invoked
//! once after every completed generation with a read-only
//! [`GenerationStats`] snapshot.
//!
//! Any `FnMut(&GenerationStats)` closure is an observer, and so is `()`
//! (ignores everything).
//!
//! [`QueensGa::run_with_observer`]: super::QueensGa::run_with_observer

use super::types::Individual;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// 1-based index of the generation just completed.
    pub generation: usize,
    /// Highest fitness in the new population.
    pub best_fitness: usize,
    /// Mean fitness of the new population.
    pub mean_fitness: f64,
    /// Size of the new population; smaller than configured only when a
    /// solution ended the generation early.
    pub population_size: usize,
    /// Fitness that marks a solution for this board size.
    pub max_fitness: usize,
}

impl GenerationStats {
    pub(crate) fn from_population(
        generation: usize,
        population: &[Individual],
        max_fitness: usize,
    ) -> Self {
        let best_fitness = population
            .iter()
            .map(Individual::fitness)
            .max()
            .unwrap_or(0);
        let total: usize = population.iter().map(Individual::fitness).sum();
        let mean_fitness = if population.is_empty() {
            0.0
        } else {
            total as f64 / population.len() as f64
        };
        Self {
            generation,
            best_fitness,
            mean_fitness,
            population_size: population.len(),
            max_fitness,
        }
    }

    /// `true` if this generation produced a solution.
    pub fn is_solved(&self) -> bool {
        self.best_fitness == self.max_fitness
    }
}

/// Receives a snapshot after each generation.
pub trait GenerationObserver {
    fn on_generation(&mut self, stats: &GenerationStats);
}

impl GenerationObserver for () {
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationStats),
{
    fn on_generation(&mut self, stats: &GenerationStats) {
        self(stats)
    }
}

/// Observer that reports each generation through the `log` facade at
/// `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GenerationObserver for LogObserver {
    fn on_generation(&mut self, stats: &GenerationStats) {
        log::info!(
            "=== Generation {} === Maximum Fitness = {} (mean {:.2}, population {})",
            stats.generation,
            stats.best_fitness,
            stats.mean_fitness,
            stats.population_size
        );
    }
}
