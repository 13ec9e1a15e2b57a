//! Fitness-proportionate ("roulette wheel") parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use crate::error::{QueensError, Result};
use rand::Rng;

/// Picks a parent index with probability proportional to its fitness.
///
/// Draws `r` uniformly from `[0, total)` and returns the first individual
/// whose cumulative fitness (inclusive) reaches `r`. Because the comparison
/// is inclusive, a zero-fitness individual can still be returned when the
/// boundary lands exactly on it, but it is never favored.
///
/// # Errors
/// [`QueensError::DegenerateSelection`] if the population is empty or every
/// individual has fitness zero.
///
/// # Complexity
/// O(n) per selection (linear scan)
pub fn roulette<R: Rng>(population: &[Individual], rng: &mut R) -> Result<usize> {
    let total: usize = population.iter().map(Individual::fitness).sum();
    if total == 0 {
        return Err(QueensError::DegenerateSelection);
    }

    let threshold = rng.random_range(0.0..total as f64);
    let mut cumulative = 0usize;
    for (i, ind) in population.iter().enumerate() {
        cumulative += ind.fitness();
        if cumulative as f64 >= threshold {
            return Ok(i);
        }
    }

    // threshold < total, so the last individual always closes the wheel.
    Ok(population.len() - 1)
}
