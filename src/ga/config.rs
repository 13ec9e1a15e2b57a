//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{QueensError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the N-Queens genetic algorithm.
///
/// Controls board size, population size, mutation probability, the
/// optional generation cap, and the random seed.
///
/// # Defaults
///
/// ```
/// use u_queens::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 100);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_queens::ga::GaConfig;
///
/// let config = GaConfig::new(10)
///     .with_population_size(200)
///     .with_mutation_probability(0.9)
///     .with_max_generations(5_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Board size N: number of queens, columns and rows.
    pub board_size: usize,

    /// Number of individuals in the population.
    ///
    /// Every generation replaces the whole population with this many
    /// offspring, unless a solution stops the generation early.
    pub population_size: usize,

    /// Probability of mutating each offspring after crossover (0.0–1.0).
    pub mutation_probability: f64,

    /// Maximum number of generations before giving up.
    ///
    /// `None` runs until solved, which never happens for N = 2 or 3.
    pub max_generations: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 100,
            mutation_probability: 0.5,
            max_generations: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Default configuration for an `n`×`n` board.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation probability.
    ///
    /// Not clamped: [`validate`](Self::validate) rejects values outside
    /// `[0, 1]`.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`QueensError::InvalidSize`] if `board_size < 1`
    /// - [`QueensError::InvalidProbability`] if `mutation_probability` is
    ///   outside `[0, 1]` or NaN
    /// - [`QueensError::InvalidPopulation`] if `population_size < 1`
    pub fn validate(&self) -> Result<()> {
        if self.board_size < 1 {
            return Err(QueensError::InvalidSize {
                size: self.board_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(QueensError::InvalidProbability {
                probability: self.mutation_probability,
            });
        }
        if self.population_size < 1 {
            return Err(QueensError::InvalidPopulation {
                size: self.population_size,
            });
        }
        Ok(())
    }
}
