//! Error types for the N-Queens GA.

use thiserror::Error;

/// Errors reported by the N-Queens GA.
///
/// Construction errors ([`InvalidSize`](Self::InvalidSize),
/// [`InvalidProbability`](Self::InvalidProbability),
/// [`InvalidPopulation`](Self::InvalidPopulation)) are returned before any
/// population exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueensError {
    #[error("board size must be at least 1, got {size}")]
    InvalidSize { size: usize },

    #[error("mutation probability must be within [0, 1], got {probability}")]
    InvalidProbability { probability: f64 },

    #[error("population size must be at least 1, got {size}")]
    InvalidPopulation { size: usize },

    #[error("gene at column {column} is {row}, expected a row in [1, {size}]")]
    InvalidGene {
        column: usize,
        row: usize,
        size: usize,
    },

    #[error("chromosome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Every individual scored zero, so the roulette wheel has no area.
    #[error("cannot select from a population whose total fitness is zero")]
    DegenerateSelection,

    #[error("no solution after {generations} generations (best fitness {best_fitness})")]
    NotConverged {
        generations: usize,
        best_fitness: usize,
    },

    #[error("run cancelled after {generations} generations")]
    Cancelled { generations: usize },
}

pub type Result<T> = std::result::Result<T, QueensError>;
