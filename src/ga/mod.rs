//! Genetic Algorithm for N-Queens placement.
//!
//! A chromosome assigns one row to every column, so column conflicts are
//! impossible by construction and only rows and diagonals are scored.
//! The search is a plain generational GA: roulette-wheel selection,
//! single-point crossover, single-gene mutation, full replacement each
//! generation, and an early stop as soon as any offspring is conflict-free.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Board size, population size, mutation probability, caps
//! - [`QueensGa`]: Executes the evolutionary loop
//! - [`GaSolution`]: The solved board with its generation count
//! - [`GenerationObserver`]: Per-generation progress hook
//!
//! # Submodules
//!
//! - [`fitness`]: Conflict counting and the fitness score
//! - [`operators`]: Single-point crossover and point mutation
//! - [`selection`]: Fitness-proportionate parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Crawford (1992), "Solving the N-Queens Problem Using Genetic Algorithms"

mod config;
pub mod fitness;
mod observer;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{evaluate, max_fitness, Conflicts};
pub use observer::{GenerationObserver, GenerationStats, LogObserver};
pub use runner::{solve, GaSolution, GaState, QueensGa};
pub use types::{Chromosome, Individual};
