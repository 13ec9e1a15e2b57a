//! N-Queens placement by genetic search.
//!
//! Places N non-attacking queens on an N×N board with a generational
//! genetic algorithm instead of exact backtracking:
//!
//! - **[`ga`]**: chromosome model, conflict-based fitness, roulette-wheel
//!   selection, single-point crossover, point mutation, and the
//!   generation loop.
//! - **[`board`]**: text rendering of a solved chromosome.
//! - **[`error`]**: the crate's error type.
//!
//! The search is randomized and carries no convergence guarantee. Boards
//! with no solution (N = 2, 3) end in one of two ways: with
//! [`QueensError::NotConverged`] once a generation cap is reached, or with
//! [`QueensError::DegenerateSelection`] as soon as every individual scores
//! zero (always for N = 2, and often for N = 3 with a small population).
//! Without a cap and without degeneration the run does not end.
//!
//! # Example
//!
//! ```
//! use u_queens::ga::{GaConfig, QueensGa};
//!
//! let config = GaConfig::new(6).with_seed(42).with_max_generations(100_000);
//! let solution = QueensGa::new(config)?.run()?;
//! assert!(solution.individual.is_solution());
//! println!("{}", u_queens::board::Board::new(solution.chromosome()));
//! # Ok::<(), u_queens::QueensError>(())
//! ```

pub mod board;
pub mod error;
pub mod ga;

pub use error::{QueensError, Result};
