//! Command-line front end.
//!
//! ```text
//! nqueens [N] [mutation_probability] [population_size] [seed] [max_generations]
//! ```
//!
//! When N is omitted it is read from stdin. Per-generation progress is
//! logged at `info` level (`RUST_LOG=info`); per-offspring detail at
//! `trace`.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use u_queens::board::Board;
use u_queens::ga::{GaConfig, LogObserver, QueensGa};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let board_size = match positional(&args, 1, "board size")? {
        Some(n) => n,
        None => prompt_board_size()?,
    };
    let config = build_config(&args, board_size)?;

    let mut ga = QueensGa::new(config).context("invalid configuration")?;
    let solution = ga
        .run_with_observer(&mut LogObserver)
        .with_context(|| format!("no placement found for {board_size} queens"))?;

    println!("Solved in Generation {}!", solution.generations);
    println!("{}", Board::new(solution.chromosome()));
    Ok(())
}

/// Parses `args[index]` if present; a malformed value is an error.
fn positional<T>(args: &[String], index: usize, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.get(index)
        .map(|s| s.parse::<T>().with_context(|| format!("invalid {name} {s:?}")))
        .transpose()
}

/// Reads arguments 2..=5 on top of the defaults.
fn build_config(args: &[String], board_size: usize) -> Result<GaConfig> {
    let mutation_probability = positional(args, 2, "mutation probability")?.unwrap_or(0.9);
    let population_size = positional(args, 3, "population size")?.unwrap_or(100);

    let mut config = GaConfig::new(board_size)
        .with_mutation_probability(mutation_probability)
        .with_population_size(population_size);
    if let Some(seed) = positional(args, 4, "seed")? {
        config = config.with_seed(seed);
    }
    if let Some(cap) = positional(args, 5, "max generations")? {
        config = config.with_max_generations(cap);
    }
    Ok(config)
}

fn prompt_board_size() -> Result<usize> {
    print!("Enter Number of Queens= ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();
    line.parse()
        .with_context(|| format!("invalid board size {line:?}"))
}
