//! Reproduction operators for row-per-column chromosomes.
//!
//! All operators return a fresh [`Chromosome`]; parents are never touched.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: head of one parent, tail of the other,
//!   cut point uniform in `[0, N-1]`
//! - [`crossover_at`]: the same with a caller-chosen cut point
//!
//! # Mutation
//!
//! - [`point_mutation`]: one random gene gets a new random row
//! - [`mutate_gene`]: the same at a caller-chosen position and value

use super::types::Chromosome;
use crate::error::{QueensError, Result};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover with a random cut point.
///
/// The cut `c` is uniform in `[0, N-1]`; the child is `a[..c] ++ b[c..]`.
/// A cut of 0 returns a copy of `b`.
///
/// # Errors
/// [`QueensError::LengthMismatch`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    a: &Chromosome,
    b: &Chromosome,
    rng: &mut R,
) -> Result<Chromosome> {
    let cut = rng.random_range(0..a.len());
    crossover_at(a, b, cut)
}

/// Single-point crossover at `cut`: `a[..cut] ++ b[cut..]`.
///
/// `cut` is clamped to the chromosome length.
///
/// # Errors
/// [`QueensError::LengthMismatch`] if the parents differ in length.
pub fn crossover_at(a: &Chromosome, b: &Chromosome, cut: usize) -> Result<Chromosome> {
    if a.len() != b.len() {
        return Err(QueensError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let cut = cut.min(a.len());

    let mut genes = Vec::with_capacity(a.len());
    genes.extend_from_slice(&a.genes()[..cut]);
    genes.extend_from_slice(&b.genes()[cut..]);
    Ok(Chromosome::from_genes_unchecked(genes))
}

// ============================================================================
// Mutation
// ============================================================================

/// Replaces one uniformly chosen gene with a uniform row in `[1, N]`.
///
/// The new row may equal the old one. Whether to mutate at all is decided
/// by the caller (see [`GaConfig::mutation_probability`]).
///
/// [`GaConfig::mutation_probability`]: super::GaConfig::mutation_probability
pub fn point_mutation<R: Rng>(chromosome: &Chromosome, rng: &mut R) -> Chromosome {
    let n = chromosome.len();
    let position = rng.random_range(0..n);
    let row = rng.random_range(1..=n);
    let mut genes = chromosome.genes().to_vec();
    genes[position] = row;
    Chromosome::from_genes_unchecked(genes)
}

/// Returns a copy of `chromosome` with column `position` moved to `row`.
///
/// # Errors
/// [`QueensError::InvalidGene`] if `position >= N` or `row` is outside
/// `[1, N]`.
pub fn mutate_gene(chromosome: &Chromosome, position: usize, row: usize) -> Result<Chromosome> {
    let size = chromosome.len();
    if position >= size || row < 1 || row > size {
        return Err(QueensError::InvalidGene {
            column: position,
            row,
            size,
        });
    }
    let mut genes = chromosome.genes().to_vec();
    genes[position] = row;
    Ok(Chromosome::from_genes_unchecked(genes))
}
