//! Core value types: [`Chromosome`] and [`Individual`].
//!
//! A chromosome encodes one candidate board. Position `i` (0-indexed) is a
//! column and the value stored there is the 1-indexed row of the queen in
//! that column. Columns are conflict-free by construction; repeated row
//! values are legal and simply score as conflicts.
//!
//! Both types are immutable values. Operators build new chromosomes rather
//! than editing existing ones, and an [`Individual`] caches the fitness of
//! its chromosome at creation time.

use super::fitness;
use crate::error::{QueensError, Result};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate board: one row value in `[1, N]` per column.
///
/// # Examples
///
/// ```
/// use u_queens::ga::Chromosome;
///
/// let c = Chromosome::new(vec![2, 4, 1, 3]).unwrap();
/// assert_eq!(c.len(), 4);
/// assert!(Chromosome::new(vec![0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Chromosome {
    genes: Vec<usize>,
}

impl Chromosome {
    /// Builds a chromosome from explicit row values.
    ///
    /// The board size is the number of genes. Fails with
    /// [`QueensError::InvalidSize`] for an empty vector and
    /// [`QueensError::InvalidGene`] for a row outside `[1, len]`.
    pub fn new(genes: Vec<usize>) -> Result<Self> {
        let size = genes.len();
        if size == 0 {
            return Err(QueensError::InvalidSize { size });
        }
        if let Some((column, &row)) = genes
            .iter()
            .enumerate()
            .find(|&(_, &row)| row < 1 || row > size)
        {
            return Err(QueensError::InvalidGene { column, row, size });
        }
        Ok(Self { genes })
    }

    /// Draws a chromosome of `size` genes, each uniform in `[1, size]`.
    ///
    /// Fails with [`QueensError::InvalidSize`] if `size` is zero.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(QueensError::InvalidSize { size });
        }
        Ok(Self {
            genes: (0..size).map(|_| rng.random_range(1..=size)).collect(),
        })
    }

    /// Wraps genes already known to be valid for their length.
    pub(crate) fn from_genes_unchecked(genes: Vec<usize>) -> Self {
        debug_assert!(genes.iter().all(|&g| g >= 1 && g <= genes.len()));
        Self { genes }
    }

    /// Board size N.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`; a chromosome holds at least one gene.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Row values, indexed by column.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Consumes the chromosome and returns its row values.
    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }

    /// Iterates `(column, row)` pairs; column 0-indexed, row 1-indexed.
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.genes.iter().copied().enumerate()
    }
}

impl TryFrom<Vec<usize>> for Chromosome {
    type Error = QueensError;

    fn try_from(genes: Vec<usize>) -> Result<Self> {
        Self::new(genes)
    }
}

impl From<Chromosome> for Vec<usize> {
    fn from(c: Chromosome) -> Self {
        c.genes
    }
}

/// A chromosome paired with its cached fitness.
///
/// Fitness is computed once in [`Individual::new`]; there is no way to
/// change the chromosome afterwards, so the cache can never go stale.
/// Deserializing re-scores the chromosome and ignores any stored fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "IndividualRecord"))]
pub struct Individual {
    chromosome: Chromosome,
    fitness: usize,
}

impl Individual {
    /// Scores `chromosome` and wraps it.
    pub fn new(chromosome: Chromosome) -> Self {
        let fitness = fitness::evaluate(&chromosome);
        Self {
            chromosome,
            fitness,
        }
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// `true` when no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.fitness == fitness::max_fitness(self.chromosome.len())
    }

    pub fn into_chromosome(self) -> Chromosome {
        self.chromosome
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct IndividualRecord {
    chromosome: Chromosome,
}

#[cfg(feature = "serde")]
impl From<IndividualRecord> for Individual {
    fn from(record: IndividualRecord) -> Self {
        Individual::new(record.chromosome)
    }
}
