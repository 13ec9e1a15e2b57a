//! Fitness evaluation by queen-pair conflict counting.
//!
//! Fitness is the number of queen pairs that do **not** attack each other,
//! so higher is better and [`max_fitness`] marks a solution.
//!
//! # Scoring
//!
//! - **Rows**: every pair of queens sharing a row costs 1.
//! - **Diagonals**: queens are bucketed into `2N - 1` diagonals per
//!   direction, indexed `column + row - 1` ("/") and
//!   `N - column + row - 2` ("\", column 0-indexed, row 1-indexed). A
//!   diagonal holding `k > 1` queens costs `k - 1`, divided by the length
//!   of that diagonal, `N - |index - (N - 1)|`.
//!
//! The final score is `max_fitness - (rows + diagonals)`, truncated toward
//! zero. The per-diagonal normalization means a diagonal collision never
//! costs a full pair on its own, which flattens the fitness landscape
//! compared to plain pair counting. Changing it changes convergence.

use super::types::Chromosome;

/// Number of distinct queen pairs on an `n`×`n` board: `n·(n−1)/2`.
///
/// # Examples
///
/// ```
/// use u_queens::ga::max_fitness;
///
/// assert_eq!(max_fitness(1), 0);
/// assert_eq!(max_fitness(4), 6);
/// assert_eq!(max_fitness(8), 28);
/// ```
pub fn max_fitness(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Conflict cost split by direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conflicts {
    /// Queen pairs sharing a row.
    pub horizontal: usize,
    /// Normalized diagonal penalty, summed over both directions.
    pub diagonal: f64,
}

impl Conflicts {
    pub fn total(&self) -> f64 {
        self.horizontal as f64 + self.diagonal
    }

    /// `true` when no two queens attack each other.
    pub fn is_clear(&self) -> bool {
        self.horizontal == 0 && self.diagonal == 0.0
    }
}

/// Computes the row and diagonal conflict costs of `chromosome`.
pub fn conflicts(chromosome: &Chromosome) -> Conflicts {
    let n = chromosome.len();

    // Rows are 1-indexed; slot 0 stays empty.
    let mut rows = vec![0usize; n + 1];
    let mut rising = vec![0usize; 2 * n - 1];
    let mut falling = vec![0usize; 2 * n - 1];

    for (column, row) in chromosome.queens() {
        rows[row] += 1;
        rising[column + row - 1] += 1;
        falling[n - column + row - 2] += 1;
    }

    let horizontal = rows.iter().map(|&k| k * k.saturating_sub(1) / 2).sum();

    let mut diagonal = 0.0;
    for index in 0..2 * n - 1 {
        let excess = rising[index].saturating_sub(1) + falling[index].saturating_sub(1);
        let length = n - index.abs_diff(n - 1);
        diagonal += excess as f64 / length as f64;
    }

    Conflicts {
        horizontal,
        diagonal,
    }
}

/// Scores `chromosome` in `[0, max_fitness(len)]`.
///
/// # Examples
///
/// ```
/// use u_queens::ga::{evaluate, Chromosome};
///
/// let solved = Chromosome::new(vec![2, 4, 1, 3]).unwrap();
/// assert_eq!(evaluate(&solved), 6);
/// ```
pub fn evaluate(chromosome: &Chromosome) -> usize {
    let max = max_fitness(chromosome.len()) as f64;
    let score = max - conflicts(chromosome).total();
    // Pairs in a row never share a diagonal, so the cost is bounded by max.
    score.max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chromosome(genes: &[usize]) -> Chromosome {
        Chromosome::new(genes.to_vec()).unwrap()
    }

    #[test]
    fn test_max_fitness() {
        assert_eq!(max_fitness(0), 0);
        assert_eq!(max_fitness(1), 0);
        assert_eq!(max_fitness(2), 1);
        assert_eq!(max_fitness(4), 6);
        assert_eq!(max_fitness(8), 28);
    }

    #[test]
    fn test_four_queens_solutions() {
        assert_eq!(evaluate(&chromosome(&[2, 4, 1, 3])), 6);
        assert_eq!(evaluate(&chromosome(&[3, 1, 4, 2])), 6);
    }

    #[test]
    fn test_eight_queens_solution() {
        let c = chromosome(&[1, 5, 8, 6, 3, 7, 2, 4]);
        assert!(conflicts(&c).is_clear());
        assert_eq!(evaluate(&c), 28);
    }

    #[test]
    fn test_single_queen() {
        let c = chromosome(&[1]);
        assert_eq!(evaluate(&c), 0);
        assert_eq!(evaluate(&c), max_fitness(1));
    }

    #[test]
    fn test_same_row_counts_pairs() {
        // Four queens on one row: 6 pairs, diagonals all distinct.
        let c = chromosome(&[1, 1, 1, 1]);
        let cost = conflicts(&c);
        assert_eq!(cost.horizontal, 6);
        assert_eq!(cost.diagonal, 0.0);
        assert_eq!(evaluate(&c), 0);

        let c = chromosome(&[1, 1, 2, 2]);
        assert_eq!(conflicts(&c).horizontal, 2);
    }

    #[test]
    fn test_main_diagonal_is_normalized() {
        // All four queens on the long "\" diagonal: excess 3 over length 4.
        let c = chromosome(&[1, 2, 3, 4]);
        let cost = conflicts(&c);
        assert_eq!(cost.horizontal, 0);
        assert!((cost.diagonal - 0.75).abs() < 1e-12);
        assert_eq!(evaluate(&c), 5);
    }

    #[test]
    fn test_short_diagonal_weighs_more() {
        let c = chromosome(&[2, 1, 4, 4]);
        let cost = conflicts(&c);
        assert_eq!(cost.horizontal, 1);
        // rising[1] (length 2) holds columns 0 and 1,
        // falling[4] (length 3) holds columns 0 and 2.
        assert!((cost.diagonal - (1.0 / 2.0 + 1.0 / 3.0)).abs() < 1e-12);
        assert_eq!(evaluate(&c), 4);
    }

    #[test]
    fn test_two_queens_never_score() {
        for genes in [[1, 1], [1, 2], [2, 1], [2, 2]] {
            assert_eq!(evaluate(&chromosome(&genes)), 0, "{genes:?}");
        }
    }

    fn arb_chromosome() -> impl Strategy<Value = Chromosome> {
        (1usize..=12)
            .prop_flat_map(|n| prop::collection::vec(1..=n, n))
            .prop_map(|genes| Chromosome::new(genes).unwrap())
    }

    proptest! {
        #[test]
        fn prop_fitness_within_bounds(c in arb_chromosome()) {
            prop_assert!(evaluate(&c) <= max_fitness(c.len()));
        }

        #[test]
        fn prop_cost_never_exceeds_pairs(c in arb_chromosome()) {
            prop_assert!(conflicts(&c).total() <= max_fitness(c.len()) as f64 + 1e-9);
        }

        #[test]
        fn prop_mirror_preserves_fitness(c in arb_chromosome()) {
            // Reversing the columns swaps the two diagonal directions.
            let mut genes = c.genes().to_vec();
            genes.reverse();
            let mirrored = Chromosome::new(genes).unwrap();
            prop_assert_eq!(evaluate(&c), evaluate(&mirrored));
        }

        #[test]
        fn prop_depends_only_on_placements(c in arb_chromosome(), seed in any::<u64>()) {
            // Rebuild the board from the (column, row) pairs in shuffled order.
            use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
            let mut pairs: Vec<_> = c.queens().collect();
            pairs.shuffle(&mut StdRng::seed_from_u64(seed));
            let mut genes = vec![0; c.len()];
            for (column, row) in pairs {
                genes[column] = row;
            }
            prop_assert_eq!(evaluate(&c), evaluate(&Chromosome::new(genes).unwrap()));
        }
    }
}
