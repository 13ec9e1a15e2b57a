//! Text rendering of a placement.
//!
//! One line per row, top line = row N, cells separated by a single space.
//! A queen is drawn as `※` and an empty square as `▢`.

use crate::ga::Chromosome;
use std::fmt;

pub const QUEEN: char = '※';
pub const EMPTY: char = '▢';

/// [`Display`](fmt::Display) wrapper that draws a chromosome as a grid.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    chromosome: &'a Chromosome,
}

impl<'a> Board<'a> {
    pub fn new(chromosome: &'a Chromosome) -> Self {
        Self { chromosome }
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genes = self.chromosome.genes();
        let n = genes.len();
        for row in (1..=n).rev() {
            if row != n {
                writeln!(f)?;
            }
            for (column, &queen_row) in genes.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                let cell = if queen_row == row { QUEEN } else { EMPTY };
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Renders `chromosome` as a grid without a trailing newline.
pub fn render(chromosome: &Chromosome) -> String {
    Board::new(chromosome).to_string()
}
