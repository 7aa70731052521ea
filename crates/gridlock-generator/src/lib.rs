//! Puzzle generation for the Gridlock Sudoku engine.
//!
//! Generation is a two-phase construction followed by controlled removal:
//!
//! 1. The three 3×3 boxes on the main diagonal share no row, column, or box
//!    with one another, so each is filled independently with a shuffled
//!    permutation of 1-9, no cross-checks needed.
//! 2. The remaining cells are completed by the same backtracking search the
//!    solver uses ([`gridlock_solver::solve`]), which always succeeds from a
//!    correctly seeded diagonal.
//! 3. Cells are then cleared at uniformly random positions until exactly
//!    the configured number of digits has been removed, yielding the
//!    problem grid. No uniqueness check is performed: the original solution
//!    is *a* solution of the problem, not necessarily the only one.
//!
//! All randomness for one puzzle comes from a single PCG stream derived
//! from a [`PuzzleSeed`], so generation is reproducible from the seed.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::rules;
//! use gridlock_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_complete());
//! assert!(rules::grid_satisfies_rules(&puzzle.solution));
//! assert_eq!(puzzle.problem.filled_count(), 81 - 50);
//! ```

mod seed;

use gridlock_core::{Digit, DigitGrid, Position};
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

pub use self::seed::{PuzzleSeed, SeedParseError};

/// A generated puzzle: the problem grid, its solution, and the seed that
/// produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with the removed cells empty.
    pub problem: DigitGrid,
    /// The fully filled grid the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles by diagonal-box seeding, backtracking fill, and
/// random digit removal.
///
/// # Examples
///
/// Reproducible generation from a seed:
///
/// ```
/// use gridlock_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let first = generator.generate_with_seed(seed);
/// let second = generator.generate_with_seed(seed);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    removed_cells: u8,
}

impl PuzzleGenerator {
    /// The default number of digits removed from the solved grid.
    pub const DEFAULT_REMOVED_CELLS: u8 = 50;

    /// Creates a generator that removes
    /// [`DEFAULT_REMOVED_CELLS`](Self::DEFAULT_REMOVED_CELLS) digits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            removed_cells: Self::DEFAULT_REMOVED_CELLS,
        }
    }

    /// Creates a generator that removes exactly `count` digits, leaving
    /// `81 - count` clues.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds 81.
    #[must_use]
    pub const fn with_removed_cells(count: u8) -> Self {
        assert!(count <= 81, "cannot remove more than 81 cells");
        Self {
            removed_cells: count,
        }
    }

    /// Returns the number of digits removed per generated puzzle.
    #[must_use]
    pub const fn removed_cells(&self) -> u8 {
        self.removed_cells
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random(&mut rand::rng()))
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and removal count always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let mut solution = DigitGrid::new();
        for origin in [Position::new(0, 0), Position::new(3, 3), Position::new(6, 6)] {
            fill_box(&mut solution, origin, &mut rng);
        }
        let filled = gridlock_solver::solve(&mut solution);
        debug_assert!(filled, "a diagonal-seeded grid always completes");

        let mut problem = solution.clone();
        let mut removed = 0;
        while removed < self.removed_cells {
            // Resample occupied cells only; empty hits do not count toward
            // the quota.
            let pos = Position::from_index(rng.random_range(0..81));
            if problem[pos].take().is_some() {
                removed += 1;
            }
        }

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills the 3×3 box at `origin` with a shuffled permutation of 1-9.
fn fill_box(grid: &mut DigitGrid, origin: Position, rng: &mut Pcg64Mcg) {
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for (i, digit) in (0u8..).zip(digits) {
        grid[Position::new(origin.x() + i % 3, origin.y() + i / 3)] = Some(digit);
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::rules;

    use super::*;

    fn seeded_puzzle(byte: u8) -> GeneratedPuzzle {
        PuzzleGenerator::new().generate_with_seed(PuzzleSeed::from_bytes([byte; 32]))
    }

    #[test]
    fn test_solution_is_complete_and_valid() {
        let puzzle = seeded_puzzle(0);
        assert!(puzzle.solution.is_complete());
        assert!(rules::grid_satisfies_rules(&puzzle.solution));
    }

    #[test]
    fn test_problem_has_exact_clue_count() {
        for byte in 0..4 {
            let puzzle = seeded_puzzle(byte);
            assert_eq!(puzzle.problem.filled_count(), 81 - 50);
        }
        let puzzle =
            PuzzleGenerator::with_removed_cells(17).generate_with_seed(PuzzleSeed::from_bytes([9; 32]));
        assert_eq!(puzzle.problem.filled_count(), 81 - 17);
    }

    #[test]
    fn test_problem_clues_agree_with_solution() {
        let puzzle = seeded_puzzle(1);
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(Some(digit), puzzle.solution[pos]);
            }
        }
    }

    #[test]
    fn test_problem_is_solvable() {
        let puzzle = seeded_puzzle(2);
        let mut grid = puzzle.problem.clone();
        assert!(gridlock_solver::solve(&mut grid));
        assert!(grid.is_complete());
        assert!(rules::grid_satisfies_rules(&grid));
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        assert_eq!(seeded_puzzle(3), seeded_puzzle(3));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(seeded_puzzle(4).solution, seeded_puzzle(5).solution);
    }

    #[test]
    fn test_removal_extremes() {
        let untouched =
            PuzzleGenerator::with_removed_cells(0).generate_with_seed(PuzzleSeed::from_bytes([6; 32]));
        assert_eq!(untouched.problem, untouched.solution);

        let emptied =
            PuzzleGenerator::with_removed_cells(81).generate_with_seed(PuzzleSeed::from_bytes([6; 32]));
        assert_eq!(emptied.problem.filled_count(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot remove more than 81 cells")]
    fn test_removal_count_over_81_panics() {
        let _ = PuzzleGenerator::with_removed_cells(82);
    }
}
