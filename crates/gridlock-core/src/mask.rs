//! Clue mask: which cells are immutable givens.

use std::ops::{Index, IndexMut};

use crate::{DigitGrid, Position};

/// A 9×9 boolean mask marking the clue (given) cells of a puzzle.
///
/// The mask is derived once when a puzzle is fixed for play and lives
/// independently of the in-progress grid a player edits: clearing or
/// refilling a playable cell never changes which cells are clues.
///
/// # Examples
///
/// ```
/// use gridlock_core::{ClueMask, Digit, DigitGrid, Position};
///
/// let mut problem = DigitGrid::new();
/// problem[Position::new(0, 0)] = Some(Digit::D5);
///
/// let mask = ClueMask::from_grid(&problem);
/// assert!(mask[Position::new(0, 0)]);
/// assert!(!mask[Position::new(1, 0)]);
/// assert_eq!(mask.clue_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueMask {
    locked: [bool; 81],
}

impl ClueMask {
    /// Creates a mask with no clue cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locked: [false; 81],
        }
    }

    /// Creates a mask marking every filled cell of `grid` as a clue.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        let mut mask = Self::new();
        for pos in Position::ALL {
            mask[pos] = grid[pos].is_some();
        }
        mask
    }

    /// Returns the number of clue cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.locked.iter().filter(|&&locked| locked).count()
    }
}

impl Default for ClueMask {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for ClueMask {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.locked[usize::from(pos.index())]
    }
}

impl IndexMut<Position> for ClueMask {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.locked[usize::from(pos.index())]
    }
}

#[cfg(test)]
mod tests {
    use crate::Digit;

    use super::*;

    #[test]
    fn test_from_grid_marks_filled_cells() {
        let mut grid = DigitGrid::new();
        grid[Position::new(3, 3)] = Some(Digit::D7);
        grid[Position::new(8, 0)] = Some(Digit::D1);

        let mask = ClueMask::from_grid(&grid);
        assert_eq!(mask.clue_count(), 2);
        for pos in Position::ALL {
            assert_eq!(mask[pos], grid[pos].is_some());
        }
    }

    #[test]
    fn test_mask_independent_of_grid_edits() {
        let mut grid = DigitGrid::new();
        grid[Position::new(0, 0)] = Some(Digit::D5);
        let mask = ClueMask::from_grid(&grid);

        // Editing the playable grid afterwards does not move the clues.
        grid[Position::new(1, 1)] = Some(Digit::D2);
        grid[Position::new(0, 0)] = None;
        assert!(mask[Position::new(0, 0)]);
        assert!(!mask[Position::new(1, 1)]);
    }
}
