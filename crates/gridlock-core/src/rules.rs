//! Pure rule predicates: placement and whole-grid validity.
//!
//! These checks never mutate the grid they inspect. They are the cheap
//! pre-checks run before handing a grid to the solver, and the gate the
//! backtracking search uses for every speculative placement.

use crate::{Digit, DigitGrid, DigitSet, House, Position};

/// Returns `true` if placing `digit` at `pos` would not collide with an
/// existing occurrence in the same row, column, or box.
///
/// The scans include `pos` itself, so re-checking a digit already sitting
/// at `pos` reports a collision; clear the cell first in that case. This
/// check also does not require the target to be empty — callers handle
/// that separately.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position, rules};
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
///
/// // Same row, same column, same box
/// assert!(!rules::placement_allowed(&grid, Position::new(8, 0), Digit::D5));
/// assert!(!rules::placement_allowed(&grid, Position::new(0, 8), Digit::D5));
/// assert!(!rules::placement_allowed(&grid, Position::new(2, 2), Digit::D5));
///
/// // Unrelated cell
/// assert!(rules::placement_allowed(&grid, Position::new(4, 4), Digit::D5));
/// ```
#[must_use]
pub fn placement_allowed(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    let candidate = Some(digit);
    for i in 0..9 {
        if grid[Position::new(i, pos.y())] == candidate
            || grid[Position::new(pos.x(), i)] == candidate
        {
            return false;
        }
    }
    let origin = pos.box_origin();
    for dy in 0..3 {
        for dx in 0..3 {
            if grid[Position::new(origin.x() + dx, origin.y() + dy)] == candidate {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if no house of `grid` contains the same digit twice.
///
/// Empty cells are ignored, and an incomplete grid can be valid. Each
/// filled cell is judged against the *other* cells of its houses, so a
/// lone digit never conflicts with itself.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position, rules};
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
/// grid[Position::new(7, 0)] = Some(Digit::D5);
/// assert!(!rules::grid_satisfies_rules(&grid)); // duplicate in row 0
///
/// grid[Position::new(7, 0)] = None;
/// grid[Position::new(7, 5)] = Some(Digit::D5);
/// assert!(rules::grid_satisfies_rules(&grid)); // conflict resolved
/// ```
#[must_use]
pub fn grid_satisfies_rules(grid: &DigitGrid) -> bool {
    House::ALL.iter().all(|house| {
        let mut seen = DigitSet::new();
        house
            .positions()
            .iter()
            .filter_map(|&pos| grid[pos])
            .all(|digit| seen.insert(digit))
    })
}
