//! Backtracking solver for the Gridlock Sudoku engine.
//!
//! The solver is an exhaustive depth-first search over the empty cells of a
//! grid, scanned row-major. It finds the first solution in ascending digit
//! order, or proves that none exists. There is no candidate bookkeeping and
//! no technique machinery; every placement is gated on
//! [`rules::placement_allowed`] alone.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::rules;
//! use gridlock_solver::solve;
//!
//! let mut grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! assert!(solve(&mut grid));
//! assert!(grid.is_complete());
//! assert!(rules::grid_satisfies_rules(&grid));
//! ```

use gridlock_core::{Digit, DigitGrid, Position, rules};

/// Solves `grid` in place by backtracking search.
///
/// Empty cells are visited in row-major order from the top-left corner; at
/// each one the digits 1-9 are tried in ascending order, and the first
/// complete assignment found is kept. Cells that are already filled are
/// treated as fixed and skipped — they are *not* re-validated, so callers
/// that need that guarantee should run
/// [`rules::grid_satisfies_rules`] first.
///
/// Returns `true` with `grid` fully solved, or `false` with `grid` exactly
/// as it was on entry: every speculative assignment is undone on the way
/// out of a dead end, so a failed solve leaves no partial work behind.
///
/// The search is exhaustive and worst-case exponential; there is no timeout
/// or cancellation. Recursion depth is bounded by the 81-cell scan.
pub fn solve(grid: &mut DigitGrid) -> bool {
    solve_from(grid, 0)
}

fn solve_from(grid: &mut DigitGrid, index: u8) -> bool {
    if index == 81 {
        return true;
    }
    let pos = Position::from_index(index);
    if grid[pos].is_some() {
        return solve_from(grid, index + 1);
    }
    for digit in Digit::ALL {
        if rules::placement_allowed(grid, pos, digit) {
            grid[pos] = Some(digit);
            if solve_from(grid, index + 1) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}

/// Counts the complete solutions of `grid`, stopping once `limit` is
/// reached.
///
/// This is the opt-in uniqueness probe: `count_solutions(&grid, 2)` tells
/// apart unsolvable (0), uniquely solvable (1), and ambiguous (2) puzzles
/// without ever enumerating more than `limit` solutions. The search runs on
/// an internal clone, so `grid` is never mutated.
///
/// Note that the generator deliberately does not use this: a generated
/// puzzle is guaranteed solvable but not guaranteed unique.
///
/// # Examples
///
/// ```
/// use gridlock_core::DigitGrid;
/// use gridlock_solver::count_solutions;
///
/// // An empty grid has a vast number of solutions; stop at two.
/// assert_eq!(count_solutions(&DigitGrid::new(), 2), 2);
/// assert_eq!(count_solutions(&DigitGrid::new(), 0), 0);
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, limit: usize) -> usize {
    let mut scratch = grid.clone();
    let mut found = 0;
    count_from(&mut scratch, 0, limit, &mut found);
    found
}

fn count_from(grid: &mut DigitGrid, index: u8, limit: usize, found: &mut usize) {
    if *found >= limit {
        return;
    }
    if index == 81 {
        *found += 1;
        return;
    }
    let pos = Position::from_index(index);
    if grid[pos].is_some() {
        count_from(grid, index + 1, limit, found);
        return;
    }
    for digit in Digit::ALL {
        if *found >= limit {
            break;
        }
        if rules::placement_allowed(grid, pos, digit) {
            grid[pos] = Some(digit);
            count_from(grid, index + 1, limit, found);
            grid[pos] = None;
        }
    }
}
