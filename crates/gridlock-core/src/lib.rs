//! Core data structures and rule checks for the Gridlock Sudoku engine.
//!
//! This crate provides the shared grid model used by the solver, generator,
//! and save-file crates, together with the pure rule predicates that every
//! other component builds on.
//!
//! # Overview
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: board coordinate with row/column/box indexing
//! - [`House`]: one of the 27 constraint groups (rows, columns, boxes)
//! - [`DigitSet`]: compact set of digits, used by the rule checks
//! - [`DigitGrid`]: the 9×9 grid itself, with empty cells modeled as `None`
//! - [`ClueMask`]: marks which cells are immutable givens of a puzzle
//! - [`rules`]: placement and whole-grid validity predicates
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, DigitGrid, Position, rules};
//!
//! let mut grid = DigitGrid::new();
//! let pos = Position::new(4, 4);
//!
//! assert!(rules::placement_allowed(&grid, pos, Digit::D5));
//! grid[pos] = Some(Digit::D5);
//!
//! // 5 is now taken in row 4, column 4, and the center box
//! assert!(!rules::placement_allowed(&grid, Position::new(4, 0), Digit::D5));
//! assert!(rules::grid_satisfies_rules(&grid));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod mask;
pub mod position;
pub mod rules;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridParseError},
    house::House,
    mask::ClueMask,
    position::Position,
};
