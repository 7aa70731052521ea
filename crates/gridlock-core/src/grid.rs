//! The 9×9 digit grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Digit, Position};

/// A 9×9 grid of digits, with empty cells modeled as `None`.
///
/// The grid is an owned value: components that mutate it (the solver, the
/// generator's fill phase) receive it exclusively for the duration of the
/// call, and callers that need to preserve a prior state make an explicit
/// [`Clone`] first. A fresh grid starts with every cell empty; there is no
/// hidden shared default.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.filled_count(), 0);
///
/// grid[Position::new(0, 0)] = Some(Digit::D5);
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// assert!(!grid.is_complete());
/// ```
///
/// # Text form
///
/// [`Display`] renders the grid as a single 81-character row-major line with
/// `_` for empty cells; [`FromStr`] parses the same form, also accepting `.`
/// and `0` as empty and ignoring whitespace:
///
/// ```
/// use gridlock_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.filled_count(), 30);
/// assert_eq!(grid.to_string().parse::<DigitGrid>().unwrap(), grid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the number of filled (non-empty) cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.index())]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[usize::from(pos.index())]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`DigitGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum GridParseError {
    /// The text contains a character that is not a digit, a blank marker,
    /// or whitespace.
    #[display("unexpected character {found:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("grid text must describe 81 cells, found {found}")]
    CellCount {
        /// The number of cells actually found.
        found: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0usize;
        for c in s.chars() {
            let cell = match c {
                '1'..='9' => Digit::from_char(c),
                '_' | '.' | '0' => None,
                c if c.is_whitespace() => continue,
                found => return Err(GridParseError::UnexpectedCharacter { found }),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::CellCount { found: count });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = DigitGrid::new();
        for pos in Position::ALL {
            assert_eq!(grid[pos], None);
        }
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_index_round_trip() {
        let mut grid = DigitGrid::new();
        grid[Position::new(8, 0)] = Some(Digit::D9);
        grid[Position::new(0, 8)] = Some(Digit::D1);
        assert_eq!(grid[Position::new(8, 0)], Some(Digit::D9));
        assert_eq!(grid[Position::new(0, 8)], Some(Digit::D1));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_parse_accepts_blank_markers() {
        let underscores: DigitGrid = "_".repeat(81).parse().unwrap();
        let dots: DigitGrid = ".".repeat(81).parse().unwrap();
        let zeros: DigitGrid = "0".repeat(81).parse().unwrap();
        assert_eq!(underscores, DigitGrid::new());
        assert_eq!(dots, DigitGrid::new());
        assert_eq!(zeros, DigitGrid::new());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "_".repeat(80).parse::<DigitGrid>(),
            Err(GridParseError::CellCount { found: 80 })
        );
        assert_eq!(
            "_".repeat(82).parse::<DigitGrid>(),
            Err(GridParseError::CellCount { found: 82 })
        );
        assert_eq!(
            "x".parse::<DigitGrid>(),
            Err(GridParseError::UnexpectedCharacter { found: 'x' })
        );
    }

    #[test]
    fn test_display_parse_round_trip() {
        let mut grid = DigitGrid::new();
        grid[Position::new(4, 4)] = Some(Digit::D5);
        grid[Position::new(8, 8)] = Some(Digit::D9);
        let text = grid.to_string();
        assert_eq!(text.len(), 81);
        assert_eq!(text.parse::<DigitGrid>().unwrap(), grid);
    }

    proptest! {
        /// Any grid survives a display/parse round trip exactly.
        #[test]
        fn prop_display_parse_round_trip(
            cells in proptest::collection::vec(proptest::option::of(1u8..=9), 81)
        ) {
            let mut grid = DigitGrid::new();
            for (pos, cell) in Position::ALL.into_iter().zip(cells) {
                grid[pos] = cell.map(Digit::from_value);
            }
            prop_assert_eq!(grid.to_string().parse::<DigitGrid>().unwrap(), grid);
        }
    }
}
