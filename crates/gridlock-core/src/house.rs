//! Constraint groups: rows, columns, and 3×3 boxes.

use crate::Position;

/// A constraint group (row, column, or 3×3 box).
///
/// Each house covers nine cells, and the Sudoku rule is that no house may
/// contain the same digit twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row(u8),
    /// A column identified by its x coordinate (0-8).
    Column(u8),
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box(u8),
}

impl House {
    /// All 27 houses: rows 0-8, then columns 0-8, then boxes 0-8.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0u8;
        while i < 9 {
            all[i as usize] = Self::Row(i);
            all[i as usize + 9] = Self::Column(i);
            all[i as usize + 18] = Self::Box(i);
            i += 1;
        }
        all
    };

    /// Returns the nine positions covered by this house, in scan order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{House, Position};
    ///
    /// let row = House::Row(2).positions();
    /// assert_eq!(row[0], Position::new(0, 2));
    /// assert_eq!(row[8], Position::new(8, 2));
    ///
    /// let boxed = House::Box(4).positions();
    /// assert_eq!(boxed[0], Position::new(3, 3));
    /// assert_eq!(boxed[8], Position::new(5, 5));
    /// ```
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        let mut i = 0u8;
        while i < 9 {
            positions[i as usize] = match self {
                Self::Row(y) => Position::new(i, y),
                Self::Column(x) => Position::new(x, i),
                Self::Box(index) => {
                    Position::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
                }
            };
            i += 1;
        }
        positions
    }
}
