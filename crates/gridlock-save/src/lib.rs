//! Plaintext save format for the Gridlock Sudoku engine.
//!
//! A save is a single UTF-8 text payload with two logical parts:
//!
//! 1. An 81-character bitmask line, row-major, `'1'` where the cell is a
//!    locked clue and `'0'` where it is free.
//! 2. A human-readable rendering of the 9×9 grid: nine value rows framed by
//!    box-drawing glyphs, one character per cell (the digit, or a space for
//!    an empty cell), with heavier rules at the 3×3 box boundaries.
//!
//! The decoration is purely visual. Decoding treats every character that is
//! not an ASCII digit or a space as opaque and strips it, so the digits
//! survive any equivalent visual scheme. There is no versioning field; any
//! change to the format is a breaking change for existing files.
//!
//! Encoding and decoding are pure, stateless transforms; decoding performs
//! no Sudoku validity check.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{ClueMask, Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//! let clues = ClueMask::from_grid(&grid);
//!
//! let text = gridlock_save::encode(&grid, &clues);
//! let (decoded_grid, decoded_clues) = gridlock_save::decode(&text).unwrap();
//! assert_eq!(decoded_grid, grid);
//! assert_eq!(decoded_clues, clues);
//! ```

use derive_more::{Display, Error};
use gridlock_core::{ClueMask, Digit, DigitGrid, Position};

const TOP_BORDER: &str = "┏━┯━┯━┳━┯━┯━┳━┯━┯━┓";
const BAND_SEPARATOR: &str = "┣━┿━┿━╋━┿━┿━╋━┿━┿━┫";
const BOTTOM_BORDER: &str = "┗━┷━┷━┻━┷━┷━┻━┷━┷━┛";

/// Error returned when decoding a save payload fails.
///
/// Failures are always surfaced to the caller; a malformed payload is never
/// silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SaveError {
    /// The bitmask line is not exactly 81 characters long.
    #[display("clue bitmask must be 81 characters, found {found}")]
    MaskLength {
        /// The number of characters actually found.
        found: usize,
    },
    /// The bitmask line contains a character other than `'0'` or `'1'`.
    #[display("invalid character {found:?} in clue bitmask")]
    MaskCharacter {
        /// The offending character.
        found: char,
    },
    /// The grid lines do not contain exactly 81 digits after sanitizing.
    #[display("invalid grid: expected 81 digits, found {found}")]
    GridLength {
        /// The number of digits actually found.
        found: usize,
    },
}

/// Encodes a grid and its clue mask as save-file text.
///
/// The result is the bitmask line, a newline, and the decorated grid.
/// Deterministic: equal inputs always produce identical text.
#[must_use]
pub fn encode(grid: &DigitGrid, clues: &ClueMask) -> String {
    let mut text = String::with_capacity(512);
    for pos in Position::ALL {
        text.push(if clues[pos] { '1' } else { '0' });
    }
    text.push('\n');

    text.push_str(TOP_BORDER);
    for y in 0..9 {
        text.push_str("\n┃");
        for x in 0..9 {
            match grid[Position::new(x, y)] {
                Some(digit) => text.push(digit.to_char()),
                None => text.push(' '),
            }
            // Heavy rule at box boundaries, light rule inside a box.
            text.push(if (x + 1) % 3 == 0 { '┃' } else { '│' });
        }
        if y == 2 || y == 5 {
            text.push('\n');
            text.push_str(BAND_SEPARATOR);
        }
    }
    text.push('\n');
    text.push_str(BOTTOM_BORDER);
    text
}

/// Decodes save-file text back into a grid and its clue mask.
///
/// The first line must be the 81-character `'0'`/`'1'` bitmask. In the
/// remaining lines, each line is trimmed, spaces are read as empty cells,
/// and every other non-digit character is stripped as decoration; exactly
/// 81 digit cells must remain. The digits are not checked against the
/// Sudoku rules — callers wanting that run
/// [`rules::grid_satisfies_rules`](gridlock_core::rules::grid_satisfies_rules)
/// on the result.
///
/// # Errors
///
/// Returns [`SaveError::MaskLength`] or [`SaveError::MaskCharacter`] if the
/// bitmask line is malformed, and [`SaveError::GridLength`] (carrying the
/// observed digit count) if the sanitized grid text does not hold exactly
/// 81 digits.
pub fn decode(text: &str) -> Result<(DigitGrid, ClueMask), SaveError> {
    let mut lines = text.lines();
    let mask_line = lines.next().unwrap_or_default();

    let mut clues = ClueMask::new();
    let mut mask_len = 0usize;
    for (i, c) in mask_line.chars().enumerate() {
        match c {
            '0' | '1' => {
                if i < 81 {
                    clues[Position::from_index(truncate_index(i))] = c == '1';
                }
            }
            found => return Err(SaveError::MaskCharacter { found }),
        }
        mask_len += 1;
    }
    if mask_len != 81 {
        return Err(SaveError::MaskLength { found: mask_len });
    }

    let digits: Vec<char> = lines
        .flat_map(|line| line.trim().chars())
        .filter_map(|c| match c {
            ' ' => Some('0'),
            '0'..='9' => Some(c),
            _ => None,
        })
        .collect();
    if digits.len() != 81 {
        return Err(SaveError::GridLength {
            found: digits.len(),
        });
    }

    let mut grid = DigitGrid::new();
    for (i, c) in digits.into_iter().enumerate() {
        grid[Position::from_index(truncate_index(i))] = Digit::from_char(c);
    }
    Ok((grid, clues))
}

/// Converts a position index already known to be below 81.
fn truncate_index(i: usize) -> u8 {
    debug_assert!(i < 81);
    #[expect(clippy::cast_possible_truncation)]
    let index = i as u8;
    index
}
