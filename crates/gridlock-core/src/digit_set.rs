//! A compact set of digits 1-9.

use crate::Digit;

/// A set of digits, stored as a 9-bit mask.
///
/// Used by the rule checks to detect duplicates within a house in one pass.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitSet};
///
/// let mut seen = DigitSet::new();
/// assert!(seen.insert(Digit::D5));
/// assert!(!seen.insert(Digit::D5)); // already present
/// assert!(seen.contains(Digit::D5));
/// assert_eq!(seen.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing all nine digits.
    pub const FULL: Self = Self(0x1ff);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Inserts a digit, returning `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = digit.bit();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !digit.bit();
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & digit.bit() != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self)
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(DigitSet);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.0.0.trailing_zeros() as u8 + 1);
        self.0.remove(digit);
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.len() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Digit::D1));
        assert!(set.insert(Digit::D9));
        assert!(!set.insert(Digit::D1));
        assert!(set.contains(Digit::D1));
        assert!(!set.contains(Digit::D2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_full_iterates_all_digits() {
        let digits: Vec<_> = DigitSet::FULL.into_iter().collect();
        assert_eq!(digits, Digit::ALL);
        assert_eq!(DigitSet::from_iter(Digit::ALL), DigitSet::FULL);
    }
}
