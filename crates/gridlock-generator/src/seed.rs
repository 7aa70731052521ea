//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// The seed fully determines the generator's random stream, so a puzzle can
/// be reproduced from its seed alone. Seeds render as 64 lowercase hex
/// characters and parse back from the same form.
///
/// # Examples
///
/// ```
/// use gridlock_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Builds the generator's random stream for this seed.
    ///
    /// The PCG state is derived by hashing the seed bytes, so every seed
    /// byte influences the stream. One stream is created per generation and
    /// threaded through every draw; nothing is re-seeded mid-run.
    #[must_use]
    pub(crate) fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0u8; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, found {found}")]
    Length {
        /// The number of characters actually found.
        found: usize,
    },
    /// The text contains a character that is not a hex digit.
    #[display("invalid hex character {found:?} in seed")]
    InvalidDigit {
        /// The offending character.
        found: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(SeedParseError::Length {
                found: s.chars().count(),
            });
        }
        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks(2)) {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            *byte = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Result<u8, SeedParseError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(SeedParseError::InvalidDigit {
            found: char::from(c),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xAB; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let lower: PuzzleSeed = "0123456789abcdef".repeat(4).parse().unwrap();
        let upper: PuzzleSeed = "0123456789ABCDEF".repeat(4).parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::Length { found: 3 })
        );
        assert_eq!(
            "g".repeat(64).parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit { found: 'g' })
        );
    }

    #[test]
    fn test_rng_depends_on_every_byte() {
        let a = [0u8; 32];
        let mut b = [0u8; 32];
        b[31] = 1;
        let mut rng_a = PuzzleSeed::from_bytes(a).rng();
        let mut rng_b = PuzzleSeed::from_bytes(b).rng();
        let draws_a: Vec<u32> = (0..4).map(|_| rng_a.random()).collect();
        let draws_b: Vec<u32> = (0..4).map(|_| rng_b.random()).collect();
        assert_ne!(draws_a, draws_b);
    }
}
