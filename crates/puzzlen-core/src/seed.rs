//! Reproducible shuffle seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

/// Seed for a grid shuffle.
///
/// The same seed always produces the same permutation for grids of the same
/// size. Seeds print and parse as 16 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use puzzlen_core::ShuffleSeed;
///
/// let seed: ShuffleSeed = "00000000000000ff".parse().unwrap();
/// assert_eq!(seed, ShuffleSeed::new(255));
/// assert_eq!(seed.to_string(), "00000000000000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed(u64);

impl ShuffleSeed {
    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::seed_from_u64(self.0)
    }
}

impl Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error returned when a seed string is not hexadecimal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid shuffle seed {input:?}: expected 1 to 16 hex digits")]
pub struct ParseSeedError {
    input: String,
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.is_empty() || s.len() > 16 || s.starts_with('+') {
            return Err(err());
        }
        u64::from_str_radix(s, 16).map(Self).map_err(|_| err())
    }
}
