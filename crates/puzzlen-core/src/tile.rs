//! Tile representation.

use std::fmt::{self, Display};

/// A single grid slot value.
///
/// Value `0` is the empty slot; values `1..N·M` are numbered tiles.
///
/// # Examples
///
/// ```
/// use puzzlen_core::Tile;
///
/// assert!(Tile::EMPTY.is_empty());
/// assert_eq!(Tile::new(7).value(), 7);
/// assert_eq!(Tile::new(12).to_string(), "12");
/// assert_eq!(Tile::EMPTY.to_string(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tile(u16);

impl Tile {
    /// The empty slot.
    pub const EMPTY: Self = Self(0);

    /// Creates a tile with the given value.
    #[must_use]
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw value of the tile.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns `true` if this is the empty slot.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the index this tile occupies when the grid is solved.
    ///
    /// Numbered tiles go to `value - 1`, the empty slot goes to the last cell.
    #[must_use]
    #[inline]
    pub(crate) fn home_index(self, len: usize) -> usize {
        if self.is_empty() {
            len - 1
        } else {
            usize::from(self.0) - 1
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        Display::fmt(&self.0, f)
    }
}

impl From<Tile> for u16 {
    fn from(tile: Tile) -> u16 {
        tile.value()
    }
}
