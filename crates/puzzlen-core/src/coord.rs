//! Logical grid coordinates and cardinal directions.

use std::fmt::{self, Display};

/// A logical cell coordinate.
///
/// Components are signed so that neighbours of edge cells, which lie outside
/// the grid, can still be expressed and queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// Column, growing to the east.
    pub x: i32,
    /// Row, growing to the south.
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate.
    #[must_use]
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring coordinate one step in `dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlen_core::{Coord, Direction};
    ///
    /// let c = Coord::new(0, 0);
    /// assert_eq!(c.step(Direction::North), Coord::new(0, -1));
    /// assert_eq!(c.step(Direction::East), Coord::new(1, 0));
    /// ```
    #[must_use]
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions a tile can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last row.
    South,
    /// Towards column 0.
    West,
    /// Towards the last column.
    East,
}

impl Direction {
    /// All directions, vertical axis first.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Returns the `(dx, dy)` unit offset of this direction.
    #[must_use]
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
        }
    }

    /// Returns `true` for [`West`](Self::West) and [`East`](Self::East).
    #[must_use]
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::West | Self::East)
    }
}
