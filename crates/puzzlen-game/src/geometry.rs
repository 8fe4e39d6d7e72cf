//! Pixel geometry.
//!
//! Pure transforms between pointer pixels and logical cells, kept apart from
//! the drag state machine so both can be tested without a rendering surface.

use std::ops::{Add, Sub};

use puzzlen_core::Coord;

/// A pointer position in pixels, relative to the top-left of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    /// Horizontal position, px.
    pub x: i32,
    /// Vertical position, px.
    pub y: i32,
}

impl PixelPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A displacement in pixels.
///
/// Arithmetic on pixels saturates, so pointer positions far outside the
/// window cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelShift {
    /// Horizontal displacement, px. Positive is east.
    pub x: i32,
    /// Vertical displacement, px. Positive is south.
    pub y: i32,
}

impl PixelShift {
    /// No displacement.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new displacement.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both components are zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add<PixelShift> for PixelPoint {
    type Output = PixelPoint;

    fn add(self, rhs: PixelShift) -> PixelPoint {
        PixelPoint::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub<PixelShift> for PixelPoint {
    type Output = PixelPoint;

    fn sub(self, rhs: PixelShift) -> PixelPoint {
        PixelPoint::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Sub for PixelPoint {
    type Output = PixelShift;

    fn sub(self, rhs: PixelPoint) -> PixelShift {
        PixelShift::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Add for PixelShift {
    type Output = PixelShift;

    fn add(self, rhs: PixelShift) -> PixelShift {
        PixelShift::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

/// Returns the logical cell under `point`.
///
/// Uses floor division, so pixels left of or above the board map to negative
/// (off-grid) cells rather than to row or column 0.
///
/// # Examples
///
/// ```
/// use puzzlen_core::Coord;
/// use puzzlen_game::geometry::{PixelPoint, cell_at_pixel};
///
/// assert_eq!(cell_at_pixel(PixelPoint::new(175, 125), 50), Coord::new(3, 2));
/// assert_eq!(cell_at_pixel(PixelPoint::new(-1, 0), 50), Coord::new(-1, 0));
/// ```
#[must_use]
pub const fn cell_at_pixel(point: PixelPoint, cell_size: i32) -> Coord {
    Coord::new(point.x.div_euclid(cell_size), point.y.div_euclid(cell_size))
}

/// Returns the top-left pixel of `cell`.
#[must_use]
pub const fn cell_origin(cell: Coord, cell_size: i32) -> PixelPoint {
    PixelPoint::new(cell.x * cell_size, cell.y * cell_size)
}

/// Returns the pixel displacement from cell `from` to cell `to`.
#[must_use]
pub const fn cell_delta(from: Coord, to: Coord, cell_size: i32) -> PixelShift {
    PixelShift::new((to.x - from.x) * cell_size, (to.y - from.y) * cell_size)
}
