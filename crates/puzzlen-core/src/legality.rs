//! Legality of tile movement.
//!
//! A numbered tile may slide in a direction only if the neighbouring cell in
//! that direction is the empty slot. Cells outside the grid count as occupied,
//! so edge tiles behave as if walled. The empty slot itself reports every
//! direction as permitted: any neighbouring tile may slide into it.

use crate::{Coord, Direction, Grid, InvariantViolation};

bitflags::bitflags! {
    /// Directions in which a tile is allowed to slide.
    ///
    /// For a numbered tile this set never mixes the vertical and horizontal
    /// axes, because there is exactly one empty slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PermitShift: u8 {
        /// Towards row 0.
        const NORTH = 0b0001;
        /// Towards the last row.
        const SOUTH = 0b0010;
        /// Towards column 0.
        const WEST = 0b0100;
        /// Towards the last column.
        const EAST = 0b1000;
        /// North or south.
        const VERTICAL = Self::NORTH.bits() | Self::SOUTH.bits();
        /// West or east.
        const HORIZONTAL = Self::WEST.bits() | Self::EAST.bits();
    }
}

impl PermitShift {
    /// Returns the flag corresponding to `dir`.
    #[must_use]
    #[inline]
    pub const fn from_direction(dir: Direction) -> Self {
        match dir {
            Direction::North => Self::NORTH,
            Direction::South => Self::SOUTH,
            Direction::West => Self::WEST,
            Direction::East => Self::EAST,
        }
    }

    /// Returns `true` if sliding towards `dir` is permitted.
    #[must_use]
    #[inline]
    pub const fn allows(self, dir: Direction) -> bool {
        self.contains(Self::from_direction(dir))
    }

    /// Returns `true` if west or east is permitted.
    #[must_use]
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        self.intersects(Self::HORIZONTAL)
    }

    /// Returns `true` if north or south is permitted.
    #[must_use]
    #[inline]
    pub const fn is_vertical(self) -> bool {
        self.intersects(Self::VERTICAL)
    }

    /// Returns `true` unless both axes are permitted at once.
    #[must_use]
    #[inline]
    pub const fn is_single_axis(self) -> bool {
        !(self.is_horizontal() && self.is_vertical())
    }
}

impl Grid {
    /// Returns the directions the tile at `index` may slide in.
    ///
    /// The empty slot permits every direction. An index outside the grid
    /// permits none.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::MissingEmptySlot`] if the grid has no empty
    /// slot, and [`InvariantViolation::MixedAxisShift`] if a numbered tile would
    /// be allowed to move on both axes. Neither happens on a well-formed grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlen_core::{Grid, PermitShift};
    ///
    /// let grid = Grid::new_solved(4, 4).unwrap();
    /// // Tile 12 sits directly above the empty slot.
    /// assert_eq!(grid.permit_shift(11).unwrap(), PermitShift::SOUTH);
    /// assert_eq!(grid.permit_shift(14).unwrap(), PermitShift::EAST);
    /// assert_eq!(grid.permit_shift(0).unwrap(), PermitShift::empty());
    /// assert_eq!(grid.permit_shift(15).unwrap(), PermitShift::all());
    /// ```
    pub fn permit_shift(&self, index: usize) -> Result<PermitShift, InvariantViolation> {
        if index >= self.len() {
            return Ok(PermitShift::empty());
        }
        if index == self.empty_index()? {
            return Ok(PermitShift::all());
        }

        let coord = self.coord_of(index);
        let mut permit = PermitShift::empty();
        for dir in Direction::ALL {
            if !self.is_occupied(coord.step(dir)) {
                permit |= PermitShift::from_direction(dir);
            }
        }

        if !permit.is_single_axis() {
            return Err(InvariantViolation::MixedAxisShift { index, permit });
        }
        Ok(permit)
    }

    /// Returns `true` if the tile at `index` can move at all.
    ///
    /// # Errors
    ///
    /// Propagates the invariant violations of [`Grid::permit_shift`].
    pub fn has_permit_shift(&self, index: usize) -> Result<bool, InvariantViolation> {
        Ok(!self.permit_shift(index)?.is_empty())
    }

    /// Returns `true` if `coord` is off-grid or holds a numbered tile.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_none_or(|tile| !tile.is_empty())
    }
}
