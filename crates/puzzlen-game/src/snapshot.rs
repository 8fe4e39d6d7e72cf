//! Read-only view of the session for renderers.

use puzzlen_core::{Coord, Tile};

use crate::geometry::{PixelPoint, PixelShift, cell_origin};

/// Everything a renderer needs to draw one frame.
///
/// A snapshot owns its data; it does not borrow the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Tiles in row-major order.
    pub tiles: Vec<Tile>,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Cell size, px.
    pub cell_size: i32,
    /// Index of the engaged tile, if any.
    pub active_index: Option<usize>,
    /// Visual displacement of the engaged tile.
    pub current_shift: PixelShift,
}

impl Snapshot {
    /// Returns the top-left pixel at which the tile at `index` is drawn,
    /// including the drag shift for the engaged tile.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn tile_origin(&self, index: usize) -> PixelPoint {
        let cell = Coord::new(
            (index % self.width) as i32,
            (index / self.width) as i32,
        );
        let origin = cell_origin(cell, self.cell_size);
        if self.active_index == Some(index) {
            origin + self.current_shift
        } else {
            origin
        }
    }

    /// Returns the board size in pixels.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            self.width as i32 * self.cell_size,
            self.height as i32 * self.cell_size,
        )
    }

    /// Iterates over the numbered tiles with their draw origins.
    ///
    /// The engaged tile comes last so that it is painted over its neighbours.
    pub fn numbered_tiles(&self) -> impl Iterator<Item = (usize, Tile, PixelPoint)> + '_ {
        let rest = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != self.active_index);
        let active = self
            .active_index
            .and_then(|i| self.tiles.get(i).map(|tile| (i, tile)));
        rest.chain(active)
            .filter(|(_, tile)| !tile.is_empty())
            .map(|(i, &tile)| (i, tile, self.tile_origin(i)))
    }
}
