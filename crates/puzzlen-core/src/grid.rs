//! The tile grid.

use std::fmt::{self, Display};

use rand::seq::SliceRandom as _;

use crate::{ConfigurationError, Coord, InvariantViolation, ShuffleSeed, Tile};

/// Smallest supported grid width or height.
pub const MIN_GRID_DIMENSION: usize = 2;

/// Largest supported grid width or height.
pub const MAX_GRID_DIMENSION: usize = 10;

/// An N×M sliding-tile grid with exactly one empty slot.
///
/// Tiles are stored in a flat, row-major sequence: index `i` is the cell at
/// `(i mod N, i div N)`. The sequence is always a permutation of `0..N·M`,
/// since every mutation is a swap or a shuffle.
///
/// # Examples
///
/// ```
/// use puzzlen_core::{Coord, Grid, Tile};
///
/// let mut grid = Grid::new_solved(4, 4).unwrap();
/// assert_eq!(grid.tile_at(Coord::new(0, 0)), Tile::new(1));
/// assert_eq!(grid.empty_index().unwrap(), 15);
/// assert!(grid.is_solved());
///
/// grid.swap(11, 15);
/// assert_eq!(grid.empty_index().unwrap(), 11);
/// assert!(!grid.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid in solved order: `1..N·M-1` followed by the empty slot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::GridDimension`] if either dimension is
    /// outside `[MIN_GRID_DIMENSION; MAX_GRID_DIMENSION]`.
    pub fn new_solved(width: usize, height: usize) -> Result<Self, ConfigurationError> {
        check_dimensions(width, height)?;
        let len = width * height;
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (1..len)
            .map(|v| Tile::new(v as u16))
            .chain([Tile::EMPTY])
            .collect();
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Creates a grid from an explicit row-major tile sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::GridDimension`] for unsupported dimensions,
    /// [`ConfigurationError::TileCount`] if the sequence length is not `N·M`,
    /// and [`ConfigurationError::NotAPermutation`] if the values are not
    /// exactly `0..N·M`.
    pub fn from_tiles(
        width: usize,
        height: usize,
        tiles: impl IntoIterator<Item = Tile>,
    ) -> Result<Self, ConfigurationError> {
        check_dimensions(width, height)?;
        let tiles: Vec<Tile> = tiles.into_iter().collect();
        let len = width * height;
        if tiles.len() != len {
            return Err(ConfigurationError::TileCount {
                expected: len,
                actual: tiles.len(),
            });
        }
        let grid = Self {
            width,
            height,
            tiles,
        };
        grid.check_permutation()
            .map_err(|_| ConfigurationError::NotAPermutation { len })?;
        Ok(grid)
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells, `N·M`.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: a grid has at least four cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the row-major tile sequence.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns `true` if `coord` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        usize::try_from(coord.x).is_ok_and(|x| x < self.width)
            && usize::try_from(coord.y).is_ok_and(|y| y < self.height)
    }

    /// Converts a coordinate to a flat index, or `None` if it is off-grid.
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        #[expect(clippy::cast_sign_loss)]
        let (x, y) = (coord.x as usize, coord.y as usize);
        Some(x + y * self.width)
    }

    /// Converts a flat index to its coordinate.
    ///
    /// The index is not bounds-checked; out-of-range indices map to rows
    /// below the grid.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Returns the tile at `coord`, or `None` if it is off-grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.index_of(coord).map(|i| self.tiles[i])
    }

    /// Returns the tile at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid; callers must bounds-check first.
    #[must_use]
    pub fn tile_at(&self, coord: Coord) -> Tile {
        let Some(tile) = self.get(coord) else {
            panic!("coordinate {coord} outside {}x{} grid", self.width, self.height);
        };
        tile
    }

    /// Returns the index of the empty slot.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::MissingEmptySlot`] if no slot is empty,
    /// which indicates a corrupted grid.
    pub fn empty_index(&self) -> Result<usize, InvariantViolation> {
        self.tiles
            .iter()
            .position(|tile| tile.is_empty())
            .ok_or(InvariantViolation::MissingEmptySlot)
    }

    /// Exchanges two slots.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.tiles.swap(i, j);
    }

    /// Applies a uniform random permutation to all slots, the empty one
    /// included.
    ///
    /// Half of all permutations cannot be solved; see
    /// [`shuffle_solvable`](Self::shuffle_solvable).
    pub fn shuffle(&mut self, seed: ShuffleSeed) {
        self.tiles.shuffle(&mut seed.rng());
    }

    /// Shuffles like [`shuffle`](Self::shuffle), then repairs the parity so
    /// the result is solvable.
    ///
    /// The repair swaps the first two numbered tiles, which flips the
    /// permutation parity without moving the empty slot.
    pub fn shuffle_solvable(&mut self, seed: ShuffleSeed) {
        self.shuffle(seed);
        if self.is_solvable() {
            return;
        }
        let mut numbered = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_empty())
            .map(|(i, _)| i);
        if let (Some(a), Some(b)) = (numbered.next(), numbered.next()) {
            self.tiles.swap(a, b);
        }
    }

    /// Returns `true` if the tiles are in sequential order with the empty slot
    /// last.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let len = self.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, tile)| tile.home_index(len) == i)
    }

    /// Returns `true` if the solved order is reachable by sliding moves.
    ///
    /// Every slide is a transposition with the empty slot and moves the empty
    /// slot by one cell, so the permutation parity must equal the parity of
    /// the empty slot's taxicab distance from its home cell.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        if self.check_permutation().is_err() {
            return false;
        }
        let len = self.len();
        let mut visited = vec![false; len];
        let mut cycles = 0;
        for start in 0..len {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.tiles[i].home_index(len);
            }
        }
        let permutation_odd = (len - cycles) % 2 == 1;

        let Ok(empty) = self.empty_index() else {
            return false;
        };
        let here = self.coord_of(empty);
        let home = self.coord_of(len - 1);
        let distance = here.x.abs_diff(home.x) + here.y.abs_diff(home.y);
        permutation_odd == (distance % 2 == 1)
    }

    /// Verifies that the tiles are a permutation of `0..N·M`.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::CorruptedPermutation`] otherwise.
    pub fn check_permutation(&self) -> Result<(), InvariantViolation> {
        let len = self.len();
        let mut seen = vec![false; len];
        for tile in &self.tiles {
            let slot = seen
                .get_mut(usize::from(tile.value()))
                .ok_or(InvariantViolation::CorruptedPermutation)?;
            if *slot {
                return Err(InvariantViolation::CorruptedPermutation);
            }
            *slot = true;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn corrupted_for_test(width: usize, height: usize, tiles: Vec<u16>) -> Self {
        Self {
            width,
            height,
            tiles: tiles.into_iter().map(Tile::new).collect(),
        }
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), ConfigurationError> {
    let range = MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION;
    if !range.contains(&width) || !range.contains(&height) {
        return Err(ConfigurationError::GridDimension {
            width,
            height,
            min: MIN_GRID_DIMENSION,
            max: MAX_GRID_DIMENSION,
        });
    }
    Ok(())
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width) {
            for tile in row {
                if tile.is_empty() {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:>2} ", tile.value())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn values(grid: &Grid) -> Vec<u16> {
        grid.tiles().iter().map(|t| t.value()).collect()
    }

    #[test]
    fn test_new_solved_layout() {
        let grid = Grid::new_solved(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(values(&grid), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]);
        assert!(grid.is_solved());
        assert!(grid.is_solvable());
        assert_eq!(grid.check_permutation(), Ok(()));
    }

    #[test]
    fn test_new_solved_rejects_bad_dimensions() {
        for (w, h) in [(1, 4), (4, 1), (0, 0), (11, 4), (4, 11)] {
            assert_eq!(
                Grid::new_solved(w, h),
                Err(ConfigurationError::GridDimension {
                    width: w,
                    height: h,
                    min: 2,
                    max: 10,
                })
            );
        }
        assert!(Grid::new_solved(2, 2).is_ok());
        assert!(Grid::new_solved(10, 10).is_ok());
    }

    #[test]
    fn test_from_tiles_validation() {
        let ok = Grid::from_tiles(2, 2, [3, 1, 0, 2].map(Tile::new)).unwrap();
        assert_eq!(values(&ok), vec![3, 1, 0, 2]);

        assert_eq!(
            Grid::from_tiles(2, 2, [1, 2, 0].map(Tile::new)),
            Err(ConfigurationError::TileCount {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Grid::from_tiles(2, 2, [1, 1, 0, 2].map(Tile::new)),
            Err(ConfigurationError::NotAPermutation { len: 4 })
        );
        assert_eq!(
            Grid::from_tiles(2, 2, [1, 4, 0, 2].map(Tile::new)),
            Err(ConfigurationError::NotAPermutation { len: 4 })
        );
    }

    #[test]
    fn test_coordinate_mapping() {
        let grid = Grid::new_solved(4, 3).unwrap();
        assert_eq!(grid.coord_of(0), Coord::new(0, 0));
        assert_eq!(grid.coord_of(5), Coord::new(1, 1));
        assert_eq!(grid.coord_of(11), Coord::new(3, 2));
        for i in 0..grid.len() {
            assert_eq!(grid.index_of(grid.coord_of(i)), Some(i));
        }
        assert_eq!(grid.index_of(Coord::new(-1, 0)), None);
        assert_eq!(grid.index_of(Coord::new(4, 0)), None);
        assert_eq!(grid.index_of(Coord::new(0, 3)), None);
        assert_eq!(grid.get(Coord::new(3, 2)), Some(Tile::EMPTY));
        assert_eq!(grid.get(Coord::new(0, -1)), None);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 grid")]
    fn test_tile_at_out_of_bounds_panics() {
        let grid = Grid::new_solved(4, 4).unwrap();
        let _ = grid.tile_at(Coord::new(4, 0));
    }

    #[test]
    fn test_empty_index_missing() {
        let grid = Grid::corrupted_for_test(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(grid.empty_index(), Err(InvariantViolation::MissingEmptySlot));
        assert_eq!(
            grid.check_permutation(),
            Err(InvariantViolation::CorruptedPermutation)
        );
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let mut a = Grid::new_solved(5, 4).unwrap();
        let mut b = a.clone();
        a.shuffle(ShuffleSeed::new(42));
        b.shuffle(ShuffleSeed::new(42));
        assert_eq!(a, b);

        let mut c = Grid::new_solved(5, 4).unwrap();
        c.shuffle(ShuffleSeed::new(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_solvable_known_cases() {
        // One slide away from solved.
        let grid = Grid::from_tiles(3, 3, [1, 2, 3, 4, 5, 6, 7, 0, 8].map(Tile::new)).unwrap();
        assert!(grid.is_solvable());
        // Classic 14-15 swap is unsolvable.
        let grid = Grid::from_tiles(
            4,
            4,
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0].map(Tile::new),
        )
        .unwrap();
        assert!(!grid.is_solvable());
        // Empty slot in the opposite corner of a 2x2, reached by two slides.
        let grid = Grid::from_tiles(2, 2, [0, 1, 3, 2].map(Tile::new)).unwrap();
        assert!(grid.is_solvable());
    }

    #[test]
    fn test_display() {
        let grid = Grid::new_solved(3, 3).unwrap();
        assert_eq!(grid.to_string(), " 1  2  3 \n 4  5  6 \n 7  8    \n");
    }

    proptest! {
        #[test]
        fn prop_shuffle_keeps_permutation(
            width in 2usize..=10,
            height in 2usize..=10,
            seeds in prop::collection::vec(any::<u64>(), 1..5),
        ) {
            let mut grid = Grid::new_solved(width, height).unwrap();
            for seed in seeds {
                grid.shuffle(ShuffleSeed::new(seed));
                prop_assert_eq!(grid.check_permutation(), Ok(()));
                prop_assert_eq!(grid.tiles().iter().filter(|t| t.is_empty()).count(), 1);
            }
        }

        #[test]
        fn prop_shuffle_solvable_is_solvable(
            width in 2usize..=10,
            height in 2usize..=10,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new_solved(width, height).unwrap();
            grid.shuffle_solvable(ShuffleSeed::new(seed));
            prop_assert_eq!(grid.check_permutation(), Ok(()));
            prop_assert!(grid.is_solvable());
        }

        #[test]
        fn prop_slides_preserve_solvability(
            moves in prop::collection::vec(0usize..4, 0..64),
        ) {
            let mut grid = Grid::new_solved(4, 4).unwrap();
            for dir in moves {
                let empty = grid.empty_index().unwrap();
                let target = grid.coord_of(empty).step(crate::Direction::ALL[dir]);
                if let Some(j) = grid.index_of(target) {
                    grid.swap(empty, j);
                }
            }
            prop_assert!(grid.is_solvable());
        }
    }
}
