//! Core data structures for the PuzzleN sliding-tile puzzle.
//!
//! This crate models the logical state of an N×M sliding-tile puzzle (the
//! 15-puzzle generalization): a permutation of numbered tiles with one empty
//! slot, and the rules deciding which tiles may slide where.
//!
//! # Overview
//!
//! - [`Grid`]: the flat tile permutation, coordinate transforms, adjacency
//!   queries, shuffling and solvability analysis.
//! - [`PermitShift`]: the directions a tile may slide in, computed by
//!   [`Grid::permit_shift`].
//! - [`Tile`], [`Coord`], [`Direction`]: small value types.
//! - [`ShuffleSeed`]: reproducible shuffles.
//! - [`ConfigurationError`], [`InvariantViolation`]: the error taxonomy.
//!
//! Pixel geometry and pointer interaction live in the `puzzlen-game` crate.
//!
//! # Examples
//!
//! ```
//! use puzzlen_core::{Grid, PermitShift};
//!
//! let mut grid = Grid::new_solved(4, 4).unwrap();
//! assert_eq!(grid.permit_shift(11).unwrap(), PermitShift::SOUTH);
//!
//! // Slide tile 12 down into the empty slot.
//! let empty = grid.empty_index().unwrap();
//! grid.swap(11, empty);
//! assert_eq!(grid.empty_index().unwrap(), 11);
//! assert!(grid.is_solvable());
//! ```

pub mod coord;
pub mod error;
pub mod grid;
pub mod legality;
pub mod seed;
pub mod tile;

pub use self::{
    coord::{Coord, Direction},
    error::{ConfigurationError, InvariantViolation},
    grid::{Grid, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION},
    legality::PermitShift,
    seed::{ParseSeedError, ShuffleSeed},
    tile::Tile,
};
