//! Error taxonomy shared by the puzzle crates.

use crate::PermitShift;

/// Invalid construction parameters.
///
/// Raised before a puzzle session starts; fatal to that construction attempt
/// and recoverable by retrying with corrected parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    /// Grid dimensions outside the range a [`Grid`](crate::Grid) supports.
    #[display("Width and height of puzzle must have value between [{min}; {max}], got {width} x {height}.")]
    GridDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Smallest supported dimension.
        min: usize,
        /// Largest supported dimension.
        max: usize,
    },
    /// Puzzle width outside the configured range.
    #[display("Width of puzzle must have diapason [{min}; {max}].")]
    Width {
        /// Requested width.
        value: usize,
        /// Smallest accepted width.
        min: usize,
        /// Largest accepted width.
        max: usize,
    },
    /// Puzzle height outside the configured range.
    #[display("Height must have diapason [{min}; {max}].")]
    Height {
        /// Requested height.
        value: usize,
        /// Smallest accepted height.
        min: usize,
        /// Largest accepted height.
        max: usize,
    },
    /// Cell size outside the configured pixel range.
    #[display("Size of cell must have value between [{min}; {max}].")]
    CellSize {
        /// Requested cell size, px.
        value: u32,
        /// Smallest accepted cell size, px.
        min: u32,
        /// Largest accepted cell size, px.
        max: u32,
    },
    /// Glue distance percentage outside the accepted range.
    #[display("Glue distance must have value between [0; {max}] percent.")]
    GluePercent {
        /// Requested percentage.
        value: u32,
        /// Largest accepted percentage.
        max: u32,
    },
    /// A tile sequence whose length does not match the grid dimensions.
    #[display("Expected {expected} tiles, got {actual}.")]
    TileCount {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied sequence.
        actual: usize,
    },
    /// A tile sequence that is not a permutation of `0..N·M`.
    #[display("Tiles must be a permutation of 0..{len}.")]
    NotAPermutation {
        /// `width * height`.
        len: usize,
    },
}

/// Corruption of an internal grid or drag state invariant.
///
/// These never occur through the public API of a well-formed grid. How they
/// are surfaced is decided by the caller's invariant policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvariantViolation {
    /// No slot holds the empty tile.
    #[display("empty slot not found")]
    MissingEmptySlot,
    /// A tile is allowed to move on both axes at once.
    #[display("tile at index {index} permits mixed-axis shift {permit:?}")]
    MixedAxisShift {
        /// Index of the offending tile.
        index: usize,
        /// The computed (inconsistent) directions.
        permit: PermitShift,
    },
    /// The tile sequence is no longer a permutation.
    #[display("tile sequence is not a permutation")]
    CorruptedPermutation,
}
