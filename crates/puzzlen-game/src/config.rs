//! Puzzle construction parameters.

use std::ops::RangeInclusive;

use puzzlen_core::ConfigurationError;

use crate::{InvariantPolicy, geometry::PixelShift};

/// Default number of columns and rows.
pub const DEFAULT_DIMENSION: usize = 4;

/// Accepted number of columns or rows.
pub const DIMENSION_RANGE: RangeInclusive<usize> = 3..=10;

/// Default cell size, px.
pub const DEFAULT_CELL_SIZE: u32 = 50;

/// Accepted cell size, px.
pub const CELL_SIZE_RANGE: RangeInclusive<u32> = 10..=100;

/// Default glue distance as a percentage of the cell size.
pub const DEFAULT_GLUE_PERCENT: u32 = 20;

/// Largest accepted glue distance percentage.
pub const MAX_GLUE_PERCENT: u32 = 50;

/// How [`Puzzle::request_shuffle`](crate::Puzzle::request_shuffle) permutes
/// the tiles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ShuffleMode {
    /// Uniform over all permutations; half of them cannot be solved.
    #[default]
    Unconstrained,
    /// Uniform shuffle followed by a parity repair so the result is solvable.
    Solvable,
}

/// Validated parameters of a puzzle session.
///
/// # Examples
///
/// ```
/// use puzzlen_game::{PuzzleConfig, ShuffleMode};
///
/// let config = PuzzleConfig::new(5, 3)
///     .with_cell_size(40)
///     .with_shuffle_mode(ShuffleMode::Solvable);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.glue_distance(), 8);
///
/// let err = PuzzleConfig::new(11, 3).validate().unwrap_err();
/// assert_eq!(err.to_string(), "Width of puzzle must have diapason [3; 10].");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Cell size, px.
    pub cell_size: u32,
    /// Glue distance as a percentage of the cell size.
    pub glue_percent: u32,
    /// Shuffle behaviour.
    pub shuffle_mode: ShuffleMode,
    /// Handling of internal invariant violations.
    pub invariant_policy: InvariantPolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION, DEFAULT_DIMENSION)
    }
}

impl PuzzleConfig {
    /// Creates a configuration with the given dimensions and default
    /// everything else.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cell_size: DEFAULT_CELL_SIZE,
            glue_percent: DEFAULT_GLUE_PERCENT,
            shuffle_mode: ShuffleMode::default(),
            invariant_policy: InvariantPolicy::default(),
        }
    }

    /// Sets the cell size.
    #[must_use]
    pub const fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the glue distance percentage.
    #[must_use]
    pub const fn with_glue_percent(mut self, glue_percent: u32) -> Self {
        self.glue_percent = glue_percent;
        self
    }

    /// Sets the shuffle mode.
    #[must_use]
    pub const fn with_shuffle_mode(mut self, shuffle_mode: ShuffleMode) -> Self {
        self.shuffle_mode = shuffle_mode;
        self
    }

    /// Sets the invariant policy.
    #[must_use]
    pub const fn with_invariant_policy(mut self, invariant_policy: InvariantPolicy) -> Self {
        self.invariant_policy = invariant_policy;
        self
    }

    /// Checks every parameter against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] for the first parameter out of range,
    /// checked in the order width, height, cell size, glue percentage.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !DIMENSION_RANGE.contains(&self.width) {
            return Err(ConfigurationError::Width {
                value: self.width,
                min: *DIMENSION_RANGE.start(),
                max: *DIMENSION_RANGE.end(),
            });
        }
        if !DIMENSION_RANGE.contains(&self.height) {
            return Err(ConfigurationError::Height {
                value: self.height,
                min: *DIMENSION_RANGE.start(),
                max: *DIMENSION_RANGE.end(),
            });
        }
        if !CELL_SIZE_RANGE.contains(&self.cell_size) {
            return Err(ConfigurationError::CellSize {
                value: self.cell_size,
                min: *CELL_SIZE_RANGE.start(),
                max: *CELL_SIZE_RANGE.end(),
            });
        }
        if self.glue_percent > MAX_GLUE_PERCENT {
            return Err(ConfigurationError::GluePercent {
                value: self.glue_percent,
                max: MAX_GLUE_PERCENT,
            });
        }
        Ok(())
    }

    /// Returns the glue distance in pixels.
    #[must_use]
    pub const fn glue_distance(&self) -> u32 {
        self.cell_size * self.glue_percent / 100
    }

    /// Returns the board size in pixels.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn pixel_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_size,
            self.height as u32 * self.cell_size,
        )
    }

    /// Returns the pixel thresholds for dragging.
    ///
    /// Only meaningful for a configuration that passed [`validate`](Self::validate).
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub const fn metrics(&self) -> DragMetrics {
        DragMetrics::new(self.cell_size as i32, self.glue_distance() as i32)
    }
}

/// Pixel thresholds used by the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMetrics {
    /// Cell size, px.
    pub cell_size: i32,
    /// Distance from either end of a slide within which a release snaps, px.
    pub glue_distance: i32,
}

impl DragMetrics {
    /// Creates metrics from pixel sizes.
    #[must_use]
    pub const fn new(cell_size: i32, glue_distance: i32) -> Self {
        Self {
            cell_size,
            glue_distance,
        }
    }

    pub(crate) fn clamp(self, shift: PixelShift) -> PixelShift {
        PixelShift::new(
            shift.x.clamp(-self.cell_size, self.cell_size),
            shift.y.clamp(-self.cell_size, self.cell_size),
        )
    }
}
