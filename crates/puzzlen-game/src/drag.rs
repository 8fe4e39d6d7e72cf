//! Pointer-driven drag state machine.
//!
//! A drag runs through press → any number of moves → release. While engaged,
//! the active tile carries a pixel shift along the single axis its
//! [`PermitShift`] allows, clamped to one cell. On release the shift either
//! snaps to the far end (the tile swaps with the empty slot), snaps back to
//! zero, or stays where it is when it lies outside both glue bands. A stuck
//! tile can be grabbed again, from its own cell or from the empty slot side.

use puzzlen_core::{Direction, Grid, InvariantViolation, PermitShift};

use crate::{
    config::DragMetrics,
    geometry::{PixelPoint, PixelShift, cell_at_pixel, cell_delta},
};

/// Observable phase of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DragPhase {
    /// No tile is engaged.
    Idle,
    /// A tile is engaged, either being dragged or stuck mid-slide.
    Engaged {
        /// Index of the engaged tile.
        index: usize,
    },
}

/// Result of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PressOutcome {
    /// The press changed nothing.
    Ignored,
    /// The tile at `index` is now engaged.
    Engaged {
        /// Index of the engaged tile.
        index: usize,
    },
    /// The engaged tile was grabbed from the empty slot's side.
    GrabbedFromEmpty {
        /// Index of the engaged tile.
        index: usize,
    },
}

/// Result of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ReleaseOutcome {
    /// No tile was engaged.
    Idle,
    /// The tile slid into the empty slot.
    Committed {
        /// Index the tile left, now the empty slot.
        from: usize,
        /// Index the tile arrived at.
        to: usize,
    },
    /// The tile snapped back to its cell.
    Cancelled,
    /// The tile stays shifted between cells and remains engaged.
    Stuck,
}

/// Drag state: the engaged tile, its shift and the pointer origin.
///
/// Invariants: the shift is non-zero on at most one axis, each component
/// is within one cell size, and a non-zero shift implies an engaged tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragController {
    active_index: Option<usize>,
    origin: Option<PixelPoint>,
    shift: PixelShift,
    empty_grab_offset: PixelShift,
    button_pressed: bool,
}

impl DragController {
    /// Creates a controller in the neutral state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.active_index {
            Some(index) => DragPhase::Engaged { index },
            None => DragPhase::Idle,
        }
    }

    /// Returns the index of the engaged tile.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Returns the visual displacement of the engaged tile.
    #[must_use]
    pub fn shift(&self) -> PixelShift {
        self.shift
    }

    /// Returns the pixel that pointer motion is measured against, if a press
    /// is in progress.
    #[must_use]
    pub fn origin(&self) -> Option<PixelPoint> {
        self.origin
    }

    /// Returns the correction applied when the drag was started from the
    /// empty slot.
    #[must_use]
    pub fn empty_grab_offset(&self) -> PixelShift {
        self.empty_grab_offset
    }

    /// Returns whether the pointer button is held.
    #[must_use]
    pub fn is_button_pressed(&self) -> bool {
        self.button_pressed
    }

    /// Records the pointer button state.
    pub fn set_button_pressed(&mut self, pressed: bool) {
        self.button_pressed = pressed;
    }

    /// Returns to the neutral state, abandoning any drag.
    ///
    /// The button state is raw input and is kept.
    pub fn reset(&mut self) {
        *self = Self {
            button_pressed: self.button_pressed,
            ..Self::default()
        };
    }

    /// Handles a pointer press at `point`.
    ///
    /// The press is ignored if it lands off-grid, on a tile that cannot move,
    /// or on a tile other than the engaged one or the empty slot while a tile
    /// is engaged. Pressing the empty slot grabs the engaged tile from the far
    /// side; with nothing engaged it does nothing.
    ///
    /// # Errors
    ///
    /// Propagates grid invariant violations.
    pub fn press(
        &mut self,
        grid: &Grid,
        point: PixelPoint,
        metrics: DragMetrics,
    ) -> Result<PressOutcome, InvariantViolation> {
        let cell = cell_at_pixel(point, metrics.cell_size);
        let Some(index) = grid.index_of(cell) else {
            return Ok(PressOutcome::Ignored);
        };
        let empty = grid.empty_index()?;

        if let Some(active) = self.active_index
            && index != active
            && index != empty
        {
            return Ok(PressOutcome::Ignored);
        }
        if !grid.has_permit_shift(index)? {
            return Ok(PressOutcome::Ignored);
        }

        // Resuming a stuck tile continues from its residual shift.
        let origin = point - self.shift;

        if index == empty {
            let Some(active) = self.active_index else {
                return Ok(PressOutcome::Ignored);
            };
            let offset = cell_delta(grid.coord_of(active), cell, metrics.cell_size);
            self.empty_grab_offset = offset;
            self.origin = Some(origin + offset);
            return Ok(PressOutcome::GrabbedFromEmpty { index: active });
        }

        self.empty_grab_offset = PixelShift::ZERO;
        self.origin = Some(origin);
        self.active_index = Some(index);
        Ok(PressOutcome::Engaged { index })
    }

    /// Handles pointer motion to `point`.
    ///
    /// Returns `false` without changing anything if no tile is engaged, no
    /// press is in progress, or the button is up. Otherwise the raw delta is
    /// locked to the permitted direction matching its sign on each axis and
    /// clamped to one cell.
    ///
    /// # Errors
    ///
    /// Propagates grid invariant violations.
    pub fn drag(
        &mut self,
        grid: &Grid,
        point: PixelPoint,
        metrics: DragMetrics,
    ) -> Result<bool, InvariantViolation> {
        let (Some(active), Some(origin)) = (self.active_index, self.origin) else {
            return Ok(false);
        };
        if !self.button_pressed {
            return Ok(false);
        }

        let permit = grid.permit_shift(active)?;
        let raw = (point - origin) + self.empty_grab_offset;
        let locked = PixelShift::new(
            lock_axis(raw.x, permit, Direction::West, Direction::East),
            lock_axis(raw.y, permit, Direction::North, Direction::South),
        );
        self.shift = metrics.clamp(locked);
        Ok(true)
    }

    /// Handles a pointer release.
    ///
    /// The press origin is always cleared, so motion before the next press is
    /// inert. The engaged tile commits if its shift is within the glue
    /// distance of a full cell, cancels if within the glue distance of zero,
    /// and otherwise stays stuck and engaged.
    ///
    /// # Errors
    ///
    /// Propagates grid invariant violations; the grid is left untouched.
    pub fn release(
        &mut self,
        grid: &mut Grid,
        metrics: DragMetrics,
    ) -> Result<ReleaseOutcome, InvariantViolation> {
        self.origin = None;
        let Some(active) = self.active_index else {
            return Ok(ReleaseOutcome::Idle);
        };

        let permit = grid.permit_shift(active)?;
        let distance = if permit.is_horizontal() {
            self.shift.x.abs()
        } else {
            self.shift.y.abs()
        };
        let DragMetrics {
            cell_size,
            glue_distance,
        } = metrics;

        let outcome = if cell_size - distance <= glue_distance {
            let empty = grid.empty_index()?;
            grid.swap(active, empty);
            ReleaseOutcome::Committed {
                from: active,
                to: empty,
            }
        } else if distance <= glue_distance {
            ReleaseOutcome::Cancelled
        } else {
            return Ok(ReleaseOutcome::Stuck);
        };

        self.active_index = None;
        self.shift = PixelShift::ZERO;
        self.empty_grab_offset = PixelShift::ZERO;
        Ok(outcome)
    }
}

fn lock_axis(raw: i32, permit: PermitShift, negative: Direction, positive: Direction) -> i32 {
    if (permit.allows(negative) && raw < 0) || (permit.allows(positive) && raw > 0) {
        raw
    } else {
        0
    }
}
