//! The puzzle session driven by a presentation adapter.

use puzzlen_core::{ConfigurationError, Grid, ShuffleSeed};

use crate::{
    DragController, PressOutcome, PuzzleConfig, ReleaseOutcome, ShuffleMode, Snapshot,
    drag::DragPhase, geometry::PixelPoint,
};

/// A sliding puzzle session.
///
/// Owns the grid and the drag state, and applies a serialized stream of
/// pointer events and shuffle requests to them. Internal invariant
/// violations are routed through the configured
/// [`InvariantPolicy`](crate::InvariantPolicy); when tolerated, the event
/// that hit one has no effect.
///
/// # Example
///
/// ```
/// use puzzlen_game::{Puzzle, PuzzleConfig, ReleaseOutcome, geometry::PixelPoint};
///
/// let mut puzzle = Puzzle::new(PuzzleConfig::new(4, 4)).unwrap();
/// assert!(puzzle.is_solved());
///
/// // Slide tile 12 down into the empty corner.
/// puzzle.on_button_state_change(true);
/// assert!(puzzle.on_pointer_down(PixelPoint::new(175, 125)).is_engaged());
/// puzzle.on_pointer_move(PixelPoint::new(175, 170));
/// puzzle.on_button_state_change(false);
/// assert_eq!(
///     puzzle.on_pointer_up(),
///     ReleaseOutcome::Committed { from: 11, to: 15 }
/// );
/// assert_eq!(puzzle.move_count(), 1);
/// assert!(!puzzle.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    config: PuzzleConfig,
    grid: Grid,
    drag: DragController,
    last_seed: Option<ShuffleSeed>,
    move_count: usize,
}

impl Puzzle {
    /// Creates a session with the tiles in solved order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if `config` does not validate.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let grid = Grid::new_solved(config.width, config.height)?;
        Ok(Self {
            config,
            grid,
            drag: DragController::new(),
            last_seed: None,
            move_count: 0,
        })
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the drag state.
    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Returns `true` if the tiles are in solved order and nothing is
    /// mid-slide.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.drag.phase().is_idle() && self.grid.is_solved()
    }

    /// Returns the seed of the most recent shuffle.
    #[must_use]
    pub fn last_seed(&self) -> Option<ShuffleSeed> {
        self.last_seed
    }

    /// Returns the number of committed slides since the last shuffle.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Records the pointer button state.
    pub fn on_button_state_change(&mut self, pressed: bool) {
        self.drag.set_button_pressed(pressed);
    }

    /// Handles a pointer press at `point`, relative to the board's top-left.
    pub fn on_pointer_down(&mut self, point: PixelPoint) -> PressOutcome {
        let result = self.drag.press(&self.grid, point, self.config.metrics());
        let outcome = self
            .config
            .invariant_policy
            .check(result)
            .unwrap_or(PressOutcome::Ignored);
        if !outcome.is_ignored() {
            log::debug!("pointer down at {point:?}: {outcome:?}, {:?}", self.drag);
        }
        outcome
    }

    /// Handles pointer motion to `point`.
    ///
    /// Returns `true` if the drag shift was updated.
    pub fn on_pointer_move(&mut self, point: PixelPoint) -> bool {
        let result = self.drag.drag(&self.grid, point, self.config.metrics());
        let moved = self.config.invariant_policy.check(result).unwrap_or(false);
        if moved {
            log::debug!("pointer move to {point:?}: {:?}", self.drag);
        }
        moved
    }

    /// Handles a pointer release.
    pub fn on_pointer_up(&mut self) -> ReleaseOutcome {
        let result = self.drag.release(&mut self.grid, self.config.metrics());
        let outcome = self
            .config
            .invariant_policy
            .check(result)
            .unwrap_or(ReleaseOutcome::Idle);
        if outcome.is_committed() {
            self.move_count += 1;
        }
        if !outcome.is_idle() {
            log::debug!("pointer up: {outcome:?}, {:?}", self.drag);
        }
        outcome
    }

    /// Shuffles the tiles with a fresh random seed and abandons any drag.
    ///
    /// Returns the seed used, so the layout can be reproduced with
    /// [`shuffle_with_seed`](Self::shuffle_with_seed).
    pub fn request_shuffle(&mut self) -> ShuffleSeed {
        let seed = ShuffleSeed::random();
        self.shuffle_with_seed(seed);
        seed
    }

    /// Shuffles the tiles deterministically and abandons any drag.
    pub fn shuffle_with_seed(&mut self, seed: ShuffleSeed) {
        if let DragPhase::Engaged { index } = self.drag.phase() {
            log::debug!("shuffle abandons drag of tile at {index}");
        }
        self.drag.reset();
        match self.config.shuffle_mode {
            ShuffleMode::Unconstrained => self.grid.shuffle(seed),
            ShuffleMode::Solvable => self.grid.shuffle_solvable(seed),
        }
        self.last_seed = Some(seed);
        self.move_count = 0;
        log::info!(
            "shuffled {}x{} puzzle with seed {seed} ({:?})",
            self.grid.width(),
            self.grid.height(),
            self.config.shuffle_mode,
        );
    }

    /// Returns an owned view of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tiles: self.grid.tiles().to_vec(),
            width: self.grid.width(),
            height: self.grid.height(),
            cell_size: self.config.metrics().cell_size,
            active_index: self.drag.active_index(),
            current_shift: self.drag.shift(),
        }
    }
}
