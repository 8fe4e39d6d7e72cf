//! PuzzleN desktop application UI.
//!
//! # Design Notes
//! - A fixed-size window exactly covering the board.
//! - Pointer drags slide tiles; `Space` shuffles and `Escape` quits.
//! - The window title reports the board size and the solved state.

use eframe::{
    App, Frame,
    egui::{self, CentralPanel, Context, ViewportCommand},
};
use puzzlen_core::{ConfigurationError, ShuffleSeed};
use puzzlen_game::{Puzzle, PuzzleConfig};

use crate::{
    action::ActionRequestQueue,
    action_handler::{self, UiState},
    ui,
};

/// Errors that prevent the application from starting.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StartupError {
    #[display("{_0}")]
    Configuration(ConfigurationError),
    #[display("failed to open window: {_0}")]
    Window(eframe::Error),
}

#[derive(Debug)]
pub struct PuzzleApp {
    puzzle: Puzzle,
    ui_state: UiState,
    title: String,
}

impl PuzzleApp {
    /// Builds the session, shuffling once if a seed is given.
    pub fn new(
        config: PuzzleConfig,
        seed: Option<ShuffleSeed>,
    ) -> Result<Self, ConfigurationError> {
        let mut puzzle = Puzzle::new(config)?;
        if let Some(seed) = seed {
            puzzle.shuffle_with_seed(seed);
        }
        let title = window_title(&puzzle);
        Ok(Self {
            puzzle,
            ui_state: UiState::default(),
            title,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn update_title(&mut self, ctx: &Context) {
        let title = window_title(&self.puzzle);
        if title != self.title {
            ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

/// Returns the window title for the current session state.
#[must_use]
pub fn window_title(puzzle: &Puzzle) -> String {
    let grid = puzzle.grid();
    let (width, height) = (grid.width(), grid.height());
    if puzzle.is_solved() {
        format!("Puzzle  {width} x {height} - solved")
    } else if puzzle.move_count() > 0 {
        format!("Puzzle  {width} x {height} - moves: {}", puzzle.move_count())
    } else {
        format!("Puzzle  {width} x {height}")
    }
}

impl App for PuzzleApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));

        let snapshot = self.puzzle.snapshot();
        let solved = self.puzzle.is_solved();
        CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui::board::show(ui, &snapshot, solved, &mut action_queue);
            });

        if action_handler::handle_all(&mut self.puzzle, &mut self.ui_state, &mut action_queue) {
            ctx.request_repaint();
        }
        self.update_title(ctx);

        if self.ui_state.quit_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

#[cfg(test)]
mod tests {
    use puzzlen_game::geometry::PixelPoint;

    use super::*;

    #[test]
    fn test_window_title() {
        let mut puzzle = Puzzle::new(PuzzleConfig::new(5, 3)).unwrap();
        assert_eq!(window_title(&puzzle), "Puzzle  5 x 3 - solved");

        puzzle.on_button_state_change(true);
        puzzle.on_pointer_down(PixelPoint::new(225, 75));
        puzzle.on_pointer_move(PixelPoint::new(225, 125));
        puzzle.on_button_state_change(false);
        assert!(puzzle.on_pointer_up().is_committed());
        assert_eq!(window_title(&puzzle), "Puzzle  5 x 3 - moves: 1");
    }

    #[test]
    fn test_new_with_seed_shuffles() {
        let seed = ShuffleSeed::new(42);
        let app = PuzzleApp::new(PuzzleConfig::new(4, 4), Some(seed)).unwrap();
        assert_eq!(app.puzzle.last_seed(), Some(seed));
        assert!(app.title().starts_with("Puzzle  4 x 4"));

        let err = PuzzleApp::new(PuzzleConfig::new(1, 4), None).unwrap_err();
        assert!(matches!(err, ConfigurationError::Width { value: 1, .. }));
    }
}
