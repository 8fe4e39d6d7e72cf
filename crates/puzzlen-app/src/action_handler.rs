use puzzlen_game::Puzzle;

use crate::action::{Action, ActionRequestQueue};

/// Window-side state mutated by actions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UiState {
    pub quit_requested: bool,
}

/// Applies every queued action in order.
///
/// Returns `true` if any action was applied, in which case the board needs
/// to be redrawn.
pub fn handle_all(
    puzzle: &mut Puzzle,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) -> bool {
    let actions = action_queue.take_all();
    let handled = !actions.is_empty();
    for action in actions {
        handle(puzzle, ui_state, action);
    }
    handled
}

pub fn handle(puzzle: &mut Puzzle, ui_state: &mut UiState, action: Action) {
    match action {
        Action::ButtonState(pressed) => puzzle.on_button_state_change(pressed),
        Action::PointerDown(point) => {
            puzzle.on_pointer_down(point);
        }
        Action::PointerMove(point) => {
            puzzle.on_pointer_move(point);
        }
        Action::PointerUp => {
            let outcome = puzzle.on_pointer_up();
            if outcome.is_committed() && puzzle.is_solved() {
                log::info!("solved in {} moves", puzzle.move_count());
            }
        }
        Action::Shuffle => {
            puzzle.request_shuffle();
        }
        Action::Quit => ui_state.quit_requested = true,
    }
}

#[cfg(test)]
mod tests {
    use puzzlen_core::Tile;
    use puzzlen_game::{PuzzleConfig, geometry::PixelPoint};

    use super::*;

    fn puzzle() -> Puzzle {
        Puzzle::new(PuzzleConfig::new(4, 4)).unwrap()
    }

    fn queue(actions: &[Action]) -> ActionRequestQueue {
        let mut queue = ActionRequestQueue::default();
        for &action in actions {
            queue.request(action);
        }
        queue
    }

    #[test]
    fn test_pointer_sequence_slides_tile() {
        let mut puzzle = puzzle();
        let mut ui_state = UiState::default();
        let mut actions = queue(&[
            Action::ButtonState(true),
            Action::PointerDown(PixelPoint::new(175, 125)),
            Action::PointerMove(PixelPoint::new(175, 170)),
            Action::ButtonState(false),
            Action::PointerUp,
        ]);

        assert!(handle_all(&mut puzzle, &mut ui_state, &mut actions));
        assert!(actions.is_empty());
        assert_eq!(puzzle.grid().tiles()[15], Tile::new(12));
        assert_eq!(puzzle.move_count(), 1);
        assert!(!ui_state.quit_requested);
    }

    #[test]
    fn test_move_without_button_is_inert() {
        let mut puzzle = puzzle();
        let mut ui_state = UiState::default();
        let mut actions = queue(&[
            Action::PointerDown(PixelPoint::new(175, 125)),
            Action::PointerMove(PixelPoint::new(175, 170)),
            Action::PointerUp,
        ]);

        handle_all(&mut puzzle, &mut ui_state, &mut actions);
        assert!(puzzle.grid().is_solved());
        assert!(puzzle.drag().phase().is_idle());
    }

    #[test]
    fn test_shuffle_and_quit() {
        let mut puzzle = puzzle();
        let mut ui_state = UiState::default();
        let mut actions = queue(&[Action::Shuffle, Action::Quit]);

        handle_all(&mut puzzle, &mut ui_state, &mut actions);
        assert!(puzzle.last_seed().is_some());
        assert!(ui_state.quit_requested);
    }

    #[test]
    fn test_empty_queue_is_not_handled() {
        let mut puzzle = puzzle();
        let mut ui_state = UiState::default();
        let mut actions = ActionRequestQueue::default();
        assert!(!handle_all(&mut puzzle, &mut ui_state, &mut actions));
    }
}
