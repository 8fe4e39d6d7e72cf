use std::mem;

use puzzlen_game::geometry::PixelPoint;

/// Input routed from the window to the puzzle session.
///
/// Pointer positions are relative to the top-left of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    ButtonState(bool),
    PointerDown(PixelPoint),
    PointerMove(PixelPoint),
    PointerUp,
    Shuffle,
    Quit,
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
