use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::plain(Key::Space, Action::Shuffle),
    Shortcut::plain(Key::Escape, Action::Quit),
];

pub fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.is_none() {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
