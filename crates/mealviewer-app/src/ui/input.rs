use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, FlowAction, SessionAction, UiAction};

struct Shortcut {
    key: Key,
    command: bool,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            key,
            command: true,
            action,
        }
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self {
            key,
            command: false,
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 4] = [
    Shortcut::command(Key::R, Action::Flow(FlowAction::RequestRandomMeal)),
    Shortcut::command(Key::F, Action::Session(SessionAction::OpenSearch)),
    Shortcut::command(Key::Comma, Action::Ui(UiAction::OpenSettings)),
    Shortcut::plain(Key::Escape, Action::Session(SessionAction::Back)),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.command == shortcut.command {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
