//! Keyboard input handling for the interactive session.
//!
//! Rate keys come from the configured [`KeyBindings`]; chapter navigation is
//! Alt+Left / Alt+Right.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::KeyBindings;
use crate::playback::SimulatedPlayback;
use crate::player::state::{Command, InputResult, Session};
use crate::store::KeyValueStore;

/// Handle a keyboard event.
pub fn handle_key_event<S: KeyValueStore>(
    key: KeyEvent,
    session: &mut Session<S, SimulatedPlayback>,
    bindings: &KeyBindings,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Pause ===
        KeyCode::Char(' ') => {
            session.playback_mut().toggle_pause();
            session.needs_render = true;
            InputResult::Continue
        }

        _ => {
            if let Some(command) = command_for_key(&key, bindings) {
                session.execute(command);
            }
            InputResult::Continue
        }
    }
}

/// Map a key to a playback command, if it is bound to one.
///
/// Character bindings match case-insensitively and ignore Shift; arrows only
/// navigate chapters with Alt held.
pub fn command_for_key(key: &KeyEvent, bindings: &KeyBindings) -> Option<Command> {
    match key.code {
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Command::PreviousChapter)
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => Some(Command::NextChapter),
        KeyCode::Char(c) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return None;
            }
            let c = c.to_ascii_lowercase();
            if c == bindings.speed_up.to_ascii_lowercase() {
                Some(Command::SpeedUp)
            } else if c == bindings.slow_down.to_ascii_lowercase() {
                Some(Command::SlowDown)
            } else if c == bindings.reset.to_ascii_lowercase() {
                Some(Command::ResetToggle)
            } else {
                None
            }
        }
        _ => None,
    }
}
