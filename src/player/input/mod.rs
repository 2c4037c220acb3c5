//! Input handling for the interactive session.
//!
//! Dispatches crossterm events to the keyboard and mouse handlers and
//! returns control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::{command_for_key, handle_key_event};
pub use mouse::{handle_mouse_event, WheelAccumulator, WheelDirection};

use crossterm::event::Event;

use crate::config::{InputConfig, KeyBindings};
use crate::playback::SimulatedPlayback;
use crate::player::state::{InputResult, Session};
use crate::store::KeyValueStore;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event<S: KeyValueStore>(
    event: Event,
    session: &mut Session<S, SimulatedPlayback>,
    bindings: &KeyBindings,
    input: &InputConfig,
    wheel: &mut WheelAccumulator,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, session, bindings),
        Event::Mouse(mouse) => handle_mouse_event(mouse, session, wheel, input.wheel_notch_delta),
        Event::Resize(_, _) => {
            session.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
