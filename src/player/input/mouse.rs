//! Mouse input handling for the interactive session.
//!
//! Scrolling over the session steps the rate once enough wheel movement has
//! accumulated; a left click on the rate indicator toggles the reset.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::playback::PlaybackSink;
use crate::player::render::{INDICATOR_WIDTH, STATUS_ROW};
use crate::player::state::{Command, InputResult, Session};
use crate::store::KeyValueStore;

/// Direction of a wheel movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Collects wheel deltas until they add up to a threshold.
///
/// Deltas are summed by absolute value regardless of direction; the
/// direction of the event that crosses the threshold decides the step.
#[derive(Debug, Clone)]
pub struct WheelAccumulator {
    threshold: f64,
    accumulated: f64,
}

impl WheelAccumulator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            accumulated: 0.0,
        }
    }

    /// Add one wheel movement. Returns the rate command to run once the
    /// accumulated delta exceeds the threshold, resetting the accumulator.
    pub fn push(&mut self, direction: WheelDirection, delta: f64) -> Option<Command> {
        self.accumulated += delta.abs();
        if self.accumulated > self.threshold {
            self.accumulated = 0.0;
            Some(match direction {
                WheelDirection::Up => Command::SpeedUp,
                WheelDirection::Down => Command::SlowDown,
            })
        } else {
            None
        }
    }

    /// Delta accumulated since the last step.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

/// Handle a mouse event.
///
/// `notch_delta` is the wheel delta one scroll event contributes.
pub fn handle_mouse_event<S: KeyValueStore, P: PlaybackSink>(
    mouse: MouseEvent,
    session: &mut Session<S, P>,
    wheel: &mut WheelAccumulator,
    notch_delta: f64,
) -> InputResult {
    let command = match mouse.kind {
        MouseEventKind::ScrollUp => wheel.push(WheelDirection::Up, notch_delta),
        MouseEventKind::ScrollDown => wheel.push(WheelDirection::Down, notch_delta),
        MouseEventKind::Down(MouseButton::Left)
            if mouse.row == STATUS_ROW && mouse.column < INDICATOR_WIDTH =>
        {
            Some(Command::ResetToggle)
        }
        _ => None,
    };

    if let Some(command) = command {
        session.execute(command);
    }
    InputResult::Continue
}
