//! Session state and dispatch.
//!
//! Contains [`Session`], which composes a [`RateController`] and a chapter
//! list, plus the command/result types shared by the input handlers.

use tracing::debug;

use crate::chapters::{ChapterNavigator, Chapters};
use crate::playback::PlaybackSink;
use crate::rate::{RateController, RateDisplay};
use crate::store::KeyValueStore;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the main
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the session
    Quit,
}

/// A user-level playback command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SpeedUp,
    SlowDown,
    ResetToggle,
    PreviousChapter,
    NextChapter,
}

/// What executing a [`Command`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A rate command ran; carries the indicator contents for the resulting
    /// rate (unchanged if the step was out of bounds).
    RateChanged(RateDisplay),
    /// The playback object was seeked to this time.
    Seeked(f64),
    /// The command did not apply (chapter navigation without chapters).
    Ignored,
}

/// Everything one interactive session needs: the rate controller (which owns
/// the playback object), the chapter list and the navigator tolerances.
#[derive(Debug)]
pub struct Session<S, P> {
    rate: RateController<S, P>,
    chapters: Chapters,
    navigator: ChapterNavigator,
    /// Indicator contents after the last rate command.
    pub display: RateDisplay,
    /// True when the status line needs to be redrawn
    pub needs_render: bool,
}

impl<S: KeyValueStore, P: PlaybackSink> Session<S, P> {
    pub fn new(rate: RateController<S, P>, chapters: Chapters, navigator: ChapterNavigator) -> Self {
        let display = rate.display();
        Self {
            rate,
            chapters,
            navigator,
            display,
            needs_render: true,
        }
    }

    /// Run a command against the controller or the chapter list.
    ///
    /// Chapter commands are suppressed when there are no chapters.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::SpeedUp => {
                self.rate.speed_up();
                self.rate_outcome()
            }
            Command::SlowDown => {
                self.rate.slow_down();
                self.rate_outcome()
            }
            Command::ResetToggle => {
                self.rate.reset_toggle();
                self.rate_outcome()
            }
            Command::PreviousChapter | Command::NextChapter => {
                if self.chapters.is_empty() {
                    return Outcome::Ignored;
                }
                let now = self.rate.sink().current_time();
                let boundaries = self.chapters.boundaries();
                let target = if command == Command::PreviousChapter {
                    self.navigator.previous_boundary(boundaries, now)
                } else {
                    self.navigator.next_boundary(boundaries, now)
                };
                self.rate.sink_mut().set_current_time(target);
                debug!(from = now, to = target, ?command, "chapter seek");
                Outcome::Seeked(target)
            }
        };
        self.needs_render = true;
        outcome
    }

    fn rate_outcome(&mut self) -> Outcome {
        self.display = self.rate.display();
        Outcome::RateChanged(self.display.clone())
    }

    pub fn rate(&self) -> &RateController<S, P> {
        &self.rate
    }

    pub fn chapters(&self) -> &Chapters {
        &self.chapters
    }

    pub fn playback(&self) -> &P {
        self.rate.sink()
    }

    pub fn playback_mut(&mut self) -> &mut P {
        self.rate.sink_mut()
    }

    /// Label of the chapter at the current position, if any.
    pub fn current_chapter_label(&self) -> Option<&str> {
        self.chapters
            .chapter_at(self.rate.sink().current_time())
            .map(|c| c.label.as_str())
    }
}
