//! Playback object abstraction.
//!
//! The rate controller and the session only ever touch a media element
//! through [`PlaybackSink`]: its rate and its current time. The binary drives
//! a [`SimulatedPlayback`] clock; embedders implement the trait for their own
//! player.

use std::time::Duration;

/// Read/write access to a playback object's rate and position.
pub trait PlaybackSink {
    /// Current playback rate multiplier.
    fn rate(&self) -> f64;
    /// Apply a new playback rate.
    fn set_rate(&mut self, rate: f64);
    /// Current position in seconds.
    fn current_time(&self) -> f64;
    /// Seek to a position in seconds.
    fn set_current_time(&mut self, time: f64);
}

impl<P: PlaybackSink + ?Sized> PlaybackSink for &mut P {
    fn rate(&self) -> f64 {
        (**self).rate()
    }

    fn set_rate(&mut self, rate: f64) {
        (**self).set_rate(rate)
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, time: f64) {
        (**self).set_current_time(time)
    }
}

/// A media clock of known duration.
///
/// Time only moves when [`advance`](Self::advance) is called, scaled by the
/// current rate. Position is always kept inside `[0, duration]`.
#[derive(Debug, Clone)]
pub struct SimulatedPlayback {
    rate: f64,
    current_time: f64,
    duration: f64,
    paused: bool,
}

impl SimulatedPlayback {
    /// Create a clock at position 0, rate 1.0, playing.
    pub fn new(duration: f64) -> Self {
        Self {
            rate: 1.0,
            current_time: 0.0,
            duration: duration.max(0.0),
            paused: false,
        }
    }

    /// Total media duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the clock has reached the end of the media.
    pub fn is_finished(&self) -> bool {
        self.current_time >= self.duration
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Move the clock forward by `elapsed` wall time scaled by the rate.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }
        let next = self.current_time + elapsed.as_secs_f64() * self.rate;
        self.current_time = self.clamp(next);
    }

    fn clamp(&self, time: f64) -> f64 {
        if time.is_nan() {
            return 0.0;
        }
        time.clamp(0.0, self.duration)
    }
}

impl PlaybackSink for SimulatedPlayback {
    fn rate(&self) -> f64 {
        self.rate
    }

    fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, time: f64) {
        self.current_time = self.clamp(time);
    }
}
