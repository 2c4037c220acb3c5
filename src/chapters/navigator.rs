//! Previous/next chapter seek targets.
//!
//! Boundaries are chapter-start times in seconds, strictly increasing. The
//! chapter containing time `t` is the one starting at the last boundary
//! `<= t`.

use serde::{Deserialize, Serialize};

/// Below this position "previous" always seeks to the very start.
pub const RESTART_WINDOW_SECS: f64 = 5.0;

/// Within this many seconds after a chapter start, "previous" skips back to
/// the chapter before instead of restarting the current one.
pub const SNAP_BACK_SECS: f64 = 5.0;

/// Chapter seek calculator. Stateless apart from its two tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChapterNavigator {
    #[serde(rename = "restart_window_secs")]
    pub restart_window: f64,
    #[serde(rename = "snap_back_secs")]
    pub snap_back: f64,
}

impl Default for ChapterNavigator {
    fn default() -> Self {
        Self {
            restart_window: RESTART_WINDOW_SECS,
            snap_back: SNAP_BACK_SECS,
        }
    }
}

impl ChapterNavigator {
    /// Seek target for a "previous chapter" command at `current_time`.
    ///
    /// - Near the start of the media, seek to 0.
    /// - In the first chapter, seek to its start (never to 0).
    /// - Just after a chapter start, seek to the previous chapter's start.
    /// - Otherwise restart the current chapter.
    ///
    /// Past the last boundary the last chapter is the current one. Before the
    /// first boundary, or with no boundaries at all, the target is 0.
    pub fn previous_boundary(&self, boundaries: &[f64], current_time: f64) -> f64 {
        if current_time < self.restart_window {
            return 0.0;
        }

        let Some(idx) = containing_index(boundaries, current_time) else {
            return 0.0;
        };

        if idx == 0 {
            return boundaries[0];
        }

        if current_time - boundaries[idx] < self.snap_back {
            boundaries[idx - 1]
        } else {
            boundaries[idx]
        }
    }

    /// Seek target for a "next chapter" command: the first boundary strictly
    /// after `current_time`.
    ///
    /// In the last chapter there is nowhere to go, so `current_time` is
    /// returned unchanged.
    pub fn next_boundary(&self, boundaries: &[f64], current_time: f64) -> f64 {
        let after = boundaries.partition_point(|&b| b <= current_time);
        boundaries.get(after).copied().unwrap_or(current_time)
    }
}

/// [`ChapterNavigator::previous_boundary`] with the default tolerances.
pub fn previous_boundary(boundaries: &[f64], current_time: f64) -> f64 {
    ChapterNavigator::default().previous_boundary(boundaries, current_time)
}

/// [`ChapterNavigator::next_boundary`] with the default tolerances.
pub fn next_boundary(boundaries: &[f64], current_time: f64) -> f64 {
    ChapterNavigator::default().next_boundary(boundaries, current_time)
}

/// Index of the last boundary `<= time`, if any.
fn containing_index(boundaries: &[f64], time: f64) -> Option<usize> {
    boundaries
        .partition_point(|&b| b <= time)
        .checked_sub(1)
}
