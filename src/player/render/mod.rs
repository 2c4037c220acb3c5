//! Rendering for the interactive session.
//!
//! The session draws three lines at the top of the alternate screen: key
//! hints, the rate indicator with play state and chapter, and a progress bar
//! with chapter ticks.

mod help;
mod progress;
mod status;

pub use help::{help_text, render_help_line};
pub use progress::{build_progress_bar_chars, render_progress_bar};
pub use status::{
    build_gauge, format_indicator, format_status_line, render_status_line, GAUGE_WIDTH,
    INDICATOR_WIDTH,
};

/// Row of the key hint line.
pub const HELP_ROW: u16 = 0;
/// Row of the rate indicator and status.
pub const STATUS_ROW: u16 = 1;
/// Row of the progress bar.
pub const PROGRESS_ROW: u16 = 2;
