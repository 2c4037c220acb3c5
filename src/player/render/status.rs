//! Rate indicator and status line.

use std::io::{self, Write};

use anyhow::Result;

use crate::rate::{RateDisplay, NEEDLE_SWEEP_DEGREES};

/// Cells in the rate gauge.
pub const GAUGE_WIDTH: usize = 8;

/// Columns taken by the indicator (`1.25x [━━━─────]`) at the start of the
/// status line. Clicks inside it toggle the reset.
pub const INDICATOR_WIDTH: u16 = 16;

/// Draw the needle angle as a horizontal gauge.
pub fn build_gauge(needle_degrees: f64) -> String {
    let fraction = (needle_degrees / NEEDLE_SWEEP_DEGREES).clamp(0.0, 1.0);
    let filled = (fraction * GAUGE_WIDTH as f64).round() as usize;
    let mut gauge = String::with_capacity(GAUGE_WIDTH * 3);
    for i in 0..GAUGE_WIDTH {
        gauge.push(if i < filled { '━' } else { '─' });
    }
    gauge
}

/// Indicator text, padded to [`INDICATOR_WIDTH`] columns.
pub fn format_indicator(display: &RateDisplay) -> String {
    let text = format!("{}x [{}]", display.label, build_gauge(display.needle_degrees));
    let len = text.chars().count();
    let pad = (INDICATOR_WIDTH as usize).saturating_sub(len);
    format!("{}{}", text, " ".repeat(pad))
}

/// Plain-text status line: indicator, play state and current chapter.
pub fn format_status_line(
    display: &RateDisplay,
    paused: bool,
    chapter: Option<&str>,
    width: usize,
) -> String {
    let mut line = format_indicator(display);
    line.push_str(if paused { " paused " } else { " playing" });
    if let Some(label) = chapter.filter(|l| !l.is_empty()) {
        line.push_str("  ");
        line.push_str(label);
    }
    line.chars().take(width).collect()
}

/// Render the status line on `row`.
pub fn render_status_line(
    stdout: &mut io::Stdout,
    row: u16,
    width: u16,
    display: &RateDisplay,
    paused: bool,
    chapter: Option<&str>,
) -> Result<()> {
    let line = format_status_line(display, paused, chapter, width as usize);
    write!(stdout, "\x1b[{};1H\x1b[2K\x1b[97m{}\x1b[0m", row + 1, line)?;
    Ok(())
}
