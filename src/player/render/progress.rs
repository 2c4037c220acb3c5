//! Progress bar with chapter ticks.

use std::io::{self, Write};

use anyhow::Result;

use crate::chapters::format_timestamp;

/// Build the progress bar character array.
///
/// Chapter starts are drawn as `◆`, the playhead as `⏺`; the playhead wins
/// when both land on the same cell.
///
/// # Returns
/// A tuple of (bar_chars, filled_count), where filled_count is the number of
/// cells before the playhead.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    boundaries: &[f64],
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;
    let mut bar: Vec<char> = vec!['─'; bar_width];

    for &start in boundaries {
        let pos = if total_duration > 0.0 {
            ((start / total_duration) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width {
            bar[pos] = '◆';
        }
    }

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar and the `elapsed/total` readout on `row`.
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    current_time: f64,
    total_duration: f64,
    boundaries: &[f64],
) -> Result<()> {
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let time_display = format!(
        " {}/{}",
        format_timestamp(current_time),
        format_timestamp(total_duration)
    );
    let bar_width = (width as usize).saturating_sub(2 + time_display.len());
    let (bar, filled) = build_progress_bar_chars(bar_width, current_time, total_duration, boundaries);

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H\x1b[2K ", row + 1));

    for (i, &c) in bar.iter().enumerate() {
        if c == '◆' {
            output.push_str(YELLOW);
            output.push(c);
        } else if i < filled {
            output.push_str(GREEN);
            output.push('━');
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);
    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;

    Ok(())
}
