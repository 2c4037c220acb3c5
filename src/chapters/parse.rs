//! Text chapter listings.
//!
//! The format is the one commonly pasted into video descriptions: one chapter
//! per line, a `[H:]MM:SS` timestamp followed by the label.
//!
//! ```text
//! 0:00 Intro
//! 1:30 - Installing
//! 1:02:03 Wrap-up
//! ```

use super::{Chapter, ChapterError, Chapters};

/// Characters allowed between the timestamp and the label.
const LABEL_SEPARATORS: &[char] = &['-', '–', '—', '|', ':', ' ', '\t'];

impl Chapters {
    /// Parse a text listing. Blank lines and lines starting with `#` are skipped.
    pub fn parse_text(text: &str) -> Result<Self, ChapterError> {
        let mut chapters = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.trim_start_matches(&['-', '*', '•'][..]).trim_start();
            let (stamp, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            let start = parse_timestamp(stamp).ok_or_else(|| ChapterError::InvalidLine {
                line: i + 1,
                content: raw.to_string(),
            })?;
            let label = rest.trim_start_matches(LABEL_SEPARATORS).trim_end();

            chapters.push(Chapter::new(start, label));
        }

        Self::new(chapters)
    }
}

/// Parse `MM:SS` or `H:MM:SS` into seconds.
///
/// Minutes and seconds after the leading field must be below 60. Stamps too
/// large to count in seconds are rejected.
pub fn parse_timestamp(stamp: &str) -> Option<f64> {
    let parts: Vec<&str> = stamp.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut values = Vec::with_capacity(parts.len());
    for part in &parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        values.push(part.parse::<u64>().ok()?);
    }

    if values[1..].iter().any(|&v| v >= 60) {
        return None;
    }

    let seconds = values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_mul(60)?.checked_add(v))?;
    Some(seconds as f64)
}

/// Format seconds as `M:SS`, or `H:MM:SS` from one hour up.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
