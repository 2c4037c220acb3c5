//! Subcommand handlers for the `pacer` binary.

pub mod chapters;
pub mod config;
pub mod play;
pub mod rate;
pub mod seek;

use pacer::chapters::parse_timestamp;

/// Parse a time argument given as seconds (`90`, `12.5`) or `[H:]MM:SS`.
pub fn parse_time_arg(s: &str) -> Result<f64, String> {
    if let Some(secs) = parse_timestamp(s) {
        return Ok(secs);
    }
    match s.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs),
        _ => Err(format!(
            "'{}' is not a time (use seconds or [H:]MM:SS)",
            s
        )),
    }
}
