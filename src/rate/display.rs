//! What the rate indicator shows.

use super::RatePolicy;

/// Sweep of the gauge needle between the lowest and highest rate, in degrees.
pub const NEEDLE_SWEEP_DEGREES: f64 = 188.0;

/// Display payload produced after every rate change.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDisplay {
    /// Rate with two decimals, e.g. `"1.25"`.
    pub label: String,
    /// Gauge needle rotation in degrees, `0` at `min` and the full sweep at `max`.
    pub needle_degrees: f64,
}

impl RateDisplay {
    pub fn new(rate: f64, policy: &RatePolicy) -> Self {
        Self {
            label: format!("{:.2}", rate),
            needle_degrees: needle_degrees(rate, policy),
        }
    }
}

/// Needle angle for `rate`, clamped to the gauge's sweep.
pub fn needle_degrees(rate: f64, policy: &RatePolicy) -> f64 {
    let span = policy.max - policy.min;
    if span <= 0.0 || !rate.is_finite() {
        return 0.0;
    }
    let fraction = ((rate - policy.min) / span).clamp(0.0, 1.0);
    fraction * NEEDLE_SWEEP_DEGREES
}
