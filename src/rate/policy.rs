//! Rate bounds and step size.

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing a rate against a bound.
///
/// Two rates closer than this are treated as equal, so `2.95 + 0.05` is
/// "at" 3.0 regardless of how the sum rounds.
pub const BOUND_EPSILON: f64 = 1e-9;

/// Resolution stepped rates are rounded to.
const RATE_RESOLUTION: f64 = 1e6;

/// Bounds, step and neutral rate for a [`RateController`](super::RateController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatePolicy {
    /// Lowest rate reachable by slowing down.
    pub min: f64,
    /// Rate that speeding up never reaches.
    pub max: f64,
    /// Increment applied by a single speed-up or slow-down.
    pub step: f64,
    /// Neutral rate used by the reset toggle and when nothing is persisted.
    #[serde(rename = "default")]
    pub default_rate: f64,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 3.0,
            step: 0.05,
            default_rate: 1.0,
        }
    }
}

impl RatePolicy {
    /// Whether a speed-up from `rate` stays strictly below `max`.
    pub fn can_speed_up(&self, rate: f64) -> bool {
        rate + self.step < self.max - BOUND_EPSILON
    }

    /// Whether `rate` is strictly above `min`.
    pub fn can_slow_down(&self, rate: f64) -> bool {
        rate > self.min + BOUND_EPSILON
    }

    /// Check that the policy describes a usable range.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err("rate bounds and step must be finite numbers".to_string());
        }
        if self.min >= self.max {
            return Err(format!(
                "rate.min ({}) must be lower than rate.max ({})",
                self.min, self.max
            ));
        }
        if self.step <= 0.0 {
            return Err(format!("rate.step ({}) must be positive", self.step));
        }
        if !self.default_rate.is_finite() || self.default_rate <= 0.0 {
            return Err(format!(
                "rate.default ({}) must be a positive number",
                self.default_rate
            ));
        }
        if self.default_rate < self.min || self.default_rate > self.max {
            return Err(format!(
                "rate.default ({}) must lie between rate.min ({}) and rate.max ({})",
                self.default_rate, self.min, self.max
            ));
        }
        Ok(())
    }
}

/// Round a stepped rate so repeated steps do not accumulate drift.
pub fn normalize_rate(rate: f64) -> f64 {
    (rate * RATE_RESOLUTION).round() / RATE_RESOLUTION
}
