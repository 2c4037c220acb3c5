//! Bounded, persisted, reversible playback-rate control.
//!
//! [`RateController`] owns the active rate for one playback object. Every
//! change is applied to the [`PlaybackSink`] and written to the
//! [`KeyValueStore`] under a single key, so a later controller built on the
//! same store resumes at the same rate.
//!
//! Stepping past a bound is silently ignored rather than clamped: with the
//! default policy the rate can rest just below 3.0 (e.g. 2.99) but never
//! reaches or crosses it.

mod display;
mod policy;

pub use display::{needle_degrees, RateDisplay, NEEDLE_SWEEP_DEGREES};
pub use policy::{normalize_rate, RatePolicy, BOUND_EPSILON};

use tracing::{debug, warn};

use crate::playback::PlaybackSink;
use crate::store::{KeyValueStore, DEFAULT_RATE_KEY};

/// Playback-rate state machine.
#[derive(Debug)]
pub struct RateController<S, P> {
    store: S,
    sink: P,
    key: String,
    policy: RatePolicy,
    current: f64,
    /// Rate to restore on the next reset toggle.
    saved: Option<f64>,
}

impl<S: KeyValueStore, P: PlaybackSink> RateController<S, P> {
    /// Build a controller using the default store key.
    pub fn load(store: S, sink: P, policy: RatePolicy) -> Self {
        Self::load_with_key(store, sink, policy, DEFAULT_RATE_KEY)
    }

    /// Build a controller, seeding the rate from `store[key]`.
    ///
    /// A missing, unparseable or non-finite value falls back to the policy's
    /// default rate. A parseable value outside the policy bounds is accepted
    /// as-is; only the step operations enforce bounds. The loaded rate is
    /// applied to the sink immediately.
    pub fn load_with_key(store: S, sink: P, policy: RatePolicy, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = read_persisted_rate(&store, &key).unwrap_or(policy.default_rate);

        let mut controller = Self {
            store,
            sink,
            key,
            policy,
            current: initial,
            saved: None,
        };
        controller.apply(initial);
        controller
    }

    /// Raise the rate by one step unless that would reach `max`.
    ///
    /// Clears any pending reset restore. Returns the resulting rate.
    pub fn speed_up(&mut self) -> f64 {
        if self.policy.can_speed_up(self.current) {
            self.saved = None;
            self.apply(normalize_rate(self.current + self.policy.step));
        }
        self.current
    }

    /// Lower the rate by one step while it is above `min`.
    ///
    /// Clears any pending reset restore. Returns the resulting rate.
    pub fn slow_down(&mut self) -> f64 {
        if self.policy.can_slow_down(self.current) {
            self.saved = None;
            self.apply(normalize_rate(self.current - self.policy.step));
        }
        self.current
    }

    /// Alternate between the neutral rate and the rate active before the
    /// previous reset.
    ///
    /// First call remembers the current rate and switches to the default;
    /// the next call restores the remembered rate. Returns the resulting rate.
    pub fn reset_toggle(&mut self) -> f64 {
        match self.saved.take() {
            Some(previous) => self.apply(previous),
            None => {
                self.saved = Some(self.current);
                self.apply(self.policy.default_rate);
            }
        }
        self.current
    }

    /// Active rate.
    pub fn rate(&self) -> f64 {
        self.current
    }

    /// Rate the next reset toggle would restore, if any.
    pub fn saved_rate(&self) -> Option<f64> {
        self.saved
    }

    pub fn policy(&self) -> &RatePolicy {
        &self.policy
    }

    /// Display payload for the active rate.
    pub fn display(&self) -> RateDisplay {
        RateDisplay::new(self.current, &self.policy)
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Mutable access to the playback object, e.g. for seeking.
    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply(&mut self, rate: f64) {
        self.current = rate;
        self.sink.set_rate(rate);
        if let Err(e) = self.store.set(&self.key, &rate.to_string()) {
            warn!(key = %self.key, error = %e, "failed to persist playback rate");
        }
        debug!(rate, saved = ?self.saved, "playback rate applied");
    }
}

fn read_persisted_rate<S: KeyValueStore>(store: &S, key: &str) -> Option<f64> {
    let raw = store.get(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(rate) if rate.is_finite() => Some(rate),
        _ => {
            warn!(key, value = %raw, "ignoring unparseable persisted rate");
            None
        }
    }
}
