//! Counter widget state persisted under `counterValue`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::config::COUNTER_KEY;
use crate::storage::{KeyValueStore, StorageError};

/// Scale applied while the counter pulses after a step.
pub const PULSE_SCALE: f64 = 1.03;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
    /// Set by increment/decrement, cleared by a timer after the pulse.
    pub pulsing: bool,
}

impl CounterState {
    /// Restore the count from the store; absent or malformed values start at 0.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let Some(raw) = store.get(COUNTER_KEY)? else {
            return Ok(Self::default());
        };
        match raw.trim().parse::<i64>() {
            Ok(count) => Ok(Self { count, pulsing: false }),
            Err(e) => {
                log::warn!("ignoring malformed counter value {raw:?}: {e}");
                Ok(Self::default())
            }
        }
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        self.pulsing = true;
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
        self.pulsing = true;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Background opacity grows by 0.1 per step away from zero, capped at 1.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let magnitude = self.count.unsigned_abs() as f64;
        (magnitude * 0.1).min(1.0)
    }

    #[must_use]
    pub fn background_color(&self) -> String {
        format!("rgba(0, 0, 255, {})", self.opacity())
    }

    #[must_use]
    pub fn transform(&self) -> String {
        if self.pulsing { format!("scale({PULSE_SCALE})") } else { "scale(1)".to_owned() }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(COUNTER_KEY, &self.count.to_string())
    }
}
