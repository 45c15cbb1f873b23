//! Deadline-based debouncer driven by the owner's event loop.
//!
//! Nothing here sleeps or spawns: callers pass `now` in and poll the deadline
//! from their tick, so cancellation is just dropping the deadline.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer<V> {
    delay: Duration,
    latest: V,
    settled: V,
    deadline: Option<Instant>,
}

impl<V: Clone + PartialEq> Debouncer<V> {
    pub fn new(initial: V, delay: Duration) -> Self {
        Self {
            delay,
            latest: initial.clone(),
            settled: initial,
            deadline: None,
        }
    }

    /// The most recent input value, settled or not.
    pub fn latest(&self) -> &V {
        &self.latest
    }

    /// The value as of the last settlement.
    pub fn settled(&self) -> &V {
        &self.settled
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Feed a new input value. A changed value restarts the quiet period.
    ///
    /// Returns `false` when `value` equals the latest input (nothing rescheduled).
    pub fn set(&mut self, value: V, now: Instant) -> bool {
        if value == self.latest {
            return false;
        }
        self.latest = value;
        self.deadline = Some(now + self.delay);
        true
    }

    /// Settle if the quiet period has elapsed.
    ///
    /// Yields the new settled value only when it differs from the previous
    /// one; a burst that ends where it started settles silently.
    pub fn poll(&mut self, now: Instant) -> Option<V> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;

        if self.latest == self.settled {
            return None;
        }
        self.settled = self.latest.clone();
        Some(self.settled.clone())
    }

    /// Drop any pending settlement. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Force both the input and the settled value without emitting.
    pub fn reset(&mut self, value: V) {
        self.deadline = None;
        self.latest = value.clone();
        self.settled = value;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/debounce.rs"]
mod tests;
