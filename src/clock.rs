//! Time sources for the scheduler. Timestamps are milliseconds since the Unix epoch.
use crate::models::review_state::MS_PER_DAY;
use chrono::Utc;
use std::cell::Cell;

/// Source of the current time.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock, used to simulate days passing.
#[derive(Debug, Default)]
pub struct SimulatedClock {
    now: Cell<i64>,
}

impl SimulatedClock {
    /// Clock stopped at `start_ms`.
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Starts at the current wall-clock time.
    pub fn starting_now() -> Self {
        Self::new(SystemClock.now_ms())
    }

    /// Moves the clock to `ms`.
    pub fn set(&self, ms: i64) {
        self.now.set(ms);
    }

    /// Moves the clock forward by `ms`.
    pub fn advance_ms(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }

    /// Moves the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        self.advance_ms(days * MS_PER_DAY);
    }
}

impl Clock for SimulatedClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}
