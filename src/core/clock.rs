// core/clock.rs

//! # Clock Collaborator
//!
//! Injected time source for the timestamp-based commit fallback. Production
//! code uses the system wall clock; tests inject a fixed instant so fallback
//! values are deterministic.

use chrono::Utc;

/// Wall-clock source used to mint fallback commit identifiers.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// System wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to a single instant, for deterministic tests.
#[cfg(test)]
pub struct FixedClock(pub i64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
