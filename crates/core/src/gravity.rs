//! Gravity clock - fixed-interval "advance one row" signal
//!
//! The clock is sampled with a caller-supplied monotonic `Instant` once per
//! frame; it never sleeps. Nothing but its own firing moves the reference
//! point forward, so neither player moves nor starting a game delay it.

use std::time::{Duration, Instant};

use crate::types::GRAVITY_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval: Duration,
    last_fire: Instant,
}

impl GravityClock {
    /// Clock with the standard 500ms interval, armed at `now`
    pub fn new(now: Instant) -> Self {
        Self::with_interval(Duration::from_millis(GRAVITY_INTERVAL_MS), now)
    }

    pub fn with_interval(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_fire: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true (and re-arms) once strictly more than one interval has passed
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fire) > self.interval {
            self.last_fire = now;
            true
        } else {
            false
        }
    }

    /// Time left until the clock can fire (zero when it is due)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fire))
    }
}
