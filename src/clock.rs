//! Monotonic time sources.

use embassy_time::{Duration, Instant};

/// Monotonic clock used for pacing and timers
pub trait Clock {
    /// Current instant
    fn now(&self) -> Instant;

    /// Block until `deadline` has passed
    fn wait_until(&mut self, deadline: Instant);
}

/// Clock backed by the embassy time driver.
///
/// Waiting is a blocking delay, so it cannot be interrupted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wait_until(&mut self, deadline: Instant) {
        if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            embassy_time::block_for(remaining);
        }
    }
}

/// Manually driven clock.
///
/// Waiting jumps straight to the deadline, so paced loops run instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualClock {
    now: Instant,
}

impl ManualClock {
    pub const fn new(start: Instant) -> Self {
        Self { now: start }
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }

    pub const fn set(&mut self, now: Instant) {
        self.now = now;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::from_millis(0))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn wait_until(&mut self, deadline: Instant) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}
