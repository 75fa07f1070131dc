//! Frame pacing.
//!
//! The governor never lets two frames start closer than one frame interval.
//! It does not drop frames or catch up: if rendering or the display sink is
//! slow, the next frame simply starts late.

use embassy_time::{Duration, Instant};

use crate::clock::Clock;

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Duration of one frame at `fps` frames per second (at least 1 FPS)
pub const fn frame_interval(fps: u32) -> Duration {
    let fps = if fps == 0 { 1 } else { fps };
    Duration::from_micros(1_000_000 / fps as u64)
}

/// Tracks when the last frame started and waits out the rest of the interval
#[derive(Debug, Clone, Copy)]
pub struct FrameGovernor {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl FrameGovernor {
    pub const fn new(fps: u32) -> Self {
        Self {
            interval: frame_interval(fps),
            last_frame: None,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn set_frame_rate(&mut self, fps: u32) {
        self.interval = frame_interval(fps);
    }

    /// Instant the last frame started, if any
    pub const fn last_frame(&self) -> Option<Instant> {
        self.last_frame
    }

    /// Wait until the next frame is due and return its start instant.
    ///
    /// The first frame starts immediately.
    pub fn pace<C: Clock>(&mut self, clock: &mut C) -> Instant {
        if let Some(last) = self.last_frame {
            let deadline = last + self.interval;
            if clock.now() < deadline {
                clock.wait_until(deadline);
            }
        }
        let now = clock.now();
        self.last_frame = Some(now);
        now
    }
}

impl Default for FrameGovernor {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}
