//! One-shot reaction animations.
//!
//! A reaction is a pure function of its normalized progress `t` in `[0, 1]`.
//! While running it owns one field of the animation state (openness for a
//! blink, gaze x for confused, gaze y for laugh).

use core::f32::consts::PI;

use embassy_time::{Duration, Instant};
use libm::{fminf, sinf};

/// Default blink length
pub const BLINK_DURATION: Duration = Duration::from_millis(250);

/// Default length of confused and laugh shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

const CONFUSED_CYCLES: f32 = 8.0;
const CONFUSED_AMPLITUDE: f32 = 15.0;
const LAUGH_CYCLES: f32 = 10.0;
const LAUGH_AMPLITUDE: f32 = 8.0;

/// Openness multiplier during a blink: 1 → 0 → 1.
///
/// Folded around `t = 0.5` so samples at `t` and `1 - t` are identical.
#[inline]
pub fn blink_curve(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let folded = fminf(t, 1.0 - t);
    (1.0 - sinf(folded * PI)).clamp(0.0, 1.0)
}

/// Horizontal offset added to the gaze target while confused
#[inline]
pub fn confused_shake(t: f32) -> f32 {
    decaying_shake(t, CONFUSED_CYCLES, CONFUSED_AMPLITUDE)
}

/// Vertical offset added to the gaze target while laughing
#[inline]
pub fn laugh_shake(t: f32) -> f32 {
    decaying_shake(t, LAUGH_CYCLES, LAUGH_AMPLITUDE)
}

#[inline]
fn decaying_shake(t: f32, cycles: f32, amplitude: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    sinf(t * PI * cycles) * amplitude * (1.0 - t)
}

/// Normalized progress of `elapsed` through `duration`, clamped to `[0, 1]`
#[allow(clippy::cast_precision_loss)]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    let total = duration.as_micros();
    if total == 0 {
        return 1.0;
    }
    (elapsed.as_micros() as f32 / total as f32).clamp(0.0, 1.0)
}

/// Timing slot for one reaction kind
#[derive(Debug, Clone, Copy)]
pub struct Reaction {
    start: Instant,
    duration: Duration,
    active: bool,
}

impl Reaction {
    pub const fn new() -> Self {
        Self {
            start: Instant::from_ticks(0),
            duration: Duration::from_ticks(0),
            active: false,
        }
    }

    /// Start (or restart) the reaction at `now`
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.start = now;
        self.duration = duration;
        self.active = true;
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Sample the reaction at `now`.
    ///
    /// Returns `None` when idle. The frame that reaches `t = 1` still
    /// returns `Some(1.0)` and leaves the slot idle afterwards.
    pub fn advance(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now
            .checked_duration_since(self.start)
            .unwrap_or(Duration::from_ticks(0));
        let t = progress(elapsed, self.duration);
        if t >= 1.0 {
            self.active = false;
        }
        Some(t)
    }
}

impl Default for Reaction {
    fn default() -> Self {
        Self::new()
    }
}
