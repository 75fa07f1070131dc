//! Per-frame smoothing of animated values.
//!
//! Every animated scalar is a [`Tween`]: a current value that moves a fixed
//! fraction of the remaining distance toward its target on each frame.
//! After `k` frames with a fixed target the error is `error_0 * (1 - rate)^k`,
//! until it drops below [`SNAP_EPSILON`] and the value lands on the target.

use libm::fabsf;

/// Rate used for gaze offsets, mood modifiers and eye geometry
pub const RATE_SLOW: f32 = 0.15;

/// Rate used for eyelid openness
pub const RATE_FAST: f32 = 0.4;

/// Below this distance the value snaps onto the target
pub const SNAP_EPSILON: f32 = 0.01;

/// Move `current` toward `target` by `rate` of the remaining distance.
#[inline]
pub fn blend(current: f32, target: f32, rate: f32) -> f32 {
    let diff = target - current;
    if fabsf(diff) < SNAP_EPSILON {
        return target;
    }
    current + diff * rate
}

/// Value smoothed toward a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    current: f32,
    target: f32,
}

impl Tween {
    /// Create a tween resting at `value`
    pub const fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    pub const fn current(&self) -> f32 {
        self.current
    }

    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without touching the current value
    pub const fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Override the current value (used while a reaction owns the field)
    pub const fn set_current(&mut self, value: f32) {
        self.current = value;
    }

    /// Jump to `value` with no smoothing
    pub const fn reset(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Check if the value has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one frame
    pub fn blend(&mut self, rate: f32) {
        self.current = blend(self.current, self.target, rate);
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}
