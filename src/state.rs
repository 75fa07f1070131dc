//! Live animation values of an eye pair.

use crate::mood::{Mood, ShapeTargets};
use crate::position::{Position, Travel};
use crate::scheduler::ReactionSample;
use crate::transition::{RATE_FAST, RATE_SLOW, Tween};

/// Mood shape modifiers of one eye
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeModifiers {
    pub top: Tween,
    pub bottom: Tween,
    pub slant: Tween,
}

impl ShapeModifiers {
    fn retarget(&mut self, targets: ShapeTargets) {
        self.top.set_target(targets.top);
        self.bottom.set_target(targets.bottom);
        self.slant.set_target(targets.slant);
    }

    fn blend(&mut self) {
        self.top.blend(RATE_SLOW);
        self.bottom.blend(RATE_SLOW);
        self.slant.blend(RATE_SLOW);
    }

    /// Current values, clamped to `[0, 1]`
    pub fn current(&self) -> ShapeTargets {
        ShapeTargets {
            top: self.top.current().clamp(0.0, 1.0),
            bottom: self.bottom.current().clamp(0.0, 1.0),
            slant: self.slant.current().clamp(0.0, 1.0),
        }
    }
}

/// Horizontal or vertical jitter applied at render time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flicker {
    pub enabled: bool,
    /// Maximum jitter in pixels
    pub amplitude: u8,
}

/// Independent rendering features
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub cyclops: bool,
    pub curiosity: bool,
    pub h_flicker: Flicker,
    pub v_flicker: Flicker,
    pub sweat: bool,
}

/// Aggregate mutable state for one eye pair
#[derive(Debug, Clone)]
pub struct AnimationState {
    pub x_offset: Tween,
    pub y_offset: Tween,
    pub left_open: Tween,
    pub right_open: Tween,
    pub left_shape: ShapeModifiers,
    pub right_shape: ShapeModifiers,
    pub features: FeatureFlags,
    mood: Mood,
    position: Position,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            x_offset: Tween::new(0.0),
            y_offset: Tween::new(0.0),
            left_open: Tween::new(1.0),
            right_open: Tween::new(1.0),
            left_shape: ShapeModifiers::default(),
            right_shape: ShapeModifiers::default(),
            features: FeatureFlags::default(),
            mood: Mood::Default,
            position: Position::Default,
        }
    }

    pub const fn mood(&self) -> Mood {
        self.mood
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
        let targets = mood.shape_targets();
        self.left_shape.retarget(targets);
        self.right_shape.retarget(targets);
    }

    /// Retarget the gaze; motion toward it happens in [`Self::blend`]
    pub fn set_position(&mut self, position: Position, travel: Travel) {
        self.position = position;
        self.retarget_gaze(travel);
    }

    /// Recompute the gaze target of the current position
    pub fn retarget_gaze(&mut self, travel: Travel) {
        let (x, y) = self.position.offset(travel);
        self.x_offset.set_target(x);
        self.y_offset.set_target(y);
    }

    pub const fn set_open_target(&mut self, left: Option<f32>, right: Option<f32>) {
        if let Some(value) = left {
            self.left_open.set_target(value);
        }
        if let Some(value) = right {
            self.right_open.set_target(value);
        }
    }

    /// Openness of the single eye drawn in cyclops mode
    pub fn combined_open(&self) -> f32 {
        libm::fminf(self.left_open.current(), self.right_open.current())
    }

    /// Write reaction-owned fields, then blend every other field.
    ///
    /// Owned fields skip blending for this frame.
    pub fn advance(&mut self, reactions: &ReactionSample) {
        let mut left_owned = false;
        let mut right_owned = false;
        if let Some(blink) = reactions.blink {
            if blink.eyes.left {
                let open = self.left_open.target() * blink.factor;
                self.left_open.set_current(open);
                left_owned = true;
            }
            if blink.eyes.right {
                let open = self.right_open.target() * blink.factor;
                self.right_open.set_current(open);
                right_owned = true;
            }
        }

        match reactions.shake_x {
            Some(shake) => self.x_offset.set_current(self.x_offset.target() + shake),
            None => self.x_offset.blend(RATE_SLOW),
        }
        match reactions.shake_y {
            Some(shake) => self.y_offset.set_current(self.y_offset.target() + shake),
            None => self.y_offset.blend(RATE_SLOW),
        }

        if !left_owned {
            self.left_open.blend(RATE_FAST);
        }
        if !right_owned {
            self.right_open.blend(RATE_FAST);
        }

        self.left_shape.blend();
        self.right_shape.blend();
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
