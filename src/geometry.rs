//! Eye size model.
//!
//! Each eye keeps three copies of its dimensions: what is drawn now
//! (`current`), where it is heading (`target`) and what configuration asked
//! for (`default`). Only configuration calls and curiosity mode move the
//! target; the engine blends `current` toward it every frame.

use crate::transition::{Tween, RATE_SLOW};

/// Which eye
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Size of one eye in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeDimensions {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl EyeDimensions {
    pub const fn new(width: f32, height: f32, radius: f32) -> Self {
        Self {
            width,
            height,
            radius,
        }
    }
}

impl Default for EyeDimensions {
    fn default() -> Self {
        Self::new(36.0, 36.0, 8.0)
    }
}

/// Animated geometry of a single eye
#[derive(Debug, Clone, Copy)]
pub struct EyeGeometry {
    width: Tween,
    height: Tween,
    radius: Tween,
    default: EyeDimensions,
}

impl EyeGeometry {
    pub fn new(dimensions: EyeDimensions) -> Self {
        let dimensions = sanitize(dimensions);
        Self {
            width: Tween::new(dimensions.width),
            height: Tween::new(dimensions.height),
            radius: Tween::new(dimensions.radius),
            default: dimensions,
        }
    }

    /// Dimensions drawn this frame
    pub fn current(&self) -> EyeDimensions {
        EyeDimensions::new(
            self.width.current(),
            self.height.current(),
            self.radius.current(),
        )
    }

    pub fn target(&self) -> EyeDimensions {
        EyeDimensions::new(
            self.width.target(),
            self.height.target(),
            self.radius.target(),
        )
    }

    pub const fn default_dimensions(&self) -> EyeDimensions {
        self.default
    }

    pub fn set_width(&mut self, width: f32) {
        let width = non_negative(width);
        self.width.set_target(width);
        self.default.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        let height = non_negative(height);
        self.height.set_target(height);
        self.default.height = height;
    }

    pub fn set_radius(&mut self, radius: f32) {
        let radius = non_negative(radius);
        self.radius.set_target(radius);
        self.default.radius = radius;
    }

    /// Scale the height target relative to the configured height.
    ///
    /// The configured default is left untouched.
    pub fn grow_height(&mut self, factor: f32) {
        self.height.set_target(self.default.height * factor);
    }

    /// Return the height target to the configured height
    pub fn restore_height(&mut self) {
        self.height.set_target(self.default.height);
    }

    /// Advance one frame
    pub fn blend(&mut self) {
        self.width.blend(RATE_SLOW);
        self.height.blend(RATE_SLOW);
        self.radius.blend(RATE_SLOW);
    }
}

/// Geometry of both eyes
#[derive(Debug, Clone, Copy)]
pub struct EyePair {
    pub left: EyeGeometry,
    pub right: EyeGeometry,
}

impl EyePair {
    pub fn new(left: EyeDimensions, right: EyeDimensions) -> Self {
        Self {
            left: EyeGeometry::new(left),
            right: EyeGeometry::new(right),
        }
    }

    pub const fn side(&self, side: Side) -> &EyeGeometry {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub const fn side_mut(&mut self, side: Side) -> &mut EyeGeometry {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn blend(&mut self) {
        self.left.blend();
        self.right.blend();
    }
}

fn sanitize(dimensions: EyeDimensions) -> EyeDimensions {
    EyeDimensions::new(
        non_negative(dimensions.width),
        non_negative(dimensions.height),
        non_negative(dimensions.radius),
    )
}

// NaN collapses to zero as well
#[inline]
fn non_negative(value: f32) -> f32 {
    if value > 0.0 { value } else { 0.0 }
}
