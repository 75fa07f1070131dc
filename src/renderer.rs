//! Rasterization of the eye pair.
//!
//! A frame is drawn in two steps: [`Scene::layout`] turns the animation state
//! into positioned shapes, and [`Renderer::draw`] rasterizes them onto any
//! `embedded-graphics` draw target. Degenerate shapes are dropped during
//! layout and ignored by the drawing helpers, so neither step can fail on
//! bad geometry.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Ellipse, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle,
};
use heapless::Vec;
use libm::{fminf, roundf};

use crate::color::{Palette, to_rgb888};
use crate::geometry::{EyeDimensions, EyePair};
use crate::mood::ShapeTargets;
use crate::state::AnimationState;
use crate::sweat::SweatDrops;

/// Eyes narrower or shorter than this are not drawn
pub const MIN_EYE_EXTENT: f32 = 2.0;

/// Mood cuts below this fraction are treated as absent
const CUT_EPSILON: f32 = 0.01;

const SWEAT_GAP_X: f32 = 10.0;
const SWEAT_GAP_Y: f32 = 5.0;
const SWEAT_SPACING: f32 = 8.0;
const DROP_HALF_WIDTH: f32 = 4.0;
const DROP_HEIGHT: f32 = 6.0;
const DROP_TIP_OVERLAP: f32 = 2.0;

/// Side of the eye that faces the other eye; the slanted cut is deepest there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerEdge {
    Left,
    Right,
    /// Single centered eye: the slant forms a V around the middle
    Center,
}

/// A positioned eye ready for rasterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeShape {
    /// Left edge
    pub x: f32,
    /// Top edge of the open shape before mood cuts
    pub y: f32,
    pub width: f32,
    /// Height after applying openness
    pub height: f32,
    pub radius: f32,
    pub cuts: ShapeTargets,
    pub inner: InnerEdge,
}

impl EyeShape {
    fn new(
        x: f32,
        center_y: f32,
        dimensions: EyeDimensions,
        open: f32,
        cuts: ShapeTargets,
        inner: InnerEdge,
    ) -> Self {
        let height = dimensions.height * open.clamp(0.0, 1.0);
        Self {
            x,
            y: center_y - height / 2.0,
            width: dimensions.width,
            height,
            radius: dimensions.radius,
            cuts,
            inner,
        }
    }

    /// Height left after the top and bottom bands are removed
    pub fn visible_height(&self) -> f32 {
        self.height * (1.0 - self.cuts.top - self.cuts.bottom)
    }

    pub fn is_drawable(&self) -> bool {
        self.width >= MIN_EYE_EXTENT
            && self.height >= MIN_EYE_EXTENT
            && self.visible_height() >= MIN_EYE_EXTENT
    }

    /// Corner radius limited to half of the smaller side
    pub fn clamped_radius(&self) -> f32 {
        fminf(self.radius.max(0.0), fminf(self.width, self.height) / 2.0)
    }

    fn has_cuts(&self) -> bool {
        self.cuts.top > CUT_EPSILON || self.cuts.bottom > CUT_EPSILON
    }
}

/// Shapes to draw for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    eyes: Vec<EyeShape, 2>,
    sweat_anchor: Option<(f32, f32)>,
}

impl Scene {
    /// Position the eyes for the current state.
    ///
    /// `offset` is the gaze offset including any flicker jitter.
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(
        screen: (usize, usize),
        state: &AnimationState,
        geometry: &EyePair,
        space_between: f32,
        offset: (f32, f32),
    ) -> Self {
        let center_x = screen.0 as f32 / 2.0;
        let center_y = screen.1 as f32 / 2.0 + offset.1;
        let mut scene = Self::default();

        if state.features.cyclops {
            let dimensions = geometry.left.current();
            let x = center_x - dimensions.width / 2.0 + offset.0;
            scene.push(EyeShape::new(
                x,
                center_y,
                dimensions,
                state.combined_open(),
                state.left_shape.current(),
                InnerEdge::Center,
            ));
            return scene;
        }

        let left = geometry.left.current();
        let right = geometry.right.current();
        let pair_width = left.width + space_between + right.width;
        let start_x = center_x - pair_width / 2.0 + offset.0;

        scene.push(EyeShape::new(
            start_x,
            center_y,
            left,
            state.left_open.current(),
            state.left_shape.current(),
            InnerEdge::Right,
        ));
        let right = scene.push(EyeShape::new(
            start_x + left.width + space_between,
            center_y,
            right,
            state.right_open.current(),
            state.right_shape.current(),
            InnerEdge::Left,
        ));

        // Drops hang off the right eye, so they need one to be visible
        if state.features.sweat && right.is_drawable() {
            scene.sweat_anchor = Some((
                right.x + right.width + SWEAT_GAP_X,
                right.y - SWEAT_GAP_Y,
            ));
        }
        scene
    }

    /// Keep the shape if it is drawable; returns it either way
    fn push(&mut self, shape: EyeShape) -> EyeShape {
        if shape.is_drawable() {
            // Capacity matches the number of eyes a layout can produce
            let _ = self.eyes.push(shape);
        }
        shape
    }

    pub fn eyes(&self) -> &[EyeShape] {
        &self.eyes
    }

    /// Top-left point the sweat drops fall from, when sweat is enabled and
    /// the right eye is drawn
    pub const fn sweat_anchor(&self) -> Option<(f32, f32)> {
        self.sweat_anchor
    }
}

/// Draws scenes with a fixed palette
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub const fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Draw a complete frame: background, eyes, then sweat drops
    pub fn draw<D>(&self, target: &mut D, scene: &Scene, sweat: &SweatDrops) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(to_rgb888(self.palette.background))?;
        for eye in scene.eyes() {
            draw_eye(target, eye, &self.palette)?;
        }
        if let Some(anchor) = scene.sweat_anchor() {
            draw_sweat(target, anchor, sweat, to_rgb888(self.palette.sweat))?;
        }
        Ok(())
    }
}

/// Draw one eye with its mood cuts.
///
/// Returns `false` without drawing anything for degenerate shapes.
pub fn draw_eye<D>(target: &mut D, eye: &EyeShape, palette: &Palette) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if !eye.is_drawable() {
        return Ok(false);
    }

    let body = Rectangle::new(point(eye.x, eye.y), size(eye.width, eye.height));
    let radius = extent(eye.clamped_radius());
    RoundedRectangle::with_equal_corners(body, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(to_rgb888(palette.eye)))
        .draw(target)?;

    if !eye.has_cuts() {
        return Ok(true);
    }

    let background = PrimitiveStyle::with_fill(to_rgb888(palette.background));
    let (left, right) = (eye.x, eye.x + eye.width);

    let inner_depth = eye.height * eye.cuts.top;
    let outer_depth = inner_depth * (1.0 - eye.cuts.slant);
    if outer_depth >= 0.5 {
        Rectangle::new(point(left, eye.y), size(eye.width, outer_depth))
            .into_styled(background)
            .draw(target)?;
    }
    if inner_depth - outer_depth >= 0.5 {
        let base = eye.y + outer_depth;
        let deep = eye.y + inner_depth;
        match eye.inner {
            InnerEdge::Right => {
                Triangle::new(point(left, base), point(right, base), point(right, deep))
                    .into_styled(background)
                    .draw(target)?;
            }
            InnerEdge::Left => {
                Triangle::new(point(right, base), point(left, base), point(left, deep))
                    .into_styled(background)
                    .draw(target)?;
            }
            InnerEdge::Center => {
                let middle = left + eye.width / 2.0;
                Triangle::new(point(left, base), point(middle, base), point(middle, deep))
                    .into_styled(background)
                    .draw(target)?;
                Triangle::new(point(right, base), point(middle, base), point(middle, deep))
                    .into_styled(background)
                    .draw(target)?;
            }
        }
    }

    let bottom_depth = eye.height * eye.cuts.bottom;
    if bottom_depth >= 0.5 {
        Rectangle::new(
            point(left, eye.y + eye.height - bottom_depth),
            size(eye.width, bottom_depth),
        )
        .into_styled(background)
        .draw(target)?;
    }

    Ok(true)
}

/// Draw the sweat drops as teardrops (ellipse body, triangle tip)
pub fn draw_sweat<D>(
    target: &mut D,
    anchor: (f32, f32),
    sweat: &SweatDrops,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = PrimitiveStyle::with_fill(color);
    for (i, drop) in sweat.drops().iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = anchor.0 + i as f32 * SWEAT_SPACING;
        let y = anchor.1 + drop.offset;
        let half_width = DROP_HALF_WIDTH * drop.size;
        let height = DROP_HEIGHT * drop.size;
        if half_width <= 1.0 || height <= 1.0 {
            continue;
        }

        Ellipse::new(point(x - half_width, y), size(half_width * 2.0, height))
            .into_styled(style)
            .draw(target)?;
        Triangle::new(
            point(x, y - height / 2.0),
            point(x - half_width, y + DROP_TIP_OVERLAP),
            point(x + half_width, y + DROP_TIP_OVERLAP),
        )
        .into_styled(style)
        .draw(target)?;
    }
    Ok(())
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn point(x: f32, y: f32) -> Point {
    Point::new(roundf(x) as i32, roundf(y) as i32)
}

#[inline]
fn size(width: f32, height: f32) -> Size {
    Size::new(extent(width), extent(height))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn extent(value: f32) -> u32 {
    roundf(value.max(0.0)) as u32
}
