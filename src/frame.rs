//! In-memory raster frame.

use core::convert::Infallible;
use core::fmt;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb888;

use crate::color::{Rgb, from_rgb888};

/// Fixed-size RGB frame of `W × H` pixels, stored row by row
#[derive(Clone, PartialEq, Eq)]
pub struct Frame<const W: usize, const H: usize> {
    rows: [[Rgb; W]; H],
}

impl<const W: usize, const H: usize> Frame<W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    /// Create a frame filled with `color`
    pub const fn new(color: Rgb) -> Self {
        Self {
            rows: [[color; W]; H],
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    /// Fill the whole frame with one color
    pub fn fill(&mut self, color: Rgb) {
        for row in &mut self.rows {
            row.fill(color);
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if let Some(pixel) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *pixel = color;
        }
    }

    pub fn rows(&self) -> &[[Rgb; W]; H] {
        &self.rows
    }

    /// All pixels in row-major order
    pub fn as_slice(&self) -> &[Rgb] {
        self.rows.as_flattened()
    }

    /// Number of pixels with exactly `color`
    pub fn count(&self, color: Rgb) -> usize {
        self.as_slice().iter().filter(|&&pixel| pixel == color).count()
    }

    /// Smallest `(min_x, min_y, max_x, max_y)` box holding every pixel of
    /// `color`, inclusive
    pub fn bounding_box(&self, color: Rgb) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (y, row) in self.rows.iter().enumerate() {
            for (x, _) in row.iter().enumerate().filter(|&(_, &pixel)| pixel == color) {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }
}

impl<const W: usize, const H: usize> fmt::Debug for Frame<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &W)
            .field("height", &H)
            .finish_non_exhaustive()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Frame<W, H> {
    #[allow(clippy::cast_possible_truncation)]
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Frame<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            self.set_pixel(x, y, from_rgb888(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(from_rgb888(color));
        Ok(())
    }
}
