//! Pixel colors.
//!
//! Frames store [`Rgb`] (the `smart-leds` RGB8 type). Drawing goes through
//! `embedded-graphics`, which works in [`Rgb888`]; the two convert freely.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
/// Default sweat drop color
pub const SWEAT_BLUE: Rgb = rgb_from_u32(0x0064_96FF);

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

#[inline]
pub const fn to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

#[inline]
pub fn from_rgb888(color: Rgb888) -> Rgb {
    Rgb {
        r: color.r(),
        g: color.g(),
        b: color.b(),
    }
}

/// Colors used to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub eye: Rgb,
    pub sweat: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BLACK,
            eye: WHITE,
            sweat: SWEAT_BLUE,
        }
    }
}
