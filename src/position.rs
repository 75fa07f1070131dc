//! Gaze directions and their pixel offsets.

use core::fmt;
use core::str::FromStr;

use libm::fmaxf;

use crate::geometry::EyeDimensions;

/// Safety inset kept between the eyes and the screen edge
pub const TRAVEL_MARGIN: f32 = 10.0;

/// Fraction of the travel budget used by compass positions
pub const GAZE_SCALE: f32 = 0.7;

/// Where the eyes are looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Centered
    #[default]
    Default,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// How far the eye pair can move from the center before hitting the margin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Travel {
    pub max_x: f32,
    pub max_y: f32,
}

impl Travel {
    /// Compute the remaining travel budget for an eye pair on a screen.
    ///
    /// Never negative: eyes larger than the screen simply cannot move.
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(
        screen_width: usize,
        screen_height: usize,
        left: EyeDimensions,
        right: EyeDimensions,
        space_between: f32,
    ) -> Self {
        let pair_width = left.width + right.width + space_between;
        let pair_height = fmaxf(left.height, right.height);
        Self {
            max_x: fmaxf((screen_width as f32 - pair_width) / 2.0 - TRAVEL_MARGIN, 0.0),
            max_y: fmaxf((screen_height as f32 - pair_height) / 2.0 - TRAVEL_MARGIN, 0.0),
        }
    }
}

/// Error returned when a direction name is not recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDirection;

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown gaze direction")
    }
}

impl core::error::Error for UnknownDirection {}

const ALIASES: [(&str, Position); 23] = [
    ("center", Position::Default),
    ("default", Position::Default),
    ("n", Position::N),
    ("north", Position::N),
    ("up", Position::N),
    ("ne", Position::NE),
    ("northeast", Position::NE),
    ("e", Position::E),
    ("east", Position::E),
    ("right", Position::E),
    ("se", Position::SE),
    ("southeast", Position::SE),
    ("s", Position::S),
    ("south", Position::S),
    ("down", Position::S),
    ("sw", Position::SW),
    ("southwest", Position::SW),
    ("w", Position::W),
    ("west", Position::W),
    ("left", Position::W),
    ("nw", Position::NW),
    ("northwest", Position::NW),
    ("centre", Position::Default),
];

impl Position {
    pub const ALL: [Position; 9] = [
        Position::Default,
        Position::N,
        Position::NE,
        Position::E,
        Position::SE,
        Position::S,
        Position::SW,
        Position::W,
        Position::NW,
    ];

    /// Unit direction of this position: x grows to the right, y grows down
    pub const fn direction(self) -> (f32, f32) {
        match self {
            Self::Default => (0.0, 0.0),
            Self::N => (0.0, -1.0),
            Self::NE => (1.0, -1.0),
            Self::E => (1.0, 0.0),
            Self::SE => (1.0, 1.0),
            Self::S => (0.0, 1.0),
            Self::SW => (-1.0, 1.0),
            Self::W => (-1.0, 0.0),
            Self::NW => (-1.0, -1.0),
        }
    }

    /// Target gaze offset in pixels for the given travel budget
    pub fn offset(self, travel: Travel) -> (f32, f32) {
        let (dx, dy) = self.direction();
        (
            dx * travel.max_x * GAZE_SCALE,
            dy * travel.max_y * GAZE_SCALE,
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::N => "n",
            Self::NE => "ne",
            Self::E => "e",
            Self::SE => "se",
            Self::S => "s",
            Self::SW => "sw",
            Self::W => "w",
            Self::NW => "nw",
        }
    }
}

impl FromStr for Position {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALIASES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, position)| position)
            .ok_or(UnknownDirection)
    }
}
