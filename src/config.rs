use embassy_time::Duration;

use crate::color::Palette;
use crate::frame_scheduler::DEFAULT_FPS;
use crate::geometry::EyeDimensions;
use crate::reaction::BLINK_DURATION;
use crate::scheduler::BehaviorConfig;

/// Default delay between automatic blinks
pub const AUTO_BLINK_INTERVAL: Duration = Duration::from_secs(4);
/// Default jitter of automatic blinks
pub const AUTO_BLINK_VARIATION: Duration = Duration::from_secs(2);
/// Default delay between idle gaze changes
pub const IDLE_INTERVAL: Duration = Duration::from_secs(3);
/// Default jitter of idle gaze changes
pub const IDLE_VARIATION: Duration = Duration::from_secs(2);

/// Configuration for the eyes engine
#[derive(Debug, Clone)]
pub struct EyesConfig {
    pub left: EyeDimensions,
    pub right: EyeDimensions,
    /// Horizontal gap between the eyes; negative values overlap them
    pub space_between: f32,
    pub palette: Palette,
    pub frame_rate: u32,
    pub blink_duration: Duration,
    pub auto_blink: BehaviorConfig,
    pub idle: BehaviorConfig,
}

impl EyesConfig {
    /// Use the same dimensions for both eyes
    pub const fn with_eyes(mut self, dimensions: EyeDimensions) -> Self {
        self.left = dimensions;
        self.right = dimensions;
        self
    }

    pub const fn with_space_between(mut self, space: f32) -> Self {
        self.space_between = space;
        self
    }

    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub const fn with_frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }
}

impl Default for EyesConfig {
    fn default() -> Self {
        Self {
            left: EyeDimensions::default(),
            right: EyeDimensions::default(),
            space_between: 10.0,
            palette: Palette::default(),
            frame_rate: DEFAULT_FPS,
            blink_duration: BLINK_DURATION,
            auto_blink: BehaviorConfig::disabled(AUTO_BLINK_INTERVAL, AUTO_BLINK_VARIATION),
            idle: BehaviorConfig::disabled(IDLE_INTERVAL, IDLE_VARIATION),
        }
    }
}
