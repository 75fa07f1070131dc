#![no_std]

pub mod channel;
pub mod clock;
pub mod color;
pub mod command;
pub mod config;
pub mod engine;
pub mod frame;
pub mod frame_scheduler;
pub mod geometry;
pub mod mood;
pub mod position;
pub mod reaction;
pub mod renderer;
pub mod scheduler;
pub mod sink;
pub mod state;
pub mod sweat;
pub mod transition;

pub use channel::{CommandQueue, QueueFull};
pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{Palette, Rgb};
pub use command::EyeCommand;
pub use config::EyesConfig;
pub use engine::RoboEyes;
pub use frame::Frame;
pub use frame_scheduler::FrameGovernor;
pub use geometry::{EyeDimensions, EyeGeometry, EyePair, Side};
pub use mood::Mood;
pub use position::{Position, Travel, UnknownDirection};
pub use renderer::{EyeShape, Renderer, Scene};
pub use scheduler::{BehaviorConfig, EyeSelection};
pub use sink::{DisplaySink, MemorySink, NullSink, Presenter};
pub use state::AnimationState;
pub use transition::Tween;

pub use embassy_time::{Duration, Instant};
