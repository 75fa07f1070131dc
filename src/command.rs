use embassy_time::Duration;

use crate::color::Rgb;
use crate::mood::Mood;
use crate::position::Position;
use crate::scheduler::{BehaviorConfig, EyeSelection};

/// Changes that can be applied to the eyes between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EyeCommand {
    SetMood(Mood),
    SetPosition(Position),
    /// Open the selected eyes
    Open(EyeSelection),
    /// Close the selected eyes
    Close(EyeSelection),
    /// Blink the selected eyes (a wink when only one is selected)
    Blink(EyeSelection),
    /// Horizontal shake for the given duration
    Confused(Duration),
    /// Vertical shake for the given duration
    Laugh(Duration),
    SetAutoBlink(BehaviorConfig),
    SetIdleMode(BehaviorConfig),
    SetCyclops(bool),
    SetCuriosity(bool),
    SetHFlicker { enabled: bool, amplitude: u8 },
    SetVFlicker { enabled: bool, amplitude: u8 },
    SetSweat(bool),
    SetColors { background: Rgb, eye: Rgb },
    SetFrameRate(u32),
}
