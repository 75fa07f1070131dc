//! Eye expressions.

const MOOD_NAME_DEFAULT: &str = "default";
const MOOD_NAME_TIRED: &str = "tired";
const MOOD_NAME_ANGRY: &str = "angry";
const MOOD_NAME_HAPPY: &str = "happy";

/// Expression shown by the eyes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Default,
    Tired,
    Angry,
    Happy,
}

/// Target shape modifiers for one eye.
///
/// `top` and `bottom` are fractions of the eye height cut away as flat
/// bands. `slant` tilts the top cut: at `1.0` the outer edge is not cut at
/// all and the inner edge is cut by the full `top` amount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeTargets {
    pub top: f32,
    pub bottom: f32,
    pub slant: f32,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Default, Mood::Tired, Mood::Angry, Mood::Happy];

    /// Shape modifiers this mood blends toward. Both eyes use the same values.
    pub const fn shape_targets(self) -> ShapeTargets {
        match self {
            Self::Default => ShapeTargets {
                top: 0.0,
                bottom: 0.0,
                slant: 0.0,
            },
            Self::Happy => ShapeTargets {
                top: 0.0,
                bottom: 0.4,
                slant: 0.0,
            },
            Self::Angry => ShapeTargets {
                top: 0.35,
                bottom: 0.0,
                slant: 1.0,
            },
            Self::Tired => ShapeTargets {
                top: 0.5,
                bottom: 0.0,
                slant: 0.0,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => MOOD_NAME_DEFAULT,
            Self::Tired => MOOD_NAME_TIRED,
            Self::Angry => MOOD_NAME_ANGRY,
            Self::Happy => MOOD_NAME_HAPPY,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s))
    }
}
