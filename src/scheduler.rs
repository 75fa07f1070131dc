//! Behavior scheduler.
//!
//! Decides when autonomous events fire (auto-blink, idle wander) and tracks
//! the reaction slots (blink, confused, laugh). Each slot is either idle or
//! active; timers are rescheduled right after they fire.

use embassy_time::{Duration, Instant};
use rand::{Rng, RngCore};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::position::Position;
use crate::reaction::{Reaction, blink_curve, confused_shake, laugh_shake};

/// Shortest delay between two firings of a timer
pub const MIN_TIMER_INTERVAL: Duration = Duration::from_millis(500);

/// Settings for a randomly jittered timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorConfig {
    pub enabled: bool,
    /// Base delay between firings
    pub interval: Duration,
    /// Uniform jitter applied in both directions
    pub variation: Duration,
}

impl BehaviorConfig {
    pub const fn disabled(interval: Duration, variation: Duration) -> Self {
        Self {
            enabled: false,
            interval,
            variation,
        }
    }
}

/// Timer firing at a jittered interval
#[derive(Debug, Clone, Copy)]
pub struct BehaviorTimer {
    config: BehaviorConfig,
    next: Instant,
}

impl BehaviorTimer {
    pub fn new(config: BehaviorConfig, now: Instant, rng: &mut impl RngCore) -> Self {
        let mut timer = Self { config, next: now };
        timer.reschedule(now, rng);
        timer
    }

    pub const fn config(&self) -> BehaviorConfig {
        self.config
    }

    pub const fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Instant of the next firing
    pub const fn next(&self) -> Instant {
        self.next
    }

    /// Replace the settings; enabling always schedules a fresh firing
    pub fn configure(&mut self, config: BehaviorConfig, now: Instant, rng: &mut impl RngCore) {
        self.config = config;
        if config.enabled {
            self.reschedule(now, rng);
        }
    }

    /// Schedule the next firing at `now + max(interval ± variation, 0.5s)`
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn reschedule(&mut self, now: Instant, rng: &mut impl RngCore) {
        let base = self.config.interval.as_millis() as i64;
        let spread = self.config.variation.as_millis() as i64;
        let jitter = if spread > 0 {
            rng.gen_range(-spread..=spread)
        } else {
            0
        };
        let delay = (base + jitter).max(MIN_TIMER_INTERVAL.as_millis() as i64);
        self.next = now + Duration::from_millis(delay as u64);
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.config.enabled && now >= self.next
    }
}

/// Which eyes a blink affects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeSelection {
    pub left: bool,
    pub right: bool,
}

impl EyeSelection {
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
}

/// Autonomous events fired during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    /// Auto-blink started a blink
    pub blink: bool,
    /// Idle wander picked a new gaze position
    pub wander: Option<Position>,
}

/// Blink sample for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkSample {
    /// Multiplier applied to the openness target
    pub factor: f32,
    pub eyes: EyeSelection,
}

/// Values produced by the running reactions for one frame.
///
/// A `Some` field means the reaction owns that field this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReactionSample {
    pub blink: Option<BlinkSample>,
    /// Offset added to the gaze x target
    pub shake_x: Option<f32>,
    /// Offset added to the gaze y target
    pub shake_y: Option<f32>,
}

/// Timers and reaction slots of one eye pair
#[derive(Debug, Clone)]
pub struct BehaviorScheduler {
    auto_blink: BehaviorTimer,
    idle: BehaviorTimer,
    blink: Reaction,
    blink_eyes: EyeSelection,
    blink_duration: Duration,
    confused: Reaction,
    laugh: Reaction,
}

impl BehaviorScheduler {
    pub fn new(
        auto_blink: BehaviorConfig,
        idle: BehaviorConfig,
        blink_duration: Duration,
        now: Instant,
        rng: &mut impl RngCore,
    ) -> Self {
        Self {
            auto_blink: BehaviorTimer::new(auto_blink, now, rng),
            idle: BehaviorTimer::new(idle, now, rng),
            blink: Reaction::new(),
            blink_eyes: EyeSelection::BOTH,
            blink_duration,
            confused: Reaction::new(),
            laugh: Reaction::new(),
        }
    }

    pub const fn auto_blink(&self) -> &BehaviorTimer {
        &self.auto_blink
    }

    pub const fn idle(&self) -> &BehaviorTimer {
        &self.idle
    }

    pub fn set_auto_blink(&mut self, config: BehaviorConfig, now: Instant, rng: &mut impl RngCore) {
        self.auto_blink.configure(config, now, rng);
    }

    pub fn set_idle(&mut self, config: BehaviorConfig, now: Instant, rng: &mut impl RngCore) {
        self.idle.configure(config, now, rng);
    }

    pub const fn blink_duration(&self) -> Duration {
        self.blink_duration
    }

    pub const fn set_blink_duration(&mut self, duration: Duration) {
        self.blink_duration = duration;
    }

    /// Start a blink on the selected eyes, restarting any blink in progress
    pub fn start_blink(&mut self, eyes: EyeSelection, now: Instant) {
        self.blink_eyes = eyes;
        self.blink.start(now, self.blink_duration);
    }

    pub fn start_confused(&mut self, duration: Duration, now: Instant) {
        self.confused.start(now, duration);
    }

    pub fn start_laugh(&mut self, duration: Duration, now: Instant) {
        self.laugh.start(now, duration);
    }

    pub const fn is_blinking(&self) -> bool {
        self.blink.is_active()
    }

    pub const fn is_reacting(&self) -> bool {
        self.blink.is_active() || self.confused.is_active() || self.laugh.is_active()
    }

    /// Fire due timers.
    ///
    /// Idle wander is checked first so that it is not held back by a blink
    /// that auto-blink starts in the same tick.
    pub fn poll(&mut self, now: Instant, rng: &mut impl RngCore) -> Triggers {
        let mut triggers = Triggers::default();

        if !self.is_reacting() && self.idle.is_due(now) {
            let position = Position::ALL[rng.gen_range(0..Position::ALL.len())];
            self.idle.reschedule(now, rng);
            #[cfg(feature = "esp32-log")]
            println!("[eyes] idle wander -> {}", position.as_str());
            triggers.wander = Some(position);
        }

        if !self.blink.is_active() && self.auto_blink.is_due(now) {
            self.start_blink(EyeSelection::BOTH, now);
            self.auto_blink.reschedule(now, rng);
            #[cfg(feature = "esp32-log")]
            println!("[eyes] auto blink");
            triggers.blink = true;
        }

        triggers
    }

    /// Advance the reaction slots and sample their curves
    pub fn advance(&mut self, now: Instant) -> ReactionSample {
        ReactionSample {
            blink: self.blink.advance(now).map(|t| BlinkSample {
                factor: blink_curve(t),
                eyes: self.blink_eyes,
            }),
            shake_x: self.confused.advance(now).map(confused_shake),
            shake_y: self.laugh.advance(now).map(laugh_shake),
        }
    }
}
