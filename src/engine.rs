use embassy_time::{Duration, Instant};
use rand::{Rng, RngCore};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::CommandQueue;
use crate::clock::Clock;
use crate::color::{Palette, Rgb};
use crate::command::EyeCommand;
use crate::config::EyesConfig;
use crate::frame::Frame;
use crate::frame_scheduler::FrameGovernor;
use crate::geometry::{EyePair, Side};
use crate::mood::Mood;
use crate::position::{Position, Travel};
use crate::renderer::{Renderer, Scene};
use crate::scheduler::{BehaviorConfig, BehaviorScheduler, EyeSelection};
use crate::state::{AnimationState, Flicker};
use crate::sweat::SweatDrops;

/// Gaze offsets within this distance of the center leave curiosity idle
const CURIOSITY_DEAD_ZONE: f32 = 5.0;

/// Height gained by the outer eye at full horizontal travel
const CURIOSITY_GROWTH: f32 = 0.3;

/// Animated eye pair rendering onto a `W × H` frame.
///
/// Every configuration and action call only changes targets or starts
/// timers; visible change happens in [`RoboEyes::update`], one frame at a
/// time.
pub struct RoboEyes<C: Clock, R: RngCore, const W: usize, const H: usize> {
    // External dependencies
    clock: C,
    rng: R,

    // Configuration
    space_between: f32,
    renderer: Renderer,

    // Internal state
    geometry: EyePair,
    state: AnimationState,
    scheduler: BehaviorScheduler,
    sweat: SweatDrops,
    governor: FrameGovernor,
    scene: Scene,
    frame: Frame<W, H>,
}

impl<C: Clock, R: RngCore, const W: usize, const H: usize> RoboEyes<C, R, W, H> {
    /// Create the engine. Timers are scheduled relative to `clock.now()`.
    pub fn new(clock: C, mut rng: R, config: &EyesConfig) -> Self {
        let now = clock.now();
        let scheduler = BehaviorScheduler::new(
            config.auto_blink,
            config.idle,
            config.blink_duration,
            now,
            &mut rng,
        );
        Self {
            clock,
            rng,
            space_between: config.space_between,
            renderer: Renderer::new(config.palette),
            geometry: EyePair::new(config.left, config.right),
            state: AnimationState::new(),
            scheduler,
            sweat: SweatDrops::new(),
            governor: FrameGovernor::new(config.frame_rate),
            scene: Scene::default(),
            frame: Frame::new(config.palette.background),
        }
    }

    /// Advance every animation by one frame and render it.
    ///
    /// Blocks until one frame interval has passed since the previous frame.
    pub fn update(&mut self) -> &Frame<W, H> {
        let now = self.governor.pace(&mut self.clock);

        let triggers = self.scheduler.poll(now, &mut self.rng);
        if let Some(position) = triggers.wander {
            self.set_position(position);
        }
        let reactions = self.scheduler.advance(now);
        self.state.advance(&reactions);

        if self.state.features.curiosity {
            self.apply_curiosity();
        }
        self.geometry.blend();

        if self.state.features.sweat {
            self.sweat.tick(&mut self.rng);
        }

        let offset = (
            self.state.x_offset.current() + self.flicker(self.state.features.h_flicker),
            self.state.y_offset.current() + self.flicker(self.state.features.v_flicker),
        );
        self.scene = Scene::layout(
            (W, H),
            &self.state,
            &self.geometry,
            self.space_between,
            offset,
        );
        self.renderer
            .draw(&mut self.frame, &self.scene, &self.sweat)
            .unwrap_or_else(|never| match never {});

        &self.frame
    }

    /// Grow the eye facing away from the gaze, proportionally to how far
    /// off-center the gaze is
    fn apply_curiosity(&mut self) {
        let x = self.state.x_offset.current();
        let travel = self.travel();
        let growth = 1.0 + libm::fabsf(x) / travel.max_x.max(1.0) * CURIOSITY_GROWTH;
        if x > CURIOSITY_DEAD_ZONE {
            self.geometry.left.grow_height(growth);
            self.geometry.right.restore_height();
        } else if x < -CURIOSITY_DEAD_ZONE {
            self.geometry.right.grow_height(growth);
            self.geometry.left.restore_height();
        } else {
            self.geometry.left.restore_height();
            self.geometry.right.restore_height();
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn flicker(&mut self, flicker: Flicker) -> f32 {
        if !flicker.enabled || flicker.amplitude == 0 {
            return 0.0;
        }
        let amplitude = i16::from(flicker.amplitude);
        f32::from(self.rng.gen_range(-amplitude..=amplitude))
    }

    /// Travel budget computed from the configured eye sizes
    pub fn travel(&self) -> Travel {
        Travel::compute(
            W,
            H,
            self.geometry.left.default_dimensions(),
            self.geometry.right.default_dimensions(),
            self.space_between,
        )
    }

    fn refresh_travel(&mut self) {
        let travel = self.travel();
        self.state.retarget_gaze(travel);
    }

    // Geometry configuration

    /// Set the width of both eyes
    pub fn set_width(&mut self, width: f32) {
        self.set_widths(width, width);
    }

    pub fn set_widths(&mut self, left: f32, right: f32) {
        self.geometry.left.set_width(left);
        self.geometry.right.set_width(right);
        self.refresh_travel();
    }

    /// Set the height of both eyes
    pub fn set_height(&mut self, height: f32) {
        self.set_heights(height, height);
    }

    pub fn set_heights(&mut self, left: f32, right: f32) {
        self.geometry.left.set_height(left);
        self.geometry.right.set_height(right);
        self.refresh_travel();
    }

    /// Set the corner radius of both eyes
    pub fn set_border_radius(&mut self, radius: f32) {
        self.set_border_radii(radius, radius);
    }

    pub fn set_border_radii(&mut self, left: f32, right: f32) {
        self.geometry.left.set_radius(left);
        self.geometry.right.set_radius(right);
    }

    /// Set the gap between the eyes; negative values make them overlap
    pub fn set_space_between(&mut self, space: f32) {
        self.space_between = space;
        self.refresh_travel();
    }

    pub const fn set_colors(&mut self, background: Rgb, eye: Rgb) {
        let palette = self.renderer.palette();
        self.renderer.set_palette(Palette {
            background,
            eye,
            ..palette
        });
    }

    pub const fn set_palette(&mut self, palette: Palette) {
        self.renderer.set_palette(palette);
    }

    pub const fn set_frame_rate(&mut self, fps: u32) {
        self.governor.set_frame_rate(fps);
    }

    pub const fn set_blink_duration(&mut self, duration: Duration) {
        self.scheduler.set_blink_duration(duration);
    }

    // Behavior configuration

    pub fn set_auto_blink(&mut self, enabled: bool, interval: Duration, variation: Duration) {
        self.set_auto_blink_config(BehaviorConfig {
            enabled,
            interval,
            variation,
        });
    }

    pub fn set_auto_blink_config(&mut self, config: BehaviorConfig) {
        let now = self.clock.now();
        self.scheduler.set_auto_blink(config, now, &mut self.rng);
    }

    pub fn set_idle_mode(&mut self, enabled: bool, interval: Duration, variation: Duration) {
        self.set_idle_config(BehaviorConfig {
            enabled,
            interval,
            variation,
        });
    }

    pub fn set_idle_config(&mut self, config: BehaviorConfig) {
        let now = self.clock.now();
        self.scheduler.set_idle(config, now, &mut self.rng);
    }

    pub const fn set_cyclops(&mut self, enabled: bool) {
        self.state.features.cyclops = enabled;
    }

    /// Toggle curiosity; turning it off returns both eyes to their height
    pub fn set_curiosity(&mut self, enabled: bool) {
        self.state.features.curiosity = enabled;
        if !enabled {
            self.geometry.left.restore_height();
            self.geometry.right.restore_height();
        }
    }

    pub const fn set_h_flicker(&mut self, enabled: bool, amplitude: u8) {
        self.state.features.h_flicker = Flicker { enabled, amplitude };
    }

    pub const fn set_v_flicker(&mut self, enabled: bool, amplitude: u8) {
        self.state.features.v_flicker = Flicker { enabled, amplitude };
    }

    /// Toggle sweat drops; enabling restarts them from the top
    pub fn set_sweat(&mut self, enabled: bool) {
        if enabled && !self.state.features.sweat {
            self.sweat.reset();
        }
        self.state.features.sweat = enabled;
    }

    // Actions

    pub fn set_mood(&mut self, mood: Mood) {
        #[cfg(feature = "esp32-log")]
        println!("[eyes] mood -> {}", mood.as_str());
        self.state.set_mood(mood);
    }

    pub fn set_position(&mut self, position: Position) {
        let travel = self.travel();
        self.state.set_position(position, travel);
    }

    /// Look toward a named direction (`"ne"`, `"left"`, `"up"`, ...).
    ///
    /// Unknown names look straight ahead.
    pub fn look(&mut self, direction: &str) {
        self.set_position(direction.parse().unwrap_or_default());
    }

    pub const fn open(&mut self, left: bool, right: bool) {
        self.state
            .set_open_target(if left { Some(1.0) } else { None }, if right { Some(1.0) } else { None });
    }

    pub const fn close(&mut self, left: bool, right: bool) {
        self.state
            .set_open_target(if left { Some(0.0) } else { None }, if right { Some(0.0) } else { None });
    }

    /// Blink the selected eyes
    pub fn blink_eyes(&mut self, eyes: EyeSelection) {
        let now = self.clock.now();
        self.scheduler.start_blink(eyes, now);
    }

    pub fn blink(&mut self) {
        self.blink_eyes(EyeSelection::BOTH);
    }

    pub fn wink_left(&mut self) {
        self.blink_eyes(EyeSelection::LEFT);
    }

    pub fn wink_right(&mut self) {
        self.blink_eyes(EyeSelection::RIGHT);
    }

    /// Shake horizontally for `duration`
    pub fn anim_confused(&mut self, duration: Duration) {
        #[cfg(feature = "esp32-log")]
        println!("[eyes] confused for {} ms", duration.as_millis());
        let now = self.clock.now();
        self.scheduler.start_confused(duration, now);
    }

    /// Shake vertically for `duration`
    pub fn anim_laugh(&mut self, duration: Duration) {
        #[cfg(feature = "esp32-log")]
        println!("[eyes] laugh for {} ms", duration.as_millis());
        let now = self.clock.now();
        self.scheduler.start_laugh(duration, now);
    }

    /// Apply a single queued command
    pub fn apply(&mut self, command: EyeCommand) {
        match command {
            EyeCommand::SetMood(mood) => self.set_mood(mood),
            EyeCommand::SetPosition(position) => self.set_position(position),
            EyeCommand::Open(eyes) => self.open(eyes.left, eyes.right),
            EyeCommand::Close(eyes) => self.close(eyes.left, eyes.right),
            EyeCommand::Blink(eyes) => self.blink_eyes(eyes),
            EyeCommand::Confused(duration) => self.anim_confused(duration),
            EyeCommand::Laugh(duration) => self.anim_laugh(duration),
            EyeCommand::SetAutoBlink(config) => self.set_auto_blink_config(config),
            EyeCommand::SetIdleMode(config) => self.set_idle_config(config),
            EyeCommand::SetCyclops(enabled) => self.set_cyclops(enabled),
            EyeCommand::SetCuriosity(enabled) => self.set_curiosity(enabled),
            EyeCommand::SetHFlicker { enabled, amplitude } => self.set_h_flicker(enabled, amplitude),
            EyeCommand::SetVFlicker { enabled, amplitude } => self.set_v_flicker(enabled, amplitude),
            EyeCommand::SetSweat(enabled) => self.set_sweat(enabled),
            EyeCommand::SetColors { background, eye } => self.set_colors(background, eye),
            EyeCommand::SetFrameRate(fps) => self.set_frame_rate(fps),
        }
    }

    /// Drain the queue, applying commands in the order they were posted.
    ///
    /// Returns the number of commands applied.
    pub fn apply_pending<const N: usize>(&mut self, queue: &CommandQueue<N>) -> usize {
        let mut applied = 0;
        while let Some(command) = queue.take() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    // Inspection

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub const fn geometry(&self) -> &EyePair {
        &self.geometry
    }

    pub const fn eye(&self, side: Side) -> &crate::geometry::EyeGeometry {
        self.geometry.side(side)
    }

    pub const fn scheduler(&self) -> &BehaviorScheduler {
        &self.scheduler
    }

    pub const fn sweat(&self) -> &SweatDrops {
        &self.sweat
    }

    /// Shapes drawn in the last frame
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &Frame<W, H> {
        &self.frame
    }

    pub const fn palette(&self) -> Palette {
        self.renderer.palette()
    }

    pub const fn frame_interval(&self) -> Duration {
        self.governor.interval()
    }

    pub const fn space_between(&self) -> f32 {
        self.space_between
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub const fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
