//! Display sinks and the presenter loop.

use core::convert::Infallible;

use rand::RngCore;

use crate::clock::Clock;
use crate::engine::RoboEyes;
use crate::frame::Frame;

/// Consumer of rendered frames (a panel driver or a test double)
pub trait DisplaySink<const W: usize, const H: usize> {
    type Error;

    /// Show a fully rendered frame
    fn show(&mut self, frame: &Frame<W, H>) -> Result<(), Self::Error>;

    /// Blank the display
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Set backlight brightness; values above 100 are treated as 100
    fn set_backlight(&mut self, percent: u8) -> Result<(), Self::Error>;

    /// Release hardware resources.
    ///
    /// Must be safe to call more than once.
    fn cleanup(&mut self);
}

/// Sink that discards everything, useful when no display is available
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<const W: usize, const H: usize> DisplaySink<W, H> for NullSink {
    type Error = Infallible;

    fn show(&mut self, _frame: &Frame<W, H>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_backlight(&mut self, _percent: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn cleanup(&mut self) {}
}

/// Sink that keeps the last frame in memory
#[derive(Debug, Clone)]
pub struct MemorySink<const W: usize, const H: usize> {
    last_frame: Option<Frame<W, H>>,
    frame_count: u32,
    backlight: u8,
    cleanups: u32,
}

impl<const W: usize, const H: usize> MemorySink<W, H> {
    pub const fn new() -> Self {
        Self {
            last_frame: None,
            frame_count: 0,
            backlight: 100,
            cleanups: 0,
        }
    }

    pub const fn last_frame(&self) -> Option<&Frame<W, H>> {
        self.last_frame.as_ref()
    }

    /// Number of frames shown so far
    pub const fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub const fn backlight(&self) -> u8 {
        self.backlight
    }

    /// Number of times [`DisplaySink::cleanup`] ran
    pub const fn cleanups(&self) -> u32 {
        self.cleanups
    }
}

impl<const W: usize, const H: usize> Default for MemorySink<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> DisplaySink<W, H> for MemorySink<W, H> {
    type Error = Infallible;

    fn show(&mut self, frame: &Frame<W, H>) -> Result<(), Self::Error> {
        match &mut self.last_frame {
            Some(last) => last.clone_from(frame),
            None => self.last_frame = Some(frame.clone()),
        }
        self.frame_count = self.frame_count.wrapping_add(1);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.last_frame = None;
        Ok(())
    }

    fn set_backlight(&mut self, percent: u8) -> Result<(), Self::Error> {
        self.backlight = percent.min(100);
        Ok(())
    }

    fn cleanup(&mut self) {
        self.cleanups = self.cleanups.wrapping_add(1);
    }
}

/// Drives an engine and hands every frame to a sink.
///
/// The sink is cleaned up when the presenter is dropped.
pub struct Presenter<S, C, R, const W: usize, const H: usize>
where
    S: DisplaySink<W, H>,
    C: Clock,
    R: RngCore,
{
    eyes: RoboEyes<C, R, W, H>,
    sink: S,
}

impl<S, C, R, const W: usize, const H: usize> Presenter<S, C, R, W, H>
where
    S: DisplaySink<W, H>,
    C: Clock,
    R: RngCore,
{
    pub const fn new(eyes: RoboEyes<C, R, W, H>, sink: S) -> Self {
        Self { eyes, sink }
    }

    /// Render one paced frame and show it
    pub fn tick(&mut self) -> Result<(), S::Error> {
        let frame = self.eyes.update();
        self.sink.show(frame)
    }

    pub const fn eyes(&self) -> &RoboEyes<C, R, W, H> {
        &self.eyes
    }

    pub const fn eyes_mut(&mut self) -> &mut RoboEyes<C, R, W, H> {
        &mut self.eyes
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the sink now; dropping the presenter releases it again
    pub fn cleanup(&mut self) {
        self.sink.cleanup();
    }
}

impl<S, C, R, const W: usize, const H: usize> Drop for Presenter<S, C, R, W, H>
where
    S: DisplaySink<W, H>,
    C: Clock,
    R: RngCore,
{
    fn drop(&mut self) {
        self.sink.cleanup();
    }
}
