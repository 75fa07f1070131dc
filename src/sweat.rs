//! Falling sweat drops.

use rand::{Rng, RngCore};

/// Number of drops animated at once
pub const DROP_COUNT: usize = 3;

/// Pixels a drop falls per frame
const FALL_SPEED: f32 = 1.5;

/// Distance after which a drop restarts from the top
const FALL_LIMIT: f32 = 50.0;

/// Upper bound of the randomized restart offset
const RESTART_SPREAD: f32 = 10.0;

const START_OFFSETS: [f32; DROP_COUNT] = [0.0, 5.0, 10.0];
const START_SIZES: [f32; DROP_COUNT] = [1.0, 0.8, 0.6];

/// A single drop: fall distance and size multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweatDrop {
    pub offset: f32,
    pub size: f32,
}

/// Animation state of all drops
#[derive(Debug, Clone)]
pub struct SweatDrops {
    drops: [SweatDrop; DROP_COUNT],
}

impl SweatDrops {
    pub fn new() -> Self {
        let mut drops = Self {
            drops: [SweatDrop {
                offset: 0.0,
                size: 1.0,
            }; DROP_COUNT],
        };
        drops.reset();
        drops
    }

    /// Put the drops back at their staggered start
    pub fn reset(&mut self) {
        for (drop, (offset, size)) in self
            .drops
            .iter_mut()
            .zip(START_OFFSETS.into_iter().zip(START_SIZES))
        {
            drop.offset = offset;
            drop.size = size;
        }
    }

    pub fn drops(&self) -> &[SweatDrop] {
        &self.drops
    }

    /// Advance one frame. Drops shrink while falling and loop back once they
    /// pass the travel limit.
    pub fn tick(&mut self, rng: &mut impl RngCore) {
        for drop in &mut self.drops {
            drop.offset += FALL_SPEED;
            drop.size = 1.0 - (drop.offset / FALL_LIMIT) * 0.5;
            if drop.offset > FALL_LIMIT {
                drop.offset = rng.gen_range(0.0..RESTART_SPREAD);
                drop.size = 1.0;
            }
        }
    }
}

impl Default for SweatDrops {
    fn default() -> Self {
        Self::new()
    }
}
