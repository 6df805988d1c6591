//! Snapshot module - observation surface for renderers and tests
//!
//! Snapshots are plain copies sized to [`MAX_SPRITES`], so a driver can keep
//! one buffer and refill it every frame without allocating.

use arrayvec::ArrayVec;
use tui_bounce_types::{Region, MAX_SPRITES};

/// One sprite's renderable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// The engine's full renderable state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineSnapshot {
    pub region: Region,
    pub sprites: ArrayVec<SpriteSnapshot, MAX_SPRITES>,
    pub quantity: u64,
    pub target: usize,
    pub seed: u32,
    pub tick_id: u64,
    pub running: bool,
    pub bounds_ready: bool,
    pub shaped: bool,
}

impl EngineSnapshot {
    pub fn clear(&mut self) {
        self.region = Region::ZERO;
        self.sprites.clear();
        self.quantity = 0;
        self.target = 0;
        self.seed = 0;
        self.tick_id = 0;
        self.running = false;
        self.bounds_ready = false;
        self.shaped = false;
    }
}
