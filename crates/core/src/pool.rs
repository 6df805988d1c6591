//! Pool module - keeps the live sprite collection at its target count
//!
//! The pool exclusively owns every sprite for its lifetime. Reconciliation
//! creates or destroys the minimum number of sprites needed; it never replaces
//! existing ones. Sprites are visually interchangeable, so excess is always
//! removed from the end.

use tracing::{debug, trace};
use tui_bounce_types::{EngineConfig, Region, Vec2, FALLBACK_ZONE_X, FALLBACK_ZONE_Y};

use crate::boundary::Boundary;
use crate::rng::SimpleRng;
use crate::sprite::{Sprite, SpriteId};

/// The live sprite collection.
#[derive(Debug, Default)]
pub struct SpritePool {
    sprites: Vec<Sprite>,
    next_id: u32,
}

impl SpritePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Mutable access for the motion stepper, which advances positions and
    /// velocities in place but never creates or destroys sprites.
    pub fn sprites_mut(&mut self) -> &mut [Sprite] {
        &mut self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Reconcile the live count toward `target`.
    ///
    /// Spawning is deferred entirely while the boundary is not ready, so no
    /// sprite is ever placed into unvalidated space. Removal still applies.
    /// Re-running with an unchanged target is a no-op.
    pub fn reconcile(
        &mut self,
        target: usize,
        region: Region,
        boundary: &dyn Boundary,
        rng: &mut SimpleRng,
        cfg: &EngineConfig,
    ) {
        let before = self.sprites.len();

        while self.sprites.len() > target {
            self.sprites.pop();
        }

        if boundary.is_ready() {
            while self.sprites.len() < target {
                let sprite = self.spawn_one(region, boundary, rng, cfg);
                self.sprites.push(sprite);
            }
        } else if self.sprites.len() < target {
            debug!(
                have = self.sprites.len(),
                target, "boundary not ready; spawn deferred"
            );
        }

        if self.sprites.len() != before {
            trace!(before, after = self.sprites.len(), target, "pool reconciled");
        }
    }

    /// Create one sprite at a valid position.
    ///
    /// Tries up to `cfg.spawn_attempts` random placements; on exhaustion it
    /// falls back to the fixed interior zone so the spawn always succeeds.
    fn spawn_one(
        &mut self,
        region: Region,
        boundary: &dyn Boundary,
        rng: &mut SimpleRng,
        cfg: &EngineConfig,
    ) -> Sprite {
        let size = rng.range_f32(cfg.size_min, cfg.size_max);

        let mut pos = None;
        for _ in 0..cfg.spawn_attempts {
            let candidate = Vec2::new(
                rng.next_f32() * (region.width - size).max(1.0),
                rng.next_f32() * (region.height - size).max(1.0),
            );
            if boundary.allows_box(candidate, size) {
                pos = Some(candidate);
                break;
            }
        }

        let pos = pos.unwrap_or_else(|| {
            debug!(size, "placement attempts exhausted; using fallback zone");
            fallback_position(region, size, rng)
        });

        let vel = Vec2::new(
            rng.range_f32(cfg.speed_min, cfg.speed_max) * rng.next_sign(),
            rng.range_f32(cfg.speed_min, cfg.speed_max) * rng.next_sign(),
        );

        let id = SpriteId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        Sprite {
            id,
            pos,
            vel,
            size,
        }
    }
}

/// A random position inside the fixed central fallback zone.
pub fn fallback_position(region: Region, size: f32, rng: &mut SimpleRng) -> Vec2 {
    let (fx0, fx1) = FALLBACK_ZONE_X;
    let (fy0, fy1) = FALLBACK_ZONE_Y;
    let x0 = region.width * fx0;
    let y0 = region.height * fy0;
    let span_x = (region.width * (fx1 - fx0) - size).max(1.0);
    let span_y = (region.height * (fy1 - fy0) - size).max(1.0);
    Vec2::new(x0 + rng.next_f32() * span_x, y0 + rng.next_f32() * span_y)
}
