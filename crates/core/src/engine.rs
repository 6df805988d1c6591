//! Engine module - lifecycle, region tracking, and scheduling
//!
//! One [`Engine`] instance owns the region, the rng, the sprite pool, and the
//! boundary for the lifetime of one mount. Nothing is shared across
//! instances and there is no global registry.
//!
//! The driver owns the clock: it reports elapsed wall time through
//! [`Engine::advance`], which converts it into fixed [`TICK_MS`] steps. Tests
//! skip the clock entirely and call [`Engine::step`] directly.

use tracing::debug;
use tui_bounce_types::{target_count, EngineConfig, Region, TICK_MS};

use crate::boundary::{Boundary, WallBounds};
use crate::motion;
use crate::pool::SpritePool;
use crate::rng::SimpleRng;
use crate::snapshot::{EngineSnapshot, SpriteSnapshot};
use crate::sprite::Sprite;

/// The containment mode, fixed for the lifetime of one engine.
pub enum Bounds {
    /// Plain rectangle inset by `EngineConfig::wall_inset`.
    Walls,
    /// An arbitrary shape, e.g. a rasterized alpha mask.
    Shaped(Box<dyn Boundary>),
}

/// The bounded-sprite animation engine.
pub struct Engine {
    cfg: EngineConfig,
    bounds: Bounds,
    region: Region,
    rng: SimpleRng,
    seed: u32,
    pool: SpritePool,
    quantity: u64,
    target: usize,
    running: bool,
    tick_id: u64,
    accum_ms: u32,
}

impl Engine {
    pub fn new(seed: u32, cfg: EngineConfig, bounds: Bounds) -> Self {
        Self {
            cfg,
            bounds,
            region: Region::ZERO,
            rng: SimpleRng::new(seed),
            seed,
            pool: SpritePool::new(),
            quantity: 0,
            target: 0,
            running: false,
            tick_id: 0,
            accum_ms: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    pub fn sprites(&self) -> &[Sprite] {
        self.pool.sprites()
    }

    /// Whether the boundary can be queried yet. Always true in walls mode.
    pub fn bounds_ready(&self) -> bool {
        match &self.bounds {
            Bounds::Walls => true,
            Bounds::Shaped(b) => b.is_ready(),
        }
    }

    /// The shape boundary, if any, for renderers that sample it.
    pub fn shape_probe(&self) -> Option<&dyn Boundary> {
        match &self.bounds {
            Bounds::Walls => None,
            Bounds::Shaped(b) => Some(&**b),
        }
    }

    /// Update the measured host size.
    ///
    /// The driver calls this once synchronously at attach (so the first frame
    /// is not zero-sized) and again on every resize event. The new region is
    /// forwarded to the boundary's rebuild hook, then the pool is eagerly
    /// re-reconciled. Idempotent for an unchanged region.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
        if let Bounds::Shaped(b) = &mut self.bounds {
            b.region_changed(region);
        }
        self.reconcile();
    }

    /// Update the input quantity the sprite count is derived from.
    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
        let target = target_count(quantity, &self.cfg);
        if target != self.target {
            debug!(quantity, target, "target count changed");
        }
        self.target = target;
        self.reconcile();
    }

    /// Swap in a new boundary (e.g. once a shape image has finished loading)
    /// and reconcile against it.
    pub fn replace_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if let Bounds::Shaped(b) = &mut self.bounds {
            b.region_changed(self.region);
        }
        self.reconcile();
    }

    /// Bring the live sprite count to the current target.
    pub fn reconcile(&mut self) {
        match &self.bounds {
            Bounds::Walls => {
                let walls = WallBounds::new(self.region, self.cfg.wall_inset);
                self.pool
                    .reconcile(self.target, self.region, &walls, &mut self.rng, &self.cfg);
            }
            Bounds::Shaped(b) => {
                self.pool
                    .reconcile(self.target, self.region, &**b, &mut self.rng, &self.cfg);
            }
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop stepping. After this, [`advance`](Self::advance) and
    /// [`step`](Self::step) are no-ops no matter how many driver callbacks
    /// still fire - the teardown contract.
    pub fn stop(&mut self) {
        self.running = false;
        self.accum_ms = 0;
    }

    /// Convert elapsed wall time into fixed steps.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if !self.running {
            return;
        }
        self.accum_ms = self.accum_ms.saturating_add(elapsed_ms);
        while self.accum_ms >= TICK_MS {
            self.accum_ms -= TICK_MS;
            self.step_once();
        }
    }

    /// One fixed motion step over all sprites, in collection order.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }
        self.step_once();
    }

    fn step_once(&mut self) {
        self.tick_id = self.tick_id.wrapping_add(1);
        match &self.bounds {
            Bounds::Walls => {
                let region = self.region;
                let inset = self.cfg.wall_inset;
                for s in self.pool.sprites_mut() {
                    motion::step_walls(s, region, inset);
                }
            }
            Bounds::Shaped(b) => {
                // An unready shape freezes motion; positions validated against
                // an older raster must not drift through unvalidated space.
                if !b.is_ready() {
                    return;
                }
                let boundary: &dyn Boundary = &**b;
                for s in self.pool.sprites_mut() {
                    motion::step_shaped(s, boundary);
                }
            }
        }
    }

    /// Allocation-free snapshot export.
    pub fn snapshot_into(&self, out: &mut EngineSnapshot) {
        out.region = self.region;
        out.sprites.clear();
        for s in self.pool.sprites() {
            if out.sprites.is_full() {
                break;
            }
            out.sprites.push(SpriteSnapshot {
                id: s.id.0,
                x: s.pos.x,
                y: s.pos.y,
                size: s.size,
            });
        }
        out.quantity = self.quantity;
        out.target = self.target;
        out.seed = self.seed;
        out.tick_id = self.tick_id;
        out.running = self.running;
        out.bounds_ready = self.bounds_ready();
        out.shaped = matches!(self.bounds, Bounds::Shaped(_));
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let mut s = EngineSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bounce_types::Vec2;

    fn walls_engine() -> Engine {
        let mut engine = Engine::new(12345, EngineConfig::default(), Bounds::Walls);
        engine.set_region(Region::new(400.0, 300.0));
        engine
    }

    #[test]
    fn quantity_drives_pool_size() {
        let mut engine = walls_engine();

        engine.set_quantity(784);
        assert_eq!(engine.target(), 28);
        assert_eq!(engine.sprites().len(), 28);

        engine.set_quantity(0);
        assert_eq!(engine.sprites().len(), engine.config().min_sprites);

        engine.set_quantity(u64::MAX / 2);
        assert_eq!(engine.sprites().len(), engine.config().max_sprites);
    }

    #[test]
    fn step_requires_start() {
        let mut engine = walls_engine();
        engine.set_quantity(280);

        let before = engine.snapshot();
        engine.step();
        engine.advance(1000);
        assert_eq!(engine.snapshot(), before);

        engine.start();
        engine.step();
        assert_ne!(engine.snapshot(), before);
    }

    #[test]
    fn stop_freezes_the_snapshot() {
        let mut engine = walls_engine();
        engine.set_quantity(280);
        engine.start();
        engine.advance(160);

        engine.stop();
        let frozen = engine.snapshot();
        for _ in 0..50 {
            engine.advance(16);
            engine.step();
        }
        assert_eq!(engine.snapshot(), frozen);
    }

    #[test]
    fn advance_accumulates_fixed_steps() {
        let mut engine = walls_engine();
        engine.set_quantity(280);
        engine.start();

        // Two half-ticks make one step.
        engine.advance(8);
        assert_eq!(engine.tick_id(), 0);
        engine.advance(8);
        assert_eq!(engine.tick_id(), 1);

        // A long frame catches up with multiple steps.
        engine.advance(TICK_MS * 5);
        assert_eq!(engine.tick_id(), 6);
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = walls_engine();
        let mut b = walls_engine();
        a.set_quantity(784);
        b.set_quantity(784);
        a.start();
        b.start();
        for _ in 0..100 {
            a.step();
            b.step();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn walls_containment_after_every_step() {
        let mut engine = walls_engine();
        engine.set_quantity(u64::MAX / 2); // max sprites
        engine.start();

        let region = engine.region();
        let inset = engine.config().wall_inset;
        for _ in 0..1000 {
            engine.step();
            for s in engine.sprites() {
                assert!(s.pos.x >= inset && s.pos.x + s.size <= region.width - inset);
                assert!(s.pos.y >= inset && s.pos.y + s.size <= region.height - inset);
            }
        }
    }

    #[test]
    fn snapshot_reports_mode_and_readiness() {
        let engine = walls_engine();
        let snap = engine.snapshot();
        assert!(!snap.shaped);
        assert!(snap.bounds_ready);
        assert_eq!(snap.region, Region::new(400.0, 300.0));
    }

    #[test]
    fn shrinking_region_is_survived() {
        let mut engine = walls_engine();
        engine.set_quantity(784);
        engine.start();
        engine.step();

        // Shrink below the sprite field; stepping must not panic and sprites
        // get pulled back inside within a step.
        engine.set_region(Region::new(60.0, 50.0));
        for _ in 0..10 {
            engine.step();
        }
        for s in engine.sprites() {
            assert!(s.pos.x.is_finite() && s.pos.y.is_finite());
        }
    }

    struct HalfPlane {
        ready: bool,
    }

    impl Boundary for HalfPlane {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn allows(&self, p: Vec2) -> bool {
            self.ready && p.x >= 0.0 && p.x <= 150.0 && p.y >= 0.0 && p.y <= 300.0
        }
    }

    #[test]
    fn unready_shape_defers_spawn_and_freezes_motion() {
        let mut engine = Engine::new(
            7,
            EngineConfig::default(),
            Bounds::Shaped(Box::new(HalfPlane { ready: false })),
        );
        engine.set_region(Region::new(400.0, 300.0));
        engine.set_quantity(784);
        assert_eq!(engine.sprites().len(), 0, "no spawns into unvalidated space");

        engine.start();
        engine.step();
        assert_eq!(engine.tick_id(), 1);
        assert_eq!(engine.sprites().len(), 0);
    }

    #[test]
    fn replacing_with_a_ready_shape_spawns() {
        let mut engine = Engine::new(
            7,
            EngineConfig::default(),
            Bounds::Shaped(Box::new(HalfPlane { ready: false })),
        );
        engine.set_region(Region::new(400.0, 300.0));
        engine.set_quantity(784);
        assert_eq!(engine.sprites().len(), 0);

        engine.replace_bounds(Bounds::Shaped(Box::new(HalfPlane { ready: true })));
        assert_eq!(engine.sprites().len(), 28);

        // All placements honor the shape.
        for s in engine.sprites() {
            assert!(s.pos.x + s.size <= 150.0);
        }
    }
}
