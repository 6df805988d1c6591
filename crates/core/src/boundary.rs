//! Boundary module - the containment seam
//!
//! The motion stepper and the pool's placement search both ask one question:
//! "may a sprite's bounding box rest here?". [`Boundary`] answers it for the
//! plain rectangular mode ([`WallBounds`]) and for the rasterized shape mask
//! (implemented in the mask crate).

use tui_bounce_types::{Region, Vec2};

use crate::sprite::probe_points;

/// A queryable "is this allowed space" surface.
///
/// Implementations fail closed: any point they cannot account for is
/// disallowed.
pub trait Boundary {
    /// False while an asynchronous source (e.g. a shape image still loading)
    /// has not produced a queryable surface. Spawning is deferred entirely
    /// until this turns true.
    fn is_ready(&self) -> bool {
        true
    }

    /// Point test in region-local logical coordinates.
    fn allows(&self, p: Vec2) -> bool;

    /// Bounding-box test: all eight probe points must be allowed.
    fn allows_box(&self, pos: Vec2, size: f32) -> bool {
        probe_points(pos, size).iter().all(|&p| self.allows(p))
    }

    /// Rebuild hook, invoked whenever the host region changes.
    fn region_changed(&mut self, _region: Region) {}
}

/// Rectangular containment: `[inset, width-inset] x [inset, height-inset]`.
#[derive(Debug, Clone, Copy)]
pub struct WallBounds {
    pub region: Region,
    pub inset: f32,
}

impl WallBounds {
    pub fn new(region: Region, inset: f32) -> Self {
        Self { region, inset }
    }
}

impl Boundary for WallBounds {
    fn allows(&self, p: Vec2) -> bool {
        if self.region.is_degenerate() {
            return false;
        }
        p.x >= self.inset
            && p.x <= self.region.width - self.inset
            && p.y >= self.inset
            && p.y <= self.region.height - self.inset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_allow_interior_points() {
        let walls = WallBounds::new(Region::new(100.0, 80.0), 8.0);
        assert!(walls.allows(Vec2::new(50.0, 40.0)));
        assert!(walls.allows(Vec2::new(8.0, 8.0)));
        assert!(walls.allows(Vec2::new(92.0, 72.0)));
    }

    #[test]
    fn walls_reject_points_inside_inset() {
        let walls = WallBounds::new(Region::new(100.0, 80.0), 8.0);
        assert!(!walls.allows(Vec2::new(7.9, 40.0)));
        assert!(!walls.allows(Vec2::new(50.0, 79.0)));
        assert!(!walls.allows(Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn walls_box_test_uses_full_extent() {
        let walls = WallBounds::new(Region::new(100.0, 80.0), 8.0);
        // A box whose far corner crosses the inset line is rejected even
        // though its origin is fine.
        assert!(walls.allows_box(Vec2::new(50.0, 40.0), 10.0));
        assert!(!walls.allows_box(Vec2::new(85.0, 40.0), 10.0));
    }

    #[test]
    fn degenerate_region_allows_nothing() {
        let walls = WallBounds::new(Region::ZERO, 8.0);
        assert!(!walls.allows(Vec2::new(0.0, 0.0)));
        assert!(walls.is_ready());
    }
}
