//! Motion module - per-step advance and bounce resolution
//!
//! Each fixed step a sprite moves by its velocity, then the collision with the
//! region boundary is resolved. Axes are independent: a sprite can bounce
//! horizontally while still moving freely vertically.
//!
//! Rectangular mode clamps analytically. Shape mode cannot (the boundary is an
//! arbitrary raster), so it bisects along the displacement for the longest
//! sub-step that keeps the full bounding box in allowed space, then redirects
//! whichever axes could not continue - a slide along irregular walls rather
//! than a hard stop.

use tui_bounce_types::{Region, Vec2, BISECTION_STEPS};

use crate::boundary::Boundary;
use crate::sprite::Sprite;

/// Advance one sprite against rectangular walls.
///
/// Keeps the bounding box within `[inset, extent - inset]` on both axes,
/// negating the velocity component of any axis that hits a wall.
pub fn step_walls(s: &mut Sprite, region: Region, inset: f32) {
    if region.is_degenerate() {
        return;
    }

    let mut x = s.pos.x + s.vel.x;
    let mut y = s.pos.y + s.vel.y;

    // Upper limits never drop below the inset line, so a region smaller than
    // the sprite pins it in place instead of producing a negative range.
    let hi_x = (region.width - inset - s.size).max(inset);
    let hi_y = (region.height - inset - s.size).max(inset);

    if x <= inset {
        x = inset;
        s.vel.x = -s.vel.x;
    }
    if x >= hi_x {
        x = hi_x;
        s.vel.x = -s.vel.x;
    }
    if y <= inset {
        y = inset;
        s.vel.y = -s.vel.y;
    }
    if y >= hi_y {
        y = hi_y;
        s.vel.y = -s.vel.y;
    }

    s.pos = Vec2::new(x, y);
}

/// Advance one sprite against an arbitrary shape boundary.
///
/// If the full displacement is valid it is taken outright. Otherwise a fixed
/// number of bisection iterations finds the longest valid fraction of the
/// step; the sprite advances by that fraction, and each axis that could not
/// continue on its own from the new position has its velocity negated.
///
/// A sprite already straddling disallowed space may not move at all; that is
/// the accepted degenerate case, not an error.
pub fn step_shaped(s: &mut Sprite, boundary: &dyn Boundary) {
    let disp = s.vel;
    let candidate = s.pos + disp;

    if boundary.allows_box(candidate, s.size) {
        s.pos = candidate;
        return;
    }

    // Longest valid fraction of the step, by bisection. `lo` only ever holds
    // fractions whose destination tested valid, so advancing by it is safe.
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if boundary.allows_box(s.pos + disp.scaled(mid), s.size) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    if lo > 0.0 {
        s.pos = s.pos + disp.scaled(lo);
    }

    // Redirect per axis: whichever single-axis continuation is blocked
    // reverses, letting the sprite slide along the boundary on the other.
    if !boundary.allows_box(Vec2::new(s.pos.x + disp.x, s.pos.y), s.size) {
        s.vel.x = -s.vel.x;
    }
    if !boundary.allows_box(Vec2::new(s.pos.x, s.pos.y + disp.y), s.size) {
        s.vel.y = -s.vel.y;
    }
}
