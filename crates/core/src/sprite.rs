//! Sprite module - the animated entity
//!
//! A sprite is a plain data record: the renderer maps the live collection to
//! visuals keyed by [`SpriteId`], so nothing here touches a display tree.

use tui_bounce_types::Vec2;

/// Stable sprite identifier.
///
/// Monotonic within one engine and never reused, so a retained-mode renderer
/// can key visual elements by it across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u32);

/// One bouncing visual entity.
///
/// `size` is the square side length, drawn once at creation and immutable.
/// `vel` is in pixels per fixed step; its magnitude is drawn once at creation
/// and only its sign changes afterwards (on bounces).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: SpriteId,
    /// Top-left corner of the bounding box.
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

/// The eight boundary test points of a sprite's bounding box at `pos`:
/// four corners and four edge midpoints.
pub fn probe_points(pos: Vec2, size: f32) -> [Vec2; 8] {
    let half = size * 0.5;
    [
        Vec2::new(pos.x, pos.y),
        Vec2::new(pos.x + size, pos.y),
        Vec2::new(pos.x, pos.y + size),
        Vec2::new(pos.x + size, pos.y + size),
        Vec2::new(pos.x + half, pos.y),
        Vec2::new(pos.x + half, pos.y + size),
        Vec2::new(pos.x, pos.y + half),
        Vec2::new(pos.x + size, pos.y + half),
    ]
}
