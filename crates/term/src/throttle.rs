//! Render throttling for static scenes.
//!
//! While the engine is running every frame differs, so every frame renders.
//! A stopped engine produces identical snapshots; re-flushing them at the
//! full frame rate would burn terminal writes for nothing.

use tui_bounce_core::EngineSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change,
    ///   otherwise at most once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        if !self.has_rendered {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if !is_static || fingerprint != self.last_fingerprint {
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }
}

/// A cheap content fingerprint of a snapshot (FNV-1a over the moving parts).
pub fn snapshot_fingerprint(snap: &EngineSnapshot) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    let mut mix = |v: u64| {
        h ^= v;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    };

    mix(snap.tick_id);
    mix(snap.quantity);
    mix(snap.target as u64);
    mix(snap.region.width.to_bits() as u64);
    mix(snap.region.height.to_bits() as u64);
    mix(u64::from(snap.running));
    mix(u64::from(snap.bounds_ready));
    for s in &snap.sprites {
        mix(u64::from(s.id));
        mix(u64::from(s.x.to_bits()));
        mix(u64::from(s.y.to_bits()));
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bounce_core::SpriteSnapshot;

    #[test]
    fn first_frame_always_renders() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, true));
    }

    #[test]
    fn static_frames_render_on_change() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, true));
        assert!(t.should_render(1, 2, true));
    }

    #[test]
    fn static_frames_throttle_when_unchanged() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, true));
        assert!(!t.should_render(10, 1, true));
        assert!(!t.should_render(249, 1, true));
        assert!(t.should_render(250, 1, true));
    }

    #[test]
    fn dynamic_frames_always_render() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, false));
        assert!(t.should_render(1, 1, false));
        assert!(t.should_render(2, 1, false));
    }

    #[test]
    fn fingerprint_tracks_sprite_motion() {
        let mut a = EngineSnapshot::default();
        a.sprites.push(SpriteSnapshot {
            id: 0,
            x: 1.0,
            y: 2.0,
            size: 3.0,
        });
        let mut b = a.clone();

        assert_eq!(snapshot_fingerprint(&a), snapshot_fingerprint(&b));
        b.sprites[0].x = 1.5;
        assert_ne!(snapshot_fingerprint(&a), snapshot_fingerprint(&b));
        a.tick_id = 1;
        assert_ne!(snapshot_fingerprint(&a), snapshot_fingerprint(&b));
    }
}
