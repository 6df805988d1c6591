//! Off-screen alpha raster - the hit-test surface
//!
//! A flat row-major byte buffer of alpha values at `region x scale` device
//! pixels. Built once per rebuild trigger, read-only afterwards.

use tui_bounce_types::{Region, Vec2};

#[derive(Debug, Clone)]
pub struct AlphaRaster {
    width: u32,
    height: u32,
    /// Device pixels per logical pixel.
    scale: f32,
    /// Row-major alpha bytes (y * width + x).
    data: Vec<u8>,
}

impl AlphaRaster {
    /// Allocate a zeroed raster covering `region` at the given scale.
    ///
    /// Extents are guarded to at least one device pixel so a transient
    /// zero-size frame cannot produce a degenerate buffer.
    pub fn new(region: Region, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        let width = ((region.width * scale).ceil() as u32).max(1);
        let height = ((region.height * scale).ceil() as u32).max(1);
        Self {
            width,
            height,
            scale,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write one device pixel. Out-of-range writes are dropped.
    pub fn set(&mut self, x: u32, y: u32, alpha: u8) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.data[idx] = alpha;
        }
    }

    /// Sample the alpha under a logical-space point.
    ///
    /// Coordinates are clamped to the raster bounds; anything unreadable
    /// (non-finite input) reads as 0, which callers treat as disallowed.
    pub fn sample(&self, p: Vec2) -> u8 {
        if !p.x.is_finite() || !p.y.is_finite() {
            return 0;
        }
        let x = ((p.x * self.scale) as i64).clamp(0, self.width as i64 - 1) as u32;
        let y = ((p.y * self.scale) as i64).clamp(0, self.height as i64 - 1) as u32;
        self.data[self.index(x, y)]
    }
}
