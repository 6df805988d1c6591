//! Shape mask - a Boundary backed by a rasterized source image
//!
//! The source shape is authored against a logical viewbox (like a vector
//! asset's canvas). On every rebuild the source's alpha channel is resampled
//! into an [`AlphaRaster`] covering the current region, drawn inside the
//! configured per-edge insets. Rebuild triggers: the source arriving, the
//! region changing, the insets changing.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;
use tui_bounce_core::Boundary;
use tui_bounce_types::{EdgeInsets, MaskConfig, Region, Vec2};

use crate::error::MaskError;
use crate::raster::AlphaRaster;

/// Decode a shape image file into the RGBA source the mask samples.
pub fn load_shape(path: impl AsRef<Path>) -> Result<RgbaImage, MaskError> {
    let img = image::open(path)?.to_rgba8();
    if img.width() == 0 || img.height() == 0 {
        return Err(MaskError::EmptySource);
    }
    Ok(img)
}

/// An irregular allowed-region boundary, hit-tested through an alpha raster.
///
/// Constructed sourceless, the mask reports not-ready until both a source
/// image and a non-degenerate region have produced a raster; the pool defers
/// all spawning until then.
pub struct ShapeMask {
    cfg: MaskConfig,
    region: Region,
    source: Option<RgbaImage>,
    raster: Option<AlphaRaster>,
}

impl ShapeMask {
    pub fn new(cfg: MaskConfig) -> Self {
        Self {
            cfg,
            region: Region::ZERO,
            source: None,
            raster: None,
        }
    }

    pub fn with_source(cfg: MaskConfig, source: RgbaImage) -> Self {
        let mut mask = Self::new(cfg);
        mask.set_source(source);
        mask
    }

    pub fn config(&self) -> &MaskConfig {
        &self.cfg
    }

    /// Deliver the decoded source image (the load-completion event).
    pub fn set_source(&mut self, source: RgbaImage) {
        self.source = Some(source);
        self.rebuild();
    }

    pub fn set_insets(&mut self, insets: EdgeInsets) {
        if self.cfg.insets != insets {
            self.cfg.insets = insets;
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let Some(source) = &self.source else {
            self.raster = None;
            return;
        };
        if self.region.is_degenerate() {
            self.raster = None;
            return;
        }

        let region = self.region;
        let mut raster = AlphaRaster::new(region, self.cfg.raster_scale);
        let scale = raster.scale();

        // Logical px -> viewbox units.
        let vb_per_lx = self.cfg.viewbox_w / region.width;
        let vb_per_ly = self.cfg.viewbox_h / region.height;

        // Insets are configured in logical px; the shape is drawn inside them.
        let left = self.cfg.insets.left * vb_per_lx;
        let right = self.cfg.viewbox_w - self.cfg.insets.right * vb_per_lx;
        let top = self.cfg.insets.top * vb_per_ly;
        let bottom = self.cfg.viewbox_h - self.cfg.insets.bottom * vb_per_ly;
        let draw_w = right - left;
        let draw_h = bottom - top;

        if draw_w > 0.0 && draw_h > 0.0 {
            let src_w = source.width();
            let src_h = source.height();
            for dy in 0..raster.height() {
                let ly = (dy as f32 + 0.5) / scale;
                let vy = ly * vb_per_ly;
                for dx in 0..raster.width() {
                    let lx = (dx as f32 + 0.5) / scale;
                    let vx = lx * vb_per_lx;

                    // Nearest-neighbor sample of the source alpha; pixels
                    // outside the drawn rect stay transparent.
                    let u = (vx - left) / draw_w;
                    let v = (vy - top) / draw_h;
                    if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                        continue;
                    }
                    let sx = ((u * src_w as f32) as u32).min(src_w - 1);
                    let sy = ((v * src_h as f32) as u32).min(src_h - 1);
                    let alpha = source.get_pixel(sx, sy).0[3];
                    if alpha > 0 {
                        raster.set(dx, dy, alpha);
                    }
                }
            }
        }

        debug!(
            width = raster.width(),
            height = raster.height(),
            "shape mask rebuilt"
        );
        self.raster = Some(raster);
    }
}

impl Boundary for ShapeMask {
    fn is_ready(&self) -> bool {
        self.raster.is_some()
    }

    fn allows(&self, p: Vec2) -> bool {
        match &self.raster {
            Some(raster) => raster.sample(p) > self.cfg.alpha_threshold,
            None => false,
        }
    }

    fn region_changed(&mut self, region: Region) {
        if region != self.region {
            self.region = region;
            self.rebuild();
        }
    }
}
