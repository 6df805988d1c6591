//! Procedural source shapes.
//!
//! The demo and the tests need shape images without shipping asset files.
//! Alpha is binary (0 or 255); anti-aliasing would be lost on the threshold
//! test anyway.

use image::RgbaImage;

/// A tapered vessel silhouette: near-full width at the rim, narrowing toward
/// a flat bottom, with a thin transparent margin all around.
pub fn vessel(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let w = width as f32;
    let h = height as f32;

    for y in 0..height {
        let t = (y as f32 + 0.5) / h;
        if !(0.01..0.97).contains(&t) {
            continue;
        }
        let left = w * (0.03 + 0.06 * t);
        let right = w * (0.97 - 0.06 * t);
        for x in 0..width {
            let cx = x as f32 + 0.5;
            if cx >= left && cx <= right {
                img.get_pixel_mut(x, y).0 = [255, 255, 255, 255];
            }
        }
    }

    img
}

/// A fully opaque sheet: every point inside the drawn rect is allowed.
pub fn solid(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for p in img.pixels_mut() {
        p.0 = [255, 255, 255, 255];
    }
    img
}

/// A fully transparent sheet: nothing is allowed anywhere.
pub fn transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}
