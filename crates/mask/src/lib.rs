//! Mask module - rasterized shape containment
//!
//! Turns a source shape image into a queryable "is this point allowed"
//! surface: the image's alpha channel is rasterized into an off-screen buffer
//! sized to the current region, and the motion stepper's boundary test becomes
//! a per-pixel alpha lookup instead of a rectangle check.
//!
//! All queries fail closed: a point the raster cannot account for is
//! disallowed, so a missing or still-loading source image simply means "no
//! valid space" (and therefore no spawns), never a crash.

pub mod error;
pub mod raster;
pub mod shape;
pub mod shapes;

pub use error::MaskError;
pub use raster::AlphaRaster;
pub use shape::{load_shape, ShapeMask};
