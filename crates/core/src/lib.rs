//! Core engine module - pure, deterministic, and testable
//!
//! This crate contains the bounded-sprite animation engine: sprite pool
//! reconciliation, boundary containment, and per-tick motion. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical sprite fields
//! - **Testable**: motion is stepped synchronously, no frame clock required
//! - **Portable**: drivable from a terminal, a GUI host, or headless
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG, the injectable random source for spawns
//! - [`sprite`]: sprite data records and bounding-box probe points
//! - [`boundary`]: the containment seam (rectangular walls or a shape mask)
//! - [`pool`]: create/destroy reconciliation toward a derived target count
//! - [`motion`]: per-step advance and bounce resolution
//! - [`engine`]: lifecycle, region tracking, fixed-timestep scheduling
//! - [`snapshot`]: allocation-free observation surface for renderers
//!
//! # Example
//!
//! ```
//! use tui_bounce_core::{Bounds, Engine};
//! use tui_bounce_types::{EngineConfig, Region};
//!
//! let mut engine = Engine::new(12345, EngineConfig::default(), Bounds::Walls);
//! engine.set_region(Region::new(400.0, 300.0));
//! engine.set_quantity(784);
//! engine.start();
//!
//! // One fixed step; sprites advance and bounce off the walls.
//! engine.step();
//! assert_eq!(engine.sprites().len(), engine.target());
//! ```

pub mod boundary;
pub mod engine;
pub mod motion;
pub mod pool;
pub mod rng;
pub mod snapshot;
pub mod sprite;

pub use boundary::{Boundary, WallBounds};
pub use engine::{Bounds, Engine};
pub use pool::SpritePool;
pub use rng::SimpleRng;
pub use snapshot::{EngineSnapshot, SpriteSnapshot};
pub use sprite::{probe_points, Sprite, SpriteId};
