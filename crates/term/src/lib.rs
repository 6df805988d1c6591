//! Terminal front end for the sprite engine.
//!
//! This is a small, game-style rendering layer: the scene is drawn into a
//! plain framebuffer of styled character cells and flushed to the terminal
//! with changed-run diffing. No widget/layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view is pure, no I/O)
//! - One glyph block per sprite, keyed by stable sprite id
//! - Cheap static frames: a throttle skips redraws while the engine is
//!   stopped and nothing changed

pub mod fmt;
pub mod frame;
pub mod screen;
pub mod throttle;
pub mod view;

pub use tui_bounce_core as core;
pub use tui_bounce_types as types;

pub use fmt::format_grouped;
pub use frame::{Cell, Frame, Rgb, Style};
pub use screen::Screen;
pub use throttle::{snapshot_fingerprint, RenderThrottle};
pub use view::{SceneView, Viewport, HUD_WIDTH};
