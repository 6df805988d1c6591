//! Bounded sprite bounce animation (workspace facade crate).
//!
//! This package keeps the `tui_bounce::{core,mask,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_bounce_core as core;
pub use tui_bounce_mask as mask;
pub use tui_bounce_term as term;
pub use tui_bounce_types as types;
