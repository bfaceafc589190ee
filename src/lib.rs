//! TUI Snake (workspace facade crate).
//!
//! Re-exports the simulation crates under `tui_snake::{core,types}` and adds
//! the reference driver pieces: an [`autopilot`] that steers the snake and a
//! headless [`runner`] used by the `tui-snake` binary.

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub mod autopilot;
pub mod runner;
