//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole Snake simulation: the grid, the snake body,
//! food placement, collision rules and scoring. It has **no dependencies** on
//! rendering, input or timing, which keeps it:
//!
//! - **Deterministic**: a [`SimpleRng`] seed reproduces the same food sequence
//! - **Testable**: every rule is exercised by unit tests next to the code
//! - **Portable**: any driver (terminal, GUI, headless bot) can call into it
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell array with bounds-aware lookup
//! - [`world`]: [`GridWorld`], the simulation state machine
//! - [`rng`]: seedable LCG usable wherever a `rand::Rng` is expected
//! - [`snapshot`]: owned, serializable copy of the observable state
//! - [`error`]: construction errors
//!
//! # Game Rules
//!
//! - The snake starts with three segments on row `rows / 2`, heading right
//! - Each tick the head moves one cell in the current direction
//! - Entering an empty cell drags the tail along; entering food grows the body
//!   by one, adds a point, and places new food on a random empty cell
//! - Leaving the grid or hitting the body ends the game for good
//! - The cell the tail is about to vacate counts as empty
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GridWorld, StepOutcome};
//! use tui_snake_types::{Direction, Position};
//!
//! let mut world = GridWorld::seeded(5, 5, 12345).unwrap();
//! assert_eq!(world.head_position(), Position::new(2, 3));
//!
//! world.change_direction(Direction::Up);
//! assert!(!world.step().is_terminal());
//!
//! while !world.is_over() {
//!     world.step();
//! }
//! assert_eq!(world.step(), StepOutcome::Finished);
//! ```
//!
//! # Threading
//!
//! Nothing here locks. Drivers that read input on one thread and tick on
//! another must serialize `change_direction` and `step` themselves.

pub mod error;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod world;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use world::{GridWorld, StepOutcome};
