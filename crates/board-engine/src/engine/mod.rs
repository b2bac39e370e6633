//! Engine module: grid state, direction-agnostic move ops, spawn policy,
//! and the `GameState` that ties them together. Public API stays small
//! and ergonomic.
//!
//! - `GameState` owns the grid, score, record tile, and spawn RNG.
//! - `TileAction` is the ordered change-event stream one move produces.
//! - Internals (transpose family, row merge, spawning) live in
//!   submodules to keep things tidy.

mod game;
mod ops;
mod spawn;
pub mod state;

pub use game::{GameState, MoveOutcome};
pub use state::{Direction, Origin, Position, Score, Tile, TileAction, Value};
