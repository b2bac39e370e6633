//! board-engine: a deterministic tile-grid game core.
//!
//! This crate provides:
//! - A `GameState` owning an N×N grid of numeric tiles, with directional
//!   moves, score, and record-tile tracking
//! - Three merge rules (`PowersOfTwo`, `PowersOfThree`, `Fibonacci`) and
//!   difficulty-scaled spawning behind an injectable, seedable RNG
//! - A structured `TileAction` event stream per move that a presentation
//!   layer can replay to animate
//!
//! Quick start:
//! ```
//! use board_engine::config::GameConfig;
//! use board_engine::engine::{Direction, GameState, TileAction};
//!
//! // Deterministic game with a seeded spawn RNG
//! let mut game = GameState::from_seed(GameConfig::default(), 42).unwrap();
//! let inserts = game.start();
//! assert!(matches!(inserts[0], TileAction::Insert { .. }));
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert_eq!(game.score(), outcome.score_delta);
//! ```
//!
//! The engine is single-threaded and synchronous: `apply_move` returns its
//! full event list (moves, merges, inserts, in replay order) before the
//! caller may apply the next move. Rendering, input handling, settings
//! persistence, and theming are the caller's concern; the win threshold
//! table in [`config`] is provided for the caller's win check.
//!
//! Full loop (simplest possible)
//! ```
//! use board_engine::config::{Difficulty, GameConfig, MergeRule};
//! use board_engine::engine::{Direction, GameState};
//!
//! let config = GameConfig::new(4, MergeRule::PowersOfTwo, Difficulty::Easy).unwrap();
//! let mut game = GameState::from_seed(config, 7).unwrap();
//! game.start();
//! let mut moves = 0u32;
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     let outcome = game.apply_move(dir);
//!     if outcome.game_over {
//!         break;
//!     }
//!     moves += 1;
//! }
//! assert!(moves > 0);
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::{win_threshold, Difficulty, GameConfig, MergeRule};
pub use engine::{Direction, GameState, MoveOutcome, Position, TileAction};
pub use error::EngineError;
