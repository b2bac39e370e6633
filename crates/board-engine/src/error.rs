//! Error types for the board engine.
//!
//! The engine is a closed deterministic system over valid inputs, so the
//! only fallible surface is construction: every in-game operation is a
//! total function over a validly constructed [`GameState`].
//!
//! [`GameState`]: crate::engine::GameState

use thiserror::Error;

/// Errors reported by the board engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested grid dimension is below the supported minimum.
    ///
    /// Rejected before any grid is allocated.
    #[error("invalid grid dimension {got}: must be at least {min}")]
    InvalidDimension { got: usize, min: usize },
}
