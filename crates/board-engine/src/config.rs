//! Game configuration: grid dimension, merge-rule variant, difficulty.
//!
//! Settings come from outside the engine (a settings screen, a TOML file,
//! a test); the engine only validates them at construction. The structs
//! here derive serde so callers can persist settings however they like.

use serde::{Deserialize, Serialize};

use crate::engine::state::Value;
use crate::error::EngineError;

/// Which merge policy governs adjacent-tile combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MergeRule {
    /// Two adjacent equal tiles combine; result is their sum.
    #[default]
    PowersOfTwo,
    /// Exactly three consecutive equal tiles combine; result is their sum.
    /// Two equal tiles alone never combine under this rule.
    PowersOfThree,
    /// Two adjacent unequal tiles combine when twice the smaller exceeds
    /// the larger (consecutive-Fibonacci adjacency); result is their sum.
    Fibonacci,
}

impl MergeRule {
    /// Width of the adjacency window the rule inspects.
    pub(crate) fn window(self) -> usize {
        match self {
            MergeRule::PowersOfThree => 3,
            _ => 2,
        }
    }

    /// Pairwise combination predicate. `PowersOfThree` never combines a
    /// pair; its triple window is handled by the caller.
    pub(crate) fn pair_combines(self, a: Value, b: Value) -> bool {
        match self {
            MergeRule::PowersOfTwo => a == b,
            MergeRule::Fibonacci => a != b && a.min(b) * 2 > a.max(b),
            MergeRule::PowersOfThree => false,
        }
    }
}

/// How many tiles spawn after a move that changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Number of tiles to spawn after a board-changing move.
    pub fn spawn_count(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Engine construction parameters.
///
/// ```
/// use board_engine::config::{Difficulty, GameConfig, MergeRule};
///
/// let config = GameConfig::default();
/// assert_eq!(config.dimension, 4);
/// assert_eq!(config.merge_rule, MergeRule::PowersOfTwo);
/// assert_eq!(config.difficulty, Difficulty::Easy);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid side length D; the board holds D×D tiles. Must be ≥ 2
    /// (3..=6 in practice).
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    #[serde(default)]
    pub merge_rule: MergeRule,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Smallest grid the movement algorithm supports.
pub const MIN_DIMENSION: usize = 2;

fn default_dimension() -> usize {
    4
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            dimension: default_dimension(),
            merge_rule: MergeRule::default(),
            difficulty: Difficulty::default(),
        }
    }
}

impl GameConfig {
    /// Build a validated configuration.
    pub fn new(
        dimension: usize,
        merge_rule: MergeRule,
        difficulty: Difficulty,
    ) -> Result<Self, EngineError> {
        let config = GameConfig {
            dimension,
            merge_rule,
            difficulty,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration; called by the engine before allocating.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.dimension < MIN_DIMENSION {
            return Err(EngineError::InvalidDimension {
                got: self.dimension,
                min: MIN_DIMENSION,
            });
        }
        Ok(())
    }
}

/// Target tile value at which a game of `rule` on a D×D board counts as won.
///
/// The engine does not act on this; callers compare it against
/// [`MoveOutcome::new_max_tile`](crate::engine::MoveOutcome::new_max_tile).
pub fn win_threshold(rule: MergeRule, dimension: usize) -> Value {
    match rule {
        MergeRule::PowersOfTwo => match dimension {
            d if d < 4 => 1024,
            4 => 2048,
            _ => 8192,
        },
        MergeRule::PowersOfThree => match dimension {
            d if d < 4 => 81,
            4 => 243,
            _ => 729,
        },
        MergeRule::Fibonacci => match dimension {
            d if d < 4 => 144,
            4 => 233,
            _ => 610,
        },
    }
}
