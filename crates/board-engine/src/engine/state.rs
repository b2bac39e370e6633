use std::fmt;

use serde::{Deserialize, Serialize};

/// Tile value; 0 means empty.
pub type Value = u32;
/// Accumulated game score.
pub type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the game-over search probes them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Grid coordinate, 0-indexed, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How a tile's current value was produced within the move in flight.
///
/// Transient per-move scratch: every non-empty tile is reset to
/// `Single(here)` (and every empty one to `Empty`) before `apply_move`
/// returns, so the tag carries no meaning across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Empty,
    /// The value slid (or stayed) from one source cell.
    Single(Position),
    /// The value is the merge of two source tiles.
    Combined2(Position, Position),
    /// The value is the merge of three source tiles (powers-of-three rule).
    Combined3(Position, Position, Position),
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub value: Value,
    pub origin: Origin,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        value: 0,
        origin: Origin::Empty,
    };

    /// A tile holding `value` that originated at `at`.
    #[inline]
    pub fn single(value: Value, at: Position) -> Self {
        Tile {
            value,
            origin: Origin::Single(at),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// Structured change event consumed by a presentation layer.
///
/// One `apply_move` call yields an ordered list of these; replaying them
/// in order reproduces the move visually. The list carries no
/// engine-internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileAction {
    /// A tile's content relocates from `from` to `to`. `dismissed` is true
    /// when the source tile disappears because it was consumed by a merge.
    Move {
        from: Position,
        to: Position,
        dismissed: bool,
    },
    /// A combined tile with `value` appears at `at`, fed by the dismissed
    /// `Move`s that precede it.
    Merge { at: Position, value: Value },
    /// A freshly spawned tile appears at `at`.
    Insert { at: Position, value: Value },
}
