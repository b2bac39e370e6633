use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::EngineError;

use super::ops::{self, Grid};
use super::spawn;
use super::state::{Direction, Origin, Position, Score, Tile, TileAction, Value};

/// Everything one `apply_move` call tells the caller, delivered in full
/// before the call returns. The caller must consume it (animate, check a
/// win threshold against `new_max_tile`, handle `game_over`) before
/// applying the next move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Ordered change events for the presentation layer; empty when the
    /// move was a no-op.
    pub actions: Vec<TileAction>,
    /// Score added by this move: one point per displaced tile plus the
    /// resulting value of each merge. 0 for a no-op.
    pub score_delta: Score,
    /// Set when this move raised the record tile value.
    pub new_max_tile: Option<Value>,
    /// True when the board is full and no direction can merge anything.
    pub game_over: bool,
}

/// The board engine: a D×D grid of tiles plus score and record-tile
/// tracking, mutated only through [`start`](GameState::start),
/// [`reset`](GameState::reset) and [`apply_move`](GameState::apply_move).
///
/// The engine owns its spawn RNG; seed it for reproducible games.
///
/// ```
/// use board_engine::config::GameConfig;
/// use board_engine::engine::{Direction, GameState};
///
/// let mut game = GameState::from_seed(GameConfig::default(), 42).unwrap();
/// let inserts = game.start();
/// assert_eq!(inserts.len(), 2);
///
/// let outcome = game.apply_move(Direction::Left);
/// assert!(!outcome.game_over);
/// ```
pub struct GameState<R: Rng = StdRng> {
    config: GameConfig,
    grid: Grid,
    score: Score,
    max_tile: Value,
    rng: R,
}

impl GameState<StdRng> {
    /// Engine with a deterministic spawn sequence.
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Engine with an OS-seeded spawn sequence.
    pub fn from_entropy(config: GameConfig) -> Result<Self, EngineError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameState<R> {
    /// Build an engine over an all-empty grid. Fails if the configuration
    /// is invalid; nothing is allocated in that case.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(GameState {
            grid: ops::empty_grid(config.dimension),
            score: 0,
            max_tile: 0,
            config,
            rng,
        })
    }

    /// Seed the empty grid with two spawned tiles and return their
    /// `Insert` events. Call once after `new` or after `reset`.
    pub fn start(&mut self) -> Vec<TileAction> {
        let mut actions = Vec::with_capacity(2);
        for _ in 0..2 {
            if let Some(insert) =
                spawn::spawn_one(&mut self.grid, self.config.merge_rule, &mut self.rng)
            {
                actions.push(insert);
            }
        }
        self.raise_max_tile();
        actions
    }

    /// Clear every cell and zero the score. Spawns nothing and emits no
    /// events; the caller follows up with [`start`](GameState::start).
    pub fn reset(&mut self) {
        self.score = 0;
        for row in self.grid.iter_mut() {
            for tile in row.iter_mut() {
                *tile = Tile::EMPTY;
            }
        }
    }

    /// Apply one directional move and return its full outcome.
    ///
    /// Movement is implemented once, for left; other directions are
    /// realized by transposing into the move-left orientation and back.
    /// A direction that cannot change the board is a valid zero-effect
    /// call: no events, no score change, no spawn.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let d = self.config.dimension;
        let rule = self.config.merge_rule;

        let mut turned = ops::transpose_for_left(&self.grid, direction);
        for row in turned.iter_mut() {
            *row = ops::merge_row_left(row, rule, d);
        }
        self.grid = ops::transpose_for_left(&turned, ops::inverse_of(direction));

        // Walk the final grid: derive events from the origin tags, then
        // clear the tags so the next move starts from a clean slate.
        let mut actions = Vec::new();
        let mut score_delta: Score = 0;
        for i in 0..d {
            for j in 0..d {
                let here = Position::new(i, j);
                let tile = self.grid[i][j];
                if tile.is_empty() {
                    self.grid[i][j] = Tile::EMPTY;
                    continue;
                }
                match tile.origin {
                    Origin::Single(from) => {
                        actions.push(TileAction::Move {
                            from,
                            to: here,
                            dismissed: false,
                        });
                        if from != here {
                            score_delta += 1;
                        }
                    }
                    Origin::Combined2(p1, p2) => {
                        for from in [p1, p2] {
                            actions.push(TileAction::Move {
                                from,
                                to: here,
                                dismissed: true,
                            });
                        }
                        actions.push(TileAction::Merge {
                            at: here,
                            value: tile.value,
                        });
                        score_delta += Score::from(tile.value);
                    }
                    Origin::Combined3(p1, p2, p3) => {
                        for from in [p1, p2, p3] {
                            actions.push(TileAction::Move {
                                from,
                                to: here,
                                dismissed: true,
                            });
                        }
                        actions.push(TileAction::Merge {
                            at: here,
                            value: tile.value,
                        });
                        score_delta += Score::from(tile.value);
                    }
                    Origin::Empty => {}
                }
                self.grid[i][j].origin = Origin::Single(here);
            }
        }

        if score_delta > 0 {
            self.score += score_delta;
            for _ in 0..self.config.difficulty.spawn_count() {
                match spawn::spawn_one(&mut self.grid, rule, &mut self.rng) {
                    Some(insert) => actions.push(insert),
                    // Board full: spawn as many as fit, silently.
                    None => break,
                }
            }
        } else {
            // No tile moved or merged; the board is exactly as before.
            actions.clear();
        }

        let new_max_tile = self.raise_max_tile();
        // Runs even for a no-op: the previous move may already have left
        // the board without further moves.
        let game_over = self.is_game_over();
        debug!(
            "applied {:?}: {} events, score +{}, game_over={}",
            direction,
            actions.len(),
            score_delta,
            game_over
        );

        MoveOutcome {
            actions,
            score_delta,
            new_max_tile,
            game_over,
        }
    }

    /// True when no cell is empty and no direction can merge anything.
    pub fn is_game_over(&self) -> bool {
        if !ops::empty_positions(&self.grid).is_empty() {
            return false;
        }
        Direction::ALL
            .iter()
            .all(|&dir| !ops::merge_available(&self.grid, dir, self.config.merge_rule))
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Largest tile value ever placed on this board.
    pub fn max_tile(&self) -> Value {
        self.max_tile
    }

    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of the grid as plain values, row-major (0 = empty).
    pub fn rows(&self) -> Vec<Vec<Value>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|t| t.value).collect())
            .collect()
    }

    /// Replace the grid with explicit values (0 = empty). Intended for
    /// tools and tests; panics if `rows` is not dimension × dimension.
    pub fn load_rows(&mut self, rows: &[Vec<Value>]) {
        let d = self.config.dimension;
        assert_eq!(rows.len(), d, "expected {} rows", d);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), d, "expected {} columns in row {}", d, i);
            for (j, &value) in row.iter().enumerate() {
                self.grid[i][j] = if value == 0 {
                    Tile::EMPTY
                } else {
                    Tile::single(value, Position::new(i, j))
                };
            }
        }
        self.raise_max_tile();
    }

    fn raise_max_tile(&mut self) -> Option<Value> {
        let top = ops::max_value(&self.grid);
        if top > self.max_tile {
            self.max_tile = top;
            Some(top)
        } else {
            None
        }
    }
}

impl<R: Rng> fmt::Display for GameState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for tile in row {
                if tile.is_empty() {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", tile.value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
