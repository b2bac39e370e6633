use crate::config::MergeRule;

use super::state::{Direction, Origin, Position, Tile, Value};

/// Row-major D×D grid. Tiles never move by mutating a position field;
/// position is implicit in the coordinates and "movement" rewrites cells.
pub(crate) type Grid = Vec<Vec<Tile>>;

pub(crate) fn empty_grid(dimension: usize) -> Grid {
    vec![vec![Tile::EMPTY; dimension]; dimension]
}

/// Rewrite the grid so that a move in `direction` becomes a left move.
///
/// - `Left`: identity.
/// - `Right`: reverse each row.
/// - `Up`: rotate so up becomes left, new (i, j) = old (j, D-1-i).
/// - `Down`: rotate the opposite way, new (i, j) = old (D-1-j, i).
///
/// `Up` and `Down` are each other's inverses; `Right` undoes itself.
pub(crate) fn transpose_for_left(grid: &Grid, direction: Direction) -> Grid {
    let d = grid.len();
    match direction {
        Direction::Left => grid.clone(),
        Direction::Right => grid
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect(),
        Direction::Up => (0..d)
            .map(|i| (0..d).map(|j| grid[j][d - 1 - i]).collect())
            .collect(),
        Direction::Down => (0..d)
            .map(|i| (0..d).map(|j| grid[d - 1 - j][i]).collect())
            .collect(),
    }
}

/// The direction whose transform undoes `transpose_for_left(direction)`.
pub(crate) fn inverse_of(direction: Direction) -> Direction {
    match direction {
        Direction::Left => Direction::Left,
        Direction::Right => Direction::Right,
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
    }
}

/// Compact one row leftwards and apply the merge rule in a single pass.
///
/// Empty cells are dropped (order and provenance preserved), the scan
/// combines runs according to `rule`, then the row is re-padded to
/// `dimension` on the right. A combined tile carries a `Combined2`/
/// `Combined3` origin and is skipped by the scan, so it never merges
/// again within the same pass.
pub(crate) fn merge_row_left(row: &[Tile], rule: MergeRule, dimension: usize) -> Vec<Tile> {
    let mut packed: Vec<Tile> = row.iter().copied().filter(|t| !t.is_empty()).collect();

    let window = rule.window();
    let mut i = 0;
    while i + window <= packed.len() {
        if combine_at(&mut packed, i, rule) {
            i += window;
        } else {
            i += 1;
        }
    }

    packed.retain(|t| !t.is_empty());
    packed.resize(dimension, Tile::EMPTY);
    packed
}

/// Try to combine the window starting at `i`, in place. Consumed cells are
/// zeroed; the survivor records the source positions in its origin tag.
fn combine_at(row: &mut [Tile], i: usize, rule: MergeRule) -> bool {
    match rule {
        MergeRule::PowersOfTwo | MergeRule::Fibonacci => {
            let (a, b) = (row[i], row[i + 1]);
            let (pa, pb) = match (a.origin, b.origin) {
                (Origin::Single(pa), Origin::Single(pb)) => (pa, pb),
                _ => return false,
            };
            if !rule.pair_combines(a.value, b.value) {
                return false;
            }
            row[i] = Tile {
                value: a.value + b.value,
                origin: Origin::Combined2(pa, pb),
            };
            row[i + 1] = Tile::EMPTY;
            true
        }
        MergeRule::PowersOfThree => {
            let (a, b, c) = (row[i], row[i + 1], row[i + 2]);
            let (pa, pb, pc) = match (a.origin, b.origin, c.origin) {
                (Origin::Single(pa), Origin::Single(pb), Origin::Single(pc)) => (pa, pb, pc),
                _ => return false,
            };
            if a.value != b.value || b.value != c.value {
                return false;
            }
            row[i] = Tile {
                value: a.value + b.value + c.value,
                origin: Origin::Combined3(pa, pb, pc),
            };
            row[i + 1] = Tile::EMPTY;
            row[i + 2] = Tile::EMPTY;
            true
        }
    }
}

/// Would a move in `direction` produce at least one merge?
///
/// Rows are canonicalized and compacted before the window check, so gaps
/// between tiles do not hide an adjacency (e.g. `[3, 0, 3, 3]` still
/// reports a triple under the powers-of-three rule). Pure slides are not
/// considered here; the game-over test covers them via its empty-cell
/// check.
pub(crate) fn merge_available(grid: &Grid, direction: Direction, rule: MergeRule) -> bool {
    let turned = transpose_for_left(grid, direction);
    let window = rule.window();
    for row in &turned {
        let values: Vec<Value> = row
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.value)
            .collect();
        for w in values.windows(window) {
            let hit = match rule {
                MergeRule::PowersOfThree => w[0] == w[1] && w[1] == w[2],
                _ => rule.pair_combines(w[0], w[1]),
            };
            if hit {
                return true;
            }
        }
    }
    false
}

/// Positions of all empty cells, row-major.
pub(crate) fn empty_positions(grid: &Grid) -> Vec<Position> {
    let mut empties = Vec::new();
    for (i, row) in grid.iter().enumerate() {
        for (j, tile) in row.iter().enumerate() {
            if tile.is_empty() {
                empties.push(Position::new(i, j));
            }
        }
    }
    empties
}

/// Largest tile value currently on the board (0 when empty).
pub(crate) fn max_value(grid: &Grid) -> Value {
    grid.iter()
        .flat_map(|row| row.iter())
        .map(|t| t.value)
        .max()
        .unwrap_or(0)
}
