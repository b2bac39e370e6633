use log::trace;
use rand::Rng;

use crate::config::MergeRule;

use super::ops::{self, Grid};
use super::state::{Tile, TileAction, Value};

/// Weighted value draw for a fresh tile under `rule`.
///
/// PowersOfTwo: 2 (90%) or 4 (10%). PowersOfThree: 3 (90%) or 9 (10%).
/// Fibonacci: 2 (40%) or 3 (60%).
pub(crate) fn draw_value<R: Rng + ?Sized>(rule: MergeRule, rng: &mut R) -> Value {
    match rule {
        MergeRule::PowersOfTwo => {
            if rng.gen_range(0..10) < 9 {
                2
            } else {
                4
            }
        }
        MergeRule::PowersOfThree => {
            if rng.gen_range(0..10) < 9 {
                3
            } else {
                9
            }
        }
        MergeRule::Fibonacci => {
            if rng.gen_range(0..10) < 4 {
                2
            } else {
                3
            }
        }
    }
}

/// Place one freshly drawn tile on a uniformly chosen empty cell.
///
/// Returns `None` when no cell is free; a full board is a normal,
/// silently skipped outcome rather than an error.
pub(crate) fn spawn_one<R: Rng + ?Sized>(
    grid: &mut Grid,
    rule: MergeRule,
    rng: &mut R,
) -> Option<TileAction> {
    let empties = ops::empty_positions(grid);
    if empties.is_empty() {
        return None;
    }
    let at = empties[rng.gen_range(0..empties.len())];
    let value = draw_value(rule, rng);
    grid[at.row][at.col] = Tile::single(value, at);
    trace!("spawned {} at {}", value, at);
    Some(TileAction::Insert { at, value })
}
