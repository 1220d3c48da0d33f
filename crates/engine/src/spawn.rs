//! Random tile placement after a shift.

use crate::GameConfig;
use rand::Rng;
use twenty48_core::{Board, Tile};

/// Places one new tile on a uniformly chosen empty cell: a 2 with
/// probability `1 - four_chance`, otherwise a 4. Returns the placed
/// tile, or `None` on a full board (a full board is a question for
/// game-over detection, not an error here).
pub fn spawn_tile(board: &mut Board, rng: &mut impl Rng, config: &GameConfig) -> Option<Tile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen_bool(config.four_chance) { 4 } else { 2 };
    board.set(row, col, value);
    Some(Tile::new(row, col, value))
}
