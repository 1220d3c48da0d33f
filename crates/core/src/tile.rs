//! Tile view type produced by board iteration.

use serde::{Deserialize, Serialize};

/// One occupied cell. `value` is always a power of two >= 2.
///
/// Tiles are a read-only view over board contents; the board itself
/// stores values in a flat grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}

impl Tile {
    pub fn new(row: u8, col: u8, value: u32) -> Self {
        Self { row, col, value }
    }
}
