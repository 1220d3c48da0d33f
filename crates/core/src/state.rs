//! Game state representation - the unit of history snapshots.

use crate::Board;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board plus accumulated score. Score only ever grows during play
/// and resets to zero on a new game.
///
/// `Clone` deep-copies the board, so a stored snapshot is never
/// affected by later mutation of the live state.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub score: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Score: {}", self.score)
    }
}
