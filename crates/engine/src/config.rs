use serde::{Deserialize, Serialize};
use twenty48_core::Board;

/// Rule constants consumed by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length. Informative; storage is the fixed 4x4 grid.
    pub board_size: u8,
    /// Tile value that counts as a win.
    pub win_value: u32,
    /// Probability that a spawned tile is a 4 rather than a 2.
    pub four_chance: f64,
    /// Capacity of each history stack.
    pub history_depth: usize,
}

impl GameConfig {
    /// The classic ruleset: 4x4 board, win at 2048, 30% fours,
    /// five levels of undo.
    pub fn classic() -> Self {
        Self {
            board_size: Board::SIZE,
            win_value: 2048,
            four_chance: 0.3,
            history_depth: 5,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_constants() {
        let config = GameConfig::classic();
        assert_eq!(config.board_size, 4);
        assert_eq!(config.win_value, 2048);
        assert_eq!(config.four_chance, 0.3);
        assert_eq!(config.history_depth, 5);
    }
}
