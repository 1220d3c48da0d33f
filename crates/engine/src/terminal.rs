//! Win and loss detection. Pure queries over board state.

use twenty48_core::Board;

/// True iff any tile has reached `win_value`.
pub fn has_won(board: &Board, win_value: u32) -> bool {
    board.tiles().any(|t| t.value == win_value)
}

/// True iff no empty cell exists and no orthogonally adjacent pair of
/// tiles shares a value, i.e. no legal shift remains.
pub fn is_game_over(board: &Board) -> bool {
    for row in 0..Board::SIZE {
        for col in 0..Board::SIZE {
            let Some(value) = board.get(row, col) else {
                return false;
            };
            // Right and down neighbors cover every adjacent pair once.
            if col + 1 < Board::SIZE && board.get(row, col + 1) == Some(value) {
                return false;
            }
            if row + 1 < Board::SIZE && board.get(row + 1, col) == Some(value) {
                return false;
            }
        }
    }
    true
}
