//! Directional compaction and merge pass.
//!
//! Each line (a column for vertical shifts, a row for horizontal
//! ones) is swept once, processing movers in order of distance from
//! the target edge. A mover slides through consecutive empty cells;
//! if the cell that blocks it holds an equal value the blocker
//! doubles, the score grows by the doubled value, and the mover is
//! removed. A blocker that merged stays put and is never revisited
//! as a mover within the pass.

use twenty48_core::{Board, Direction, GameState};

/// Cell processed at `dist` steps from the target edge of `line`.
fn mover_cell(dir: Direction, line: u8, dist: u8) -> (u8, u8) {
    let last = Board::SIZE - 1;
    match dir {
        Direction::Up => (dist, line),
        Direction::Down => (last - dist, line),
        Direction::Left => (line, dist),
        Direction::Right => (line, last - dist),
    }
}

fn neighbor(row: u8, col: u8, dr: i8, dc: i8) -> Option<(u8, u8)> {
    let nr = row.checked_add_signed(dr)?;
    let nc = col.checked_add_signed(dc)?;
    Board::in_bounds(nr, nc).then_some((nr, nc))
}

/// Compacts and merges every line toward the target edge of `dir`,
/// updating the score for each merge. Returns whether any tile moved
/// or merged.
pub fn shift(state: &mut GameState, dir: Direction) -> bool {
    let (dr, dc) = dir.step();
    let mut changed = false;

    for line in 0..Board::SIZE {
        for dist in 1..Board::SIZE {
            let (row, col) = mover_cell(dir, line, dist);
            let Some(value) = state.board.get(row, col) else {
                continue;
            };

            // Slide through consecutive empty cells toward the edge.
            let (mut r, mut c) = (row, col);
            while let Some((nr, nc)) = neighbor(r, c, dr, dc) {
                if state.board.get(nr, nc).is_some() {
                    break;
                }
                r = nr;
                c = nc;
            }

            // Merge into an equal-valued blocker, otherwise settle
            // adjacent to it (or stay put on a zero-distance slide).
            match neighbor(r, c, dr, dc) {
                Some((br, bc)) if state.board.get(br, bc) == Some(value) => {
                    let doubled = value * 2;
                    state.board.set(br, bc, doubled);
                    state.board.remove(row, col);
                    state.score += doubled;
                    changed = true;
                }
                _ if (r, c) != (row, col) => {
                    state.board.remove(row, col);
                    state.board.set(r, c, value);
                    changed = true;
                }
                _ => {}
            }
        }
    }

    changed
}

/// Whether a shift in `dir` would change the board: some tile has an
/// empty or equal-valued neighbor toward the target edge.
pub fn can_shift(board: &Board, dir: Direction) -> bool {
    let (dr, dc) = dir.step();
    for line in 0..Board::SIZE {
        for dist in 1..Board::SIZE {
            let (row, col) = mover_cell(dir, line, dist);
            let Some(value) = board.get(row, col) else {
                continue;
            };
            if let Some((nr, nc)) = neighbor(row, col, dr, dc) {
                match board.get(nr, nc) {
                    None => return true,
                    Some(v) if v == value => return true,
                    Some(_) => {}
                }
            }
        }
    }
    false
}
