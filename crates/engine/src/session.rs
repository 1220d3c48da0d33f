//! Game session - the interface a front end drives.
//!
//! Owns the live state, the history stacks, and the spawn RNG. The
//! move/spawn contract is separated: a shift never spawns on its own,
//! the caller invokes [`Game::spawn`] after a shift and then queries
//! the terminal conditions.

use crate::config::GameConfig;
use crate::history::History;
use crate::shift::{can_shift, shift};
use crate::spawn::spawn_tile;
use crate::terminal::{has_won, is_game_over};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::debug;
use twenty48_core::{Board, Direction, GameState, Tile};

pub struct Game {
    state: GameState,
    history: History,
    rng: StdRng,
    config: GameConfig,
}

impl Game {
    /// New session with an entropy-seeded RNG. The board starts empty;
    /// call [`new_game`](Self::new_game) to deal the opening tiles.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// New session with a fixed seed, for reproducible games.
    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            state: GameState::new(),
            history: History::new(config.history_depth),
            rng,
            config,
        }
    }

    /// Clears the board and score, drops all history, and spawns the
    /// two opening tiles.
    pub fn new_game(&mut self) {
        self.state.board.clear();
        self.state.score = 0;
        self.history.clear();
        self.spawn();
        self.spawn();
        debug!("new game started");
    }

    /// Records a history snapshot, then runs the compaction/merge
    /// pass. The snapshot is recorded even when the shift changes
    /// nothing, so a no-op move still consumes an undo slot.
    ///
    /// Does not spawn; the caller follows up with [`spawn`](Self::spawn).
    pub fn shift(&mut self, dir: Direction) -> bool {
        self.history.record(&self.state);
        let moved = shift(&mut self.state, dir);
        debug!(?dir, moved, score = self.state.score, "shift");
        moved
    }

    pub fn move_up(&mut self) -> bool {
        self.shift(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.shift(Direction::Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(Direction::Right)
    }

    /// Places one random tile on an empty cell, if any. History is
    /// untouched.
    pub fn spawn(&mut self) -> Option<Tile> {
        let tile = spawn_tile(&mut self.state.board, &mut self.rng, &self.config);
        if let Some(tile) = tile {
            debug!(row = tile.row, col = tile.col, value = tile.value, "spawned tile");
        }
        tile
    }

    /// Restores the previous snapshot. `false` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.state) {
            Some(previous) => {
                self.state = previous;
                debug!(score = self.state.score, "undo");
                true
            }
            None => {
                debug!("nothing to undo");
                false
            }
        }
    }

    /// Reverses the most recent undo. `false` when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.state) {
            Some(next) => {
                self.state = next;
                debug!(score = self.state.score, "redo");
                true
            }
            None => {
                debug!("nothing to redo");
                false
            }
        }
    }

    pub fn has_won(&self) -> bool {
        has_won(&self.state.board, self.config.win_value)
    }

    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.state.board)
    }

    /// Whether a shift in `dir` would change the board.
    pub fn can_shift(&self, dir: Direction) -> bool {
        can_shift(&self.state.board, dir)
    }

    /// Per-direction legality in `[Up, Down, Left, Right]` order.
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|dir| can_shift(&self.state.board, dir))
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.state.board.tiles()
    }

    pub fn max_tile(&self) -> u32 {
        self.state.board.max_tile()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}
