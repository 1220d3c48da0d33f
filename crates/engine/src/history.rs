//! Bounded undo/redo history over deep-copied state snapshots.
//!
//! Both stacks are fixed-capacity deques: push and pop happen at the
//! back, eviction at the front. Recording a snapshot always clears
//! the redo stack; redo only ever replays the most recent chain of
//! undos.

use twenty48_core::GameState;

use std::collections::VecDeque;

pub struct History {
    undo: VecDeque<GameState>,
    redo: VecDeque<GameState>,
    depth: usize,
}

impl History {
    pub fn new(depth: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(depth),
            redo: VecDeque::with_capacity(depth),
            depth,
        }
    }

    fn push_undo(&mut self, snapshot: GameState) {
        if self.undo.len() == self.depth {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }

    /// Saves a deep copy of `live` onto the undo stack, evicting the
    /// oldest entry at capacity, and invalidates any pending redos.
    /// Called before every state-mutating move, no-op moves included.
    pub fn record(&mut self, live: &GameState) {
        self.push_undo(live.clone());
        self.redo.clear();
    }

    /// Pops the most recent snapshot, saving `live` for redo.
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self, live: &GameState) -> Option<GameState> {
        let previous = self.undo.pop_back()?;
        self.redo.push_back(live.clone());
        Some(previous)
    }

    /// Mirror of [`undo`](Self::undo): pops the most recent undone
    /// snapshot, saving `live` back onto the undo stack under the
    /// same eviction rule as [`record`](Self::record).
    pub fn redo(&mut self, live: &GameState) -> Option<GameState> {
        let next = self.redo.pop_back()?;
        self.push_undo(live.clone());
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
