//! Twenty48 engine - 2048 game logic.
//!
//! Provides the shift/merge pass, random tile spawning, win/loss
//! detection, and bounded undo/redo history behind the [`Game`]
//! session type. Rendering and input handling live in front ends
//! built on top of this crate.

pub mod config;
pub mod history;
pub mod session;
pub mod shift;
pub mod spawn;
pub mod terminal;

pub use config::GameConfig;
pub use history::History;
pub use session::Game;
pub use shift::{can_shift, shift};
pub use spawn::spawn_tile;
pub use terminal::{has_won, is_game_over};
