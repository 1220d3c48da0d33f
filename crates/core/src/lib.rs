//! Twenty48 core crate - fundamental types for the 2048 game logic.

mod board;
mod direction;
mod state;
mod tile;

pub use board::{Board, PlacementError};
pub use direction::Direction;
pub use state::GameState;
pub use tile::Tile;
