//! 4x4 board stored as a flat row-major grid of optional tile values.

use crate::Tile;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Attempt to place a tile on a cell that cannot take one.
///
/// Under correct engine usage this never fires; it exists so that
/// external board construction (tests, front ends) gets a checked API.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum PlacementError {
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: u8, col: u8 },
}

/// 4x4 game board. Empty cells are `None`, occupied cells hold the
/// tile value. Row 0 is the top, column 0 is the left edge.
///
/// `Clone` is a full value copy, so a cloned board never aliases the
/// original; history snapshots rely on this.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<u32>; Self::CELLS],
}

impl Board {
    pub const SIZE: u8 = 4;
    pub const CELLS: usize = (Self::SIZE as usize) * (Self::SIZE as usize);

    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn index(row: u8, col: u8) -> usize {
        (row as usize) * (Self::SIZE as usize) + col as usize
    }

    #[inline]
    pub fn in_bounds(row: u8, col: u8) -> bool {
        row < Self::SIZE && col < Self::SIZE
    }

    /// Value at a cell, `None` when empty.
    #[inline]
    pub fn get(&self, row: u8, col: u8) -> Option<u32> {
        self.cells[Self::index(row, col)]
    }

    #[inline]
    pub fn is_empty(&self, row: u8, col: u8) -> bool {
        self.get(row, col).is_none()
    }

    /// Checked placement onto an empty in-range cell.
    pub fn put(&mut self, row: u8, col: u8, value: u32) -> Result<(), PlacementError> {
        if !Self::in_bounds(row, col) {
            return Err(PlacementError::OutOfRange { row, col });
        }
        if self.get(row, col).is_some() {
            return Err(PlacementError::Occupied { row, col });
        }
        self.cells[Self::index(row, col)] = Some(value);
        Ok(())
    }

    /// Unchecked overwrite of a cell. Engine-internal moves use this;
    /// callers must pass in-range coordinates.
    #[inline]
    pub fn set(&mut self, row: u8, col: u8, value: u32) {
        self.cells[Self::index(row, col)] = Some(value);
    }

    /// Clears a cell, returning the value that was there.
    #[inline]
    pub fn remove(&mut self, row: u8, col: u8) -> Option<u32> {
        self.cells[Self::index(row, col)].take()
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.cells = [None; Self::CELLS];
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(u8, u8)> {
        let mut empty = Vec::with_capacity(Self::CELLS);
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                if self.is_empty(row, col) {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    /// Occupied cells as [`Tile`] views, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|value| {
                Tile::new(
                    (i / Self::SIZE as usize) as u8,
                    (i % Self::SIZE as usize) as u8,
                    value,
                )
            })
        })
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Largest tile value on the board, 0 when the board is empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [None; Self::CELLS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                match self.get(row, col) {
                    Some(value) => write!(f, "|{value: ^5}")?,
                    None => write!(f, "|{: ^5}", " ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
