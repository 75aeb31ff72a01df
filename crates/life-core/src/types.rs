//! Core type definitions for the board model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub const ALIVE_CHAR: char = '*';
    pub const DEAD_CHAR: char = '.';

    /// Map a serialized character to a cell state. Anything but `*` is dead.
    pub fn from_char(c: char) -> Self {
        if c == Self::ALIVE_CHAR {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellState::Alive => Self::ALIVE_CHAR,
            CellState::Dead => Self::DEAD_CHAR,
        }
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

impl Size {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Counts gathered while computing one generation transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    pub generation: u64,
    pub next_generation: u64,
    pub size: Size,
    /// Live cells in the grid that was processed
    pub live_cells: usize,
    /// Dead cells in the grid that was processed
    pub dead_cells: usize,
}
