//! Immutable board snapshot and the generation transition.

use crate::neighbours::{count_live_neighbours, next_state};
use life_core::{CellState, Error, Result, Size, TickStats};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One generation of a Game of Life grid.
///
/// Boards never change once built; [`Board::tick`] returns a new board.
/// Equality and hashing look at the size and the cells only, so boards from
/// different generations compare equal when their grids match.
#[derive(Debug, Clone)]
pub struct Board {
    generation: u64,
    size: Size,
    cells: Vec<CellState>,
}

impl Board {
    /// Build a board from row-major cells, rejecting grids whose shape does
    /// not match `size`.
    pub fn new(generation: u64, size: Size, cells: Vec<Vec<CellState>>) -> Result<Self> {
        if cells.len() != size.rows {
            return Err(Error::InvalidDimensions(format!(
                "expected {} rows, found {}",
                size.rows,
                cells.len()
            )));
        }

        if let Some((index, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != size.cols) {
            return Err(Error::InvalidDimensions(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                size.cols
            )));
        }

        Ok(Self {
            generation,
            size,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// An all-dead board
    pub fn empty(generation: u64, size: Size) -> Self {
        Self {
            generation,
            size,
            cells: vec![CellState::Dead; size.area()],
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Cell at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if self.size.contains(row, col) {
            Some(self.cells[self.pos_to_index(row, col)])
        } else {
            None
        }
    }

    /// Iterator over the grid rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        let cols = self.size.cols;
        (0..self.size.rows).map(move |row| &self.cells[row * cols..(row + 1) * cols])
    }

    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        self.rows().map(<[CellState]>::to_vec).collect()
    }

    /// Number of live cells
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Same grid, relabelled with another generation number
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Compute the next generation.
    pub fn tick(&self) -> Board {
        self.tick_with_stats().0
    }

    /// Compute the next generation along with the cell counts of this one.
    ///
    /// Every next state is derived from `self`, which is never modified, so
    /// no cell sees an already-updated neighbour. The generation counter
    /// wraps from `u64::MAX` to 0.
    pub fn tick_with_stats(&self) -> (Board, TickStats) {
        let mut live_cells = 0;

        let cells: Vec<CellState> = self
            .cells
            .iter()
            .enumerate()
            .map(|(index, &current)| {
                if current.is_alive() {
                    live_cells += 1;
                }
                let (row, col) = self.index_to_pos(index);
                next_state(current, count_live_neighbours(self, row, col))
            })
            .collect();

        let next = Board {
            generation: self.generation.wrapping_add(1),
            size: self.size,
            cells,
        };

        let stats = TickStats {
            generation: self.generation,
            next_generation: next.generation,
            size: self.size,
            live_cells,
            dead_cells: self.cells.len() - live_cells,
        };

        (next, stats)
    }

    fn pos_to_index(&self, row: usize, col: usize) -> usize {
        row * self.size.cols + col
    }

    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.size.cols, index % self.size.cols)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.cells.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation {}", self.generation)?;
        writeln!(f, "{} {}", self.size.rows, self.size.cols)?;
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
