//! Neighbour counting and the B3/S23 transition rule.

use crate::board::Board;
use life_core::CellState;

/// Row/column offsets of the eight surrounding positions:
/// N, NE, E, SE, S, SW, W, NW.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Count live cells among the eight positions around `(row, col)`.
///
/// Positions outside the board never contribute, so cells on the border and
/// in the corners simply have fewer candidates.
pub fn count_live_neighbours(board: &Board, row: usize, col: usize) -> u8 {
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            board.get(r, c)
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// State of a cell in the next generation.
pub fn next_state(current: CellState, live_neighbours: u8) -> CellState {
    match (current, live_neighbours) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
