//! Wire form of a board, with one `*`/`.` string per row.

use crate::board::Board;
use life_core::{CellState, Error, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub generation: u64,
    pub size: Size,
    pub cells: Vec<String>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            generation: board.generation(),
            size: board.size(),
            cells: board
                .rows()
                .map(|row| row.iter().map(|cell| cell.to_char()).collect())
                .collect(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = Error;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let cells = snapshot
            .cells
            .iter()
            .map(|row| row.chars().map(CellState::from_char).collect())
            .collect();
        Board::new(snapshot.generation, snapshot.size, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_board() {
        let board = Board::new(
            5,
            Size::new(2, 3),
            vec![
                vec![CellState::Alive, CellState::Dead, CellState::Dead],
                vec![CellState::Dead, CellState::Dead, CellState::Alive],
            ],
        )
        .unwrap();

        let snapshot = BoardSnapshot::from(&board);
        assert_eq!(snapshot.generation, 5);
        assert_eq!(snapshot.size, Size::new(2, 3));
        assert_eq!(snapshot.cells, vec!["*..", "..*"]);
    }

    #[test]
    fn test_board_from_snapshot() {
        let snapshot = BoardSnapshot {
            generation: 1,
            size: Size::new(2, 2),
            cells: vec!["*o".to_string(), ".*".to_string()],
        };

        let board = Board::try_from(snapshot).unwrap();
        assert_eq!(board.generation(), 1);
        assert_eq!(board.live_cells(), 2);
        assert_eq!(board.get(0, 1), Some(CellState::Dead));
    }

    #[test]
    fn test_snapshot_shape_mismatch() {
        let snapshot = BoardSnapshot {
            generation: 0,
            size: Size::new(2, 2),
            cells: vec!["**".to_string(), "***".to_string()],
        };
        assert!(matches!(Board::try_from(snapshot), Err(Error::InvalidDimensions(_))));
    }

    #[test]
    fn test_snapshot_json() {
        let json = r#"{"generation":2,"size":{"rows":1,"cols":2},"cells":["*."]}"#;
        let snapshot: BoardSnapshot = serde_json::from_str(json).unwrap();
        let board = Board::try_from(snapshot.clone()).unwrap();

        assert_eq!(BoardSnapshot::from(&board), snapshot);
        assert_eq!(serde_json::to_string(&snapshot).unwrap(), json);
    }
}
