//! Seed text format.
//!
//! ```text
//! Generation 0
//! 3 3
//! .*.
//! .*.
//! .*.
//! ```
//!
//! The same form is produced by [`render`], so a parsed seed renders back to
//! identical text.

use crate::board::Board;
use life_core::{CellState, Error, Result, Size};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Parse seed text into a board.
pub fn parse_seed(text: &str) -> Result<Board> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| Error::Parse("seed is empty".to_string()))?;
    let generation = parse_generation(header)?;

    let dimensions = lines
        .next()
        .ok_or_else(|| Error::Parse("missing dimensions line".to_string()))?;
    let size = parse_size(dimensions)?;

    // Capacity comes from lines actually read, never from the header.
    let mut cells = Vec::new();
    for row in 0..size.rows {
        let line = lines.next().ok_or_else(|| {
            Error::Parse(format!("expected {} grid lines, found {}", size.rows, row))
        })?;
        cells.push(parse_row(line, row, size.cols)?);
    }

    if let Some(extra) = lines.find(|line| !line.trim().is_empty()) {
        return Err(Error::Parse(format!(
            "unexpected content after grid: {:?}",
            extra
        )));
    }

    Board::new(generation, size, cells)
}

/// Read and parse a seed file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_seed(path: impl AsRef<Path>) -> Result<Board> {
    let text = fs::read_to_string(path.as_ref())?;
    let board = parse_seed(&text)?;
    debug!(
        generation = board.generation(),
        size = %board.size(),
        "Loaded seed"
    );
    Ok(board)
}

/// Canonical text form of a board.
pub fn render(board: &Board) -> String {
    board.to_string()
}

fn parse_generation(line: &str) -> Result<u64> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Generation"), Some(value), None) => value
            .strip_suffix(':')
            .unwrap_or(value)
            .parse()
            .map_err(|_| Error::Parse(format!("invalid generation number {:?}", value))),
        _ => Err(Error::Parse(format!("malformed generation header {:?}", line))),
    }
}

fn parse_size(line: &str) -> Result<Size> {
    let mut parts = line.split_whitespace();
    let (rows, cols) = match (parts.next(), parts.next(), parts.next()) {
        (Some(rows), Some(cols), None) => (rows, cols),
        _ => return Err(Error::Parse(format!("malformed dimensions line {:?}", line))),
    };

    let parse = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|_| Error::Parse(format!("invalid dimension {:?}", value)))
    };

    Ok(Size::new(parse(rows)?, parse(cols)?))
}

fn parse_row(line: &str, row: usize, cols: usize) -> Result<Vec<CellState>> {
    let cells = line
        .chars()
        .enumerate()
        .map(|(col, c)| match c {
            CellState::ALIVE_CHAR | CellState::DEAD_CHAR => Ok(CellState::from_char(c)),
            other => Err(Error::Parse(format!(
                "unexpected character {:?} at row {}, column {}",
                other, row, col
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    if cells.len() != cols {
        return Err(Error::Parse(format!(
            "row {} has {} cells, expected {}",
            row,
            cells.len(),
            cols
        )));
    }

    Ok(cells)
}
