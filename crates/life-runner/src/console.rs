//! Console output of successive generations.

use life_board::{Board, Simulation};
use std::io::{self, Write};
use tracing::debug;

/// Write `board` followed by the next `runs` generations, separated by blank
/// lines, and return the last board.
pub fn print_generations<W: Write>(board: Board, runs: u32, out: &mut W) -> io::Result<Board> {
    write!(out, "{}", board)?;

    let mut simulation = Simulation::new(board);
    for _ in 0..runs {
        let stats = simulation.step();
        debug!(
            generation = stats.next_generation,
            live_cells = simulation.board().live_cells(),
            "Printed generation"
        );
        writeln!(out)?;
        write!(out, "{}", simulation.board())?;
    }
    out.flush()?;

    Ok(simulation.into_board())
}
