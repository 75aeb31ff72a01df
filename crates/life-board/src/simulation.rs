//! Sequential multi-generation runs with per-tick tracing spans.

use crate::board::Board;
use life_core::TickStats;
use tracing::{field, info_span, instrument, trace};

/// Drives a board forward one generation at a time.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Apply `runs` ticks in sequence and return the final board.
    #[instrument(skip(self), fields(generation = self.board.generation(), size = %self.board.size()))]
    pub fn run(&mut self, runs: u32) -> &Board {
        for _ in 0..runs {
            self.step();
        }
        &self.board
    }

    /// Advance a single generation inside a `tick` span.
    pub fn step(&mut self) -> TickStats {
        let span = info_span!(
            "tick",
            generation = self.board.generation(),
            next_generation = field::Empty,
            size = %self.board.size(),
            live_cells = field::Empty,
            dead_cells = field::Empty,
        );
        let _enter = span.enter();

        let (next, stats) = self.board.tick_with_stats();
        span.record("next_generation", stats.next_generation);
        span.record("live_cells", stats.live_cells);
        span.record("dead_cells", stats.dead_cells);
        trace!(live_after = next.live_cells(), "Tick complete");

        self.board = next;
        stats
    }
}
