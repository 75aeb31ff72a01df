//! Game of Life board engine.
//!
//! This crate holds the immutable board, the neighbour rule that drives each
//! generation transition, and the text and wire forms a board travels in.

pub mod board;
pub mod neighbours;
pub mod seed;
pub mod simulation;
pub mod snapshot;

pub use board::Board;
pub use neighbours::{count_live_neighbours, next_state};
pub use seed::{load_seed, parse_seed, render};
pub use simulation::Simulation;
pub use snapshot::BoardSnapshot;
