//! Sliding tile puzzle solver.
//!
//! This crate solves N-by-N sliding puzzles with A* search. Solvability is
//! decided without a parity formula: the solver races a second search from
//! the board's twin (two adjacent tiles swapped) and whichever reaches the
//! goal first settles the question.

pub mod board;
pub mod error;
pub mod frontier;
pub mod input;
pub mod pruning;
pub mod scramble;
pub mod solver;

// Re-export main types
pub use board::{Board, Neighbors, ShapeError, BLANK};
pub use error::InputError;
pub use input::{parse_board, read_board_file};
pub use pruning::PruningRule;
pub use scramble::{random_permutation, scramble};
pub use solver::{Heuristic, Outcome, SearchStats, Solver, SolverConfig};
