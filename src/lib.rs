//! An N-by-N sliding tile puzzle solver.
//!
//! The solver runs two A* searches in lockstep: one from the initial board
//! and one from a "twin" board with a single adjacent pair of tiles swapped.
//! Exactly one of the two is solvable for any permutation, so whichever
//! search reaches the goal first decides solvability and, for the original
//! board, the minimum move count.

pub mod board;
pub mod error;
pub mod input;
pub mod solver;

pub use board::{Board, Move};
pub use error::PuzzleError;
pub use solver::Solver;
