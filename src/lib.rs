//! Sliding-Tile Puzzle Solver Library
//!
//! Finds shortest move sequences for sliding-tile puzzles (the 8-puzzle and
//! its rectangular relatives) with A* search.
//!
//! ```
//! use slider::{solve, Board, Move};
//!
//! let initial: Board = "1 2 3/4 0 6/7 5 8".parse().unwrap();
//! let goal = Board::canonical_goal(3, 3).unwrap();
//! let solution = solve(&initial, &goal).unwrap().into_solution().unwrap();
//! assert_eq!(solution.moves().collect::<Vec<_>>(), [Move::Down, Move::Right]);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod parity;
pub mod persistence;
pub mod render;
pub mod solver;

pub use board::{Board, Tile, BLANK};
pub use config::{HeuristicKind, SolverConfig};
pub use error::InvalidInput;
pub use heuristic::{Goal, Heuristic, Manhattan, MisplacedTiles, Zero};
pub use moves::Move;
pub use solver::{
    solve, SearchStats, Solution, SolveOutcome, Solver, Step, UnsolvableReason,
};
