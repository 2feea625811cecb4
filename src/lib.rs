//! Optimal solver for N×N sliding-tile puzzles.
//!
//! A [`Board`] is an immutable grid of numbered tiles with one blank. [`solve`]
//! runs A* with the Manhattan-distance [`heuristic()`] and returns the shortest
//! sequence of boards from the start to the goal, or `None` when the goal is
//! not reachable by blank moves. [`moves_from_path`] turns that sequence into
//! [`Move`] descriptors.
//!
//! ```
//! use tile_solver::{moves_from_path, parse_board, solve, Board};
//!
//! let start = parse_board("1 2 3\n4 5 6\n7 _ 8").unwrap();
//! let goal = Board::goal(3).unwrap();
//!
//! let path = solve(&start, &goal).unwrap().expect("solvable");
//! let moves = moves_from_path(&path);
//! assert_eq!(moves.len(), 1);
//! assert_eq!(moves[0].to_string(), "(2,2) → (2,1)");
//! ```

pub mod board;
pub mod error;
pub mod heuristic;
pub mod neighbors;
pub mod path;
pub mod search;

/// A `(row, column)` cell position.
pub type Coord = (usize, usize);

pub use board::{parse_board, Board, BLANK};
pub use error::{BoardError, ParseError, SolveError};
pub use heuristic::{heuristic, Heuristic};
pub use neighbors::{neighbors, Direction};
pub use path::{moves_from_path, Move};
pub use search::{breadth_first, search, solve, Search};
