use thiserror::Error;

use crate::Coord;

/// Errors raised while building or mutating a [`crate::Board`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board must be at least 2x2, got {0}x{0}")]
    TooSmall(usize),

    #[error("a {0}x{0} board has more tiles than can be numbered")]
    TooLarge(usize),

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("{cells} cells cannot fill a {size}x{size} board")]
    WrongCellCount { cells: usize, size: usize },

    #[error("board has no blank cell")]
    NoBlank,

    #[error("board has more than one blank: {first:?} and {second:?}")]
    MultipleBlanks { first: Coord, second: Coord },

    #[error("tile at {0:?} is zero; tiles must be positive")]
    ZeroTile(Coord),

    #[error("tile {tile} appears at both {first:?} and {second:?}")]
    DuplicateTile {
        tile: u16,
        first: Coord,
        second: Coord,
    },

    #[error("illegal move {from:?} -> {to:?}: blank is at {blank:?}")]
    IllegalMove {
        from: Coord,
        to: Coord,
        blank: Coord,
    },
}

/// Errors raised while reading a board from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid cell '{cell}' on line {line}")]
    InvalidCell { line: usize, cell: String },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors raised when the start and goal cannot describe the same puzzle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("start is {start}x{start} but goal is {goal}x{goal}")]
    SizeMismatch { start: usize, goal: usize },

    #[error("tile {0} is in the start board but not in the goal")]
    UnknownTile(u16),
}
