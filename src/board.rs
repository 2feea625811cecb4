use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    error::{BoardError, ParseError},
    neighbors::Direction,
    path::Move,
    Coord,
};

/// Cell value of the blank. Tiles are always positive.
pub const BLANK: u16 = 0;

/// An immutable N×N arrangement of tiles with exactly one blank.
///
/// Cells are stored row-major. Two boards are equal (and hash equal) iff
/// every cell matches, which makes `Board` usable directly as a search node.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    size: usize,
    blank: usize,
    cells: Vec<u16>,
}

impl Board {
    /// Builds a board from rows of cells, `None` marking the blank.
    pub fn new(from: Vec<Vec<Option<u16>>>) -> Result<Board, BoardError> {
        let size = from.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in from.into_iter().enumerate() {
            if line.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }

            for (col, cell) in line.into_iter().enumerate() {
                cells.push(match cell {
                    None => BLANK,
                    Some(BLANK) => return Err(BoardError::ZeroTile((row, col))),
                    Some(tile) => tile,
                });
            }
        }

        Board::from_cells(size, cells)
    }

    /// Builds a board from row-major cells where [`BLANK`] marks the blank.
    pub fn from_cells(size: usize, cells: Vec<u16>) -> Result<Board, BoardError> {
        if size < 2 {
            return Err(BoardError::TooSmall(size));
        }
        if cells.len() != size * size {
            return Err(BoardError::WrongCellCount {
                cells: cells.len(),
                size,
            });
        }

        let mut blank = None;
        let mut seen = HashMap::with_capacity(cells.len());
        for (ix, &cell) in cells.iter().enumerate() {
            let here = (ix / size, ix % size);
            if cell == BLANK {
                if let Some(first) = blank {
                    return Err(BoardError::MultipleBlanks {
                        first: (first / size, first % size),
                        second: here,
                    });
                }
                blank = Some(ix);
            } else if let Some(first) = seen.insert(cell, here) {
                return Err(BoardError::DuplicateTile {
                    tile: cell,
                    first,
                    second: here,
                });
            }
        }

        let blank = blank.ok_or(BoardError::NoBlank)?;
        Ok(Board { size, blank, cells })
    }

    /// The solved arrangement: tiles `1..size²` row-major, blank last.
    pub fn goal(size: usize) -> Result<Board, BoardError> {
        if size < 2 {
            return Err(BoardError::TooSmall(size));
        }
        let count = size
            .checked_mul(size)
            .filter(|&n| n <= usize::from(u16::MAX))
            .ok_or(BoardError::TooLarge(size))?;

        let cells = (1..count as u16).chain([BLANK]).collect();
        Ok(Board {
            size,
            blank: count - 1,
            cells,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn blank(&self) -> Coord {
        self.coord(self.blank)
    }

    /// Tile at `at`, or `None` for the blank or an out-of-bounds coordinate.
    pub fn tile(&self, at: Coord) -> Option<u16> {
        if at.0 >= self.size || at.1 >= self.size {
            return None;
        }
        Some(self[at]).filter(|&c| c != BLANK)
    }

    /// Every non-blank tile with its position, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, u16)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != BLANK)
            .map(move |(ix, &c)| (self.coord(ix), c))
    }

    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.blank == last
            && self.cells[..last]
                .iter()
                .zip(1..)
                .all(|(&cell, expected)| cell == expected)
    }

    /// A copy of this board with the blank swapped into `target`.
    ///
    /// `target` must be in bounds; adjacency is the caller's concern.
    pub(crate) fn swap_blank(&self, target: Coord) -> Board {
        let to = target.0 * self.size + target.1;
        let mut cells = self.cells.clone();
        cells.swap(self.blank, to);
        Board {
            size: self.size,
            blank: to,
            cells,
        }
    }

    /// Slides the tile at `mv.from` into the blank at `mv.to`.
    pub fn apply(&self, mv: &Move) -> Result<Board, BoardError> {
        let blank = self.blank();
        let legal = mv.to == blank
            && mv.from.0 < self.size
            && mv.from.1 < self.size
            && Direction::between(mv.to, mv.from).is_some();

        if !legal {
            return Err(BoardError::IllegalMove {
                from: mv.from,
                to: mv.to,
                blank,
            });
        }

        Ok(self.swap_blank(mv.from))
    }

    fn coord(&self, ix: usize) -> Coord {
        (ix / self.size, ix % self.size)
    }
}

impl Index<Coord> for Board {
    type Output = u16;
    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index.0 * self.size + index.1]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .max()
            .map_or(1, |max| max.to_string().len());

        let rows = self.cells.chunks(self.size).map(|line| {
            line.iter()
                .map(|&c| {
                    if c == BLANK {
                        format!("{:>width$}", "_")
                    } else {
                        format!("{c:>width$}")
                    }
                })
                .join(" ")
        });

        write!(f, "{}", rows.format("\n"))
    }
}

impl FromStr for Board {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

/// Reads a board written one row per line, cells separated by whitespace.
///
/// `_`, `.` and `0` denote the blank. Empty lines are ignored.
pub fn parse_board(b: &str) -> Result<Board, ParseError> {
    let mut rows = Vec::new();
    for (line_ix, line) in b.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|cell| match cell {
                "_" | "." | "0" => Ok(None),
                _ => cell
                    .parse::<u16>()
                    .map(Some)
                    .map_err(|_| ParseError::InvalidCell {
                        line: line_ix + 1,
                        cell: cell.to_string(),
                    }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Ok(Board::new(rows)?)
}
