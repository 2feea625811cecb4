use std::fmt::{self, Display};

use smallvec::SmallVec;

use crate::{board::Board, Coord};

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The cell one step from `from`, if it is inside a `size`×`size` grid.
    pub fn step(self, from: Coord, size: usize) -> Option<Coord> {
        let (r, c) = from;
        match self {
            Direction::Up => r.checked_sub(1).map(|r| (r, c)),
            Direction::Down => (r + 1 < size).then(|| (r + 1, c)),
            Direction::Left => c.checked_sub(1).map(|c| (r, c)),
            Direction::Right => (c + 1 < size).then(|| (r, c + 1)),
        }
    }

    /// The direction leading from `from` to an orthogonally adjacent `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        match (to.0 as isize - from.0 as isize, to.1 as isize - from.1 as isize) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}

/// Cells the blank at `blank` may move to: up, down, left, right, in bounds.
pub fn neighbors(blank: Coord, size: usize) -> SmallVec<[Coord; 4]> {
    Direction::ALL
        .iter()
        .filter_map(|d| d.step(blank, size))
        .collect()
}

impl Board {
    /// Every board one blank move away, in [`Direction::ALL`] order.
    pub fn successors(&self) -> SmallVec<[Board; 4]> {
        neighbors(self.blank(), self.size())
            .into_iter()
            .map(|target| self.swap_blank(target))
            .collect()
    }
}
