use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{board::Board, neighbors::Direction, search::Node, Coord};

/// One tile sliding from `from` into the blank at `to`.
///
/// After the move the blank sits at `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    /// Direction the blank travelled, or `None` if the cells are not adjacent.
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.to, self.from)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) → ({},{})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Walks parent links back from `end` and returns the boards root first.
pub(crate) fn reconstruct(nodes: &[Node], end: usize) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(ix) = current {
        path.push(nodes[ix].board.clone());
        current = nodes[ix].parent;
    }

    path.reverse();
    path
}

/// Move descriptors for each consecutive pair of boards in `path`.
pub fn moves_from_path(path: &[Board]) -> Vec<Move> {
    path.iter()
        .tuple_windows()
        .map(|(before, after)| Move {
            from: after.blank(),
            to: before.blank(),
        })
        .collect()
}
