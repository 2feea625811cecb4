use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use pathfinding::directed::bfs::bfs;
use tracing::{debug, trace};

use crate::{
    board::Board, error::SolveError, heuristic::Heuristic, path::reconstruct,
};

/// A distinct board reached during a search, interned once.
pub(crate) struct Node {
    pub(crate) board: Board,
    pub(crate) g: u32,
    pub(crate) parent: Option<usize>,
}

// min-heap on (f, seq); seq is unique so ties never reach `g`/`node`
#[derive(PartialEq, Eq)]
struct Entry {
    f: u32,
    seq: u64,
    g: u32,
    node: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of one A* run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    /// Boards expanded before the goal was dequeued.
    pub visited: usize,
    /// Successor boards produced by those expansions.
    pub generated: usize,
    /// Boards from start to goal inclusive, or `None` if the goal is unreachable.
    pub path: Option<Vec<Board>>,
}

/// Checks that `start` and `goal` are boards of the same puzzle.
fn validate(start: &Board, goal: &Board) -> Result<Heuristic, SolveError> {
    if start.size() != goal.size() {
        return Err(SolveError::SizeMismatch {
            start: start.size(),
            goal: goal.size(),
        });
    }

    // both boards hold size² - 1 distinct tiles, so inclusion means equality
    let heuristic = Heuristic::new(goal);
    if let Some((_, tile)) = start
        .tiles()
        .find(|&(_, tile)| heuristic.goal_position(tile).is_none())
    {
        return Err(SolveError::UnknownTile(tile));
    }

    Ok(heuristic)
}

/// Runs A* from `start` to `goal`, returning the path and expansion counts.
pub fn search(start: &Board, goal: &Board) -> Result<Search, SolveError> {
    let heuristic = validate(start, goal)?;
    debug!(
        size = start.size(),
        estimate = heuristic.estimate(start),
        "starting search"
    );

    let mut nodes = vec![Node {
        board: start.clone(),
        g: 0,
        parent: None,
    }];
    let mut index = HashMap::from([(start.clone(), 0)]);
    let mut frontier = BinaryHeap::new();
    let mut seq: u64 = 0;
    frontier.push(Entry {
        f: 0,
        seq,
        g: 0,
        node: 0,
    });

    let mut visited = 0;
    let mut generated = 0;
    let mut stale = 0;

    while let Some(Entry { g, node, .. }) = frontier.pop() {
        if g > nodes[node].g {
            stale += 1;
            continue;
        }

        if nodes[node].board == *goal {
            let path = reconstruct(&nodes, node);
            debug!(
                visited,
                generated,
                stale,
                moves = path.len() - 1,
                "solved"
            );
            return Ok(Search {
                visited,
                generated,
                path: Some(path),
            });
        }

        visited += 1;
        trace!(node, g, frontier = frontier.len(), "expanding");

        let tentative = g + 1;
        let successors = nodes[node].board.successors();
        generated += successors.len();

        for next in successors {
            let ix = match index.get(&next) {
                Some(&ix) => {
                    if tentative >= nodes[ix].g {
                        continue;
                    }
                    nodes[ix].g = tentative;
                    nodes[ix].parent = Some(node);
                    ix
                }
                None => {
                    let ix = nodes.len();
                    index.insert(next.clone(), ix);
                    nodes.push(Node {
                        board: next,
                        g: tentative,
                        parent: Some(node),
                    });
                    ix
                }
            };

            seq += 1;
            frontier.push(Entry {
                f: tentative + heuristic.estimate(&nodes[ix].board),
                seq,
                g: tentative,
                node: ix,
            });
        }
    }

    debug!(visited, generated, stale, "frontier exhausted, no solution");
    Ok(Search {
        visited,
        generated,
        path: None,
    })
}

/// Shortest path of boards from `start` to `goal`, or `None` if unreachable.
pub fn solve(start: &Board, goal: &Board) -> Result<Option<Vec<Board>>, SolveError> {
    search(start, goal).map(|s| s.path)
}

/// Uninformed breadth-first search; the reference for [`solve`]'s optimality.
pub fn breadth_first(start: &Board, goal: &Board) -> Result<Option<Vec<Board>>, SolveError> {
    validate(start, goal)?;
    Ok(bfs(start, |b| b.successors(), |b| b == goal))
}
