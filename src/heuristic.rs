use crate::{board::Board, Coord};

/// Manhattan-distance estimator with the goal's tile positions precomputed.
///
/// The estimate is admissible and consistent for single blank moves: each
/// move shifts one tile by one cell, so the sum changes by exactly one.
pub struct Heuristic {
    goal_positions: Vec<Option<Coord>>,
}

impl Heuristic {
    pub fn new(goal: &Board) -> Heuristic {
        let len = goal.tiles().map(|(_, t)| usize::from(t) + 1).max().unwrap_or(0);
        let mut goal_positions = vec![None; len];
        for (at, tile) in goal.tiles() {
            goal_positions[usize::from(tile)] = Some(at);
        }

        Heuristic { goal_positions }
    }

    /// Where `tile` sits in the goal, if it is there at all.
    pub fn goal_position(&self, tile: u16) -> Option<Coord> {
        self.goal_positions.get(usize::from(tile)).copied().flatten()
    }

    /// Sum of per-tile Manhattan distances. Tiles missing from the goal
    /// contribute nothing.
    pub fn estimate(&self, state: &Board) -> u32 {
        state
            .tiles()
            .filter_map(|((r, c), tile)| {
                let (gr, gc) = self.goal_position(tile)?;
                Some((r.abs_diff(gr) + c.abs_diff(gc)) as u32)
            })
            .sum()
    }
}

/// Manhattan distance between `state` and `goal`, summed over all tiles.
pub fn heuristic(state: &Board, goal: &Board) -> u32 {
    Heuristic::new(goal).estimate(state)
}
