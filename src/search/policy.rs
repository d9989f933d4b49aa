//! Priority policies for [`FrontierSearch`](super::FrontierSearch).

use crate::grid::Position;

/// Which priority function drives the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPolicy {
    /// Uniform-cost search: priority is the accumulated cost `g`.
    Dijkstra,
    /// Priority `g + h` with `h` the Manhattan distance to the goal.
    AStar,
    /// Priority `h` only. Fast, not optimal.
    GreedyBestFirst,
}

impl SearchPolicy {
    /// Priority key of a node at `pos` with accumulated cost `g`.
    pub fn key(self, g: u64, pos: Position, goal: Position) -> u64 {
        match self {
            SearchPolicy::Dijkstra => g,
            SearchPolicy::AStar => g + u64::from(heuristic(pos, goal)),
            SearchPolicy::GreedyBestFirst => u64::from(heuristic(pos, goal)),
        }
    }

    /// Whether the policy relaxes costs (and may re-enqueue a position)
    /// instead of marking positions visited on first discovery.
    pub fn relaxes(self) -> bool {
        !matches!(self, SearchPolicy::GreedyBestFirst)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SearchPolicy::Dijkstra => "Dijkstra's Algorithm",
            SearchPolicy::AStar => "A* Search",
            SearchPolicy::GreedyBestFirst => "Greedy Best-First",
        }
    }
}

/// Manhattan distance heuristic.
fn heuristic(pos: Position, goal: Position) -> u32 {
    pos.manhattan(goal)
}
