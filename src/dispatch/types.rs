//! Strategy identifiers and solve results.

use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use crate::grid::Position;
use crate::search::SearchPolicy;

/// Cost reported by the frontier strategies when the goal is unreachable.
pub const NO_PATH_COST: i64 = -1;

/// Result of solving a maze with one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOutcome {
    /// Sum of entry costs along `path` (start excluded), or [`NO_PATH_COST`].
    pub cost: i64,
    pub goal_reached: bool,
    /// Visited cells, start first.
    pub path: Vec<Position>,
}

impl SolveOutcome {
    /// A path that ends on the goal.
    pub fn reached(cost: u64, path: Vec<Position>) -> Self {
        Self {
            cost: cost as i64,
            goal_reached: true,
            path,
        }
    }

    /// The no-path sentinel: cost [`NO_PATH_COST`] and an empty path.
    pub fn no_path() -> Self {
        Self {
            cost: NO_PATH_COST,
            goal_reached: false,
            path: Vec::new(),
        }
    }
}

/// The available solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Dijkstra,
    AStar,
    GreedyBestFirst,
    Genetic,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Dijkstra,
        Strategy::AStar,
        Strategy::GreedyBestFirst,
        Strategy::Genetic,
    ];

    /// Frontier policy behind this strategy, if it is a frontier search.
    pub fn policy(self) -> Option<SearchPolicy> {
        match self {
            Strategy::Dijkstra => Some(SearchPolicy::Dijkstra),
            Strategy::AStar => Some(SearchPolicy::AStar),
            Strategy::GreedyBestFirst => Some(SearchPolicy::GreedyBestFirst),
            Strategy::Genetic => None,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self.policy() {
            Some(policy) => policy.name(),
            None => "GA HiveMind",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MazeError;

    /// Parses a strategy identifier, ignoring case and surrounding spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" | "a_star" => Ok(Strategy::AStar),
            "greedy" | "gbfs" | "greedy-best-first" => Ok(Strategy::GreedyBestFirst),
            "genetic" | "ga" => Ok(Strategy::Genetic),
            _ => Err(MazeError::InvalidStrategy(s.to_string())),
        }
    }
}
