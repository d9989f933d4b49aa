//! Strategy dispatcher.
//!
//! Maps a strategy identifier to an engine and exposes two entry points:
//!
//! - [`solve`]: run to completion and return a [`SolveOutcome`]
//! - [`create_stepper`]: a [`Stepper`] handle for animation
//!
//! | Identifier (case-insensitive)          | Strategy                      |
//! |----------------------------------------|-------------------------------|
//! | `dijkstra`                             | [`Strategy::Dijkstra`]        |
//! | `astar`, `a*`, `a_star`                | [`Strategy::AStar`]           |
//! | `greedy`, `gbfs`, `greedy-best-first`  | [`Strategy::GreedyBestFirst`] |
//! | `genetic`, `ga`                        | [`Strategy::Genetic`]         |
//!
//! An unknown identifier yields
//! [`MazeError::InvalidStrategy`](crate::error::MazeError::InvalidStrategy).
//! An unreachable goal is not an error: frontier strategies report
//! [`NO_PATH_COST`] with an empty path, the genetic solver reports
//! `goal_reached == false`.

mod solver;
mod types;

pub use solver::{create_stepper, default_genetic_config, solve, solve_with, Stepper};
pub use types::{SolveOutcome, Strategy, NO_PATH_COST};
