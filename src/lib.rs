//! Weighted grid maze solving.
//!
//! A maze is a rectangular [`Grid`](grid::Grid) of walls, one start, one
//! goal and number cells whose value is the cost of entering them. Four
//! strategies find a start-to-goal path:
//!
//! - **Dijkstra**: cheapest path, always.
//! - **A\***: Dijkstra guided by the Manhattan distance; cheapest when every
//!   number cell costs at least 1.
//! - **Greedy Best-First**: expands whatever looks closest to the goal and
//!   visits each cell once. Fast, not optimal.
//! - **Genetic (hive mind)**: evolves fixed-length move sequences against a
//!   shared penalty memory of dead ends. Stochastic, seedable.
//!
//! Every strategy can run to completion ([`dispatch::solve`]) or be stepped
//! one expansion / generation at a time ([`dispatch::create_stepper`]) for
//! animation.
//!
//! # Example
//!
//! ```
//! use u_mazepath::dispatch::solve;
//! use u_mazepath::grid::Grid;
//!
//! let grid: Grid = "S\"1\"#\n\"1\"#\"1\"\n\"1\"G\"1\"".parse().unwrap();
//! let outcome = solve(&grid, "dijkstra", None).unwrap();
//! assert!(outcome.goal_reached);
//! assert_eq!(outcome.cost, 2);
//! ```
//!
//! # Architecture
//!
//! Engines never touch process-wide state: the genetic solver owns its
//! random source ([`random::create_rng`]) and its penalty memory, so equal
//! seeds give equal runs.

pub mod dispatch;
pub mod error;
pub mod ga;
pub mod grid;
pub mod random;
pub mod search;

pub use dispatch::{create_stepper, solve, SolveOutcome, Stepper, Strategy};
pub use error::{MazeError, MazeResult};
