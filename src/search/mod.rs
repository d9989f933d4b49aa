//! Frontier-based graph search.
//!
//! Dijkstra, A* and Greedy Best-First share one mechanism, [`FrontierSearch`],
//! and differ only in their [`SearchPolicy`]:
//!
//! | Policy | Priority key | Revisits |
//! |---|---|---|
//! | [`SearchPolicy::Dijkstra`] | `g` | relaxation, stale entries skipped on pop |
//! | [`SearchPolicy::AStar`] | `g + h` | relaxation, stale entries skipped on pop |
//! | [`SearchPolicy::GreedyBestFirst`] | `h` | none; each cell enqueued once |
//!
//! `h` is the Manhattan distance to the goal. A* is optimal only while that
//! heuristic is admissible, i.e. when every entered cell costs at least 1.
//!
//! The engine is a resumable state machine: [`FrontierSearch::advance`]
//! performs one pop-and-expand cycle and [`FrontierSearch::run`] loops it, so
//! stepping and running to completion produce identical results.
//! [`SearchStepper`] adds the read-only views an animator needs.
//!
//! # References
//!
//! - Dijkstra (1959), "A note on two problems in connexion with graphs"
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"

mod engine;
mod frontier;
mod policy;
mod stepper;

pub use engine::{Expansion, FrontierSearch};
pub use policy::SearchPolicy;
pub use stepper::SearchStepper;
