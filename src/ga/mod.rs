//! Hive-mind genetic maze solver.
//!
//! Candidate solutions are fixed-length move sequences executed from the
//! start cell. Every individual of one solver reads and writes a shared
//! [`PenaltyMemory`] (the "hive mind") that remembers moves leading into
//! walls, off the grid or into loops, so later generations avoid them.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: Algorithm parameters (population, rates, presets)
//! - [`FitnessWeights`]: Reward and penalty magnitudes of the fitness walk
//! - [`GeneticSolver`]: Steppable state machine, one generation per step
//! - [`Individual`]: An evaluated chromosome
//!
//! # Submodules
//!
//! - [`operators`]: Biased-random and guided generation, segment-swap
//!   crossover, replay mutation
//! - [`selection`]: Tournament selection for maximization
//!
//! # States
//!
//! ```text
//! Initialized ──step──▶ Evolving ──step──▶ Converged | GaveUp
//!                         ▲   │
//!                         └───┘
//! ```
//!
//! The solver stops after `max(rows, cols) * stagnation_factor` generations
//! without improvement, or at the `max_generations` cap. Not reaching the
//! goal is reported through [`Individual::goal_reached`], never as an error.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eshelman (1991), "The CHC Adaptive Search Algorithm" (population restarts)

mod config;
mod fitness;
mod hive;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{FitnessWeights, GeneticConfig};
pub use fitness::evaluate;
pub use hive::PenaltyMemory;
pub use runner::GeneticSolver;
pub use types::{Chromosome, Individual, SolverState};
