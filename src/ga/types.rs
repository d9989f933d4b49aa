//! Chromosomes, individuals and solver states.

use crate::grid::Direction;

/// A fixed-length sequence of moves executed from the start cell.
pub type Chromosome = Vec<Direction>;

/// An evaluated chromosome.
///
/// Individuals compare by fitness only: higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub chromosome: Chromosome,

    /// Fitness score (maximized).
    pub fitness: f64,

    /// Sum of entry costs along the executed prefix.
    pub total_cost: u64,

    /// Whether the executed prefix ended on the goal.
    pub goal_reached: bool,

    /// Number of moves executed before the walk stopped.
    pub steps: usize,
}

impl Individual {
    /// Sorts `population` by descending fitness. The sort is stable, so
    /// equal-fitness individuals keep their evaluation order.
    pub fn sort_descending(population: &mut [Individual]) {
        population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }
}

/// Lifecycle of a [`GeneticSolver`](super::GeneticSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverState {
    /// Constructed; no generation evaluated yet.
    Initialized,
    /// At least one generation evaluated and the run continues.
    Evolving,
    /// Stopped with a best individual that reaches the goal.
    Converged,
    /// Stopped without ever reaching the goal.
    GaveUp,
}

impl SolverState {
    /// Returns `true` for [`Converged`](Self::Converged) and
    /// [`GaveUp`](Self::GaveUp).
    pub fn is_terminal(self) -> bool {
        matches!(self, SolverState::Converged | SolverState::GaveUp)
    }
}
