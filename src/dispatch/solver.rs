//! Strategy dispatch: batch solving and steppable handles.

use std::collections::BTreeSet;

use tracing::debug;

use super::types::{SolveOutcome, Strategy};
use crate::error::MazeResult;
use crate::ga::{GeneticConfig, GeneticSolver};
use crate::grid::{Grid, Position};
use crate::search::{FrontierSearch, SearchStepper};

/// A steppable handle over any strategy, for animation.
///
/// Frontier strategies advance one expansion per call, the genetic solver
/// one generation. Calling [`advance`](Self::advance) after
/// [`finished`](Self::finished) is a no-op.
#[derive(Debug)]
pub enum Stepper<'a> {
    Search(SearchStepper<'a>),
    Genetic(GeneticSolver<'a>),
}

impl<'a> Stepper<'a> {
    /// Builds a stepper for `strategy`. `config` is only used by
    /// [`Strategy::Genetic`].
    ///
    /// # Errors
    ///
    /// [`MazeError::InvalidConfig`](crate::error::MazeError::InvalidConfig)
    /// if the genetic configuration is invalid.
    pub fn new(grid: &'a Grid, strategy: Strategy, config: &GeneticConfig) -> MazeResult<Self> {
        Ok(match strategy.policy() {
            Some(policy) => Stepper::Search(SearchStepper::new(grid, policy)),
            None => Stepper::Genetic(GeneticSolver::new(grid, config.clone())?),
        })
    }

    pub fn advance(&mut self) {
        match self {
            Stepper::Search(s) => {
                s.advance();
            }
            Stepper::Genetic(g) => {
                g.step();
            }
        }
    }

    pub fn finished(&self) -> bool {
        match self {
            Stepper::Search(s) => s.finished(),
            Stepper::Genetic(g) => g.finished(),
        }
    }

    pub fn open_set(&self) -> BTreeSet<Position> {
        match self {
            Stepper::Search(s) => s.open_set(),
            Stepper::Genetic(g) => g.open_set(),
        }
    }

    pub fn closed_set(&self) -> BTreeSet<Position> {
        match self {
            Stepper::Search(s) => s.closed_set(),
            Stepper::Genetic(g) => g.closed_set(),
        }
    }

    /// Frontier strategies: the final path once found, empty before.
    /// Genetic: the best individual's walk so far.
    pub fn path(&self) -> &[Position] {
        match self {
            Stepper::Search(s) => s.path(),
            Stepper::Genetic(g) => g.path(),
        }
    }

    pub fn total_cost(&self) -> i64 {
        match self {
            Stepper::Search(s) => s.total_cost(),
            Stepper::Genetic(g) => g.total_cost(),
        }
    }

    pub fn goal_reached(&self) -> bool {
        match self {
            Stepper::Search(s) => s.goal_reached(),
            Stepper::Genetic(g) => g.goal_reached(),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Stepper::Search(s) => s.name().to_string(),
            Stepper::Genetic(g) => g.name(),
        }
    }

    /// Advances until finished and returns the outcome.
    pub fn run(&mut self) -> SolveOutcome {
        while !self.finished() {
            self.advance();
        }
        self.outcome()
    }

    /// Outcome at the current point of the run.
    pub fn outcome(&self) -> SolveOutcome {
        match self {
            Stepper::Search(s) => s.outcome(),
            Stepper::Genetic(g) => g.outcome(),
        }
    }
}

/// Genetic configuration used when none is given: a preset sized to the
/// maze, seeded with `seed`.
pub fn default_genetic_config(grid: &Grid, seed: Option<u64>) -> GeneticConfig {
    GeneticConfig::auto_select(grid.len()).with_seed_opt(seed)
}

/// Solves `grid` with the strategy named `strategy_id`.
///
/// `seed` only affects the genetic strategy.
///
/// # Errors
///
/// [`MazeError::InvalidStrategy`](crate::error::MazeError::InvalidStrategy)
/// for an unknown identifier.
pub fn solve(grid: &Grid, strategy_id: &str, seed: Option<u64>) -> MazeResult<SolveOutcome> {
    let strategy: Strategy = strategy_id.parse()?;
    solve_with(grid, strategy, &default_genetic_config(grid, seed))
}

/// Solves `grid` with `strategy`, using `config` for the genetic solver.
///
/// # Errors
///
/// [`MazeError::InvalidConfig`](crate::error::MazeError::InvalidConfig)
/// if the genetic configuration is invalid.
pub fn solve_with(
    grid: &Grid,
    strategy: Strategy,
    config: &GeneticConfig,
) -> MazeResult<SolveOutcome> {
    let outcome = match strategy.policy() {
        Some(policy) => FrontierSearch::new(grid, policy).run(),
        None => GeneticSolver::new(grid, config.clone())?.run(),
    };
    debug!(
        strategy = strategy.name(),
        cost = outcome.cost,
        goal_reached = outcome.goal_reached,
        "solve finished"
    );
    Ok(outcome)
}

/// Creates a steppable handle for the strategy named `strategy_id`.
///
/// # Errors
///
/// [`MazeError::InvalidStrategy`](crate::error::MazeError::InvalidStrategy)
/// for an unknown identifier.
pub fn create_stepper<'a>(
    grid: &'a Grid,
    strategy_id: &str,
    seed: Option<u64>,
) -> MazeResult<Stepper<'a>> {
    let strategy: Strategy = strategy_id.parse()?;
    Stepper::new(grid, strategy, &default_genetic_config(grid, seed))
}

// ============================================================================
// Tests
// ============================================================================
