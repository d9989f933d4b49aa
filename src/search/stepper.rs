//! Animation-facing view over a [`FrontierSearch`].

use std::collections::BTreeSet;

use super::engine::{Expansion, FrontierSearch};
use super::policy::SearchPolicy;
use crate::dispatch::{SolveOutcome, NO_PATH_COST};
use crate::grid::{Grid, Position};

/// Steps a frontier search one expansion at a time and exposes its open set,
/// closed set and final path.
///
/// Stepping to completion yields exactly the outcome of
/// [`FrontierSearch::run`] on the same grid.
#[derive(Debug)]
pub struct SearchStepper<'a> {
    search: FrontierSearch<'a>,
    outcome: Option<SolveOutcome>,
}

impl<'a> SearchStepper<'a> {
    pub fn new(grid: &'a Grid, policy: SearchPolicy) -> Self {
        Self {
            search: FrontierSearch::new(grid, policy),
            outcome: None,
        }
    }

    /// Performs one pop-and-expand cycle. No-op once finished.
    pub fn advance(&mut self) -> Expansion {
        let step = self.search.advance();
        if self.outcome.is_none() && self.search.is_finished() {
            self.outcome = Some(self.search.outcome());
        }
        step
    }

    pub fn finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Positions currently held in the frontier, superseded entries excluded.
    pub fn open_set(&self) -> BTreeSet<Position> {
        self.search.queued().collect()
    }

    /// Positions already finalized.
    pub fn closed_set(&self) -> BTreeSet<Position> {
        self.search.finalized().collect()
    }

    /// The start-to-goal path; empty until finished with the goal reached.
    pub fn path(&self) -> &[Position] {
        self.outcome
            .as_ref()
            .map(|o| o.path.as_slice())
            .unwrap_or(&[])
    }

    /// Path cost, or [`NO_PATH_COST`] until a path has been found.
    pub fn total_cost(&self) -> i64 {
        self.outcome.as_ref().map_or(NO_PATH_COST, |o| o.cost)
    }

    pub fn goal_reached(&self) -> bool {
        self.outcome.as_ref().is_some_and(|o| o.goal_reached)
    }

    pub fn expansions(&self) -> usize {
        self.search.expansions()
    }

    pub fn policy(&self) -> SearchPolicy {
        self.search.policy()
    }

    pub fn name(&self) -> &'static str {
        self.search.policy().name()
    }

    /// The final outcome, or the no-path sentinel while still running.
    pub fn outcome(&self) -> SolveOutcome {
        self.outcome.clone().unwrap_or_else(SolveOutcome::no_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S\"1\"\"4\"\"1\"\"1\"
\"2\"#\"1\"#\"1\"
\"1\"\"1\"\"1\"#\"1\"
#\"3\"##\"2\"
\"1\"\"1\"\"1\"\"1\"G";

    fn step_to_end(stepper: &mut SearchStepper<'_>) -> usize {
        let mut steps = 0;
        while !stepper.finished() {
            stepper.advance();
            steps += 1;
        }
        steps
    }

    #[test]
    fn test_stepper_matches_run() {
        let grid: Grid = MAZE.parse().unwrap();
        for policy in [
            SearchPolicy::Dijkstra,
            SearchPolicy::AStar,
            SearchPolicy::GreedyBestFirst,
        ] {
            let mut stepper = SearchStepper::new(&grid, policy);
            step_to_end(&mut stepper);
            let batch = FrontierSearch::new(&grid, policy).run();
            assert_eq!(stepper.outcome(), batch, "{policy:?}");
            assert_eq!(stepper.path(), batch.path.as_slice());
            assert_eq!(stepper.total_cost(), batch.cost);
        }
    }

    #[test]
    fn test_path_hidden_until_finished() {
        let grid: Grid = MAZE.parse().unwrap();
        let mut stepper = SearchStepper::new(&grid, SearchPolicy::Dijkstra);
        assert_eq!(stepper.open_set(), BTreeSet::from([grid.start()]));
        assert!(stepper.closed_set().is_empty());

        stepper.advance();
        assert!(!stepper.finished());
        assert!(stepper.path().is_empty());
        assert_eq!(stepper.total_cost(), NO_PATH_COST);
        assert_eq!(stepper.closed_set(), BTreeSet::from([grid.start()]));
        assert!(!stepper.open_set().is_empty());
    }

    #[test]
    fn test_advance_after_finish_is_noop() {
        let grid: Grid = MAZE.parse().unwrap();
        let mut stepper = SearchStepper::new(&grid, SearchPolicy::AStar);
        step_to_end(&mut stepper);

        let open = stepper.open_set();
        let closed = stepper.closed_set();
        let path = stepper.path().to_vec();
        let cost = stepper.total_cost();
        let expansions = stepper.expansions();

        for _ in 0..5 {
            assert_eq!(stepper.advance(), Expansion::Idle);
        }
        assert_eq!(stepper.open_set(), open);
        assert_eq!(stepper.closed_set(), closed);
        assert_eq!(stepper.path(), path.as_slice());
        assert_eq!(stepper.total_cost(), cost);
        assert_eq!(stepper.expansions(), expansions);
    }

    #[test]
    fn test_exhausted_stepper_reports_no_path() {
        let grid: Grid = "S\"1\"#G".parse().unwrap();
        let mut stepper = SearchStepper::new(&grid, SearchPolicy::GreedyBestFirst);
        step_to_end(&mut stepper);
        assert!(!stepper.goal_reached());
        assert!(stepper.path().is_empty());
        assert_eq!(stepper.total_cost(), NO_PATH_COST);
        assert!(stepper.open_set().is_empty());
        assert_eq!(stepper.closed_set().len(), 2);
    }

    #[test]
    fn test_names() {
        let grid: Grid = "SG".parse().unwrap();
        assert_eq!(
            SearchStepper::new(&grid, SearchPolicy::Dijkstra).name(),
            "Dijkstra's Algorithm"
        );
        assert_eq!(
            SearchStepper::new(&grid, SearchPolicy::GreedyBestFirst).name(),
            "Greedy Best-First"
        );
    }
}
