//! The resumable frontier search.

use tracing::{debug, trace};

use super::frontier::Frontier;
use super::policy::SearchPolicy;
use crate::dispatch::SolveOutcome;
use crate::grid::{Grid, Position};

/// What one call to [`FrontierSearch::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// The node at this position was finalized and its neighbours relaxed.
    Expanded(Position),
    /// A superseded frontier entry for this position was discarded.
    Stale(Position),
    /// The goal was popped; the search is finished.
    Reached(Position),
    /// The frontier ran dry; the search is finished without a path.
    Exhausted,
    /// The search had already finished; nothing happened.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    Found { node: usize },
    Exhausted,
}

/// Frontier search over a [`Grid`] driven by a [`SearchPolicy`].
///
/// # Usage
///
/// ```
/// use u_mazepath::grid::Grid;
/// use u_mazepath::search::{FrontierSearch, SearchPolicy};
///
/// let grid: Grid = "S\"2\"\"1\"G".parse().unwrap();
/// let outcome = FrontierSearch::new(&grid, SearchPolicy::Dijkstra).run();
/// assert!(outcome.goal_reached);
/// assert_eq!(outcome.cost, 3);
/// ```
#[derive(Debug)]
pub struct FrontierSearch<'a> {
    grid: &'a Grid,
    policy: SearchPolicy,
    frontier: Frontier,
    /// Best known cost per cell (relaxing policies only).
    best_g: Vec<u64>,
    /// Cells already enqueued once (greedy only).
    discovered: Vec<bool>,
    closed: Vec<bool>,
    expansions: usize,
    status: Status,
}

impl<'a> FrontierSearch<'a> {
    /// Creates a search seeded with the grid's start cell at cost 0.
    pub fn new(grid: &'a Grid, policy: SearchPolicy) -> Self {
        let len = grid.len();
        let start = grid.start();
        let goal = grid.goal();

        let mut search = Self {
            grid,
            policy,
            frontier: Frontier::new(),
            best_g: vec![u64::MAX; len],
            discovered: vec![false; len],
            closed: vec![false; len],
            expansions: 0,
            status: Status::Running,
        };

        if let Some(si) = grid.index(start) {
            search.best_g[si] = 0;
            search.discovered[si] = true;
            search
                .frontier
                .push(start, 0, policy.key(0, start, goal), None);
        }

        debug!(
            policy = policy.name(),
            rows = grid.rows(),
            cols = grid.cols(),
            "frontier search created"
        );
        search
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Returns `true` once the goal was reached or the frontier is empty.
    pub fn is_finished(&self) -> bool {
        self.status != Status::Running
    }

    /// Returns `true` if the goal was reached.
    pub fn goal_reached(&self) -> bool {
        matches!(self.status, Status::Found { .. })
    }

    /// Number of pop cycles performed, stale pops included.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Performs exactly one pop-and-expand cycle.
    ///
    /// Once finished, further calls return [`Expansion::Idle`] and change
    /// nothing.
    pub fn advance(&mut self) -> Expansion {
        if self.is_finished() {
            return Expansion::Idle;
        }

        let Some(ci) = self.frontier.pop() else {
            self.status = Status::Exhausted;
            debug!(
                policy = self.policy.name(),
                expansions = self.expansions,
                "frontier exhausted, no path"
            );
            return Expansion::Exhausted;
        };
        self.expansions += 1;

        let current = *self.frontier.node(ci);
        let Some(cell_idx) = self.grid.index(current.pos) else {
            // Only in-grid positions are ever pushed.
            return Expansion::Stale(current.pos);
        };

        if self.policy.relaxes() && current.g > self.best_g[cell_idx] {
            trace!(
                row = current.pos.row,
                col = current.pos.col,
                g = current.g,
                "stale entry"
            );
            return Expansion::Stale(current.pos);
        }

        self.closed[cell_idx] = true;

        if current.pos == self.grid.goal() {
            self.status = Status::Found { node: ci };
            debug!(
                policy = self.policy.name(),
                cost = current.g,
                expansions = self.expansions,
                "goal reached"
            );
            return Expansion::Reached(current.pos);
        }

        trace!(
            row = current.pos.row,
            col = current.pos.col,
            g = current.g,
            "expand"
        );
        let goal = self.grid.goal();
        for dir in self.grid.open_directions(current.pos) {
            let next = current.pos.step(dir);
            let (Some(ni), Some(step)) = (self.grid.index(next), self.grid.entry_cost(next))
            else {
                continue;
            };
            let g = current.g + u64::from(step);

            if self.policy.relaxes() {
                if g >= self.best_g[ni] {
                    continue;
                }
                self.best_g[ni] = g;
            } else {
                if self.discovered[ni] {
                    continue;
                }
                self.discovered[ni] = true;
            }

            self.frontier
                .push(next, g, self.policy.key(g, next, goal), Some(ci));
        }

        Expansion::Expanded(current.pos)
    }

    /// Advances until finished and returns the outcome.
    pub fn run(mut self) -> SolveOutcome {
        while !self.is_finished() {
            self.advance();
        }
        self.outcome()
    }

    /// Current outcome: the path and cost if the goal was reached, the
    /// no-path sentinel otherwise (including while still running).
    pub fn outcome(&self) -> SolveOutcome {
        match self.status {
            Status::Found { node } => {
                SolveOutcome::reached(self.frontier.node(node).g, self.frontier.trace(node))
            }
            _ => SolveOutcome::no_path(),
        }
    }

    /// Positions currently queued in the frontier.
    ///
    /// Superseded entries are left out, so a finalized cell only shows up
    /// here if A* reopened it through a cheaper route.
    pub fn queued(&self) -> impl Iterator<Item = Position> + '_ {
        self.frontier
            .queued()
            .filter(|node| match self.grid.index(node.pos) {
                Some(i) => !self.policy.relaxes() || node.g <= self.best_g[i],
                None => false,
            })
            .map(|node| node.pos)
    }

    /// Positions already finalized.
    pub fn finalized(&self) -> impl Iterator<Item = Position> + '_ {
        self.closed
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(|(i, _)| self.grid.position(i))
    }
}
