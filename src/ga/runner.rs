//! Generation-by-generation GA execution.
//!
//! [`GeneticSolver`] owns the population, the hive-mind memory and the
//! random source, and advances one generation per [`step`](GeneticSolver::step):
//! evaluation → ranking → stagnation bookkeeping → breeding or annihilation.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use super::config::GeneticConfig;
use super::fitness::evaluate;
use super::hive::PenaltyMemory;
use super::operators::{
    biased_random_chromosome, guided_chromosome, replay_mutation, segment_crossover, Guidance,
};
use super::selection::parent_pool;
use super::types::{Chromosome, Individual, SolverState};
use crate::dispatch::SolveOutcome;
use crate::error::MazeResult;
use crate::grid::{Grid, Position};
use crate::random::rng_from;

/// Steppable hive-mind genetic solver for one maze.
///
/// # Usage
///
/// ```
/// use u_mazepath::ga::{GeneticConfig, GeneticSolver};
/// use u_mazepath::grid::Grid;
///
/// let grid: Grid = "S\"1\"\n\"1\"G".parse().unwrap();
/// let config = GeneticConfig::fast().with_seed(42);
/// let mut solver = GeneticSolver::new(&grid, config).unwrap();
/// let outcome = solver.run();
/// assert!(outcome.goal_reached);
/// ```
#[derive(Debug)]
pub struct GeneticSolver<'a> {
    grid: &'a Grid,
    config: GeneticConfig,
    rng: StdRng,
    memory: PenaltyMemory,
    population: Vec<Chromosome>,
    best: Option<Individual>,
    best_path: Vec<Position>,
    state: SolverState,
    generation: usize,
    stagnation: usize,
    annihilation: usize,
    annihilations: usize,
    chromosome_len: usize,
    stagnation_limit: usize,
    annihilation_limit: usize,
    fitness_history: Vec<f64>,
}

impl<'a> GeneticSolver<'a> {
    /// Builds the initial population: `initial_guided_ratio` of it guided,
    /// the rest biased-random.
    ///
    /// # Errors
    ///
    /// [`MazeError::InvalidConfig`](crate::error::MazeError::InvalidConfig)
    /// if `config` fails [`GeneticConfig::validate`].
    pub fn new(grid: &'a Grid, config: GeneticConfig) -> MazeResult<Self> {
        config.validate()?;

        let chromosome_len = config.chromosome_length(grid.rows(), grid.cols());
        let stagnation_limit = config.stagnation_limit(grid.rows(), grid.cols());
        let annihilation_limit = config.annihilation_limit(stagnation_limit);
        let mut rng = rng_from(config.seed);
        let memory = PenaltyMemory::new();

        let guidance = guidance(&config);
        let guided = share(config.population_size, config.initial_guided_ratio);
        let mut population = Vec::with_capacity(config.population_size);
        for _ in 0..guided {
            let chromosome = guided_chromosome(grid, &memory, chromosome_len, guidance, &mut rng);
            population.push(chromosome);
        }
        while population.len() < config.population_size {
            population.push(biased_random_chromosome(chromosome_len, &mut rng));
        }

        debug!(
            population = config.population_size,
            chromosome_len,
            stagnation_limit,
            annihilation_limit,
            "genetic solver initialized"
        );

        Ok(Self {
            grid,
            config,
            rng,
            memory,
            population,
            best: None,
            best_path: vec![grid.start()],
            state: SolverState::Initialized,
            generation: 0,
            stagnation: 0,
            annihilation: 0,
            annihilations: 0,
            chromosome_len,
            stagnation_limit,
            annihilation_limit,
            fitness_history: Vec::new(),
        })
    }

    /// Runs one generation and returns the resulting state. No-op once the
    /// solver has converged or given up.
    pub fn step(&mut self) -> SolverState {
        if self.state.is_terminal() {
            return self.state;
        }

        // 1. Evaluate against the shared memory, in population order
        let population = std::mem::take(&mut self.population);
        let (grid, weights, memory) = (self.grid, &self.config.weights, &mut self.memory);
        let mut ranked: Vec<Individual> = population
            .into_iter()
            .map(|c| evaluate(grid, weights, memory, c))
            .collect();

        // 2. Rank (best first)
        Individual::sort_descending(&mut ranked);

        // 3. Improvement / stagnation bookkeeping
        let improved = match (&self.best, ranked.first()) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(best), Some(top)) => top.fitness > best.fitness + self.config.improvement_epsilon,
        };
        if improved {
            self.best = ranked.first().cloned();
            if let Some(best) = &self.best {
                self.best_path = self.grid.walk(&best.chromosome);
            }
            self.stagnation = 0;
            self.annihilation = 0;
        } else {
            self.stagnation += 1;
            self.annihilation += 1;
        }

        self.generation += 1;
        let best_fitness = self.best.as_ref().map_or(f64::NEG_INFINITY, |b| b.fitness);
        self.fitness_history.push(best_fitness);
        debug!(
            generation = self.generation,
            best_fitness,
            stagnation = self.stagnation,
            "generation evaluated"
        );

        // 4. Termination
        if self.stagnation >= self.stagnation_limit
            || self.generation >= self.config.max_generations
        {
            self.state = if self.goal_reached() {
                SolverState::Converged
            } else {
                SolverState::GaveUp
            };
            info!(
                state = ?self.state,
                generation = self.generation,
                cost = self.total_cost(),
                "genetic solver finished"
            );
            return self.state;
        }
        self.state = SolverState::Evolving;

        // 5/6. Next population
        self.population = if self.annihilation >= self.annihilation_limit {
            self.annihilate(&ranked)
        } else {
            self.breed(&ranked)
        };
        self.state
    }

    /// Steps until the solver converges or gives up and returns the outcome.
    pub fn run(&mut self) -> SolveOutcome {
        while !self.step().is_terminal() {}
        self.outcome()
    }

    /// Elites plus crossover/mutation offspring of tournament-selected parents.
    fn breed(&mut self, ranked: &[Individual]) -> Vec<Chromosome> {
        let size = self.config.population_size;
        let elites = self.config.elite_count().min(ranked.len());
        let mut next: Vec<Chromosome> = ranked[..elites]
            .iter()
            .map(|ind| ind.chromosome.clone())
            .collect();

        let pool_size = share(size, self.config.parent_pool_ratio).max(1);
        let pool = parent_pool(
            ranked,
            self.config.tournament_size,
            pool_size,
            &mut self.rng,
        );

        let rate = self.mutation_rate();

        while next.len() < size {
            let p1 = &ranked[pool[self.rng.random_range(0..pool.len())]].chromosome;
            let p2 = &ranked[pool[self.rng.random_range(0..pool.len())]].chromosome;
            let (mut c1, mut c2) =
                segment_crossover(p1, p2, self.config.crossover_rate, &mut self.rng);

            for child in [&mut c1, &mut c2] {
                replay_mutation(
                    self.grid,
                    &self.memory,
                    child,
                    rate,
                    self.config.hard_block,
                    &mut self.rng,
                );
            }

            next.push(c1);
            if next.len() < size {
                next.push(c2);
            }
        }
        next
    }

    /// Escape from a local optimum: forget the hive memory, keep the elites
    /// and regenerate everything else.
    fn annihilate(&mut self, ranked: &[Individual]) -> Vec<Chromosome> {
        self.memory.clear();
        self.annihilation = 0;
        self.annihilations += 1;
        info!(
            generation = self.generation,
            count = self.annihilations,
            "annihilation: regenerating population"
        );

        let size = self.config.population_size;
        let elites = self.config.elite_count().min(ranked.len());
        let mut next: Vec<Chromosome> = ranked[..elites]
            .iter()
            .map(|ind| ind.chromosome.clone())
            .collect();

        let guidance = guidance(&self.config);
        let guided = share(size, self.config.escape_guided_ratio).min(size - next.len());
        for _ in 0..guided {
            next.push(guided_chromosome(
                self.grid,
                &self.memory,
                self.chromosome_len,
                guidance,
                &mut self.rng,
            ));
        }
        while next.len() < size {
            next.push(biased_random_chromosome(self.chromosome_len, &mut self.rng));
        }
        next
    }

    // ---- accessors ----

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Whether [`step`](Self::step) has nothing left to do.
    pub fn finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Generations evaluated so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Consecutive generations without improvement.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// Stagnation count at which the solver stops.
    pub fn stagnation_limit(&self) -> usize {
        self.stagnation_limit
    }

    /// Mutation rate the next breeding round uses: the hyper-mutation rate
    /// once stagnation passes half its limit.
    pub fn mutation_rate(&self) -> f64 {
        if self.stagnation * 2 > self.stagnation_limit {
            self.config.hyper_mutation_rate
        } else {
            self.config.mutation_rate
        }
    }

    /// Best individual seen so far; `None` before the first generation.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    pub fn goal_reached(&self) -> bool {
        self.best.as_ref().is_some_and(|b| b.goal_reached)
    }

    /// Entry cost of the best individual's walk (0 before the first
    /// generation).
    pub fn total_cost(&self) -> i64 {
        self.best.as_ref().map_or(0, |b| b.total_cost as i64)
    }

    /// Cells visited by the best individual, start first.
    pub fn path(&self) -> &[Position] {
        &self.best_path
    }

    /// Always empty: the GA keeps no frontier.
    pub fn open_set(&self) -> BTreeSet<Position> {
        BTreeSet::new()
    }

    /// Positions the hive mind has penalized.
    pub fn closed_set(&self) -> BTreeSet<Position> {
        self.memory.positions().collect()
    }

    pub fn penalty_memory(&self) -> &PenaltyMemory {
        &self.memory
    }

    /// Best fitness after each generation.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Number of annihilation events so far.
    pub fn annihilations(&self) -> usize {
        self.annihilations
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Display name including the generation count.
    pub fn name(&self) -> String {
        format!("GA HiveMind (Gen: {})", self.generation)
    }

    /// Current best as a [`SolveOutcome`]. A run that never reached the goal
    /// reports the cost and path of its best partial walk with
    /// `goal_reached == false`.
    pub fn outcome(&self) -> SolveOutcome {
        SolveOutcome {
            cost: self.total_cost(),
            goal_reached: self.goal_reached(),
            path: self.best_path.clone(),
        }
    }
}

fn guidance(config: &GeneticConfig) -> Guidance {
    Guidance {
        length_ratio: config.guided_length_ratio,
        greed: config.guided_greed,
        hard_block: config.hard_block,
    }
}

/// `ceil(total * ratio)`, clamped to `total`.
fn share(total: usize, ratio: f64) -> usize {
    ((total as f64 * ratio - 1e-9).ceil().max(0.0) as usize).min(total)
}

// ============================================================================
// Tests
// ============================================================================
