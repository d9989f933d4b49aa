//! Genetic solver configuration.
//!
//! [`GeneticConfig`] holds every parameter of the evolutionary loop;
//! [`FitnessWeights`] holds the reward and penalty magnitudes used by the
//! fitness walk. Both are plain tunables, not contracts: the defaults work
//! well on mazes up to a few dozen cells across.

use crate::error::{MazeError, MazeResult};

/// Reward and penalty magnitudes for the fitness walk.
///
/// Fitness is maximized. See [`evaluate`](super::evaluate) for how each term
/// is applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    /// Per unused gene when the walk leaves the grid or hits a wall.
    pub unused_gene_penalty: f64,

    /// Entering a cell not yet visited by this walk.
    pub new_cell_reward: f64,

    /// Scaled by `visits²` when re-entering a cell.
    pub revisit_penalty: f64,

    /// Visit count at which a revisit is treated as a trap.
    pub trap_visits: u32,

    /// Flat penalty once [`trap_visits`](Self::trap_visits) is reached.
    pub trap_penalty: f64,

    /// Scaled by the length of the current run of consecutive reversals.
    pub reversal_penalty: f64,

    /// Moving strictly closer (Euclidean) to the goal.
    pub closer_reward: f64,

    /// Moving further from the goal by more than
    /// [`farther_slack`](Self::farther_slack).
    pub farther_penalty: f64,

    /// Distance increase tolerated before [`farther_penalty`](Self::farther_penalty).
    pub farther_slack: f64,

    /// Size of the sliding window of recent positions.
    pub recent_window: usize,

    /// Re-entering a position still inside the recent window.
    pub recent_loop_penalty: f64,

    /// Multiplier on the hive-mind penalty of every executed move.
    pub hive_penalty_factor: f64,

    /// Added to the hive-mind memory for each dead-end or trap move.
    pub hive_penalty_step: f64,

    /// Flat bonus for reaching the goal.
    pub goal_bonus: f64,

    /// Per unit of path cost when the goal was reached.
    pub goal_cost_weight: f64,

    /// Per step when the goal was reached.
    pub goal_step_weight: f64,

    /// Per unit of path cost when the goal was missed.
    pub miss_cost_weight: f64,

    /// Scaled by `(rows + cols) - final_distance`.
    pub distance_weight: f64,

    /// Minimum `unique cells / steps` ratio; below it the walk is a loop.
    pub min_unique_ratio: f64,

    /// Fitness assigned to loop-dominated walks.
    pub loop_fitness: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            unused_gene_penalty: 500.0,
            new_cell_reward: 250.0,
            revisit_penalty: 300.0,
            trap_visits: 4,
            trap_penalty: 1_000_000.0,
            reversal_penalty: 150.0,
            closer_reward: 300.0,
            farther_penalty: 50.0,
            farther_slack: 0.0,
            recent_window: 10,
            recent_loop_penalty: 4_000.0,
            hive_penalty_factor: 50.0,
            hive_penalty_step: 20.0,
            goal_bonus: 1_000_000.0,
            goal_cost_weight: 300.0,
            goal_step_weight: 250.0,
            miss_cost_weight: 25.0,
            distance_weight: 500.0,
            min_unique_ratio: 0.4,
            loop_fitness: -500_000.0,
        }
    }
}

/// Configuration for the [`GeneticSolver`](super::GeneticSolver).
///
/// # Defaults
///
/// ```
/// use u_mazepath::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.tournament_size, 4);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mazepath::ga::GeneticConfig;
///
/// let config = GeneticConfig::fast()
///     .with_population_size(300)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,

    /// Chromosome length is `(rows + cols) * chromosome_factor`.
    pub chromosome_factor: usize,

    /// Fraction of the sorted population copied unchanged (0.0–1.0).
    pub elite_ratio: f64,

    /// Probability of segment-swap crossover for a parent pair.
    pub crossover_rate: f64,

    /// Per-gene mutation probability.
    pub mutation_rate: f64,

    /// Per-gene mutation probability while stagnation exceeds half its limit.
    pub hyper_mutation_rate: f64,

    /// Individuals sampled per tournament.
    pub tournament_size: usize,

    /// Size of the tournament-selected parent pool, as a population fraction.
    pub parent_pool_ratio: f64,

    /// Fraction of the initial population built by guided generation.
    pub initial_guided_ratio: f64,

    /// Fraction of the population rebuilt by guided generation on annihilation.
    pub escape_guided_ratio: f64,

    /// Fraction of a guided chromosome filled by guidance before falling
    /// back to biased-random genes.
    pub guided_length_ratio: f64,

    /// Probability that a guided step prefers a move closing in on the goal.
    pub guided_greed: f64,

    /// Stagnation limit is `max(rows, cols) * stagnation_factor` generations.
    pub stagnation_factor: usize,

    /// Annihilation fires after `stagnation_limit / annihilation_divisor`
    /// generations without improvement.
    pub annihilation_divisor: usize,

    /// Hive-mind penalty above which a `(position, move)` is never proposed.
    pub hard_block: f64,

    /// Minimum fitness gain that counts as an improvement.
    pub improvement_epsilon: f64,

    /// Upper bound on generations regardless of progress.
    pub max_generations: usize,

    /// Random seed for reproducibility. `None` draws a random seed.
    pub seed: Option<u64>,

    /// Fitness term magnitudes.
    pub weights: FitnessWeights,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            chromosome_factor: 2,
            elite_ratio: 0.05,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            hyper_mutation_rate: 0.25,
            tournament_size: 4,
            parent_pool_ratio: 0.5,
            initial_guided_ratio: 0.5,
            escape_guided_ratio: 0.55,
            guided_length_ratio: 0.25,
            guided_greed: 0.5,
            stagnation_factor: 3,
            annihilation_divisor: 5,
            hard_block: 40.0,
            improvement_epsilon: 1e-9,
            max_generations: 10_000,
            seed: None,
            weights: FitnessWeights::default(),
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length factor.
    pub fn with_chromosome_factor(mut self, k: usize) -> Self {
        self.chromosome_factor = k;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the hyper-mutation rate used during long stagnation.
    pub fn with_hyper_mutation_rate(mut self, rate: f64) -> Self {
        self.hyper_mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the guided share of the initial population.
    pub fn with_initial_guided_ratio(mut self, ratio: f64) -> Self {
        self.initial_guided_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the guided share of a population rebuilt on annihilation.
    pub fn with_escape_guided_ratio(mut self, ratio: f64) -> Self {
        self.escape_guided_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation factor.
    pub fn with_stagnation_factor(mut self, factor: usize) -> Self {
        self.stagnation_factor = factor;
        self
    }

    /// Sets the annihilation divisor.
    pub fn with_annihilation_divisor(mut self, divisor: usize) -> Self {
        self.annihilation_divisor = divisor;
        self
    }

    /// Sets the hive-mind hard-block threshold.
    pub fn with_hard_block(mut self, threshold: f64) -> Self {
        self.hard_block = threshold;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional random seed.
    pub fn with_seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Preset for quick runs and small mazes.
    ///
    /// - Population: 200, Generation cap: 2 000
    pub fn fast() -> Self {
        Self {
            population_size: 200,
            max_generations: 2_000,
            ..Self::default()
        }
    }

    /// Preset balancing quality and speed. Same as [`Default`].
    ///
    /// - Population: 1 000, Generation cap: 10 000
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for large mazes.
    ///
    /// - Population: 5 000, Generation cap: 20 000, stagnation factor 4
    pub fn quality() -> Self {
        Self {
            population_size: 5_000,
            max_generations: 20_000,
            stagnation_factor: 4,
            ..Self::default()
        }
    }

    /// Picks a preset from the number of maze cells.
    ///
    /// - `cell_count < 100` → [`fast()`](Self::fast)
    /// - `100 ≤ cell_count < 900` → [`balanced()`](Self::balanced)
    /// - `cell_count ≥ 900` → [`quality()`](Self::quality)
    pub fn auto_select(cell_count: usize) -> Self {
        if cell_count < 100 {
            Self::fast()
        } else if cell_count < 900 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Chromosome length for a maze of the given size.
    pub fn chromosome_length(&self, rows: usize, cols: usize) -> usize {
        (rows + cols) * self.chromosome_factor
    }

    /// Stagnation limit for a maze of the given size.
    pub fn stagnation_limit(&self, rows: usize, cols: usize) -> usize {
        (rows.max(cols) * self.stagnation_factor).max(1)
    }

    /// Annihilation threshold for a given stagnation limit.
    pub fn annihilation_limit(&self, stagnation_limit: usize) -> usize {
        (stagnation_limit / self.annihilation_divisor.max(1)).max(1)
    }

    /// Number of elites carried into each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio - 1e-9).ceil().max(0.0) as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`MazeError::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> MazeResult<()> {
        let invalid = |msg: &str| -> MazeResult<()> { Err(MazeError::InvalidConfig(msg.into())) };
        if self.population_size < 2 {
            return invalid("population_size must be at least 2");
        }
        if self.chromosome_factor == 0 {
            return invalid("chromosome_factor must be at least 1");
        }
        if self.tournament_size == 0 {
            return invalid("tournament_size must be at least 1");
        }
        if self.elite_count() >= self.population_size {
            return invalid("elite_ratio too high: elites fill entire population");
        }
        if self.stagnation_factor == 0 {
            return invalid("stagnation_factor must be at least 1");
        }
        if self.annihilation_divisor == 0 {
            return invalid("annihilation_divisor must be at least 1");
        }
        if self.max_generations == 0 {
            return invalid("max_generations must be at least 1");
        }
        let unit = |x: f64| (0.0..=1.0).contains(&x);
        if !unit(self.crossover_rate)
            || !unit(self.mutation_rate)
            || !unit(self.hyper_mutation_rate)
        {
            return invalid("crossover and mutation rates must lie in [0, 1]");
        }
        if !unit(self.elite_ratio)
            || !unit(self.parent_pool_ratio)
            || !unit(self.initial_guided_ratio)
            || !unit(self.escape_guided_ratio)
            || !unit(self.guided_length_ratio)
            || !unit(self.guided_greed)
        {
            return invalid("ratios must lie in [0, 1]");
        }
        if self.hard_block.is_nan() || self.hard_block < 0.0 {
            return invalid("hard_block must be non-negative");
        }
        if self.improvement_epsilon.is_nan() || self.improvement_epsilon < 0.0 {
            return invalid("improvement_epsilon must be non-negative");
        }
        Ok(())
    }
}
