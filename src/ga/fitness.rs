//! The fitness walk.

use std::collections::{HashMap, VecDeque};

use super::config::FitnessWeights;
use super::hive::PenaltyMemory;
use super::types::{Chromosome, Individual};
use crate::grid::{Cell, Grid};

/// Executes `chromosome` from the start cell and scores it.
///
/// The walk stops early when a move leaves the grid or hits a wall (charged
/// per unused gene, and recorded in `memory` against the position the move
/// was made from) or when the goal is entered. Along the way it rewards new
/// cells and progress toward the goal, and charges revisits (quadratically),
/// consecutive reversals (escalating), recent-window loops and moves that
/// the hive mind already penalized. A cell visited
/// [`trap_visits`](FitnessWeights::trap_visits) times also records the move
/// into it as a hive-mind penalty.
///
/// Reaching the goal adds a flat bonus minus cost and step terms; missing it
/// charges the cost only lightly. A final shaping term rewards ending near
/// the goal. Walks that mostly loop get
/// [`loop_fitness`](FitnessWeights::loop_fitness) outright.
pub fn evaluate(
    grid: &Grid,
    weights: &FitnessWeights,
    memory: &mut PenaltyMemory,
    chromosome: Chromosome,
) -> Individual {
    let goal = grid.goal();
    let mut pos = grid.start();
    let mut fitness = 0.0;
    let mut total_cost = 0u64;
    let mut steps = 0usize;
    let mut goal_reached = false;

    let mut visits: HashMap<_, u32> = HashMap::new();
    visits.insert(pos, 1);
    let mut recent = VecDeque::with_capacity(weights.recent_window + 1);
    let mut dist = pos.euclidean(goal);
    let mut prev_dir = None;
    let mut reversals = 0u32;

    for &dir in &chromosome {
        let next = pos.step(dir);
        let cell = match grid.get(next) {
            Some(Cell::Wall) | None => {
                memory.add(pos, dir, weights.hive_penalty_step);
                fitness -= memory.penalty(pos, dir);
                fitness -= (chromosome.len() - steps) as f64 * weights.unused_gene_penalty;
                break;
            }
            Some(cell) => cell,
        };

        if prev_dir == Some(dir.opposite()) {
            reversals += 1;
            fitness -= weights.reversal_penalty * f64::from(reversals);
        } else {
            reversals = 0;
        }

        let known = memory.penalty(pos, dir);
        if known > 0.0 {
            fitness -= known * weights.hive_penalty_factor;
        }

        let from = pos;
        pos = next;
        steps += 1;
        prev_dir = Some(dir);

        let count = visits.entry(pos).or_insert(0);
        if *count == 0 {
            fitness += weights.new_cell_reward;
        } else {
            fitness -= weights.revisit_penalty * f64::from(*count).powi(2);
            if *count >= weights.trap_visits {
                fitness -= weights.trap_penalty;
                memory.add(from, dir, weights.hive_penalty_step);
            }
        }
        *count += 1;

        let d = pos.euclidean(goal);
        if d < dist {
            fitness += weights.closer_reward;
        } else if d > dist + weights.farther_slack {
            fitness -= weights.farther_penalty;
        }
        dist = d;

        if recent.contains(&pos) {
            fitness -= weights.recent_loop_penalty;
        }
        recent.push_back(pos);
        if recent.len() > weights.recent_window {
            recent.pop_front();
        }

        total_cost += u64::from(cell.cost().unwrap_or(0));

        if pos == goal {
            goal_reached = true;
            break;
        }
    }

    if goal_reached {
        fitness += weights.goal_bonus;
        fitness -= total_cost as f64 * weights.goal_cost_weight;
        fitness -= steps as f64 * weights.goal_step_weight;
    } else {
        fitness -= total_cost as f64 * weights.miss_cost_weight;
    }

    let max_dist = (grid.rows() + grid.cols()) as f64;
    fitness += (max_dist - pos.euclidean(goal)) * weights.distance_weight;

    if (visits.len() as f64) < steps as f64 * weights.min_unique_ratio {
        fitness = weights.loop_fitness;
    }

    Individual {
        chromosome,
        fitness,
        total_cost,
        goal_reached,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, Position};
    use Direction::*;

    fn corridor() -> Grid {
        // S 2 3 G
        // 1 # 1 1
        "S\"2\"\"3\"G\n\"1\"#\"1\"\"1\"".parse().unwrap()
    }

    #[test]
    fn test_goal_reaching_walk() {
        let grid = corridor();
        let mut memory = PenaltyMemory::new();
        let ind = evaluate(
            &grid,
            &FitnessWeights::default(),
            &mut memory,
            vec![Right, Right, Right, Down, Down],
        );
        assert!(ind.goal_reached);
        assert_eq!(ind.steps, 3);
        assert_eq!(ind.total_cost, 5);
        assert_eq!(ind.chromosome.len(), 5);
        assert!(memory.is_empty());
        assert!(ind.fitness > 900_000.0);
    }

    #[test]
    fn test_wall_hit_records_penalty() {
        let grid = corridor();
        let mut memory = PenaltyMemory::new();
        let weights = FitnessWeights::default();
        let ind = evaluate(
            &grid,
            &weights,
            &mut memory,
            vec![Down, Right, Right, Right],
        );
        assert!(!ind.goal_reached);
        assert_eq!(ind.steps, 1);
        assert_eq!(ind.total_cost, 1);
        assert!(
            (memory.penalty(Position::new(1, 0), Right) - weights.hive_penalty_step).abs() < 1e-12
        );
    }

    #[test]
    fn test_leaving_grid_records_penalty() {
        let grid = corridor();
        let mut memory = PenaltyMemory::new();
        let ind = evaluate(
            &grid,
            &FitnessWeights::default(),
            &mut memory,
            vec![Up, Right],
        );
        assert_eq!(ind.steps, 0);
        assert!(memory.penalty(grid.start(), Up) > 0.0);
    }

    #[test]
    fn test_cheaper_goal_path_scores_higher() {
        // Top row costs 9 each, bottom row 1 each; both reach the goal.
        let grid: Grid = "S\"9\"\"9\"G\n\"1\"\"1\"\"1\"\"1\"".parse().unwrap();
        let weights = FitnessWeights::default();
        let mut memory = PenaltyMemory::new();
        let top = evaluate(
            &grid,
            &weights,
            &mut memory,
            vec![Right, Right, Right, Right, Right],
        );
        let bottom = evaluate(
            &grid,
            &weights,
            &mut memory,
            vec![Down, Right, Right, Right, Up],
        );
        assert!(top.goal_reached && bottom.goal_reached);
        assert_eq!(top.total_cost, 18);
        assert_eq!(bottom.total_cost, 4);
        assert!(bottom.fitness > top.fitness);
    }

    #[test]
    fn test_goal_beats_near_miss() {
        let grid = corridor();
        let weights = FitnessWeights::default();
        let mut memory = PenaltyMemory::new();
        let hit = evaluate(
            &grid,
            &weights,
            &mut memory,
            vec![Right, Right, Right, Left],
        );
        let miss = evaluate(
            &grid,
            &weights,
            &mut memory,
            vec![Right, Right, Down, Right],
        );
        assert!(hit.goal_reached);
        assert!(!miss.goal_reached);
        assert!(hit.fitness > miss.fitness);
    }

    #[test]
    fn test_oscillation_is_loop_dominated() {
        let grid: Grid = "S\"1\"\"1\"\"1\"\"1\"\"1\"\"1\"G".parse().unwrap();
        let weights = FitnessWeights::default();
        let mut memory = PenaltyMemory::new();
        let ind = evaluate(&grid, &weights, &mut memory, vec![Right, Left].repeat(8));
        assert!(!ind.goal_reached);
        assert_eq!(ind.steps, 16);
        assert_eq!(ind.fitness, weights.loop_fitness);
        // Repeatedly re-entering a cell marks the move into it as a trap.
        assert!(memory.penalty(Position::new(0, 0), Right) > 0.0);
    }

    #[test]
    fn test_reversals_cost_more_than_forward_moves() {
        let grid: Grid = "S\"1\"\"1\"\"1\"\"1\"\"1\"\"1\"\"1\"\"1\"G".parse().unwrap();
        let weights = FitnessWeights {
            min_unique_ratio: 0.0,
            ..FitnessWeights::default()
        };
        let mut memory = PenaltyMemory::new();
        let straight = evaluate(&grid, &weights, &mut memory, vec![Right; 4]);
        let wobble = evaluate(&grid, &weights, &mut memory, vec![Right, Left, Right, Left]);
        assert!(straight.fitness > wobble.fitness);
    }
}
