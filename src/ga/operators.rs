//! Chromosome generation, crossover and mutation.
//!
//! # Generation
//!
//! - [`biased_random_chromosome`]: each gene keeps going forward 60% of the
//!   time and turns otherwise; it never reverses the previous gene.
//! - [`guided_chromosome`]: walks from the start through unvisited,
//!   non-blocked cells (preferring moves that close in on the goal), then
//!   fills the rest with biased-random genes.
//!
//! # Variation
//!
//! - [`segment_crossover`]: swaps the genes between two random cut points.
//! - [`replay_mutation`]: replays the walk and, gene by gene, may swap in a
//!   legal non-reversing move the hive mind has not blocked.
//!
//! None of these change chromosome length.

use rand::Rng;

use super::hive::PenaltyMemory;
use super::types::Chromosome;
use crate::grid::{Direction, Grid, Position};

// ============================================================================
// Generation
// ============================================================================

/// Draws the next gene given the previous one.
///
/// With no previous gene the draw is uniform. Otherwise the previous
/// direction is kept with probability 0.6, the first turn is taken with 0.3
/// and the second with 0.1.
pub fn biased_step<R: Rng>(prev: Option<Direction>, rng: &mut R) -> Direction {
    use Direction::*;

    let Some(prev) = prev else {
        return Direction::ALL[rng.random_range(0..4)];
    };
    let forward = match prev {
        Up => [Up, Right, Left],
        Down => [Down, Right, Left],
        Left => [Left, Down, Up],
        Right => [Right, Down, Up],
    };
    match rng.random_range(0..10) {
        0..=5 => forward[0],
        6..=8 => forward[1],
        _ => forward[2],
    }
}

/// Appends biased-random genes until `genes` holds `length` moves.
fn fill_biased<R: Rng>(genes: &mut Chromosome, length: usize, rng: &mut R) {
    let mut prev = genes.last().copied();
    while genes.len() < length {
        let dir = biased_step(prev, rng);
        genes.push(dir);
        prev = Some(dir);
    }
}

/// Builds a chromosome of `length` biased-random genes.
pub fn biased_random_chromosome<R: Rng>(length: usize, rng: &mut R) -> Chromosome {
    let mut genes = Vec::with_capacity(length);
    fill_biased(&mut genes, length, rng);
    genes
}

/// Moves from `pos` into a non-wall cell that do not reverse `prev` and are
/// not hard-blocked by the hive mind.
pub fn legal_moves(
    grid: &Grid,
    memory: &PenaltyMemory,
    pos: Position,
    prev: Option<Direction>,
    hard_block: f64,
) -> Vec<Direction> {
    grid.open_directions(pos)
        .filter(|&d| prev != Some(d.opposite()))
        .filter(|&d| !memory.is_blocked(pos, d, hard_block))
        .collect()
}

/// Parameters for [`guided_chromosome`].
#[derive(Debug, Clone, Copy)]
pub struct Guidance {
    /// Fraction of the chromosome filled by guidance.
    pub length_ratio: f64,
    /// Probability of preferring a goal-closing move when one exists.
    pub greed: f64,
    /// Hive-mind hard-block threshold.
    pub hard_block: f64,
}

/// Builds a chromosome whose head is a self-avoiding walk from the start.
///
/// Guidance stops at the goal, at a dead end, or once
/// `length * length_ratio` genes are placed; the rest is biased-random.
pub fn guided_chromosome<R: Rng>(
    grid: &Grid,
    memory: &PenaltyMemory,
    length: usize,
    guidance: Guidance,
    rng: &mut R,
) -> Chromosome {
    let goal = grid.goal();
    let limit = ((length as f64 * guidance.length_ratio).ceil() as usize).min(length);
    let mut genes = Vec::with_capacity(length);
    let mut visited = vec![false; grid.len()];
    let mut pos = grid.start();
    if let Some(i) = grid.index(pos) {
        visited[i] = true;
    }

    while genes.len() < limit && pos != goal {
        let prev = genes.last().copied();
        let candidates: Vec<Direction> = legal_moves(grid, memory, pos, prev, guidance.hard_block)
            .into_iter()
            .filter(|&d| grid.index(pos.step(d)).is_some_and(|i| !visited[i]))
            .collect();
        if candidates.is_empty() {
            break;
        }

        let here = pos.manhattan(goal);
        let closer: Vec<Direction> = candidates
            .iter()
            .copied()
            .filter(|&d| pos.step(d).manhattan(goal) < here)
            .collect();
        let pool = if !closer.is_empty() && rng.random_bool(guidance.greed) {
            &closer
        } else {
            &candidates
        };
        let dir = pool[rng.random_range(0..pool.len())];

        genes.push(dir);
        pos = pos.step(dir);
        if let Some(i) = grid.index(pos) {
            visited[i] = true;
        }
    }

    fill_biased(&mut genes, length, rng);
    genes
}

// ============================================================================
// Variation
// ============================================================================

/// Segment-swap crossover.
///
/// With probability `rate`, picks cut points `a <= b` and exchanges genes
/// `a..b` between the parents; otherwise returns clones.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn segment_crossover<R: Rng>(
    parent1: &[Direction],
    parent2: &[Direction],
    rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut c1 = parent1.to_vec();
    let mut c2 = parent2.to_vec();
    if n == 0 || !rng.random_bool(rate) {
        return (c1, c2);
    }

    let (a, b) = random_cut(n, rng);
    c1[a..b].copy_from_slice(&parent2[a..b]);
    c2[a..b].copy_from_slice(&parent1[a..b]);
    (c1, c2)
}

/// Replays `chromosome` from the start and mutates it gene by gene.
///
/// Each gene is replaced, with probability `rate`, by a random
/// [legal move](legal_moves) from the current position. Replay stops at the
/// first gene that would leave the grid or enter a wall; the remainder is
/// left untouched.
pub fn replay_mutation<R: Rng>(
    grid: &Grid,
    memory: &PenaltyMemory,
    chromosome: &mut [Direction],
    rate: f64,
    hard_block: f64,
    rng: &mut R,
) {
    let mut pos = grid.start();
    let mut prev = None;

    for gene in chromosome.iter_mut() {
        if rng.random_bool(rate) {
            let moves = legal_moves(grid, memory, pos, prev, hard_block);
            if !moves.is_empty() {
                *gene = moves[rng.random_range(0..moves.len())];
            }
        }

        let next = pos.step(*gene);
        if !grid.is_open(next) {
            break;
        }
        pos = next;
        prev = Some(*gene);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick cut points `a <= b` within `0..n`.
fn random_cut<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use Direction::*;

    fn open_grid() -> Grid {
        "S\"1\"\"1\"\"1\"\n\"1\"\"1\"\"1\"\"1\"\n\"1\"\"1\"\"1\"\"1\"\n\"1\"\"1\"\"1\"G"
            .parse()
            .unwrap()
    }

    fn guidance() -> Guidance {
        Guidance {
            length_ratio: 0.5,
            greed: 0.5,
            hard_block: 40.0,
        }
    }

    fn dir_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Up), Just(Down), Just(Left), Just(Right)]
    }

    #[test]
    fn test_biased_step_never_reverses() {
        let mut rng = create_rng(42);
        for prev in Direction::ALL {
            for _ in 0..500 {
                assert_ne!(biased_step(Some(prev), &mut rng), prev.opposite());
            }
        }
    }

    #[test]
    fn test_biased_step_prefers_forward() {
        let mut rng = create_rng(7);
        let n = 10_000;
        let forward = (0..n)
            .filter(|_| biased_step(Some(Left), &mut rng) == Left)
            .count();
        assert!(
            forward > 5_500 && forward < 6_500,
            "expected ~60% forward, got {forward}/{n}"
        );
    }

    #[test]
    fn test_biased_random_length() {
        let mut rng = create_rng(1);
        assert_eq!(biased_random_chromosome(17, &mut rng).len(), 17);
        assert!(biased_random_chromosome(0, &mut rng).is_empty());
    }

    #[test]
    fn test_legal_moves_filters() {
        let grid = open_grid();
        let mut memory = PenaltyMemory::new();
        let p = Position::new(1, 1);
        assert_eq!(legal_moves(&grid, &memory, p, None, 40.0).len(), 4);
        assert_eq!(
            legal_moves(&grid, &memory, p, Some(Right), 40.0),
            vec![Up, Down, Right]
        );
        memory.add(p, Down, 50.0);
        assert_eq!(
            legal_moves(&grid, &memory, p, Some(Right), 40.0),
            vec![Up, Right]
        );
        // Corner: only in-grid moves.
        assert_eq!(
            legal_moves(&grid, &memory, grid.start(), None, 40.0),
            vec![Down, Right]
        );
    }

    #[test]
    fn test_guided_head_is_self_avoiding() {
        let grid = open_grid();
        let memory = PenaltyMemory::new();
        let mut rng = create_rng(3);
        for _ in 0..200 {
            let genes = guided_chromosome(&grid, &memory, 16, guidance(), &mut rng);
            assert_eq!(genes.len(), 16);

            // Replay the guided head (8 genes) while guidance still had an
            // unvisited legal move; past a dead end the biased fill may loop.
            let mut pos = grid.start();
            let mut seen = vec![pos];
            let mut prev = None;
            for &g in &genes[..8] {
                if pos == grid.goal() {
                    break;
                }
                let candidates: Vec<Direction> = legal_moves(&grid, &memory, pos, prev, 40.0)
                    .into_iter()
                    .filter(|&d| !seen.contains(&pos.step(d)))
                    .collect();
                if candidates.is_empty() {
                    break;
                }
                assert!(
                    candidates.contains(&g),
                    "guided head took {g:?} at {pos:?}: {genes:?}"
                );
                pos = pos.step(g);
                seen.push(pos);
                prev = Some(g);
            }
        }
    }

    #[test]
    fn test_guided_falls_back_to_biased_after_dead_end() {
        // From (0,1) the only open neighbour is the start, so guidance
        // stops after one gene and biased-random genes fill the rest.
        let grid: Grid = "S\"1\"#G".parse().unwrap();
        let memory = PenaltyMemory::new();
        let mut rng = create_rng(3);
        let genes = guided_chromosome(
            &grid,
            &memory,
            8,
            Guidance {
                length_ratio: 1.0,
                greed: 0.5,
                hard_block: 40.0,
            },
            &mut rng,
        );
        assert_eq!(genes.len(), 8);
        assert_eq!(genes[0], Right);
        for pair in genes.windows(2) {
            assert_ne!(pair[1], pair[0].opposite(), "{genes:?}");
        }
        // The fill never reverses, so the walk ends at the dead end.
        assert_eq!(grid.walk(&genes), vec![grid.start(), Position::new(0, 1)]);
    }

    #[test]
    fn test_guided_respects_hard_block() {
        let grid = open_grid();
        let mut memory = PenaltyMemory::new();
        memory.add(grid.start(), Right, 100.0);
        let mut rng = create_rng(11);
        for _ in 0..100 {
            let genes = guided_chromosome(&grid, &memory, 16, guidance(), &mut rng);
            assert_eq!(genes[0], Down);
        }
    }

    #[test]
    fn test_crossover_rate_zero_clones() {
        let mut rng = create_rng(5);
        let p1 = vec![Up; 10];
        let p2 = vec![Down; 10];
        let (c1, c2) = segment_crossover(&p1, &p2, 0.0, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_crossover_swaps_one_segment() {
        let mut rng = create_rng(9);
        let p1 = vec![Up; 12];
        let p2 = vec![Down; 12];
        for _ in 0..100 {
            let (c1, c2) = segment_crossover(&p1, &p2, 1.0, &mut rng);
            // Children are complementary and the swapped region is contiguous.
            for i in 0..12 {
                assert_ne!(c1[i], c2[i]);
            }
            let swapped: Vec<usize> = (0..12).filter(|&i| c1[i] == Down).collect();
            if let (Some(&first), Some(&last)) = (swapped.first(), swapped.last()) {
                assert_eq!(swapped.len(), last - first + 1);
            }
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(1);
        segment_crossover(&[Up, Up], &[Up], 1.0, &mut rng);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let grid = open_grid();
        let memory = PenaltyMemory::new();
        let mut rng = create_rng(2);
        let original = vec![Right, Right, Down, Left, Up, Up, Up];
        let mut genes = original.clone();
        replay_mutation(&grid, &memory, &mut genes, 0.0, 40.0, &mut rng);
        assert_eq!(genes, original);
    }

    #[test]
    fn test_mutation_leaves_tail_after_wall() {
        // First gene walks off the grid, so replay stops immediately at
        // gene 0 when it is not mutated; with rate 1 gene 0 becomes legal.
        let grid = open_grid();
        let memory = PenaltyMemory::new();
        let mut rng = create_rng(4);
        let mut genes = vec![Up, Up, Up, Up];
        replay_mutation(&grid, &memory, &mut genes, 0.0, 40.0, &mut rng);
        assert_eq!(genes, vec![Up, Up, Up, Up]);

        let mut genes = vec![Up, Left, Left, Left];
        replay_mutation(&grid, &memory, &mut genes, 1.0, 40.0, &mut rng);
        assert!(genes[0] == Down || genes[0] == Right);
    }

    #[test]
    fn test_full_mutation_keeps_walk_legal() {
        let grid = open_grid();
        let memory = PenaltyMemory::new();
        let mut rng = create_rng(8);
        for _ in 0..100 {
            let mut genes = biased_random_chromosome(16, &mut rng);
            replay_mutation(&grid, &memory, &mut genes, 1.0, 40.0, &mut rng);
            // Every gene was replaced by a legal move, so the walk never
            // leaves the maze and never reverses.
            let mut pos = grid.start();
            let mut prev: Option<Direction> = None;
            for &g in &genes {
                assert_ne!(prev, Some(g.opposite()));
                pos = pos.step(g);
                assert!(grid.is_open(pos));
                prev = Some(g);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_crossover_preserves_length_and_genes(
            pair in (1usize..64).prop_flat_map(|n| (
                proptest::collection::vec(dir_strategy(), n),
                proptest::collection::vec(dir_strategy(), n),
            )),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let (p1, p2) = pair;
            let mut rng = create_rng(seed);
            let (c1, c2) = segment_crossover(&p1, &p2, rate, &mut rng);
            prop_assert_eq!(c1.len(), p1.len());
            prop_assert_eq!(c2.len(), p2.len());
            for i in 0..p1.len() {
                // Each locus holds the two parental genes, one per child.
                let mut got = [c1[i], c2[i]];
                let mut want = [p1[i], p2[i]];
                got.sort();
                want.sort();
                prop_assert_eq!(got, want);
            }
        }

        #[test]
        fn prop_mutation_preserves_length(
            genes in proptest::collection::vec(dir_strategy(), 0..64),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let grid = open_grid();
            let memory = PenaltyMemory::new();
            let mut rng = create_rng(seed);
            let mut mutated = genes.clone();
            replay_mutation(&grid, &memory, &mut mutated, rate, 40.0, &mut rng);
            prop_assert_eq!(mutated.len(), genes.len());
            prop_assert!(mutated.iter().all(|d| Direction::ALL.contains(d)));
        }

        #[test]
        fn prop_generated_chromosomes_have_requested_length(
            length in 0usize..80,
            seed in any::<u64>(),
        ) {
            let grid = open_grid();
            let memory = PenaltyMemory::new();
            let mut rng = create_rng(seed);
            prop_assert_eq!(biased_random_chromosome(length, &mut rng).len(), length);
            prop_assert_eq!(
                guided_chromosome(&grid, &memory, length, guidance(), &mut rng).len(),
                length
            );
        }
    }
}
