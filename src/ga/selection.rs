//! Parent selection.
//!
//! Parents are drawn in two stages: a pool of `population * parent_pool_ratio`
//! tournament winners is built once per generation, then breeding pairs are
//! sampled uniformly from that pool.
//!
//! All functions assume **maximization** (higher fitness = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use rand::Rng;

use super::types::Individual;

/// Tournament selection: sample `k` individuals with replacement and return
/// the index of the fittest. Ties keep the earliest draw.
///
/// Higher `k` = stronger selection pressure. `k = 0` is treated as 1.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

/// Runs `count` independent tournaments and returns the winners' indices.
///
/// # Panics
/// Panics if `population` is empty and `count > 0`.
pub fn parent_pool<R: Rng>(
    population: &[Individual],
    k: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    (0..count).map(|_| tournament(population, k, rng)).collect()
}
