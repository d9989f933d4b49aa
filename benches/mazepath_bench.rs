//! Criterion benchmarks for the maze solvers.
//!
//! Uses seeded random mazes (20% walls, costs 1-9) so every strategy sees
//! the same input across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_mazepath::dispatch::{solve_with, Strategy};
use u_mazepath::ga::GeneticConfig;
use u_mazepath::grid::{Cell, Grid};
use u_mazepath::random::create_rng;

// ===========================================================================
// Maze generation
// ===========================================================================

/// Random square maze with the start top-left and the goal bottom-right.
/// A cost-1 corridor along the top row and right column keeps it solvable.
fn random_maze(size: usize, seed: u64) -> Grid {
    let mut rng = create_rng(seed);
    let mut rows: Vec<Vec<Cell>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    if rng.random_bool(0.2) {
                        Cell::Wall
                    } else {
                        Cell::Number(rng.random_range(1..=9))
                    }
                })
                .collect()
        })
        .collect();
    for c in 0..size {
        rows[0][c] = Cell::Number(1);
    }
    for row in rows.iter_mut() {
        row[size - 1] = Cell::Number(1);
    }
    rows[0][0] = Cell::Start;
    rows[size - 1][size - 1] = Cell::Goal;
    Grid::new(rows).expect("generated maze is rectangular")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier");
    let config = GeneticConfig::default();

    for &size in &[16usize, 64, 128] {
        let grid = random_maze(size, 42);
        for strategy in [Strategy::Dijkstra, Strategy::AStar, Strategy::GreedyBestFirst] {
            group.bench_with_input(BenchmarkId::new(strategy.name(), size), &grid, |b, g| {
                b.iter(|| {
                    let outcome = solve_with(black_box(g), strategy, &config);
                    black_box(outcome)
                })
            });
        }
    }
    group.finish();
}

fn bench_genetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("genetic");
    group.sample_size(10);

    for (size, pop, gen) in [(8usize, 100usize, 50usize), (16, 200, 50), (32, 200, 30)] {
        let grid = random_maze(size, 7);
        let config = GeneticConfig::fast()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("s{}_p{}_g{}", size, pop, gen), size),
            &(grid, config),
            |b, (g, c)| {
                b.iter(|| {
                    let outcome = solve_with(black_box(g), Strategy::Genetic, black_box(c));
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_frontier, bench_genetic);
criterion_main!(benches);
