//! Hive-mind penalty memory.
//!
//! Every individual evaluated by one solver writes the moves that led it
//! into walls, off the grid or into traps. Later generations read the same
//! memory: guided generation and mutation refuse moves whose penalty exceeds
//! the hard-block threshold, and the fitness walk charges for the rest. The
//! memory only grows, except when an annihilation event wipes it.

use std::collections::HashMap;

use crate::grid::{Direction, Position};

/// Accumulated penalty per `(position, move)`.
#[derive(Debug, Clone, Default)]
pub struct PenaltyMemory {
    scores: HashMap<Position, [f64; 4]>,
}

impl PenaltyMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Penalty recorded for leaving `pos` by `dir` (0 if none).
    pub fn penalty(&self, pos: Position, dir: Direction) -> f64 {
        self.scores.get(&pos).map_or(0.0, |s| s[dir.index()])
    }

    /// Adds `value` to the penalty of leaving `pos` by `dir`.
    pub fn add(&mut self, pos: Position, dir: Direction, value: f64) {
        self.scores.entry(pos).or_insert([0.0; 4])[dir.index()] += value;
    }

    /// Returns `true` if the move's penalty exceeds `hard_block`.
    pub fn is_blocked(&self, pos: Position, dir: Direction, hard_block: f64) -> bool {
        self.penalty(pos, dir) > hard_block
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.scores.clear();
    }

    /// Number of positions with at least one recorded move.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Positions with at least one recorded move, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.scores.keys().copied()
    }
}
