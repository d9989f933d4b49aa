//! Error types.
//!
//! "No path" is not an error: the frontier engines report it through
//! [`NO_PATH_COST`](crate::dispatch::NO_PATH_COST) and the genetic solver
//! through `goal_reached == false`.

use thiserror::Error;

/// Errors raised while building a maze or selecting a solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid violates a structural invariant (shape, start, goal).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The maze text could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A cell access fell outside the grid.
    #[error("position ({row}, {col}) is outside the grid")]
    OutOfRange { row: i32, col: i32 },

    /// Unknown strategy identifier.
    #[error("unknown strategy: {0:?}")]
    InvalidStrategy(String),

    /// Solver parameters are invalid.
    #[error("invalid solver config: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type MazeResult<T> = Result<T, MazeError>;
