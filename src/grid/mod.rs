//! Weighted grid mazes.
//!
//! A [`Grid`] is a rectangular, row-major array of [`Cell`]s with exactly one
//! start and one goal. It is built once (from cells or from maze text) and is
//! read-only to every solver.
//!
//! # Maze text
//!
//! ```text
//! S"1"#
//! "1"#"1"
//! "1"G"1"
//! ```
//!
//! `#` is a wall, `S` the start, `G` the goal and `"<n>"` a cell that costs
//! `n` to enter. Anything else outside quotes is ignored.

mod maze;
mod parse;
mod types;

pub use maze::Grid;
pub use types::{Cell, Direction, Position};
