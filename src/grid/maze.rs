//! The read-only [`Grid`].

use std::fmt;

use super::types::{Cell, Direction, Position};
use crate::error::{MazeError, MazeResult};

/// A rectangular weighted maze with exactly one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Builds a grid from row vectors.
    ///
    /// # Errors
    ///
    /// [`MazeError::Configuration`] if there are no rows, rows are empty or
    /// ragged, or the grid does not hold exactly one start and one goal.
    pub fn new(rows: Vec<Vec<Cell>>) -> MazeResult<Self> {
        let Some(first) = rows.first() else {
            return Err(MazeError::Configuration("maze has no rows".into()));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MazeError::Configuration("maze rows are empty".into()));
        }
        if let Some(r) = rows.iter().position(|row| row.len() != cols) {
            return Err(MazeError::Configuration(format!(
                "row {r} has {} cells, expected {cols}",
                rows[r].len()
            )));
        }

        let height = rows.len();
        let mut start = None;
        let mut goal = None;
        let mut cells = Vec::with_capacity(height * cols);

        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                let pos = Position::new(r as i32, c as i32);
                match cell {
                    Cell::Start if start.is_some() => {
                        return Err(MazeError::Configuration(format!(
                            "second start cell at ({r}, {c})"
                        )));
                    }
                    Cell::Goal if goal.is_some() => {
                        return Err(MazeError::Configuration(format!(
                            "second goal cell at ({r}, {c})"
                        )));
                    }
                    Cell::Start => start = Some(pos),
                    Cell::Goal => goal = Some(pos),
                    _ => {}
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or_else(|| MazeError::Configuration("maze has no start".into()))?;
        let goal = goal.ok_or_else(|| MazeError::Configuration("maze has no goal".into()))?;

        Ok(Self {
            cells,
            rows: height,
            cols,
            start,
            goal,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a valid grid holds at least a start and a goal.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Returns `true` if `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Row-major index of `pos`, or `None` outside the grid.
    pub fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    pub fn position(&self, idx: usize) -> Position {
        Position::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Bounds-checked cell lookup.
    ///
    /// # Errors
    ///
    /// [`MazeError::OutOfRange`] outside the grid.
    pub fn cell(&self, pos: Position) -> MazeResult<Cell> {
        self.get(pos).ok_or(MazeError::OutOfRange {
            row: pos.row,
            col: pos.col,
        })
    }

    /// Cell lookup returning `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Returns `true` if `pos` is inside the grid and not a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_passable)
    }

    /// Cost of entering `pos`, or `None` for walls and positions off the grid.
    pub fn entry_cost(&self, pos: Position) -> Option<u32> {
        self.get(pos).and_then(Cell::cost)
    }

    /// 4-bit mask of non-wall in-grid neighbours of `pos`
    /// (Up = 8, Down = 4, Left = 2, Right = 1).
    pub fn available_directions(&self, pos: Position) -> u8 {
        Direction::ALL
            .iter()
            .filter(|&&d| self.is_open(pos.step(d)))
            .fold(0, |mask, d| mask | d.bit())
    }

    /// Directions from `pos` leading to a non-wall cell, in expansion order.
    pub fn open_directions(&self, pos: Position) -> impl Iterator<Item = Direction> + '_ {
        let mask = self.available_directions(pos);
        Direction::ALL
            .into_iter()
            .filter(move |d| mask & d.bit() != 0)
    }

    /// Sum of entry costs along `path`, excluding its first cell.
    ///
    /// Positions off the grid or on walls contribute nothing.
    pub fn path_cost(&self, path: &[Position]) -> u64 {
        path.iter()
            .skip(1)
            .filter_map(|&p| self.entry_cost(p))
            .map(u64::from)
            .sum()
    }

    /// Executes `moves` from the start and returns the visited positions,
    /// start first. The walk stops before leaving the grid or entering a
    /// wall, and right after entering the goal.
    pub fn walk(&self, moves: &[Direction]) -> Vec<Position> {
        let mut pos = self.start;
        let mut path = vec![pos];
        for &dir in moves {
            let next = pos.step(dir);
            if !self.is_open(next) {
                break;
            }
            pos = next;
            path.push(pos);
            if pos == self.goal {
                break;
            }
        }
        path
    }

    /// Renders the maze with `path` cells marked `*`.
    ///
    /// Each cell is printed left-aligned in a 4-character column; start and
    /// goal keep their letters.
    pub fn render(&self, path: &[Position]) -> String {
        let mut on_path = vec![false; self.cells.len()];
        for &p in path {
            if let Some(i) = self.index(p) {
                on_path[i] = true;
            }
        }

        let mut out = String::with_capacity(self.cells.len() * 4 + self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                let i = r * self.cols + c;
                let label = match self.cells[i] {
                    Cell::Start => "S".to_string(),
                    Cell::Goal => "G".to_string(),
                    _ if on_path[i] => "*".to_string(),
                    Cell::Wall => "#".to_string(),
                    Cell::Number(n) => n.to_string(),
                };
                out.push_str(&format!("{label:<4}"));
            }
            let trimmed = out.trim_end_matches(' ').len();
            out.truncate(trimmed);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}
