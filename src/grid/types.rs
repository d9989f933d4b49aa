//! Cell, position and move primitives.

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Impassable.
    Wall,
    /// The unique start cell. Entering it costs nothing.
    Start,
    /// The unique goal cell. Entering it costs nothing.
    Goal,
    /// A traversable cell costing the given amount to enter.
    Number(u32),
}

impl Cell {
    /// Cost of stepping onto this cell, or `None` for walls.
    pub fn cost(self) -> Option<u32> {
        match self {
            Cell::Wall => None,
            Cell::Start | Cell::Goal => Some(0),
            Cell::Number(n) => Some(n),
        }
    }

    /// Returns `true` for every cell except walls.
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// A `(row, col)` coordinate.
///
/// Coordinates are signed so that a move off the edge of the grid still
/// yields a representable (out-of-range) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in direction `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Manhattan (L1) distance.
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Euclidean (L2) distance.
    pub fn euclidean(self, other: Position) -> f64 {
        let dr = f64::from(self.row - other.row);
        let dc = f64::from(self.col - other.col);
        dr.hypot(dc)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// One of the four cardinal moves.
///
/// The declaration order `Up, Down, Left, Right` is the fixed order used for
/// neighbour expansion and for the bits of
/// [`Grid::available_directions`](super::Grid::available_directions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` offset of this move.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Availability bit: Up = 8, Down = 4, Left = 2, Right = 1.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b1000,
            Direction::Down => 0b0100,
            Direction::Left => 0b0010,
            Direction::Right => 0b0001,
        }
    }

    /// Index into [`Direction::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
