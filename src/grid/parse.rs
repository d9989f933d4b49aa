//! Maze text parsing.

use std::str::FromStr;

use super::maze::Grid;
use super::types::Cell;
use crate::error::{MazeError, MazeResult};

impl FromStr for Grid {
    type Err = MazeError;

    /// Parses maze text: one row per line, `#` wall, `S` start, `G` goal,
    /// `"<n>"` number cell. Blank lines are skipped and any other character
    /// outside quotes is ignored.
    fn from_str(s: &str) -> MazeResult<Self> {
        let rows = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| parse_line(i + 1, line))
            .collect::<MazeResult<Vec<_>>>()?;
        Grid::new(rows)
    }
}

fn parse_line(line_no: usize, line: &str) -> MazeResult<Vec<Cell>> {
    let mut cells = Vec::new();
    let mut number: Option<String> = None;

    for ch in line.chars() {
        match number.as_mut() {
            Some(digits) if ch == '"' => {
                let value = digits.trim().parse::<u32>().map_err(|_| MazeError::Parse {
                    line: line_no,
                    message: format!("invalid cell cost {digits:?}"),
                })?;
                cells.push(Cell::Number(value));
                number = None;
            }
            Some(digits) => digits.push(ch),
            None => match ch {
                '"' => number = Some(String::new()),
                '#' => cells.push(Cell::Wall),
                'S' => cells.push(Cell::Start),
                'G' => cells.push(Cell::Goal),
                _ => {}
            },
        }
    }

    if number.is_some() {
        return Err(MazeError::Parse {
            line: line_no,
            message: "unterminated number cell".into(),
        });
    }
    Ok(cells)
}
