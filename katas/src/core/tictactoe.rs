//! Tic-tac-toe position evaluation.
//!
//! Positions are arbitrary 3x3 grids; no check is made that a position is
//! reachable in a legal game.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KataError;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Line-sum weight. The two weights keep "three O" (3) and "three X" (30)
    /// distinguishable from every mixed line.
    fn weight(self) -> u8 {
        match self {
            Mark::O => 1,
            Mark::X => 10,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single square of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Mark),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(mark) => mark.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mark(Mark::X)),
            'O' | 'o' | '0' => Some(Cell::Mark(Mark::O)),
            _ => None,
        }
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Mark(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Mark(mark)
    }
}

/// A 3x3 tic-tac-toe grid, indexed `cells[row][column]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub cells: [[Cell; 3]; 3],
}

impl Position {
    pub fn new(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// # Panics
    ///
    /// Panics if `row` or `column` is 3 or more.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }
}

/// Parses nine cells written row by row. `/`, `|` and whitespace may be used
/// to separate rows and are otherwise ignored, so `"X.O/.XO/..X"` and
/// `"X.O.XO..X"` are the same position.
impl FromStr for Position {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for character in s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
        {
            let cell = Cell::from_char(character).ok_or(KataError::InvalidCellCharacter {
                character,
                position: cells.len(),
            })?;
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(KataError::InvalidBoardLength {
                expected: 9,
                got: cells.len(),
            });
        }

        let mut grid = [[Cell::Empty; 3]; 3];
        for (index, cell) in cells.into_iter().enumerate() {
            grid[index / 3][index % 3] = cell;
        }
        Ok(Self::new(grid))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// Return the mark with three in a row, or `None` if nobody has won.
///
/// Rows and columns are checked before diagonals, and O before X, so a grid
/// with several completed lines reports the first match in that order.
pub fn evaluate_position(position: &Position) -> Option<Mark> {
    let mut row_sums = [0u8; 3];
    let mut column_sums = [0u8; 3];

    for (row, cells) in position.cells.iter().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            if let Some(mark) = cell.mark() {
                row_sums[row] += mark.weight();
                column_sums[column] += mark.weight();
            }
        }
    }

    for mark in [Mark::O, Mark::X] {
        let full_line = 3 * mark.weight();
        if row_sums
            .iter()
            .chain(column_sums.iter())
            .any(|&sum| sum == full_line)
        {
            return Some(mark);
        }
    }

    diagonal_winner(position)
}

fn diagonal_winner(position: &Position) -> Option<Mark> {
    let centre = position.cell(1, 1).mark()?;
    let holds = |row: usize, column: usize| position.cell(row, column).mark() == Some(centre);

    if (holds(0, 0) && holds(2, 2)) || (holds(2, 0) && holds(0, 2)) {
        Some(centre)
    } else {
        None
    }
}
