use std::fmt;
use std::str::FromStr;

use super::errors::ParseBoardError;
use super::types::{Action, Mark};

pub const BOARD_SIZE: usize = 3;

/// 3x3 grid of marks, stored row by row. Copying a board copies the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// `None` when the action lies outside the grid.
    pub fn get(&self, action: Action) -> Option<Mark> {
        self.cells.get(action.row)?.get(action.col).copied()
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub(crate) fn with_mark(mut self, action: Action, mark: Mark) -> Self {
        self.cells[action.row][action.col] = mark;
        self
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }
}

pub fn initial_state() -> Board {
    Board::default()
}

/// Empty cells in row-major order.
pub fn actions(board: &Board) -> Vec<Action> {
    let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Action::new(row, col));
            }
        }
    }
    moves
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// Rows are separated by `/` or newlines, e.g. `XX./OO./...`.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::WrongRowCount(rows.len()));
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, text) in rows.iter().enumerate() {
            let marks = text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    'X' | 'x' => Ok(Mark::X),
                    'O' | 'o' => Ok(Mark::O),
                    '.' | '_' | '-' => Ok(Mark::Empty),
                    other => Err(ParseBoardError::InvalidCell(other)),
                })
                .collect::<Result<Vec<_>, _>>()?;

            if marks.len() != BOARD_SIZE {
                return Err(ParseBoardError::WrongRowLength {
                    row,
                    length: marks.len(),
                });
            }
            cells[row].copy_from_slice(&marks);
        }

        Ok(Board::from_rows(cells))
    }
}
