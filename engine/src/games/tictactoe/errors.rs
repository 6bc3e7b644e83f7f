use super::types::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalActionReason {
    OutOfBounds,
    Occupied,
}

/// Returned by `result` when the action is not one of the board's legal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalActionError {
    pub action: Action,
    pub reason: IllegalActionReason,
}

impl IllegalActionError {
    pub fn new(action: Action, reason: IllegalActionReason) -> Self {
        Self { action, reason }
    }
}

impl std::fmt::Display for IllegalActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            IllegalActionReason::OutOfBounds => {
                write!(f, "Illegal action {}: position out of bounds", self.action)
            }
            IllegalActionReason::Occupied => {
                write!(f, "Illegal action {}: cell is already marked", self.action)
            }
        }
    }
}

impl std::error::Error for IllegalActionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    WrongRowCount(usize),
    WrongRowLength { row: usize, length: usize },
    InvalidCell(char),
}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::WrongRowCount(count) => {
                write!(f, "Expected 3 rows, found {}", count)
            }
            ParseBoardError::WrongRowLength { row, length } => {
                write!(f, "Row {} has {} cells, expected 3", row, length)
            }
            ParseBoardError::InvalidCell(c) => {
                write!(f, "Invalid cell '{}', expected X, O or one of . _ -", c)
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseActionError {
    WrongArity(usize),
    InvalidNumber(String),
}

impl std::fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseActionError::WrongArity(count) => {
                write!(f, "Expected a row and a column, found {} values", count)
            }
            ParseActionError::InvalidNumber(value) => {
                write!(f, "'{}' is not a valid coordinate", value)
            }
        }
    }
}

impl std::error::Error for ParseActionError {}
