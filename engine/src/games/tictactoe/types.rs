use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ParseActionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

/// Side to move. Always derived from a board, never stored next to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().to_char())
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(format!("Unknown player '{}', expected X or O", other)),
        }
    }
}

/// A move: the (row, col) coordinate of the cell to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Accepts `1 2`, `1,2` and `(1, 2)`.
impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(ParseActionError::WrongArity(parts.len()));
        }

        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| ParseActionError::InvalidNumber(part.to_string()))
        };

        Ok(Action::new(parse(parts[0])?, parse(parts[1])?))
    }
}

/// Result of a finished game, seen from X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub fn from_winner(winner: Option<Player>) -> Self {
        match winner {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None => Outcome::Draw,
        }
    }

    pub fn value(self) -> i32 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Action; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [Action; 3]) -> Self {
        Self { player, cells }
    }

    pub fn start(&self) -> Action {
        self.cells[0]
    }

    pub fn end(&self) -> Action {
        self.cells[2]
    }
}
