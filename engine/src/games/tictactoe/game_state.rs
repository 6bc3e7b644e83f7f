use super::board::{Board, initial_state};
use super::rules::{player, result};
use super::score::outcome;
use super::types::{Action, Outcome, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn from_board(board: &Board) -> Self {
        match outcome(board) {
            None => GameStatus::InProgress,
            Some(Outcome::XWins) => GameStatus::XWon,
            Some(Outcome::OWins) => GameStatus::OWon,
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }
}

/// A game being played out move by move. The side to move is always read off the board.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    history: Vec<Action>,
    status: GameStatus,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::from_board(initial_state())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
            status: GameStatus::from_board(&board),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        if self.is_over() {
            None
        } else {
            Some(player(&self.board))
        }
    }

    pub fn place_mark(&mut self, action: Action) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        self.board = result(&self.board, action).map_err(|e| e.to_string())?;
        self.history.push(action);
        self.status = GameStatus::from_board(&self.board);

        Ok(())
    }

    pub fn get_winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::XWon => Some(Player::X),
            GameStatus::OWon => Some(Player::O),
            _ => None,
        }
    }
}
