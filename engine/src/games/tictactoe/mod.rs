mod board;
mod bot_controller;
mod errors;
mod game_state;
mod minimax;
mod rules;
mod score;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, actions, initial_state};
pub use bot_controller::{BotPair, calculate_move, play_out};
pub use errors::{IllegalActionError, IllegalActionReason, ParseActionError, ParseBoardError};
pub use game_state::{GameStatus, TicTacToeGameState};
pub use minimax::{evaluate, max_value, min_value, minimax};
pub use rules::{player, result, terminal};
pub use score::{outcome, score};
pub use types::{Action, Mark, Outcome, Player, WinningLine};
pub use win_detector::{winner, winning_line};
