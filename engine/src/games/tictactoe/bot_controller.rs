use crate::games::{BotType, SessionRng};
use super::board::{Board, actions};
use super::game_state::{GameStatus, TicTacToeGameState};
use super::minimax::minimax;
use super::rules::{player, terminal};
use super::types::{Action, Player};

pub fn calculate_move(bot_type: BotType, board: &Board, rng: &mut SessionRng) -> Option<Action> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => minimax(board),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Action> {
    if terminal(board) {
        return None;
    }
    rng.choose(&actions(board)).copied()
}

/// Bot assignment for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotPair {
    pub x: BotType,
    pub o: BotType,
}

impl BotPair {
    pub fn new(x: BotType, o: BotType) -> Self {
        Self { x, o }
    }

    pub fn for_player(&self, player: Player) -> BotType {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Plays `state` to the end with both sides controlled by bots.
pub fn play_out(
    state: &mut TicTacToeGameState,
    bots: BotPair,
    rng: &mut SessionRng,
) -> Result<GameStatus, String> {
    while !state.is_over() {
        let side = player(state.board());
        let action = calculate_move(bots.for_player(side), state.board(), rng)
            .ok_or_else(|| format!("Bot for {} found no move on a running game", side))?;
        state.place_mark(action)?;
    }
    Ok(state.status())
}
