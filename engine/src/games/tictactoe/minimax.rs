//! Exhaustive minimax over the full game tree.
//!
//! X maximizes the score and O minimizes it. Every line of play is searched to a
//! terminal board: no pruning, no caching between calls. The tree is at most
//! nine plies deep.

use super::board::{Board, actions};
use super::rules::{player, result, terminal};
use super::score::score;
use super::types::{Action, Player};

/// Optimal action for the side to move, or `None` if the game is over.
///
/// Ties go to the first action in row-major order: a later action only replaces
/// the current best when it is strictly better.
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        return None;
    }

    let mut best_action = None;

    match player(board) {
        Player::X => {
            let mut best_score = i32::MIN;
            for (action, next) in successors(board) {
                let score = min_value(&next);
                if score > best_score {
                    best_score = score;
                    best_action = Some(action);
                }
            }
        }
        Player::O => {
            let mut best_score = i32::MAX;
            for (action, next) in successors(board) {
                let score = max_value(&next);
                if score < best_score {
                    best_score = score;
                    best_action = Some(action);
                }
            }
        }
    }

    best_action
}

/// Value of `board` with X to move.
pub fn max_value(board: &Board) -> i32 {
    if terminal(board) {
        return score(board);
    }

    let mut value = i32::MIN;
    for (_, next) in successors(board) {
        value = value.max(min_value(&next));
    }
    value
}

/// Value of `board` with O to move.
pub fn min_value(board: &Board) -> i32 {
    if terminal(board) {
        return score(board);
    }

    let mut value = i32::MAX;
    for (_, next) in successors(board) {
        value = value.min(max_value(&next));
    }
    value
}

/// Game-theoretic value of `board` for whichever side is to move.
pub fn evaluate(board: &Board) -> i32 {
    match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> {
    actions(board)
        .into_iter()
        .filter_map(move |action| result(board, action).ok().map(|next| (action, next)))
}
