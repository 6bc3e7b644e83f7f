use super::board::{Board, actions};
use super::errors::{IllegalActionError, IllegalActionReason};
use super::types::{Action, Mark, Player};
use super::win_detector::winner;

/// X moves first and players alternate, so the side to move follows from the mark counts.
pub fn player(board: &Board) -> Player {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Applies `action` for the side to move and returns the new board. `board` is left untouched.
pub fn result(board: &Board, action: Action) -> Result<Board, IllegalActionError> {
    if !actions(board).contains(&action) {
        let reason = match board.get(action) {
            None => IllegalActionReason::OutOfBounds,
            Some(_) => IllegalActionReason::Occupied,
        };
        return Err(IllegalActionError::new(action, reason));
    }

    match board.get(action) {
        Some(Mark::Empty) => Ok(board.with_mark(action, player(board).mark())),
        Some(_) => Err(IllegalActionError::new(action, IllegalActionReason::Occupied)),
        None => Err(IllegalActionError::new(action, IllegalActionReason::OutOfBounds)),
    }
}

pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::initial_state;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player(&initial_state()), Player::X);
    }

    #[test]
    fn test_player_alternates_by_count() {
        assert_eq!(player(&board("X../.../...")), Player::O);
        assert_eq!(player(&board("XO./.../...")), Player::X);
        assert_eq!(player(&board("XO./X../...")), Player::O);
    }

    #[test]
    fn test_result_places_current_players_mark() {
        let start = initial_state();
        let after_x = result(&start, Action::new(1, 1)).unwrap();
        assert_eq!(after_x.get(Action::new(1, 1)), Some(Mark::X));

        let after_o = result(&after_x, Action::new(0, 0)).unwrap();
        assert_eq!(after_o.get(Action::new(0, 0)), Some(Mark::O));
        assert_eq!(after_o.count(Mark::X), 1);
        assert_eq!(after_o.count(Mark::O), 1);
    }

    #[test]
    fn test_result_does_not_mutate_input() {
        let start = board("X../.O./...");
        let before = start;
        let _ = result(&start, Action::new(2, 2)).unwrap();
        assert_eq!(start, before);
        assert_eq!(start.get(Action::new(2, 2)), Some(Mark::Empty));
    }

    #[test]
    fn test_result_rejects_occupied_cell() {
        let start = board("X../.../...");
        let err = result(&start, Action::new(0, 0)).unwrap_err();
        assert_eq!(err.reason, IllegalActionReason::Occupied);
        assert_eq!(err.action, Action::new(0, 0));
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let start = initial_state();
        for action in [Action::new(3, 0), Action::new(0, 3), Action::new(7, 9)] {
            let err = result(&start, action).unwrap_err();
            assert_eq!(err.reason, IllegalActionReason::OutOfBounds);
        }
    }

    #[test]
    fn test_illegal_action_message() {
        let err = result(&board("X../.../..."), Action::new(0, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal action (0, 0): cell is already marked"
        );
    }

    #[test]
    fn test_terminal_on_win_and_full_board() {
        assert!(!terminal(&initial_state()));
        assert!(terminal(&board("XXX/OO./...")));
        assert!(terminal(&board("XOX/XOO/OXX")));
        assert!(!terminal(&board("XOX/XOO/OX.")));
    }
}
