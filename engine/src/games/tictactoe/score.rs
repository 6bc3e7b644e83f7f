use super::board::Board;
use super::rules::terminal;
use super::types::Outcome;
use super::win_detector::winner;

/// +1 if X has won, -1 if O has won, 0 otherwise. Only meaningful on terminal boards.
pub fn score(board: &Board) -> i32 {
    Outcome::from_winner(winner(board)).value()
}

pub fn outcome(board: &Board) -> Option<Outcome> {
    if terminal(board) {
        Some(Outcome::from_winner(winner(board)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_score_x_win() {
        assert_eq!(score(&board("XXX/OO./...")), 1);
        assert_eq!(outcome(&board("XXX/OO./...")), Some(Outcome::XWins));
    }

    #[test]
    fn test_score_o_win() {
        assert_eq!(score(&board("XX./OOO/X..")), -1);
        assert_eq!(outcome(&board("XX./OOO/X..")), Some(Outcome::OWins));
    }

    #[test]
    fn test_score_draw() {
        assert_eq!(score(&board("XOX/XOO/OXX")), 0);
        assert_eq!(outcome(&board("XOX/XOO/OXX")), Some(Outcome::Draw));
    }

    #[test]
    fn test_no_outcome_while_in_progress() {
        assert_eq!(outcome(&board("XO./.../...")), None);
    }
}
