use super::board::Board;
use super::types::{Action, Player, WinningLine};

type Line = [(usize, usize); 3];

// Rows, then columns, then both diagonals.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| check_line(board, line))
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        check_line(board, line)
            .map(|player| WinningLine::new(player, line.map(|(row, col)| Action::new(row, col))))
    })
}

fn check_line(board: &Board, line: &Line) -> Option<Player> {
    let [a, b, c] = line.map(|(row, col)| board.cell(row, col));
    if a == b && b == c { a.player() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(winner(&Board::default()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        let cases = [
            "XXX/.../...",
            ".../XXX/...",
            ".../.../XXX",
            "X../X../X..",
            ".X./.X./.X.",
            "..X/..X/..X",
            "X../.X./..X",
            "..X/.X./X..",
        ];
        for case in cases {
            assert_eq!(winner(&board(case)), Some(Player::X), "line {}", case);
            let flipped = case.replace('X', "O");
            assert_eq!(winner(&board(&flipped)), Some(Player::O), "line {}", flipped);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(winner(&board("XXO/OOX/XOX")), None);
        assert_eq!(winner(&board("XX./.../...")), None);
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let line = winning_line(&board("..O/.O./O..")).unwrap();
        assert_eq!(line.player, Player::O);
        assert_eq!(line.start(), Action::new(0, 2));
        assert_eq!(line.end(), Action::new(2, 0));
    }
}
