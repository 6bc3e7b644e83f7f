use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{
    Board, Player, actions, evaluate, minimax, outcome, player, result, winning_line,
};

fn describe_value(value: i32) -> &'static str {
    match value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

pub fn best_move(board: &Board) {
    println!("{}\n", board);

    if let Some(finished) = outcome(board) {
        match winning_line(board) {
            Some(line) => println!(
                "Game over: {} won from {} to {}",
                line.player,
                line.start(),
                line.end()
            ),
            None => println!("Game over: {:?}", finished),
        }
        return;
    }

    let side = player(board);
    log!("Searching best move for {}", side);
    match minimax(board) {
        Some(action) => println!(
            "{} to move, best move {} ({} with best play)",
            side,
            action,
            describe_value(evaluate(board))
        ),
        None => println!("No move available"),
    }
}

/// Value of every legal action under best play from both sides.
pub fn analyze(board: &Board) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}\n", board);

    if outcome(board).is_some() {
        println!("Game over, nothing to analyze");
        return Ok(());
    }

    let moves = actions(board);

    let side = player(board);
    println!("{} to move, {} legal moves", side, moves.len());

    let mut rated = Vec::with_capacity(moves.len());
    for action in moves {
        let next = result(board, action)?;
        rated.push((action, evaluate(&next)));
    }

    // Best first for the side to move.
    match side {
        Player::X => rated.sort_by(|a, b| b.1.cmp(&a.1)),
        Player::O => rated.sort_by(|a, b| a.1.cmp(&b.1)),
    }

    for (action, value) in rated {
        println!("  {} -> {:>2} ({})", action, value, describe_value(value));
    }

    Ok(())
}
