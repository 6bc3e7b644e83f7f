use std::io::{BufRead, Write};

use tictactoe_engine::games::{BotType, SessionRng};
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{Action, GameStatus, Player, TicTacToeGameState, calculate_move};

/// Human against the minimax bot. Reads `row col` moves from `input` until the game ends.
pub fn play(
    human: Player,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<GameStatus, Box<dyn std::error::Error>> {
    let mut state = TicTacToeGameState::new();
    let mut rng = SessionRng::from_random();
    let mut lines = input.lines();

    log!("New game, human plays {}", human);
    writeln!(output, "{}\n", state.board())?;

    while let Some(side) = state.current_player() {
        if side == human {
            write!(output, "Your move ({}), enter row and column: ", side)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                log!("Input closed, leaving the game");
                return Ok(state.status());
            };
            let action = match line?.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };
            if let Err(e) = state.place_mark(action) {
                writeln!(output, "{}", e)?;
                continue;
            }
        } else {
            let action = calculate_move(BotType::Minimax, state.board(), &mut rng)
                .ok_or("Computer found no move")?;
            log!("Computer ({}) plays {}", side, action);
            state.place_mark(action)?;
        }

        writeln!(output, "\n{}\n", state.board())?;
    }

    let verdict = match state.get_winner() {
        Some(winner) if winner == human => "You win!".to_string(),
        Some(winner) => format!("{} wins.", winner),
        None => "Draw.".to_string(),
    };
    writeln!(output, "{}", verdict)?;
    log!("Game over: {:?}", state.status());

    Ok(state.status())
}
