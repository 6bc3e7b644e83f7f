use tictactoe_engine::games::{BotType, SessionRng};
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{BotPair, GameStatus, TicTacToeGameState, play_out};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlaySettings {
    pub games: u32,
    pub x_bot: BotType,
    pub o_bot: BotType,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SelfPlayTally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

pub fn self_play(settings: SelfPlaySettings) -> Result<SelfPlayTally, String> {
    let bots = BotPair::new(settings.x_bot, settings.o_bot);
    let mut rng = settings.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    let mut tally = SelfPlayTally::default();

    log!(
        "Self-play: {} games, X = {}, O = {}, seed {}",
        settings.games,
        settings.x_bot,
        settings.o_bot,
        rng.seed()
    );

    for game in 1..=settings.games {
        let mut state = TicTacToeGameState::new();
        let status = play_out(&mut state, bots, &mut rng)?;
        let moves: Vec<String> = state.history().iter().map(|a| a.to_string()).collect();
        log!("Game {}: {:?} after {}", game, status, moves.join(" "));
        tally.record(status);
    }

    log!(
        "Self-play finished: X won {}, O won {}, draws {}",
        tally.x_wins,
        tally.o_wins,
        tally.draws
    );

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimax_self_play_only_draws() {
        let tally = self_play(SelfPlaySettings {
            games: 2,
            x_bot: BotType::Minimax,
            o_bot: BotType::Minimax,
            seed: Some(1),
        })
        .unwrap();
        assert_eq!(tally.draws, 2);
        assert_eq!(tally.games(), 2);
    }

    #[test]
    fn test_same_seed_same_random_results() {
        let settings = SelfPlaySettings {
            games: 20,
            x_bot: BotType::Random,
            o_bot: BotType::Random,
            seed: Some(77),
        };
        let first = self_play(settings).unwrap();
        let second = self_play(settings).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.games(), 20);
    }
}
