mod commands;
mod config;

use clap::{Parser, Subcommand};
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::BotType;
use tictactoe_engine::tictactoe::{Board, Player};
use tictactoe_engine::{log, logger};

use commands::SelfPlaySettings;
use config::{CONFIG_FILE, SelfPlayConfig, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the minimax bot
    Play {
        /// Side the human plays (x or o)
        #[arg(long)]
        human: Option<Player>,
    },
    /// Let two bots play each other
    SelfPlay {
        #[arg(long)]
        games: Option<u32>,
        /// Bot for X (random or minimax)
        #[arg(long)]
        x: Option<BotType>,
        /// Bot for O (random or minimax)
        #[arg(long)]
        o: Option<BotType>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the minimax move for a board such as XX./OO./...
    BestMove { board: Board },
    /// Print the value of every legal move on a board
    Analyze { board: Board },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(&args.config)
        .get_config()
        .map_err(|e| format!("Failed to load {}: {}", args.config, e))?;

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    match args.command {
        Command::Play { human } => {
            let human = human.unwrap_or(config.play.human);
            let stdin = std::io::stdin();
            commands::play(human, stdin.lock(), std::io::stdout())?;
        }
        Command::SelfPlay { games, x, o, seed } => {
            let overrides = SelfPlayConfig {
                games: games.unwrap_or(config.self_play.games),
                x_bot: x.unwrap_or(config.self_play.x_bot),
                o_bot: o.unwrap_or(config.self_play.o_bot),
                seed: seed.or(config.self_play.seed),
            };
            overrides.validate()?;
            let settings = SelfPlaySettings {
                games: overrides.games,
                x_bot: overrides.x_bot,
                o_bot: overrides.o_bot,
                seed: overrides.seed,
            };
            let tally = commands::self_play(settings)?;
            println!(
                "X won {}, O won {}, draws {} ({} games)",
                tally.x_wins,
                tally.o_wins,
                tally.draws,
                tally.games()
            );
        }
        Command::BestMove { board } => commands::best_move(&board),
        Command::Analyze { board } => commands::analyze(&board)?,
    }

    log!("Done");
    Ok(())
}
