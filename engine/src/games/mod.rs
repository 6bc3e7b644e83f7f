mod bot_type;
mod session_rng;

pub mod tictactoe;

pub use bot_type::BotType;
pub use session_rng::SessionRng;
