mod analyze;
mod play;
mod self_play;

pub use analyze::{analyze, best_move};
pub use play::play;
pub use self_play::{SelfPlaySettings, self_play};
