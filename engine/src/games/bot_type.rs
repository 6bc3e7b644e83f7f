use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Minimax,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Random => write!(f, "random"),
            BotType::Minimax => write!(f, "minimax"),
        }
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(BotType::Random),
            "minimax" => Ok(BotType::Minimax),
            other => Err(format!("Unknown bot type '{}', expected random or minimax", other)),
        }
    }
}
