use serde::{Deserialize, Serialize};

/// What can occupy a cell. `Win` only ever appears on cells of a completed
/// winning line, after the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Red,
    Yellow,
    Win,
}

/// One of the two movers. Only players drop tokens; `Token::Win` is never played.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to the token it drops
    pub fn token(self) -> Token {
        match self {
            Player::Red => Token::Red,
            Player::Yellow => Token::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}
