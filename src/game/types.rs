use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Opaque session-scoped participant token.
///
/// Issued by the gateway when a connection is opened and used for every
/// coordinator lookup afterwards; identity is never tied to slot position.
pub type PlayerId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Parse a wire-level move string. Anything but the three known moves
    /// yields None.
    pub fn parse(raw: &str) -> Option<Move> {
        match raw {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

/// Per-recipient round outcome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

/// Session occupancy phase, derived from the number of occupied slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    Waiting,
    Active,
}
