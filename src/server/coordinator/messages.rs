use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::types::{Move, Outcome};

/// Client -> server requests.
///
/// Anything that fails to parse into one of these is dropped by the
/// connection actor and never reaches the coordinator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A move submission for the current round. The move travels as a raw
    /// string and is validated by the session core.
    Choice { choice: String },
    /// Request to start the next round.
    PlayAgain,
}

// Message serveur -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Connected {
        player_num: u8,
        message: String,
    },
    Waiting {
        message: String,
    },
    GameStart {
        message: String,
    },
    RoundStart {
        message: String,
        scores: [u32; 2],
    },
    ChoiceMade {
        choice: Move,
        message: String,
    },
    Result {
        result: Outcome,
        your_choice: Move,
        opponent_choice: Move,
        scores: [u32; 2],
    },
    OpponentLeft {
        player_num: u8,
        message: String,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn connected(player_num: u8) -> Self {
        Self::Connected {
            player_num,
            message: format!("You are Player {}", player_num),
        }
    }
    pub fn waiting() -> Self {
        Self::Waiting { message: "Waiting for opponent...".to_string() }
    }
    pub fn game_start() -> Self {
        Self::GameStart { message: "Both players connected! Game starting...".to_string() }
    }
    pub fn round_start(scores: [u32; 2]) -> Self {
        Self::RoundStart { message: "Make your choice!".to_string(), scores }
    }
    pub fn choice_made(choice: Move) -> Self {
        Self::ChoiceMade {
            message: format!("You chose {}", choice.as_str()),
            choice,
        }
    }
    pub fn result(result: Outcome, your_choice: Move, opponent_choice: Move, scores: [u32; 2]) -> Self {
        Self::Result { result, your_choice, opponent_choice, scores }
    }
    pub fn opponent_left(player_num: u8) -> Self {
        Self::OpponentLeft {
            player_num,
            message: format!("Player {} left the game", player_num),
        }
    }
    pub fn error(message: &str) -> Self {
        Self::Error { message: message.to_string() }
    }
}
