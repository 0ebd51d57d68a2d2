//! The session core: a single two-player duel held in memory.
//!
//! `Session` owns the slots, the current round's choices, and the cumulative
//! scores; it is the only place game state is mutated. It performs no I/O:
//! every operation returns the outbound messages the gateway must deliver,
//! so the whole state machine can be driven from plain unit tests.

use std::collections::HashMap;

use log::info;

use crate::config::game::MAX_PLAYERS;
use crate::game::rules;
use crate::game::types::{Move, Outcome, PlayerId, SessionPhase};
use crate::server::coordinator::messages::ServerMessage;

/// A message the gateway must deliver to one participant.
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub to: PlayerId,
    pub message: ServerMessage,
}

/// Errors surfaced to the offending participant; never fatal to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Both slots are already occupied.
    SessionFull,
    /// The submitted move is not rock, paper, or scissors.
    InvalidMove,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::SessionFull => write!(f, "Game is full. Only 2 players allowed."),
            SessionError::InvalidMove => write!(f, "Invalid move. Choose rock, paper or scissors."),
        }
    }
}

/// The single game session.
pub struct Session {
    /// Occupied slots in arrival order; index = slot ordinal ("Player 1" / "Player 2").
    slots: Vec<PlayerId>,
    /// Moves submitted for the current round, keyed by slot index.
    choices: HashMap<usize, Move>,
    /// Cumulative scores, indexed by slot; survive rounds, not resets.
    scores: [u32; 2],
}

impl Session {
    pub fn new() -> Self {
        Session {
            slots: Vec::new(),
            choices: HashMap::new(),
            scores: [0, 0],
        }
    }

    /// Current occupancy phase, derived from the slot count.
    pub fn phase(&self) -> SessionPhase {
        match self.slots.len() {
            0 => SessionPhase::Empty,
            1 => SessionPhase::Waiting,
            _ => SessionPhase::Active,
        }
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// Slot index currently held by `id`, if any.
    fn slot_of(&self, id: PlayerId) -> Option<usize> {
        self.slots.iter().position(|p| *p == id)
    }

    /// The same message, addressed to every occupied slot.
    fn broadcast(&self, message: ServerMessage) -> Vec<Outbound> {
        self.slots
            .iter()
            .map(|&to| Outbound { to, message: message.clone() })
            .collect()
    }

    /// Admit a new participant into the lowest free slot.
    ///
    /// The second admission starts the game: both players receive
    /// `game_start` followed by the first `round_start`. A third participant
    /// is rejected with `SessionFull` and nothing about them is stored.
    pub fn admit(&mut self, id: PlayerId) -> Result<Vec<Outbound>, SessionError> {
        if self.slots.len() >= MAX_PLAYERS {
            return Err(SessionError::SessionFull);
        }
        self.slots.push(id);
        let player_num = self.slots.len() as u8;
        info!("[Session] Player {} connected ({})", player_num, id);

        let mut out = vec![Outbound { to: id, message: ServerMessage::connected(player_num) }];
        if self.phase() == SessionPhase::Active {
            out.extend(self.broadcast(ServerMessage::game_start()));
            out.extend(self.start_round());
        } else {
            out.push(Outbound { to: id, message: ServerMessage::waiting() });
        }
        Ok(out)
    }

    /// Remove a participant. Unknown ids are ignored.
    ///
    /// Any departure ends the match for everyone: the remaining player is
    /// told their opponent left, then the whole session (slots, choices,
    /// scores) resets to empty.
    pub fn remove(&mut self, id: PlayerId) -> Vec<Outbound> {
        let Some(slot) = self.slot_of(id) else {
            return Vec::new();
        };
        info!("[Session] Player {} disconnected ({})", slot + 1, id);

        let mut out = Vec::new();
        if self.phase() == SessionPhase::Active {
            let notice = ServerMessage::opponent_left(slot as u8 + 1);
            out.extend(
                self.slots
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != slot)
                    .map(|(_, &to)| Outbound { to, message: notice.clone() }),
            );
        }
        self.reset();
        out
    }

    /// Start a new round: forget the previous choices and prompt both players.
    ///
    /// Triggered by the second admission and by every rematch request;
    /// requests arriving without a full session are ignored.
    pub fn start_round(&mut self) -> Vec<Outbound> {
        if self.phase() != SessionPhase::Active {
            return Vec::new();
        }
        self.choices.clear();
        self.broadcast(ServerMessage::round_start(self.scores))
    }

    /// Record a move for the current round.
    ///
    /// Resubmitting before the round resolves replaces the earlier move. Once
    /// both occupied slots have submitted, the round resolves immediately.
    /// An unparseable move is rejected without touching any state.
    pub fn submit_choice(&mut self, id: PlayerId, raw: &str) -> Result<Vec<Outbound>, SessionError> {
        let Some(slot) = self.slot_of(id) else {
            return Ok(Vec::new());
        };
        let choice = Move::parse(raw).ok_or(SessionError::InvalidMove)?;
        let replaced = self.choices.insert(slot, choice).is_some();

        let mut out = vec![Outbound { to: id, message: ServerMessage::choice_made(choice) }];
        // Resolution fires on the transition into a fully-submitted round.
        // Overwrites never re-trigger it, so a submission arriving after the
        // round resolved cannot credit the same round twice.
        if !replaced && self.choices.len() == MAX_PLAYERS {
            out.extend(self.resolve_round());
        }
        Ok(out)
    }

    /// Resolve the round from both recorded moves, crediting the winner and
    /// framing the result for each recipient individually.
    ///
    /// Choices are deliberately kept until the next `start_round`: the
    /// session stays active awaiting an explicit rematch request.
    fn resolve_round(&mut self) -> Vec<Outbound> {
        let (Some(&p1), Some(&p2)) = (self.choices.get(&0), self.choices.get(&1)) else {
            return Vec::new();
        };
        let winner = rules::resolve(p1, p2);
        if let Some(slot) = winner {
            self.scores[slot] += 1;
        }
        info!("[Session] Round resolved: {:?} vs {:?}, scores {:?}", p1, p2, self.scores);

        let moves = [p1, p2];
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, &to)| {
                let outcome = match winner {
                    None => Outcome::Tie,
                    Some(w) if w == idx => Outcome::Win,
                    Some(_) => Outcome::Lose,
                };
                Outbound {
                    to,
                    message: ServerMessage::result(outcome, moves[idx], moves[1 - idx], self.scores),
                }
            })
            .collect()
    }

    /// Back to the empty state; the next admission becomes Player 1 again.
    fn reset(&mut self) {
        self.slots.clear();
        self.choices.clear();
        self.scores = [0, 0];
    }
}
