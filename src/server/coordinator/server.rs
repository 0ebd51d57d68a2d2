//! Session coordinator actor.
//!
//! Owns the single `Session` plus the registry of live connections. Every
//! operation funnels through this actor's mailbox, which serializes access to
//! the session state; the resulting message fan-out happens at the tail of
//! each handler.

use actix::prelude::*;
use std::collections::HashMap;

use log::{debug, warn};

use crate::game::session::{Outbound, Session};
use crate::game::types::PlayerId;
use crate::server::coordinator::messages::{ClientMessage, ServerMessage};
use crate::server::coordinator::session::PlayerSession;

/// Message: a new connection asks to join the session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub player_id: PlayerId,
    pub addr: Addr<PlayerSession>,
}

/// Message: a connection went away.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub player_id: PlayerId,
}

/// Message: a parsed client request, relayed by the connection actor.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ClientCommand {
    pub player_id: PlayerId,
    pub msg: ClientMessage,
}

/// Message: tells a connection actor its channel is no longer part of a
/// session and should be closed.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct SessionEnded {
    pub reason: String,
}

/// Main coordinator actor for the single duel session.
pub struct SessionCoordinator {
    session: Session,
    connections: HashMap<PlayerId, Addr<PlayerSession>>,
}

impl SessionCoordinator {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            connections: HashMap::new(),
        }
    }

    /// Deliver a batch of outbound messages, one recipient at a time.
    ///
    /// A dead mailbox for one recipient must not block delivery to the
    /// other; failures are counted and logged, never propagated.
    fn deliver(&self, out: Vec<Outbound>) {
        let mut failed = 0usize;
        for Outbound { to, message } in out {
            match self.connections.get(&to) {
                Some(addr) => {
                    if let Err(e) = addr.try_send(message) {
                        failed += 1;
                        warn!("[Coordinator] Delivery to {} failed: {}", to, e);
                    }
                }
                None => {
                    failed += 1;
                    debug!("[Coordinator] Dropping message for unregistered player {}", to);
                }
            }
        }
        if failed > 0 {
            warn!("[Coordinator] {} message(s) undeliverable in this fan-out", failed);
        }
    }

    /// Close and forget every connection still registered after a reset.
    fn close_all(&mut self, reason: &str) {
        for (player_id, addr) in self.connections.drain() {
            debug!("[Coordinator] Closing channel for {}", player_id);
            addr.do_send(SessionEnded { reason: reason.to_string() });
        }
    }
}

impl Actor for SessionCoordinator {
    type Context = Context<Self>;
}

impl Handler<Connect> for SessionCoordinator {
    type Result = ();

    /// Handles an admission attempt from a fresh connection.
    fn handle(&mut self, msg: Connect, _ctx: &mut Context<Self>) -> Self::Result {
        match self.session.admit(msg.player_id) {
            Ok(out) => {
                self.connections.insert(msg.player_id, msg.addr);
                self.deliver(out);
            }
            Err(e) => {
                // Rejected connections are told why and then closed; they
                // are never registered.
                debug!("[Coordinator] Admission rejected for {}: {}", msg.player_id, e);
                msg.addr.do_send(ServerMessage::error(&e.to_string()));
                msg.addr.do_send(SessionEnded { reason: e.to_string() });
            }
        }
    }
}

impl Handler<Disconnect> for SessionCoordinator {
    type Result = ();

    /// Handles a departed connection. Any tracked departure resets the whole
    /// session; the survivor gets the notice first, then their channel is
    /// closed so a returning client is always a brand-new admission.
    fn handle(&mut self, msg: Disconnect, _ctx: &mut Context<Self>) -> Self::Result {
        if self.connections.remove(&msg.player_id).is_none() {
            // Never admitted, or already cleaned up by an earlier reset.
            return;
        }
        let out = self.session.remove(msg.player_id);
        self.deliver(out);
        self.close_all("Opponent left; session reset");
    }
}

impl Handler<ClientCommand> for SessionCoordinator {
    type Result = ();

    fn handle(&mut self, msg: ClientCommand, _ctx: &mut Context<Self>) -> Self::Result {
        match msg.msg {
            ClientMessage::Choice { choice } => {
                match self.session.submit_choice(msg.player_id, &choice) {
                    Ok(out) => self.deliver(out),
                    Err(e) => {
                        debug!(
                            "[Coordinator] Rejected move {:?} from {}: {}",
                            choice, msg.player_id, e
                        );
                        self.deliver(vec![Outbound {
                            to: msg.player_id,
                            message: ServerMessage::error(&e.to_string()),
                        }]);
                    }
                }
            }
            ClientMessage::PlayAgain => {
                // Ignored by the session unless both slots are occupied.
                let out = self.session.start_round();
                self.deliver(out);
            }
        }
    }
}
