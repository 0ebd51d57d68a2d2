//! WebSocket connection actor for one participant.
//!
//! Bridges a single duplex channel to the coordinator: registers on start,
//! deregisters on stop, relays parsed client requests inbound and serialized
//! server messages outbound.

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::debug;
use uuid::Uuid;

use crate::game::types::PlayerId;
use crate::server::coordinator::messages::{ClientMessage, ServerMessage};
use crate::server::coordinator::server::{
    ClientCommand, Connect, Disconnect, SessionCoordinator, SessionEnded,
};

/// Represents a participant's WebSocket connection to the duel.
pub struct PlayerSession {
    pub player_id: PlayerId,
    pub coordinator: Addr<SessionCoordinator>,
}

impl Actor for PlayerSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the channel is up. Asks the coordinator for admission.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.coordinator.do_send(Connect {
            player_id: self.player_id,
            addr: ctx.address(),
        });
    }

    /// Called when the channel is gone. The coordinator treats any tracked
    /// departure as the end of the match.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.coordinator.do_send(Disconnect {
            player_id: self.player_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSession {
    /// Handles incoming WebSocket frames from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                // Unknown message types and malformed payloads are dropped
                // here; only recognized requests reach the coordinator.
                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(msg) => self.coordinator.do_send(ClientCommand {
                        player_id: self.player_id,
                        msg,
                    }),
                    Err(_) => {
                        debug!(
                            "[PlayerSession] Ignoring unrecognized message from {}",
                            self.player_id
                        );
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<ServerMessage> for PlayerSession {
    type Result = ();

    /// Serializes and forwards a server message onto the channel.
    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                debug!(
                    "[PlayerSession] Failed to serialize message for {}: {}",
                    self.player_id, e
                );
            }
        }
    }
}

impl Handler<SessionEnded> for PlayerSession {
    type Result = ();

    /// The coordinator no longer tracks this channel; close it cleanly.
    fn handle(&mut self, msg: SessionEnded, ctx: &mut Self::Context) {
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Normal,
            description: Some(msg.reason),
        }));
        ctx.stop();
    }
}

/// WebSocket endpoint for joining the duel.
///
/// Each connection gets a fresh opaque player id; slot assignment happens in
/// the coordinator when the session admits the player.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(
        PlayerSession {
            player_id: Uuid::new_v4(),
            coordinator: data.coordinator.clone(),
        },
        &req,
        stream,
    )
}
