//! HTTP and WebSocket routing configuration.
//!
//! A single endpoint: the duel WebSocket. Static assets and any other
//! HTTP-shaped concerns live outside this crate.

use actix_web::web;
use crate::server::coordinator::session::ws_connect;

/// Configure the application's WebSocket route.
///
/// The route is handled by a dedicated actor per connection, which manages
/// the connection lifecycle and relays game traffic to the coordinator.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws")
            .to(ws_connect)
    );
}
