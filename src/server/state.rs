// src/server/state.rs

//! Application state for the duel server.
//!
//! Holds the address of the session coordinator actor. Used to share state
//! between WebSocket handlers and the actor system.

use actix::Addr;
use crate::server::coordinator::server::SessionCoordinator;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the session coordinator actor (owns the single session).
    pub coordinator: Addr<SessionCoordinator>,
}

impl AppState {
    /// Create a new AppState with the given coordinator address.
    pub fn new(coordinator: Addr<SessionCoordinator>) -> Self {
        AppState { coordinator }
    }
}
