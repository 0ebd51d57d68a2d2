//! Main entry point for the duel server.
//!
//! Initializes the actor system, configures application state, and launches
//! the HTTP server with the duel WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use server::coordinator::SessionCoordinator;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from the RUST_LOG environment variable.
    env_logger::init();

    // Start the session coordinator actor (owns the single game session).
    let coordinator = SessionCoordinator::new().start();

    // Shared application state for WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(coordinator));

    // Start the HTTP server with the WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((config::server::BIND_ADDR, config::server::BIND_PORT))?
    .run()
    .await
}
