/// Server configuration constants.
///
/// Listening address for the HTTP/WebSocket endpoint.
pub const BIND_ADDR: &str = "127.0.0.1";

/// Listening port for the HTTP/WebSocket endpoint.
pub const BIND_PORT: u16 = 8080;
