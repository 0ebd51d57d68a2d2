/// Game configuration constants.
///
/// Parameters of the single duel session.
pub const MAX_PLAYERS: usize = 2; // A session holds exactly two players.
