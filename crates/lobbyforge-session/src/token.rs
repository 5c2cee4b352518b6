//! Token and key helpers.

use lobbyforge_model::PlayerId;

/// Generates a random 32-character hex string (128 bits of entropy).
///
/// Used for account tokens. Random tokens cannot collide the way
/// clock-derived ones do when two registrations land in the same tick,
/// and guessing one is computationally infeasible.
pub fn generate_token() -> String {
    let bytes: [u8; 16] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Cache key under which a player's login session is stored.
pub fn session_key(player_id: &PlayerId) -> String {
    format!("session:{player_id}")
}
