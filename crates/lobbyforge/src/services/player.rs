//! Player profile lookup.

use std::sync::Arc;

use lobbyforge_model::{Player, PlayerId};
use lobbyforge_store::Store;

use crate::ServiceError;

#[derive(Debug, Clone)]
pub struct PlayerService {
    store: Arc<Store>,
}

impl PlayerService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Returns a snapshot of the player's profile.
    pub fn profile(&self, player_id: &PlayerId) -> Result<Player, ServiceError> {
        self.store
            .with_read(|world| world.players.get(player_id).cloned())
            .ok_or_else(|| ServiceError::not_found("player", player_id.as_str()))
    }
}
