//! Player inventory.

use std::sync::Arc;

use lobbyforge_model::{BagEntry, PlayerId};
use lobbyforge_store::Store;

use crate::ServiceError;

#[derive(Debug, Clone)]
pub struct BagService {
    store: Arc<Store>,
}

impl BagService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Returns the contents of a player's bag.
    ///
    /// A player without a bag is not-found; a bag that exists but holds
    /// nothing comes back as an empty list.
    pub fn bag(&self, player_id: &PlayerId) -> Result<Vec<BagEntry>, ServiceError> {
        self.store
            .with_read(|world| world.bags.get(player_id).cloned())
            .ok_or_else(|| ServiceError::not_found("bag", player_id.as_str()))
    }
}
