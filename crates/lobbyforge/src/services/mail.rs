//! Player mailboxes.

use std::sync::Arc;

use lobbyforge_model::{Mail, PlayerId};
use lobbyforge_store::Store;

use crate::ServiceError;

#[derive(Debug, Clone)]
pub struct MailService {
    store: Arc<Store>,
}

impl MailService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Returns a player's mail, oldest first. Missing mailbox is not-found.
    pub fn inbox(&self, player_id: &PlayerId) -> Result<Vec<Mail>, ServiceError> {
        self.store
            .with_read(|world| world.mails.get(player_id).cloned())
            .ok_or_else(|| ServiceError::not_found("mailbox", player_id.as_str()))
    }
}
