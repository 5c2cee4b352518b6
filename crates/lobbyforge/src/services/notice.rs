//! Broadcast notices.

use std::sync::Arc;

use lobbyforge_model::Notice;
use lobbyforge_store::Store;

#[derive(Debug, Clone)]
pub struct NoticeService {
    store: Arc<Store>,
}

impl NoticeService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.store.with_read(|world| world.notices.clone())
    }
}
