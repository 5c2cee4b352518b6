//! Item catalog.

use std::sync::Arc;

use lobbyforge_model::Item;
use lobbyforge_store::Store;

#[derive(Debug, Clone)]
pub struct ItemService {
    store: Arc<Store>,
}

impl ItemService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Returns the whole catalog in catalog order.
    pub fn catalog(&self) -> Vec<Item> {
        self.store.with_read(|world| world.items.clone())
    }
}
