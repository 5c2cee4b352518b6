//! Shop listings derived from the item catalog.

use std::sync::Arc;

use lobbyforge_model::ShopListing;
use lobbyforge_store::Store;

#[derive(Debug, Clone)]
pub struct ShopService {
    store: Arc<Store>,
}

impl ShopService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// One listing per catalog item, at catalog price with default stock.
    pub fn listings(&self) -> Vec<ShopListing> {
        self.store
            .with_read(|world| world.items.iter().map(ShopListing::for_item).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listings_mirror_catalog() {
        let listings = ShopService::new(Arc::new(Store::seeded())).listings();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].item_id.as_str(), "sword");
        assert_eq!(listings[1].price, 120);
        assert!(listings.iter().all(|l| l.stock == ShopListing::DEFAULT_STOCK));
    }
}
