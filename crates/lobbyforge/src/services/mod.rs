//! Domain services.
//!
//! Each service is a small synchronous struct holding shared handles to
//! the store (and, for accounts, the session cache). Every operation is
//! one or two short critical sections, so handlers call them directly
//! from async code without `spawn_blocking`.

mod account;
mod bag;
mod chat;
mod item;
mod mail;
mod notice;
mod player;
mod room;
mod shop;

use std::sync::Arc;

use lobbyforge_room::{RoomConfig, RoomManager};
use lobbyforge_session::{CacheConfig, SessionCache};
use lobbyforge_store::Store;

pub use account::AccountService;
pub use bag::BagService;
pub use chat::{ChatService, DEFAULT_CHANNEL, HistoryFilter, NewMessage};
pub use item::ItemService;
pub use mail::MailService;
pub use notice::NoticeService;
pub use player::PlayerService;
pub use room::{CreateRoom, MatchService, RoomService};
pub use shop::ShopService;

/// Every service, wired to one store and one session cache.
///
/// Cloning is cheap: all state sits behind `Arc`s.
#[derive(Debug, Clone)]
pub struct Services {
    pub account: AccountService,
    pub player: PlayerService,
    pub bag: BagService,
    pub item: ItemService,
    pub shop: ShopService,
    pub mail: MailService,
    pub notice: NoticeService,
    pub chat: ChatService,
    pub room: RoomService,
    pub matchmaking: MatchService,
    store: Arc<Store>,
    sessions: Arc<SessionCache<String>>,
}

impl Services {
    pub fn new(
        store: Arc<Store>,
        sessions: Arc<SessionCache<String>>,
        cache_config: &CacheConfig,
        room_config: RoomConfig,
    ) -> Self {
        let rooms = RoomManager::with_config(Arc::clone(&store), room_config);
        Self {
            account: AccountService::new(
                Arc::clone(&store),
                Arc::clone(&sessions),
                cache_config.session_ttl,
            ),
            player: PlayerService::new(Arc::clone(&store)),
            bag: BagService::new(Arc::clone(&store)),
            item: ItemService::new(Arc::clone(&store)),
            shop: ShopService::new(Arc::clone(&store)),
            mail: MailService::new(Arc::clone(&store)),
            notice: NoticeService::new(Arc::clone(&store)),
            chat: ChatService::new(Arc::clone(&store)),
            room: RoomService::new(rooms.clone()),
            matchmaking: MatchService::new(rooms),
            store,
            sessions,
        }
    }

    /// Services over a fresh store and cache with default settings.
    pub fn in_memory(store: Store) -> Self {
        Self::new(
            Arc::new(store),
            Arc::new(SessionCache::new()),
            &CacheConfig::default(),
            RoomConfig::default(),
        )
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn sessions(&self) -> &Arc<SessionCache<String>> {
        &self.sessions
    }
}
