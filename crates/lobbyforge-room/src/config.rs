//! Room configuration.

/// Configuration for the room layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomConfig {
    /// Capacity of rooms opened by matchmaking enqueue.
    pub match_max_players: usize,
}

impl RoomConfig {
    /// Fixes out-of-range values so the config is safe to use.
    ///
    /// Called by [`RoomManager::with_config`](crate::RoomManager::with_config).
    /// A matchmaking room always has room for the player who opened it, so
    /// `match_max_players` is raised to at least 1.
    pub fn validated(mut self) -> Self {
        if self.match_max_players == 0 {
            tracing::warn!("match_max_players is 0, using 1");
            self.match_max_players = 1;
        }
        self
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            match_max_players: 4,
        }
    }
}
