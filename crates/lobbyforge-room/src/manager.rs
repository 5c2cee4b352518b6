//! Room manager: creates rooms, admits players, and drives status changes.

use std::collections::HashSet;
use std::sync::Arc;

use lobbyforge_model::{PlayerId, Room, RoomId, RoomStatus};
use lobbyforge_store::Store;

use crate::{RoomConfig, RoomError};

/// Prefix for rooms opened directly.
const ROOM_ID_PREFIX: &str = "room";

/// Prefix for rooms opened by matchmaking; the match id is the room id.
const MATCH_ID_PREFIX: &str = "match";

/// Entry point for room operations from the service layer.
///
/// The manager holds no room state of its own: every room lives in the
/// store, and every operation is one store transaction. Ids come from
/// [`Store::next_sequence`] and are allocated *before* the write
/// transaction starts, so concurrent creates never race on a key.
#[derive(Debug, Clone)]
pub struct RoomManager {
    store: Arc<Store>,
    config: RoomConfig,
}

impl RoomManager {
    /// Creates a manager with the default [`RoomConfig`].
    pub fn new(store: Arc<Store>) -> Self {
        Self::with_config(store, RoomConfig::default())
    }

    /// Creates a manager with `config`, after [`RoomConfig::validated`].
    pub fn with_config(store: Arc<Store>, config: RoomConfig) -> Self {
        Self {
            store,
            config: config.validated(),
        }
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Opens a room in the `waiting` state with the given roster.
    ///
    /// # Errors
    /// - [`RoomError::InvalidCapacity`] if `max_players` is 0.
    /// - [`RoomError::TooManyPlayers`] if the roster doesn't fit.
    /// - [`RoomError::DuplicatePlayer`] if a player is listed twice.
    pub fn create(
        &self,
        game: impl Into<String>,
        players: Vec<PlayerId>,
        max_players: usize,
    ) -> Result<Room, RoomError> {
        if max_players == 0 {
            return Err(RoomError::InvalidCapacity);
        }
        if players.len() > max_players {
            return Err(RoomError::TooManyPlayers {
                players: players.len(),
                max_players,
            });
        }
        let mut seen = HashSet::with_capacity(players.len());
        if let Some(duplicate) = players.iter().find(|p| !seen.insert(*p)) {
            return Err(RoomError::DuplicatePlayer(duplicate.clone()));
        }

        let room = Room {
            id: self.allocate_id(ROOM_ID_PREFIX),
            game: game.into(),
            players,
            max_players,
            status: RoomStatus::Waiting,
        };
        self.store.with_write(|world| {
            world.rooms.insert(room.id.clone(), room.clone());
        });

        tracing::info!(room_id = %room.id, game = %room.game, "room created");
        Ok(room)
    }

    /// Puts a player into matchmaking for `mode`.
    ///
    /// Opens a fresh `matching` room holding just this player, with the
    /// configured match capacity, and returns the match id (which is also
    /// the room id) along with the room. Every call opens its own room:
    /// no pairing with other waiting players happens here.
    pub fn enqueue(
        &self,
        player_id: PlayerId,
        mode: impl Into<String>,
    ) -> (RoomId, Room) {
        let match_id = self.allocate_id(MATCH_ID_PREFIX);
        let room = Room {
            id: match_id.clone(),
            game: mode.into(),
            players: vec![player_id],
            max_players: self.config.match_max_players,
            status: RoomStatus::Matching,
        };
        self.store.with_write(|world| {
            world.rooms.insert(room.id.clone(), room.clone());
        });

        tracing::info!(%match_id, mode = %room.game, "player enqueued");
        (match_id, room)
    }

    /// Returns a snapshot of every room that isn't closed.
    ///
    /// Order is unspecified. Callers that need a stable order sort the
    /// result themselves.
    pub fn list(&self) -> Vec<Room> {
        self.store.with_read(|world| {
            world
                .rooms
                .values()
                .filter(|room| !room.status.is_closed())
                .cloned()
                .collect()
        })
    }

    /// Returns a copy of one room, closed rooms included.
    pub fn get(&self, room_id: &RoomId) -> Option<Room> {
        self.store
            .with_read(|world| world.rooms.get(room_id).cloned())
    }

    /// Adds a player to a joinable room.
    ///
    /// When the join fills the last slot, the room moves to `ready`.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`]: unknown room.
    /// - [`RoomError::InvalidState`]: room is `ready` or `closed`.
    /// - [`RoomError::AlreadyInRoom`]: player is on the roster.
    /// - [`RoomError::RoomFull`]: no free slot.
    pub fn join(
        &self,
        room_id: &RoomId,
        player_id: PlayerId,
    ) -> Result<Room, RoomError> {
        let room = self.store.with_write(|world| {
            let room = world
                .rooms
                .get_mut(room_id)
                .ok_or_else(|| RoomError::NotFound(room_id.clone()))?;

            if !room.status.is_joinable() {
                return Err(RoomError::InvalidState {
                    room_id: room_id.clone(),
                    status: room.status,
                });
            }
            if room.contains(&player_id) {
                return Err(RoomError::AlreadyInRoom(
                    player_id,
                    room_id.clone(),
                ));
            }
            if room.is_full() {
                return Err(RoomError::RoomFull(room_id.clone()));
            }

            room.players.push(player_id);
            if room.is_full() {
                room.status = RoomStatus::Ready;
            }
            Ok(room.clone())
        })?;

        tracing::info!(
            %room_id,
            players = room.players.len(),
            status = %room.status,
            "player joined room"
        );
        Ok(room)
    }

    /// Moves a room to the terminal `closed` state.
    ///
    /// The room stays in the store (so [`get`](Self::get) still finds it)
    /// but disappears from [`list`](Self::list).
    ///
    /// # Errors
    /// - [`RoomError::NotFound`]: unknown room.
    /// - [`RoomError::InvalidState`]: room is already closed.
    pub fn close(&self, room_id: &RoomId) -> Result<Room, RoomError> {
        let room = self.store.with_write(|world| {
            let room = world
                .rooms
                .get_mut(room_id)
                .ok_or_else(|| RoomError::NotFound(room_id.clone()))?;

            if !room.status.can_transition_to(RoomStatus::Closed) {
                return Err(RoomError::InvalidState {
                    room_id: room_id.clone(),
                    status: room.status,
                });
            }
            room.status = RoomStatus::Closed;
            Ok(room.clone())
        })?;

        tracing::info!(%room_id, "room closed");
        Ok(room)
    }

    fn allocate_id(&self, prefix: &str) -> RoomId {
        RoomId::new(format!("{prefix}-{}", self.store.next_sequence()))
    }
}
