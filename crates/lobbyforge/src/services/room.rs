//! Room orchestration and matchmaking on top of [`RoomManager`].

use lobbyforge_model::{PlayerId, Room, RoomId};
use lobbyforge_room::RoomManager;
use serde::Deserialize;

use crate::ServiceError;

/// Request to open a room directly.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub game: String,
    #[serde(default)]
    pub players: Vec<PlayerId>,
    pub max_players: usize,
}

#[derive(Debug, Clone)]
pub struct RoomService {
    rooms: RoomManager,
}

impl RoomService {
    pub fn new(rooms: RoomManager) -> Self {
        Self { rooms }
    }

    pub fn create(&self, request: CreateRoom) -> Result<Room, ServiceError> {
        if request.game.is_empty() {
            return Err(ServiceError::Validation("game required".into()));
        }
        Ok(self
            .rooms
            .create(request.game, request.players, request.max_players)?)
    }

    /// Every room that isn't closed, ordered by id.
    pub fn list(&self) -> Vec<Room> {
        let mut rooms = self.rooms.list();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }

    pub fn join(
        &self,
        room_id: &RoomId,
        player_id: PlayerId,
    ) -> Result<Room, ServiceError> {
        if player_id.is_empty() {
            return Err(ServiceError::Validation("player_id required".into()));
        }
        Ok(self.rooms.join(room_id, player_id)?)
    }

    pub fn close(&self, room_id: &RoomId) -> Result<Room, ServiceError> {
        Ok(self.rooms.close(room_id)?)
    }
}

#[derive(Debug, Clone)]
pub struct MatchService {
    rooms: RoomManager,
}

impl MatchService {
    pub fn new(rooms: RoomManager) -> Self {
        Self { rooms }
    }

    /// Opens a singleton `matching` room for the player.
    ///
    /// # Errors
    /// [`ServiceError::Validation`] if `player_id` or `mode` is empty.
    pub fn enqueue(
        &self,
        player_id: &str,
        mode: &str,
    ) -> Result<(RoomId, Room), ServiceError> {
        if player_id.is_empty() || mode.is_empty() {
            return Err(ServiceError::Validation(
                "player_id and mode required".into(),
            ));
        }
        Ok(self.rooms.enqueue(PlayerId::new(player_id), mode))
    }
}
