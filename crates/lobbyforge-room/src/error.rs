//! Error types for the room layer.

use lobbyforge_model::{PlayerId, RoomId, RoomStatus};

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The room does not exist.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// The room has no free slot.
    #[error("room {0} is full")]
    RoomFull(RoomId),

    /// The player is already on this room's roster.
    #[error("player {0} already in room {1}")]
    AlreadyInRoom(PlayerId, RoomId),

    /// The room's status doesn't allow this operation, e.g. joining a
    /// room that is already ready or closed.
    #[error("room {room_id} is {status}")]
    InvalidState { room_id: RoomId, status: RoomStatus },

    /// A room must hold at least one player.
    #[error("max_players must be at least 1")]
    InvalidCapacity,

    /// The initial roster is larger than the room.
    #[error("{players} players exceed room capacity of {max_players}")]
    TooManyPlayers { players: usize, max_players: usize },

    /// The initial roster lists the same player more than once.
    #[error("player {0} listed more than once")]
    DuplicatePlayer(PlayerId),
}

impl RoomError {
    /// Returns `true` for errors caused by bad caller input rather than
    /// the current state of a room.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity
                | Self::TooManyPlayers { .. }
                | Self::DuplicatePlayer(_)
        )
    }
}
