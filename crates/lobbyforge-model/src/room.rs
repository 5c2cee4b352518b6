//! Room record and its lifecycle states.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PlayerId, RoomId};

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a room.
///
/// ```text
///  Waiting ──(roster full)──┐
///                           ├──→ Ready ──→ Closed
///  Matching ─(roster full)──┘
///     │  Waiting/Matching ──(close)──→ Closed
/// ```
///
/// - **Waiting**: created directly, filled by explicit joins.
/// - **Matching**: created by a matchmaking enqueue, awaiting fill.
/// - **Ready**: the roster reached `max_players`.
/// - **Closed**: terminal. The room stays representable but is dropped
///   from the active listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Waiting,
    Matching,
    Ready,
    Closed,
}

impl RoomStatus {
    /// Returns `true` if the room is accepting new players.
    pub fn is_joinable(self) -> bool {
        matches!(self, Self::Waiting | Self::Matching)
    }

    /// Returns `true` for the terminal state.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns `true` if moving to `target` is a legal transition.
    pub fn can_transition_to(self, target: Self) -> bool {
        match (self, target) {
            (Self::Waiting | Self::Matching, Self::Ready) => true,
            (Self::Waiting | Self::Matching | Self::Ready, Self::Closed) => {
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Matching => write!(f, "matching"),
            Self::Ready => write!(f, "ready"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A grouping of players for one game session.
///
/// Invariant (enforced by the room layer): `players.len() <= max_players`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Game mode, e.g. `"duel"`.
    pub game: String,
    /// Roster in join order.
    pub players: Vec<PlayerId>,
    pub max_players: usize,
    pub status: RoomStatus,
}

impl Room {
    /// Returns `true` once the roster has no free slot.
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    /// Returns `true` if `player_id` is on the roster.
    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.players.contains(player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_status_serializes_lowercase() {
        let json = serde_json::to_string(&RoomStatus::Matching).unwrap();
        assert_eq!(json, "\"matching\"");
        let back: RoomStatus = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(back, RoomStatus::Closed);
    }

    #[test]
    fn test_room_status_can_transition_to() {
        assert!(RoomStatus::Waiting.can_transition_to(RoomStatus::Ready));
        assert!(RoomStatus::Matching.can_transition_to(RoomStatus::Ready));
        assert!(RoomStatus::Ready.can_transition_to(RoomStatus::Closed));
        assert!(RoomStatus::Waiting.can_transition_to(RoomStatus::Closed));
        assert!(!RoomStatus::Ready.can_transition_to(RoomStatus::Waiting));
        assert!(!RoomStatus::Closed.can_transition_to(RoomStatus::Closed));
        assert!(!RoomStatus::Closed.can_transition_to(RoomStatus::Waiting));
    }

    #[test]
    fn test_room_status_is_joinable() {
        assert!(RoomStatus::Waiting.is_joinable());
        assert!(RoomStatus::Matching.is_joinable());
        assert!(!RoomStatus::Ready.is_joinable());
        assert!(!RoomStatus::Closed.is_joinable());
    }

    #[test]
    fn test_room_is_full() {
        let mut room = Room {
            id: RoomId::new("room-1"),
            game: "duel".into(),
            players: vec![PlayerId::new("p1")],
            max_players: 2,
            status: RoomStatus::Waiting,
        };
        assert!(!room.is_full());
        room.players.push(PlayerId::new("p2"));
        assert!(room.is_full());
        assert!(room.contains(&PlayerId::new("p2")));
    }
}
