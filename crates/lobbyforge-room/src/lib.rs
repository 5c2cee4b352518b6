//! Room and matchmaking lifecycle for Lobbyforge.
//!
//! Rooms live in the store's room collection. This crate layers the state
//! machine on top: how rooms are created, how players get in, and which
//! status transitions are legal.
//!
//! # Key types
//!
//! - [`RoomManager`]: create / enqueue / list / join / close
//! - [`RoomConfig`]: matchmaking room size
//! - [`RoomError`]: what can go wrong
//!
//! Status values and the transition table live in
//! [`lobbyforge_model::RoomStatus`].

mod config;
mod error;
mod manager;

pub use config::RoomConfig;
pub use error::RoomError;
pub use manager::RoomManager;
