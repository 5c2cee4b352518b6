//! Domain vocabulary for Lobbyforge.
//!
//! This crate defines the records the rest of the stack passes around:
//!
//! - **Identity types** ([`PlayerId`], [`RoomId`], [`ItemId`]): string
//!   newtypes so a room id can't be handed to a function expecting a player.
//! - **Entities** ([`Account`], [`Player`], [`Item`], [`Mail`], ...): the
//!   durable records owned by the store.
//! - **Room lifecycle** ([`Room`], [`RoomStatus`]): the status values and
//!   the transition table the room layer enforces.
//!
//! # Architecture
//!
//! The model sits at the bottom of the stack. It knows nothing about
//! locking, caching, or HTTP. It only knows what the data looks like and
//! how it serializes.
//!
//! ```text
//! Services (HTTP glue) → Room / Session → Store → Model (this crate)
//! ```

mod entities;
mod room;
mod types;

pub use entities::{
    Account, BagEntry, ChatMessage, Item, Mail, MailAttachment, Notice, Player,
    ShopListing,
};
pub use room::{Room, RoomStatus};
pub use types::{ItemId, PlayerId, RoomId};
