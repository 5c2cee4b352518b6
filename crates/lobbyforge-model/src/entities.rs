//! Durable records owned by the store.
//!
//! Field names follow the JSON the HTTP layer returns (`item_id`,
//! `last_login`, ...), so most types derive serde without renames.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ItemId, PlayerId, RoomId};

// ---------------------------------------------------------------------------
// Account / Player
// ---------------------------------------------------------------------------

/// Login identity. The username is the natural key and doubles as the id.
///
/// The password never leaves the process: serde skips it in both
/// directions and `Debug` prints it redacted, so neither a JSON response
/// nor a log line can leak it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: PlayerId,
    pub username: String,
    #[serde(skip)]
    pub password: String,
    pub token: String,
}

impl Account {
    /// Returns `true` if `candidate` matches the stored password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("token", &self.token)
            .finish()
    }
}

/// Game-facing profile, created alongside the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub last_login: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Items, bags, shop
// ---------------------------------------------------------------------------

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub rarity: String,
    pub price: u32,
}

/// One stack of items in a player's bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagEntry {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// A purchasable offer derived from the item catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopListing {
    pub item_id: ItemId,
    pub price: u32,
    pub stock: u32,
}

impl ShopListing {
    /// Stock advertised for every catalog item.
    pub const DEFAULT_STOCK: u32 = 99;

    /// Builds the listing for a catalog item.
    pub fn for_item(item: &Item) -> Self {
        Self {
            item_id: item.id.clone(),
            price: item.price,
            stock: Self::DEFAULT_STOCK,
        }
    }
}

// ---------------------------------------------------------------------------
// Mail / notices
// ---------------------------------------------------------------------------

/// Items attached to a mail, in the order the sender listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailAttachment {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<MailAttachment>,
}

/// A broadcast announcement. Read-only once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub body: String,
    pub severity: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// One entry of the chat log.
///
/// `to` is set for whispers, `room_id` for room chat; world chat leaves
/// both empty. Absent fields are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<RoomId>,
    pub body: String,
    pub channel: String,
    pub sent_at: DateTime<Utc>,
}
