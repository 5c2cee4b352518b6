//! Chat: append to the shared log and read it back filtered.

use std::sync::Arc;

use chrono::Utc;
use lobbyforge_model::{ChatMessage, PlayerId, RoomId};
use lobbyforge_store::Store;
use serde::Deserialize;

use crate::ServiceError;

/// Channel used when a message doesn't name one.
pub const DEFAULT_CHANNEL: &str = "world";

/// A message as submitted by a client, before it is stamped.
///
/// Empty `to` and `room_id` are treated the same as absent ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewMessage {
    pub from: String,
    pub to: Option<String>,
    pub room_id: Option<String>,
    pub body: String,
    pub channel: Option<String>,
}

/// Narrows [`ChatService::history`]. Unset fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryFilter {
    pub channel: Option<String>,
    pub room_id: Option<String>,
}

impl HistoryFilter {
    fn matches(&self, message: &ChatMessage) -> bool {
        let channel_ok = self
            .channel
            .as_deref()
            .is_none_or(|channel| message.channel == channel);
        let room_ok = self.room_id.as_deref().is_none_or(|room_id| {
            message.room_id.as_ref().is_some_and(|id| id.as_str() == room_id)
        });
        channel_ok && room_ok
    }
}

#[derive(Debug, Clone)]
pub struct ChatService {
    store: Arc<Store>,
}

impl ChatService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Stamps `message` with the current time and appends it to the log.
    ///
    /// # Errors
    /// [`ServiceError::Validation`] if `from` or `body` is empty.
    pub fn send(&self, message: NewMessage) -> Result<ChatMessage, ServiceError> {
        if message.from.is_empty() || message.body.is_empty() {
            return Err(ServiceError::Validation("from and body required".into()));
        }

        let message = ChatMessage {
            from: PlayerId::new(message.from),
            to: non_empty(message.to).map(PlayerId::new),
            room_id: non_empty(message.room_id).map(RoomId::new),
            body: message.body,
            channel: non_empty(message.channel)
                .unwrap_or_else(|| DEFAULT_CHANNEL.to_owned()),
            sent_at: Utc::now(),
        };
        self.store
            .with_write(|world| world.chats.push(message.clone()));

        tracing::debug!(
            from = %message.from,
            channel = %message.channel,
            "chat message recorded"
        );
        Ok(message)
    }

    /// Returns matching messages oldest first.
    pub fn history(&self, filter: &HistoryFilter) -> Vec<ChatMessage> {
        self.store.with_read(|world| {
            world
                .chats
                .iter()
                .filter(|message| filter.matches(message))
                .cloned()
                .collect()
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
