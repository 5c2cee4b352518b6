//! The composite domain graph guarded by the store's lock.

use std::collections::HashMap;

use lobbyforge_model::{
    Account, BagEntry, ChatMessage, Item, Mail, Notice, Player, PlayerId, Room,
    RoomId,
};

/// Every durable collection, mutated only through a store transaction.
///
/// Per-player collections (`bags`, `mails`) distinguish a missing key from
/// an empty list: a missing key means "no such bag" and callers report
/// not-found, while an empty list is a bag that exists with nothing in it.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Keyed by username (which is also the account id).
    pub accounts: HashMap<PlayerId, Account>,
    pub players: HashMap<PlayerId, Player>,
    /// Item catalog, in catalog order.
    pub items: Vec<Item>,
    pub notices: Vec<Notice>,
    pub mails: HashMap<PlayerId, Vec<Mail>>,
    pub bags: HashMap<PlayerId, Vec<BagEntry>>,
    pub chats: ChatLog,
    /// Iteration order is unspecified; sort at the boundary if needed.
    pub rooms: HashMap<RoomId, Room>,
}

// ---------------------------------------------------------------------------
// ChatLog
// ---------------------------------------------------------------------------

/// Append-only chat history.
///
/// The only mutation is [`push`](Self::push). Entries keep insertion order
/// and there is no way to edit, remove, or reorder them once written.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Vec<ChatMessage>,
}

impl ChatLog {
    /// Appends a message to the end of the log.
    pub fn push(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the log oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter()
    }

    /// Copies the whole log, oldest first.
    pub fn to_vec(&self) -> Vec<ChatMessage> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn message(body: &str) -> ChatMessage {
        ChatMessage {
            from: PlayerId::new("demo"),
            to: None,
            room_id: None,
            body: body.into(),
            channel: "world".into(),
            sent_at: Utc::now(),
        }
    }

    #[test]
    fn test_chat_log_preserves_insertion_order() {
        let mut log = ChatLog::default();
        log.push(message("first"));
        log.push(message("second"));
        log.push(message("third"));

        let bodies: Vec<&str> = log.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, ["first", "second", "third"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_chat_log_to_vec_is_a_snapshot() {
        let mut log = ChatLog::default();
        log.push(message("one"));
        let snapshot = log.to_vec();
        log.push(message("two"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
