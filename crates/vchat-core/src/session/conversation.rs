//! Two-level conversation lookup.

use super::message::{Message, RawMessage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Messages keyed by conversation id, then by message id.
///
/// The index carries no ordering. It is rebuilt wholesale from a flat list on
/// every hydration; entries from a previous build never survive a rebuild.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationIndex {
    conversations: HashMap<String, HashMap<String, Message>>,
}

impl ConversationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from raw backend messages.
    pub fn from_raw<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = RawMessage>,
    {
        let mut index = Self::new();
        index.rebuild(messages.into_iter().map(Message::from_raw));
        index
    }

    /// Clears the index, then inserts every message.
    ///
    /// A later message with the same `(conv_id, msg_id)` replaces an earlier one.
    pub fn rebuild<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = Message>,
    {
        self.clear();
        for message in messages {
            self.insert(message);
        }
    }

    /// Inserts a message at `[conv_id][msg_id]`, returning the one it replaced.
    pub fn insert(&mut self, message: Message) -> Option<Message> {
        self.conversations
            .entry(message.conv_id.clone())
            .or_default()
            .insert(message.msg_id.clone(), message)
    }

    pub fn clear(&mut self) {
        self.conversations.clear();
    }

    pub fn get(&self, conv_id: &str, msg_id: &str) -> Option<&Message> {
        self.conversations.get(conv_id)?.get(msg_id)
    }

    /// All messages of one conversation, keyed by message id.
    pub fn conversation(&self, conv_id: &str) -> Option<&HashMap<String, Message>> {
        self.conversations.get(conv_id)
    }

    pub fn conversation_ids(&self) -> impl Iterator<Item = &str> {
        self.conversations.keys().map(String::as_str)
    }

    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    /// Total number of messages across all conversations.
    pub fn message_count(&self) -> usize {
        self.conversations.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.conversations.values().flat_map(HashMap::values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SenderRole;
    use serde_json::json;

    fn raw(conv_id: &str, msg_id: &str, msg_type: &str) -> RawMessage {
        serde_json::from_value(json!({
            "conv_id": conv_id,
            "msg_id": msg_id,
            "msg_type": msg_type,
            "content": [{"type": "text", "text": format!("{conv_id}/{msg_id}")}]
        }))
        .unwrap()
    }

    #[test]
    fn test_every_unique_message_is_reachable() {
        let messages = vec![
            raw("c1", "m1", "input"),
            raw("c1", "m2", "output"),
            raw("c2", "m3", "input"),
            raw("c2", "m4", "output"),
            raw("c3", "m5", "output"),
        ];
        let index = ConversationIndex::from_raw(messages.clone());

        assert_eq!(index.message_count(), messages.len());
        assert_eq!(index.conversation_count(), 3);
        for m in &messages {
            let stored = index.get(&m.conv_id, &m.msg_id).expect("message indexed");
            let expected = if m.msg_type.as_deref() == Some("input") {
                SenderRole::User
            } else {
                SenderRole::Assistant
            };
            assert_eq!(stored.sender, expected);
            assert_eq!(stored.fields, m.fields);
        }
    }

    #[test]
    fn test_rebuild_replaces_instead_of_merging() {
        let mut index = ConversationIndex::from_raw(vec![raw("c1", "m1", "input")]);
        index.rebuild(vec![Message::from_raw(raw("c2", "m2", "output"))]);

        assert!(index.get("c1", "m1").is_none());
        assert!(index.conversation("c1").is_none());
        assert!(index.get("c2", "m2").is_some());
    }

    #[test]
    fn test_rebuild_with_empty_list_clears() {
        let mut index = ConversationIndex::from_raw(vec![raw("c1", "m1", "input")]);
        index.rebuild(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.message_count(), 0);
    }

    #[test]
    fn test_duplicate_pair_last_wins() {
        let mut second = raw("c1", "m1", "output");
        second.fields.insert("status".to_string(), json!("edited"));
        let index = ConversationIndex::from_raw(vec![raw("c1", "m1", "input"), second]);

        assert_eq!(index.message_count(), 1);
        let stored = index.get("c1", "m1").unwrap();
        assert_eq!(stored.sender, SenderRole::Assistant);
        assert_eq!(stored.field("status"), Some(&json!("edited")));
    }

    #[test]
    fn test_serializes_as_nested_map() {
        let index = ConversationIndex::from_raw(vec![raw("c1", "m1", "input")]);
        let value = serde_json::to_value(&index).unwrap();
        assert_eq!(value["c1"]["m1"]["sender"], json!("user"));
    }
}
