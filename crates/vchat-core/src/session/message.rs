//! Conversation message types.
//!
//! Messages arrive from the backend as flat JSON records. Only the identifiers
//! and the type tag are interpreted; every other field is carried through
//! unchanged so the view can render whatever the backend attached.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `msg_type` tag the backend uses for messages typed by the user.
pub const INPUT_MSG_TYPE: &str = "input";

/// Who authored a message, derived from its type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    /// Message typed by the user.
    User,
    /// Anything the backend produced.
    Assistant,
}

impl SenderRole {
    /// `User` iff `msg_type` is exactly `"input"`.
    pub fn from_msg_type(msg_type: Option<&str>) -> Self {
        match msg_type {
            Some(INPUT_MSG_TYPE) => Self::User,
            _ => Self::Assistant,
        }
    }
}

/// A message as delivered in a public session's `conversation` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMessage {
    #[serde(deserialize_with = "deserialize_id")]
    pub conv_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub msg_id: String,
    #[serde(default)]
    pub msg_type: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A message stored in the conversation index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub conv_id: String,
    pub msg_id: String,
    pub sender: SenderRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<String>,
    /// Remaining backend fields (content, actions, agents, status, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Message {
    /// Tags a raw message with its sender role.
    ///
    /// A `sender` key sent by the backend is discarded; the derived role is
    /// the only sender the index stores.
    pub fn from_raw(raw: RawMessage) -> Self {
        let RawMessage {
            conv_id,
            msg_id,
            msg_type,
            mut fields,
        } = raw;
        fields.remove("sender");
        Self {
            sender: SenderRole::from_msg_type(msg_type.as_deref()),
            conv_id,
            msg_id,
            msg_type,
            fields,
        }
    }

    /// Looks up a passthrough field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        Self::from_raw(raw)
    }
}

/// Identifiers may come back as strings or numbers; both are keyed as strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
