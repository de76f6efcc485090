//! Wire shape of `GET /session/public/{session_id}`.

use super::message::RawMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A publicly shared session as returned by the backend.
///
/// Every field is optional; an empty object is a valid (if useless) response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PublicSession {
    pub session_id: Option<String>,
    pub name: Option<String>,
    pub video_id: Option<String>,
    pub collection_id: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub is_public: Option<bool>,
    pub metadata: Option<Value>,
    #[serde(skip_serializing)]
    pub conversation: Option<Vec<RawMessage>>,
}

impl PublicSession {
    /// Number of messages in the conversation list, if present.
    pub fn message_count(&self) -> usize {
        self.conversation.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_parses() {
        let public: PublicSession = serde_json::from_str("{}").unwrap();
        assert_eq!(public, PublicSession::default());
        assert_eq!(public.message_count(), 0);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let public: PublicSession =
            serde_json::from_str(r#"{"video_id":null,"collection_id":null,"conversation":null}"#)
                .unwrap();
        assert_eq!(public.video_id, None);
        assert_eq!(public.conversation, None);
    }

    #[test]
    fn test_null_body_is_none() {
        let public: Option<PublicSession> = serde_json::from_str("null").unwrap();
        assert!(public.is_none());
    }

    #[test]
    fn test_full_body() {
        let public: PublicSession = serde_json::from_str(
            r#"{
                "session_id": "s-1",
                "video_id": "v-1",
                "collection_id": "c-1",
                "created_at": 1700000000,
                "is_public": true,
                "metadata": {},
                "conversation": [
                    {"conv_id": "c", "msg_id": "1", "msg_type": "input", "content": []},
                    {"conv_id": "c", "msg_id": "2", "msg_type": "output", "content": []}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(public.session_id.as_deref(), Some("s-1"));
        assert_eq!(public.message_count(), 2);
    }
}
