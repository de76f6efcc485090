//! Session domain model.
//!
//! This module contains the Session entity the share view observes. A session
//! starts with client-side defaults and is updated in place when the public
//! session is fetched.

use super::public::PublicSession;
use crate::collection::DEFAULT_COLLECTION_ID;
use serde::{Deserialize, Serialize};

/// A chat session as seen by the client.
///
/// Rows from the backend session list deserialize into this type as well,
/// so `id` also accepts the backend's `session_id` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier
    #[serde(alias = "session_id")]
    pub id: String,
    /// Human-readable session name, if the backend has one
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the client considers itself connected
    #[serde(default = "default_connected")]
    pub is_connected: bool,
    /// Video the session is about
    #[serde(default)]
    pub video_id: Option<String>,
    /// Collection the video belongs to
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Creation time (unix seconds)
    #[serde(default)]
    pub created_at: i64,
}

fn default_connected() -> bool {
    true
}

impl Session {
    /// Creates a session with pre-hydration defaults: connected, no video,
    /// the `"default"` collection, created now.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            is_connected: true,
            video_id: None,
            collection_id: Some(DEFAULT_COLLECTION_ID.to_string()),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Copies the media fields of a fetched public session.
    ///
    /// `video_id` is replaced outright (absent means `None`). `collection_id`
    /// falls back to the current value when the response has none. Empty
    /// strings count as absent.
    pub fn apply_public(&mut self, public: &PublicSession) {
        self.video_id = non_empty(public.video_id.as_deref());
        self.collection_id = non_empty(public.collection_id.as_deref())
            .or_else(|| non_empty(self.collection_id.as_deref()));
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public(video_id: Option<&str>, collection_id: Option<&str>) -> PublicSession {
        PublicSession {
            video_id: video_id.map(str::to_string),
            collection_id: collection_id.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new("s-1");
        assert!(session.is_connected);
        assert_eq!(session.video_id, None);
        assert_eq!(session.collection_id.as_deref(), Some("default"));
        assert!(session.created_at > 0);
    }

    #[test]
    fn test_apply_public_sets_both_ids() {
        let mut session = Session::new("s-1");
        session.apply_public(&public(Some("v-1"), Some("c-1")));
        assert_eq!(session.video_id.as_deref(), Some("v-1"));
        assert_eq!(session.collection_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn test_apply_public_without_video_clears_it() {
        let mut session = Session::new("s-1");
        session.video_id = Some("old".to_string());
        session.apply_public(&public(None, Some("c-1")));
        assert_eq!(session.video_id, None);

        session.video_id = Some("old".to_string());
        session.apply_public(&public(Some(""), Some("c-1")));
        assert_eq!(session.video_id, None);
    }

    #[test]
    fn test_apply_public_keeps_prior_collection() {
        let mut session = Session::new("s-1");
        session.collection_id = Some("c-prior".to_string());
        session.apply_public(&public(Some("v-1"), None));
        assert_eq!(session.collection_id.as_deref(), Some("c-prior"));
    }

    #[test]
    fn test_apply_public_without_any_collection_is_none() {
        let mut session = Session::new("s-1");
        session.collection_id = None;
        session.apply_public(&public(None, None));
        assert_eq!(session.collection_id, None);

        session.collection_id = Some(String::new());
        session.apply_public(&public(None, Some("")));
        assert_eq!(session.collection_id, None);
    }

    #[test]
    fn test_deserialize_backend_row() {
        let session: Session = serde_json::from_str(
            r#"{"session_id":"s-9","name":"Demo","video_id":"v","collection_id":"c","created_at":1700000000,"is_public":true}"#,
        )
        .unwrap();
        assert_eq!(session.id, "s-9");
        assert_eq!(session.name.as_deref(), Some("Demo"));
        assert!(session.is_connected);
        assert_eq!(session.created_at, 1_700_000_000);
    }
}
