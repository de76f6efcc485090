//! Collection and media references held by the share view.
//!
//! These are references only: identifiers plus whatever display fields the
//! backend attaches. The share view never fetches media content itself.

use serde::{Deserialize, Serialize};

/// The value a fresh session uses for its collection before hydration.
pub const DEFAULT_COLLECTION_ID: &str = "default";

/// A media collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Collection {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
        }
    }
}

/// Kind of media item a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
}

/// Reference to one media item inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub collection_id: String,
    pub media_id: String,
}

impl MediaRef {
    pub fn new(kind: MediaKind, collection_id: impl Into<String>, media_id: impl Into<String>) -> Self {
        Self {
            kind,
            collection_id: collection_id.into(),
            media_id: media_id.into(),
        }
    }

    pub fn video(collection_id: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self::new(MediaKind::Video, collection_id, video_id)
    }
}

/// The currently selected collection and one active item per media kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSelection {
    pub collection: Option<Collection>,
    pub video: Option<MediaRef>,
    pub audio: Option<MediaRef>,
    pub image: Option<MediaRef>,
}

impl MediaSelection {
    /// Sets the active item for `media.kind`, replacing the previous one.
    pub fn set_active(&mut self, media: MediaRef) {
        match media.kind {
            MediaKind::Video => self.video = Some(media),
            MediaKind::Audio => self.audio = Some(media),
            MediaKind::Image => self.image = Some(media),
        }
    }

    pub fn active(&self, kind: MediaKind) -> Option<&MediaRef> {
        match kind {
            MediaKind::Video => self.video.as_ref(),
            MediaKind::Audio => self.audio.as_ref(),
            MediaKind::Image => self.image.as_ref(),
        }
    }

    /// Selects `collection`. Active items from another collection are dropped.
    pub fn select_collection(&mut self, collection: Option<Collection>) {
        let keep = |media: &Option<MediaRef>| match (&collection, media) {
            (Some(c), Some(m)) => m.collection_id == c.id,
            _ => false,
        };
        if !keep(&self.video) {
            self.video = None;
        }
        if !keep(&self.audio) {
            self.audio = None;
        }
        if !keep(&self.image) {
            self.image = None;
        }
        self.collection = collection;
    }
}
