//! Observable share-view state.
//!
//! Fields are plain data behind one lock. Every mutation bumps a revision
//! published on a watch channel, so views can re-read whatever they derive
//! (the sorted session list in particular) when it changes.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use vchat_core::agent::Agent;
use vchat_core::collection::{Collection, MediaRef, MediaSelection};
use vchat_core::config_status::ConfigStatus;
use vchat_core::session::{ConversationIndex, Message, PublicSession, Session, SessionList};

struct StateInner {
    session: Session,
    conversations: ConversationIndex,
    config_status: Option<ConfigStatus>,
    collections: Vec<Collection>,
    agents: Vec<Agent>,
    media: MediaSelection,
    sessions: SessionList,
}

/// Point-in-time copy of the whole state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareViewSnapshot {
    pub revision: u64,
    pub session: Session,
    pub conversations: ConversationIndex,
    pub config_status: Option<ConfigStatus>,
    pub collections: Vec<Collection>,
    pub agents: Vec<Agent>,
    pub media: MediaSelection,
    /// Session collection, newest first.
    pub sessions: Vec<Session>,
}

/// Shared handle to the share-view state. Cloning shares the same state.
#[derive(Clone)]
pub struct ShareViewState {
    inner: Arc<RwLock<StateInner>>,
    revision: Arc<watch::Sender<u64>>,
}

impl ShareViewState {
    /// Creates state around a session with its pre-hydration values.
    pub fn new(session: Session) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(StateInner {
                session,
                conversations: ConversationIndex::new(),
                config_status: None,
                collections: Vec::new(),
                agents: Vec::new(),
                media: MediaSelection::default(),
                sessions: SessionList::new(),
            })),
            revision: Arc::new(revision),
        }
    }

    /// Receives the revision number after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn notify(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    // ============================================================================
    // Readers
    // ============================================================================

    pub async fn session(&self) -> Session {
        self.inner.read().await.session.clone()
    }

    pub async fn conversations(&self) -> ConversationIndex {
        self.inner.read().await.conversations.clone()
    }

    /// Looks up one message without cloning the whole index.
    pub async fn message(&self, conv_id: &str, msg_id: &str) -> Option<Message> {
        self.inner.read().await.conversations.get(conv_id, msg_id).cloned()
    }

    pub async fn config_status(&self) -> Option<ConfigStatus> {
        self.inner.read().await.config_status.clone()
    }

    pub async fn collections(&self) -> Vec<Collection> {
        self.inner.read().await.collections.clone()
    }

    pub async fn agents(&self) -> Vec<Agent> {
        self.inner.read().await.agents.clone()
    }

    pub async fn media(&self) -> MediaSelection {
        self.inner.read().await.media.clone()
    }

    /// The session collection, newest first.
    pub async fn sessions(&self) -> Vec<Session> {
        self.inner.read().await.sessions.sorted().to_vec()
    }

    pub async fn snapshot(&self) -> ShareViewSnapshot {
        let inner = self.inner.read().await;
        ShareViewSnapshot {
            revision: self.revision(),
            session: inner.session.clone(),
            conversations: inner.conversations.clone(),
            config_status: inner.config_status.clone(),
            collections: inner.collections.clone(),
            agents: inner.agents.clone(),
            media: inner.media.clone(),
            sessions: inner.sessions.sorted().to_vec(),
        }
    }

    // ============================================================================
    // Mutators
    // ============================================================================

    /// Applies a fetched public session: updates the media ids and rebuilds
    /// the conversation index from scratch. Returns the number of messages
    /// indexed.
    pub async fn apply_public_session(&self, public: PublicSession) -> usize {
        let count = {
            let mut inner = self.inner.write().await;
            inner.session.apply_public(&public);
            let messages = public.conversation.unwrap_or_default();
            inner
                .conversations
                .rebuild(messages.into_iter().map(Message::from_raw));
            inner.conversations.message_count()
        };
        self.notify();
        count
    }

    /// Replaces the session collection.
    pub async fn set_sessions(&self, sessions: Vec<Session>) {
        self.inner.write().await.sessions.replace(sessions);
        self.notify();
    }

    pub async fn push_session(&self, session: Session) {
        self.inner.write().await.sessions.push(session);
        self.notify();
    }

    pub async fn remove_session(&self, session_id: &str) -> bool {
        let removed = self.inner.write().await.sessions.remove(session_id);
        if removed {
            self.notify();
        }
        removed
    }

    pub async fn set_config_status(&self, status: ConfigStatus) {
        self.inner.write().await.config_status = Some(status);
        self.notify();
    }

    pub async fn set_collections(&self, collections: Vec<Collection>) {
        self.inner.write().await.collections = collections;
        self.notify();
    }

    pub async fn set_agents(&self, agents: Vec<Agent>) {
        self.inner.write().await.agents = agents;
        self.notify();
    }

    pub async fn select_collection(&self, collection: Option<Collection>) {
        self.inner.write().await.media.select_collection(collection);
        self.notify();
    }

    pub async fn set_active_media(&self, media: MediaRef) {
        self.inner.write().await.media.set_active(media);
        self.notify();
    }

    pub async fn set_connected(&self, is_connected: bool) {
        self.inner.write().await.session.is_connected = is_connected;
        self.notify();
    }
}
