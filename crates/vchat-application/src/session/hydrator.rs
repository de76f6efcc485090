//! One-shot session hydration.
//!
//! The hydrator fetches a public session and normalizes it into the
//! share-view state. Failures never reach the caller: the state simply keeps
//! its pre-hydration values.

use super::state::ShareViewState;
use std::sync::Arc;
use vchat_core::error::{Result, VchatError};
use vchat_core::session::SessionSource;

/// What a successful hydration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// The session was applied and `messages` messages were indexed.
    Applied { messages: usize },
    /// The backend answered `null`; nothing was changed.
    NoSession,
}

/// Fills a [`ShareViewState`] from a [`SessionSource`].
#[derive(Clone)]
pub struct SessionHydrator {
    source: Arc<dyn SessionSource>,
    state: ShareViewState,
    debug: bool,
}

impl SessionHydrator {
    pub fn new(source: Arc<dyn SessionSource>, state: ShareViewState) -> Self {
        Self {
            source,
            state,
            debug: false,
        }
    }

    /// When set, swallowed failures are logged at error level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Runs hydration in a detached task.
    ///
    /// There is no join point: readers of the state may observe the
    /// pre-hydration values until the task finishes. Must be called from
    /// within a tokio runtime.
    pub fn spawn(self, session_id: impl Into<String>) {
        let session_id = session_id.into();
        tokio::spawn(async move {
            self.hydrate(&session_id).await;
        });
    }

    /// Fetches and applies the public session, swallowing any failure.
    pub async fn hydrate(&self, session_id: &str) {
        match self.try_hydrate(session_id).await {
            Ok(HydrationOutcome::Applied { messages }) => {
                tracing::debug!(
                    "[SessionHydrator] Hydrated session {} with {} messages",
                    session_id,
                    messages
                );
            }
            Ok(HydrationOutcome::NoSession) => {
                tracing::debug!(
                    "[SessionHydrator] Backend returned no session for {}",
                    session_id
                );
            }
            Err(e) if self.debug => {
                tracing::error!(
                    "[SessionHydrator] Error fetching public session {}: {}",
                    session_id,
                    e
                );
            }
            Err(e) => {
                tracing::debug!(
                    "[SessionHydrator] Hydration of {} abandoned: {}",
                    session_id,
                    e
                );
            }
        }
    }

    /// Fetches and applies the public session, reporting what happened.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `session_id` is empty (no request is made)
    /// - The source fails to fetch or decode the session
    ///
    /// The state is only mutated on `Ok(HydrationOutcome::Applied { .. })`.
    pub async fn try_hydrate(&self, session_id: &str) -> Result<HydrationOutcome> {
        if session_id.trim().is_empty() {
            return Err(VchatError::config("session id must not be empty"));
        }

        let Some(public) = self.source.fetch_public_session(session_id).await? else {
            return Ok(HydrationOutcome::NoSession);
        };

        let messages = self.state.apply_public_session(public).await;
        Ok(HydrationOutcome::Applied { messages })
    }
}
