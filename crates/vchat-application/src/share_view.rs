//! Share view bootstrap.
//!
//! Opening a share view creates the state for one session and starts one
//! detached task that runs session hydration and the backend config check
//! concurrently. The view reports when both have finished, whatever their
//! outcome.

use crate::session::{SessionHydrator, ShareViewState};
use std::sync::Arc;
use tokio::sync::watch;
use vchat_core::config::ClientConfig;
use vchat_core::config_status::ConfigStatus;
use vchat_core::session::{Session, SessionSource};

/// Asks the backend for its config status.
///
/// Never fails: any error is replaced by [`ConfigStatus::unavailable`].
pub async fn check_config_status(source: &dyn SessionSource, debug: bool) -> ConfigStatus {
    match source.fetch_config_status().await {
        Ok(status) => {
            if debug {
                tracing::debug!("[ShareView] Config status: {:?}", status);
            }
            status
        }
        Err(e) => {
            if debug {
                tracing::error!("[ShareView] Error fetching config status: {}", e);
            }
            ConfigStatus::unavailable()
        }
    }
}

/// A share view bound to one session.
pub struct ShareView {
    config: ClientConfig,
    session_id: String,
    state: ShareViewState,
    settled: watch::Receiver<bool>,
}

impl ShareView {
    /// Opens the view and starts hydration and the config check.
    ///
    /// Returns immediately; the state holds its defaults until the spawned
    /// tasks complete. Must be called from within a tokio runtime.
    pub fn open(
        config: ClientConfig,
        source: Arc<dyn SessionSource>,
        session_id: impl Into<String>,
    ) -> Self {
        let session_id = session_id.into();
        let debug = config.debug;

        if debug {
            tracing::debug!("[ShareView] config: {:?}", config);
        }
        if let Some(socket_url) = &config.socket_url {
            tracing::debug!(
                "[ShareView] socket_url {} configured; the share view does not open a socket",
                socket_url
            );
        }

        let state = ShareViewState::new(Session::new(session_id.clone()));

        let hydrator = SessionHydrator::new(Arc::clone(&source), state.clone()).with_debug(debug);
        let status_state = state.clone();
        let hydrate_id = session_id.clone();
        let (settled_tx, settled) = watch::channel(false);

        tokio::spawn(async move {
            tokio::join!(hydrator.hydrate(&hydrate_id), async {
                let status = check_config_status(source.as_ref(), debug).await;
                status_state.set_config_status(status).await;
            });
            settled_tx.send_replace(true);
        });

        Self {
            config,
            session_id,
            state,
            settled,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn state(&self) -> &ShareViewState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.state.subscribe()
    }

    /// Turns `true` once hydration and the config check have both finished,
    /// including when hydration failed or found no session.
    pub fn settled(&self) -> watch::Receiver<bool> {
        self.settled.clone()
    }

    pub fn is_settled(&self) -> bool {
        *self.settled.borrow()
    }
}
