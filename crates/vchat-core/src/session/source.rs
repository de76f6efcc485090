//! Session source trait.
//!
//! Defines the interface the application layer uses to read remote session
//! state.

use super::public::PublicSession;
use crate::config_status::ConfigStatus;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract source of remote session state.
///
/// This trait decouples the share view from the transport (HTTP today,
/// fixtures in tests).
///
/// # Implementation Notes
///
/// Implementations should map:
/// - transport failures and non-success statuses to `VchatError::Network`
/// - undecodable bodies to `VchatError::MalformedResponse`
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Fetches a publicly shared session.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The ID of the session to fetch
    ///
    /// # Returns
    ///
    /// - `Ok(Some(PublicSession))`: Session body received
    /// - `Ok(None)`: The backend answered with a `null` body
    /// - `Err(_)`: The request or decoding failed
    async fn fetch_public_session(&self, session_id: &str) -> Result<Option<PublicSession>>;

    /// Fetches the backend config status.
    ///
    /// # Returns
    ///
    /// - `Ok(ConfigStatus)`: Status reported by the backend
    /// - `Err(_)`: The check failed; callers substitute `ConfigStatus::unavailable()`
    async fn fetch_config_status(&self) -> Result<ConfigStatus>;
}
