//! HttpSessionSource - REST implementation of `SessionSource`.
//!
//! Talks to the backend's public endpoints:
//! - `GET {http_url}/session/public/{session_id}`
//! - `GET {http_url}/config/check`
//!
//! No timeout is applied unless one is set with [`HttpSessionSource::with_timeout`].

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use vchat_core::config::ClientConfig;
use vchat_core::config_status::{ConfigStatus, ConfigStatusEnvelope};
use vchat_core::error::{Result, VchatError};
use vchat_core::session::{PublicSession, SessionSource};

/// Session source backed by the backend's REST API.
#[derive(Clone, Debug)]
pub struct HttpSessionSource {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl HttpSessionSource {
    /// Creates a source for the given base address.
    pub fn new(http_url: &str) -> Result<Self> {
        let trimmed = http_url.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| VchatError::config(format!("Invalid http_url '{}': {}", http_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(VchatError::config(format!(
                "http_url '{}' cannot be used as a base address",
                http_url
            )));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            timeout: None,
        })
    }

    /// Creates a source from the client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.base_url())
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a preconfigured reqwest client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// `{base}/session/public/{session_id}`, with the id percent-encoded.
    pub fn public_session_url(&self, session_id: &str) -> Result<Url> {
        self.endpoint(&["session", "public", session_id])
    }

    /// `{base}/config/check`.
    pub fn config_check_url(&self) -> Result<Url> {
        self.endpoint(&["config", "check"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| VchatError::internal("base url cannot carry path segments"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET and returns the response if the status is a success.
    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("[HttpSessionSource] GET {}", url);

        let mut request = self.client.get(url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VchatError::network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VchatError::network(format!(
                "Backend error ({}) for {}: {}",
                status, url, error_text
            )));
        }

        Ok(response)
    }

    /// Reads the body as text, then decodes it as JSON.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response
            .text()
            .await
            .map_err(|e| VchatError::network(format!("Failed to read response body: {}", e)))?;
        serde_json::from_str(&body)
            .map_err(|e| VchatError::malformed(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl SessionSource for HttpSessionSource {
    async fn fetch_public_session(&self, session_id: &str) -> Result<Option<PublicSession>> {
        let url = self.public_session_url(session_id)?;
        let response = self.get(url).await?;
        let public: Option<PublicSession> = Self::decode(response).await?;

        tracing::debug!(
            "[HttpSessionSource] Public session {} received: present={}, messages={}",
            session_id,
            public.is_some(),
            public.as_ref().map_or(0, PublicSession::message_count)
        );

        Ok(public)
    }

    async fn fetch_config_status(&self) -> Result<ConfigStatus> {
        let url = self.config_check_url()?;
        let response = self
            .get(url)
            .await
            .map_err(|e| VchatError::config_fetch(e.to_string()))?;
        let envelope: ConfigStatusEnvelope = Self::decode(response)
            .await
            .map_err(|e| VchatError::config_fetch(e.to_string()))?;

        tracing::debug!(
            "[HttpSessionSource] Config status: status={:?}, backend={}",
            envelope.status,
            envelope.data.backend
        );

        Ok(envelope.data)
    }
}
