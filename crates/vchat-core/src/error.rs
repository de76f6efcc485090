//! Error types for the vchat client.

use thiserror::Error;

/// A shared error type for the entire vchat client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum VchatError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// The request never produced a usable response (transport failure or
    /// non-success status)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The backend config-status check failed
    #[error("Config status fetch failed: {0}")]
    ConfigFetch(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No route matches the given path
    #[error("No route matches path: {0}")]
    Routing(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VchatError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a MalformedResponse error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Creates a ConfigFetch error
    pub fn config_fetch(message: impl Into<String>) -> Self {
        Self::ConfigFetch(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Routing error
    pub fn routing(path: impl Into<String>) -> Self {
        Self::Routing(path.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a malformed response error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a routing error
    pub fn is_routing(&self) -> bool {
        matches!(self, Self::Routing(_))
    }

    /// Check if this error came from talking to the backend.
    ///
    /// Returns true for `Network`, `MalformedResponse` and `ConfigFetch`.
    /// These are the failures the share view swallows.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::MalformedResponse(_) | Self::ConfigFetch(_)
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for VchatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for VchatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VchatError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, VchatError>`.
pub type Result<T> = std::result::Result<T, VchatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_errors_are_classified() {
        assert!(VchatError::network("connection refused").is_remote());
        assert!(VchatError::malformed("expected value").is_remote());
        assert!(VchatError::config_fetch("timeout").is_remote());
        assert!(!VchatError::config("missing http_url").is_remote());
        assert!(!VchatError::routing("/nope").is_remote());
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let err: VchatError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        match err {
            VchatError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let err: VchatError = std::io::Error::from(std::io::ErrorKind::PermissionDenied).into();
        match err {
            VchatError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = VchatError::not_found("Session", "abc");
        assert_eq!(err.to_string(), "Entity not found: Session 'abc'");
        assert!(err.is_not_found());
    }
}
