//! Backend configuration status.
//!
//! The share view asks the backend once whether it is configured. Any failure
//! of that check is replaced by [`ConfigStatus::unavailable`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of the backend config check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigStatus {
    /// Whether the backend reports itself as configured.
    #[serde(default)]
    pub backend: bool,
    /// Any other flags the backend reports, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigStatus {
    /// The safe default used when the check fails: `{ backend: false }`.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Response envelope of the config check endpoint: `{ status, data }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigStatusEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: ConfigStatus,
}
