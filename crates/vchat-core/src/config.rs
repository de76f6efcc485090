//! Client configuration.
//!
//! The share view is configured with three values: a debug toggle, the base
//! address for REST calls, and the real-time socket address. The socket
//! address is carried but never dialed by this client.

use crate::error::{Result, VchatError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory before the user config dir.
pub const LOCAL_CONFIG_FILE: &str = "vchat.toml";

/// Configuration consumed by the share view.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Enables diagnostic logging of swallowed failures.
    #[serde(default)]
    pub debug: bool,
    /// Real-time transport address. Accepted, unused.
    #[serde(default, alias = "socketUrl")]
    pub socket_url: Option<String>,
    /// Base address for REST calls, e.g. `http://localhost:8000`.
    #[serde(alias = "httpUrl")]
    pub http_url: String,
}

impl ClientConfig {
    pub fn new(http_url: impl Into<String>) -> Self {
        Self {
            debug: false,
            socket_url: None,
            http_url: http_url.into(),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_socket_url(mut self, socket_url: impl Into<String>) -> Self {
        self.socket_url = Some(socket_url.into());
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VchatError::not_found("config file", path.display().to_string())
            } else {
                VchatError::from(e)
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// Returns the first existing config file among `./vchat.toml` and
    /// `<config dir>/vchat/config.toml`.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        Self::default_path().filter(|p| p.is_file())
    }

    /// `<config dir>/vchat/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vchat").join("config.toml"))
    }

    /// Checks that `http_url` is a usable http(s) base address.
    pub fn validate(&self) -> Result<()> {
        let url = self.http_url.trim();
        if url.is_empty() {
            return Err(VchatError::config("http_url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(VchatError::config(format!(
                "http_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        Ok(())
    }

    /// `http_url` without trailing slashes, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.http_url.trim().trim_end_matches('/')
    }
}

/// Config file contents before command-line values are merged in.
///
/// Every key is optional so a file may leave `http_url` to a flag.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub debug: Option<bool>,
    #[serde(default, alias = "socketUrl")]
    pub socket_url: Option<String>,
    #[serde(default, alias = "httpUrl")]
    pub http_url: Option<String>,
}

impl ConfigFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Overlays explicit values on the file. `debug` can only be switched on.
    ///
    /// Returns `None` when neither side provides `http_url`.
    pub fn merge(
        self,
        http_url: Option<String>,
        socket_url: Option<String>,
        debug: bool,
    ) -> Option<ClientConfig> {
        Some(ClientConfig {
            debug: debug || self.debug.unwrap_or(false),
            socket_url: socket_url.or(self.socket_url),
            http_url: http_url.or(self.http_url)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_merge() {
        let file = ConfigFile::from_toml_str("debug = true\nsocket_url = \"ws://a\"").unwrap();
        assert!(file.clone().merge(None, None, false).is_none());

        let config = file.merge(Some("http://b".to_string()), None, false).unwrap();
        assert!(config.debug);
        assert_eq!(config.socket_url.as_deref(), Some("ws://a"));
        assert_eq!(config.http_url, "http://b");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = ClientConfig::from_toml_str(r#"http_url = "http://localhost:8000""#)
            .expect("should parse");
        assert!(!config.debug);
        assert_eq!(config.socket_url, None);
        assert_eq!(config.http_url, "http://localhost:8000");
    }

    #[test]
    fn test_parse_accepts_camel_case_keys() {
        let config = ClientConfig::from_toml_str(
            r#"
            debug = true
            socketUrl = "ws://localhost:8000/chat"
            httpUrl = "https://api.example.com/"
            "#,
        )
        .expect("should parse");
        assert!(config.debug);
        assert_eq!(config.socket_url.as_deref(), Some("ws://localhost:8000/chat"));
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = ClientConfig::from_toml_str(r#"http_url = "localhost:8000""#).unwrap_err();
        assert!(err.is_config());

        let err = ClientConfig::new("  ").validate().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_http_url_is_serialization_error() {
        let err = ClientConfig::from_toml_str("debug = true").unwrap_err();
        assert!(matches!(err, VchatError::Serialization { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "debug = true\nhttp_url = \"http://127.0.0.1:9000\"\n").unwrap();

        let config = ClientConfig::load(&path).expect("should load");
        assert!(config.debug);
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = ClientConfig::load(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(err.is_not_found());
    }
}
