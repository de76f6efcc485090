use anyhow::{Context, Result};
use std::path::PathBuf;
use vchat_core::config::{ClientConfig, ConfigFile};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub http_url: Option<String>,
    pub socket_url: Option<String>,
    pub debug: bool,
}

/// Builds the client config.
///
/// Resolution order:
/// 1. `--config <path>` (must exist)
/// 2. `./vchat.toml`, then `<config dir>/vchat/config.toml`
/// 3. Flags only (`--http-url` is then required)
///
/// Flags override whatever the file provided.
pub fn resolve(overrides: Overrides) -> Result<ClientConfig> {
    let file = match overrides.config_path.or_else(ClientConfig::discover) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            ConfigFile::load(&path).with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => ConfigFile::default(),
    };

    let config = file
        .merge(overrides.http_url, overrides.socket_url, overrides.debug)
        .context("No http_url configured. Set it in vchat.toml or pass --http-url.")?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vchat.toml");
        std::fs::write(
            &path,
            "http_url = \"http://file:8000\"\nsocket_url = \"ws://file:8000\"\n",
        )
        .unwrap();

        let config = resolve(Overrides {
            config_path: Some(path),
            http_url: Some("http://flag:9000".to_string()),
            socket_url: None,
            debug: true,
        })
        .unwrap();

        assert_eq!(config.http_url, "http://flag:9000");
        assert_eq!(config.socket_url.as_deref(), Some("ws://file:8000"));
        assert!(config.debug);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = resolve(Overrides {
            config_path: Some(temp_dir.path().join("absent.toml")),
            http_url: Some("http://flag:9000".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_flag_url_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vchat.toml");
        std::fs::write(&path, "debug = false\n").unwrap();

        let result = resolve(Overrides {
            config_path: Some(path),
            http_url: Some("ftp://nope".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
