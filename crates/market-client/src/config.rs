use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.21.co";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MARKET_PATH environment variable (directory, with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.market (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MARKET_PATH") {
        return Ok(expand_tilde(&env_path).join("config.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("market").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".market").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            username: None,
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply the MARKET_API_URL environment variable and an explicit
    /// `--api-url` value, the latter taking precedence.
    pub fn with_overrides(mut self, api_url: Option<&str>) -> Self {
        if let Ok(env_url) = std::env::var("MARKET_API_URL")
            && !env_url.trim().is_empty()
        {
            self.api.url = env_url;
        }

        if let Some(url) = api_url {
            self.api.url = url.to_string();
        }

        self.api.url = self.api.url.trim().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert!(config.api.username.is_none());
        assert!(config.api.token.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            api: ApiConfig {
                url: "http://127.0.0.1:9000".to_string(),
                username: Some("alice".to_string()),
                token: Some("secret".to_string()),
            },
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api]\nusername = \"bob\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.api.username.as_deref(), Some("bob"));

        Ok(())
    }

    #[test]
    fn test_invalid_config_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api\nurl = ")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_explicit_url_override_trims_trailing_slash() {
        let config = Config::default().with_overrides(Some("http://localhost:8080/"));
        assert_eq!(config.api.url, "http://localhost:8080");
    }

    #[test]
    fn test_explicit_config_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/market-test/config.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/market-test/config.toml"));
        Ok(())
    }
}
