//! Configuration management for Movie Explorer
//!
//! Settings come from three places, highest priority first:
//! 1. Environment variables (`TMDB_API_KEY`, `TMDB_LANGUAGE`), including
//!    entries loaded from a `.env` file at startup
//! 2. The config file at ~/.config/movie-explorer/config.toml
//! 3. Built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the TMDB key or read access token
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Environment variable overriding the request language
pub const LANGUAGE_ENV: &str = "TMDB_LANGUAGE";

/// Default port, the same one Streamlit-style local apps use
pub const DEFAULT_PORT: u16 = 8501;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// TMDB API key (v3) or read access token (v4)
    pub tmdb_api_key: Option<String>,
    /// Request language, e.g. "en-US"
    pub language: Option<String>,
    /// Address the web UI binds to
    pub host: Option<IpAddr>,
    /// Port the web UI listens on
    pub port: Option<u16>,
}

impl Config {
    /// Get config file path (~/.config/movie-explorer/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("movie-explorer").join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| Self::from_file(&p).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Load from `path` if given, otherwise the default location
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::load()),
        }
    }

    /// Apply environment overrides on top of file values
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(LANGUAGE_ENV).ok(),
        )
    }

    /// Apply explicit overrides; blank values leave the current setting alone
    pub fn with_overrides(mut self, api_key: Option<String>, language: Option<String>) -> Self {
        if let Some(key) = non_blank(api_key) {
            self.tmdb_api_key = Some(key);
        }
        if let Some(language) = non_blank(language) {
            self.language = Some(language);
        }
        self
    }

    /// TMDB key, if a non-blank one is configured
    pub fn tmdb_api_key(&self) -> Option<String> {
        non_blank(self.tmdb_api_key.clone())
    }

    pub fn language(&self) -> Option<String> {
        non_blank(self.language.clone())
    }

    /// Socket address for the web UI (127.0.0.1:8501 by default)
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.tmdb_api_key().is_none());
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:8501");
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = Config {
            tmdb_api_key: Some("from-file".to_string()),
            language: Some("de-DE".to_string()),
            ..Default::default()
        }
        .with_overrides(Some("from-env".to_string()), None);

        assert_eq!(config.tmdb_api_key().as_deref(), Some("from-env"));
        assert_eq!(config.language().as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let config = Config {
            tmdb_api_key: Some("   ".to_string()),
            ..Default::default()
        }
        .with_overrides(Some(String::new()), Some(" ".to_string()));

        assert!(config.tmdb_api_key().is_none());
        assert!(config.language().is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "tmdb_api_key = \"abc123\"\nlanguage = \"fr-FR\"\nhost = \"0.0.0.0\"\nport = 9000"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.tmdb_api_key().as_deref(), Some("abc123"));
        assert_eq!(config.language().as_deref(), Some("fr-FR"));
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(Path::new("/nonexistent/movie-explorer.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }
}
