use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable holding the remote endpoint address.
pub const API_URL_ENV: &str = "USERDIR_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No API URL configured (set USERDIR_API_URL or pass --api-url)")]
    MissingApiUrl,

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/userdir/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("userdir").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    ///
    /// The file is optional, so no validation happens here; see
    /// [`Config::resolve`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Layer overrides on top of the file config and validate.
    ///
    /// Precedence: `flag` > `env` > file. Blank values are ignored.
    pub fn resolve(mut self, env: Option<String>, flag: Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        if let Some(url) = non_blank(flag).or_else(|| non_blank(env)) {
            self.api.url = Some(url.trim().to_string());
        }

        self.validate()?;
        Ok(self)
    }

    /// Reads [`API_URL_ENV`] from the process environment.
    pub fn env_api_url() -> Option<String> {
        std::env::var(API_URL_ENV).ok()
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - An API URL is present
    /// - It parses as an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_url()?;

        let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid API URL '{}': {}", url, e),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "API URL '{}' must use http or https, got '{}'",
                    url,
                    parsed.scheme()
                ),
            });
        }

        Ok(())
    }

    /// The configured endpoint address.
    pub fn api_url(&self) -> Result<&str, ConfigError> {
        self.api
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingApiUrl)
    }
}
