use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::origin::{OriginOverrides, ServiceOrigin};
use crate::config::types::Config;

/// Errors raised while loading or resolving configuration.
///
/// These surface once at startup; they never become per-request failures.
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

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error(
        "Service origin is not configured: pass --origin, set OCTOFIT_API_ORIGIN or CODESPACE_NAME, \
         or add `origin` under [service] in the config file"
    )]
    MissingOrigin,

    #[error("Invalid service origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/octofit/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("octofit").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`; an unreadable, malformed or
    /// invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        self.ui.date_style()?;

        for (key, value) in [
            ("service.request_timeout_seconds", self.service.request_timeout_seconds),
            ("service.connect_timeout_seconds", self.service.connect_timeout_seconds),
        ] {
            if value == Some(0) {
                return Err(ConfigError::ValidationError {
                    message: format!("{key} must be greater than zero"),
                });
            }
        }

        if let Some(origin) = &self.service.origin {
            ServiceOrigin::parse(origin)?;
        }

        Ok(())
    }

    /// Resolves the service origin.
    ///
    /// Precedence: CLI flag, `OCTOFIT_API_ORIGIN`, `CODESPACE_NAME`, then the
    /// config file. Nothing configured is [`ConfigError::MissingOrigin`].
    pub fn resolve_origin(&self, overrides: &OriginOverrides) -> Result<ServiceOrigin, ConfigError> {
        if let Some(raw) = overrides.cli.as_deref().or(overrides.env_origin.as_deref()) {
            return ServiceOrigin::parse(raw);
        }
        if let Some(name) = overrides.codespace_name.as_deref() {
            return ServiceOrigin::parse(&ServiceOrigin::codespace_url(name));
        }
        match self.service.origin.as_deref() {
            Some(raw) => ServiceOrigin::parse(raw),
            None => Err(ConfigError::MissingOrigin),
        }
    }
}
