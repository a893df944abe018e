use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ConfigError;
use crate::projection::DateStyle;
use crate::resource::ResourceKind;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote REST service settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Scheme + host (+ optional port and path prefix), e.g. "http://localhost:8000".
    /// Environment and CLI overrides take precedence.
    pub origin: Option<String>,
    /// Total request timeout. Unset means the transport default (none).
    pub request_timeout_seconds: Option<u64>,
    /// Connection timeout. Unset means the transport default.
    pub connect_timeout_seconds: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/spinner tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// View shown on startup (default: users).
    #[serde(default = "default_view")]
    pub default_view: ResourceKind,
    /// chrono format pattern for dates (default: "%-m/%-d/%Y").
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_view() -> ResourceKind {
    ResourceKind::Users
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            default_view: default_view(),
            date_format: default_date_format(),
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_seconds.map(Duration::from_secs)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn date_style(&self) -> Result<DateStyle, ConfigError> {
        DateStyle::parse(&self.date_format).ok_or_else(|| ConfigError::ValidationError {
            message: format!("ui.date_format '{}' is not a valid pattern", self.date_format),
        })
    }
}
