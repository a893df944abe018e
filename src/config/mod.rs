//! Client configuration: TOML file, environment and CLI overrides.

mod loader;
mod origin;
mod types;

pub use loader::ConfigError;
pub use origin::{OriginOverrides, ServiceOrigin, CODESPACE_ENV, ORIGIN_ENV};
pub use types::{Config, ServiceConfig, UiConfig};
