use reqwest::Url;

use crate::config::ServiceOrigin;
use crate::fetch::FetchError;

/// Static description of one REST collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEndpointConfig {
    pub name: String,
    /// Always `/api/<name>/`.
    pub path: String,
}

impl ResourceEndpointConfig {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!("/api/{name}/");
        Self { name, path }
    }

    /// Full request URL: origin followed by the fixed path suffix.
    pub fn url(&self, origin: &ServiceOrigin) -> Result<Url, FetchError> {
        let raw = format!("{}{}", origin.as_str(), self.path);
        Url::parse(&raw).map_err(|e| {
            FetchError::Configuration(format!("invalid endpoint URL '{raw}': {e}"))
        })
    }
}
