use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::{ServiceConfig, ServiceOrigin};
use crate::fetch::envelope::normalize;
use crate::fetch::FetchError;
use crate::resource::ResourceEndpointConfig;

/// Optional transport timeouts. `None` leaves reqwest's default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportTimeouts {
    pub connect: Option<Duration>,
    pub request: Option<Duration>,
}

impl From<&ServiceConfig> for TransportTimeouts {
    fn from(service: &ServiceConfig) -> Self {
        Self {
            connect: service.connect_timeout(),
            request: service.request_timeout(),
        }
    }
}

/// HTTP access to the REST service. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: Client,
    origin: ServiceOrigin,
}

impl ResourceClient {
    pub fn new(origin: ServiceOrigin, timeouts: TransportTimeouts) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(connect) = timeouts.connect {
            builder = builder.connect_timeout(connect);
        }
        if let Some(request) = timeouts.request {
            builder = builder.timeout(request);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, origin })
    }

    pub fn origin(&self) -> &ServiceOrigin {
        &self.origin
    }

    /// One GET against `endpoint`, normalized and decoded into items.
    pub async fn fetch_items<T: DeserializeOwned>(
        &self,
        endpoint: &ResourceEndpointConfig,
    ) -> Result<Vec<T>, FetchError> {
        let url = endpoint.url(&self.origin)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        let list = normalize(value)?;
        serde_json::from_value(list).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
