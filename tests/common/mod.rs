//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use octofit::config::ServiceOrigin;
use octofit::fetch::{ResourceClient, TransportTimeouts};
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Find a port nothing listens on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Client pointed at `base_url` with short timeouts so failures surface fast.
pub fn client_for(base_url: &str) -> ResourceClient {
    let origin = ServiceOrigin::parse(base_url).expect("valid origin");
    ResourceClient::new(
        origin,
        TransportTimeouts {
            connect: Some(Duration::from_secs(2)),
            request: Some(Duration::from_secs(5)),
        },
    )
    .expect("client builds")
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
