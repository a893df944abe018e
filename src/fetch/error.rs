//! Fetch failure taxonomy.
//!
//! Every variant collapses into `FetchResult::Failed`; the kind is kept so
//! callers can branch without parsing the message.

use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection refused, timeout, or a body that could not be read.
    #[error("{}", describe(.0))]
    Transport(reqwest::Error),

    /// Non-2xx response. The wording is relied on by existing consumers.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// Body is not valid JSON, or items do not match the expected shape.
    #[error("{0}")]
    Parse(String),

    /// Body is neither a list nor an object carrying `results`.
    #[error("Unexpected response envelope: expected a list or an object with `results`, got {shape}")]
    Envelope { shape: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    HttpStatus { status: u16 },
    Parse,
    Configuration,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::HttpStatus { status } => FetchErrorKind::HttpStatus { status: *status },
            FetchError::Parse(_) | FetchError::Envelope { .. } => FetchErrorKind::Parse,
            FetchError::Configuration(_) => FetchErrorKind::Configuration,
        }
    }
}

/// reqwest's own message plus its causes, e.g. "... : tcp connect error: Connection refused".
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
