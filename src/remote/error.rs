//! Error types for the remote fetch client.

use thiserror::Error;

/// Errors that can occur while fetching users from the remote endpoint.
///
/// The display text of each variant is what ends up in the store's
/// `error` field, so `Http` renders exactly as `HTTP {status}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be completed (connectivity, DNS, TLS).
    #[error("{0}")]
    Transport(String),

    /// The request completed with a non-success status.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The response body was not a JSON array of user records.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl FetchError {
    /// Short classification used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Http { .. } => "http",
            FetchError::Decode(_) => "decode",
        }
    }
}
