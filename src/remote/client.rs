//! Fetch client for the remote user listing.

use std::sync::Arc;

use crate::users::RawUser;

use super::error::FetchError;
use super::transport::{HttpTransport, Transport};

/// Retrieves raw user records from a single configured address.
///
/// One request per call. No retries, no timeout, no caching.
#[derive(Clone)]
pub struct RemoteUsers {
    url: String,
    transport: Arc<dyn Transport>,
}

impl RemoteUsers {
    /// Client for `url` using the default HTTP transport.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_transport(url, Arc::new(HttpTransport::new()))
    }

    /// Client for `url` with a substituted transport.
    pub fn with_transport(url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the user list.
    pub async fn fetch_all(&self) -> Result<Vec<RawUser>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching users");

        let response = self.transport.get(&self.url).await?;

        if !response.is_success() {
            tracing::debug!(
                url = %self.url,
                status = response.status,
                "User fetch returned error status"
            );
            return Err(FetchError::Http {
                status: response.status,
            });
        }

        let users: Vec<RawUser> = serde_json::from_slice(&response.body)?;

        tracing::debug!(
            url = %self.url,
            status = response.status,
            count = users.len(),
            "Fetched users"
        );

        Ok(users)
    }
}
