//! Fetches the A&E waiting-time feed, falling back to a bundled snapshot.

use thiserror::Error;

use crate::config::FeedConfig;

use super::types::WaitTimeFeed;

/// Last-known-good payload shipped with the binary, used when the remote
/// feed is unreachable.
const FALLBACK_SNAPSHOT: &str = include_str!("../../resources/ae_snapshot.json");

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Cannot reach waiting-time feed at {0}")]
    Connection(String),

    #[error("Waiting-time request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Waiting-time feed returned status {0}")]
    Status(u16),

    #[error("Malformed feed payload: {0}")]
    Parse(String),
}

pub struct WaitTimeClient {
    url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl WaitTimeClient {
    pub fn new(config: &FeedConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            url: config.url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: config.timeout_secs,
        }
    }

    /// Latest feed, preferring the remote endpoint.
    ///
    /// Remote failures are logged and degrade to the bundled snapshot; only
    /// when that is unusable too does this return `None`, leaving the caller
    /// to skip the cycle.
    pub fn fetch_latest(&self) -> Option<WaitTimeFeed> {
        match self.fetch_remote() {
            Ok(feed) => Some(feed),
            Err(e) => {
                tracing::warn!(error = %e, "Remote A&E feed unavailable, using bundled snapshot");
                load_fallback_snapshot()
            }
        }
    }

    fn fetch_remote(&self) -> Result<WaitTimeFeed, FeedError> {
        let response = self.client.get(&self.url).send().map_err(|e| {
            if e.is_connect() {
                FeedError::Connection(self.url.clone())
            } else if e.is_timeout() {
                FeedError::Timeout(self.timeout_secs)
            } else {
                FeedError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        response
            .json::<WaitTimeFeed>()
            .map_err(|e| FeedError::Parse(e.to_string()))
    }
}

/// Parse the bundled snapshot. Returns `None` if the resource itself is
/// malformed, which should only happen if the bundled file was edited.
fn load_fallback_snapshot() -> Option<WaitTimeFeed> {
    match serde_json::from_str::<WaitTimeFeed>(FALLBACK_SNAPSHOT) {
        Ok(feed) => Some(feed),
        Err(e) => {
            tracing::error!(error = %e, "Bundled A&E snapshot is unreadable");
            None
        }
    }
}
