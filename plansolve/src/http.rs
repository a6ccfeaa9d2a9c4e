//! Bounded-timeout HTTP fetcher.

use crate::error::SolverError;
use reqwest::{Client, Response};
use std::time::Duration;

/// Wraps one outbound request with an enforced wall-clock timeout.
///
/// The timeout cancels the in-flight request; reqwest tears the connection
/// down on every completion path. The fetcher returns the raw response
/// without interpreting status codes and never retries — both are the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout_ms: u64,
}

impl HttpFetcher {
    pub fn new(timeout_ms: u64) -> Result<Self, SolverError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| SolverError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, timeout_ms })
    }

    pub async fn get(&self, url: &str) -> Result<Response, SolverError> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| SolverError::from_reqwest(e, self.timeout_ms))
    }

    pub async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<Response, SolverError> {
        self.client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| SolverError::from_reqwest(e, self.timeout_ms))
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}
