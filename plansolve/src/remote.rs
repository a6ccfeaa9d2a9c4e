//! Remote strategy: job submission plus fixed-cadence result polling.

use crate::config::RemoteSolverConfig;
use crate::error::SolverError;
use crate::http::HttpFetcher;
use crate::types::PlanningInput;
use log::{debug, warn};
use tokio::time::{sleep, Duration};

/// One poll against a submitted job.
enum PollOutcome {
    /// The job has not finished; try again.
    Pending,
    /// The job finished; the payload may still carry no plan text.
    Ready(Option<String>),
}

/// Client for the hosted solving service.
///
/// Reentrant: every solve call owns its own polling handle, so concurrent
/// callers need no serialization here.
#[derive(Debug)]
pub struct RemoteSolver {
    config: RemoteSolverConfig,
    fetcher: HttpFetcher,
}

impl RemoteSolver {
    pub fn new(config: RemoteSolverConfig) -> Result<Self, SolverError> {
        let fetcher = HttpFetcher::new(config.request_timeout_ms)?;
        Ok(Self { config, fetcher })
    }

    /// Submit the problem for solving. Returns the polling handle, or `None`
    /// when the service yields no usable handle — not itself a failure, it
    /// propagates upward as "no plan".
    pub async fn submit(&self, input: &PlanningInput) -> Result<Option<String>, SolverError> {
        let url = format!("{}/package/lama-first/solve", self.config.base_url);
        let payload = serde_json::json!({
            "domain": input.domain,
            "problem": input.problem,
            "number_of_plans": 1,
        });
        debug!("submitting planning problem to {}", url);

        let response = self.fetcher.post_json(&url, &payload).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SolverError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .map(|body| service_message(&body))
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SolverError::Service(format!(
                "submission failed with HTTP {}: {}",
                status.as_u16(),
                message
            )));
        }

        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| SolverError::Service(format!("malformed submission response: {}", e)))?;
        if body["status"].as_str() == Some("error") {
            return Err(SolverError::Service(service_message(&body)));
        }

        Ok(body["result"]
            .as_str()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string()))
    }

    /// Poll the handle returned by [`submit`](Self::submit) until the job
    /// leaves PENDING or the attempt budget runs out.
    ///
    /// The inter-attempt delay is fixed on purpose; the hosted service
    /// expects this cadence. Failed attempts are recorded and retried;
    /// spending the whole budget observing PENDING is a legal outcome and
    /// still counts as exhaustion.
    pub async fn poll(&self, handle: &str) -> Result<Option<String>, SolverError> {
        let url = format!("{}{}", self.config.base_url, handle);
        let attempts = self.config.max_poll_attempts;
        let mut last_error: Option<String> = None;

        for attempt in 1..=attempts {
            sleep(Duration::from_millis(self.config.poll_interval_ms)).await;
            match self.poll_once(&url).await {
                Ok(PollOutcome::Ready(text)) => return Ok(text),
                Ok(PollOutcome::Pending) => {
                    debug!("poll attempt {}/{}: still pending", attempt, attempts);
                }
                Err(e) => {
                    warn!("poll attempt {}/{} failed: {}", attempt, attempts, e);
                    last_error = Some(e.to_string());
                }
            }
        }

        Err(SolverError::PollExhausted {
            attempts,
            last_error,
        })
    }

    /// Submission followed by polling; `None` at either stage means "no plan".
    pub async fn solve(&self, input: &PlanningInput) -> Result<Option<String>, SolverError> {
        match self.submit(input).await? {
            Some(handle) => self.poll(&handle).await,
            None => Ok(None),
        }
    }

    async fn poll_once(&self, url: &str) -> Result<PollOutcome, SolverError> {
        let response = self.fetcher.get(url).await?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SolverError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SolverError::Service(format!(
                "poll failed with HTTP {}",
                status.as_u16()
            )));
        }
        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| SolverError::Service(format!("malformed poll response: {}", e)))?;
        match body["status"].as_str() {
            Some("error") => Err(SolverError::Service(service_message(&body))),
            Some("PENDING") => Ok(PollOutcome::Pending),
            _ => Ok(PollOutcome::Ready(
                body.pointer("/result/output/sas_plan")
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string()),
            )),
        }
    }
}

/// Service-reported message at `result.error`, falling back to
/// "Unknown error".
fn service_message(body: &serde_json::Value) -> String {
    body.pointer("/result/error")
        .and_then(|e| e.as_str())
        .unwrap_or("Unknown error")
        .to_string()
}
