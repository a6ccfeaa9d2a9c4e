//! Error taxonomy for the solving pipeline.
//!
//! Internal helpers return these typed errors upward with `?`; only the
//! outermost `solve_*` entry points swallow them into the empty plan.

use thiserror::Error;

/// Error type shared by both solving strategies.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Domain or problem text failed validation before any work began.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A single network call exceeded its wall-clock budget.
    #[error("request timed out after {ms} ms")]
    Timeout { ms: u64 },
    /// Network-layer failure below HTTP semantics.
    #[error("transport error: {0}")]
    Transport(String),
    /// Service-reported failure, non-success HTTP status, or malformed body.
    #[error("solver service error: {0}")]
    Service(String),
    /// The polling budget ran out without the job leaving PENDING.
    #[error("polling exhausted after {attempts} attempts (last error: {})", last_error.as_deref().unwrap_or("none"))]
    PollExhausted {
        attempts: u32,
        last_error: Option<String>,
    },
    /// Spawn, kill, or file failure in the local strategy.
    #[error("local planner error: {0}")]
    Process(String),
}

impl From<std::io::Error> for SolverError {
    fn from(e: std::io::Error) -> Self {
        SolverError::Process(e.to_string())
    }
}

impl SolverError {
    /// Map a reqwest failure, distinguishing deadline expiry from other
    /// transport faults.
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_ms: u64) -> Self {
        if e.is_timeout() {
            SolverError::Timeout { ms: timeout_ms }
        } else {
            SolverError::Transport(e.to_string())
        }
    }
}
