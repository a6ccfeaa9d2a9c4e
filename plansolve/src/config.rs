//! Configuration for both solving strategies.
//!
//! Every field has a default and is optional in TOML files, so a config
//! file only needs to name what it overrides.

use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Hosted solving service used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://solver.planning.domains:5001";

/// Remote-strategy configuration: service endpoint and polling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSolverConfig {
    /// Base URL of the hosted solving service.
    pub base_url: String,
    /// Wall-clock budget for a single HTTP request, in milliseconds.
    pub request_timeout_ms: u64,
    /// How many polls to attempt before giving up on a submitted job.
    pub max_poll_attempts: u32,
    /// Fixed delay between polls, in milliseconds. The service expects this
    /// cadence; it is deliberately not a backoff.
    pub poll_interval_ms: u64,
}

impl Default for RemoteSolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 8000,
            max_poll_attempts: 10,
            poll_interval_ms: 100,
        }
    }
}

impl RemoteSolverConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    pub fn with_max_poll_attempts(mut self, attempts: u32) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }
}

/// Local-strategy configuration: planner executable, scratch dir, deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalPlannerConfig {
    /// Planner executable name or path.
    pub executable: String,
    /// Directory holding the scratch PDDL files; also the planner's working
    /// directory, so its relative `sas_plan` output lands here too.
    pub scratch_dir: PathBuf,
    /// Wall-clock deadline for one planner run, in milliseconds. The process
    /// group is killed when it elapses.
    pub run_timeout_ms: u64,
}

impl Default for LocalPlannerConfig {
    fn default() -> Self {
        Self {
            executable: "fast-downward".to_string(),
            scratch_dir: PathBuf::from("/tmp"),
            run_timeout_ms: 3000,
        }
    }
}

impl LocalPlannerConfig {
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn with_run_timeout_ms(mut self, ms: u64) -> Self {
        self.run_timeout_ms = ms;
        self
    }
}

/// Aggregate configuration for the [`Solver`](crate::Solver) facade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub remote: RemoteSolverConfig,
    pub local: LocalPlannerConfig,
}

impl SolverConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, SolverError> {
        toml::from_str(raw).map_err(|e| SolverError::InvalidInput(format!("bad config: {}", e)))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SolverError::InvalidInput(format!("cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }
}
