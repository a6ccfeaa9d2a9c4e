//! Local strategy: scratch files, planner child process, deadline kill.

use crate::config::LocalPlannerConfig;
use crate::error::SolverError;
use crate::types::PlanningInput;
use log::{debug, warn};
use std::process::Stdio;
use tokio::fs;
use tokio::process::{Child, Command};
use tokio::time::{timeout, Duration};

/// Scratch file holding the domain text.
pub const DOMAIN_FILE: &str = "domain.pddl";
/// Scratch file holding the problem text.
pub const PROBLEM_FILE: &str = "problem.pddl";
/// File the planner writes its plan to, relative to its working directory.
pub const PLAN_FILE: &str = "sas_plan";

/// Runs the installed planner executable against scratch PDDL files.
///
/// The scratch files and the `sas_plan` output are shared, non-reentrant
/// paths: callers must serialize runs through a
/// [`PlannerGate`](crate::gate::PlannerGate).
#[derive(Debug)]
pub struct LocalPlanner {
    config: LocalPlannerConfig,
}

impl LocalPlanner {
    pub fn new(config: LocalPlannerConfig) -> Self {
        Self { config }
    }

    /// Run the planner once. Returns the raw plan text, or `None` when no
    /// usable output was produced (missing or empty plan file, deadline
    /// expired before completion).
    pub async fn run(&self, input: &PlanningInput) -> Result<Option<String>, SolverError> {
        let scratch = &self.config.scratch_dir;
        fs::create_dir_all(scratch).await?;
        let domain_path = scratch.join(DOMAIN_FILE);
        let problem_path = scratch.join(PROBLEM_FILE);
        fs::write(&domain_path, input.domain.as_bytes()).await?;
        fs::write(&problem_path, input.problem.as_bytes()).await?;

        // Stdout/stderr stay attached to the orchestrator's own streams for
        // observability; the planner's working directory is the scratch dir
        // so its relative sas_plan output lands there.
        let mut command = Command::new(&self.config.executable);
        command
            .arg(&domain_path)
            .arg(&problem_path)
            .arg("--evaluator")
            .arg("hff=ff()")
            .arg("--search")
            .arg("lazy_greedy([hff], preferred=[hff])")
            .current_dir(scratch)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        #[cfg(unix)]
        command.process_group(0);

        let mut child = command.spawn().map_err(|e| {
            SolverError::Process(format!("failed to spawn {}: {}", self.config.executable, e))
        })?;

        let deadline = Duration::from_millis(self.config.run_timeout_ms);
        match timeout(deadline, child.wait()).await {
            Ok(Ok(status)) => debug!("planner exited with {}", status),
            Ok(Err(e)) => {
                return Err(SolverError::Process(format!(
                    "failed waiting for planner: {}",
                    e
                )))
            }
            Err(_) => {
                warn!(
                    "planner exceeded {} ms deadline, killing process group",
                    self.config.run_timeout_ms
                );
                kill_group(&mut child).await;
            }
        }

        match fs::read_to_string(scratch.join(PLAN_FILE)).await {
            Ok(text) if !text.trim().is_empty() => Ok(Some(text)),
            Ok(_) => Ok(None),
            Err(e) => {
                debug!("no plan file produced: {}", e);
                Ok(None)
            }
        }
    }
}

/// Kill the planner and everything it spawned. Failures are logged, never
/// fatal: the run already counts as producing no plan.
async fn kill_group(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        let rc = unsafe { libc::kill(-(pid as i32), libc::SIGKILL) };
        if rc != 0 {
            warn!(
                "kill of planner process group {} failed: {}",
                pid,
                std::io::Error::last_os_error()
            );
        }
    }
    // Also reaps the direct child.
    if let Err(e) = child.kill().await {
        warn!("kill of planner child failed: {}", e);
    }
}
