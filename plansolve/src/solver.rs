//! Top-level orchestration facade over both solving strategies.

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::gate::{NoopStatusSink, PlannerGate, PlannerStatusSink};
use crate::local::LocalPlanner;
use crate::parser::parse_plan;
use crate::remote::RemoteSolver;
use crate::types::{Plan, PlanningInput};
use log::error;
use std::sync::Arc;

/// Entry point for solving planning problems.
///
/// The `try_solve_*` methods expose the typed pipeline; the `solve_*`
/// methods are the public best-effort boundary that never fails.
#[derive(Debug)]
pub struct Solver {
    remote: RemoteSolver,
    local: LocalPlanner,
    gate: Arc<PlannerGate>,
}

impl Solver {
    /// Build a solver that discards peer notifications.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        Self::with_status_sink(config, Arc::new(NoopStatusSink))
    }

    /// Build a solver announcing local-planner occupancy to the given sink.
    pub fn with_status_sink(
        config: SolverConfig,
        sink: Arc<dyn PlannerStatusSink>,
    ) -> Result<Self, SolverError> {
        Ok(Self {
            remote: RemoteSolver::new(config.remote)?,
            local: LocalPlanner::new(config.local),
            gate: Arc::new(PlannerGate::new(sink)),
        })
    }

    /// Typed remote pipeline: validate, submit, poll, parse. A missing
    /// handle or missing plan text short-circuits to the empty plan.
    pub async fn try_solve_remote(&self, input: &PlanningInput) -> Result<Plan, SolverError> {
        input.validate()?;
        match self.remote.solve(input).await? {
            Some(raw) => Ok(parse_plan(&raw).into()),
            None => Ok(Plan::empty()),
        }
    }

    /// Typed local pipeline: validate, acquire the gate, run, parse.
    ///
    /// Validation failures never touch the gate; once acquired, the permit
    /// is released on every exit path.
    pub async fn try_solve_local(&self, input: &PlanningInput) -> Result<Plan, SolverError> {
        input.validate()?;
        let _permit = self.gate.acquire().await;
        match self.local.run(input).await? {
            Some(raw) => Ok(parse_plan(&raw).into()),
            None => Ok(Plan::empty()),
        }
    }

    /// Best-effort remote solve. Never fails: errors are logged and collapse
    /// into the empty plan, which is deliberately indistinguishable from
    /// "no plan exists".
    pub async fn solve_remote(&self, input: &PlanningInput) -> Plan {
        match self.try_solve_remote(input).await {
            Ok(plan) => plan,
            Err(e) => {
                error!("remote solve failed: {}", e);
                Plan::empty()
            }
        }
    }

    /// Best-effort local solve; same empty-plan boundary as
    /// [`solve_remote`](Self::solve_remote).
    pub async fn solve_local(&self, input: &PlanningInput) -> Plan {
        match self.try_solve_local(input).await {
            Ok(plan) => plan,
            Err(e) => {
                error!("local solve failed: {}", e);
                Plan::empty()
            }
        }
    }
}
