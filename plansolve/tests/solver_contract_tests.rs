//! Public-contract tests: the gate notification protocol and the
//! never-fails boundary of the local entry point.

use plansolve::config::{LocalPlannerConfig, SolverConfig};
use plansolve::{PlannerStatusSink, PlanningInput, Solver};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct RecordingSink {
    events: Mutex<Vec<bool>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<bool> {
        self.events.lock().unwrap().clone()
    }
}

impl PlannerStatusSink for RecordingSink {
    fn planner_status(&self, busy: bool) {
        self.events.lock().unwrap().push(busy);
    }
}

fn broken_local_solver(sink: Arc<RecordingSink>) -> Solver {
    let config = SolverConfig {
        local: LocalPlannerConfig::default().with_executable("/nonexistent/planner"),
        ..SolverConfig::default()
    };
    Solver::with_status_sink(config, sink).unwrap()
}

#[tokio::test]
async fn validation_failure_never_touches_the_gate() {
    let sink = Arc::new(RecordingSink::default());
    let solver = broken_local_solver(sink.clone());

    let plan = solver
        .solve_local(&PlanningInput::new("", "(define (problem p))"))
        .await;
    assert!(plan.is_empty());
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn spawn_failure_still_releases_the_gate_and_returns_empty_plan() {
    let sink = Arc::new(RecordingSink::default());
    let solver = broken_local_solver(sink.clone());

    let input = PlanningInput::new("(define (domain d))", "(define (problem p))");
    let plan = solver.solve_local(&input).await;
    assert!(plan.is_empty());
    assert_eq!(sink.events(), vec![true, false]);

    // The gate is reusable after a failed run.
    let plan = solver.solve_local(&input).await;
    assert!(plan.is_empty());
    assert_eq!(sink.events(), vec![true, false, true, false]);
}
