//! Planning-solver orchestration.
//!
//! Resolves a PDDL planning problem (domain + problem text) into an ordered
//! sequence of action steps through one of two interchangeable strategies: a
//! remote strategy that delegates solving to a hosted service over HTTP, and
//! a local strategy that shells out to an installed planner executable. Both
//! strategies normalize their raw textual output through the same parser.
//!
//! The [`Solver`] facade is the entry point. Its `solve_*` methods never
//! fail: every internal error is logged and collapses into the empty plan.
//! The `try_solve_*` methods expose the typed error pipeline for callers
//! that need to distinguish "no plan exists" from "something broke".

pub mod config;
pub mod error;
pub mod gate;
pub mod http;
pub mod local;
pub mod parser;
pub mod remote;
pub mod solver;
pub mod types;

pub use config::{LocalPlannerConfig, RemoteSolverConfig, SolverConfig};
pub use error::SolverError;
pub use gate::{LogStatusSink, NoopStatusSink, PlannerGate, PlannerPermit, PlannerStatusSink};
pub use parser::parse_plan;
pub use solver::Solver;
pub use types::{ActionStep, Plan, PlanningInput};
