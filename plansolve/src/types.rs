//! Core data types: the planning input pair, parsed action steps, and plans.

use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two textual halves of a declarative planning problem.
///
/// Owned by the caller for the duration of a solve call; the local strategy
/// additionally serializes both texts to scratch files for the planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanningInput {
    pub domain: String,
    pub problem: String,
}

impl PlanningInput {
    pub fn new(domain: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            problem: problem.into(),
        }
    }

    /// Both texts must carry content. PDDL semantics are never inspected;
    /// both entry points run this before any network or process work.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.domain.trim().is_empty() {
            return Err(SolverError::InvalidInput(
                "domain text is empty".to_string(),
            ));
        }
        if self.problem.trim().is_empty() {
            return Err(SolverError::InvalidInput(
                "problem text is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One action instance with its bound arguments, in argument order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionStep {
    /// No current strategy emits concurrent steps; kept for wire compatibility.
    pub parallel: bool,
    pub action: String,
    pub args: Vec<String>,
}

impl ActionStep {
    pub fn new(action: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            parallel: false,
            action: action.into(),
            args,
        }
    }
}

impl fmt::Display for ActionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.action)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, ")")
    }
}

/// Ordered sequence of action steps; order is temporal execution order.
///
/// The empty plan is a valid, meaningful result ("no plan could be
/// produced"), never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Plan {
    steps: Vec<ActionStep>,
}

impl Plan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[ActionStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionStep> {
        self.steps.iter()
    }
}

impl From<Vec<ActionStep>> for Plan {
    fn from(steps: Vec<ActionStep>) -> Self {
        Self { steps }
    }
}

impl IntoIterator for Plan {
    type Item = ActionStep;
    type IntoIter = std::vec::IntoIter<ActionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a ActionStep;
    type IntoIter = std::slice::Iter<'a, ActionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
