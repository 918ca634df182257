//! Validation outcome aggregation.
//!
//! The suite records every check it runs and carries on past failures, so
//! a single report shows everything that is wrong, not just the first
//! broken invariant.

use std::fmt;

use serde::Serialize;

/// Outcome of a single validation check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// Short check identifier, e.g. "hull_reference_call".
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable detail: observed vs expected values.
    pub detail: String,
}

impl CheckOutcome {
    /// Creates an outcome.
    pub fn new(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

/// Collected outcomes of a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Every outcome, in execution order.
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an outcome.
    pub fn record(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// True when every recorded check passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// The failed outcomes.
    pub fn failures(&self) -> Vec<&CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            writeln!(f, "[{status}] {}: {}", outcome.name, outcome.detail)?;
        }
        write!(
            f,
            "{}/{} checks passed",
            self.outcomes.iter().filter(|o| o.passed).count(),
            self.outcomes.len()
        )
    }
}
