//! Planner configuration.

use super::filter::RideFilter;

/// Configuration parameters for a planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Maximum total cost of a selection (dollars).
    pub budget: f64,

    /// Filter applied to the catalog before selection.
    /// Keeps exhaustive search tractable.
    pub filter: RideFilter,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(budget: f64, filter: RideFilter) -> Self {
        Self { budget, filter }
    }

    /// Replace the budget.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            budget: 100.0,
            filter: RideFilter::default(),
        }
    }
}
