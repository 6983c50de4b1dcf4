//! Tabu Search configuration.

use crate::search::{SearchBudget, Start};

/// Configuration for [`super::TabuRunner`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use qap_search::tabu::TabuConfig;
/// use qap_search::search::SearchBudget;
///
/// let config = TabuConfig::default()
///     .with_tenure(5)
///     .with_budget(SearchBudget::time_limit(Duration::from_secs(10)))
///     .with_seed(42);
/// assert_eq!(config.tenure, 5);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Iterations an applied move stays forbidden.
    pub tenure: u32,
    /// Stopping budget. Tabu search never converges on its own; an
    /// unlimited budget runs forever.
    pub budget: SearchBudget,
    /// Starting permutation policy.
    pub start: Start,
    /// Random seed (None for entropy). Only consumed by a random start.
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tenure: 5,
            budget: SearchBudget::default(),
            start: Start::default(),
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tenure (iterations a move remains forbidden).
    pub fn with_tenure(mut self, tenure: u32) -> Self {
        self.tenure = tenure;
        self
    }

    /// Sets the stopping budget.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the starting permutation policy.
    pub fn with_start(mut self, start: Start) -> Self {
        self.start = start;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
