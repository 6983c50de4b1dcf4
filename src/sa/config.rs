//! SA configuration.

use crate::error::SearchError;
use crate::search::{SearchBudget, Start};

/// Configuration for [`super::SaRunner`].
///
/// The initial temperature has no sensible universal default — it depends
/// on the cost scale of the instance — so it is a required constructor
/// argument, normally obtained from
/// [`super::estimate_initial_temperature`].
///
/// # Examples
///
/// ```
/// use qap_search::sa::SaConfig;
/// use qap_search::search::SearchBudget;
///
/// let config = SaConfig::new(250.0)
///     .with_cooling_factor(0.8)
///     .with_budget(SearchBudget::evaluations(100_000))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more degradations.
    pub initial_temperature: f64,
    /// Geometric cooling factor in (0, 1), applied once per epoch.
    pub cooling_factor: f64,
    /// Stopping budget.
    pub budget: SearchBudget,
    /// Starting permutation policy.
    pub start: Start,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl SaConfig {
    /// Creates a configuration with the given initial temperature.
    pub fn new(initial_temperature: f64) -> Self {
        Self {
            initial_temperature,
            cooling_factor: 0.8,
            budget: SearchBudget::default(),
            start: Start::default(),
            seed: None,
        }
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(SearchError::InvalidConfig(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        Ok(())
    }
}
