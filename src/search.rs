//! The contract shared by every search strategy.
//!
//! All strategies run the same outer shape: seed a starting permutation
//! and its full cost, then repeatedly evaluate candidate moves under a
//! [`SearchBudget`], and return a [`SearchOutcome`] that is valid whether
//! the run converged or was cut off mid-scan. The budget is polled at most
//! once per candidate evaluation, so a run can overshoot its wall-clock
//! limit by at most one evaluation.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::construct::greedy_assignment;
use crate::cost::Cost;
use crate::error::SearchError;
use crate::instance::QapInstance;
use crate::perm::Permutation;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The strategy's own policy ran out of moves (local optimum, or an
    /// improvement-free epoch).
    Converged,
    /// The budget fired: wall-clock limit, evaluation cap, or a
    /// strategy-internal attempt cutoff. The outcome still holds the best
    /// state reached.
    TimedOut,
}

/// Stopping budget: an optional wall-clock limit and an optional cap on
/// candidate evaluations (0 = uncapped).
///
/// The evaluation cap exists so tests and experiments can terminate
/// deterministically; wall-clock limits are the normal way to compare
/// strategies. An entirely unlimited budget is valid for the convergent
/// strategies but will never stop `TabuRunner`, which has no convergence
/// test by design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    /// Wall-clock limit, measured from the start of the run.
    pub time_limit: Option<Duration>,
    /// Cap on candidate evaluations; 0 means no cap.
    pub max_evaluations: usize,
}

impl SearchBudget {
    /// No limit of either kind.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Budget of `limit` wall-clock time.
    pub fn time_limit(limit: Duration) -> Self {
        Self::default().with_time_limit(limit)
    }

    /// Budget of `max` candidate evaluations.
    pub fn evaluations(max: usize) -> Self {
        Self::default().with_max_evaluations(max)
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the evaluation cap.
    pub fn with_max_evaluations(mut self, max: usize) -> Self {
        self.max_evaluations = max;
        self
    }
}

/// Live budget tracking for one run: the deadline is fixed once at start
/// and polled per candidate evaluation.
pub(crate) struct BudgetMeter {
    deadline: Option<Instant>,
    max_evaluations: usize,
    evaluations: usize,
}

impl BudgetMeter {
    pub(crate) fn start(budget: &SearchBudget) -> Self {
        Self {
            deadline: budget.time_limit.map(|limit| Instant::now() + limit),
            max_evaluations: budget.max_evaluations,
            evaluations: 0,
        }
    }

    /// Records one candidate evaluation (or sampling attempt) and reports
    /// whether the budget is now exhausted.
    pub(crate) fn tick(&mut self) -> bool {
        self.evaluations += 1;
        if self.max_evaluations > 0 && self.evaluations >= self.max_evaluations {
            return true;
        }
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }
}

/// How a strategy obtains its starting permutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Start {
    /// A fresh uniformly random permutation.
    #[default]
    Random,
    /// The deterministic constructive heuristic
    /// ([`crate::construct::greedy_assignment`]).
    Constructive,
    /// A caller-supplied permutation; must match the instance dimension.
    Fixed(Permutation),
}

impl Start {
    /// Produces the starting permutation for `instance`.
    pub(crate) fn resolve(
        &self,
        instance: &QapInstance,
        rng: &mut StdRng,
    ) -> Result<Permutation, SearchError> {
        match self {
            Start::Random => Ok(Permutation::random(instance.size(), rng)),
            Start::Constructive => Ok(greedy_assignment(instance)),
            Start::Fixed(perm) => {
                if perm.len() != instance.size() {
                    return Err(SearchError::InvalidConfig(format!(
                        "fixed start has {} positions but the instance has {}",
                        perm.len(),
                        instance.size()
                    )));
                }
                Ok(perm.clone())
            }
        }
    }
}

/// Result of one strategy run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best permutation found. For `RandomSearch` this is the last
    /// permutation sampled — that strategy deliberately tracks nothing.
    pub best: Permutation,
    /// Cost of `best`; always equal to `full_cost(&best)`.
    pub best_cost: Cost,
    /// Full cost of the starting permutation, kept as a baseline for
    /// reporting improvement.
    pub initial_cost: Cost,
    /// Accepted (applied) moves, per the strategy's own counting policy.
    pub steps: usize,
    /// Candidate evaluations (or samples) charged against the budget.
    pub evaluations: usize,
    /// Whether the run converged or the budget fired.
    pub termination: Termination,
}

/// Builds the per-run RNG: seeded deterministically when the config asks
/// for it, from entropy otherwise.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::tests::golden;

    #[test]
    fn test_budget_builders() {
        let budget = SearchBudget::time_limit(Duration::from_secs(3)).with_max_evaluations(100);
        assert_eq!(budget.time_limit, Some(Duration::from_secs(3)));
        assert_eq!(budget.max_evaluations, 100);
        assert_eq!(SearchBudget::unlimited(), SearchBudget::default());
    }

    #[test]
    fn test_meter_counts_and_caps_evaluations() {
        let mut meter = BudgetMeter::start(&SearchBudget::evaluations(3));
        assert!(!meter.tick());
        assert!(!meter.tick());
        assert!(meter.tick());
        assert_eq!(meter.evaluations(), 3);
    }

    #[test]
    fn test_meter_unlimited_never_fires() {
        let mut meter = BudgetMeter::start(&SearchBudget::unlimited());
        for _ in 0..10_000 {
            assert!(!meter.tick());
        }
    }

    #[test]
    fn test_meter_zero_duration_fires_immediately() {
        let mut meter = BudgetMeter::start(&SearchBudget::time_limit(Duration::ZERO));
        assert!(meter.tick());
    }

    #[test]
    fn test_start_fixed_rejects_wrong_dimension() {
        let instance = golden();
        let mut rng = rng_from_seed(Some(1));
        let start = Start::Fixed(Permutation::identity(3));
        assert!(start.resolve(&instance, &mut rng).is_err());
    }

    #[test]
    fn test_start_constructive_is_deterministic() {
        let instance = golden();
        let mut rng = rng_from_seed(Some(1));
        let a = Start::Constructive.resolve(&instance, &mut rng).unwrap();
        let b = Start::Constructive.resolve(&instance, &mut rng).unwrap();
        assert_eq!(a, b);
    }
}
