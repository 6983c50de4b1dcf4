//! Baseline execution loops.

use crate::error::SearchError;
use crate::instance::QapInstance;
use crate::perm::{random_move, Permutation};
use crate::search::{rng_from_seed, BudgetMeter, SearchOutcome, Termination};

use super::config::RandomConfig;

/// Pure random sampling.
///
/// Each iteration draws a brand-new uniform permutation. The outcome
/// reports the *last* permutation sampled, not the best one seen — the
/// strategy is a deliberately memoryless floor for comparisons, and its
/// `initial_cost` therefore equals its `best_cost`.
pub struct RandomSearch;

impl RandomSearch {
    /// Samples permutations until the budget fires.
    ///
    /// At least one permutation is always sampled, so a zero budget still
    /// returns a valid assignment.
    pub fn run(
        instance: &QapInstance,
        config: &RandomConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let n = instance.size();
        let mut rng = rng_from_seed(config.seed);
        let mut meter = BudgetMeter::start(&config.budget);

        let mut current;
        let mut steps = 0;
        loop {
            current = Permutation::random(n, &mut rng);
            steps += 1;
            if meter.tick() {
                break;
            }
        }

        let cost = instance.full_cost(&current);
        Ok(SearchOutcome {
            best: current,
            best_cost: cost,
            initial_cost: cost,
            steps,
            evaluations: meter.evaluations(),
            termination: Termination::TimedOut,
        })
    }
}

/// Unbiased random walk over the swap neighborhood.
///
/// Starts from a random permutation and applies one random swap per
/// iteration, unconditionally; no cost is evaluated inside the loop.
pub struct RandomWalk;

impl RandomWalk {
    /// Walks until the budget fires.
    pub fn run(
        instance: &QapInstance,
        config: &RandomConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let n = instance.size();
        let mut rng = rng_from_seed(config.seed);
        let mut meter = BudgetMeter::start(&config.budget);

        let mut current = Permutation::random(n, &mut rng);
        let initial_cost = instance.full_cost(&current);
        let mut steps = 0;
        loop {
            current.apply(random_move(n, &mut rng));
            steps += 1;
            if meter.tick() {
                break;
            }
        }

        let cost = instance.full_cost(&current);
        Ok(SearchOutcome {
            best: current,
            best_cost: cost,
            initial_cost,
            steps,
            evaluations: meter.evaluations(),
            termination: Termination::TimedOut,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::tests::golden;
    use crate::search::SearchBudget;
    use std::time::Duration;

    #[test]
    fn test_random_search_respects_evaluation_cap() {
        let instance = golden();
        let config = RandomConfig::default()
            .with_budget(SearchBudget::evaluations(50))
            .with_seed(42);

        let outcome = RandomSearch::run(&instance, &config).unwrap();

        assert_eq!(outcome.steps, 50);
        assert_eq!(outcome.evaluations, 50);
        assert_eq!(outcome.termination, Termination::TimedOut);
    }

    #[test]
    fn test_random_search_zero_budget_still_samples_once() {
        let instance = golden();
        let config = RandomConfig::default()
            .with_budget(SearchBudget::time_limit(Duration::ZERO))
            .with_seed(42);

        let outcome = RandomSearch::run(&instance, &config).unwrap();

        assert_eq!(outcome.steps, 1);
        assert_eq!(outcome.best.len(), 4);
    }

    #[test]
    fn test_random_search_reports_cost_of_returned_permutation() {
        let instance = golden();
        let config = RandomConfig::default()
            .with_budget(SearchBudget::evaluations(10))
            .with_seed(7);

        let outcome = RandomSearch::run(&instance, &config).unwrap();

        assert_eq!(outcome.best_cost, instance.full_cost(&outcome.best));
        assert_eq!(outcome.initial_cost, outcome.best_cost);
    }

    #[test]
    fn test_random_search_is_seed_deterministic() {
        let instance = golden();
        let config = RandomConfig::default()
            .with_budget(SearchBudget::evaluations(25))
            .with_seed(99);

        let a = RandomSearch::run(&instance, &config).unwrap();
        let b = RandomSearch::run(&instance, &config).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
    }

    #[test]
    fn test_random_walk_preserves_bijection() {
        let instance = golden();
        let config = RandomConfig::default()
            .with_budget(SearchBudget::evaluations(200))
            .with_seed(42);

        let outcome = RandomWalk::run(&instance, &config).unwrap();

        assert_eq!(outcome.steps, 200);
        assert!(Permutation::from_vec(outcome.best.as_slice().to_vec()).is_ok());
        assert_eq!(outcome.best_cost, instance.full_cost(&outcome.best));
    }

    #[test]
    fn test_random_walk_counts_every_swap() {
        let instance = golden();
        let config = RandomConfig::default()
            .with_budget(SearchBudget::evaluations(13))
            .with_seed(1);

        let outcome = RandomWalk::run(&instance, &config).unwrap();

        assert_eq!(outcome.steps, outcome.evaluations);
    }
}
