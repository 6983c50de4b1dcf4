//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Seed a starting permutation and its full cost.
//! 2. Within an epoch, run up to `L = n(n-1)/2` segment passes. Each pass
//!    scans the neighborhood in canonical order and stops at the first
//!    accepted move: improving moves are accepted outright, worsening
//!    moves with probability `exp(-Δ/T)` against a uniform draw in [0,1).
//! 3. After an epoch, multiply the temperature by the cooling factor. Stop
//!    when the epoch's final pass left the cost unchanged.
//!
//! A secondary cutoff ends the run after `(L/2)/2` consecutive candidate
//! evaluations without an acceptance; at that point the trajectory is
//! frozen and further scanning cannot make progress at the current
//! temperature.

use crate::error::SearchError;
use crate::instance::QapInstance;
use crate::neighborhood::SwapNeighborhood;
use crate::search::{rng_from_seed, BudgetMeter, SearchOutcome, Termination};
use rand::Rng;

use super::config::SaConfig;

/// Executes simulated annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on `instance` under `config`.
    ///
    /// Returns the best permutation seen over the whole trajectory, which
    /// may differ from the final (frozen) one.
    pub fn run(instance: &QapInstance, config: &SaConfig) -> Result<SearchOutcome, SearchError> {
        config.validate()?;
        let hood = SwapNeighborhood::new(instance.size())?;
        let mut rng = rng_from_seed(config.seed);
        let mut meter = BudgetMeter::start(&config.budget);

        let mut current = config.start.resolve(instance, &mut rng)?;
        let mut cost = instance.full_cost(&current);
        let initial_cost = cost;
        let mut best = current.clone();
        let mut best_cost = cost;

        let segment_length = hood.size();
        let attempt_cutoff = (segment_length / 2) / 2;
        let mut temperature = config.initial_temperature;
        let mut attempts = 0usize;
        let mut steps = 0usize;

        loop {
            let mut pass_start_cost = cost;
            for _ in 0..segment_length {
                pass_start_cost = cost;
                'scan: for mv in hood.moves() {
                    attempts += 1;
                    if meter.tick() || attempts >= attempt_cutoff {
                        return Ok(SearchOutcome {
                            best,
                            best_cost,
                            initial_cost,
                            steps,
                            evaluations: meter.evaluations(),
                            termination: Termination::TimedOut,
                        });
                    }
                    let candidate = current.swapped(mv);
                    let candidate_cost = instance.swap_cost(cost, &current, &candidate, mv);
                    let accept = if candidate_cost < cost {
                        true
                    } else {
                        let delta = (candidate_cost - cost) as f64;
                        rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                    };
                    if accept {
                        current = candidate;
                        cost = candidate_cost;
                        debug_assert_eq!(cost, instance.full_cost(&current));
                        steps += 1;
                        attempts = 0;
                        if cost < best_cost {
                            best_cost = cost;
                            best = current.clone();
                        }
                        break 'scan;
                    }
                }
            }
            temperature *= config.cooling_factor;
            if pass_start_cost == cost {
                break;
            }
        }

        Ok(SearchOutcome {
            best,
            best_cost,
            initial_cost,
            steps,
            evaluations: meter.evaluations(),
            termination: Termination::Converged,
        })
    }
}
