//! Descent execution loops.

use crate::cost::Cost;
use crate::error::SearchError;
use crate::instance::QapInstance;
use crate::neighborhood::{Move, SwapNeighborhood};
use crate::perm::Permutation;
use crate::search::{rng_from_seed, BudgetMeter, SearchOutcome, Termination};

use super::config::DescentConfig;

/// First-improvement descent.
///
/// Scans moves in canonical order and applies the first one that strictly
/// reduces the cost, then restarts the scan from the top. Every accepted
/// move improves the cost, so the final permutation is also the best one
/// seen.
pub struct GreedyDescent;

impl GreedyDescent {
    /// Descends until no improving move remains or the budget fires.
    pub fn run(
        instance: &QapInstance,
        config: &DescentConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let hood = SwapNeighborhood::new(instance.size())?;
        let mut rng = rng_from_seed(config.seed);
        let mut meter = BudgetMeter::start(&config.budget);

        let mut current = config.start.resolve(instance, &mut rng)?;
        let mut cost = instance.full_cost(&current);
        let initial_cost = cost;
        let mut steps = 0;

        loop {
            let mut improved = false;
            'scan: for mv in hood.moves() {
                if meter.tick() {
                    return Ok(outcome(
                        current,
                        cost,
                        initial_cost,
                        steps,
                        &meter,
                        Termination::TimedOut,
                    ));
                }
                let candidate = current.swapped(mv);
                let candidate_cost = instance.swap_cost(cost, &current, &candidate, mv);
                if candidate_cost < cost {
                    current = candidate;
                    cost = candidate_cost;
                    debug_assert_eq!(cost, instance.full_cost(&current));
                    steps += 1;
                    improved = true;
                    break 'scan;
                }
            }
            if !improved {
                break;
            }
        }

        Ok(outcome(
            current,
            cost,
            initial_cost,
            steps,
            &meter,
            Termination::Converged,
        ))
    }
}

/// Best-improvement descent.
///
/// Each iteration scans the entire neighborhood, tracking the move with
/// the lowest resulting cost, and applies it if it strictly improves on
/// the current cost. Ties break toward the earliest move in canonical
/// order.
pub struct SteepestDescent;

impl SteepestDescent {
    /// Descends until a full scan yields no strict improvement or the
    /// budget fires.
    pub fn run(
        instance: &QapInstance,
        config: &DescentConfig,
    ) -> Result<SearchOutcome, SearchError> {
        let hood = SwapNeighborhood::new(instance.size())?;
        let mut rng = rng_from_seed(config.seed);
        let mut meter = BudgetMeter::start(&config.budget);

        let mut current = config.start.resolve(instance, &mut rng)?;
        let mut cost = instance.full_cost(&current);
        let initial_cost = cost;
        let mut steps = 0;

        loop {
            let mut best_move: Option<Move> = None;
            let mut best_move_cost = cost;
            for mv in hood.moves() {
                if meter.tick() {
                    return Ok(outcome(
                        current,
                        cost,
                        initial_cost,
                        steps,
                        &meter,
                        Termination::TimedOut,
                    ));
                }
                let candidate = current.swapped(mv);
                let candidate_cost = instance.swap_cost(cost, &current, &candidate, mv);
                if candidate_cost < best_move_cost {
                    best_move_cost = candidate_cost;
                    best_move = Some(mv);
                }
            }
            match best_move {
                Some(mv) => {
                    current.apply(mv);
                    cost = best_move_cost;
                    debug_assert_eq!(cost, instance.full_cost(&current));
                    steps += 1;
                }
                None => break,
            }
        }

        Ok(outcome(
            current,
            cost,
            initial_cost,
            steps,
            &meter,
            Termination::Converged,
        ))
    }
}

fn outcome(
    best: Permutation,
    best_cost: Cost,
    initial_cost: Cost,
    steps: usize,
    meter: &BudgetMeter,
    termination: Termination,
) -> SearchOutcome {
    SearchOutcome {
        best,
        best_cost,
        initial_cost,
        steps,
        evaluations: meter.evaluations(),
        termination,
    }
}
