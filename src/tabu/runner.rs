//! Tabu Search execution loop.
//!
//! # Algorithm
//!
//! Each iteration evaluates the entire swap neighborhood against the
//! current permutation, then applies exactly one move:
//!
//! 1. The lowest-cost move that strictly beats the best cost seen so far,
//!    regardless of its tabu status (an improving move is never blocked).
//! 2. Otherwise, the lowest-cost move that is not cooling down.
//! 3. Otherwise — every move forbidden and none improving — a fixed
//!    default move, positions (1, 2), as the escape of last resort
//!    (positions (0, 1) when the instance only has two facilities).
//!
//! The applied move's cooldown is set to the tenure after all positive
//! cooldowns have decayed by one. There is no convergence test; the run
//! ends only when the budget fires, and it reports the best permutation
//! observed along the trajectory.

use crate::cost::Cost;
use crate::error::SearchError;
use crate::instance::QapInstance;
use crate::neighborhood::{Move, SwapNeighborhood};
use crate::search::{rng_from_seed, BudgetMeter, SearchOutcome, Termination};

use super::config::TabuConfig;
use super::memory::TabuMemory;

/// Executes tabu search.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs tabu search on `instance` until the budget fires.
    ///
    /// With an unlimited [`crate::search::SearchBudget`] this loop never
    /// returns; callers are expected to bound it by time or evaluations.
    pub fn run(instance: &QapInstance, config: &TabuConfig) -> Result<SearchOutcome, SearchError> {
        let hood = SwapNeighborhood::new(instance.size())?;
        let mut rng = rng_from_seed(config.seed);
        let mut meter = BudgetMeter::start(&config.budget);

        let mut current = config.start.resolve(instance, &mut rng)?;
        let mut cost = instance.full_cost(&current);
        let initial_cost = cost;
        let mut best = current.clone();
        let mut best_cost = cost;

        let mut memory = TabuMemory::new(hood);
        let mut move_costs: Vec<Cost> = vec![0; hood.size()];
        let default_move = if instance.size() > 2 {
            Move::new(1, 2)
        } else {
            Move::new(0, 1)
        };
        let mut steps = 0;

        loop {
            let mut chosen: Option<Move> = None;
            let mut chosen_cost = best_cost;
            for mv in hood.moves() {
                if meter.tick() {
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
                move_costs[hood.index(mv)] = candidate_cost;
                if candidate_cost < chosen_cost {
                    chosen_cost = candidate_cost;
                    chosen = Some(mv);
                }
            }

            let mv = chosen.unwrap_or_else(|| {
                let mut fallback: Option<(Move, Cost)> = None;
                for mv in hood.moves() {
                    if memory.is_tabu(mv) {
                        continue;
                    }
                    let mv_cost = move_costs[hood.index(mv)];
                    if fallback.is_none_or(|(_, fallback_cost)| mv_cost < fallback_cost) {
                        fallback = Some((mv, mv_cost));
                    }
                }
                match fallback {
                    Some((mv, _)) => mv,
                    None => default_move,
                }
            });

            current.apply(mv);
            cost = move_costs[hood.index(mv)];
            debug_assert_eq!(cost, instance.full_cost(&current));
            memory.decay();
            memory.mark(mv, config.tenure);
            steps += 1;

            if cost < best_cost {
                best_cost = cost;
                best = current.clone();
            }
        }
    }
}
