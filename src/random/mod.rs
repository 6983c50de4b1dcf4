//! Null baselines: random search and random walk.
//!
//! Neither baseline exploits cost structure — [`RandomSearch`] resamples a
//! fresh permutation every iteration and [`RandomWalk`] applies one random
//! swap per iteration without evaluating it. They exist as the floor
//! against which the guided strategies are compared, and they are
//! budget-bound only: with an unlimited [`crate::search::SearchBudget`]
//! they never stop.

mod config;
mod runner;

pub use config::RandomConfig;
pub use runner::{RandomSearch, RandomWalk};
