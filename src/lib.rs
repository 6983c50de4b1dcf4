//! Local-search metaheuristics for the Quadratic Assignment Problem.
//!
//! Given an `n×n` facility-flow matrix `F` and an `n×n` location-distance
//! matrix `D`, the QAP asks for the permutation π minimizing
//! `Σᵢⱼ F[i][j] · D[π(i)][π(j)]`. This crate provides the search engine
//! for comparing local-search strategies on such instances:
//!
//! - **Greedy descent**: first-improvement hill climbing over the swap
//!   neighborhood.
//! - **Steepest descent**: best-improvement hill climbing.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with geometric
//!   cooling and a calibrated starting temperature.
//! - **Tabu Search (TS)**: full-neighborhood selection with per-move
//!   cooldown memory; anytime, budget-bound.
//! - **Random search / random walk**: memoryless baselines.
//!
//! All strategies share one incremental cost primitive
//! ([`instance::QapInstance::swap_cost`]) that updates the objective in
//! O(n) per swap and agrees exactly with full O(n²) recomputation, one
//! canonical scan order over the move set
//! ([`neighborhood::SwapNeighborhood`]), and one budget/outcome contract
//! ([`search`]).
//!
//! # Example
//!
//! ```
//! use qap_search::descent::{DescentConfig, SteepestDescent};
//! use qap_search::instance::QapInstance;
//!
//! let instance = QapInstance::new(
//!     vec![vec![0, 2], vec![3, 0]],
//!     vec![vec![0, 4], vec![1, 0]],
//! )?;
//! let outcome = SteepestDescent::run(&instance, &DescentConfig::default().with_seed(42))?;
//! assert_eq!(outcome.best_cost, instance.full_cost(&outcome.best));
//! # Ok::<(), qap_search::error::SearchError>(())
//! ```
//!
//! # References
//!
//! - Koopmans, T. & Beckmann, M. (1957). "Assignment Problems and the
//!   Location of Economic Activities", *Econometrica* 25(1), 53-76.
//! - Taillard, E. (1991). "Robust taboo search for the quadratic
//!   assignment problem", *Parallel Computing* 17, 443-455.

pub mod construct;
pub mod cost;
pub mod descent;
pub mod error;
pub mod instance;
pub mod neighborhood;
pub mod perm;
pub mod random;
pub mod sa;
pub mod search;
pub mod tabu;
