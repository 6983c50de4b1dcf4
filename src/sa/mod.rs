//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic that escapes local optima by
//! accepting worsening moves with a probability that decays as the
//! temperature cools. The variant here scans the swap neighborhood in
//! canonical order, restarts the scan after every acceptance, cools
//! geometrically once per epoch, and calibrates its starting temperature
//! from the cost spread of random states ([`estimate_initial_temperature`]).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Burkard & Rendl (1984), "A thermodynamically motivated simulation
//!   procedure for combinatorial optimization problems"

mod calibrate;
mod config;
mod runner;

pub use calibrate::{estimate_initial_temperature, CALIBRATION_TRIALS};
pub use config::SaConfig;
pub use runner::SaRunner;
