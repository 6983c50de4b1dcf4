//! Initial-temperature calibration.
//!
//! Samples random states and single random swaps to measure how much one
//! move typically changes the cost, then sets the starting temperature so
//! that a typical degradation is accepted with probability ≈ 0.9.

use rand::Rng;

use crate::instance::QapInstance;
use crate::perm::{random_move, Permutation};

/// Number of (state, move) samples averaged per calibration.
pub const CALIBRATION_TRIALS: usize = 10_000;

/// Probability with which a mean-sized degradation should be accepted at
/// the starting temperature.
const TARGET_ACCEPTANCE: f64 = 0.9;

/// Estimates the initial temperature for [`super::SaRunner`].
///
/// Draws [`CALIBRATION_TRIALS`] independent random permutations, applies
/// one random swap to each, and averages the absolute cost deltas (integer
/// mean, truncating). The temperature returned is `mean / -ln(0.9)`, so
/// `exp(-mean / T₀) ≈ 0.9`.
///
/// Degenerate instances whose swaps never change the cost calibrate to
/// `0.0`, which [`super::SaConfig::validate`] rejects — such instances
/// have nothing to anneal.
pub fn estimate_initial_temperature<R: Rng>(instance: &QapInstance, rng: &mut R) -> f64 {
    let n = instance.size();
    let mut diff_sum: u64 = 0;
    for _ in 0..CALIBRATION_TRIALS {
        let perm = Permutation::random(n, rng);
        let cost = instance.full_cost(&perm);
        let mv = random_move(n, rng);
        let neighbor = perm.swapped(mv);
        let neighbor_cost = instance.swap_cost(cost, &perm, &neighbor, mv);
        diff_sum += cost.abs_diff(neighbor_cost);
    }
    let diff_mean = diff_sum / CALIBRATION_TRIALS as u64;
    -(diff_mean as f64) / TARGET_ACCEPTANCE.ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::tests::golden;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_calibration_is_positive_for_golden_instance() {
        let mut rng = StdRng::seed_from_u64(42);
        let t0 = estimate_initial_temperature(&golden(), &mut rng);
        assert!(t0.is_finite());
        assert!(t0 > 0.0, "expected positive temperature, got {t0}");
    }

    #[test]
    fn test_calibration_is_seed_deterministic() {
        let instance = golden();
        let a = estimate_initial_temperature(&instance, &mut StdRng::seed_from_u64(7));
        let b = estimate_initial_temperature(&instance, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_constant_cost_instance_calibrates_to_zero() {
        // With n = 2 and symmetric matrices, both permutations cost the
        // same, so every sampled delta is zero.
        let instance = QapInstance::new(
            vec![vec![0, 1], vec![1, 0]],
            vec![vec![0, 2], vec![2, 0]],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let t0 = estimate_initial_temperature(&instance, &mut rng);
        assert_eq!(t0, 0.0);
    }

    #[test]
    fn test_mean_scale_tracks_temperature_formula() {
        // T0 = mean / -ln(0.9) ≈ 9.49 * mean, and on the golden instance
        // a single swap changes the cost by at most a few dozen units.
        let mut rng = StdRng::seed_from_u64(3);
        let t0 = estimate_initial_temperature(&golden(), &mut rng);
        assert!(t0 < 40.0 / -(0.9f64.ln()));
    }
}
