use qap_search::construct::greedy_assignment;
use qap_search::descent::{DescentConfig, SteepestDescent};
use qap_search::instance::QapInstance;
use qap_search::perm::Permutation;
use qap_search::sa::{estimate_initial_temperature, SaConfig, SaRunner};
use qap_search::search::{SearchBudget, Start};
use qap_search::tabu::{TabuConfig, TabuRunner};
use rand::rngs::StdRng;
use rand::SeedableRng;

const INSTANCE_TEXT: &str = "\
4
0 1 1 2
1 0 2 1
1 2 0 1
2 1 1 0
0 3 1 2
3 0 4 1
1 4 0 3
2 1 3 0
";

#[test]
fn smoke_full_pipeline() {
    let instance = QapInstance::parse(INSTANCE_TEXT).unwrap();

    // Identity cost of this instance, fixed by direct summation.
    let identity = Permutation::identity(4);
    assert_eq!(instance.full_cost(&identity), 40);

    // The constructive heuristic is deterministic and yields a valid
    // assignment to descend from.
    let constructed = greedy_assignment(&instance);
    assert_eq!(constructed.as_slice(), &[0, 3, 1, 2]);

    // Steepest descent from the identity never ends above it.
    let descent = SteepestDescent::run(
        &instance,
        &DescentConfig::default().with_start(Start::Fixed(identity)),
    )
    .unwrap();
    assert!(descent.best_cost <= 40);
    assert_eq!(descent.best_cost, instance.full_cost(&descent.best));

    // Annealing from a calibrated temperature stays within the baseline.
    let mut rng = StdRng::seed_from_u64(1);
    let t0 = estimate_initial_temperature(&instance, &mut rng);
    let annealed = SaRunner::run(
        &instance,
        &SaConfig::new(t0)
            .with_budget(SearchBudget::evaluations(20_000))
            .with_seed(1),
    )
    .unwrap();
    assert!(annealed.best_cost <= annealed.initial_cost);

    // Tabu search, budget-bound, must not lose to plain descent when
    // seeded from the same local optimum.
    let tabu = TabuRunner::run(
        &instance,
        &TabuConfig::default()
            .with_start(Start::Fixed(descent.best.clone()))
            .with_budget(SearchBudget::evaluations(2_000)),
    )
    .unwrap();
    assert!(tabu.best_cost <= descent.best_cost);
    assert_eq!(tabu.best_cost, instance.full_cost(&tabu.best));
}
