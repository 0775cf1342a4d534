// Integration tests for the oracle crate
//
// Exercises the public surface the way an embedding service does: initialize
// the runtime once, build a simulator from the handle, and drive rounds
// through the Factorer trait.

use loracle::{initialize, Factorer, OracleError, ShorSimulator, NO_FACTORS_SIGNAL};

fn factor_with_retries(sim: &mut ShorSimulator, number: u64) -> (u64, u64) {
    for _ in 0..100 {
        let (p, q) = sim.factor(number).expect("factorable input");
        if p > 1 && q > 1 && p * q == number {
            return (p, q);
        }
    }
    panic!("no valid pair for {} within 100 rounds", number);
}

#[test]
fn runtime_handle_drives_a_full_factoring_session() {
    let handle = initialize();
    let mut sim = ShorSimulator::with_seed(handle, 7);

    for number in [15u64, 21, 33, 35, 55, 77, 91, 143, 323, 437] {
        let (p, q) = factor_with_retries(&mut sim, number);
        assert_eq!(p * q, number, "pair must multiply back to {}", number);
        assert!(p > 1 && q > 1, "pair for {} must be non-trivial", number);
    }
}

#[test]
fn prime_inputs_surface_the_textual_contract() {
    let handle = initialize();
    let mut sim = ShorSimulator::new(handle);

    let err = sim.factor(7).expect_err("7 is prime");
    assert!(err.is_no_factors());
    // The rendered message is what foreign callers match on.
    assert!(err.to_string().contains(NO_FACTORS_SIGNAL));
    assert_eq!(err, OracleError::NoFactorsFound { number: 7 });
}
