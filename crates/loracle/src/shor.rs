//! Classical simulation of Shor's factoring algorithm.
//!
//! One `factor` call runs a single randomized round: primality gate, random
//! base selection, order finding (the simulated quantum step), and factor
//! extraction from `a^(r/2) ± 1`. Unlucky rounds return a trivial pair
//! instead of raising, which is the recoverable case callers retry.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::arithmetic::{gcd, integer_sqrt, is_prime, mod_pow, multiplicative_order};
use crate::error::OracleError;
use crate::factorer::Factorer;
use crate::runtime::RuntimeHandle;

/// Simulated Shor factoring oracle.
///
/// Holds its own RNG state, so one instance serves one logical caller.
pub struct ShorSimulator {
    handle: RuntimeHandle,
    rng: StdRng,
}

impl ShorSimulator {
    /// Create a simulator backed by the given runtime handle.
    pub fn new(handle: RuntimeHandle) -> Self {
        Self {
            handle,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a seeded simulator for deterministic tests.
    pub fn with_seed(handle: RuntimeHandle, seed: u64) -> Self {
        Self {
            handle,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One randomized order-finding round for an odd composite non-square.
    ///
    /// Returns the measured pair; `(1, number)` marks an unlucky round.
    fn shor_round(&mut self, number: u64) -> (u64, u64) {
        let base = self.rng.gen_range(2..number);

        let shared = gcd(base, number);
        if shared != 1 {
            // The random base already shares a factor with the input.
            return (shared, number / shared);
        }

        let order = multiplicative_order(base, number);
        debug!(number, base, order, "order-finding round complete");

        if order % 2 == 1 {
            return (1, number);
        }
        let half_power = mod_pow(base, order / 2, number);
        if half_power == number - 1 {
            return (1, number);
        }

        let p = gcd(half_power - 1, number);
        if p > 1 && p < number {
            return (p, number / p);
        }
        let q = gcd(half_power + 1, number);
        if q > 1 && q < number {
            return (q, number / q);
        }
        (1, number)
    }
}

impl Factorer for ShorSimulator {
    fn factor(&mut self, number: u64) -> Result<(u64, u64), OracleError> {
        if number < 2 || is_prime(number) {
            return Err(OracleError::NoFactorsFound { number });
        }
        if number % 2 == 0 {
            return Ok((2, number / 2));
        }
        let root = integer_sqrt(number);
        if root * root == number {
            return Ok((root, root));
        }
        if !self.handle.admits(number) {
            return Err(OracleError::Simulation {
                message: format!(
                    "register of {} qubits exceeds simulator capacity of {}",
                    RuntimeHandle::required_qubits(number),
                    self.handle.max_qubits()
                ),
            });
        }
        Ok(self.shor_round(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::DEFAULT_MAX_QUBITS;
    use rstest::rstest;

    fn simulator(seed: u64) -> ShorSimulator {
        ShorSimulator::with_seed(RuntimeHandle::new(DEFAULT_MAX_QUBITS), seed)
    }

    /// Drive rounds until a non-trivial pair appears.
    fn factor_with_retries(sim: &mut ShorSimulator, number: u64) -> (u64, u64) {
        for _ in 0..100 {
            let (p, q) = sim.factor(number).expect("factorable input");
            if p > 1 && q > 1 && p * q == number {
                return (p, q);
            }
        }
        panic!("no valid pair for {} within 100 rounds", number);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(7)]
    #[case(97)]
    #[case(104_729)]
    fn primes_are_reported_not_factorable(#[case] prime: u64) {
        let mut sim = simulator(1);
        let err = sim.factor(prime).expect_err("prime must not factor");
        assert_eq!(err, OracleError::NoFactorsFound { number: prime });
    }

    #[test]
    fn inputs_below_two_are_not_factorable() {
        let mut sim = simulator(1);
        assert!(sim.factor(0).is_err());
        assert!(sim.factor(1).is_err());
    }

    #[rstest]
    #[case(4, (2, 2))]
    #[case(6, (2, 3))]
    #[case(1024, (2, 512))]
    fn even_inputs_split_immediately(#[case] number: u64, #[case] pair: (u64, u64)) {
        let mut sim = simulator(1);
        assert_eq!(sim.factor(number).expect("even"), pair);
    }

    #[rstest]
    #[case(9, 3)]
    #[case(25, 5)]
    #[case(961, 31)]
    fn odd_square_semiprimes_split_into_their_root(#[case] number: u64, #[case] root: u64) {
        let mut sim = simulator(1);
        assert_eq!(sim.factor(number).expect("square"), (root, root));
    }

    #[test]
    fn odd_semiprimes_factor_within_a_few_rounds() {
        let mut sim = simulator(42);
        for number in [15u64, 21, 35, 77, 91, 8051] {
            let (p, q) = factor_with_retries(&mut sim, number);
            assert_eq!(p * q, number);
            assert!(p > 1 && q > 1);
        }
    }

    #[test]
    fn oversized_inputs_are_an_operational_error() {
        let mut sim = ShorSimulator::with_seed(RuntimeHandle::new(11), 1);
        // 33 needs 6 bits -> 15 qubits, above the 11-qubit handle.
        let err = sim.factor(33).expect_err("must exceed capacity");
        assert!(matches!(err, OracleError::Simulation { .. }));
        assert!(!err.is_no_factors());
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn capacity_check_does_not_gate_even_inputs() {
        let mut sim = ShorSimulator::with_seed(RuntimeHandle::new(5), 1);
        assert_eq!(sim.factor(1 << 40).expect("even shortcut"), (2, 1 << 39));
    }
}
