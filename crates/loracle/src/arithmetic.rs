//! Modular arithmetic backing the simulated quantum subroutines.

/// Greatest common divisor by Euclid's algorithm.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Modular multiplication, widened to avoid overflow.
pub fn mod_mul(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// Modular exponentiation by squaring.
pub fn mod_pow(mut base: u64, mut exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result = 1u64;
    base %= modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mod_mul(result, base, modulus);
        }
        base = mod_mul(base, base, modulus);
        exponent >>= 1;
    }
    result
}

/// Deterministic Miller-Rabin primality test.
///
/// The fixed witness set is sufficient for the full `u64` range.
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mod_mul(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Floor of the integer square root.
pub fn integer_sqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).map_or(true, |square| square > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |square| square <= n) {
        x += 1;
    }
    x
}

/// Multiplicative order of `a` modulo `n`.
///
/// `a` must be coprime to `n`; the loop is bounded by the group order.
/// This is the subroutine a real deployment runs as quantum period finding,
/// and its cost is what makes the oracle's execution time unbounded.
pub fn multiplicative_order(a: u64, n: u64) -> u64 {
    debug_assert_eq!(gcd(a, n), 1, "order is defined only for coprime bases");
    let mut x = a % n;
    let mut order = 1u64;
    while x != 1 {
        x = mod_mul(x, a, n);
        order += 1;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basic_cases() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
    }

    #[test]
    fn mod_pow_matches_naive_results() {
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(7, 0, 13), 1);
        assert_eq!(mod_pow(4, 13, 497), 445);
        assert_eq!(mod_pow(5, 3, 1), 0);
    }

    #[test]
    fn mod_mul_survives_large_operands() {
        let near_max = u64::MAX - 58; // largest u64 prime
        assert_eq!(mod_mul(near_max - 1, near_max - 1, near_max), 1);
    }

    #[test]
    fn primality_of_small_numbers() {
        let primes: [u64; 9] = [2, 3, 5, 7, 11, 13, 97, 7919, 104_729];
        for p in primes {
            assert!(is_prime(p), "{} should be prime", p);
        }
        let composites: [u64; 8] = [0, 1, 4, 9, 15, 21, 91, 7917];
        for c in composites {
            assert!(!is_prime(c), "{} should be composite", c);
        }
    }

    #[test]
    fn primality_of_large_numbers() {
        assert!(is_prime(2_147_483_647)); // 2^31 - 1
        assert!(is_prime(u64::MAX - 58));
        assert!(!is_prime(u64::MAX)); // 3 * 5 * 17 * ...
        assert!(!is_prime(3_215_031_751)); // strong pseudoprime to bases 2,3,5,7
    }

    #[test]
    fn integer_sqrt_exact_and_floor() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(25), 5);
        assert_eq!(integer_sqrt(24), 4);
        assert_eq!(integer_sqrt(26), 5);
        assert_eq!(integer_sqrt(u64::MAX), 4_294_967_295);
    }

    #[test]
    fn multiplicative_order_known_values() {
        assert_eq!(multiplicative_order(2, 15), 4);
        assert_eq!(multiplicative_order(4, 15), 2);
        assert_eq!(multiplicative_order(14, 15), 2);
        assert_eq!(multiplicative_order(3, 7), 6);
        assert_eq!(multiplicative_order(1, 21), 1);
    }
}
