//! # Named Prime Subsets
//!
//! Twin, Mersenne, Sophie-Germain and palindromic prime extraction.
//!
//! Every finder is total: a limit (or exponent) below the smallest member
//! yields an empty list, and results are always ascending.

use crate::oracle::PrimalityOracle;
use crate::primitives::MAX_MERSENNE_EXPONENT;
use crate::sieve::sieve;
use crate::types::TwinPair;
use std::collections::BTreeSet;

// =============================================================================
// DIGIT HELPERS
// =============================================================================

/// Decimal digits of `n`, most significant first.
fn decimal_digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::with_capacity(20);
    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Whether the decimal representation of `n` reads the same reversed.
///
/// Inputs are unsigned, so sign and leading-zero cases cannot arise.
#[must_use]
pub fn is_palindromic(n: u64) -> bool {
    let digits = decimal_digits(n);
    digits.iter().eq(digits.iter().rev())
}

/// Sum of the decimal digits of `n`.
#[must_use]
pub fn digit_sum(n: u64) -> u64 {
    decimal_digits(n).into_iter().map(u64::from).sum()
}

// =============================================================================
// FINDERS
// =============================================================================

/// Twin pairs `(p, p + 2)` with `p + 2 <= limit`, ascending by `p`.
#[must_use]
pub fn twin_primes(limit: u64) -> Vec<TwinPair> {
    let primes = sieve(limit);
    let members: BTreeSet<u64> = primes.iter().copied().collect();
    let twins: Vec<TwinPair> = primes
        .iter()
        .filter(|&&p| p.checked_add(2).is_some_and(|q| members.contains(&q)))
        .map(|&p| TwinPair::starting_at(p))
        .collect();

    tracing::debug!(limit, count = twins.len(), "twin primes found");
    twins
}

/// Highest exponent searched for a requested `max_exponent`.
fn mersenne_ceiling(max_exponent: u64) -> u64 {
    if max_exponent > MAX_MERSENNE_EXPONENT {
        tracing::debug!(
            requested = max_exponent,
            searched = MAX_MERSENNE_EXPONENT,
            "mersenne exponent truncated"
        );
    }
    max_exponent.min(MAX_MERSENNE_EXPONENT)
}

/// Mersenne primes `2^p - 1` for prime exponents `p <= max_exponent`.
///
/// The search is truncated at exponent 63, the largest whose `2^p - 1` fits
/// in a `u64`. A larger `max_exponent` returns the same list as 63, so
/// candidates such as `2^89 - 1` are never reported. Outer surfaces reject
/// such exponents before they get here.
#[must_use]
pub fn mersenne_primes(oracle: &PrimalityOracle, max_exponent: u64) -> Vec<u64> {
    let top = mersenne_ceiling(max_exponent);

    let mut found = Vec::new();
    for exponent in (2..=top).filter(|&p| oracle.is_prime(p)) {
        let candidate = (1u64 << exponent) - 1;
        if oracle.is_prime(candidate) {
            tracing::debug!(exponent, candidate, "mersenne prime found");
            found.push(candidate);
        }
    }
    found
}

/// Primes `p <= limit` for which `2p + 1` is also prime.
#[must_use]
pub fn sophie_germain_primes(oracle: &PrimalityOracle, limit: u64) -> Vec<u64> {
    let found: Vec<u64> = (2..=limit)
        .filter(|&p| {
            oracle.is_prime(p)
                && p.checked_mul(2)
                    .and_then(|d| d.checked_add(1))
                    .is_some_and(|safe| oracle.is_prime(safe))
        })
        .collect();

    tracing::debug!(limit, count = found.len(), "sophie germain primes found");
    found
}

/// Primes `<= limit` whose decimal digits form a palindrome.
#[must_use]
pub fn palindromic_primes(oracle: &PrimalityOracle, limit: u64) -> Vec<u64> {
    let found: Vec<u64> = (2..=limit)
        .filter(|&n| oracle.is_prime(n) && is_palindromic(n))
        .collect();

    tracing::debug!(limit, count = found.len(), "palindromic primes found");
    found
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindrome_predicate() {
        assert!(is_palindromic(0));
        assert!(is_palindromic(7));
        assert!(is_palindromic(11));
        assert!(is_palindromic(12321));
        assert!(!is_palindromic(10));
        assert!(!is_palindromic(1231));
        // 18446744073709551615
        assert!(!is_palindromic(u64::MAX));
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7919), 26);
        assert_eq!(digit_sum(1_000_000), 1);
    }

    #[test]
    fn twins_up_to_twenty() {
        let twins = twin_primes(20);
        assert_eq!(
            twins,
            vec![
                TwinPair(3, 5),
                TwinPair(5, 7),
                TwinPair(11, 13),
                TwinPair(17, 19)
            ]
        );
    }

    #[test]
    fn twin_upper_member_respects_limit() {
        // (17, 19) needs limit >= 19
        assert_eq!(twin_primes(18).last(), Some(&TwinPair(11, 13)));
        assert!(twin_primes(4).is_empty());
        assert_eq!(twin_primes(1000).len(), 35);
    }

    #[test]
    fn mersenne_small_exponents() {
        let oracle = PrimalityOracle::new();
        assert_eq!(mersenne_primes(&oracle, 7), vec![3, 7, 31, 127]);
        assert_eq!(mersenne_primes(&oracle, 13), vec![3, 7, 31, 127, 8191]);
        assert!(mersenne_primes(&oracle, 1).is_empty());
        assert!(mersenne_primes(&oracle, 0).is_empty());
    }

    #[test]
    fn mersenne_search_stops_at_63() {
        assert_eq!(mersenne_ceiling(31), 31);
        assert_eq!(mersenne_ceiling(63), 63);
        assert_eq!(mersenne_ceiling(89), 63);
        assert_eq!(mersenne_ceiling(u64::MAX), 63);
    }

    #[test]
    fn twins_found_by_partner_lookup() {
        let twins = twin_primes(200);
        assert!(twins.iter().all(|pair| pair.second() - pair.first() == 2));
        assert!(twins.contains(&TwinPair(191, 193)));
        assert!(twins.contains(&TwinPair(197, 199)));
        // 199 is prime but 201 = 3 * 67
        assert!(!twins.iter().any(|pair| pair.first() == 199));
    }

    #[test]
    fn mersenne_up_to_31() {
        let oracle = PrimalityOracle::new();
        assert_eq!(
            mersenne_primes(&oracle, 31),
            vec![3, 7, 31, 127, 8191, 131_071, 524_287, 2_147_483_647]
        );
    }

    #[test]
    fn sophie_germain_up_to_thirty() {
        let oracle = PrimalityOracle::new();
        assert_eq!(
            sophie_germain_primes(&oracle, 30),
            vec![2, 3, 5, 11, 23, 29]
        );
        assert!(sophie_germain_primes(&oracle, 1).is_empty());
    }

    #[test]
    fn sophie_germain_up_to_hundred() {
        let oracle = PrimalityOracle::new();
        assert_eq!(
            sophie_germain_primes(&oracle, 100),
            vec![2, 3, 5, 11, 23, 29, 41, 53, 83, 89]
        );
    }

    #[test]
    fn palindromic_small_limits() {
        let oracle = PrimalityOracle::new();
        assert_eq!(palindromic_primes(&oracle, 20), vec![2, 3, 5, 7, 11]);
        assert_eq!(palindromic_primes(&oracle, 1000).len(), 20);
        assert!(palindromic_primes(&oracle, 0).is_empty());
    }
}
