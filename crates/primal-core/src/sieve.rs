//! # Sieve of Eratosthenes
//!
//! Bulk enumeration of primes up to a limit. Stateless and re-entrant;
//! callers that need the same limit repeatedly may cache externally.

/// All primes `<= limit`, ascending.
///
/// Returns an empty list for `limit < 2`. The result agrees element for
/// element with repeated [`PrimalityOracle::is_prime`](crate::PrimalityOracle::is_prime).
///
/// The table holds `limit + 1` flags, so callers bound `limit` (see
/// [`MAX_SIEVE_LIMIT`](crate::primitives::MAX_SIEVE_LIMIT)). A limit whose
/// table length is not addressable on this target yields an empty list.
#[must_use]
pub fn sieve(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let Some(size) = table_len(limit) else {
        tracing::warn!(limit, "sieve limit exceeds addressable table size");
        return Vec::new();
    };
    let mut marks = vec![true; size];
    marks[0] = false;
    marks[1] = false;

    let root = limit.isqrt() as usize;
    for i in 2..=root {
        if marks[i] {
            for multiple in (i * i..size).step_by(i) {
                marks[multiple] = false;
            }
        }
    }

    let primes: Vec<u64> = marks
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i as u64))
        .collect();

    tracing::debug!(limit, count = primes.len(), "sieve complete");
    primes
}

/// `limit + 1` as a table length, if it is addressable.
fn table_len(limit: u64) -> Option<usize> {
    usize::try_from(limit).ok()?.checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimalityOracle;

    #[test]
    fn below_two_is_empty() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
    }

    #[test]
    fn small_limits() {
        assert_eq!(sieve(2), vec![2]);
        assert_eq!(sieve(10), vec![2, 3, 5, 7]);
        assert_eq!(sieve(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn limit_is_inclusive() {
        assert_eq!(sieve(13).last(), Some(&13));
        assert_eq!(sieve(12).last(), Some(&11));
    }

    #[test]
    fn prime_counting_values() {
        assert_eq!(sieve(100).len(), 25);
        assert_eq!(sieve(1000).len(), 168);
        assert_eq!(sieve(10_000).len(), 1229);
    }

    #[test]
    fn table_length_is_checked() {
        assert_eq!(table_len(10), Some(11));
        assert_eq!(table_len(u64::MAX), None);
        assert!(sieve(u64::MAX).is_empty());
    }

    #[test]
    fn agrees_with_oracle() {
        let oracle = PrimalityOracle::new();
        let expected: Vec<u64> = (0..=3000).filter(|&n| oracle.is_prime(n)).collect();
        assert_eq!(sieve(3000), expected);
    }
}
