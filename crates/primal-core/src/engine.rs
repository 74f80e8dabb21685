//! # Prime Engine
//!
//! The function-level surface consumed by outer layers (CLI, HTTP).
//!
//! A `PrimeEngine` owns one oracle, one constants profile and one weight
//! table, and wires them into the composer and analyzer on each call. It is
//! `Send + Sync`: the only mutable state is the oracle's mutex-guarded cache.

use crate::analyzer::PatternAnalyzer;
use crate::composer::SequenceComposer;
use crate::constants::{ResonanceConstants, WeightTable};
use crate::oracle::PrimalityOracle;
use crate::primitives::{BASE_PRIMES, DEFAULT_CACHE_CAPACITY};
use crate::sieve;
use crate::subsets::{self, digit_sum, is_palindromic};
use crate::types::{CacheStats, ExtendedReport, PatternAnalysis, PrimeProfile, TwinPair};

#[derive(Debug)]
pub struct PrimeEngine {
    oracle: PrimalityOracle,
    constants: ResonanceConstants,
    weights: WeightTable,
}

impl Default for PrimeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeEngine {
    /// Engine with the standard profile and default cache capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Engine whose oracle caches at most `capacity` answers.
    #[must_use]
    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            oracle: PrimalityOracle::with_capacity(capacity),
            constants: ResonanceConstants::new(),
            weights: WeightTable::new(),
        }
    }

    #[must_use]
    pub fn oracle(&self) -> &PrimalityOracle {
        &self.oracle
    }

    #[must_use]
    pub fn constants(&self) -> &ResonanceConstants {
        &self.constants
    }

    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.oracle.stats()
    }

    fn composer(&self) -> SequenceComposer<'_> {
        SequenceComposer::new(&self.oracle, &self.constants)
    }

    fn analyzer(&self) -> PatternAnalyzer<'_> {
        PatternAnalyzer::new(&self.constants)
    }

    // =========================================================================
    // PRIMALITY & ENUMERATION
    // =========================================================================

    pub fn is_prime(&self, n: u64) -> bool {
        self.oracle.is_prime(n)
    }

    #[must_use]
    pub fn sieve(&self, limit: u64) -> Vec<u64> {
        sieve::sieve(limit)
    }

    #[must_use]
    pub fn twin_primes(&self, limit: u64) -> Vec<TwinPair> {
        subsets::twin_primes(limit)
    }

    #[must_use]
    pub fn mersenne_primes(&self, max_exponent: u64) -> Vec<u64> {
        subsets::mersenne_primes(&self.oracle, max_exponent)
    }

    #[must_use]
    pub fn sophie_germain_primes(&self, limit: u64) -> Vec<u64> {
        subsets::sophie_germain_primes(&self.oracle, limit)
    }

    #[must_use]
    pub fn palindromic_primes(&self, limit: u64) -> Vec<u64> {
        subsets::palindromic_primes(&self.oracle, limit)
    }

    // =========================================================================
    // RESONANCE
    // =========================================================================

    #[must_use]
    pub fn favored_sequence(&self, count: usize) -> Vec<u64> {
        self.composer().favored_sequence(count)
    }

    #[must_use]
    pub fn analyze(&self, primes: &[u64]) -> Option<PatternAnalysis> {
        self.analyzer().analyze(primes)
    }

    #[must_use]
    pub fn resonance_factor(&self, primes: &[u64]) -> f64 {
        self.analyzer().resonance_factor(primes)
    }

    #[must_use]
    pub fn extended_report(&self, primes: &[u64]) -> Option<ExtendedReport> {
        self.analyzer().extended_report(primes)
    }

    /// Membership of `n` in every weighted category.
    ///
    /// Non-primes belong to no category and score 0.0.
    #[must_use]
    pub fn classify(&self, n: u64) -> PrimeProfile {
        if !self.is_prime(n) {
            return PrimeProfile {
                value: n,
                is_prime: false,
                twin: false,
                palindromic: false,
                mersenne: false,
                sophie_germain: false,
                favored: false,
                digit_sum_prime: false,
                composite_resonance: 0.0,
            };
        }

        let twin = n.checked_sub(2).is_some_and(|m| self.is_prime(m))
            || n.checked_add(2).is_some_and(|m| self.is_prime(m));
        let mersenne = n.checked_add(1).is_some_and(u64::is_power_of_two);
        let sophie_germain = n
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .is_some_and(|m| self.is_prime(m));

        let mut profile = PrimeProfile {
            value: n,
            is_prime: true,
            twin,
            palindromic: is_palindromic(n),
            mersenne,
            sophie_germain,
            favored: BASE_PRIMES.contains(&n),
            digit_sum_prime: self.is_prime(digit_sum(n)),
            composite_resonance: 0.0,
        };
        profile.composite_resonance = self.weights.composite_resonance(&profile.categories());
        profile
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrimeEngine>();
    }

    #[test]
    fn facade_matches_components() {
        let engine = PrimeEngine::new();
        assert!(engine.is_prime(7919));
        assert_eq!(engine.sieve(10), vec![2, 3, 5, 7]);
        assert_eq!(engine.mersenne_primes(7), vec![3, 7, 31, 127]);
        assert_eq!(engine.palindromic_primes(20), vec![2, 3, 5, 7, 11]);
        assert_eq!(engine.favored_sequence(5), vec![7, 11, 13, 17, 19]);
    }

    #[test]
    fn classify_composite() {
        let engine = PrimeEngine::new();
        let profile = engine.classify(91);
        assert!(!profile.is_prime);
        assert!(profile.categories().is_empty());
        assert_eq!(profile.composite_resonance, 0.0);
    }

    #[test]
    fn classify_eleven() {
        let engine = PrimeEngine::new();
        let profile = engine.classify(11);
        assert!(profile.is_prime);
        assert!(profile.twin);
        assert!(profile.palindromic);
        assert!(!profile.mersenne);
        assert!(profile.sophie_germain);
        assert!(profile.favored);
        assert!(profile.digit_sum_prime);
        // 0.1 * 1.5 * 1.3 * 1.4 * 1.8 * 1.2 = 0.589...
        assert!((profile.composite_resonance - 0.589_68).abs() < 1e-9);
    }

    #[test]
    fn classify_mersenne() {
        let engine = PrimeEngine::new();
        let profile = engine.classify(127);
        assert!(profile.mersenne);
        assert!(!profile.twin);
        assert!(!profile.palindromic);
        assert!(!engine.classify(2).twin);
        assert!(engine.classify(3).mersenne);
    }

    #[test]
    fn custom_cache_capacity() {
        let engine = PrimeEngine::with_cache_capacity(2);
        let _ = engine.sieve(100);
        let _ = engine.palindromic_primes(100);
        assert_eq!(engine.cache_stats().capacity, 2);
        assert!(engine.cache_stats().len <= 2);
    }
}
