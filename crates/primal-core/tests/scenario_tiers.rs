//! # Scenario Tier Tests (T0-T3)
//!
//! Concrete, known-answer scenarios. If ANY tier fails, the engine is INVALID.
//!
//! ## Tiers
//! - T0: Primality
//! - T1: Enumeration
//! - T2: Named Subsets
//! - T3: Resonance

use primal_core::{PrimalError, PrimeEngine, TwinPair};

// =============================================================================
// TIER T0: PRIMALITY
// =============================================================================

mod t0_primality {
    use super::*;

    /// T0.1: Smallest cases.
    #[test]
    fn small_values() {
        let engine = PrimeEngine::new();
        assert!(engine.is_prime(2));
        assert!(!engine.is_prime(1));
        assert!(!engine.is_prime(0));
        assert!(!engine.is_prime(9));
    }

    /// T0.2: The anchor integer is prime.
    #[test]
    fn anchor_is_prime() {
        let engine = PrimeEngine::new();
        assert!(engine.is_prime(7919));
        assert!(!engine.is_prime(7917));
    }

    /// T0.3: Large 64-bit values.
    #[test]
    fn large_values() {
        let engine = PrimeEngine::new();
        assert!(engine.is_prime(2_147_483_647));
        assert!(engine.is_prime(1_000_000_007));
        assert!(!engine.is_prime(1_000_000_007 * 3));
    }

    /// T0.4: Repeated queries hit the cache and agree.
    #[test]
    fn repeated_queries_are_cached() {
        let engine = PrimeEngine::new();
        let first = engine.is_prime(104_729);
        let second = engine.is_prime(104_729);

        assert_eq!(first, second);
        let stats = engine.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    /// T0.5: Malformed boundary input is an error, negatives are not.
    #[test]
    fn boundary_input() {
        use primal_core::input::parse_integer;

        assert!(matches!(
            parse_integer("seven"),
            Err(PrimalError::InvalidInput(_))
        ));
        let clamped = parse_integer("-7").expect("negative clamps");
        assert!(!PrimeEngine::new().is_prime(clamped));
    }
}

// =============================================================================
// TIER T1: ENUMERATION
// =============================================================================

mod t1_enumeration {
    use super::*;

    /// T1.1: Primes up to ten.
    #[test]
    fn sieve_ten() {
        assert_eq!(PrimeEngine::new().sieve(10), vec![2, 3, 5, 7]);
    }

    /// T1.2: Degenerate limits are empty.
    #[test]
    fn sieve_degenerate() {
        let engine = PrimeEngine::new();
        assert!(engine.sieve(0).is_empty());
        assert!(engine.sieve(1).is_empty());
        assert_eq!(engine.sieve(2), vec![2]);
    }

    /// T1.3: Prime counting function checkpoints.
    #[test]
    fn prime_counts() {
        let engine = PrimeEngine::new();
        assert_eq!(engine.sieve(100).len(), 25);
        assert_eq!(engine.sieve(1000).len(), 168);
        assert_eq!(engine.sieve(100_000).len(), 9592);
    }
}

// =============================================================================
// TIER T2: NAMED SUBSETS
// =============================================================================

mod t2_subsets {
    use super::*;

    /// T2.1: Twin pairs up to twenty.
    #[test]
    fn twins_twenty() {
        let twins = PrimeEngine::new().twin_primes(20);
        for pair in [
            TwinPair(3, 5),
            TwinPair(5, 7),
            TwinPair(11, 13),
            TwinPair(17, 19),
        ] {
            assert!(twins.contains(&pair), "{pair:?}");
        }
    }

    /// T2.2: Mersenne primes up to exponent seven.
    #[test]
    fn mersenne_seven() {
        assert_eq!(PrimeEngine::new().mersenne_primes(7), vec![3, 7, 31, 127]);
    }

    /// T2.3: Composite Mersenne numbers are skipped.
    #[test]
    fn mersenne_forty() {
        let found = PrimeEngine::new().mersenne_primes(40);
        // 2^37 - 1 = 223 * 616318177
        assert_eq!(found.len(), 8);
        assert_eq!(found.last(), Some(&2_147_483_647));
    }

    /// T2.4: Sophie Germain primes up to thirty.
    #[test]
    fn sophie_germain_thirty() {
        assert_eq!(
            PrimeEngine::new().sophie_germain_primes(30),
            vec![2, 3, 5, 11, 23, 29]
        );
    }

    /// T2.5: Palindromic primes up to twenty.
    #[test]
    fn palindromic_twenty() {
        assert_eq!(
            PrimeEngine::new().palindromic_primes(20),
            vec![2, 3, 5, 7, 11]
        );
    }

    /// T2.6: Classification of a Sophie Germain twin.
    #[test]
    fn classify_five() {
        let profile = PrimeEngine::new().classify(5);
        assert!(profile.twin);
        assert!(profile.sophie_germain);
        assert!(profile.palindromic);
        assert!(!profile.favored);
        assert!(profile.digit_sum_prime);
    }
}

// =============================================================================
// TIER T3: RESONANCE
// =============================================================================

mod t3_resonance {
    use super::*;

    const BASE: [u64; 7] = [7, 11, 13, 17, 19, 23, 29];

    /// T3.1: Favored sequence has the exact requested length.
    #[test]
    fn favored_lengths() {
        let engine = PrimeEngine::new();
        for count in [0, 1, 7, 8, 20, 50] {
            assert_eq!(engine.favored_sequence(count).len(), count);
        }
    }

    /// T3.2: Favored sequence starts with the base list.
    #[test]
    fn favored_prefix() {
        let engine = PrimeEngine::new();
        assert_eq!(engine.favored_sequence(4), BASE[..4].to_vec());
        assert_eq!(engine.favored_sequence(20)[..7], BASE);
    }

    /// T3.3: Favored sequence is deterministic across engines.
    #[test]
    fn favored_deterministic() {
        let a = PrimeEngine::new().favored_sequence(30);
        let b = PrimeEngine::with_cache_capacity(0).favored_sequence(30);
        assert_eq!(a, b);
    }

    /// T3.4: Empty list yields no analysis.
    #[test]
    fn empty_analysis() {
        let engine = PrimeEngine::new();
        assert!(engine.analyze(&[]).is_none());
        assert!(engine.extended_report(&[]).is_none());
    }

    /// T3.5: Analysis of the primes below one hundred.
    #[test]
    fn analysis_below_hundred() {
        let engine = PrimeEngine::new();
        let primes = engine.sieve(100);
        let analysis = engine.analyze(&primes).expect("analysis");

        assert_eq!(analysis.total, 25);
        assert_eq!((analysis.min, analysis.max), (2, 97));
        assert_eq!((analysis.min_gap, analysis.max_gap), (1, 8));
        assert_eq!(analysis.twin_count, 8);
        assert_eq!(analysis.palindromic_count, 5);
        assert!((0.0..=1.0).contains(&analysis.resonance_factor));
    }

    /// T3.6: The base list saturates sacred density.
    #[test]
    fn base_list_report() {
        let engine = PrimeEngine::new();
        let report = engine.extended_report(&BASE).expect("report");

        assert_eq!(report.sacred_density, 1.0);
        assert_eq!(report.analysis.total, 7);
        assert_eq!(report.constants_snapshot.phase_distribution.len(), 7);
        assert!((0.0..=1.0).contains(&report.optimization_score));
    }
}
