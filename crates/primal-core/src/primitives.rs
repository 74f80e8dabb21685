//! # Fixed Primitives
//!
//! Compiled-in constants for the primal CORE.
//!
//! These values are immutable at runtime. The scoring thresholds and
//! tolerances below have no derivation; they are reproduced literally so
//! that every consumer sees byte-identical output.

use serde::{Deserialize, Serialize};

/// The fixed ordered base list every favored sequence starts from.
pub const BASE_PRIMES: [u64; 7] = [7, 11, 13, 17, 19, 23, 29];

/// First odd candidate scanned after the base list.
pub const FIRST_EXTENSION_CANDIDATE: u64 = 31;

/// The anchor integer used for logarithmic and modular transforms.
pub const ANCHOR_PRIME: u64 = 7919;

/// Real part of the fixed complex pair (R).
pub const Z_REAL: f64 = 9.0;

/// Imaginary part of the fixed complex pair (I).
pub const Z_IMAG: f64 = 16.0;

// =============================================================================
// CACHE
// =============================================================================

/// Default capacity of the primality memo cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

// =============================================================================
// FAVORED SEQUENCE: ACCEPTANCE PREDICATE
// =============================================================================

/// Weight of the trigonometric phase signal.
pub const PHASE_SIGNAL_WEIGHT: f64 = 0.25;

/// Weight of the modular signal.
pub const MODULAR_SIGNAL_WEIGHT: f64 = 0.20;

/// Weight of the fixed-residue signal.
pub const RESIDUE_SIGNAL_WEIGHT: f64 = 0.15;

/// Weight of the digit-sum / golden-ratio signal.
pub const GOLDEN_SIGNAL_WEIGHT: f64 = 0.20;

/// Weight of the gap signal.
pub const GAP_SIGNAL_WEIGHT: f64 = 0.20;

/// A candidate is accepted only if its weighted signal sum exceeds this.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.3;

/// Tolerance of the modular signal: `|z mod M - R| < MODULAR_TOLERANCE`.
pub const MODULAR_TOLERANCE: f64 = 2.0;

/// Tolerance of the golden signal: `|digit_sum - phi * 10| < GOLDEN_TOLERANCE`.
pub const GOLDEN_TOLERANCE: f64 = 3.0;

/// Residues modulo 100 that fire the fixed-residue signal (trailing digits of 7919).
pub const ANCHOR_RESIDUES: [u64; 2] = [19, 79];

/// Fixed gaps appended after the three derived from R, I and L.
pub const EXTRA_RESONANT_GAPS: [u64; 5] = [6, 12, 18, 24, 30];

// =============================================================================
// PATTERN ANALYSIS
// =============================================================================

/// Number of trailing primes inspected for anchor divisibility.
pub const ANCHOR_WINDOW: usize = 10;

/// Divisors (besides the anchor itself) checked over the trailing window.
pub const ANCHOR_DIVISORS: [u64; 2] = [79, 19];

/// Window around `phi * 10` for the golden-alignment fraction.
pub const GOLDEN_ALIGNMENT_WINDOW: f64 = 5.0;

// =============================================================================
// BOUNDARY LIMITS
// =============================================================================

/// Largest sieve limit accepted at the boundary.
///
/// The sieve allocates `limit + 1` booleans; this keeps it under ~50 MB.
pub const MAX_SIEVE_LIMIT: u64 = 50_000_000;

/// Largest Mersenne exponent whose candidate `2^p - 1` fits in a `u64`.
pub const MAX_MERSENNE_EXPONENT: u64 = 63;

/// Largest favored sequence length accepted at the boundary.
pub const MAX_FAVORED_COUNT: u64 = 10_000;

/// Largest prime list accepted by analysis at the boundary.
pub const MAX_ANALYSIS_LENGTH: usize = 100_000;

/// Computational bounds checked before a request reaches the CORE.
///
/// The CORE itself is total; these exist so that an outer surface cannot
/// request a sieve that exhausts memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub max_sieve_limit: u64,
    pub max_mersenne_exponent: u64,
    pub max_favored_count: u64,
    pub max_analysis_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_sieve_limit: MAX_SIEVE_LIMIT,
            max_mersenne_exponent: MAX_MERSENNE_EXPONENT,
            max_favored_count: MAX_FAVORED_COUNT,
            max_analysis_length: MAX_ANALYSIS_LENGTH,
        }
    }
}

impl Limits {
    /// Clamp every bound to the compiled-in ceiling.
    ///
    /// Configuration may lower limits but never raise them.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            max_sieve_limit: self.max_sieve_limit.min(MAX_SIEVE_LIMIT),
            max_mersenne_exponent: self.max_mersenne_exponent.min(MAX_MERSENNE_EXPONENT),
            max_favored_count: self.max_favored_count.min(MAX_FAVORED_COUNT),
            max_analysis_length: self.max_analysis_length.min(MAX_ANALYSIS_LENGTH),
        }
    }
}
