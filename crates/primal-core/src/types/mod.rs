//! # Core Type Definitions
//!
//! This module contains the value types shared across the primal CORE:
//! - Subset records (`TwinPair`)
//! - Analysis records (`GapStatistics`, `PatternAnalysis`, `ExtendedReport`)
//! - Classification records (`PrimeCategory`, `PrimeProfile`)
//! - Cache bookkeeping (`CacheStats`)
//! - Error types (`PrimalError`)
//!
//! All records are plain values. None of them is stored by the CORE; every
//! score is recomputed from its input on each call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// TWIN PAIR
// =============================================================================

/// An ordered pair `(p, p + 2)` of primes.
///
/// Serializes as a two-element array, e.g. `[11, 13]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TwinPair(pub u64, pub u64);

impl TwinPair {
    /// Build the pair starting at `p`.
    #[must_use]
    pub const fn starting_at(p: u64) -> Self {
        Self(p, p + 2)
    }

    /// The smaller member.
    #[must_use]
    pub const fn first(self) -> u64 {
        self.0
    }

    /// The larger member.
    #[must_use]
    pub const fn second(self) -> u64 {
        self.1
    }
}

// =============================================================================
// GAP STATISTICS
// =============================================================================

/// Statistics over consecutive differences of a prime list.
///
/// Gaps are signed: a list reordered by the composer may step downward.
/// They are `i128` so that any difference of two `u64` values is exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapStatistics {
    pub min_gap: i128,
    pub max_gap: i128,
    pub avg_gap: f64,
    /// Population variance of the gaps.
    pub variance: f64,
}

impl GapStatistics {
    /// Consecutive differences `primes[i + 1] - primes[i]`.
    #[must_use]
    pub fn gaps(primes: &[u64]) -> Vec<i128> {
        primes
            .windows(2)
            .map(|w| i128::from(w[1]) - i128::from(w[0]))
            .collect()
    }

    /// Compute statistics; `None` for lists shorter than two.
    #[must_use]
    pub fn from_sequence(primes: &[u64]) -> Option<Self> {
        let gaps = Self::gaps(primes);
        let min_gap = *gaps.iter().min()?;
        let max_gap = *gaps.iter().max()?;

        let n = gaps.len() as f64;
        let avg_gap = gaps.iter().map(|&g| g as f64).sum::<f64>() / n;
        let variance = gaps
            .iter()
            .map(|&g| (g as f64 - avg_gap).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            min_gap,
            max_gap,
            avg_gap,
            variance,
        })
    }
}

// =============================================================================
// ANALYSIS RECORDS
// =============================================================================

/// Result of analyzing a non-empty prime list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub total: usize,
    pub min: u64,
    pub max: u64,
    pub avg_gap: f64,
    pub max_gap: i128,
    pub min_gap: i128,
    /// Twin pairs with both members at most `max`.
    pub twin_count: usize,
    pub palindromic_count: usize,
    pub resonance_factor: f64,
}

/// Fixed constants echoed back in an extended report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantsSnapshot {
    pub z_magnitude: f64,
    pub lambda: f64,
    pub anchor_prime: u64,
    pub golden_ratio: f64,
    /// Phase of each of the last ten input primes.
    pub phase_distribution: Vec<f64>,
}

/// `PatternAnalysis` extended with constants-profile metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedReport {
    #[serde(flatten)]
    pub analysis: PatternAnalysis,
    pub modulation_coherence: f64,
    pub resonance_strength: f64,
    pub sacred_density: f64,
    pub optimization_score: f64,
    pub constants_snapshot: ConstantsSnapshot,
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Named prime categories carried by the weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimeCategory {
    Twin,
    Palindromic,
    Mersenne,
    SophieGermain,
    FavoredSequence,
    DigitSumPrime,
}

impl PrimeCategory {
    /// Every category, in table order.
    pub const ALL: [PrimeCategory; 6] = [
        PrimeCategory::Twin,
        PrimeCategory::Palindromic,
        PrimeCategory::Mersenne,
        PrimeCategory::SophieGermain,
        PrimeCategory::FavoredSequence,
        PrimeCategory::DigitSumPrime,
    ];

    /// Stable label, identical to the serialized form.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PrimeCategory::Twin => "twin",
            PrimeCategory::Palindromic => "palindromic",
            PrimeCategory::Mersenne => "mersenne",
            PrimeCategory::SophieGermain => "sophie_germain",
            PrimeCategory::FavoredSequence => "favored_sequence",
            PrimeCategory::DigitSumPrime => "digit_sum_prime",
        }
    }
}

impl std::fmt::Display for PrimeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Membership of a single integer in every named category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimeProfile {
    pub value: u64,
    pub is_prime: bool,
    pub twin: bool,
    pub palindromic: bool,
    pub mersenne: bool,
    pub sophie_germain: bool,
    pub favored: bool,
    pub digit_sum_prime: bool,
    pub composite_resonance: f64,
}

impl PrimeProfile {
    /// Categories this profile belongs to, in table order.
    #[must_use]
    pub fn categories(&self) -> Vec<PrimeCategory> {
        let flags = [
            self.twin,
            self.palindromic,
            self.mersenne,
            self.sophie_germain,
            self.favored,
            self.digit_sum_prime,
        ];
        PrimeCategory::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(category, set)| set.then_some(category))
            .collect()
    }
}

// =============================================================================
// CACHE STATS
// =============================================================================

/// Snapshot of the primality oracle's memo cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
    pub capacity: usize,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced at the boundary of the primal system.
///
/// The CORE computations are total and never fail; these variants describe
/// malformed input, bound violations and failures of the outer surfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimalError {
    /// The input is not an integer (or list of integers).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A boundary bound was exceeded.
    #[error("{what} {value} exceeds maximum {max}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        max: u64,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
