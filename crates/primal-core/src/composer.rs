//! # Sequence Composer
//!
//! Grows the favored prime sequence.
//!
//! The sequence starts with the fixed base list. Odd candidates from 31
//! upward are kept when they are prime, their weighted resonance signals
//! exceed [`ACCEPTANCE_THRESHOLD`], and their digit sum is itself prime.
//! The accepted tail is then reordered by descending resonance index; the
//! base list keeps its original order at the front.
//!
//! Every threshold here is a literal constant from [`crate::primitives`].
//! The filter is a fixed heuristic and must be reproduced exactly.

use crate::constants::ResonanceConstants;
use crate::oracle::PrimalityOracle;
use crate::primitives::{
    ACCEPTANCE_THRESHOLD, ANCHOR_RESIDUES, BASE_PRIMES, FIRST_EXTENSION_CANDIDATE,
    GAP_SIGNAL_WEIGHT, GOLDEN_SIGNAL_WEIGHT, GOLDEN_TOLERANCE, MODULAR_SIGNAL_WEIGHT,
    MODULAR_TOLERANCE, PHASE_SIGNAL_WEIGHT, RESIDUE_SIGNAL_WEIGHT,
};
use crate::subsets::digit_sum;
use serde::{Deserialize, Serialize};

// =============================================================================
// SIGNALS
// =============================================================================

/// The five boolean signals evaluated for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResonanceSignals {
    /// `|sin(phase(candidate))| > (L/M) / 10`.
    pub phase: bool,
    /// `|(candidate * R/M + I/M * 100) mod M - R| < 2`.
    pub modular: bool,
    /// `candidate mod 100` is 19 or 79.
    pub residue: bool,
    /// `|digit_sum - phi * 10| < 3`.
    pub golden: bool,
    /// Gap to the last accepted prime is in the resonant gap set.
    pub gap: bool,
}

impl ResonanceSignals {
    /// Weighted sum of the signals, in `[0, 1]`.
    #[must_use]
    pub fn score(&self) -> f64 {
        [
            (self.phase, PHASE_SIGNAL_WEIGHT),
            (self.modular, MODULAR_SIGNAL_WEIGHT),
            (self.residue, RESIDUE_SIGNAL_WEIGHT),
            (self.golden, GOLDEN_SIGNAL_WEIGHT),
            (self.gap, GAP_SIGNAL_WEIGHT),
        ]
        .into_iter()
        .filter_map(|(fired, weight)| fired.then_some(weight))
        .sum()
    }
}

// =============================================================================
// COMPOSER
// =============================================================================

/// Builds favored sequences from an oracle and a constants profile.
#[derive(Debug, Clone, Copy)]
pub struct SequenceComposer<'a> {
    oracle: &'a PrimalityOracle,
    constants: &'a ResonanceConstants,
}

impl<'a> SequenceComposer<'a> {
    #[must_use]
    pub fn new(oracle: &'a PrimalityOracle, constants: &'a ResonanceConstants) -> Self {
        Self { oracle, constants }
    }

    /// Exactly `count` primes: the base list (truncated if `count <= 7`),
    /// followed by the accepted extension primes in resonance order.
    #[must_use]
    pub fn favored_sequence(&self, count: usize) -> Vec<u64> {
        if count <= BASE_PRIMES.len() {
            return BASE_PRIMES[..count].to_vec();
        }

        let mut sequence = BASE_PRIMES.to_vec();
        sequence.reserve(count - BASE_PRIMES.len());

        let mut candidate = FIRST_EXTENSION_CANDIDATE;
        while sequence.len() < count {
            let last = sequence.last().copied().unwrap_or(BASE_PRIMES[6]);
            if self.oracle.is_prime(candidate) && self.accepts(candidate, last) {
                sequence.push(candidate);
                tracing::debug!(candidate, total = sequence.len(), "favored prime accepted");
            }
            candidate += 2;
        }

        let tail = sequence.split_off(BASE_PRIMES.len());
        sequence.extend(self.reorder_tail(tail));
        sequence
    }

    /// Evaluate the five signals for `candidate` given the last accepted prime.
    #[must_use]
    pub fn signals(&self, candidate: u64, last_accepted: u64) -> ResonanceSignals {
        let c = self.constants;
        let value = candidate as f64;

        let phase = c.phase(value).sin().abs() > c.lambda_z_ratio() / 10.0;

        let z = value * c.modulation_real() + c.modulation_imag() * 100.0;
        let modular = ((z % c.z_magnitude()) - c.z_real()).abs() < MODULAR_TOLERANCE;

        let residue = ANCHOR_RESIDUES.contains(&(candidate % 100));

        let sum = digit_sum(candidate) as f64;
        let golden = (sum - c.golden_ratio() * 10.0).abs() < GOLDEN_TOLERANCE;

        let gap = candidate
            .checked_sub(last_accepted)
            .is_some_and(|g| c.resonant_gaps().contains(&g));

        ResonanceSignals {
            phase,
            modular,
            residue,
            golden,
            gap,
        }
    }

    /// Acceptance predicate for a prime candidate.
    #[must_use]
    pub fn accepts(&self, candidate: u64, last_accepted: u64) -> bool {
        self.signals(candidate, last_accepted).score() > ACCEPTANCE_THRESHOLD
            && self.oracle.is_prime(digit_sum(candidate))
    }

    /// Average of `frac(p * R/M)`, `|sin(p * L/M)|` and
    /// `(p mod floor(phi * 100)) / 100`.
    #[must_use]
    pub fn resonance_index(&self, prime: u64) -> f64 {
        let c = self.constants;
        let value = prime as f64;

        let z_factor = (value * c.modulation_real()) % 1.0;
        let lambda_factor = (value * c.lambda_z_ratio()).sin().abs();
        let golden_factor = (prime % c.golden_modulus()) as f64 / 100.0;

        (z_factor + lambda_factor + golden_factor) / 3.0
    }

    /// Stable sort by descending resonance index.
    fn reorder_tail(&self, tail: Vec<u64>) -> Vec<u64> {
        let mut indexed: Vec<(u64, f64)> = tail
            .into_iter()
            .map(|p| (p, self.resonance_index(p)))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));

        tracing::debug!(count = indexed.len(), "favored tail reordered");
        indexed.into_iter().map(|(p, _)| p).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
