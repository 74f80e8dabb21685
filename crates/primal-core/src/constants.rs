//! # Resonance Constants
//!
//! The immutable constants profile and the category weight table.
//!
//! Both are built once and handed by reference to the composer and the
//! analyzer. Fields are private; nothing can change a profile after
//! construction.

use crate::primitives::{ANCHOR_PRIME, EXTRA_RESONANT_GAPS, Z_IMAG, Z_REAL};
use crate::types::{ConstantsSnapshot, PrimeCategory};
use serde::Serialize;
use std::collections::BTreeMap;
use std::f64::consts::{E, PI, TAU};

/// Base value scaled by every category weight in [`WeightTable::composite_resonance`].
const COMPOSITE_BASE: f64 = 0.1;

/// Named gap families between consecutive primes.
static GAP_FAMILIES: [(&str, &[u64]); 6] = [
    ("twins", &[2]),
    ("cousins", &[4]),
    ("sexy", &[6]),
    ("harmonic", &[8, 10, 12, 14]),
    ("fibonacci", &[2, 3, 5, 8, 13]),
    ("quantum", &[18, 20, 24, 30, 42]),
];

// =============================================================================
// CONSTANTS PROFILE
// =============================================================================

/// Fixed numeric profile: anchor `A`, `L = ln(A)`, complex pair `(R, I)`
/// with magnitude `M`, the ratios derived from them, phi, e and pi.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResonanceConstants {
    anchor_prime: u64,
    lambda: f64,
    z_real: f64,
    z_imag: f64,
    z_magnitude: f64,
    modulation_real: f64,
    modulation_imag: f64,
    lambda_z_ratio: f64,
    z_lambda_ratio: f64,
    golden_ratio: f64,
    euler: f64,
    pi: f64,
}

impl Default for ResonanceConstants {
    fn default() -> Self {
        Self::new()
    }
}

impl ResonanceConstants {
    /// Build the standard profile (`A = 7919`, `(R, I) = (9, 16)`).
    #[must_use]
    pub fn new() -> Self {
        let lambda = (ANCHOR_PRIME as f64).ln();
        let z_magnitude = Z_REAL.hypot(Z_IMAG);

        Self {
            anchor_prime: ANCHOR_PRIME,
            lambda,
            z_real: Z_REAL,
            z_imag: Z_IMAG,
            z_magnitude,
            modulation_real: Z_REAL / z_magnitude,
            modulation_imag: Z_IMAG / z_magnitude,
            lambda_z_ratio: lambda / z_magnitude,
            z_lambda_ratio: z_magnitude / lambda,
            golden_ratio: (1.0 + 5f64.sqrt()) / 2.0,
            euler: E,
            pi: PI,
        }
    }

    /// The anchor integer `A`.
    #[must_use]
    pub fn anchor_prime(&self) -> u64 {
        self.anchor_prime
    }

    /// `L = ln(A)`.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// `R`.
    #[must_use]
    pub fn z_real(&self) -> f64 {
        self.z_real
    }

    /// `I`.
    #[must_use]
    pub fn z_imag(&self) -> f64 {
        self.z_imag
    }

    /// `M = sqrt(R^2 + I^2)`.
    #[must_use]
    pub fn z_magnitude(&self) -> f64 {
        self.z_magnitude
    }

    /// `R / M`.
    #[must_use]
    pub fn modulation_real(&self) -> f64 {
        self.modulation_real
    }

    /// `I / M`.
    #[must_use]
    pub fn modulation_imag(&self) -> f64 {
        self.modulation_imag
    }

    /// `L / M`.
    #[must_use]
    pub fn lambda_z_ratio(&self) -> f64 {
        self.lambda_z_ratio
    }

    /// `M / L`.
    #[must_use]
    pub fn z_lambda_ratio(&self) -> f64 {
        self.z_lambda_ratio
    }

    #[must_use]
    pub fn golden_ratio(&self) -> f64 {
        self.golden_ratio
    }

    #[must_use]
    pub fn euler(&self) -> f64 {
        self.euler
    }

    #[must_use]
    pub fn pi(&self) -> f64 {
        self.pi
    }

    // =========================================================================
    // DERIVED TRANSFORMS
    // =========================================================================

    /// Phase of a value: `(value * L) mod 2pi`, in `[0, 2pi)` for `value >= 0`.
    #[must_use]
    pub fn phase(&self, value: f64) -> f64 {
        (value * self.lambda) % TAU
    }

    /// Gap set of the favored-sequence gap signal.
    ///
    /// `R`, `I` and `L` rounded to integers, then `{6, 12, 18, 24, 30}`.
    #[must_use]
    pub fn resonant_gaps(&self) -> [u64; 8] {
        let [a, b, c, d, e] = EXTRA_RESONANT_GAPS;
        [
            self.z_real.round() as u64,
            self.z_imag.round() as u64,
            self.lambda.round() as u64,
            a,
            b,
            c,
            d,
            e,
        ]
    }

    /// `floor(phi * 100)`, the modulus of the golden reordering factor.
    #[must_use]
    pub fn golden_modulus(&self) -> u64 {
        (self.golden_ratio * 100.0).floor() as u64
    }

    /// Scale each value by `R/M`, offset by `(I/M) * 0.01`, then rescale so
    /// the absolute sum matches the input's.
    #[must_use]
    pub fn apply_z_modulation(&self, values: &[f64]) -> Vec<f64> {
        let modulated: Vec<f64> = values
            .iter()
            .map(|v| v * self.modulation_real + self.modulation_imag * 0.01)
            .collect();

        let sum_modulated: f64 = modulated.iter().map(|v| v.abs()).sum();
        if sum_modulated > 0.0 {
            let sum_original: f64 = values.iter().map(|v| v.abs()).sum();
            let factor = sum_original / sum_modulated;
            modulated.into_iter().map(|v| v * factor).collect()
        } else {
            modulated
        }
    }

    /// Gaps belonging to a named family; unknown names yield an empty slice.
    #[must_use]
    pub fn gap_family(&self, name: &str) -> &'static [u64] {
        match GAP_FAMILIES.iter().find(|(family, _)| *family == name) {
            Some((_, gaps)) => *gaps,
            None => &[],
        }
    }

    /// Names of every gap family.
    #[must_use]
    pub fn gap_family_names(&self) -> Vec<&'static str> {
        GAP_FAMILIES.iter().map(|(name, _)| *name).collect()
    }

    /// Whether `gap` belongs to any named family.
    #[must_use]
    pub fn is_resonant_gap(&self, gap: u64) -> bool {
        GAP_FAMILIES.iter().any(|(_, gaps)| gaps.contains(&gap))
    }

    /// Constants echoed in an extended report, with the phases of the last
    /// `window` primes.
    #[must_use]
    pub fn snapshot(&self, primes: &[u64], window: usize) -> ConstantsSnapshot {
        let tail = &primes[primes.len().saturating_sub(window)..];
        ConstantsSnapshot {
            z_magnitude: self.z_magnitude,
            lambda: self.lambda,
            anchor_prime: self.anchor_prime,
            golden_ratio: self.golden_ratio,
            phase_distribution: tail.iter().map(|&p| self.phase(p as f64)).collect(),
        }
    }
}

// =============================================================================
// WEIGHT TABLE
// =============================================================================

/// Multiplicative weight per named prime category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    weights: BTreeMap<PrimeCategory, f64>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightTable {
    /// The standard table.
    #[must_use]
    pub fn new() -> Self {
        let weights = BTreeMap::from([
            (PrimeCategory::Twin, 1.5),
            (PrimeCategory::Palindromic, 1.3),
            (PrimeCategory::Mersenne, 2.0),
            (PrimeCategory::SophieGermain, 1.4),
            (PrimeCategory::FavoredSequence, 1.8),
            (PrimeCategory::DigitSumPrime, 1.2),
        ]);
        Self { weights }
    }

    /// Weight of a category.
    #[must_use]
    pub fn weight(&self, category: PrimeCategory) -> f64 {
        self.weights.get(&category).copied().unwrap_or(1.0)
    }

    /// `min(1, 0.1 * product of weights)` over the given categories.
    #[must_use]
    pub fn composite_resonance(&self, categories: &[PrimeCategory]) -> f64 {
        let product: f64 = categories.iter().map(|&c| self.weight(c)).product();
        (COMPOSITE_BASE * product).min(1.0)
    }

    /// Iterate `(category, weight)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimeCategory, f64)> + '_ {
        self.weights.iter().map(|(&c, &w)| (c, w))
    }
}

// =============================================================================
// TESTS
// =============================================================================
