//! # Pattern Analyzer
//!
//! Gap statistics and composite resonance scores over arbitrary prime lists.
//!
//! Scores are pure functions of the input list and the constants profile.
//! Nothing is cached between calls.
//!
//! ## Resonance factor
//!
//! | Component      | Weight | Definition                                          |
//! |----------------|--------|-----------------------------------------------------|
//! | sacred ratio   | 0.5    | base-list members in input / 7                      |
//! | uniformity     | 0.3    | `1 / (1 + gap_variance / 100)`                      |
//! | enhancement    | 0.2    | phase coherence, anchor divisibility, golden window |
//!
//! The sum is capped at 1.0.

use crate::constants::ResonanceConstants;
use crate::primitives::{ANCHOR_DIVISORS, ANCHOR_WINDOW, BASE_PRIMES, GOLDEN_ALIGNMENT_WINDOW};
use crate::subsets::{is_palindromic, twin_primes};
use crate::types::{ExtendedReport, GapStatistics, PatternAnalysis};

/// Analyzes prime lists against a constants profile.
#[derive(Debug, Clone, Copy)]
pub struct PatternAnalyzer<'a> {
    constants: &'a ResonanceConstants,
}

impl<'a> PatternAnalyzer<'a> {
    #[must_use]
    pub fn new(constants: &'a ResonanceConstants) -> Self {
        Self { constants }
    }

    /// Basic analysis; `None` for an empty list.
    ///
    /// Twin pairs are counted over all primes up to the list's maximum, not
    /// only over the list itself. That sieves up to the maximum, so callers
    /// bound it with [`check_analysis_input`](crate::input::check_analysis_input).
    /// Gap fields are zero for a single element.
    #[must_use]
    pub fn analyze(&self, primes: &[u64]) -> Option<PatternAnalysis> {
        let min = *primes.iter().min()?;
        let max = *primes.iter().max()?;

        let (avg_gap, max_gap, min_gap) = GapStatistics::from_sequence(primes)
            .map_or((0.0, 0, 0), |s| (s.avg_gap, s.max_gap, s.min_gap));

        let analysis = PatternAnalysis {
            total: primes.len(),
            min,
            max,
            avg_gap,
            max_gap,
            min_gap,
            twin_count: twin_primes(max).len(),
            palindromic_count: primes.iter().filter(|&&p| is_palindromic(p)).count(),
            resonance_factor: self.resonance_factor(primes),
        };

        tracing::debug!(total = analysis.total, "pattern analysis complete");
        Some(analysis)
    }

    /// Composite score in `[0, 1]`; 0.0 for fewer than two primes.
    #[must_use]
    pub fn resonance_factor(&self, primes: &[u64]) -> f64 {
        let Some(stats) = GapStatistics::from_sequence(primes) else {
            return 0.0;
        };

        let sacred_ratio = base_members(primes) as f64 / BASE_PRIMES.len() as f64;
        let uniformity = 1.0 / (1.0 + stats.variance / 100.0);
        let enhancement = self.enhancement(primes);

        (0.5 * sacred_ratio + 0.3 * uniformity + 0.2 * enhancement).min(1.0)
    }

    /// `0.4 * phase coherence + 0.3 * anchor relation + 0.3 * golden alignment`.
    #[must_use]
    pub fn enhancement(&self, primes: &[u64]) -> f64 {
        if primes.is_empty() {
            return 0.0;
        }
        let c = self.constants;
        let n = primes.len() as f64;

        let avg_phase = primes.iter().map(|&p| c.phase(p as f64)).sum::<f64>() / n;
        let phase_coherence = 1.0 - (avg_phase - c.pi()).abs() / c.pi();

        let tail = &primes[primes.len().saturating_sub(ANCHOR_WINDOW)..];
        let anchor_related = tail.iter().any(|&p| {
            p % c.anchor_prime() == 0 || ANCHOR_DIVISORS.iter().any(|&d| p % d == 0)
        });

        let golden_target = c.golden_ratio() * 10.0;
        let golden_alignment = primes
            .iter()
            .filter(|&&p| ((p % 100) as f64 - golden_target).abs() < GOLDEN_ALIGNMENT_WINDOW)
            .count() as f64
            / n;

        let anchor_term = if anchor_related { 1.0 } else { 0.0 };

        phase_coherence * 0.4 + anchor_term * 0.3 + golden_alignment * 0.3
    }

    // =========================================================================
    // EXTENDED METRICS
    // =========================================================================

    /// Inverse variance of `(p * R/M + I/M * 10) mod M`, normalized by `M`.
    ///
    /// 0.0 for an empty list, 1.0 for a single element.
    #[must_use]
    pub fn modulation_coherence(&self, primes: &[u64]) -> f64 {
        match primes.len() {
            0 => return 0.0,
            1 => return 1.0,
            _ => {}
        }
        let c = self.constants;

        let modulations: Vec<f64> = primes
            .iter()
            .map(|&p| {
                (p as f64 * c.modulation_real() + c.modulation_imag() * 10.0) % c.z_magnitude()
            })
            .collect();

        let n = modulations.len() as f64;
        let mean = modulations.iter().sum::<f64>() / n;
        let variance = modulations.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n;

        1.0 / (1.0 + variance / c.z_magnitude())
    }

    /// Mean of `|sin(phase(p))|`.
    #[must_use]
    pub fn resonance_strength(&self, primes: &[u64]) -> f64 {
        if primes.is_empty() {
            return 0.0;
        }
        let total: f64 = primes
            .iter()
            .map(|&p| self.constants.phase(p as f64).sin().abs())
            .sum();
        total / primes.len() as f64
    }

    /// Fraction of the list that belongs to the base list.
    #[must_use]
    pub fn sacred_density(&self, primes: &[u64]) -> f64 {
        if primes.is_empty() {
            return 0.0;
        }
        base_members(primes) as f64 / primes.len() as f64
    }

    /// Equal-weight average of coherence, strength, density and enhancement.
    #[must_use]
    pub fn optimization_score(&self, primes: &[u64]) -> f64 {
        if primes.is_empty() {
            return 0.0;
        }
        0.25 * self.modulation_coherence(primes)
            + 0.25 * self.resonance_strength(primes)
            + 0.25 * self.sacred_density(primes)
            + 0.25 * self.enhancement(primes)
    }

    /// Basic analysis merged with the extended metrics; `None` for an empty list.
    #[must_use]
    pub fn extended_report(&self, primes: &[u64]) -> Option<ExtendedReport> {
        let analysis = self.analyze(primes)?;
        Some(ExtendedReport {
            analysis,
            modulation_coherence: self.modulation_coherence(primes),
            resonance_strength: self.resonance_strength(primes),
            sacred_density: self.sacred_density(primes),
            optimization_score: self.optimization_score(primes),
            constants_snapshot: self.constants.snapshot(primes, ANCHOR_WINDOW),
        })
    }
}

/// Count of list elements (with repetition) that appear in the base list.
fn base_members(primes: &[u64]) -> usize {
    primes.iter().filter(|p| BASE_PRIMES.contains(*p)).count()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::sieve;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_list_has_no_analysis() {
        let constants = ResonanceConstants::new();
        let analyzer = PatternAnalyzer::new(&constants);
        assert!(analyzer.analyze(&[]).is_none());
        assert!(analyzer.extended_report(&[]).is_none());
        assert_eq!(analyzer.resonance_factor(&[]), 0.0);
        assert_eq!(analyzer.optimization_score(&[]), 0.0);
    }

    #[test]
    fn single_element() {
        let constants = ResonanceConstants::new();
        let analyzer = PatternAnalyzer::new(&constants);
        let analysis = analyzer.analyze(&[5]).expect("analysis");

        assert_eq!(analysis.total, 1);
        assert_eq!(analysis.min, 5);
        assert_eq!(analysis.max, 5);
        assert_eq!(analysis.avg_gap, 0.0);
        assert_eq!(analysis.max_gap, 0);
        assert_eq!(analysis.min_gap, 0);
        assert_eq!(analysis.twin_count, 1);
        assert_eq!(analysis.palindromic_count, 1);
        assert_eq!(analysis.resonance_factor, 0.0);
        assert_eq!(analyzer.modulation_coherence(&[5]), 1.0);
    }

    #[test]
    fn primes_below_hundred() {
        let constants = ResonanceConstants::new();
        let analyzer = PatternAnalyzer::new(&constants);
        let primes = sieve(100);
        let analysis = analyzer.analyze(&primes).expect("analysis");

        assert_eq!(analysis.total, 25);
        assert_eq!(analysis.min, 2);
        assert_eq!(analysis.max, 97);
        assert!((analysis.avg_gap - 95.0 / 24.0).abs() < EPS);
        assert_eq!(analysis.max_gap, 8);
        assert_eq!(analysis.min_gap, 1);
        assert_eq!(analysis.twin_count, 8);
        assert_eq!(analysis.palindromic_count, 5);
        assert!((analysis.resonance_factor - 0.930_296_055_552_975).abs() < 1e-6);
    }

    #[test]
    fn base_list_resonance() {
        let constants = ResonanceConstants::new();
        let analyzer = PatternAnalyzer::new(&constants);
        let analysis = analyzer.analyze(&BASE_PRIMES).expect("analysis");

        assert_eq!(analysis.twin_count, 4);
        assert_eq!(analysis.palindromic_count, 2);
        assert!((analysis.resonance_factor - 0.949_174_839_023_538_4).abs() < 1e-6);
        assert_eq!(analyzer.sacred_density(&BASE_PRIMES), 1.0);
    }

    #[test]
    fn extended_metrics_below_hundred() {
        let constants = ResonanceConstants::new();
        let analyzer = PatternAnalyzer::new(&constants);
        let primes = sieve(100);
        let report = analyzer.extended_report(&primes).expect("report");

        assert!((report.modulation_coherence - 0.416_715_678_416_431_65).abs() < 1e-6);
        assert!((report.resonance_strength - 0.719_223_924_008_166_8).abs() < 1e-6);
        assert!((report.sacred_density - 0.28).abs() < EPS);
        assert!((report.optimization_score - 0.529_675_859_062_945_3).abs() < 1e-6);
        assert_eq!(report.constants_snapshot.anchor_prime, 7919);
        assert_eq!(report.constants_snapshot.phase_distribution.len(), 10);
        assert!((report.constants_snapshot.phase_distribution[0] - 4.543_173_314_682_91).abs() < 1e-6);
        assert_eq!(report.analysis.total, 25);
    }

    #[test]
    fn anchor_relation_uses_trailing_window() {
        let constants = ResonanceConstants::new();
        let analyzer = PatternAnalyzer::new(&constants);
        let above_hundred: Vec<u64> = sieve(200).into_iter().filter(|&p| p > 100).take(10).collect();

        // 19 leads, so it falls outside the last ten
        let mut leading = vec![19];
        leading.extend(&above_hundred);
        let mut trailing = above_hundred.clone();
        trailing.push(19);

        let outside = analyzer.enhancement(&leading);
        let inside = analyzer.enhancement(&trailing);
        assert!((outside - 0.453_845_057_411_176).abs() < 1e-6);
        assert!((inside - outside - 0.3).abs() < 1e-9);
    }

    #[test]
    fn resonance_factor_bounded_for_reordered_input() {
        let constants = ResonanceConstants::new();
        let analyzer = PatternAnalyzer::new(&constants);
        let factor = analyzer.resonance_factor(&[7, 11, 13, 17, 19, 23, 29, 67, 89, 83, 41, 47]);
        assert!((0.0..=1.0).contains(&factor));
        assert!((factor - 0.713_156_156_533_783_4).abs() < 1e-6);
    }
}
