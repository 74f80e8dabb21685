//! # primal-core
//!
//! The deterministic prime engine for Primal - THE LOGIC.
//!
//! This crate implements primality testing, prime enumeration, named prime
//! subsets, the favored-sequence composer and the resonance pattern analyzer.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is pure: every score is recomputed from its input, nothing is persisted
//! - Holds exactly one piece of shared state, the bounded primality cache
//! - Never fails on numeric input; only the `input` boundary returns errors
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod analyzer;
pub mod composer;
pub mod constants;
pub mod engine;
pub mod input;
pub mod oracle;
pub mod primitives;
pub mod sieve;
pub mod subsets;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    CacheStats, ConstantsSnapshot, ExtendedReport, GapStatistics, PatternAnalysis, PrimalError,
    PrimeCategory, PrimeProfile, TwinPair,
};

// =============================================================================
// RE-EXPORTS: Prime Engine
// =============================================================================

pub use analyzer::PatternAnalyzer;
pub use composer::{ResonanceSignals, SequenceComposer};
pub use constants::{ResonanceConstants, WeightTable};
pub use engine::PrimeEngine;
pub use oracle::{PrimalityOracle, trial_division};
pub use primitives::Limits;
pub use sieve::sieve;
pub use subsets::{
    digit_sum, is_palindromic, mersenne_primes, palindromic_primes, sophie_germain_primes,
    twin_primes,
};
