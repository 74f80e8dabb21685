//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Every successful body carries `"success": true`; every failure is an
//! [`ErrorResponse`].

use primal_core::{
    CacheStats, ExtendedReport, Limits, PatternAnalysis, PrimeCategory, PrimeProfile, TwinPair,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Oracle cache counters and the active request limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub cache: CacheStats,
    pub limits: Limits,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body of every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

// =============================================================================
// QUERY PARAMETERS
// =============================================================================

/// `?limit=` query. Kept as text so malformed values reach the boundary parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

/// `?max_exponent=` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExponentQuery {
    pub max_exponent: Option<String>,
}

/// `?count=` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountQuery {
    pub count: Option<String>,
}

// =============================================================================
// PRIMALITY
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeResponse {
    pub success: bool,
    pub value: u64,
    pub is_prime: bool,
}

impl PrimeResponse {
    pub fn new(value: u64, is_prime: bool) -> Self {
        Self {
            success: true,
            value,
            is_prime,
        }
    }
}

/// A classification profile plus the categories it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    #[serde(flatten)]
    pub profile: PrimeProfile,
    pub categories: Vec<PrimeCategory>,
}

impl ClassifyResponse {
    pub fn new(profile: PrimeProfile) -> Self {
        Self {
            success: true,
            categories: profile.categories(),
            profile,
        }
    }
}

// =============================================================================
// LISTS
// =============================================================================

/// Any ascending list of primes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimesResponse {
    pub success: bool,
    pub count: usize,
    pub primes: Vec<u64>,
}

impl PrimesResponse {
    pub fn new(primes: Vec<u64>) -> Self {
        Self {
            success: true,
            count: primes.len(),
            primes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwinsResponse {
    pub success: bool,
    pub count: usize,
    pub pairs: Vec<TwinPair>,
}

impl TwinsResponse {
    pub fn new(pairs: Vec<TwinPair>) -> Self {
        Self {
            success: true,
            count: pairs.len(),
            pairs,
        }
    }
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Body of `POST /analyze` and `POST /report`.
///
/// Signed so that negative entries clamp to 0 instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimesRequest {
    pub primes: Vec<i64>,
}

/// `analysis` is `null` for an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: Option<PatternAnalysis>,
}

impl AnalyzeResponse {
    pub fn new(analysis: Option<PatternAnalysis>) -> Self {
        Self {
            success: true,
            analysis,
        }
    }
}

/// `analysis` is `null` for an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub success: bool,
    pub analysis: Option<ExtendedReport>,
}

impl ReportResponse {
    pub fn new(report: Option<ExtendedReport>) -> Self {
        Self {
            success: true,
            analysis: report,
        }
    }
}
