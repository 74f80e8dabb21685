//! # Boundary Input
//!
//! Parsing and bound checks applied before a request reaches the core.
//!
//! - Non-integer text is rejected with `PrimalError::InvalidInput`
//! - Negative integers are clamped to 0 and flow on as empty/false results
//! - Requests above the configured [`Limits`] are rejected with
//!   `PrimalError::LimitExceeded`
//!
//! The core functions themselves never fail; only this module does.

use crate::primitives::Limits;
use crate::types::PrimalError;

/// Parse a single integer, clamping negatives to 0.
pub fn parse_integer(raw: &str) -> Result<u64, PrimalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PrimalError::InvalidInput("empty value".to_string()));
    }

    match trimmed.parse::<i128>() {
        Ok(value) if value < 0 => Ok(0),
        Ok(value) => u64::try_from(value)
            .map_err(|_| PrimalError::InvalidInput(format!("{trimmed} is out of range"))),
        Err(_) => Err(PrimalError::InvalidInput(format!(
            "{trimmed} is not an integer"
        ))),
    }
}

/// Clamp a signed value to the non-negative domain.
#[must_use]
pub fn clamp_signed(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

/// Parse a comma or whitespace separated list of integers.
///
/// Empty text yields an empty list; any malformed item fails the whole list.
pub fn parse_prime_list(raw: &str) -> Result<Vec<u64>, PrimalError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(parse_integer)
        .collect()
}

// =============================================================================
// BOUND CHECKS
// =============================================================================

fn check(what: &'static str, value: u64, max: u64) -> Result<u64, PrimalError> {
    if value > max {
        tracing::debug!(what, value, max, "request rejected");
        return Err(PrimalError::LimitExceeded { what, value, max });
    }
    Ok(value)
}

pub fn check_sieve_limit(limit: u64, limits: &Limits) -> Result<u64, PrimalError> {
    check("limit", limit, limits.max_sieve_limit)
}

pub fn check_mersenne_exponent(exponent: u64, limits: &Limits) -> Result<u64, PrimalError> {
    check("max_exponent", exponent, limits.max_mersenne_exponent)
}

pub fn check_favored_count(count: u64, limits: &Limits) -> Result<usize, PrimalError> {
    let count = check("count", count, limits.max_favored_count)?;
    usize::try_from(count).map_err(|_| PrimalError::InvalidInput(format!("{count} is out of range")))
}

/// Reject lists that are too long or whose largest value exceeds the sieve
/// bound.
///
/// Analysis counts twin pairs over every prime up to the list's maximum, so
/// the maximum is held to the same ceiling as a sieve request.
pub fn check_analysis_input(primes: &[u64], limits: &Limits) -> Result<(), PrimalError> {
    check(
        "list length",
        primes.len() as u64,
        limits.max_analysis_length as u64,
    )?;
    if let Some(&largest) = primes.iter().max() {
        check("largest prime", largest, limits.max_sieve_limit)?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
