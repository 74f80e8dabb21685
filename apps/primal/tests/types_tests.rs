//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use primal::api::{
    AnalyzeResponse, ClassifyResponse, ErrorResponse, HealthResponse, LimitQuery, PrimeResponse,
    PrimesRequest, PrimesResponse, ReportResponse, StatusResponse, TwinsResponse,
};
use primal_core::{CacheStats, Limits, PrimeEngine, TwinPair};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status":"ok","version":"1.0.0"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.version, "1.0.0");
}

// =============================================================================
// STATUS RESPONSE TESTS
// =============================================================================

#[test]
fn test_status_response_serialization() {
    let status = StatusResponse {
        cache: CacheStats {
            hits: 3,
            misses: 2,
            len: 2,
            capacity: 10,
        },
        limits: Limits::default(),
    };

    let json = serde_json::to_string(&status).unwrap();
    assert!(json.contains("\"hits\":3"));
    assert!(json.contains("\"capacity\":10"));
    assert!(json.contains("\"max_sieve_limit\":50000000"));
    assert!(json.contains("\"max_mersenne_exponent\":63"));
}

// =============================================================================
// ERROR RESPONSE TESTS
// =============================================================================

#[test]
fn test_error_response_shape() {
    let error = ErrorResponse::new("Invalid input: x is not an integer");
    let value = serde_json::to_value(&error).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "success": false,
            "error": "Invalid input: x is not an integer"
        })
    );
}

// =============================================================================
// PRIMALITY RESPONSE TESTS
// =============================================================================

#[test]
fn test_prime_response_serialization() {
    let json = serde_json::to_string(&PrimeResponse::new(97, true)).unwrap();
    assert_eq!(json, r#"{"success":true,"value":97,"is_prime":true}"#);
}

#[test]
fn test_classify_response_is_flat() {
    let engine = PrimeEngine::new();
    let response = ClassifyResponse::new(engine.classify(127));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["value"], 127);
    assert_eq!(value["mersenne"], true);
    assert!(
        value["categories"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("mersenne"))
    );
    assert!(value.get("profile").is_none());
}

// =============================================================================
// LIST RESPONSE TESTS
// =============================================================================

#[test]
fn test_primes_response_counts() {
    let response = PrimesResponse::new(vec![2, 3, 5, 7]);
    assert!(response.success);
    assert_eq!(response.count, 4);

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"success":true,"count":4,"primes":[2,3,5,7]}"#);
}

#[test]
fn test_twins_response_pairs() {
    let response = TwinsResponse::new(vec![TwinPair(3, 5), TwinPair(5, 7)]);
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"pairs\":[[3,5],[5,7]]"));

    let parsed: TwinsResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.pairs[1].second(), 7);
}

// =============================================================================
// REQUEST TESTS
// =============================================================================

#[test]
fn test_primes_request_accepts_negatives() {
    let request: PrimesRequest = serde_json::from_str(r#"{"primes":[2,-3,5]}"#).unwrap();
    assert_eq!(request.primes, vec![2, -3, 5]);
}

#[test]
fn test_primes_request_rejects_floats() {
    let result: Result<PrimesRequest, _> = serde_json::from_str(r#"{"primes":[2.5]}"#);
    assert!(result.is_err());
}

#[test]
fn test_limit_query_is_optional() {
    let query: LimitQuery = serde_json::from_str("{}").unwrap();
    assert!(query.limit.is_none());
}

// =============================================================================
// ANALYSIS RESPONSE TESTS
// =============================================================================

#[test]
fn test_analyze_response_null_analysis() {
    let json = serde_json::to_string(&AnalyzeResponse::new(None)).unwrap();
    assert_eq!(json, r#"{"success":true,"analysis":null}"#);
}

#[test]
fn test_analyze_response_field_names() {
    let engine = PrimeEngine::new();
    let response = AnalyzeResponse::new(engine.analyze(&[2, 3, 5, 7]));
    let value = serde_json::to_value(&response).unwrap();
    let analysis = &value["analysis"];

    for key in [
        "total",
        "min",
        "max",
        "avg_gap",
        "max_gap",
        "min_gap",
        "twin_count",
        "palindromic_count",
        "resonance_factor",
    ] {
        assert!(analysis.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_report_response_field_names() {
    let engine = PrimeEngine::new();
    let response = ReportResponse::new(engine.extended_report(&[2, 3, 5, 7]));
    let value = serde_json::to_value(&response).unwrap();
    let analysis = &value["analysis"];

    for key in [
        "total",
        "resonance_factor",
        "modulation_coherence",
        "resonance_strength",
        "sacred_density",
        "optimization_score",
        "constants_snapshot",
    ] {
        assert!(analysis.get(key).is_some(), "missing {key}");
    }
    let snapshot = &analysis["constants_snapshot"];
    for key in [
        "z_magnitude",
        "lambda",
        "anchor_prime",
        "golden_ratio",
        "phase_distribution",
    ] {
        assert!(snapshot.get(key).is_some(), "missing {key}");
    }
}
