//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Every numeric parameter is parsed with `primal_core::input`, so malformed
//! text and bound violations both surface as 400 with an [`ErrorResponse`].

use super::{
    AppState,
    types::{
        AnalyzeResponse, ClassifyResponse, CountQuery, ErrorResponse, ExponentQuery,
        HealthResponse, LimitQuery, PrimeResponse, PrimesRequest, PrimesResponse, ReportResponse,
        StatusResponse, TwinsResponse,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use primal_core::{
    PrimalError,
    input::{
        check_analysis_input, check_favored_count, check_mersenne_exponent, check_sieve_limit,
        clamp_signed, parse_integer,
    },
};

/// Default `limit` for list endpoints.
pub const DEFAULT_LIMIT: u64 = 100;
/// Default `max_exponent` for `/mersenne`.
pub const DEFAULT_MAX_EXPONENT: u64 = 31;
/// Default `count` for `/favored`.
pub const DEFAULT_FAVORED_COUNT: u64 = 50;

// =============================================================================
// ERRORS
// =============================================================================

/// A rejected request.
#[derive(Debug)]
pub struct ApiError(PrimalError);

impl From<PrimalError> for ApiError {
    fn from(err: PrimalError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PrimalError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "request rejected");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

fn param_or(raw: Option<&str>, default: u64) -> Result<u64, PrimalError> {
    raw.map_or(Ok(default), parse_integer)
}

// =============================================================================
// HEALTH & STATUS
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Cache counters and active limits.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = StatusResponse {
        cache: state.engine.cache_stats(),
        limits: state.limits,
    };
    (StatusCode::OK, Json(response))
}

// =============================================================================
// PRIMALITY HANDLERS
// =============================================================================

/// `GET /prime/{n}`
pub async fn prime_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<PrimeResponse> {
    let n = parse_integer(&raw)?;
    Ok(Json(PrimeResponse::new(n, state.engine.is_prime(n))))
}

/// `GET /classify/{n}`
pub async fn classify_handler(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<ClassifyResponse> {
    let n = parse_integer(&raw)?;
    Ok(Json(ClassifyResponse::new(state.engine.classify(n))))
}

// =============================================================================
// ENUMERATION HANDLERS
// =============================================================================

/// `GET /sieve?limit=`
pub async fn sieve_handler(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<PrimesResponse> {
    let limit = check_sieve_limit(param_or(query.limit.as_deref(), DEFAULT_LIMIT)?, &state.limits)?;
    Ok(Json(PrimesResponse::new(state.engine.sieve(limit))))
}

/// `GET /twins?limit=`
pub async fn twins_handler(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<TwinsResponse> {
    let limit = check_sieve_limit(param_or(query.limit.as_deref(), DEFAULT_LIMIT)?, &state.limits)?;
    Ok(Json(TwinsResponse::new(state.engine.twin_primes(limit))))
}

/// `GET /mersenne?max_exponent=`
pub async fn mersenne_handler(
    State(state): State<AppState>,
    Query(query): Query<ExponentQuery>,
) -> ApiResult<PrimesResponse> {
    let exponent = check_mersenne_exponent(
        param_or(query.max_exponent.as_deref(), DEFAULT_MAX_EXPONENT)?,
        &state.limits,
    )?;
    Ok(Json(PrimesResponse::new(state.engine.mersenne_primes(exponent))))
}

/// `GET /sophie-germain?limit=`
pub async fn sophie_germain_handler(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<PrimesResponse> {
    let limit = check_sieve_limit(param_or(query.limit.as_deref(), DEFAULT_LIMIT)?, &state.limits)?;
    Ok(Json(PrimesResponse::new(
        state.engine.sophie_germain_primes(limit),
    )))
}

/// `GET /palindromic?limit=`
pub async fn palindromic_handler(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<PrimesResponse> {
    let limit = check_sieve_limit(param_or(query.limit.as_deref(), DEFAULT_LIMIT)?, &state.limits)?;
    Ok(Json(PrimesResponse::new(state.engine.palindromic_primes(limit))))
}

/// `GET /favored?count=`
pub async fn favored_handler(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> ApiResult<PrimesResponse> {
    let count = check_favored_count(
        param_or(query.count.as_deref(), DEFAULT_FAVORED_COUNT)?,
        &state.limits,
    )?;
    Ok(Json(PrimesResponse::new(state.engine.favored_sequence(count))))
}

// =============================================================================
// ANALYSIS HANDLERS
// =============================================================================

fn request_primes(
    payload: Result<Json<PrimesRequest>, JsonRejection>,
    state: &AppState,
) -> Result<Vec<u64>, ApiError> {
    let Json(request) = payload?;
    let primes: Vec<u64> = request.primes.into_iter().map(clamp_signed).collect();
    check_analysis_input(&primes, &state.limits)?;
    Ok(primes)
}

/// `POST /analyze`
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<PrimesRequest>, JsonRejection>,
) -> ApiResult<AnalyzeResponse> {
    let primes = request_primes(payload, &state)?;
    Ok(Json(AnalyzeResponse::new(state.engine.analyze(&primes))))
}

/// `POST /report`
pub async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<PrimesRequest>, JsonRejection>,
) -> ApiResult<ReportResponse> {
    let primes = request_primes(payload, &state)?;
    Ok(Json(ReportResponse::new(
        state.engine.extended_report(&primes),
    )))
}
