//! # Primal HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /status` - Cache statistics and active limits
//! - `GET /prime/{n}` - Primality of `n`
//! - `GET /classify/{n}` - Category membership of `n`
//! - `GET /sieve?limit=` - All primes up to `limit`
//! - `GET /twins?limit=` - Twin pairs up to `limit`
//! - `GET /mersenne?max_exponent=` - Mersenne primes
//! - `GET /sophie-germain?limit=` - Sophie Germain primes
//! - `GET /palindromic?limit=` - Palindromic primes
//! - `GET /favored?count=` - Favored sequence of `count` primes
//! - `POST /analyze` - Pattern analysis of `{"primes": [...]}`
//! - `POST /report` - Extended report of `{"primes": [...]}`

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `primal::api::*`)
pub use handlers::{
    ApiError, DEFAULT_FAVORED_COUNT, DEFAULT_LIMIT, DEFAULT_MAX_EXPONENT, analyze_handler,
    classify_handler, favored_handler, health_handler, mersenne_handler, palindromic_handler,
    prime_handler, report_handler, sieve_handler, sophie_germain_handler, status_handler,
    twins_handler,
};
pub use types::{
    AnalyzeResponse, ClassifyResponse, CountQuery, ErrorResponse, ExponentQuery, HealthResponse,
    LimitQuery, PrimeResponse, PrimesRequest, PrimesResponse, ReportResponse, StatusResponse,
    TwinsResponse,
};

use axum::{
    Router,
    routing::{get, post},
};
use primal_core::{Limits, PrimalError, PrimeEngine};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
///
/// The engine needs no outer lock; its cache serializes itself.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PrimeEngine>,
    pub limits: Limits,
}

impl AppState {
    /// Create new app state around an engine.
    #[must_use]
    pub fn new(engine: PrimeEngine, limits: Limits) -> Self {
        Self {
            engine: Arc::new(engine),
            limits: limits.clamped(),
        }
    }
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route("/prime/{n}", get(handlers::prime_handler))
        .route("/classify/{n}", get(handlers::classify_handler))
        .route("/sieve", get(handlers::sieve_handler))
        .route("/twins", get(handlers::twins_handler))
        .route("/mersenne", get(handlers::mersenne_handler))
        .route("/sophie-germain", get(handlers::sophie_germain_handler))
        .route("/palindromic", get(handlers::palindromic_handler))
        .route("/favored", get(handlers::favored_handler))
        .route("/analyze", post(handlers::analyze_handler))
        .route("/report", post(handlers::report_handler))
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(addr: &str, state: AppState) -> Result<(), PrimalError> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PrimalError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Primal HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PrimalError::Io(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
