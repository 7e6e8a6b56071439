//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sportsbook_core::Sport;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    message: &'static str,
    status: &'static str,
    sports: Vec<SportHealth>,
}

/// Fixture counts for one loaded sport
#[derive(Debug, Serialize)]
struct SportHealth {
    sport: Sport,
    matches: usize,
    results: usize,
    loaded_at: DateTime<Utc>,
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let sports = state
        .books
        .books()
        .iter()
        .map(|book| SportHealth {
            sport: book.sport(),
            matches: book.match_count(),
            results: book.result_count(),
            loaded_at: book.loaded_at(),
        })
        .collect();

    let response = HealthResponse {
        message: "/bet365 simulator service is running",
        status: "healthy",
        sports,
    };

    (StatusCode::OK, Json(response))
}

/// Simple liveness check (always returns OK if server is running)
async fn liveness() -> &'static str {
    "OK"
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
}
