//! API route definitions

mod evaluate;
mod health;
mod selections;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sportsbook_core::{Sport, SportsbookError};
use sportsbook_services::SportBook;
use std::sync::Arc;

use crate::AppState;

/// Create all versioned API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(selections::routes())
        .merge(evaluate::routes())
}

/// Create health routes (served outside the versioned prefix)
pub fn health_routes() -> Router<AppState> {
    health::routes()
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Query parameter selecting which sport's book to use
#[derive(Debug, Deserialize)]
pub struct SportQuery {
    pub sport_type: Option<String>,
}

impl SportQuery {
    /// Resolve the requested sport's book, or the error response to send
    pub(crate) fn book(&self, state: &AppState) -> Result<Arc<dyn SportBook>, Response> {
        let sport: Sport = self
            .sport_type
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|e: String| error_response(StatusCode::BAD_REQUEST, e))?;

        state.books.get(sport).map_err(|e| {
            let status = match e {
                SportsbookError::NotFound(_) => StatusCode::NOT_FOUND,
            };
            error_response(status, e.message())
        })
    }
}
