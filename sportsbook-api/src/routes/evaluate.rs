//! Selection evaluation endpoint

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use sportsbook_core::BetRequest;
use tracing::{info, warn};

use super::{error_response, SportQuery};
use crate::AppState;

/// Create evaluation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/evaluate", post(evaluate_selection))
}

/// Price the requested selection and settle it against the match result
async fn evaluate_selection(
    State(state): State<AppState>,
    Query(query): Query<SportQuery>,
    body: Result<Json<BetRequest>, JsonRejection>,
) -> Response {
    let book = match query.book(&state) {
        Ok(book) => book,
        Err(response) => return response,
    };

    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => {
            warn!("Rejected evaluate body: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    if book.result_count() == 0 {
        return error_response(StatusCode::NOT_FOUND, "No result data available");
    }

    let Some(selection) = book.selection_for(&request).filter(|s| s.is_valid()) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid selection parameters");
    };

    let result = book.evaluate(&selection);
    info!(
        "Evaluated {} {} on {}: {}",
        selection.market,
        selection.selection,
        book.sport(),
        result.outcome
    );

    Json(result).into_response()
}
