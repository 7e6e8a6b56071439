//! Selection catalog endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::info;

use super::{error_response, SportQuery};
use crate::AppState;

/// Create selection routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/selections", get(list_selections))
}

/// List available selections grouped by market
async fn list_selections(State(state): State<AppState>, Query(query): Query<SportQuery>) -> Response {
    let book = match query.book(&state) {
        Ok(book) => book,
        Err(response) => return response,
    };

    if book.match_count() == 0 {
        return error_response(StatusCode::NOT_FOUND, "No prematch data available");
    }

    let catalog = book.catalog();
    info!("Listing {} market groups for {}", catalog.len(), book.sport());

    Json(catalog).into_response()
}
