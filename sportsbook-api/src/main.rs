//! Sportsbook Simulator API Server
//!
//! HTTP API server that prices selections and settles them against static
//! volleyball and cricket fixtures.

mod config;
mod routes;

use anyhow::Context;
use axum::{http::Method, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use sportsbook_services::BookRegistry;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookRegistry>,
}

impl AppState {
    pub fn new(books: BookRegistry) -> Self {
        Self {
            books: Arc::new(books),
        }
    }
}

/// Build the application router with CORS and request tracing
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::HEAD,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", routes::api_routes())
        .merge(routes::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,sportsbook_api=debug,sportsbook_services=debug")
        }))
        .init();

    info!("Starting Sportsbook Simulator API");

    let config = ServerConfig::from_env()?;

    // Fixtures must be resident before the listener accepts requests
    info!("Loading fixtures from: {}", config.fixture_dir.display());
    let books = BookRegistry::load(&config.fixture_dir).context("Failed to load fixtures")?;
    for book in books.books() {
        info!(
            "{} ready: {} matches, {} results",
            book.sport().display_name(),
            book.match_count(),
            book.result_count()
        );
    }

    let app = app(AppState::new(books));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
