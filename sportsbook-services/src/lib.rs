//! Business logic services for the sportsbook simulator
//!
//! This crate turns the fixture documents defined in `sportsbook-core` into
//! priced selections, market catalogs and settled outcomes. Every sport plugs
//! in through a [`schema::MarketSchema`] so the resolver, catalog builder and
//! evaluator are written once.

pub mod book_service;
pub mod catalog;
pub mod evaluator;
pub mod fixture_store;
pub mod resolver;
pub mod schema;

pub use book_service::{BookRegistry, BookService, SportBook};
pub use catalog::build_catalog;
pub use evaluator::evaluate;
pub use fixture_store::{FixtureError, FixtureStore};
pub use schema::{CricketSchema, MarketSchema, VolleyballSchema};

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// Parse a decimal price from a fixture string, e.g. "1.83"
pub(crate) fn parse_price(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    match Decimal::from_str(raw) {
        Ok(price) => Some(price),
        Err(e) => {
            if !raw.is_empty() {
                debug!("Skipping unparseable price {:?}: {}", raw, e);
            }
            None
        }
    }
}
