//! Book Service
//!
//! Ties a sport's fixture store to the resolver, catalog builder and
//! evaluator, and exposes the result behind an object-safe [`SportBook`]
//! so the HTTP layer can pick a sport at runtime.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use sportsbook_core::{
    AvailableSelection, BetRequest, BetSelection, EvaluationResult, Market, Sport,
    SportsbookError, SportsbookResult,
};
use tracing::{debug, instrument, warn};

use crate::catalog::build_catalog;
use crate::evaluator::evaluate;
use crate::fixture_store::{FixtureError, FixtureStore};
use crate::resolver::{resolve_correct_score, resolve_double_chance, resolve_line};
use crate::schema::{CricketSchema, Lookup, MarketSchema, VolleyballSchema};

/// Runtime view of one sport's book
pub trait SportBook: Send + Sync {
    fn sport(&self) -> Sport;

    /// Number of matches in the pre-match snapshot
    fn match_count(&self) -> usize;

    /// Number of records in the result snapshot
    fn result_count(&self) -> usize;

    fn loaded_at(&self) -> DateTime<Utc>;

    /// Available selections, one entry per market group
    fn catalog(&self) -> Vec<AvailableSelection>;

    /// Price a request against the pre-match snapshot. `None` when the market
    /// is unknown or no fixture row matches.
    fn selection_for(&self, request: &BetRequest) -> Option<BetSelection>;

    fn evaluate(&self, selection: &BetSelection) -> EvaluationResult;
}

/// Selection lookup and settlement over one sport's fixtures
pub struct BookService<S: MarketSchema> {
    store: Arc<FixtureStore<S>>,
}

impl<S: MarketSchema> BookService<S> {
    pub fn new(store: FixtureStore<S>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S: MarketSchema> Clone for BookService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: MarketSchema> SportBook for BookService<S> {
    fn sport(&self) -> Sport {
        S::SPORT
    }

    fn match_count(&self) -> usize {
        self.store.match_count()
    }

    fn result_count(&self) -> usize {
        self.store.result_count()
    }

    fn loaded_at(&self) -> DateTime<Utc> {
        self.store.loaded_at()
    }

    fn catalog(&self) -> Vec<AvailableSelection> {
        build_catalog::<S>(self.store.prematch())
    }

    #[instrument(skip(self), fields(sport = S::SPORT.key()))]
    fn selection_for(&self, request: &BetRequest) -> Option<BetSelection> {
        let Some(market) = S::parse_market(&request.market) else {
            warn!("Unknown {} market: {:?}", S::SPORT.key(), request.market);
            return None;
        };

        let prematch = self.store.prematch();
        let selection = match S::lookup(market) {
            Lookup::Line => {
                resolve_line::<S>(prematch, market, &request.selection, request.handicap()).map(
                    |selection| match market {
                        Market::CorrectScore => {
                            selection.with_score_line(request.score_line.clone())
                        }
                        _ => selection,
                    },
                )
            }
            Lookup::ScoreGrid => resolve_correct_score::<S>(
                prematch,
                &request.selection,
                request.score_line.as_deref().unwrap_or_default(),
            ),
            Lookup::FixedPrice => Some(resolve_double_chance::<S>(&request.selection)),
        };

        match &selection {
            Some(selection) => debug!("Resolved selection at {}", selection.odds),
            None => warn!("No selection matches request"),
        }

        selection
    }

    #[instrument(skip(self), fields(sport = S::SPORT.key()))]
    fn evaluate(&self, selection: &BetSelection) -> EvaluationResult {
        let result = evaluate::<S>(selection, self.store.results());
        debug!("Settled {} as {}", selection.market, result.outcome);
        result
    }
}

/// Books for every loaded sport
#[derive(Clone, Default)]
pub struct BookRegistry {
    books: HashMap<Sport, Arc<dyn SportBook>>,
}

impl BookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load fixtures for every supported sport from `dir`. Any missing or
    /// malformed document fails the whole load.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, FixtureError> {
        let dir = dir.as_ref();
        let mut registry = Self::new();

        registry.insert(BookService::new(FixtureStore::<VolleyballSchema>::load(dir)?));
        registry.insert(BookService::new(FixtureStore::<CricketSchema>::load(dir)?));

        Ok(registry)
    }

    pub fn insert<B: SportBook + 'static>(&mut self, book: B) {
        self.books.insert(book.sport(), Arc::new(book));
    }

    pub fn get(&self, sport: Sport) -> SportsbookResult<Arc<dyn SportBook>> {
        self.books
            .get(&sport)
            .cloned()
            .ok_or_else(|| SportsbookError::not_found(format!("No fixtures loaded for {}", sport)))
    }

    /// Loaded books in a stable order
    pub fn books(&self) -> Vec<Arc<dyn SportBook>> {
        Sport::ALL
            .into_iter()
            .filter_map(|sport| self.books.get(&sport).cloned())
            .collect()
    }
}
