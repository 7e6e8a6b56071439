//! Per-sport market schemas
//!
//! Each sport stores its odds and results in a differently shaped document.
//! A [`MarketSchema`] flattens those documents into the views the resolver,
//! catalog builder and evaluator work on, so the engine is written once and
//! instantiated per sport.

mod cricket;
mod volleyball;

pub use cricket::CricketSchema;
pub use volleyball::VolleyballSchema;

use serde::de::DeserializeOwned;
use sportsbook_core::{FinalScore, Market, SelectionQuote, Sport};

/// Where an odds row came from inside a pre-match document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddsSource {
    /// Main market lines; `name` is the market, `header` the outcome
    Line,
    /// Schedule headline odds; `name` is the market, no outcome header
    Schedule,
    /// Correct score grid; `header` is the side, `name` the score
    ScoreGrid,
    /// Sub-match lines (e.g. first set); `name` is the market, `header` the outcome
    SubLine,
}

/// A borrowed, flattened odds row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OddsEntry<'a> {
    pub source: OddsSource,
    pub name: &'a str,
    pub header: &'a str,
    pub handicap: &'a str,
    /// Price as quoted in the document
    pub odds: &'a str,
}

impl<'a> OddsEntry<'a> {
    pub fn new(
        source: OddsSource,
        name: &'a str,
        header: &'a str,
        handicap: &'a str,
        odds: &'a str,
    ) -> Self {
        Self {
            source,
            name,
            header,
            handicap,
            odds,
        }
    }
}

/// How a market's selections are priced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Search main lines by market, outcome and handicap, then schedule odds
    Line,
    /// Search the correct score grid by side and score
    ScoreGrid,
    /// Fixed synthetic prices, never read from fixtures
    FixedPrice,
}

/// Adapter between a sport's fixture documents and the generic engine
pub trait MarketSchema: Send + Sync + 'static {
    type Prematch: DeserializeOwned + Send + Sync;
    type Results: DeserializeOwned + Send + Sync;
    type ResultRecord;

    const SPORT: Sport;

    /// Word used in winner settlement descriptions ("actual result was 1")
    const WINNER_NOUN: &'static str;

    /// Market label as it appears in requests and fixture documents
    fn market_label(market: Market) -> &'static str;

    fn parse_market(label: &str) -> Option<Market> {
        Market::ALL
            .into_iter()
            .find(|market| Self::market_label(*market) == label)
    }

    fn lookup(market: Market) -> Lookup;

    /// Market groups listed by the catalog, in response order
    fn catalog_markets() -> &'static [Market];

    fn catalog_label(market: Market) -> &'static str;

    /// Append the catalog quotes `entry` contributes to `market`, if any
    fn collect_quotes(market: Market, entry: &OddsEntry<'_>, quotes: &mut Vec<SelectionQuote>);

    fn match_count(prematch: &Self::Prematch) -> usize;

    /// All odds rows in scan order: match by match, and within a match
    /// main lines before schedule odds
    fn odds_entries(prematch: &Self::Prematch) -> Vec<OddsEntry<'_>>;

    fn result_records(results: &Self::Results) -> &[Self::ResultRecord];

    /// Raw "H-A" final score of a record
    fn final_score(record: &Self::ResultRecord) -> &str;

    /// Figure compared against total lines
    fn match_total(_record: &Self::ResultRecord, score: FinalScore) -> u64 {
        score.total()
    }

    /// Actual result shown for total settlements
    fn render_total(total: u64, score: FinalScore) -> String;
}
