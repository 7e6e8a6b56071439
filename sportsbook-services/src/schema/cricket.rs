use sportsbook_core::fixtures::cricket::{CricketPrematch, CricketResult, CricketResults};
use sportsbook_core::{FinalScore, Market, SelectionQuote, Sport};

use super::{Lookup, MarketSchema, OddsEntry, OddsSource};
use crate::parse_price;

/// Cricket: runs decide both the winner and totals
pub struct CricketSchema;

impl MarketSchema for CricketSchema {
    type Prematch = CricketPrematch;
    type Results = CricketResults;
    type ResultRecord = CricketResult;

    const SPORT: Sport = Sport::Cricket;
    const WINNER_NOUN: &'static str = "winner";

    fn market_label(market: Market) -> &'static str {
        match market {
            Market::Winner => "Match Winner",
            Market::Total => "Total Runs",
            Market::CorrectScore => "Correct Score",
            Market::DoubleChance => "Double Chance",
        }
    }

    fn lookup(market: Market) -> Lookup {
        match market {
            Market::Winner | Market::Total | Market::CorrectScore => Lookup::Line,
            Market::DoubleChance => Lookup::FixedPrice,
        }
    }

    fn catalog_markets() -> &'static [Market] {
        &[Market::Winner, Market::Total, Market::DoubleChance]
    }

    fn catalog_label(market: Market) -> &'static str {
        match market {
            Market::Winner => "Match Winner (1X2)",
            other => Self::market_label(other),
        }
    }

    fn collect_quotes(market: Market, entry: &OddsEntry<'_>, quotes: &mut Vec<SelectionQuote>) {
        if entry.source != OddsSource::Line || entry.name != Self::market_label(market) {
            return;
        }

        if let Some(price) = parse_price(entry.odds) {
            quotes.push(SelectionQuote::new(entry.header, price, Some(entry.handicap)));
        }
    }

    fn match_count(prematch: &Self::Prematch) -> usize {
        prematch.results.len()
    }

    fn odds_entries(prematch: &Self::Prematch) -> Vec<OddsEntry<'_>> {
        prematch
            .results
            .iter()
            .flat_map(|record| record.markets.iter())
            .map(|market| {
                OddsEntry::new(
                    OddsSource::Line,
                    &market.name,
                    &market.header,
                    &market.handicap,
                    &market.odds,
                )
            })
            .collect()
    }

    fn result_records(results: &Self::Results) -> &[Self::ResultRecord] {
        &results.results
    }

    fn final_score(record: &Self::ResultRecord) -> &str {
        &record.ss
    }

    fn render_total(total: u64, score: FinalScore) -> String {
        format!("{} runs (Home: {}, Away: {})", total, score.home, score.away)
    }
}
