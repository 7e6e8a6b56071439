use rust_decimal::Decimal;
use sportsbook_core::fixtures::volleyball::{VolleyballPrematch, VolleyballResult, VolleyballResults};
use sportsbook_core::{FinalScore, Market, SelectionQuote, Sport};

use super::{Lookup, MarketSchema, OddsEntry, OddsSource};
use crate::parse_price;

/// Under price paired with every schedule "Over" total; the schedule feed
/// only quotes the over side.
const SCHEDULE_UNDER_PRICE: Decimal = Decimal::from_parts(183, 0, 0, false, 2);

/// Volleyball: sets decide the winner, points decide totals
pub struct VolleyballSchema;

impl MarketSchema for VolleyballSchema {
    type Prematch = VolleyballPrematch;
    type Results = VolleyballResults;
    type ResultRecord = VolleyballResult;

    const SPORT: Sport = Sport::Volleyball;
    const WINNER_NOUN: &'static str = "result";

    fn market_label(market: Market) -> &'static str {
        match market {
            Market::Winner => "Winner",
            Market::Total => "Total",
            Market::CorrectScore => "Correct Set Score",
            Market::DoubleChance => "Double Chance",
        }
    }

    fn lookup(market: Market) -> Lookup {
        match market {
            Market::Winner | Market::Total => Lookup::Line,
            Market::CorrectScore => Lookup::ScoreGrid,
            Market::DoubleChance => Lookup::FixedPrice,
        }
    }

    fn catalog_markets() -> &'static [Market] {
        &[
            Market::Winner,
            Market::Total,
            Market::CorrectScore,
            Market::DoubleChance,
        ]
    }

    fn catalog_label(market: Market) -> &'static str {
        match market {
            Market::Winner => "Winner (1X2)",
            other => Self::market_label(other),
        }
    }

    fn collect_quotes(market: Market, entry: &OddsEntry<'_>, quotes: &mut Vec<SelectionQuote>) {
        let Some(price) = parse_price(entry.odds) else {
            return;
        };

        match (market, entry.source) {
            // Winner prices are listed from the first-set lines
            (Market::Winner, OddsSource::SubLine) if entry.name == "Winner" => {
                quotes.push(SelectionQuote::new(entry.header, price, Some(entry.handicap)));
            }
            (Market::Total, OddsSource::Line) if entry.name == "Total" && !entry.header.is_empty() => {
                quotes.push(SelectionQuote::new(entry.header, price, Some(entry.handicap)));
            }
            (Market::Total, OddsSource::Schedule) if entry.name == "Total" => {
                quotes.push(SelectionQuote::new("O", price, Some(entry.handicap)));
                quotes.push(SelectionQuote::new(
                    "U",
                    SCHEDULE_UNDER_PRICE,
                    Some(entry.handicap),
                ));
            }
            // The side header rides in the handicap slot
            (Market::CorrectScore, OddsSource::ScoreGrid) => {
                quotes.push(SelectionQuote::new(entry.name, price, Some(entry.header)));
            }
            _ => {}
        }
    }

    fn match_count(prematch: &Self::Prematch) -> usize {
        prematch.results.len()
    }

    fn odds_entries(prematch: &Self::Prematch) -> Vec<OddsEntry<'_>> {
        let mut entries = Vec::new();

        for record in &prematch.results {
            let sp = &record.main.sp;

            entries.extend(sp.game_lines.odds.iter().map(|odd| {
                OddsEntry::new(OddsSource::Line, &odd.name, &odd.header, &odd.handicap, &odd.odds)
            }));

            entries.extend(sp.correct_set_score.odds.iter().map(|odd| {
                OddsEntry::new(
                    OddsSource::ScoreGrid,
                    &odd.name,
                    &odd.header,
                    &odd.handicap,
                    &odd.odds,
                )
            }));

            entries.extend(record.schedule.sp.main.iter().map(|odd| {
                OddsEntry::new(OddsSource::Schedule, &odd.name, "", &odd.handicap, &odd.odds)
            }));

            for other in &record.others {
                entries.extend(other.sp.set_1_lines.odds.iter().map(|odd| {
                    OddsEntry::new(
                        OddsSource::SubLine,
                        &odd.name,
                        &odd.header,
                        &odd.handicap,
                        &odd.odds,
                    )
                }));
            }
        }

        entries
    }

    fn result_records(results: &Self::Results) -> &[Self::ResultRecord] {
        &results.results
    }

    fn final_score(record: &Self::ResultRecord) -> &str {
        &record.ss
    }

    /// Total points over all sets; falls back to total sets when the
    /// per-set breakdown is missing
    fn match_total(record: &Self::ResultRecord, score: FinalScore) -> u64 {
        record.total_points().unwrap_or_else(|| score.total())
    }

    fn render_total(total: u64, _score: FinalScore) -> String {
        format!("{} points", total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_labels() {
        assert_eq!(VolleyballSchema::parse_market("Winner"), Some(Market::Winner));
        assert_eq!(
            VolleyballSchema::parse_market("Correct Set Score"),
            Some(Market::CorrectScore)
        );
        assert_eq!(VolleyballSchema::parse_market("Match Winner"), None);
        assert_eq!(VolleyballSchema::parse_market("Set Handicap"), None);
    }

    #[test]
    fn test_schedule_under_price() {
        assert_eq!(SCHEDULE_UNDER_PRICE, dec!(1.83));
        assert_eq!(SCHEDULE_UNDER_PRICE.to_string(), "1.83");
    }

    #[test]
    fn test_schedule_total_adds_under() {
        let entry = OddsEntry::new(OddsSource::Schedule, "Total", "", "O 180.5", "1.90");
        let mut quotes = Vec::new();
        VolleyballSchema::collect_quotes(Market::Total, &entry, &mut quotes);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0], SelectionQuote::new("O", dec!(1.90), Some("O 180.5")));
        assert_eq!(quotes[1], SelectionQuote::new("U", dec!(1.83), Some("O 180.5")));
    }

    #[test]
    fn test_unpriced_rows_are_skipped() {
        let entry = OddsEntry::new(OddsSource::SubLine, "Winner", "1", "", "");
        let mut quotes = Vec::new();
        VolleyballSchema::collect_quotes(Market::Winner, &entry, &mut quotes);
        assert!(quotes.is_empty());
    }
}
