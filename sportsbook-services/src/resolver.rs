//! Selection Resolver
//!
//! Resolves a market/outcome pair to a priced selection against a sport's
//! pre-match snapshot. The first matching row in scan order wins; no match,
//! or a first match whose price does not parse, resolves to `None`.

use sportsbook_core::{double_chance_price, BetSelection, Market};
use tracing::debug;

use crate::parse_price;
use crate::schema::{MarketSchema, OddsEntry, OddsSource};

/// Find the price of `outcome` in a line market.
///
/// Main lines match on market name, outcome (the row's header, or the market
/// name itself) and handicap. Schedule rows carry no outcome, so they match
/// on market name and handicap alone. `handicap` of `None` or `""` accepts
/// any line.
pub fn resolve_line<S: MarketSchema>(
    prematch: &S::Prematch,
    market: Market,
    outcome: &str,
    handicap: Option<&str>,
) -> Option<BetSelection> {
    let label = S::market_label(market);
    let handicap = handicap.filter(|h| !h.is_empty());
    let handicap_matches = |entry: &OddsEntry<'_>| handicap.map_or(true, |h| entry.handicap == h);

    let entry = S::odds_entries(prematch).into_iter().find(|entry| match entry.source {
        OddsSource::Line => {
            entry.name == label
                && (entry.header == outcome || entry.name == outcome)
                && handicap_matches(entry)
        }
        OddsSource::Schedule => entry.name == label && handicap_matches(entry),
        OddsSource::ScoreGrid | OddsSource::SubLine => false,
    });

    let Some(entry) = entry else {
        debug!(
            "No {} line for {} / {} / {:?}",
            S::SPORT.key(),
            label,
            outcome,
            handicap
        );
        return None;
    };

    // An unpriced first match does not fall through to a later line
    let price = parse_price(entry.odds)?;
    Some(BetSelection::new(label, outcome, price).with_handicap(entry.handicap))
}

/// Find the price of an exact score for `side` in the correct score grid.
/// Scores compare as plain strings.
pub fn resolve_correct_score<S: MarketSchema>(
    prematch: &S::Prematch,
    side: &str,
    score: &str,
) -> Option<BetSelection> {
    let label = S::market_label(Market::CorrectScore);

    let entry = S::odds_entries(prematch).into_iter().find(|entry| {
        entry.source == OddsSource::ScoreGrid && entry.header == side && entry.name == score
    })?;

    let price = parse_price(entry.odds)?;
    Some(BetSelection::new(label, side, price).with_score_line(Some(entry.name.to_string())))
}

/// Double chance selection at its fixed price; unknown combinations price at zero
pub fn resolve_double_chance<S: MarketSchema>(combination: &str) -> BetSelection {
    BetSelection::new(
        S::market_label(Market::DoubleChance),
        combination,
        double_chance_price(combination),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CricketSchema, VolleyballSchema};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use sportsbook_core::fixtures::cricket::CricketPrematch;
    use sportsbook_core::fixtures::volleyball::VolleyballPrematch;

    fn volleyball_prematch() -> VolleyballPrematch {
        serde_json::from_str(
            r#"
            {
                "success": 1,
                "results": [{
                    "main": {"sp": {
                        "game_lines": {"odds": [
                            {"odds": "1.44", "name": "Winner", "header": "1"},
                            {"odds": "2.62", "name": "Winner", "header": "2"},
                            {"odds": "1.83", "name": "Total", "header": "1", "handicap": "O 177.5"},
                            {"odds": "1.87", "name": "Total", "header": "2", "handicap": "U 177.5"}
                        ]},
                        "correct_set_score": {"odds": [
                            {"odds": "4.00", "name": "3-0", "header": "1"},
                            {"odds": "3.75", "name": "3-1", "header": "1"},
                            {"odds": "8.50", "name": "3-1", "header": "2"}
                        ]}
                    }},
                    "schedule": {"sp": {"main": [
                        {"odds": "1.90", "name": "Total", "handicap": "O 180.5"},
                        {"odds": "1.50", "name": "Handicap", "handicap": "-1.5"}
                    ]}}
                }]
            }
            "#,
        )
        .unwrap()
    }

    fn cricket_prematch() -> CricketPrematch {
        serde_json::from_str(
            r#"
            {
                "results": [{"markets": [
                    {"name": "Match Winner", "header": "1", "odds": "1.72", "handicap": ""},
                    {"name": "Match Winner", "header": "2", "odds": "2.10", "handicap": ""},
                    {"name": "Total Runs", "header": "Over", "odds": "1.85", "handicap": "O 320.5"},
                    {"name": "Total Runs", "header": "Under", "odds": "1.95", "handicap": "U 320.5"}
                ]}]
            }
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_game_line() {
        let prematch = volleyball_prematch();
        let selection =
            resolve_line::<VolleyballSchema>(&prematch, Market::Winner, "2", None).unwrap();

        assert_eq!(selection.market, "Winner");
        assert_eq!(selection.selection, "2");
        assert_eq!(selection.odds, dec!(2.62));
        assert_eq!(selection.handicap, None);
    }

    #[test]
    fn test_resolve_line_with_handicap() {
        let prematch = volleyball_prematch();
        let selection =
            resolve_line::<VolleyballSchema>(&prematch, Market::Total, "2", Some("U 177.5"))
                .unwrap();

        assert_eq!(selection.odds, dec!(1.87));
        assert_eq!(selection.handicap.as_deref(), Some("U 177.5"));
    }

    #[test]
    fn test_empty_handicap_matches_first_line() {
        let prematch = volleyball_prematch();
        let selection =
            resolve_line::<VolleyballSchema>(&prematch, Market::Total, "1", Some("")).unwrap();

        assert_eq!(selection.handicap.as_deref(), Some("O 177.5"));
    }

    #[test]
    fn test_falls_back_to_schedule() {
        let prematch = volleyball_prematch();
        // No game line carries this handicap; the schedule row matches on market alone
        let selection =
            resolve_line::<VolleyballSchema>(&prematch, Market::Total, "1", Some("O 180.5"))
                .unwrap();

        assert_eq!(selection.odds, dec!(1.90));
        assert_eq!(selection.selection, "1");
        assert_eq!(selection.handicap.as_deref(), Some("O 180.5"));
    }

    #[test]
    fn test_unpriced_first_match_does_not_fall_through() {
        let prematch: VolleyballPrematch = serde_json::from_str(
            r#"
            {
                "results": [{
                    "main": {"sp": {
                        "game_lines": {"odds": [
                            {"odds": "", "name": "Total", "header": "1", "handicap": "O 177.5"}
                        ]},
                        "correct_set_score": {"odds": [
                            {"odds": "SP", "name": "3-1", "header": "1"},
                            {"odds": "3.75", "name": "3-1", "header": "1"}
                        ]}
                    }},
                    "schedule": {"sp": {"main": [
                        {"odds": "1.90", "name": "Total", "handicap": "O 180.5"}
                    ]}}
                }]
            }
            "#,
        )
        .unwrap();

        assert!(resolve_line::<VolleyballSchema>(&prematch, Market::Total, "1", None).is_none());
        assert!(resolve_correct_score::<VolleyballSchema>(&prematch, "1", "3-1").is_none());

        // A request naming the later line still reaches it
        let schedule =
            resolve_line::<VolleyballSchema>(&prematch, Market::Total, "1", Some("O 180.5"))
                .unwrap();
        assert_eq!(schedule.odds, dec!(1.90));
    }

    #[test]
    fn test_scan_order_is_match_by_match() {
        let prematch: VolleyballPrematch = serde_json::from_str(
            r#"
            {
                "results": [
                    {
                        "main": {"sp": {"game_lines": {"odds": [
                            {"odds": "1.44", "name": "Winner", "header": "1"}
                        ]}}},
                        "schedule": {"sp": {"main": [
                            {"odds": "1.90", "name": "Total", "handicap": "O 180.5"}
                        ]}}
                    },
                    {
                        "main": {"sp": {
                            "game_lines": {"odds": [
                                {"odds": "1.83", "name": "Total", "header": "1", "handicap": "O 177.5"},
                                {"odds": "1.62", "name": "Winner", "header": "2"}
                            ]},
                            "correct_set_score": {"odds": [
                                {"odds": "5.00", "name": "3-2", "header": "2"}
                            ]}
                        }}
                    }
                ]
            }
            "#,
        )
        .unwrap();

        // First match's schedule row precedes the second match's game line
        let total = resolve_line::<VolleyballSchema>(&prematch, Market::Total, "1", None).unwrap();
        assert_eq!(total.odds, dec!(1.90));
        assert_eq!(total.handicap.as_deref(), Some("O 180.5"));

        // Rows only present in the second match are still found
        let away = resolve_line::<VolleyballSchema>(&prematch, Market::Winner, "2", None).unwrap();
        assert_eq!(away.odds, dec!(1.62));
        let score = resolve_correct_score::<VolleyballSchema>(&prematch, "2", "3-2").unwrap();
        assert_eq!(score.odds, dec!(5.00));
    }

    #[test]
    fn test_no_match_is_none() {
        let prematch = volleyball_prematch();
        assert!(
            resolve_line::<VolleyballSchema>(&prematch, Market::Total, "1", Some("O 999.5"))
                .is_none()
        );
    }

    #[test]
    fn test_resolve_correct_score() {
        let prematch = volleyball_prematch();
        let selection = resolve_correct_score::<VolleyballSchema>(&prematch, "2", "3-1").unwrap();

        assert_eq!(selection.market, "Correct Set Score");
        assert_eq!(selection.selection, "2");
        assert_eq!(selection.odds, dec!(8.50));
        assert_eq!(selection.score_line.as_deref(), Some("3-1"));
    }

    #[test]
    fn test_correct_score_is_exact_string() {
        let prematch = volleyball_prematch();
        assert!(resolve_correct_score::<VolleyballSchema>(&prematch, "1", "3 - 0").is_none());
        assert!(resolve_correct_score::<VolleyballSchema>(&prematch, "2", "3-0").is_none());
    }

    #[test]
    fn test_resolve_cricket_line() {
        let prematch = cricket_prematch();
        let selection =
            resolve_line::<CricketSchema>(&prematch, Market::Total, "Under", None).unwrap();

        assert_eq!(selection.market, "Total Runs");
        assert_eq!(selection.odds, dec!(1.95));
        assert_eq!(selection.handicap.as_deref(), Some("U 320.5"));
    }

    #[test]
    fn test_outcome_may_name_the_market() {
        let prematch = cricket_prematch();
        let selection =
            resolve_line::<CricketSchema>(&prematch, Market::Winner, "Match Winner", None)
                .unwrap();

        assert_eq!(selection.odds, dec!(1.72));
    }

    #[test]
    fn test_double_chance_fixed_prices() {
        let selection = resolve_double_chance::<CricketSchema>("X2");
        assert_eq!(selection.market, "Double Chance");
        assert_eq!(selection.odds, dec!(1.20));

        let unknown = resolve_double_chance::<VolleyballSchema>("2X");
        assert_eq!(unknown.odds, Decimal::ZERO);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let prematch = cricket_prematch();
        let first = resolve_line::<CricketSchema>(&prematch, Market::Winner, "2", None);
        let second = resolve_line::<CricketSchema>(&prematch, Market::Winner, "2", None);
        assert_eq!(first, second);
    }
}
