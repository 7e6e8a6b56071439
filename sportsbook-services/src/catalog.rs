//! Selection Catalog Builder
//!
//! Lists the selections a sport offers, one entry per market group, with
//! repeated outcome names collapsed to their first occurrence.

use sportsbook_core::{AvailableSelection, DoubleChance, SelectionQuote};

use crate::schema::{Lookup, MarketSchema};

/// Build the catalog for a sport's pre-match snapshot
pub fn build_catalog<S: MarketSchema>(prematch: &S::Prematch) -> Vec<AvailableSelection> {
    let entries = S::odds_entries(prematch);

    S::catalog_markets()
        .iter()
        .map(|&market| {
            let quotes = match S::lookup(market) {
                Lookup::FixedPrice => DoubleChance::ALL
                    .into_iter()
                    .map(|dc| SelectionQuote::new(dc.code(), dc.fixed_price(), None))
                    .collect(),
                Lookup::Line | Lookup::ScoreGrid => {
                    let mut quotes = Vec::new();
                    for entry in &entries {
                        S::collect_quotes(market, entry, &mut quotes);
                    }
                    quotes
                }
            };

            AvailableSelection::new(S::catalog_label(market), quotes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CricketSchema, VolleyballSchema};
    use rust_decimal_macros::dec;
    use sportsbook_core::fixtures::cricket::CricketPrematch;
    use sportsbook_core::fixtures::volleyball::VolleyballPrematch;

    const VOLLEYBALL_PREMATCH: &str = r#"
    {
        "results": [{
            "main": {"sp": {
                "game_lines": {"odds": [
                    {"odds": "1.44", "name": "Winner", "header": "1"},
                    {"odds": "1.83", "name": "Total", "header": "1", "handicap": "O 177.5"},
                    {"odds": "1.87", "name": "Total", "header": "2", "handicap": "U 177.5"},
                    {"odds": "1.95", "name": "Total", "header": "", "handicap": "O 179.5"}
                ]},
                "correct_set_score": {"odds": [
                    {"odds": "4.00", "name": "3-0", "header": "1"},
                    {"odds": "3.75", "name": "3-1", "header": "1"},
                    {"odds": "9.00", "name": "0-3", "header": "2"}
                ]}
            }},
            "others": [
                {"sp": {"set_1_lines": {"odds": [
                    {"odds": "1.61", "name": "Winner", "header": "1"},
                    {"odds": "2.25", "name": "Winner", "header": "2"},
                    {"odds": "1.90", "name": "Handicap", "header": "1", "handicap": "-2.5"}
                ]}}},
                {"sp": {"set_1_lines": {"odds": [
                    {"odds": "1.70", "name": "Winner", "header": "1"}
                ]}}}
            ],
            "schedule": {"sp": {"main": [
                {"odds": "1.90", "name": "Total", "handicap": "O 180.5"}
            ]}}
        }]
    }
    "#;

    #[test]
    fn test_volleyball_catalog() {
        let prematch: VolleyballPrematch = serde_json::from_str(VOLLEYBALL_PREMATCH).unwrap();
        let catalog = build_catalog::<VolleyballSchema>(&prematch);

        let markets: Vec<&str> = catalog.iter().map(|entry| entry.market.as_str()).collect();
        assert_eq!(
            markets,
            vec!["Winner (1X2)", "Total", "Correct Set Score", "Double Chance"]
        );

        // Winner comes from the first-set lines only, first quote per side
        let winner = &catalog[0].selections;
        assert_eq!(winner.len(), 2);
        assert_eq!(winner[0], SelectionQuote::new("1", dec!(1.61), None));
        assert_eq!(winner[1], SelectionQuote::new("2", dec!(2.25), None));

        // Headerless game lines are skipped; the schedule total adds a fixed under
        let total = &catalog[1].selections;
        let names: Vec<&str> = total.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "O", "U"]);
        assert_eq!(total[2].handicap.as_deref(), Some("O 180.5"));
        assert_eq!(total[3].odds, dec!(1.83));

        let correct_score = &catalog[2].selections;
        assert_eq!(correct_score.len(), 3);
        assert_eq!(correct_score[2].name, "0-3");
        assert_eq!(correct_score[2].handicap.as_deref(), Some("2"));
    }

    #[test]
    fn test_cricket_catalog() {
        let prematch: CricketPrematch = serde_json::from_str(
            r#"
            {"results": [
                {"markets": [
                    {"name": "Match Winner", "header": "1", "odds": "1.72", "handicap": ""},
                    {"name": "Match Winner", "header": "2", "odds": "2.10", "handicap": ""},
                    {"name": "Total Runs", "header": "Over", "odds": "1.85", "handicap": "O 320.5"},
                    {"name": "Total Runs", "header": "Under", "odds": "1.95", "handicap": "U 320.5"},
                    {"name": "Top Batsman", "header": "Sharma", "odds": "5.50", "handicap": ""}
                ]},
                {"markets": [
                    {"name": "Match Winner", "header": "1", "odds": "1.80", "handicap": ""}
                ]}
            ]}
            "#,
        )
        .unwrap();

        let catalog = build_catalog::<CricketSchema>(&prematch);
        assert_eq!(catalog.len(), 3);

        assert_eq!(catalog[0].market, "Match Winner (1X2)");
        assert_eq!(catalog[0].selections.len(), 2);
        assert_eq!(catalog[0].selections[0].odds, dec!(1.72));

        assert_eq!(catalog[1].market, "Total Runs");
        assert_eq!(catalog[1].selections[1].name, "Under");
        assert_eq!(catalog[1].selections[1].handicap.as_deref(), Some("U 320.5"));
    }

    #[test]
    fn test_double_chance_ignores_fixtures() {
        let catalog = build_catalog::<CricketSchema>(&CricketPrematch::default());

        let double_chance = &catalog[2];
        assert_eq!(double_chance.market, "Double Chance");
        assert_eq!(
            double_chance.selections,
            vec![
                SelectionQuote::new("1X", dec!(1.10), None),
                SelectionQuote::new("12", dec!(1.05), None),
                SelectionQuote::new("X2", dec!(1.20), None),
            ]
        );
        assert!(catalog[0].selections.is_empty());
    }

    #[test]
    fn test_catalog_json_shape() {
        let catalog = build_catalog::<CricketSchema>(&CricketPrematch::default());
        let json = serde_json::to_value(&catalog[2]).unwrap();

        assert_eq!(json["market"], "Double Chance");
        assert_eq!(json["selections"][0], serde_json::json!({"name": "1X", "odds": "1.10"}));
    }
}
