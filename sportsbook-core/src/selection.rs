//! Bet selections and the catalog of what can be selected

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Caller-supplied selection to be priced and settled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetRequest {
    #[serde(default)]
    pub market: String,

    #[serde(default)]
    pub selection: String,

    /// Line qualifier, e.g. "O 177.5". Empty means no handicap was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<String>,

    /// Exact score for correct score markets, e.g. "3-1"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_line: Option<String>,
}

impl BetRequest {
    pub fn new(market: impl Into<String>, selection: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            selection: selection.into(),
            ..Self::default()
        }
    }

    pub fn with_handicap(mut self, handicap: impl Into<String>) -> Self {
        self.handicap = Some(handicap.into());
        self
    }

    pub fn with_score_line(mut self, score_line: impl Into<String>) -> Self {
        self.score_line = Some(score_line.into());
        self
    }

    /// Requested handicap, treating an empty string as absent
    pub fn handicap(&self) -> Option<&str> {
        self.handicap.as_deref().filter(|h| !h.is_empty())
    }
}

/// A priced selection, ready to be settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSelection {
    pub market: String,

    pub selection: String,

    /// Decimal price, serialized as a string ("1.83")
    pub odds: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_line: Option<String>,
}

impl BetSelection {
    pub fn new(market: impl Into<String>, selection: impl Into<String>, odds: Decimal) -> Self {
        Self {
            market: market.into(),
            selection: selection.into(),
            odds,
            handicap: None,
            score_line: None,
        }
    }

    /// Set the handicap; empty strings are stored as absent
    pub fn with_handicap(mut self, handicap: impl Into<String>) -> Self {
        let handicap = handicap.into();
        self.handicap = (!handicap.is_empty()).then_some(handicap);
        self
    }

    pub fn with_score_line(mut self, score_line: Option<String>) -> Self {
        self.score_line = score_line;
        self
    }

    /// A selection without a market cannot be settled
    pub fn is_valid(&self) -> bool {
        !self.market.is_empty()
    }
}

/// One priced outcome inside a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionQuote {
    pub name: String,

    pub odds: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap: Option<String>,
}

impl SelectionQuote {
    pub fn new(name: impl Into<String>, odds: Decimal, handicap: Option<&str>) -> Self {
        Self {
            name: name.into(),
            odds,
            handicap: handicap.filter(|h| !h.is_empty()).map(str::to_string),
        }
    }
}

/// Selections available for one market group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSelection {
    pub market: String,
    pub selections: Vec<SelectionQuote>,
}

impl AvailableSelection {
    /// Build a catalog entry, keeping only the first quote for each outcome name
    pub fn new(market: impl Into<String>, quotes: Vec<SelectionQuote>) -> Self {
        let mut seen = HashSet::new();
        let selections = quotes
            .into_iter()
            .filter(|quote| seen.insert(quote.name.clone()))
            .collect();

        Self {
            market: market.into(),
            selections,
        }
    }
}
