//! Volleyball pre-match odds and result documents

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::null_as_default;

/// Pre-match odds document (`volleyball_prematch.json`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VolleyballPrematch {
    pub success: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<VolleyballPrematchMatch>,
}

/// Odds for a single match
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VolleyballPrematchMatch {
    /// Bookmaker fixture id
    #[serde(rename = "FI")]
    pub fi: String,

    pub event_id: String,

    pub main: MainMarkets,

    /// Sub-match markets (per-set lines)
    #[serde(deserialize_with = "null_as_default")]
    pub others: Vec<OtherMarkets>,

    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MainMarkets {
    pub updated_at: String,
    pub key: String,
    pub sp: MainMarketGroups,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MainMarketGroups {
    /// Winner / Handicap / Total lines. `name` is the market, `header` the side.
    pub game_lines: OddsGroup,

    /// `header` is the side ("1"/"2"), `name` the set score ("3-1")
    pub correct_set_score: OddsGroup,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OtherMarkets {
    pub updated_at: String,
    pub sp: OtherMarketGroups,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OtherMarketGroups {
    pub set_1_lines: OddsGroup,
}

/// A named list of odds
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OddsGroup {
    pub id: String,
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub odds: Vec<Odd>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Odd {
    pub id: String,
    /// Decimal price as quoted ("1.83")
    pub odds: String,
    pub name: String,
    pub header: String,
    pub handicap: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Schedule {
    pub updated_at: String,
    pub key: String,
    pub sp: ScheduleGroups,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleGroups {
    #[serde(deserialize_with = "null_as_default")]
    pub main: Vec<ScheduleOdd>,
}

/// Headline odds from the schedule feed; these carry no side header
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleOdd {
    pub id: String,
    pub odds: String,
    pub name: String,
    pub handicap: String,
}

/// Result document (`volleyball_result.json`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VolleyballResults {
    pub success: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<VolleyballResult>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VolleyballResult {
    pub id: String,

    /// Final set score, "H-A"
    pub ss: String,

    /// Points per set, keyed by set number ("1", "2", ...)
    #[serde(deserialize_with = "null_as_default")]
    pub scores: BTreeMap<String, SetScore>,
}

impl VolleyballResult {
    /// Points across every set, if per-set scores were recorded.
    /// Point strings that are not numbers count as zero.
    pub fn total_points(&self) -> Option<u64> {
        if self.scores.is_empty() {
            return None;
        }

        Some(
            self.scores
                .values()
                .map(|set| u64::from(set.home_points()) + u64::from(set.away_points()))
                .sum(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SetScore {
    pub home: String,
    pub away: String,
}

impl SetScore {
    pub fn home_points(&self) -> u32 {
        self.home.parse().unwrap_or(0)
    }

    pub fn away_points(&self) -> u32 {
        self.away.parse().unwrap_or(0)
    }
}
