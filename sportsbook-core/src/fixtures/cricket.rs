//! Cricket pre-match odds and result documents

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Pre-match odds document (`cricket_prematch.json`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CricketPrematch {
    pub success: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<CricketPrematchMatch>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CricketPrematchMatch {
    pub id: String,
    pub home: Team,
    pub away: Team,

    #[serde(deserialize_with = "null_as_default")]
    pub markets: Vec<CricketMarket>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// One priced row of a cricket market. `name` is the market ("Match Winner"),
/// `header` the outcome within it ("1", "Over").
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CricketMarket {
    pub name: String,
    pub header: String,
    pub odds: String,
    pub handicap: String,
}

/// Result document (`cricket_result.json`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CricketResults {
    pub success: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<CricketResult>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CricketResult {
    pub id: String,
    pub home: Team,
    pub away: Team,

    /// Final runs, "H-A"
    pub ss: String,
}
