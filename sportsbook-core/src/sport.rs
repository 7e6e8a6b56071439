//! Sport definitions for the simulator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Sports with loaded fixture data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Volleyball,
    Cricket,
}

impl Sport {
    /// All supported sports, in load order
    pub const ALL: [Sport; 2] = [Sport::Volleyball, Sport::Cricket];

    /// Identifier used in query strings and fixture file names
    pub fn key(&self) -> &'static str {
        match self {
            Sport::Volleyball => "volleyball",
            Sport::Cricket => "cricket",
        }
    }

    /// Get the full display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Sport::Volleyball => "Volleyball",
            Sport::Cricket => "Cricket",
        }
    }

    /// Path of the pre-match odds document inside `dir`
    pub fn prematch_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("{}_prematch.json", self.key()))
    }

    /// Path of the match result document inside `dir`
    pub fn result_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("{}_result.json", self.key()))
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "volleyball" => Ok(Sport::Volleyball),
            "cricket" => Ok(Sport::Cricket),
            _ => Err(format!("Unknown sport type: {}", s)),
        }
    }
}
