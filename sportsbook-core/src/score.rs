//! Final scores and total lines

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::evaluation::Outcome;
use crate::market::Side;

/// Final home/away figure of a match: sets for volleyball, runs for cricket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub home: u32,
    pub away: u32,
}

impl FinalScore {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn side(&self) -> Side {
        Side::from_scores(self.home, self.away)
    }

    /// Sum of both sides
    pub fn total(&self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Not exactly two `-` separated parts
    #[error("Score format is invalid")]
    Format,

    #[error("Could not parse score values")]
    Values,
}

impl FromStr for FinalScore {
    type Err = ScoreError;

    /// Parse an "H-A" score string such as "3-1" or "150-140"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [home, away] = parts.as_slice() else {
            return Err(ScoreError::Format);
        };

        match (home.parse::<u32>(), away.parse::<u32>()) {
            (Ok(home), Ok(away)) => Ok(FinalScore::new(home, away)),
            _ => Err(ScoreError::Values),
        }
    }
}

/// Direction of a total line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalDirection {
    Over,
    Under,
}

impl TotalDirection {
    pub fn code(&self) -> &'static str {
        match self {
            TotalDirection::Over => "O",
            TotalDirection::Under => "U",
        }
    }
}

/// An over/under line such as "O 177.5"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalLine {
    pub direction: TotalDirection,
    pub target: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TotalLineError {
    #[error("Invalid total format: '{0}'")]
    Format(String),

    #[error("Failed to parse total value '{token}': {reason}")]
    Value { token: String, reason: String },

    #[error("Invalid total type '{0}' (must be O/U)")]
    Direction(String),
}

impl FromStr for TotalLine {
    type Err = TotalLineError;

    /// Tokens past the second are ignored. The target is checked before the
    /// direction token, so "X abc" reports the value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(direction), Some(target)) = (tokens.next(), tokens.next()) else {
            return Err(TotalLineError::Format(s.to_string()));
        };

        let target = Decimal::from_str(target).map_err(|e| TotalLineError::Value {
            token: target.to_string(),
            reason: e.to_string(),
        })?;

        let direction = match direction {
            "O" => TotalDirection::Over,
            "U" => TotalDirection::Under,
            other => return Err(TotalLineError::Direction(other.to_string())),
        };

        Ok(TotalLine { direction, target })
    }
}

impl TotalLine {
    /// Settle the line against the actual match total. Landing exactly on the
    /// target is a push in both directions.
    pub fn settle(&self, total: u64) -> Outcome {
        match (Decimal::from(total).cmp(&self.target), self.direction) {
            (Ordering::Equal, _) => Outcome::Push,
            (Ordering::Greater, TotalDirection::Over) | (Ordering::Less, TotalDirection::Under) => {
                Outcome::Won
            }
            _ => Outcome::Lost,
        }
    }
}
