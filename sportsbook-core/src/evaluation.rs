//! Settlement outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::selection::BetSelection;

/// Settlement outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
    /// Landed exactly on the line; stake returned
    Push,
    /// Could not be settled from the available data
    Void,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
            Outcome::Push => "push",
            Outcome::Void => "void",
        }
    }

    /// `Won` when the condition holds, otherwise `Lost`
    pub fn won_if(condition: bool) -> Self {
        if condition {
            Outcome::Won
        } else {
            Outcome::Lost
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selection settled against the match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub selection: BetSelection,
    pub actual_result: String,
    pub outcome: Outcome,
    pub description: String,
}

impl EvaluationResult {
    pub fn new(
        selection: BetSelection,
        outcome: Outcome,
        actual_result: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            selection,
            actual_result: actual_result.into(),
            outcome,
            description: description.into(),
        }
    }

    pub fn void(
        selection: BetSelection,
        actual_result: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(selection, Outcome::Void, actual_result, description)
    }
}
