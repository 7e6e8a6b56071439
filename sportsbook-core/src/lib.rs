//! Core types for the sportsbook simulator
//!
//! This crate defines the shared data structures used across the simulator:
//! sports and markets, bet selections, settlement outcomes, and the wire
//! shapes of the fixture documents the odds and results are loaded from.

pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod market;
pub mod score;
pub mod selection;
pub mod sport;

pub use error::{SportsbookError, SportsbookResult};
pub use evaluation::{EvaluationResult, Outcome};
pub use market::{double_chance_price, DoubleChance, Market, Side};
pub use score::{FinalScore, ScoreError, TotalDirection, TotalLine, TotalLineError};
pub use selection::{AvailableSelection, BetRequest, BetSelection, SelectionQuote};
pub use sport::Sport;
