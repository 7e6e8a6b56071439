//! Outcome Evaluator
//!
//! Settles a priced selection against the first record of a sport's result
//! snapshot. Every failure path settles as `void` with an explanation rather
//! than returning an error.

use sportsbook_core::{
    BetSelection, DoubleChance, EvaluationResult, FinalScore, Market, Outcome, ScoreError,
    TotalLine, TotalLineError,
};

use crate::schema::MarketSchema;

/// Settle `selection` against the result snapshot
pub fn evaluate<S: MarketSchema>(selection: &BetSelection, results: &S::Results) -> EvaluationResult {
    let Some(record) = S::result_records(results).first() else {
        return EvaluationResult::void(
            selection.clone(),
            "no result data",
            "No result data available",
        );
    };

    let score: FinalScore = match S::final_score(record).parse() {
        Ok(score) => score,
        Err(err @ ScoreError::Format) => {
            return EvaluationResult::void(selection.clone(), "invalid score format", err.to_string())
        }
        Err(err @ ScoreError::Values) => {
            return EvaluationResult::void(selection.clone(), "invalid score values", err.to_string())
        }
    };

    match S::parse_market(&selection.market) {
        Some(Market::Winner) => settle_winner::<S>(selection, score),
        Some(Market::Total) => settle_total::<S>(selection, S::match_total(record, score), score),
        Some(Market::CorrectScore) => settle_correct_score(selection, score),
        Some(Market::DoubleChance) => settle_double_chance(selection, score),
        None => EvaluationResult::void(selection.clone(), "unknown market", "Unknown market type"),
    }
}

fn settle_winner<S: MarketSchema>(selection: &BetSelection, score: FinalScore) -> EvaluationResult {
    let side = score.side();

    EvaluationResult::new(
        selection.clone(),
        Outcome::won_if(selection.selection == side.code()),
        format!("{} ({})", score, side),
        format!(
            "Selected {}, actual {} was {}",
            selection.selection,
            S::WINNER_NOUN,
            side
        ),
    )
}

fn settle_total<S: MarketSchema>(
    selection: &BetSelection,
    total: u64,
    score: FinalScore,
) -> EvaluationResult {
    let handicap = selection.handicap.as_deref().unwrap_or_default();

    let line: TotalLine = match handicap.parse() {
        Ok(line) => line,
        Err(err) => {
            let actual = match err {
                TotalLineError::Format(_) => "invalid total format",
                TotalLineError::Value { .. } => "invalid total value",
                TotalLineError::Direction(_) => "invalid total type",
            };
            return EvaluationResult::void(selection.clone(), actual, err.to_string());
        }
    };

    EvaluationResult::new(
        selection.clone(),
        line.settle(total),
        S::render_total(total, score),
        format!(
            "Selected {} {} (target {:.1}), actual was {}",
            line.direction.code(),
            handicap,
            line.target,
            total
        ),
    )
}

fn settle_correct_score(selection: &BetSelection, score: FinalScore) -> EvaluationResult {
    let actual = score.to_string();
    let picked = selection.score_line.as_deref().unwrap_or_default();

    EvaluationResult::new(
        selection.clone(),
        Outcome::won_if(picked == actual),
        actual.clone(),
        format!("Selected {}, actual was {}", picked, actual),
    )
}

/// An unrecognised combination settles as lost, not void
fn settle_double_chance(selection: &BetSelection, score: FinalScore) -> EvaluationResult {
    let side = score.side();
    let won = DoubleChance::from_code(&selection.selection).is_some_and(|dc| dc.covers(side));

    EvaluationResult::new(
        selection.clone(),
        Outcome::won_if(won),
        format!("{} ({})", score, side),
        format!("Selected {}, actual was {}", selection.selection, side),
    )
}
