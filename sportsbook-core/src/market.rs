//! Betting markets and the sides they are settled on

use rust_decimal::Decimal;
use std::fmt;

/// A betting category offered for a match
///
/// Wire labels differ per sport ("Winner" vs "Match Winner"), so parsing
/// from a label lives with each sport's market schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    /// Three-way match result (1X2)
    Winner,
    /// Over/under on the match total
    Total,
    /// Exact final score
    CorrectScore,
    /// Two of the three match results
    DoubleChance,
}

impl Market {
    pub const ALL: [Market; 4] = [
        Market::Winner,
        Market::Total,
        Market::CorrectScore,
        Market::DoubleChance,
    ];
}

/// Side of a three-way result, using the bookmaker's codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// "1"
    Home,
    /// "X"
    Draw,
    /// "2"
    Away,
}

impl Side {
    /// Side implied by a home/away figure: more wins, equal is a draw
    pub fn from_scores(home: u32, away: u32) -> Self {
        if home > away {
            Side::Home
        } else if away > home {
            Side::Away
        } else {
            Side::Draw
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Side::Home => "1",
            Side::Draw => "X",
            Side::Away => "2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Double chance combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoubleChance {
    /// "1X"
    HomeOrDraw,
    /// "12"
    HomeOrAway,
    /// "X2"
    DrawOrAway,
}

impl DoubleChance {
    pub const ALL: [DoubleChance; 3] = [
        DoubleChance::HomeOrDraw,
        DoubleChance::HomeOrAway,
        DoubleChance::DrawOrAway,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1X" => Some(DoubleChance::HomeOrDraw),
            "12" => Some(DoubleChance::HomeOrAway),
            "X2" => Some(DoubleChance::DrawOrAway),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DoubleChance::HomeOrDraw => "1X",
            DoubleChance::HomeOrAway => "12",
            DoubleChance::DrawOrAway => "X2",
        }
    }

    /// Synthetic price; double chance is never priced from fixture data
    pub fn fixed_price(&self) -> Decimal {
        match self {
            DoubleChance::HomeOrDraw => Decimal::new(110, 2),
            DoubleChance::HomeOrAway => Decimal::new(105, 2),
            DoubleChance::DrawOrAway => Decimal::new(120, 2),
        }
    }

    /// Whether the combination wins when the match ends on `side`
    pub fn covers(&self, side: Side) -> bool {
        match self {
            DoubleChance::HomeOrDraw => matches!(side, Side::Home | Side::Draw),
            DoubleChance::HomeOrAway => matches!(side, Side::Home | Side::Away),
            DoubleChance::DrawOrAway => matches!(side, Side::Draw | Side::Away),
        }
    }
}

/// Price for a double chance label, zero when the label is not a known combination
pub fn double_chance_price(label: &str) -> Decimal {
    DoubleChance::from_code(label)
        .map(|dc| dc.fixed_price())
        .unwrap_or(Decimal::ZERO)
}
