use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AnalysisError, Result};

/// Which side of a two-outcome fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Striking-oriented fighter
    A,
    /// Grappling-oriented fighter
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Per-fighter statistics. Every field is optional; formulas that need a
/// field report it as missing instead of assuming a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FighterStats {
    /// Significant strikes landed per minute
    pub slpm: Option<f64>,
    /// Significant strike accuracy (0.0–1.0)
    pub sig_strike_accuracy: Option<f64>,
    /// Significant strike defense (0.0–1.0)
    pub sig_strike_defense: Option<f64>,
    /// Takedowns landed per 15 minutes
    pub td_per_15: Option<f64>,
    /// Takedown accuracy (0.0–1.0)
    pub td_accuracy: Option<f64>,
    /// Takedown defense (0.0–1.0)
    pub td_defense: Option<f64>,
    /// Rough grappling-offense rating (0.0–1.0)
    pub td_offense: Option<f64>,
    /// Submission attempts per 15 minutes
    pub sub_per_15: Option<f64>,
}

impl FighterStats {
    pub fn td_per_min(&self) -> Option<f64> {
        self.td_per_15.map(|td| td / 15.0)
    }
}

/// A named fighter with whatever statistics are publicly available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterProfile {
    pub name: String,
    #[serde(default)]
    pub stats: FighterStats,
}

/// American odds quote for one side. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    pub fn new(odds: i32) -> Result<Self> {
        if odds == 0 {
            return Err(AnalysisError::InvalidOdds(
                "american odds cannot be zero".into(),
            ));
        }
        Ok(AmericanOdds(odds))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Conventional quotes have a magnitude of at least 100.
    pub fn is_conventional(self) -> bool {
        self.0.unsigned_abs() >= 100
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = AnalysisError;

    fn try_from(odds: i32) -> Result<Self> {
        AmericanOdds::new(odds)
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> i32 {
        odds.0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// A model's belief (0.0–1.0) that a specific side wins
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ProbabilityEstimate(f64);

impl ProbabilityEstimate {
    pub fn new(p: f64) -> Result<Self> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(AnalysisError::InvalidProbability(p));
        }
        Ok(ProbabilityEstimate(p))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn complement(self) -> Self {
        ProbabilityEstimate(1.0 - self.0)
    }
}

impl TryFrom<f64> for ProbabilityEstimate {
    type Error = AnalysisError;

    fn try_from(p: f64) -> Result<Self> {
        ProbabilityEstimate::new(p)
    }
}

impl From<ProbabilityEstimate> for f64 {
    fn from(p: ProbabilityEstimate) -> f64 {
        p.0
    }
}

/// Output of the win-probability model, with its intermediate scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinProbability {
    pub prob_a: ProbabilityEstimate,
    pub prob_b: ProbabilityEstimate,
    pub grappling_component: f64,
    pub striking_component: f64,
    pub score_a: f64,
    pub score_b: f64,
}

/// Derived recommendation for a single side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BettingRecommendation {
    pub side: Side,
    pub fighter: String,
    pub american_odds: AmericanOdds,
    pub decimal_odds: f64,
    pub implied_probability: f64,
    pub model_probability: f64,
    /// model − implied; positive means the market undervalues this side
    pub edge: f64,
    /// Full Kelly fraction, never negative
    pub kelly_fraction: f64,
    /// Net return per unit staked; may be negative
    pub expected_value: f64,
    pub stake_amount: f64,
    pub recommend: bool,
}

/// Complete two-sided analysis of one fight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueReport {
    pub generated_at: DateTime<Utc>,
    pub bankroll: f64,
    pub kelly_multiplier: f64,
    /// Sum of implied probabilities minus one
    pub book_margin: f64,
    pub model: Option<WinProbability>,
    pub side_a: BettingRecommendation,
    pub side_b: BettingRecommendation,
}

impl ValueReport {
    pub fn sides(&self) -> [&BettingRecommendation; 2] {
        [&self.side_a, &self.side_b]
    }
}
