/// Value and stake sizing across both sides of a fight.
use chrono::Utc;
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::models::{
    AmericanOdds, BettingRecommendation, ProbabilityEstimate, Side, ValueReport, WinProbability,
};

use super::kelly::{expected_value_per_unit, kelly_fraction};
use super::odds::{book_margin, implied_probability, to_decimal};

/// Everything needed to price one fight.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub fighter_a: String,
    pub fighter_b: String,
    pub odds_a: AmericanOdds,
    pub odds_b: AmericanOdds,
    /// Probability that A wins; B's is its complement.
    pub prob_a: ProbabilityEstimate,
    pub bankroll: f64,
    /// Fractional Kelly multiplier (0.0–1.0]. 1.0 stakes full Kelly.
    pub kelly_multiplier: f64,
    pub model: Option<WinProbability>,
}

/// Model probability minus market-implied probability.
///
/// Positive means the model is more optimistic than the market.
pub fn edge(estimated: f64, implied: f64) -> f64 {
    estimated - implied
}

/// Dollar stake for a bankroll and Kelly fraction, never negative.
pub fn recommended_stake(bankroll: f64, kelly_fraction: f64) -> f64 {
    (bankroll * kelly_fraction).max(0.0)
}

/// Price a single side.
pub fn recommend_side(
    side: Side,
    fighter: &str,
    odds: AmericanOdds,
    probability: ProbabilityEstimate,
    bankroll: f64,
    kelly_multiplier: f64,
) -> Result<BettingRecommendation> {
    let decimal_odds = to_decimal(odds.value())?;
    let implied = implied_probability(odds.value())?;
    let p = probability.value();

    let kelly = kelly_fraction(p, decimal_odds)?;
    let expected_value = expected_value_per_unit(p, decimal_odds)?;
    let stake_amount = recommended_stake(bankroll, kelly * kelly_multiplier);

    Ok(BettingRecommendation {
        side,
        fighter: fighter.to_string(),
        american_odds: odds,
        decimal_odds,
        implied_probability: implied,
        model_probability: p,
        edge: edge(p, implied),
        kelly_fraction: kelly,
        expected_value,
        stake_amount,
        recommend: stake_amount > 0.0,
    })
}

/// Run the full pipeline for both sides.
pub fn build_report(input: &AnalysisInput) -> Result<ValueReport> {
    if !input.bankroll.is_finite() || input.bankroll < 0.0 {
        return Err(AnalysisError::InvalidBankroll(input.bankroll));
    }
    if !(input.kelly_multiplier > 0.0 && input.kelly_multiplier <= 1.0) {
        return Err(AnalysisError::InvalidKellyMultiplier(input.kelly_multiplier));
    }

    let side_a = recommend_side(
        Side::A,
        &input.fighter_a,
        input.odds_a,
        input.prob_a,
        input.bankroll,
        input.kelly_multiplier,
    )?;
    let side_b = recommend_side(
        Side::B,
        &input.fighter_b,
        input.odds_b,
        input.prob_a.complement(),
        input.bankroll,
        input.kelly_multiplier,
    )?;
    let margin = book_margin(input.odds_a.value(), input.odds_b.value())?;

    for rec in [&side_a, &side_b] {
        info!(
            "Side {} ({}): edge {:+.2}%, kelly {:.3}, stake ${:.2}",
            rec.side,
            rec.fighter,
            rec.edge * 100.0,
            rec.kelly_fraction,
            rec.stake_amount
        );
    }

    Ok(ValueReport {
        generated_at: Utc::now(),
        bankroll: input.bankroll,
        kelly_multiplier: input.kelly_multiplier,
        book_margin: margin,
        model: input.model,
        side_a,
        side_b,
    })
}
