/// Stake sizing from a win probability and decimal odds.
///
/// With decimal odds `d` a winning unit stake returns `d − 1` profit, so the
/// growth-optimal fraction of bankroll is
///   f* = ((d − 1)·p − (1 − p)) / (d − 1)
/// which is zero at the breakeven probability `1/d` and is floored at zero
/// below it.
use crate::error::{AnalysisError, Result};

fn validate(p: f64, decimal_odds: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(AnalysisError::InvalidProbability(p));
    }
    if !decimal_odds.is_finite() || decimal_odds <= 1.0 {
        return Err(AnalysisError::InvalidOdds(format!(
            "decimal odds must be greater than 1, got {}",
            decimal_odds
        )));
    }
    Ok(())
}

/// Full Kelly fraction of bankroll for a bet won with probability `p` at
/// `decimal_odds`. Never negative.
pub fn kelly_fraction(p: f64, decimal_odds: f64) -> Result<f64> {
    validate(p, decimal_odds)?;

    let profit = decimal_odds - 1.0;
    let fraction = (profit * p - (1.0 - p)) / profit;

    Ok(fraction.max(0.0))
}

/// Expected net return per unit staked.
///
/// EV = p·(decimal_odds − 1) − (1 − p)
///
/// Positive exactly when `p` exceeds the breakeven probability `1/decimal_odds`.
pub fn expected_value_per_unit(p: f64, decimal_odds: f64) -> Result<f64> {
    validate(p, decimal_odds)?;
    Ok(p * (decimal_odds - 1.0) - (1.0 - p))
}
