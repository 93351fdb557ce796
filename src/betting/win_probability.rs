//! Heuristic fight win-probability model.
//!
//! Fighter A is treated as striking-oriented and fighter B as
//! grappling-oriented. B's path to victory is takedowns, submissions and
//! accurate striking; A's is volume striking that gets past B's defense.
//! The two paths are turned into scores and normalised into a probability:
//!
//!   grappling = B.td_per_min · B.td_accuracy + B.sub_per_15 / 15
//!   striking  = B.slpm · B.sig_strike_accuracy
//!   score_b   = grappling · GRAPPLING_WEIGHT + striking
//!   score_a   = A.slpm · (1 − B.sig_strike_defense)
//!   P(B wins) = score_b / (score_a + score_b)
//!
//! This is not a calibrated model. The weights are heuristics.

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::models::{FighterProfile, ProbabilityEstimate, WinProbability};

/// Multiplier applied to B's grappling component.
pub const GRAPPLING_WEIGHT: f64 = 2.0;

/// Tunable weights for the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelWeights {
    pub grappling: f64,
}

impl Default for ModelWeights {
    fn default() -> Self {
        ModelWeights {
            grappling: GRAPPLING_WEIGHT,
        }
    }
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Estimate the probability that grappler `b` beats striker `a`.
///
/// Only the statistics the formula reads must be present; anything else in
/// the profiles is ignored.
pub fn estimate_win_probability(
    a: &FighterProfile,
    b: &FighterProfile,
    weights: ModelWeights,
) -> Result<WinProbability> {
    if !weights.grappling.is_finite() || weights.grappling < 0.0 {
        return Err(AnalysisError::InvalidStatistic {
            fighter: b.name.clone(),
            stat: "grappling_weight",
            value: weights.grappling,
        });
    }

    let a_slpm = count_stat(a, "slpm", a.stats.slpm)?;

    let b_slpm = count_stat(b, "slpm", b.stats.slpm)?;
    let b_accuracy = rate_stat(b, "sig_strike_accuracy", b.stats.sig_strike_accuracy)?;
    let b_defense = rate_stat(b, "sig_strike_defense", b.stats.sig_strike_defense)?;
    let td_per_min = count_stat(b, "td_per_15", b.stats.td_per_min())?;
    let b_td_accuracy = rate_stat(b, "td_accuracy", b.stats.td_accuracy)?;
    let b_subs = count_stat(b, "sub_per_15", b.stats.sub_per_15)?;

    let grappling_component = td_per_min * b_td_accuracy + b_subs / 15.0;
    let effective_strikes_from_a = a_slpm * (1.0 - b_defense);
    let striking_component = b_slpm * b_accuracy;

    let score_b = grappling_component * weights.grappling + striking_component;
    let score_a = effective_strikes_from_a;

    let total = score_a + score_b;
    if total <= 0.0 {
        return Err(AnalysisError::DegenerateInput);
    }

    debug!(
        grappling = grappling_component,
        striking = striking_component,
        score_a,
        score_b,
        "win probability components"
    );

    let prob_b = ProbabilityEstimate::new(score_b / total)?;
    Ok(WinProbability {
        prob_a: prob_b.complement(),
        prob_b,
        grappling_component,
        striking_component,
        score_a,
        score_b,
    })
}

// ── Stat access ──────────────────────────────────────────────────────────────

fn require(fighter: &FighterProfile, stat: &'static str, value: Option<f64>) -> Result<f64> {
    let value = value.ok_or_else(|| AnalysisError::MissingStatistic {
        fighter: fighter.name.clone(),
        stat,
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::InvalidStatistic {
            fighter: fighter.name.clone(),
            stat,
            value,
        });
    }
    Ok(value)
}

/// Non-negative per-minute or per-15 count.
fn count_stat(fighter: &FighterProfile, stat: &'static str, value: Option<f64>) -> Result<f64> {
    require(fighter, stat, value)
}

/// Accuracy or defense rate in [0, 1].
fn rate_stat(fighter: &FighterProfile, stat: &'static str, value: Option<f64>) -> Result<f64> {
    let value = require(fighter, stat, value)?;
    if value > 1.0 {
        return Err(AnalysisError::InvalidStatistic {
            fighter: fighter.name.clone(),
            stat,
            value,
        });
    }
    Ok(value)
}
