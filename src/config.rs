use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::betting::win_probability::GRAPPLING_WEIGHT;
use crate::betting::AnalysisInput;
use crate::error::AnalysisError;
use crate::models::{AmericanOdds, ProbabilityEstimate, WinProbability};
use crate::profiles::Matchup;

/// Fight value analyzer with Kelly stake sizing
#[derive(Parser, Debug, Clone)]
#[command(name = "fight-kelly", version, about)]
pub struct Config {
    /// Bankroll available for betting (USD)
    #[arg(long, env = "BANKROLL", default_value = "1000.0")]
    pub bankroll: f64,

    /// American odds for fighter A (e.g. 250 for +250)
    #[arg(long, env = "ODDS_A", default_value = "250", allow_negative_numbers = true)]
    pub odds_a: i32,

    /// American odds for fighter B (e.g. -320)
    #[arg(long, env = "ODDS_B", default_value = "-320", allow_negative_numbers = true)]
    pub odds_b: i32,

    /// Your probability that fighter A wins (0.0–1.0). Falls back to the
    /// stat model when omitted.
    #[arg(long, env = "ESTIMATED_PROB_A")]
    pub estimated_prob_a: Option<f64>,

    /// Display name for fighter A (striker)
    #[arg(long, env = "FIGHTER_A_NAME")]
    pub fighter_a: Option<String>,

    /// Display name for fighter B (grappler)
    #[arg(long, env = "FIGHTER_B_NAME")]
    pub fighter_b: Option<String>,

    /// JSON file with both fighter profiles
    #[arg(long, env = "FIGHTERS_FILE")]
    pub fighters_file: Option<PathBuf>,

    /// Weight of the grappler's takedown/submission component
    #[arg(long, env = "GRAPPLING_WEIGHT", default_value_t = GRAPPLING_WEIGHT)]
    pub grappling_weight: f64,

    /// Fraction of full Kelly to stake (0.0–1.0]
    #[arg(long, env = "KELLY_MULTIPLIER", default_value = "1.0")]
    pub kelly_multiplier: f64,

    /// Print the report as JSON
    #[arg(long, env = "OUTPUT_JSON", default_value = "false")]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.bankroll.is_finite() || self.bankroll < 0.0 {
            anyhow::bail!("bankroll must be non-negative");
        }
        for (label, odds) in [("odds_a", self.odds_a), ("odds_b", self.odds_b)] {
            let odds = AmericanOdds::new(odds).with_context(|| format!("{} is invalid", label))?;
            if !odds.is_conventional() {
                warn!(
                    "{} = {} is unconventional (American odds are normally ±100 or beyond)",
                    label, odds
                );
            }
        }
        if let Some(p) = self.estimated_prob_a {
            if !(0.0..=1.0).contains(&p) {
                anyhow::bail!("estimated_prob_a must be between 0.0 and 1.0");
            }
        }
        if !self.grappling_weight.is_finite() || self.grappling_weight < 0.0 {
            anyhow::bail!("grappling_weight must be non-negative");
        }
        if !(self.kelly_multiplier > 0.0 && self.kelly_multiplier <= 1.0) {
            anyhow::bail!("kelly_multiplier must be in (0.0, 1.0]");
        }
        Ok(())
    }

    /// Assemble the pipeline input from the profiles and the stat model's result.
    ///
    /// A supplied `estimated_prob_a` drives the analysis on its own: a model
    /// failure is then logged and the report carries no model section. Without
    /// it the model's `prob_a` is required and its error rejects the run.
    pub fn analysis_input(
        &self,
        matchup: &Matchup,
        model: Result<WinProbability, AnalysisError>,
    ) -> anyhow::Result<AnalysisInput> {
        let (prob_a, model) = match (self.estimated_prob_a, model) {
            (Some(p), model) => {
                info!(
                    "Using supplied probability for {}: {:.2}%",
                    matchup.fighter_a.name,
                    p * 100.0
                );
                let model = match model {
                    Ok(m) => Some(m),
                    Err(e) => {
                        warn!("Stat model unavailable, continuing without it: {}", e);
                        None
                    }
                };
                (ProbabilityEstimate::new(p)?, model)
            }
            (None, model) => {
                let m = model.context("Stat model failed and no --estimated-prob-a was given")?;
                (m.prob_a, Some(m))
            }
        };

        Ok(AnalysisInput {
            fighter_a: matchup.fighter_a.name.clone(),
            fighter_b: matchup.fighter_b.name.clone(),
            odds_a: AmericanOdds::new(self.odds_a)?,
            odds_b: AmericanOdds::new(self.odds_b)?,
            prob_a,
            bankroll: self.bankroll,
            kelly_multiplier: self.kelly_multiplier,
            model,
        })
    }
}
