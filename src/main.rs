use anyhow::Result;
use clap::Parser;
use tracing::info;

mod betting;
mod config;
mod error;
mod models;
mod profiles;
mod report;

use betting::{build_report, estimate_win_probability, ModelWeights};
use config::Config;
use profiles::Matchup;

fn main() -> Result<()> {
    // Initialise tracing / logging. Logs go to stderr, the report to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let matchup = match &config.fighters_file {
        Some(path) => {
            let m = profiles::load_matchup(path)?;
            info!("Loaded fighter profiles from {}", path.display());
            m
        }
        None => Matchup::default(),
    }
    .with_names(config.fighter_a.as_deref(), config.fighter_b.as_deref());

    let model = estimate_win_probability(
        &matchup.fighter_a,
        &matchup.fighter_b,
        ModelWeights {
            grappling: config.grappling_weight,
        },
    );
    if let Ok(m) = &model {
        info!(
            "Stat model: {} {:.2}% vs {} {:.2}%",
            matchup.fighter_a.name,
            m.prob_a.value() * 100.0,
            matchup.fighter_b.name,
            m.prob_b.value() * 100.0
        );
    }

    let input = config.analysis_input(&matchup, model)?;
    let report = build_report(&input)?;

    if config.json {
        println!("{}", report::render_json(&report)?);
    } else {
        print!("{}", report::render_text(&report)?);
    }

    Ok(())
}
