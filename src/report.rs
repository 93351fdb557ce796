//! Human-readable and JSON rendering of a `ValueReport`.

use anyhow::Result;
use std::fmt::Write;

use crate::betting::odds::breakeven_probability;
use crate::models::{BettingRecommendation, Side, ValueReport};

const RULE: &str = "==================================================";

fn pct(x: f64, places: usize) -> String {
    format!("{:.*}%", places, x * 100.0)
}

pub fn render_json(report: &ValueReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &ValueReport) -> Result<String> {
    let mut out = String::new();
    write_text(&mut out, report)?;
    Ok(out)
}

fn write_text(out: &mut String, report: &ValueReport) -> std::fmt::Result {
    let [a, b] = report.sides();

    writeln!(out, "\n================ BETTING ANALYSIS ================\n")?;

    if let Some(model) = &report.model {
        writeln!(out, "Stat model win probabilities:")?;
        writeln!(out, "  {}: {}", a.fighter, pct(model.prob_a.value(), 2))?;
        writeln!(out, "  {}: {}", b.fighter, pct(model.prob_b.value(), 2))?;
        writeln!(
            out,
            "  (score A {:.4}, score B {:.4}: grappling {:.4}, striking {:.4})\n",
            model.score_a, model.score_b, model.grappling_component, model.striking_component
        )?;
    }

    writeln!(out, "Your model probabilities:")?;
    for rec in [a, b] {
        writeln!(out, "  {}: {}", rec.fighter, pct(rec.model_probability, 2))?;
    }

    writeln!(out, "\nMarket implied probabilities:")?;
    for rec in [a, b] {
        writeln!(
            out,
            "  {}: {} (odds {}, decimal {:.4})",
            rec.fighter,
            pct(rec.implied_probability, 2),
            rec.american_odds,
            rec.decimal_odds
        )?;
    }
    writeln!(out, "  Book margin: {}", pct(report.book_margin, 2))?;

    writeln!(out, "\nValue (model − implied):")?;
    for rec in [a, b] {
        writeln!(out, "  {}: {}", rec.fighter, pct(rec.edge, 2))?;
    }

    writeln!(out, "\nExpected value per $1 bet:")?;
    for rec in [a, b] {
        writeln!(out, "  EV {}: {:.4}", rec.fighter, rec.expected_value)?;
    }

    writeln!(out, "\nKelly Recommended Bet Sizes:")?;
    for rec in [a, b] {
        writeln!(out, "  Kelly fraction on {}: {:.3}", rec.fighter, rec.kelly_fraction)?;
    }

    if report.kelly_multiplier < 1.0 {
        writeln!(
            out,
            "\nRecommended bet amounts (bankroll = ${:.2}, {:.2}× Kelly):",
            report.bankroll, report.kelly_multiplier
        )?;
    } else {
        writeln!(
            out,
            "\nRecommended bet amounts (bankroll = ${:.2}):",
            report.bankroll
        )?;
    }
    for rec in [a, b] {
        writeln!(out, "  Bet on {}: ${:.2}", rec.fighter, rec.stake_amount)?;
    }

    writeln!(out, "\n================ INTERPRETATION =================\n")?;
    for rec in [a, b] {
        write_interpretation(out, rec)?;
    }
    writeln!(out, "{}", RULE)
}

fn write_interpretation(out: &mut String, rec: &BettingRecommendation) -> std::fmt::Result {
    if rec.recommend {
        writeln!(out, "✔ BET on {}:", rec.fighter)?;
        writeln!(
            out,
            "  - Your model gives a {} chance",
            pct(rec.model_probability, 1)
        )?;
        writeln!(
            out,
            "  - Bookmaker implies only {}",
            pct(rec.implied_probability, 1)
        )?;
        match rec.side {
            Side::A => writeln!(out, "  - The line undervalues this fighter.")?,
            Side::B => writeln!(out, "  - Value exists because your probability is higher.")?,
        }
        writeln!(out, "  - Positive EV: {:.4} per dollar", rec.expected_value)?;
        writeln!(
            out,
            "  - Kelly says to bet {:.1}% of bankroll (${:.2})\n",
            rec.kelly_fraction * 100.0,
            rec.stake_amount
        )
    } else {
        writeln!(out, "✖ NO BET on {}:", rec.fighter)?;
        writeln!(
            out,
            "  - Your model probability ({})",
            pct(rec.model_probability, 1)
        )?;
        writeln!(
            out,
            "    does NOT beat the market implied ({})",
            pct(rec.implied_probability, 1)
        )?;
        writeln!(
            out,
            "  - These odds need {} to break even",
            pct(breakeven_probability(rec.decimal_odds), 1)
        )?;
        if rec.expected_value < 0.0 {
            writeln!(out, "  - Negative EV → avoid.\n")
        } else {
            writeln!(out, "  - No edge → skip.\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::betting::{build_report, estimate_win_probability, AnalysisInput, ModelWeights};
    use crate::profiles::Matchup;
    use crate::models::{AmericanOdds, ProbabilityEstimate};

    fn sample_report(kelly_multiplier: f64) -> ValueReport {
        build_report(&sample_input(kelly_multiplier)).unwrap()
    }

    fn sample_input(kelly_multiplier: f64) -> AnalysisInput {
        AnalysisInput {
            fighter_a: "Jack Della Maddalena".into(),
            fighter_b: "Islam Makhachev".into(),
            odds_a: AmericanOdds::new(250).unwrap(),
            odds_b: AmericanOdds::new(-320).unwrap(),
            prob_a: ProbabilityEstimate::new(0.32).unwrap(),
            bankroll: 1000.0,
            kelly_multiplier,
            model: None,
        }
    }

    #[test]
    fn text_report_contains_key_figures() {
        let text = render_text(&sample_report(1.0)).unwrap();
        assert!(text.contains("Jack Della Maddalena: 28.57% (odds +250, decimal 3.5000)"));
        assert!(text.contains("Islam Makhachev: 76.19% (odds -320, decimal 1.3125)"));
        assert!(text.contains("EV Jack Della Maddalena: 0.1200"));
        assert!(text.contains("Kelly fraction on Jack Della Maddalena: 0.048"));
        assert!(text.contains("Bet on Jack Della Maddalena: $48.00"));
        assert!(text.contains("Bet on Islam Makhachev: $0.00"));
        assert!(text.contains("✔ BET on Jack Della Maddalena"));
        assert!(text.contains("✖ NO BET on Islam Makhachev"));
        assert!(text.contains("These odds need 76.2% to break even"));
        assert!(!text.contains("Stat model"));
    }

    #[test]
    fn text_report_mentions_fractional_kelly() {
        let text = render_text(&sample_report(0.5)).unwrap();
        assert!(text.contains("0.50× Kelly"));
        assert!(text.contains("Bet on Jack Della Maddalena: $24.00"));
    }

    #[test]
    fn text_report_shows_stat_model_block() {
        let matchup = Matchup::default();
        let model = estimate_win_probability(
            &matchup.fighter_a,
            &matchup.fighter_b,
            ModelWeights::default(),
        )
        .unwrap();
        let mut input = sample_input(1.0);
        input.model = Some(model);
        let text = render_text(&build_report(&input).unwrap()).unwrap();

        assert!(text.contains("Stat model win probabilities:"));
        assert!(text.contains("  Jack Della Maddalena: 57.99%"));
        assert!(text.contains("  Islam Makhachev: 42.01%"));
        assert!(text.contains("(score A 2.6676, score B 1.9328: grappling 0.1905, striking 1.5517)"));
        // Sizing still follows the supplied probability
        assert!(text.contains("Jack Della Maddalena: 32.00%"));
    }

    #[test]
    fn json_report_is_valid() {
        let json = render_json(&sample_report(1.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bankroll"], 1000.0);
        assert_eq!(value["side_a"]["fighter"], "Jack Della Maddalena");
    }
}
