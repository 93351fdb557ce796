use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::models::{FighterProfile, FighterStats};

/// The two profiles the model compares, A (striker) first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Matchup {
    pub fighter_a: FighterProfile,
    pub fighter_b: FighterProfile,
}

impl Default for Matchup {
    fn default() -> Self {
        Matchup {
            fighter_a: default_fighter_a(),
            fighter_b: default_fighter_b(),
        }
    }
}

impl Matchup {
    /// Replace profile names, keeping their statistics.
    pub fn with_names(mut self, name_a: Option<&str>, name_b: Option<&str>) -> Self {
        if let Some(name) = name_a {
            self.fighter_a.name = name.to_string();
        }
        if let Some(name) = name_b {
            self.fighter_b.name = name.to_string();
        }
        self
    }
}

/// Built-in striker profile. Grappling figures are rough estimates.
pub fn default_fighter_a() -> FighterProfile {
    FighterProfile {
        name: "Jack Della Maddalena".into(),
        stats: FighterStats {
            slpm: Some(6.84),
            td_offense: Some(0.2),
            td_defense: Some(0.7),
            ..Default::default()
        },
    }
}

/// Built-in grappler profile.
pub fn default_fighter_b() -> FighterProfile {
    FighterProfile {
        name: "Islam Makhachev".into(),
        stats: FighterStats {
            slpm: Some(2.63),
            sig_strike_accuracy: Some(0.59),
            sig_strike_defense: Some(0.61),
            td_per_15: Some(3.20),
            td_accuracy: Some(0.54),
            td_defense: Some(0.91),
            sub_per_15: Some(1.13),
            td_offense: None,
        },
    }
}

pub fn parse_matchup(json: &str) -> Result<Matchup> {
    serde_json::from_str(json).context("Failed to parse fighter profiles")
}

/// Load both profiles from a JSON file of the form
/// `{"fighter_a": {...}, "fighter_b": {...}}`.
pub fn load_matchup(path: &Path) -> Result<Matchup> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fighters file {}", path.display()))?;
    parse_matchup(&raw).with_context(|| format!("Invalid fighters file {}", path.display()))
}
