use thiserror::Error;

/// Input-validation failures raised by the betting math.
///
/// None of these are transient: every variant means the run must be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("invalid odds: {0}")]
    InvalidOdds(String),

    #[error("invalid probability {0}: must be within [0, 1]")]
    InvalidProbability(f64),

    #[error("invalid bankroll {0}: must be non-negative")]
    InvalidBankroll(f64),

    #[error("invalid kelly multiplier {0}: must be within (0, 1]")]
    InvalidKellyMultiplier(f64),

    #[error("degenerate input: both fighter scores are zero")]
    DegenerateInput,

    #[error("fighter '{fighter}' is missing statistic '{stat}'")]
    MissingStatistic { fighter: String, stat: &'static str },

    #[error("fighter '{fighter}' has invalid statistic '{stat}' = {value}")]
    InvalidStatistic {
        fighter: String,
        stat: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
