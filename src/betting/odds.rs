/// American odds conversions.
///
/// American odds quote a payout against a 100-unit reference:
///   +250 → a 100 stake wins 250 (underdog)
///   −320 → a 320 stake is needed to win 100 (favourite)
///
/// Decimal odds are the total payout multiplier including the stake, so they
/// are always strictly greater than 1.
use crate::error::Result;
use crate::models::AmericanOdds;

/// Convert American odds to decimal odds.
///
/// Fails with `InvalidOdds` for zero.
pub fn to_decimal(american_odds: i32) -> Result<f64> {
    let odds = AmericanOdds::new(american_odds)?.value() as f64;
    if odds > 0.0 {
        Ok(1.0 + odds / 100.0)
    } else {
        Ok(1.0 + 100.0 / odds.abs())
    }
}

/// Bookmaker-implied probability of American odds, in (0, 1).
///
/// The result includes the bookmaker's margin, so the two sides of a market
/// generally sum to more than 1.
pub fn implied_probability(american_odds: i32) -> Result<f64> {
    let odds = AmericanOdds::new(american_odds)?.value() as f64;
    if odds > 0.0 {
        Ok(100.0 / (100.0 + odds))
    } else {
        Ok(odds.abs() / (odds.abs() + 100.0))
    }
}

/// Probability at which a bet at `decimal_odds` has zero expected value.
pub fn breakeven_probability(decimal_odds: f64) -> f64 {
    1.0 / decimal_odds
}

/// Overround of a two-outcome market: how far the implied probabilities
/// exceed 1.
pub fn book_margin(odds_a: i32, odds_b: i32) -> Result<f64> {
    Ok(implied_probability(odds_a)? + implied_probability(odds_b)? - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_odds(rng: &mut StdRng) -> i32 {
        let magnitude = rng.gen_range(1..=100_000);
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }

    #[test]
    fn test_decimal_underdog() {
        assert_relative_eq!(to_decimal(250).unwrap(), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_decimal_favourite() {
        assert_relative_eq!(to_decimal(-320).unwrap(), 1.3125, epsilon = 1e-12);
    }

    #[test]
    fn test_even_money() {
        assert_relative_eq!(to_decimal(100).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(to_decimal(-100).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(implied_probability(100).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(implied_probability(-100).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_implied_probability_examples() {
        assert_relative_eq!(implied_probability(250).unwrap(), 0.2857, epsilon = 1e-4);
        assert_relative_eq!(implied_probability(-320).unwrap(), 0.7619, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_odds_rejected() {
        assert!(matches!(to_decimal(0), Err(AnalysisError::InvalidOdds(_))));
        assert!(matches!(
            implied_probability(0),
            Err(AnalysisError::InvalidOdds(_))
        ));
    }

    #[test]
    fn test_decimal_always_above_one() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let odds = random_odds(&mut rng);
            let decimal = to_decimal(odds).unwrap();
            assert!(decimal > 1.0, "odds {} gave decimal {}", odds, decimal);
        }
        assert!(to_decimal(i32::MIN).unwrap() > 1.0);
        assert!(to_decimal(i32::MAX).unwrap() > 1.0);
    }

    #[test]
    fn test_implied_in_open_unit_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let odds = random_odds(&mut rng);
            let p = implied_probability(odds).unwrap();
            assert!(p > 0.0 && p < 1.0, "odds {} gave implied {}", odds, p);
        }
    }

    #[test]
    fn test_positive_odds_formulations_agree() {
        // 1 / (1 + odds/100) is the same quantity as 100 / (100 + odds)
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..10_000 {
            let odds: i32 = rng.gen_range(1..=100_000);
            let alternative = 1.0 / (1.0 + odds as f64 / 100.0);
            assert_relative_eq!(
                implied_probability(odds).unwrap(),
                alternative,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_implied_is_reciprocal_of_decimal() {
        for odds in [-1000, -320, -150, -101, 101, 150, 250, 1000] {
            assert_relative_eq!(
                implied_probability(odds).unwrap(),
                breakeven_probability(to_decimal(odds).unwrap()),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_book_margin() {
        // 0.285714 + 0.761905 − 1
        let margin = book_margin(250, -320).unwrap();
        assert!(margin > 0.0);
        assert_relative_eq!(margin, 0.047619, epsilon = 1e-5);
        assert_relative_eq!(book_margin(100, -100).unwrap(), 0.0, epsilon = 1e-12);
    }
}
