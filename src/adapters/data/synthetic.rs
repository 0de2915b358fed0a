//! Synthetic spread generation
//!
//! Simulates a mean-reverting Ornstein-Uhlenbeck spread on business days:
//!
//!   x(t+1) = x(t) + theta * (mu - x(t)) + sigma * N(0, 1)
//!
//! Defaults match the demo calibration: long-term mean $1.50, reversion
//! speed 0.1, step volatility 0.05. Seeded for reproducible runs.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::{BacktestError, SpreadPoint, SpreadSeries};

/// Ornstein-Uhlenbeck simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OuParams {
    /// Long-term equilibrium level
    pub mu: f64,
    /// Mean reversion speed per step
    pub theta: f64,
    /// Volatility per step
    pub sigma: f64,
}

impl Default for OuParams {
    fn default() -> Self {
        Self {
            mu: 1.50,
            theta: 0.1,
            sigma: 0.05,
        }
    }
}

/// Generate `periods` business-day points of an OU process starting at
/// the equilibrium level on 2021-01-01.
pub fn generate_ou_series(
    periods: usize,
    params: &OuParams,
    seed: u64,
) -> Result<SpreadSeries, BacktestError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(periods);
    let mut x = params.mu;
    let mut date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or(NaiveDate::MIN);

    for _ in 0..periods {
        date = next_business_day(date);
        points.push(SpreadPoint {
            timestamp: to_utc_midnight(date),
            spread: x,
        });
        x += params.theta * (params.mu - x) + params.sigma * standard_normal(&mut rng);
    }

    SpreadSeries::new(points)
}

/// Box-Muller transform over the rng's uniform output
fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

fn next_business_day(mut date: NaiveDate) -> NaiveDate {
    loop {
        date += Duration::days(1);
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => continue,
            _ => return date,
        }
    }
}

fn to_utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0).unwrap_or_default(),
        Utc,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let a = generate_ou_series(100, &OuParams::default(), 42).unwrap();
        let b = generate_ou_series(100, &OuParams::default(), 42).unwrap();
        assert_eq!(a, b);

        let c = generate_ou_series(100, &OuParams::default(), 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_length_and_business_days() {
        let series = generate_ou_series(50, &OuParams::default(), 7).unwrap();
        assert_eq!(series.len(), 50);
        for point in series.points() {
            let weekday = point.timestamp.weekday();
            assert_ne!(weekday, Weekday::Sat);
            assert_ne!(weekday, Weekday::Sun);
        }
    }

    #[test]
    fn test_stays_near_equilibrium() {
        let params = OuParams::default();
        let series = generate_ou_series(1000, &params, 42).unwrap();
        let values = series.values();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        // Stationary OU std is sigma / sqrt(2 * theta) ~ 0.11 here
        assert!(
            (mean - params.mu).abs() < 0.1,
            "sample mean {mean} should hug mu {}",
            params.mu
        );
    }

    #[test]
    fn test_no_volatility_stays_at_mu() {
        let params = OuParams {
            sigma: 0.0,
            ..OuParams::default()
        };
        let series = generate_ou_series(20, &params, 1).unwrap();
        assert!(series.values().iter().all(|&v| (v - 1.50).abs() < 1e-12));
    }
}
