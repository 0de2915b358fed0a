//! Rolling Z-Score
//!
//! z = (value - rolling_mean) / rolling_std over a fixed lookback window.
//!
//! The first `lookback - 1` indices have no full window and yield `None`,
//! as does any window whose standard deviation is effectively zero. The
//! std is the sample standard deviation (n - 1 denominator), matching the
//! rolling statistics the thresholds were calibrated against.

use crate::domain::errors::BacktestError;

/// Windows with std below this are treated as degenerate
const MIN_STD: f64 = 1e-10;

/// Compute the rolling z-score of `values` over `lookback`-sized windows.
///
/// The output is aligned with the input: `result[t]` uses only values at
/// indices `t - lookback + 1 ..= t`. Fails if the series is shorter than
/// the window.
pub fn rolling_z_scores(
    values: &[f64],
    lookback: usize,
) -> Result<Vec<Option<f64>>, BacktestError> {
    // A window needs at least two points for a sample std
    let required = lookback.max(2);
    if lookback < 2 || values.len() < lookback {
        return Err(BacktestError::InsufficientData {
            required,
            actual: values.len(),
        });
    }

    let mut z_scores = vec![None; lookback - 1];
    for window in values.windows(lookback) {
        let mean = window.iter().sum::<f64>() / lookback as f64;
        let variance = window
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / (lookback - 1) as f64;
        let std_dev = variance.sqrt();

        if std_dev < MIN_STD {
            z_scores.push(None);
        } else {
            let current = window[lookback - 1];
            z_scores.push(Some((current - mean) / std_dev));
        }
    }

    debug_assert_eq!(z_scores.len(), values.len());
    Ok(z_scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_short_series_fails() {
        let result = rolling_z_scores(&[1.0, 2.0], 5);
        assert!(matches!(
            result,
            Err(BacktestError::InsufficientData {
                required: 5,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_degenerate_window_fails() {
        for lookback in [0, 1] {
            let result = rolling_z_scores(&[1.0, 2.0, 3.0], lookback);
            assert!(matches!(
                result,
                Err(BacktestError::InsufficientData { required: 2, .. })
            ));
        }
    }

    #[test]
    fn test_warmup_is_none() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let z = rolling_z_scores(&values, 3).unwrap();
        assert!(z[0].is_none());
        assert!(z[1].is_none());
        assert!(z[2].is_some());
        assert_eq!(z.len(), values.len());
    }

    #[test]
    fn test_known_window() {
        // Window [1, 2, 6]: mean 3, sample std sqrt(7)
        let values = vec![1.0, 2.0, 6.0];
        let z = rolling_z_scores(&values, 3).unwrap();
        let expected = (6.0 - 3.0) / 7.0_f64.sqrt();
        assert_relative_eq!(z[2].unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_window_is_none() {
        let values = vec![2.0; 10];
        let z = rolling_z_scores(&values, 4).unwrap();
        assert!(z.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_no_lookahead() {
        let values: Vec<f64> = (0..40).map(|i| ((i * 7) % 11) as f64).collect();
        let full = rolling_z_scores(&values, 10).unwrap();
        let prefix = rolling_z_scores(&values[..25], 10).unwrap();
        assert_eq!(&full[..25], &prefix[..]);
    }

    #[test]
    fn test_symmetric_deviation() {
        // A value far above its window mean gets a large positive z
        let mut values = vec![10.0; 20];
        values.push(14.0);
        let z = rolling_z_scores(&values, 21).unwrap();
        assert!(z[20].unwrap() > 2.0);
    }
}
