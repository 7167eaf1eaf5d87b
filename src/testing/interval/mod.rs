//! Wald confidence interval for a difference of two proportions.

use crate::error::ExperimentError;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// A two-sided interval around an estimated rate difference.
///
/// `lower <= upper` holds by construction; a zero-width interval is a valid
/// (if uninformative) result produced when both rates are degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Confidence level the interval was computed at, e.g. 0.95
    pub level: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// True when the interval collapsed to a point (both rates exactly 0 or 1).
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
}

/// Two-sided critical value of the standard normal for the given confidence
/// level, e.g. 0.95 -> 1.96.
pub fn z_critical(level: f64) -> Result<f64, ExperimentError> {
    if !level.is_finite() || level <= 0.0 || level >= 1.0 {
        return Err(ExperimentError::InvalidConfidenceLevel(level));
    }

    let normal = Normal::new(0.0, 1.0).unwrap();
    Ok(normal.inverse_cdf(0.5 + level / 2.0))
}

/// Wald interval for the difference of two proportions, `rate_b - rate_a`.
///
/// Uses the normal approximation with standard error
/// `sqrt(r_a(1-r_a)/n_a + r_b(1-r_b)/n_b)`. The approximation degrades for
/// small samples or rates near 0 or 1, and the bounds are not clipped to
/// [-1, 1].
pub fn wald_interval(
    rate_a: f64,
    n_a: usize,
    rate_b: f64,
    n_b: usize,
    level: f64,
) -> Result<ConfidenceInterval, ExperimentError> {
    if n_a == 0 {
        return Err(ExperimentError::InvalidSampleSize(n_a));
    }
    if n_b == 0 {
        return Err(ExperimentError::InvalidSampleSize(n_b));
    }
    for rate in [rate_a, rate_b] {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ExperimentError::InvalidProbability(rate));
        }
    }

    let z = z_critical(level)?;
    let std_err =
        (rate_a * (1.0 - rate_a) / n_a as f64 + rate_b * (1.0 - rate_b) / n_b as f64).sqrt();
    let diff = rate_b - rate_a;

    Ok(ConfidenceInterval {
        level,
        lower: diff - z * std_err,
        upper: diff + z * std_err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn z_critical_matches_tables() {
        assert_abs_diff_eq!(z_critical(0.95).unwrap(), 1.959964, epsilon = 1e-4);
        assert_abs_diff_eq!(z_critical(0.90).unwrap(), 1.644854, epsilon = 1e-4);
        assert_abs_diff_eq!(z_critical(0.99).unwrap(), 2.575829, epsilon = 1e-4);
    }

    #[test]
    fn z_critical_rejects_bad_levels() {
        assert!(z_critical(0.0).is_err());
        assert!(z_critical(1.0).is_err());
        assert!(z_critical(-0.5).is_err());
        assert!(z_critical(f64::NAN).is_err());
    }

    #[test]
    fn equal_rates_give_symmetric_interval() {
        let ci = wald_interval(0.1, 1000, 0.1, 1000, 0.95).unwrap();
        assert_abs_diff_eq!(ci.lower, -ci.upper, epsilon = 1e-12);
        assert!(ci.contains(0.0));
    }

    #[test]
    fn degenerate_rates_collapse_to_point() {
        let ci = wald_interval(0.0, 100, 0.0, 100, 0.95).unwrap();
        assert!(ci.is_degenerate());
        assert_eq!(ci.lower, 0.0);

        let ci = wald_interval(1.0, 100, 0.0, 100, 0.95).unwrap();
        assert!(ci.is_degenerate());
        assert_eq!(ci.lower, -1.0);
    }

    #[test]
    fn interval_ordering_holds() {
        let ci = wald_interval(0.10, 1000, 0.12, 1000, 0.95).unwrap();
        assert!(ci.lower <= ci.upper);
        assert!(ci.width() > 0.0);
        assert_abs_diff_eq!((ci.lower + ci.upper) / 2.0, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn wider_confidence_widens_the_interval() {
        let narrow = wald_interval(0.10, 1000, 0.12, 1000, 0.90).unwrap();
        let wide = wald_interval(0.10, 1000, 0.12, 1000, 0.99).unwrap();
        assert!(wide.width() > narrow.width());
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(wald_interval(0.1, 0, 0.2, 100, 0.95).is_err());
        assert!(wald_interval(0.1, 100, 1.2, 100, 0.95).is_err());
        assert!(wald_interval(0.1, 100, 0.2, 100, 1.0).is_err());
    }
}
