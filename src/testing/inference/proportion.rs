//! Pooled two-proportion z-test over raw conversion counts.

use crate::error::ExperimentError;
use crate::testing::{Alternative, TestResult};
use statrs::distribution::{ContinuousCDF, Normal};

/// Compare two conversion counts with the pooled-variance normal test.
///
/// The statistic is oriented as `rate_b - rate_a`, so `Alternative::Greater`
/// asks whether group B converts better than group A. A degenerate pooled rate
/// (every observation converted, or none did) carries no evidence either way
/// and yields the null result (0, 1).
///
/// # Arguments
///
/// * `successes_a`, `n_a` - Conversions and sample size for group A
/// * `successes_b`, `n_b` - Conversions and sample size for group B
/// * `alternative` - Tail of the alternative hypothesis
pub fn two_proportion_z_test(
    successes_a: usize,
    n_a: usize,
    successes_b: usize,
    n_b: usize,
    alternative: Alternative,
) -> Result<TestResult<f64>, ExperimentError> {
    if n_a == 0 {
        return Err(ExperimentError::InvalidSampleSize(n_a));
    }
    if n_b == 0 {
        return Err(ExperimentError::InvalidSampleSize(n_b));
    }
    if successes_a > n_a {
        return Err(ExperimentError::InvalidSuccessCount {
            successes: successes_a,
            total: n_a,
        });
    }
    if successes_b > n_b {
        return Err(ExperimentError::InvalidSuccessCount {
            successes: successes_b,
            total: n_b,
        });
    }

    let na = n_a as f64;
    let nb = n_b as f64;
    let rate_a = successes_a as f64 / na;
    let rate_b = successes_b as f64 / nb;

    let pooled = (successes_a + successes_b) as f64 / (na + nb);
    let std_err = (pooled * (1.0 - pooled) * (1.0 / na + 1.0 / nb)).sqrt();

    let z = if std_err == 0.0 {
        // Pooled rate 0 or 1 forces rate_a == rate_b.
        0.0
    } else {
        (rate_b - rate_a) / std_err
    };

    let normal = Normal::new(0.0, 1.0).unwrap();
    let p_value = match alternative {
        Alternative::TwoSided => 2.0 * (1.0 - normal.cdf(z.abs())),
        Alternative::Greater => 1.0 - normal.cdf(z),
        Alternative::Less => normal.cdf(z),
    }
    .clamp(0.0, 1.0);

    Ok(TestResult::new(z, p_value)
        .with_standard_error(std_err)
        .with_metadata("pooled_rate", pooled)
        .with_metadata("rate_a", rate_a)
        .with_metadata("rate_b", rate_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn detects_clear_difference() {
        let result = two_proportion_z_test(100, 1000, 200, 1000, Alternative::TwoSided).unwrap();
        assert!(result.statistic > 5.0);
        assert!(result.p_value < 0.001);
    }

    #[test]
    fn equal_counts_are_null() {
        let result = two_proportion_z_test(120, 1000, 120, 1000, Alternative::TwoSided).unwrap();
        assert_abs_diff_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_pooled_rate_is_null() {
        let all_zero = two_proportion_z_test(0, 500, 0, 500, Alternative::TwoSided).unwrap();
        assert_eq!(all_zero.statistic, 0.0);
        assert_eq!(all_zero.p_value, 1.0);

        let all_one = two_proportion_z_test(500, 500, 500, 500, Alternative::Greater).unwrap();
        assert_eq!(all_one.statistic, 0.0);
    }

    #[test]
    fn one_sided_tail_matches_direction() {
        let greater = two_proportion_z_test(100, 1000, 150, 1000, Alternative::Greater).unwrap();
        let less = two_proportion_z_test(100, 1000, 150, 1000, Alternative::Less).unwrap();
        assert!(greater.p_value < 0.05);
        assert!(less.p_value > 0.95);
        assert_abs_diff_eq!(greater.p_value + less.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_invalid_counts() {
        assert!(two_proportion_z_test(0, 0, 10, 100, Alternative::TwoSided).is_err());
        assert!(two_proportion_z_test(10, 100, 5, 0, Alternative::TwoSided).is_err());
        assert!(two_proportion_z_test(101, 100, 5, 100, Alternative::TwoSided).is_err());
    }
}
