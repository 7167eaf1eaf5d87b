//! Parametric two-sample tests.
//!
//! This module implements the independent two-sample t-test used to compare the
//! mean outcome of the treatment group against the control group. Tests can be
//! computed from raw samples or directly from precomputed sums, which is what
//! the experiment pipeline does after a single pass over each sample.

use crate::testing::{Alternative, TTestType, TestResult};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Perform a t-test comparing two samples.
///
/// This function performs either Student's t-test (assuming equal variances) or
/// Welch's t-test (allowing unequal variances) on two samples. The statistic is
/// oriented as `mean(x) - mean(y)`, so `Alternative::Greater` asks whether the
/// first sample has the larger mean.
///
/// # Arguments
///
/// * `x` - First sample
/// * `y` - Second sample
/// * `test_type` - Type of t-test to perform
/// * `alternative` - Tail of the alternative hypothesis
///
/// # Returns
///
/// `TestResult` containing the t-statistic and p-value. With fewer than two
/// observations on either side no inference is possible and the result is
/// (0, 1).
pub fn t_test(
    x: &[f64],
    y: &[f64],
    test_type: TTestType,
    alternative: Alternative,
) -> TestResult<f64> {
    if x.len() < 2 || y.len() < 2 {
        return TestResult::new(0.0, 1.0);
    }

    let mut sum_x = 0.0;
    let mut sum_sq_x = 0.0;
    for &val in x {
        sum_x += val;
        sum_sq_x += val * val;
    }

    let mut sum_y = 0.0;
    let mut sum_sq_y = 0.0;
    for &val in y {
        sum_y += val;
        sum_sq_y += val * val;
    }

    t_test_from_sums(
        sum_x,
        sum_sq_x,
        x.len() as f64,
        sum_y,
        sum_sq_y,
        y.len() as f64,
        test_type,
        alternative,
    )
}

/// Perform a t-test using precomputed summary statistics.
///
/// Computes the test directly from sum and sum-of-squares, avoiding a second
/// pass over the original data.
///
/// # Arguments
///
/// * `sum1`, `sum_sq1`, `n1` - Sum, sum of squares, and count for group 1
/// * `sum2`, `sum_sq2`, `n2` - Sum, sum of squares, and count for group 2
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
/// * `alternative` - Tail of the alternative hypothesis
///
/// # Returns
///
/// `TestResult` containing the t-statistic, p-value, degrees of freedom and
/// standard error. A zero standard error with equal means yields exactly
/// (0, 1); with unequal means the statistic is infinite and the p-value 0.
#[allow(clippy::too_many_arguments)]
pub fn t_test_from_sums(
    sum1: f64,
    sum_sq1: f64,
    n1: f64,
    sum2: f64,
    sum_sq2: f64,
    n2: f64,
    test_type: TTestType,
    alternative: Alternative,
) -> TestResult<f64> {
    if n1 < 2.0 || n2 < 2.0 {
        return TestResult::new(0.0, 1.0);
    }

    let mean1 = sum1 / n1;
    let mean2 = sum2 / n2;

    // Computational formula; the subtraction can go fractionally negative for
    // constant samples, hence the clamp.
    let var1 = ((sum_sq1 - sum1 * sum1 / n1) / (n1 - 1.0)).max(0.0);
    let var2 = ((sum_sq2 - sum2 * sum2 / n2) / (n2 - 1.0)).max(0.0);

    let mean_diff = mean1 - mean2;

    let (std_err, df) = match test_type {
        TTestType::Student => {
            let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);
            let std_err = (pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt();
            (std_err, n1 + n2 - 2.0)
        }
        TTestType::Welch => {
            let term1 = var1 / n1;
            let term2 = var2 / n2;
            let combined_var = term1 + term2;

            // Welch-Satterthwaite equation for degrees of freedom
            let df = combined_var * combined_var
                / (term1 * term1 / (n1 - 1.0) + term2 * term2 / (n2 - 1.0));
            (combined_var.sqrt(), df)
        }
    };

    let t_stat = if std_err == 0.0 {
        // Both samples are constant: the direction of the mean difference is
        // all the data can say.
        if mean_diff == 0.0 {
            0.0
        } else if mean_diff > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        mean_diff / std_err
    };

    let p_value = t_test_p_value(t_stat, df, alternative);
    TestResult::new(t_stat, p_value)
        .with_degrees_of_freedom(df)
        .with_standard_error(std_err)
}

fn t_test_p_value(t_stat: f64, df: f64, alternative: Alternative) -> f64 {
    if t_stat.is_nan() {
        return 1.0;
    }

    if t_stat.is_infinite() {
        return match alternative {
            Alternative::TwoSided => 0.0,
            Alternative::Greater => {
                if t_stat > 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Alternative::Less => {
                if t_stat < 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
        };
    }

    if df <= 0.0 || !df.is_finite() {
        return 1.0;
    }

    let p = match alternative {
        Alternative::TwoSided => 2.0 * upper_tail(t_stat.abs(), df),
        Alternative::Greater => upper_tail(t_stat, df),
        Alternative::Less => 1.0 - upper_tail(t_stat, df),
    };

    p.clamp(0.0, 1.0)
}

/// P(T > x) for a t-distributed variable with `df` degrees of freedom.
fn upper_tail(x: f64, df: f64) -> f64 {
    // The t-distribution is indistinguishable from the standard normal at
    // large df; skip constructing it.
    if df > 100.0 {
        let normal = Normal::new(0.0, 1.0).unwrap();
        return 1.0 - normal.cdf(x);
    }

    match StudentsT::new(0.0, 1.0, df) {
        Ok(t_dist) => 1.0 - t_dist.cdf(x),
        Err(_) => 0.5,
    }
}
