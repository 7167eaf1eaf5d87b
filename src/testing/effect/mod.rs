use crate::error::ExperimentError;

/// Calculate Cohen's h effect size for a pair of proportions.
///
/// Uses the arcsine (variance-stabilizing) transform, so the same rate gap
/// counts for more near the boundaries than around 0.5. Positive when
/// `rate_b` exceeds `rate_a`.
pub fn cohens_h(rate_a: f64, rate_b: f64) -> Result<f64, ExperimentError> {
    for rate in [rate_a, rate_b] {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ExperimentError::InvalidProbability(rate));
        }
    }

    let phi_a = 2.0 * rate_a.sqrt().asin();
    let phi_b = 2.0 * rate_b.sqrt().asin();

    Ok(phi_b - phi_a)
}

/// Calculate Cohen's d effect size for two raw samples.
///
/// Standardized mean difference `mean(x) - mean(y)` over the pooled standard
/// deviation; each group needs at least 2 observations.
pub fn cohens_d(x: &[f64], y: &[f64]) -> Result<f64, ExperimentError> {
    if x.len() < 2 {
        return Err(ExperimentError::InsufficientObservations {
            needed: 2,
            got: x.len(),
        });
    }
    if y.len() < 2 {
        return Err(ExperimentError::InsufficientObservations {
            needed: 2,
            got: y.len(),
        });
    }

    let n1 = x.len() as f64;
    let n2 = y.len() as f64;

    let mean1 = x.iter().sum::<f64>() / n1;
    let mean2 = y.iter().sum::<f64>() / n2;

    let var1 = x.iter().map(|&v| (v - mean1).powi(2)).sum::<f64>() / (n1 - 1.0);
    let var2 = y.iter().map(|&v| (v - mean2).powi(2)).sum::<f64>() / (n2 - 1.0);

    let pooled_sd = (((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0)).sqrt();

    Ok((mean1 - mean2) / pooled_sd)
}

/// Absolute rate difference, treatment minus control.
pub fn absolute_lift(control_rate: f64, treatment_rate: f64) -> f64 {
    treatment_rate - control_rate
}

/// Relative uplift over the control rate; undefined when the control never
/// converts.
pub fn relative_lift(control_rate: f64, treatment_rate: f64) -> Option<f64> {
    if control_rate == 0.0 {
        None
    } else {
        Some((treatment_rate - control_rate) / control_rate)
    }
}
