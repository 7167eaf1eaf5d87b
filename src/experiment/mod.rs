//! Configuration, validation and the single-run experiment pipeline.
//!
//! One run is an isolated, sequential computation: draw both samples from a
//! run-owned random source, summarize each group, compare the groups and
//! estimate the rate difference. Nothing is shared across runs.

use crate::error::ExperimentError;
use crate::simulation;
use crate::summary::{self, SummaryStatistics};
use crate::testing::inference::TwoSampleTests;
use crate::testing::interval::{self, ConfidenceInterval};
use crate::testing::utils::to_f64_sample;
use crate::testing::{Alternative, TTestType, effect};
use serde::{Deserialize, Serialize};

/// Parameters for one simulated experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub control_label: String,
    pub treatment_label: String,
    /// Observations drawn for the control group
    pub control_size: usize,
    /// Observations drawn for the treatment group
    pub treatment_size: usize,
    /// Bernoulli attempts recorded per observation; 1 means plain
    /// converted/not-converted outcomes
    pub trials_per_observation: u64,
    /// True success probability for the control group
    pub control_rate: f64,
    /// True success probability for the treatment group
    pub treatment_rate: f64,
    /// Threshold the p-value is compared against
    pub significance_level: f64,
    /// Level for the rate-difference interval
    pub confidence_level: f64,
    pub test_type: TTestType,
    pub alternative: Alternative,
    /// Fixed seed for reproducible runs; `None` draws fresh entropy
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            control_label: "A".to_string(),
            treatment_label: "B".to_string(),
            control_size: 1000,
            treatment_size: 1000,
            trials_per_observation: 1,
            control_rate: 0.10,
            treatment_rate: 0.12,
            significance_level: 0.05,
            confidence_level: 0.95,
            test_type: TTestType::Welch,
            alternative: Alternative::TwoSided,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Check every parameter before any sampling happens.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.control_size == 0 {
            return Err(ExperimentError::InvalidSampleSize(self.control_size));
        }
        if self.treatment_size == 0 {
            return Err(ExperimentError::InvalidSampleSize(self.treatment_size));
        }
        if self.trials_per_observation == 0 {
            return Err(ExperimentError::InvalidTrialCount(
                self.trials_per_observation,
            ));
        }
        for rate in [self.control_rate, self.treatment_rate] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(ExperimentError::InvalidProbability(rate));
            }
        }
        if !self.significance_level.is_finite()
            || self.significance_level <= 0.0
            || self.significance_level >= 1.0
        {
            return Err(ExperimentError::InvalidSignificanceLevel(
                self.significance_level,
            ));
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(ExperimentError::InvalidConfidenceLevel(
                self.confidence_level,
            ));
        }
        Ok(())
    }
}

/// Everything one run produced, ready for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub control_label: String,
    pub treatment_label: String,
    pub control: SummaryStatistics,
    pub treatment: SummaryStatistics,
    /// t-statistic, oriented treatment minus control
    pub statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: Option<f64>,
    pub significance_level: f64,
    /// `p_value < significance_level`
    pub reject_null: bool,
    pub interval: ConfidenceInterval,
    pub absolute_lift: f64,
    pub relative_lift: Option<f64>,
    /// Cohen's h for the observed rates
    pub effect_size: f64,
}

/// Run one simulated experiment end to end.
///
/// Generates the control sample and then the treatment sample from a single
/// run-owned random source, so a fixed seed reproduces the entire report bit
/// for bit.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
    config.validate()?;

    let mut rng = simulation::seeded_rng(config.seed);
    let control = simulation::simulate_sample(
        &mut rng,
        config.control_size,
        config.trials_per_observation,
        config.control_rate,
    )?;
    let treatment = simulation::simulate_sample(
        &mut rng,
        config.treatment_size,
        config.trials_per_observation,
        config.treatment_rate,
    )?;
    tracing::debug!(
        control = control.len(),
        treatment = treatment.len(),
        seed = ?config.seed,
        "samples generated"
    );

    let control_summary = summary::summarize(&control)?;
    let treatment_summary = summary::summarize(&treatment)?;

    let x = to_f64_sample(&treatment);
    let y = to_f64_sample(&control);
    let test = x.t_test(&y, config.test_type, config.alternative);
    tracing::debug!(
        statistic = test.statistic,
        p_value = test.p_value,
        "two-sample test complete"
    );

    let interval = interval::wald_interval(
        control_summary.rate,
        control_summary.total,
        treatment_summary.rate,
        treatment_summary.total,
        config.confidence_level,
    )?;
    let effect_size = effect::cohens_h(control_summary.rate, treatment_summary.rate)?;
    let reject_null = test.is_significant(config.significance_level);
    tracing::debug!(
        lower = interval.lower,
        upper = interval.upper,
        reject_null,
        "interval estimated"
    );

    Ok(ExperimentReport {
        control_label: config.control_label.clone(),
        treatment_label: config.treatment_label.clone(),
        control: control_summary,
        treatment: treatment_summary,
        statistic: test.statistic,
        p_value: test.p_value,
        degrees_of_freedom: test.degrees_of_freedom,
        significance_level: config.significance_level,
        reject_null,
        interval,
        absolute_lift: effect::absolute_lift(control_summary.rate, treatment_summary.rate),
        relative_lift: effect::relative_lift(control_summary.rate, treatment_summary.rate),
        effect_size,
    })
}
