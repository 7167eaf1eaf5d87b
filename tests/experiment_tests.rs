// End-to-end tests for the experiment pipeline: generation, summaries, the
// two-sample test, the interval and the rendered report working together.

use ab_stats::error::ExperimentError;
use ab_stats::experiment::{self, ExperimentConfig};
use ab_stats::report;
use ab_stats::testing::Alternative;

fn seeded_config(seed: u64) -> ExperimentConfig {
    ExperimentConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn reference_scenario_produces_consistent_report() {
    // N=1000 per group, true rates 0.10 vs 0.12, plain binary outcomes.
    let outcome = experiment::run(&seeded_config(42)).unwrap();

    assert_eq!(outcome.control.total, 1000);
    assert_eq!(outcome.treatment.total, 1000);
    assert_eq!(
        outcome.control.successes + outcome.control.failures,
        outcome.control.total
    );
    assert_eq!(
        outcome.treatment.successes + outcome.treatment.failures,
        outcome.treatment.total
    );

    // Observed rates stay near the true rates; the bound is far beyond any
    // plausible sampling noise at this size.
    assert!((outcome.control.rate - 0.10).abs() < 0.05);
    assert!((outcome.treatment.rate - 0.12).abs() < 0.05);

    assert!(outcome.p_value >= 0.0 && outcome.p_value <= 1.0);
    assert_eq!(outcome.reject_null, outcome.p_value < 0.05);

    assert!(outcome.interval.lower <= outcome.interval.upper);
    assert_eq!(outcome.interval.level, 0.95);

    // Interval, lift and statistic all describe treatment minus control.
    let diff = outcome.treatment.rate - outcome.control.rate;
    assert!((outcome.absolute_lift - diff).abs() < 1e-12);
    assert!(outcome.interval.contains(diff));
}

#[test]
fn seeded_runs_are_reproducible_bit_for_bit() {
    let config = seeded_config(7);

    let first = experiment::run(&config).unwrap();
    let second = experiment::run(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        report::render_report(&first),
        report::render_report(&second)
    );
}

#[test]
fn aa_run_shows_no_extreme_statistic() {
    // Same true rate in both groups: whatever the draw, the statistic cannot
    // be astronomically large.
    let config = ExperimentConfig {
        treatment_rate: 0.10,
        seed: Some(1234),
        ..Default::default()
    };

    let outcome = experiment::run(&config).unwrap();
    assert!(outcome.statistic.abs() < 10.0);
    assert!(outcome.p_value > 0.0);
}

#[test]
fn degenerate_rates_collapse_the_interval() {
    let config = ExperimentConfig {
        control_rate: 0.0,
        treatment_rate: 1.0,
        seed: Some(5),
        ..Default::default()
    };

    let outcome = experiment::run(&config).unwrap();

    assert_eq!(outcome.control.rate, 0.0);
    assert_eq!(outcome.treatment.rate, 1.0);
    assert!(outcome.interval.is_degenerate());
    assert_eq!(outcome.interval.lower, 1.0);

    // Perfect separation: infinitely strong evidence.
    assert!(outcome.statistic.is_infinite());
    assert_eq!(outcome.p_value, 0.0);
    assert!(outcome.reject_null);
}

#[test]
fn one_sided_alternative_flows_through() {
    let config = ExperimentConfig {
        alternative: Alternative::Greater,
        seed: Some(42),
        ..Default::default()
    };
    let two_sided = experiment::run(&seeded_config(42)).unwrap();
    let one_sided = experiment::run(&config).unwrap();

    // Same draws, same statistic; only the tail changes.
    assert_eq!(one_sided.statistic, two_sided.statistic);
    if one_sided.statistic > 0.0 {
        assert!((two_sided.p_value - 2.0 * one_sided.p_value).abs() < 1e-12);
    }
}

#[test]
fn invalid_parameters_fail_before_sampling() {
    let config = ExperimentConfig {
        control_size: 0,
        ..Default::default()
    };
    assert!(matches!(
        experiment::run(&config),
        Err(ExperimentError::InvalidSampleSize(0))
    ));

    let config = ExperimentConfig {
        control_rate: -0.2,
        ..Default::default()
    };
    assert!(matches!(
        experiment::run(&config),
        Err(ExperimentError::InvalidProbability(_))
    ));
}

#[test]
fn rendered_report_carries_the_observable_lines() {
    let outcome = experiment::run(&seeded_config(42)).unwrap();
    let text = report::render_report(&outcome);

    assert!(text.contains("Group A:"));
    assert!(text.contains("Group B:"));
    assert!(text.contains("the total is 1000"));
    assert!(text.contains("Conversion rate for group A:"));
    assert!(text.contains("T-statistic:"));
    assert!(text.contains("P-value:"));
    assert!(text.contains("null hypothesis"));
    assert!(text.contains("95% Confidence Interval: ["));
}

#[test]
fn report_round_trips_through_json() {
    let outcome = experiment::run(&seeded_config(9)).unwrap();

    let encoded = serde_json::to_string(&outcome).unwrap();
    let decoded: experiment::ExperimentReport = serde_json::from_str(&encoded).unwrap();

    assert_eq!(outcome, decoded);
}

#[test]
fn multi_trial_observations_still_summarize_cleanly() {
    let config = ExperimentConfig {
        trials_per_observation: 10,
        seed: Some(21),
        ..Default::default()
    };

    let outcome = experiment::run(&config).unwrap();

    // Every observation is counted whether it saw 0, 1 or 10 conversions.
    assert_eq!(
        outcome.control.successes + outcome.control.failures,
        outcome.control.total
    );
    assert!(outcome.control.rate >= 0.0 && outcome.control.rate <= 1.0);
}
