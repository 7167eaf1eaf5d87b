//! CLI argument parsing for the ab-stats binary.

use crate::experiment::ExperimentConfig;
use crate::testing::{Alternative, TTestType};
use clap::{Parser, ValueEnum};

/// Output format for the experiment report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

/// T-test variant
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestFlavor {
    /// Student's t-test (pooled variance)
    Student,
    /// Welch's t-test (unequal variances)
    Welch,
}

impl From<TestFlavor> for TTestType {
    fn from(flavor: TestFlavor) -> Self {
        match flavor {
            TestFlavor::Student => TTestType::Student,
            TestFlavor::Welch => TTestType::Welch,
        }
    }
}

/// Tail of the alternative hypothesis
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Tail {
    /// Treatment differs from control in either direction
    TwoSided,
    /// Treatment converts better than control
    Greater,
    /// Treatment converts worse than control
    Less,
}

impl From<Tail> for Alternative {
    fn from(tail: Tail) -> Self {
        match tail {
            Tail::TwoSided => Alternative::TwoSided,
            Tail::Greater => Alternative::Greater,
            Tail::Less => Alternative::Less,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ab-stats")]
#[command(version)]
#[command(about = "Simulate a two-group conversion experiment and test the difference", long_about = None)]
pub struct Cli {
    /// Visitors in the control group
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pub control_size: usize,

    /// Visitors in the treatment group
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pub treatment_size: usize,

    /// True conversion probability for the control group
    #[arg(long, value_name = "P", default_value_t = 0.10)]
    pub control_rate: f64,

    /// True conversion probability for the treatment group
    #[arg(long, value_name = "P", default_value_t = 0.12)]
    pub treatment_rate: f64,

    /// Bernoulli attempts recorded per visitor (1 = plain converted/not)
    #[arg(long, value_name = "K", default_value_t = 1)]
    pub trials: u64,

    /// Significance threshold for rejecting the null hypothesis
    #[arg(long, value_name = "ALPHA", default_value_t = 0.05)]
    pub alpha: f64,

    /// Confidence level for the rate-difference interval
    #[arg(long, value_name = "LEVEL", default_value_t = 0.95)]
    pub confidence: f64,

    /// Seed for the random source; omit for a fresh draw each run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// T-test variant
    #[arg(long, value_enum, default_value = "welch")]
    pub test: TestFlavor,

    /// Tail of the alternative hypothesis
    #[arg(long, value_enum, default_value = "two-sided")]
    pub tail: Tail,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log pipeline stages to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn to_config(&self) -> ExperimentConfig {
        ExperimentConfig {
            control_label: "A".to_string(),
            treatment_label: "B".to_string(),
            control_size: self.control_size,
            treatment_size: self.treatment_size,
            trials_per_observation: self.trials,
            control_rate: self.control_rate,
            treatment_rate: self.treatment_rate,
            significance_level: self.alpha,
            confidence_level: self.confidence,
            test_type: self.test.into(),
            alternative: self.tail.into(),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_reference_scenario() {
        let cli = Cli::parse_from(["ab-stats"]);
        assert_eq!(cli.control_size, 1000);
        assert_eq!(cli.treatment_size, 1000);
        assert_eq!(cli.control_rate, 0.10);
        assert_eq!(cli.treatment_rate, 0.12);
        assert_eq!(cli.trials, 1);
        assert_eq!(cli.alpha, 0.05);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "ab-stats",
            "--control-size",
            "500",
            "--treatment-rate",
            "0.2",
            "--seed",
            "42",
            "--tail",
            "greater",
            "--format",
            "json",
        ]);
        assert_eq!(cli.control_size, 500);
        assert_eq!(cli.treatment_rate, 0.2);
        assert_eq!(cli.seed, Some(42));
        assert!(matches!(cli.tail, Tail::Greater));
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_cli_builds_matching_config() {
        let cli = Cli::parse_from(["ab-stats", "--alpha", "0.01", "--test", "student"]);
        let config = cli.to_config();
        assert_eq!(config.significance_level, 0.01);
        assert!(matches!(config.test_type, TTestType::Student));
        assert_eq!(config.control_label, "A");
        assert_eq!(config.treatment_label, "B");
    }
}
