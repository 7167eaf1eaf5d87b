use thiserror::Error;

/// Failures surfaced by a single experiment run.
///
/// Everything here is a parameter-validation failure detected before the
/// computation it guards; there is no retry concept and no partial result.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("sample size must be positive, got {0}")]
    InvalidSampleSize(usize),

    #[error("trials per observation must be at least 1, got {0}")]
    InvalidTrialCount(u64),

    #[error("success probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("significance level must lie in (0, 1), got {0}")]
    InvalidSignificanceLevel(f64),

    #[error("confidence level must lie in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),

    #[error("cannot compute a conversion rate over an empty sample")]
    EmptySample,

    #[error("success count {successes} exceeds sample size {total}")]
    InvalidSuccessCount { successes: usize, total: usize },

    #[error("need at least {needed} observations per group, got {got}")]
    InsufficientObservations { needed: usize, got: usize },
}
