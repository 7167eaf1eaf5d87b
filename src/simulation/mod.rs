//! Synthetic outcome generation for simulated experiments.
//!
//! Every draw comes from a random source the caller owns. A run that wants
//! reproducibility passes an explicit seed to [`seeded_rng`]; nothing in this
//! module touches a global or thread-local generator.

use crate::error::ExperimentError;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the random source for one run.
///
/// A fixed seed makes the whole run reproducible bit for bit; without one the
/// generator is seeded from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw one group's outcomes.
///
/// Produces `n` independent observations, each the number of successes out of
/// `trials` Bernoulli attempts at probability `p`, i.e. a binomial(`trials`,
/// `p`) draw. With `trials = 1` each observation is a plain
/// converted/not-converted flag.
///
/// # Arguments
///
/// * `rng` - Random source owned by the run
/// * `n` - Number of observations; 0 yields an empty sample
/// * `trials` - Bernoulli attempts recorded per observation, at least 1
/// * `p` - True success probability in [0, 1]
///
/// # Errors
///
/// Validation happens before any entropy is consumed: `trials = 0` or a
/// probability outside [0, 1] fail without sampling.
pub fn simulate_sample<R: Rng>(
    rng: &mut R,
    n: usize,
    trials: u64,
    p: f64,
) -> Result<Vec<u64>, ExperimentError> {
    if trials == 0 {
        return Err(ExperimentError::InvalidTrialCount(trials));
    }
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(ExperimentError::InvalidProbability(p));
    }

    let mut sample = Vec::with_capacity(n);
    for _ in 0..n {
        let mut successes = 0u64;
        for _ in 0..trials {
            if rng.gen_bool(p) {
                successes += 1;
            }
        }
        sample.push(successes);
    }

    Ok(sample)
}
