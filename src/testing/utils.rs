/// Widen a sample of per-observation success counts for the float-based tests.
pub fn to_f64_sample(sample: &[u64]) -> Vec<f64> {
    sample.iter().map(|&v| v as f64).collect()
}
