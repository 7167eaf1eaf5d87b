use crate::testing::{Alternative, TestResult};
use statrs::distribution::{ContinuousCDF, Normal};
use std::cmp::Ordering;

/// Mann-Whitney U test over two raw samples.
///
/// Ranks the pooled observations (ties receive their average rank) and applies
/// the normal approximation with continuity correction. Conversion outcomes
/// produce heavy ties, which the averaged ranks absorb.
pub fn mann_whitney(x: &[f64], y: &[f64], alternative: Alternative) -> TestResult<f64> {
    let nx = x.len();
    let ny = y.len();

    if nx == 0 || ny == 0 {
        return TestResult::new(f64::NAN, 1.0); // Insufficient data
    }

    // Combine samples and assign group labels (0 for x, 1 for y)
    let mut combined: Vec<(f64, usize)> = Vec::with_capacity(nx + ny);
    combined.extend(x.iter().map(|&v| (v, 0)));
    combined.extend(y.iter().map(|&v| (v, 1)));

    combined.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    // Assign ranks (with ties averaged)
    let mut ranks = vec![0.0; nx + ny];
    let mut i = 0;
    while i < combined.len() {
        let val = combined[i].0;
        let mut j = i + 1;

        while j < combined.len() && combined[j].0 == val {
            j += 1;
        }

        let rank = (i + j - 1) as f64 / 2.0 + 1.0;
        for r in ranks.iter_mut().take(j).skip(i) {
            *r = rank;
        }

        i = j;
    }

    let mut rank_sum_x = 0.0;
    for (idx, entry) in combined.iter().enumerate() {
        if entry.1 == 0 {
            rank_sum_x += ranks[idx];
        }
    }

    let u_x = rank_sum_x - (nx * (nx + 1)) as f64 / 2.0;
    let u_y = (nx * ny) as f64 - u_x;

    let u = match alternative {
        Alternative::TwoSided => u_x.min(u_y),
        _ => u_x,
    };

    let mean_u = (nx * ny) as f64 / 2.0;
    let var_u = (nx * ny * (nx + ny + 1)) as f64 / 12.0;
    let correction = 0.5;

    // A larger first sample pushes u_x above its null mean.
    let z = match alternative {
        Alternative::TwoSided => ((u_x - mean_u).abs() - correction).max(0.0) / var_u.sqrt(),
        Alternative::Greater => (u_x - mean_u - correction) / var_u.sqrt(),
        Alternative::Less => (u_x - mean_u + correction) / var_u.sqrt(),
    };

    let normal = Normal::new(0.0, 1.0).unwrap();
    let p_value = match alternative {
        Alternative::TwoSided => 2.0 * (1.0 - normal.cdf(z)),
        Alternative::Greater => 1.0 - normal.cdf(z),
        Alternative::Less => normal.cdf(z),
    }
    .clamp(0.0, 1.0);

    let effect_size = z / ((nx + ny) as f64).sqrt();
    let standard_error = var_u.sqrt();

    TestResult::with_effect_size(u, p_value, effect_size)
        .with_standard_error(standard_error)
        .with_metadata("z_score", z)
        .with_metadata("mean_u", mean_u)
        .with_metadata("var_u", var_u)
        .with_metadata("nx", nx as f64)
        .with_metadata("ny", ny as f64)
}
