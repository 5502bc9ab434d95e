use crate::distribution::Distribution;
use crate::error::QuantumResult;
use rng::ONDRng;

/// Histogram of `shots` outcomes drawn from `dist`.
pub fn sample_counts(dist: &Distribution, rng: &mut ONDRng, shots: usize) -> Vec<usize> {
    let mut counts = vec![0usize; dist.len()];
    for _ in 0..shots {
        if let Some(idx) = rng.next_weighted(dist.probabilities(), b"SHOT") {
            counts[idx] += 1;
        }
    }
    counts
}

/// Empirical distribution of `shots` measurements of `dist`.
///
/// With zero shots the exact distribution is returned unchanged.
pub fn sample_distribution(
    dist: &Distribution,
    rng: &mut ONDRng,
    shots: usize,
) -> QuantumResult<Distribution> {
    if shots == 0 {
        return Ok(dist.clone());
    }

    let counts = sample_counts(dist, rng, shots);
    let probabilities = counts
        .into_iter()
        .map(|c| c as f64 / shots as f64)
        .collect();
    Distribution::new(dist.n_qubits(), probabilities)
}
