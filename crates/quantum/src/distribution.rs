use crate::error::{QuantumError, QuantumResult};

/// Allowed deviation of the total probability from 1.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Measurement distribution over computational basis states.
///
/// Entry `i` is the probability of basis state `i`, where qubit 0 is the most
/// significant bit of `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    n_qubits: usize,
    probabilities: Vec<f64>,
}

impl Distribution {
    pub fn new(n_qubits: usize, probabilities: Vec<f64>) -> QuantumResult<Self> {
        let expected = 1usize << n_qubits;
        if probabilities.len() != expected {
            return Err(QuantumError::DistributionSize {
                expected,
                got: probabilities.len(),
            });
        }

        let total: f64 = probabilities.iter().sum();
        let negative = probabilities.iter().any(|p| *p < -NORMALIZATION_TOLERANCE);
        if negative || !((total - 1.0).abs() <= NORMALIZATION_TOLERANCE) {
            return Err(QuantumError::NotNormalized { total });
        }

        Ok(Self {
            n_qubits,
            probabilities,
        })
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn probability(&self, index: usize) -> f64 {
        self.probabilities.get(index).copied().unwrap_or(0.0)
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// (basis index, probability) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.probabilities.iter().copied().enumerate()
    }

    /// Bit-string for `index`, qubit 0 first.
    pub fn label(&self, index: usize) -> String {
        basis_label(index, self.n_qubits)
    }

    /// (label, probability) pairs, the shape a measurement report takes.
    pub fn labelled(&self) -> Vec<(String, f64)> {
        self.iter().map(|(i, p)| (self.label(i), p)).collect()
    }

    /// Most probable basis state. The lowest index wins a tie.
    pub fn most_likely(&self) -> (usize, f64) {
        let mut best = (0, f64::NEG_INFINITY);
        for (i, p) in self.iter() {
            if p > best.1 {
                best = (i, p);
            }
        }
        best
    }
}

pub fn basis_label(index: usize, n_qubits: usize) -> String {
    (0..n_qubits)
        .map(|q| {
            if (index >> (n_qubits - 1 - q)) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}
