/// Bond truncation policy applied after every two-site SVD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Truncation {
    pub max_bond: usize,
    /// singular values at or below this are dropped
    pub cutoff: f64,
}

impl Truncation {
    /// Policy that keeps every non-negligible singular value of a small register.
    pub fn exact(n_qubits: usize) -> Self {
        let half = n_qubits / 2;
        Self {
            max_bond: 1usize << half.min(31),
            cutoff: 1e-14,
        }
    }

    /// Number of singular values to keep from a descending spectrum.
    /// Never less than one, so a bond cannot collapse to zero width.
    pub fn kept(&self, singular_values: &[f64]) -> usize {
        let kept = singular_values
            .iter()
            .take(self.max_bond)
            .take_while(|sv| **sv > self.cutoff)
            .count();
        kept.max(1)
    }
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            max_bond: 64,
            cutoff: 1e-12,
        }
    }
}
