//! Error types for the quantum crate.

use thiserror::Error;

/// Failures raised while building or reading out a simulated register.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuantumError {
    /// A gate names a qubit the register does not have.
    #[error("qubit {qubit} out of range for a {n_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, n_qubits: usize },

    /// Control and target of a two-qubit gate coincide.
    #[error("controlled gate uses qubit {0} as both control and target")]
    SameQubit(usize),

    /// The MPS backend only applies two-qubit gates to neighbouring sites.
    #[error("qubits {control} and {target} are not adjacent")]
    NonAdjacent { control: usize, target: usize },

    #[error("{gate} angle must be finite, got {angle}")]
    InvalidAngle { gate: &'static str, angle: f64 },

    #[error("distribution sums to {total}, expected 1")]
    NotNormalized { total: f64 },

    #[error("distribution has {got} entries, expected {expected}")]
    DistributionSize { expected: usize, got: usize },

    /// A circuit gate failed; `index` is its position in the gate list.
    #[error("gate {index} ({gate}): {source}")]
    Gate {
        index: usize,
        gate: String,
        #[source]
        source: Box<QuantumError>,
    },
}

/// Result type for register and estimator operations.
pub type QuantumResult<T> = Result<T, QuantumError>;
