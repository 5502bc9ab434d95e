//! Error types for the scan pipeline.

use quantum::{CircuitVariant, QuantumError};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VqeError {
    /// Sweep or table rejected before any simulation ran.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The simulator failed on one circuit of one evaluation.
    #[error("simulation failed at R = {distance} Å, theta = {angle}, {variant}: {source}")]
    Simulator {
        distance: f64,
        angle: f64,
        variant: CircuitVariant,
        #[source]
        source: QuantumError,
    },

    /// A plot could not be drawn or written.
    #[error("failed to render {path}: {message}")]
    Render { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VqeError {
    pub fn config(msg: impl Into<String>) -> Self {
        VqeError::Config(msg.into())
    }
}

/// Result type for scan operations.
pub type VqeResult<T> = Result<T, VqeError>;
