//! Variational scan of the H2 ground-state energy over bond distance.
//!
//! For every tabulated distance the two-qubit ansatz is swept over a grid of
//! angles; the five Pauli expectations at each angle are combined with that
//! distance's coefficients, and the lowest energy over all distances gives the
//! equilibrium bond length.

pub mod ansatz;
pub mod config;
pub mod error;
pub mod output;
pub mod plot;
pub mod scan;
pub mod sweep;

pub use config::{Objective, Sampling, ScanConfig, SweepSpec, MAX_SWEEP_SAMPLES};
pub use error::{VqeError, VqeResult};
pub use scan::{scan_distances, ResultPoint, ScanReport};
pub use sweep::{minimize_angle, AngleEvaluation, AngleScan, EnergyPoint, Evaluator};
