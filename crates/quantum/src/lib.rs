pub mod circuit;
pub mod distribution;
pub mod error;
pub mod gates;
pub mod hamiltonian;
pub mod observables;
pub mod register;
pub mod shot_estimator;

pub use circuit::{Circuit, Gate};
pub use distribution::Distribution;
pub use error::{QuantumError, QuantumResult};
pub use hamiltonian::{reference_table, HamiltonianRecord};
pub use observables::{CircuitVariant, ExpectationVector, Observable};
pub use register::{MpsRegister, MpsSimulator, QubitRegister, Simulator};
