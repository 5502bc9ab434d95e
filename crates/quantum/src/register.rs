//! The qubit-simulator surface the estimator consumes, and an MPS-backed
//! implementation of it.

use crate::distribution::Distribution;
use crate::error::{QuantumError, QuantumResult};
use crate::gates::{cnot, cnot_reversed, rx, ry, rz, C64};
use tn::{mps::MPS, truncation::Truncation};

/// A register of qubits that gates are applied to in place.
pub trait QubitRegister {
    fn n_qubits(&self) -> usize;

    fn rotate_x(&mut self, qubit: usize, angle: f64) -> QuantumResult<()>;
    fn rotate_y(&mut self, qubit: usize, angle: f64) -> QuantumResult<()>;
    fn rotate_z(&mut self, qubit: usize, angle: f64) -> QuantumResult<()>;

    fn controlled_not(&mut self, control: usize, target: usize) -> QuantumResult<()>;

    /// Measurement distribution of the current state in the computational basis.
    fn final_distribution(&self) -> QuantumResult<Distribution>;
}

/// Allocates registers. Shared across worker threads during a scan.
pub trait Simulator: Sync {
    type Register: QubitRegister;

    /// `n_qubits` qubits, all in |0⟩.
    fn new_register(&self, n_qubits: usize) -> Self::Register;
}

/// Deterministic matrix-product-state simulator.
#[derive(Clone, Copy, Debug, Default)]
pub struct MpsSimulator {
    trunc: Option<Truncation>,
}

impl MpsSimulator {
    /// Simulator that keeps every bond it needs; exact for small registers.
    pub fn new() -> Self {
        Self { trunc: None }
    }

    #[must_use]
    pub fn with_truncation(mut self, trunc: Truncation) -> Self {
        self.trunc = Some(trunc);
        self
    }
}

impl Simulator for MpsSimulator {
    type Register = MpsRegister;

    fn new_register(&self, n_qubits: usize) -> MpsRegister {
        MpsRegister {
            psi: MPS::new_zero(n_qubits),
            trunc: self.trunc.unwrap_or_else(|| Truncation::exact(n_qubits)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MpsRegister {
    psi: MPS,
    trunc: Truncation,
}

impl MpsRegister {
    pub fn state(&self) -> &MPS {
        &self.psi
    }

    fn check_qubit(&self, qubit: usize) -> QuantumResult<()> {
        let n_qubits = self.psi.len();
        if qubit >= n_qubits {
            return Err(QuantumError::QubitOutOfRange { qubit, n_qubits });
        }
        Ok(())
    }

    fn rotate(
        &mut self,
        gate: &'static str,
        qubit: usize,
        angle: f64,
        u: fn(f64) -> [[C64; 2]; 2],
    ) -> QuantumResult<()> {
        self.check_qubit(qubit)?;
        if !angle.is_finite() {
            return Err(QuantumError::InvalidAngle { gate, angle });
        }
        self.psi.apply_1q(qubit, u(angle));
        Ok(())
    }
}

impl QubitRegister for MpsRegister {
    fn n_qubits(&self) -> usize {
        self.psi.len()
    }

    fn rotate_x(&mut self, qubit: usize, angle: f64) -> QuantumResult<()> {
        self.rotate("rx", qubit, angle, rx)
    }

    fn rotate_y(&mut self, qubit: usize, angle: f64) -> QuantumResult<()> {
        self.rotate("ry", qubit, angle, ry)
    }

    fn rotate_z(&mut self, qubit: usize, angle: f64) -> QuantumResult<()> {
        self.rotate("rz", qubit, angle, rz)
    }

    fn controlled_not(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QuantumError::SameQubit(control));
        }

        if target == control + 1 {
            self.psi.apply_2q_svd(control, cnot(), self.trunc);
        } else if control == target + 1 {
            self.psi.apply_2q_svd(target, cnot_reversed(), self.trunc);
        } else {
            return Err(QuantumError::NonAdjacent { control, target });
        }
        Ok(())
    }

    fn final_distribution(&self) -> QuantumResult<Distribution> {
        let probabilities = self
            .psi
            .amplitudes()
            .iter()
            .map(|a| a.norm_sqr())
            .collect();
        Distribution::new(self.psi.len(), probabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::hadamard;

    #[test]
    fn fresh_register_is_all_zero() {
        let reg = MpsSimulator::new().new_register(2);
        let d = reg.final_distribution().unwrap();
        assert_eq!(d.probabilities(), &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn reversed_cnot_flips_qubit_zero() {
        let mut reg = MpsSimulator::new().new_register(2);
        reg.rotate_x(1, std::f64::consts::PI).unwrap();
        reg.controlled_not(1, 0).unwrap();
        let d = reg.final_distribution().unwrap();
        assert!((d.probability(0b11) - 1.0).abs() < 1e-12, "{:?}", d);
    }

    #[test]
    fn bell_pair_from_hadamard() {
        let mut reg = MpsSimulator::new().new_register(2);
        reg.psi.apply_1q(0, hadamard());
        reg.controlled_not(0, 1).unwrap();
        let d = reg.final_distribution().unwrap();
        assert!((d.probability(0b00) - 0.5).abs() < 1e-12);
        assert!((d.probability(0b11) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn loose_truncation_matches_exact() {
        let exact = MpsSimulator::new();
        let loose = MpsSimulator::new().with_truncation(Truncation::default());
        for sim in [exact, loose] {
            let mut reg = sim.new_register(2);
            reg.rotate_y(0, 0.7).unwrap();
            reg.controlled_not(0, 1).unwrap();
            reg.rotate_x(1, 1.3).unwrap();
            assert_eq!(reg.state().max_bond(), 2);

            let d = reg.final_distribution().unwrap();
            let c = (0.35f64).cos().powi(2);
            assert!((d.probability(0b00) + d.probability(0b01) - c).abs() < 1e-12, "{:?}", d);
            assert!((d.total() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn bond_one_truncation_drops_entanglement() {
        let sim = MpsSimulator::new().with_truncation(Truncation {
            max_bond: 1,
            cutoff: 1e-12,
        });
        let mut reg = sim.new_register(2);
        reg.psi.apply_1q(0, hadamard());
        reg.controlled_not(0, 1).unwrap();
        assert_eq!(reg.state().max_bond(), 1);

        // half of the Bell pair's weight is discarded
        match reg.final_distribution() {
            Err(QuantumError::NotNormalized { total }) => {
                assert!((total - 0.5).abs() < 1e-12, "total = {}", total)
            }
            other => panic!("expected a normalization error, got {:?}", other),
        }
    }

    #[test]
    fn gate_argument_errors() {
        let mut reg = MpsSimulator::new().new_register(3);
        assert_eq!(
            reg.rotate_y(3, 0.1),
            Err(QuantumError::QubitOutOfRange {
                qubit: 3,
                n_qubits: 3
            })
        );
        assert_eq!(reg.controlled_not(1, 1), Err(QuantumError::SameQubit(1)));
        assert_eq!(
            reg.controlled_not(0, 2),
            Err(QuantumError::NonAdjacent {
                control: 0,
                target: 2
            })
        );
        assert!(matches!(
            reg.rotate_z(0, f64::NAN),
            Err(QuantumError::InvalidAngle { gate: "rz", .. })
        ));
    }
}
