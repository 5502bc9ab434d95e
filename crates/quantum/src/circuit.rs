use std::fmt;

use crate::distribution::Distribution;
use crate::error::{QuantumError, QuantumResult};
use crate::register::{QubitRegister, Simulator};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    Rx { qubit: usize, angle: f64 },
    Ry { qubit: usize, angle: f64 },
    Rz { qubit: usize, angle: f64 },
    Cnot { control: usize, target: usize },
}

impl Gate {
    pub fn apply<R: QubitRegister>(&self, reg: &mut R) -> QuantumResult<()> {
        match *self {
            Gate::Rx { qubit, angle } => reg.rotate_x(qubit, angle),
            Gate::Ry { qubit, angle } => reg.rotate_y(qubit, angle),
            Gate::Rz { qubit, angle } => reg.rotate_z(qubit, angle),
            Gate::Cnot { control, target } => reg.controlled_not(control, target),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rx { qubit, angle } => write!(f, "rx({angle}) q{qubit}"),
            Gate::Ry { qubit, angle } => write!(f, "ry({angle}) q{qubit}"),
            Gate::Rz { qubit, angle } => write!(f, "rz({angle}) q{qubit}"),
            Gate::Cnot { control, target } => write!(f, "cx q{control}, q{target}"),
        }
    }
}

/// Ordered gate list over a fixed-width register starting in |0…0⟩.
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    n_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            gates: Vec::new(),
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn rx(&mut self, qubit: usize, angle: f64) -> &mut Self {
        self.gates.push(Gate::Rx { qubit, angle });
        self
    }

    pub fn ry(&mut self, qubit: usize, angle: f64) -> &mut Self {
        self.gates.push(Gate::Ry { qubit, angle });
        self
    }

    pub fn rz(&mut self, qubit: usize, angle: f64) -> &mut Self {
        self.gates.push(Gate::Rz { qubit, angle });
        self
    }

    pub fn cnot(&mut self, control: usize, target: usize) -> &mut Self {
        self.gates.push(Gate::Cnot { control, target });
        self
    }

    /// Applies every gate to a fresh register and returns its distribution.
    pub fn run<S: Simulator>(&self, sim: &S) -> QuantumResult<Distribution> {
        let mut reg = sim.new_register(self.n_qubits);
        for (index, gate) in self.gates.iter().enumerate() {
            gate.apply(&mut reg).map_err(|e| QuantumError::Gate {
                index,
                gate: gate.to_string(),
                source: Box::new(e),
            })?;
        }
        reg.final_distribution()
    }
}
