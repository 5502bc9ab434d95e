//! Fixed two-qubit ansatz for the minimal-basis H2 encoding, and its
//! measurement-basis variants.

use std::f64::consts::{FRAC_PI_2, PI};

use quantum::{Circuit, CircuitVariant};

pub const N_QUBITS: usize = 2;

/// Prepares the reference state, then entangles the occupied/virtual pair
/// with a single Z rotation of `theta` between two CNOTs (control q1,
/// target q0).
pub fn base_circuit(theta: f64) -> Circuit {
    let mut c = Circuit::new(N_QUBITS);
    c.rx(0, PI)
        .ry(1, FRAC_PI_2)
        .rx(0, -FRAC_PI_2)
        .cnot(1, 0)
        .rz(0, theta)
        .cnot(1, 0)
        .rx(0, FRAC_PI_2)
        .ry(1, -FRAC_PI_2);
    c
}

/// Base circuit followed by the rotation that maps `variant`'s basis onto Z.
pub fn circuit(theta: f64, variant: CircuitVariant) -> Circuit {
    let mut c = base_circuit(theta);
    match variant {
        CircuitVariant::ZBasis => {}
        CircuitVariant::XBasis => {
            c.ry(0, -FRAC_PI_2).ry(1, -FRAC_PI_2);
        }
        CircuitVariant::YBasis => {
            c.rx(0, FRAC_PI_2).rx(1, FRAC_PI_2);
        }
    }
    c
}

/// The three circuits one angle evaluation runs.
pub fn circuits(theta: f64) -> [(CircuitVariant, Circuit); 3] {
    CircuitVariant::ALL.map(|v| (v, circuit(theta, v)))
}
