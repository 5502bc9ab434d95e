//! Two-qubit Pauli expectations reconstructed from measurement statistics.
//!
//! ⟨P⟩ = Σ_s sign(P, s) · Pr(s), where `sign` is the ±1 eigenvalue of basis
//! state `s` under `P` once the register has been rotated into the basis that
//! diagonalises `P`.

use std::fmt;

use crate::distribution::Distribution;
use crate::error::{QuantumError, QuantumResult};

/// Measurement basis appended to the ansatz before readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CircuitVariant {
    ZBasis,
    XBasis,
    YBasis,
}

impl CircuitVariant {
    pub const ALL: [CircuitVariant; 3] = [
        CircuitVariant::ZBasis,
        CircuitVariant::XBasis,
        CircuitVariant::YBasis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CircuitVariant::ZBasis => "Z-BASIS",
            CircuitVariant::XBasis => "X-BASIS",
            CircuitVariant::YBasis => "Y-BASIS",
        }
    }
}

impl fmt::Display for CircuitVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Observable {
    ZI,
    IZ,
    ZZ,
    XX,
    YY,
}

// Rows follow `Observable as usize`, columns the basis index 00, 01, 10, 11.
// XX and YY share the parity row: after the basis rotation their eigenvalue
// is the Z⊗Z parity of the rotated state.
const SIGNS: [[f64; 4]; 5] = [
    [1.0, 1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0, 1.0],
];

impl Observable {
    pub const ALL: [Observable; 5] = [
        Observable::ZI,
        Observable::IZ,
        Observable::ZZ,
        Observable::XX,
        Observable::YY,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Observable::ZI => "ZI",
            Observable::IZ => "IZ",
            Observable::ZZ => "ZZ",
            Observable::XX => "XX",
            Observable::YY => "YY",
        }
    }

    /// Circuit whose Z readout carries this observable.
    pub fn variant(self) -> CircuitVariant {
        match self {
            Observable::ZI | Observable::IZ | Observable::ZZ => CircuitVariant::ZBasis,
            Observable::XX => CircuitVariant::XBasis,
            Observable::YY => CircuitVariant::YBasis,
        }
    }

    /// Eigenvalue of two-qubit basis state `index` (qubit 0 = high bit).
    #[inline]
    pub fn sign(self, index: usize) -> f64 {
        SIGNS[self as usize][index]
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ⟨ZI⟩, ⟨IZ⟩, ⟨ZZ⟩, ⟨XX⟩, ⟨YY⟩ for one ansatz angle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpectationVector {
    values: [f64; 5],
}

impl ExpectationVector {
    pub fn new(zi: f64, iz: f64, zz: f64, xx: f64, yy: f64) -> Self {
        Self {
            values: [zi, iz, zz, xx, yy],
        }
    }

    pub fn get(&self, obs: Observable) -> f64 {
        self.values[obs as usize]
    }

    pub fn set(&mut self, obs: Observable, value: f64) {
        self.values[obs as usize] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Observable, f64)> + '_ {
        Observable::ALL.iter().map(move |&o| (o, self.get(o)))
    }

    /// Unweighted sum of all five expectations.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// ⟨obs⟩ from a distribution already rotated into `obs`'s basis.
///
/// The sign tables cover two qubits; any other width is rejected.
pub fn expectation(obs: Observable, dist: &Distribution) -> QuantumResult<f64> {
    let got = dist.len();
    if got != SIGNS[0].len() {
        return Err(QuantumError::DistributionSize {
            expected: SIGNS[0].len(),
            got,
        });
    }
    Ok(dist.iter().map(|(s, p)| obs.sign(s) * p).sum())
}

/// Fills the expectations read out by one circuit variant.
pub fn accumulate(
    out: &mut ExpectationVector,
    variant: CircuitVariant,
    dist: &Distribution,
) -> QuantumResult<()> {
    for obs in Observable::ALL.iter().filter(|o| o.variant() == variant) {
        out.set(*obs, expectation(*obs, dist)?);
    }
    Ok(())
}

/// All five expectations from the Z-, X- and Y-basis distributions.
pub fn estimate(
    z: &Distribution,
    x: &Distribution,
    y: &Distribution,
) -> QuantumResult<ExpectationVector> {
    let mut out = ExpectationVector::default();
    accumulate(&mut out, CircuitVariant::ZBasis, z)?;
    accumulate(&mut out, CircuitVariant::XBasis, x)?;
    accumulate(&mut out, CircuitVariant::YBasis, y)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(p: [f64; 4]) -> Distribution {
        Distribution::new(2, p.to_vec()).unwrap()
    }

    #[test]
    fn sign_tables() {
        assert_eq!(Observable::ZI.sign(0b10), -1.0);
        assert_eq!(Observable::ZI.sign(0b01), 1.0);
        assert_eq!(Observable::IZ.sign(0b01), -1.0);
        assert_eq!(Observable::IZ.sign(0b10), 1.0);
        for s in 0..4 {
            assert_eq!(Observable::XX.sign(s), Observable::ZZ.sign(s));
            assert_eq!(Observable::YY.sign(s), Observable::ZZ.sign(s));
        }
    }

    #[test]
    fn basis_state_expectations() {
        let z = dist([0.0, 0.0, 1.0, 0.0]);
        let e = estimate(&z, &z, &z).unwrap();
        assert_eq!(e.get(Observable::ZI), -1.0);
        assert_eq!(e.get(Observable::IZ), 1.0);
        assert_eq!(e.get(Observable::ZZ), -1.0);
        assert_eq!(e.get(Observable::XX), -1.0);
        assert_eq!(e.get(Observable::YY), -1.0);
        assert_eq!(e.sum(), -3.0);
    }

    #[test]
    fn each_variant_fills_its_own_entries() {
        let z = dist([1.0, 0.0, 0.0, 0.0]);
        let x = dist([0.0, 1.0, 0.0, 0.0]);
        let y = dist([0.5, 0.0, 0.0, 0.5]);
        let e = estimate(&z, &x, &y).unwrap();
        assert_eq!(e, ExpectationVector::new(1.0, 1.0, 1.0, -1.0, 1.0));
    }

    #[test]
    fn mixed_distribution() {
        let d = dist([0.1, 0.2, 0.3, 0.4]);
        assert!((expectation(Observable::ZI, &d).unwrap() - (0.3 - 0.7)).abs() < 1e-12);
        assert!((expectation(Observable::IZ, &d).unwrap() - (0.4 - 0.6)).abs() < 1e-12);
        assert!((expectation(Observable::ZZ, &d).unwrap() - (0.5 - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn wider_registers_are_rejected() {
        let d = Distribution::new(3, vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(
            expectation(Observable::ZZ, &d),
            Err(QuantumError::DistributionSize {
                expected: 4,
                got: 8
            })
        );
        let z = dist([1.0, 0.0, 0.0, 0.0]);
        assert!(estimate(&z, &d, &z).is_err());

        let mut out = ExpectationVector::default();
        assert!(accumulate(&mut out, CircuitVariant::ZBasis, &d).is_err());
        assert_eq!(out, ExpectationVector::default());
    }

    #[test]
    fn variant_routing() {
        assert_eq!(Observable::ZZ.variant(), CircuitVariant::ZBasis);
        assert_eq!(Observable::XX.variant(), CircuitVariant::XBasis);
        assert_eq!(Observable::YY.variant(), CircuitVariant::YBasis);
        assert_eq!(CircuitVariant::YBasis.to_string(), "Y-BASIS");
    }
}
