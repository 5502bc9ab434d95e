use proptest::prelude::*;
use quantum::{
    observables::estimate, reference_table, CircuitVariant, MpsSimulator, Observable,
};
use std::f64::consts::TAU;
use vqe::ansatz;

fn expectations_at(theta: f64) -> quantum::ExpectationVector {
    let sim = MpsSimulator::new();
    let [z, x, y] = ansatz::circuits(theta).map(|(_, c)| c.run(&sim).unwrap());
    estimate(&z, &x, &y).unwrap()
}

fn energy_at(row: usize, theta: f64) -> f64 {
    reference_table()[row].energy(&expectations_at(theta))
}

#[test]
fn expectations_follow_the_excitation_angle() {
    for theta in [0.0, 0.2, 0.5, 1.0, 2.5, 4.0, 6.0] {
        let e = expectations_at(theta);
        let (c, s) = (theta.cos(), theta.sin());
        assert!((e.get(Observable::ZI) + c).abs() < 1e-9, "theta = {}, e = {:?}", theta, e);
        assert!((e.get(Observable::IZ) - c).abs() < 1e-9, "theta = {}, e = {:?}", theta, e);
        assert!((e.get(Observable::ZZ) + 1.0).abs() < 1e-9, "theta = {}, e = {:?}", theta, e);
        assert!((e.get(Observable::XX) + s).abs() < 1e-9, "theta = {}, e = {:?}", theta, e);
        assert!((e.get(Observable::YY) + s).abs() < 1e-9, "theta = {}, e = {:?}", theta, e);
    }
}

#[test]
fn base_circuit_at_zero_is_reference_state() {
    let sim = MpsSimulator::new();
    let d = ansatz::base_circuit(0.0).run(&sim).unwrap();
    let (index, p) = d.most_likely();
    assert_eq!(d.label(index), "10");
    assert!((p - 1.0).abs() < 1e-12, "p = {}", p);
}

#[test]
fn zero_angle_is_bit_reproducible() {
    let first = ansatz::base_circuit(0.0).run(&MpsSimulator::new()).unwrap();
    for _ in 0..5 {
        let again = ansatz::base_circuit(0.0).run(&MpsSimulator::new()).unwrap();
        let same = first
            .probabilities()
            .iter()
            .zip(again.probabilities())
            .all(|(a, b)| a.to_bits() == b.to_bits());
        assert!(same, "{:?} vs {:?}", first, again);
    }
}

proptest! {
    #[test]
    fn every_variant_is_normalized(theta in -20.0f64..20.0) {
        let sim = MpsSimulator::new();
        for variant in CircuitVariant::ALL {
            let d = ansatz::circuit(theta, variant).run(&sim).unwrap();
            prop_assert!((d.total() - 1.0).abs() < 1e-9, "{} total = {}", variant, d.total());
        }
    }

    #[test]
    fn expectations_are_bounded(theta in -20.0f64..20.0) {
        for (obs, v) in expectations_at(theta).iter() {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&v), "{} = {}", obs, v);
        }
    }

    #[test]
    fn energy_is_periodic(row in 0usize..54, theta in 0.0f64..TAU) {
        let a = energy_at(row, theta);
        let b = energy_at(row, theta + TAU);
        prop_assert!((a - b).abs() < 1e-6, "E({}) = {}, E(+2π) = {}", theta, a, b);
    }
}
