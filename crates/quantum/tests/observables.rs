use quantum::{
    observables::{estimate, expectation},
    Circuit, MpsSimulator, Observable,
};
use std::f64::consts::FRAC_PI_2;

fn bell() -> Circuit {
    let mut c = Circuit::new(2);
    c.ry(0, FRAC_PI_2).cnot(0, 1);
    c
}

#[test]
fn bell_pauli_expectations() {
    let sim = MpsSimulator::new();

    let z = bell().run(&sim).unwrap();

    let mut xc = bell();
    xc.ry(0, -FRAC_PI_2).ry(1, -FRAC_PI_2);
    let x = xc.run(&sim).unwrap();

    let mut yc = bell();
    yc.rx(0, FRAC_PI_2).rx(1, FRAC_PI_2);
    let y = yc.run(&sim).unwrap();

    let e = estimate(&z, &x, &y).unwrap();

    assert!(e.get(Observable::ZI).abs() < 1e-12, "ZI = {}", e.get(Observable::ZI));
    assert!(e.get(Observable::IZ).abs() < 1e-12, "IZ = {}", e.get(Observable::IZ));
    assert!((e.get(Observable::ZZ) - 1.0).abs() < 1e-12, "ZZ = {}", e.get(Observable::ZZ));
    assert!((e.get(Observable::XX) - 1.0).abs() < 1e-12, "XX = {}", e.get(Observable::XX));
    assert!((e.get(Observable::YY) + 1.0).abs() < 1e-12, "YY = {}", e.get(Observable::YY));
}

#[test]
fn single_qubit_flip_signs() {
    let mut c = Circuit::new(2);
    c.rx(1, std::f64::consts::PI);
    let d = c.run(&MpsSimulator::new()).unwrap();

    assert_eq!(d.label(d.most_likely().0), "01");
    assert!((expectation(Observable::ZI, &d).unwrap() - 1.0).abs() < 1e-12);
    assert!((expectation(Observable::IZ, &d).unwrap() + 1.0).abs() < 1e-12);
    assert!((expectation(Observable::ZZ, &d).unwrap() + 1.0).abs() < 1e-12);
}
