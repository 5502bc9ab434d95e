use quantum::{shot_estimator::sample_counts, Circuit, MpsSimulator};
use rng::ONDRng;
use std::f64::consts::FRAC_PI_2;

#[test]
fn bell_state_z_correlation() {
    let mut c = Circuit::new(2);
    c.ry(0, FRAC_PI_2).cnot(0, 1);
    let d = c.run(&MpsSimulator::new()).unwrap();

    let mut rng = ONDRng::new(b"bell");
    let counts = sample_counts(&d, &mut rng, 200);

    assert_eq!(counts[0b01], 0, "Found |01> in Bell state");
    assert_eq!(counts[0b10], 0, "Found |10> in Bell state");
    assert!(counts[0b00] > 0, "Never observed |00>, counts = {:?}", counts);
    assert!(counts[0b11] > 0, "Never observed |11>, counts = {:?}", counts);
    assert_eq!(counts.iter().sum::<usize>(), 200);
}
