use proptest::prelude::*;
use quantum::{reference_table, ExpectationVector, Observable};

fn unit() -> impl Strategy<Value = f64> {
    -1.0f64..=1.0
}

proptest! {
    /// Shifting one expectation by δ moves the energy by exactly coefficient·δ.
    #[test]
    fn energy_is_linear_in_each_term(
        row in 0usize..54,
        zi in unit(), iz in unit(), zz in unit(), xx in unit(), yy in unit(),
        obs in 0usize..5,
        delta in -0.5f64..0.5,
    ) {
        let record = &reference_table()[row];
        let obs = Observable::ALL[obs];
        let base = ExpectationVector::new(zi, iz, zz, xx, yy);
        let mut shifted = base;
        shifted.set(obs, base.get(obs) + delta);

        let change = record.energy(&shifted) - record.energy(&base);
        prop_assert!((change - record.coefficient(obs) * delta).abs() < 1e-12,
            "change = {}, expected = {}", change, record.coefficient(obs) * delta);
    }
}

#[test]
fn documentary_fields_do_not_enter_energy() {
    let mut record = reference_table()[20].clone();
    let e = ExpectationVector::new(0.3, -0.2, 0.1, 0.4, -0.6);
    let before = record.energy(&e);

    record.gate_ordering = "anything".to_string();
    record.trotter_error = 9.0;
    record.evolution_time = -1.0;

    assert_eq!(record.energy(&e), before);
}
