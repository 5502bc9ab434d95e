use std::f64::consts::TAU;

use quantum::hamiltonian::{HamiltonianRecord, REFERENCE_PLOT_INDEX};

use crate::error::{VqeError, VqeResult};

/// Largest angle grid a sweep may request.
pub const MAX_SWEEP_SAMPLES: usize = 1 << 20;

/// Angle grid `start + i·step` for every `i` that stays below `stop`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepSpec {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for SweepSpec {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: TAU,
            step: 0.1,
        }
    }
}

impl SweepSpec {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    pub fn validate(&self) -> VqeResult<()> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(VqeError::config(format!(
                "sweep bounds must be finite, got [{}, {})",
                self.start, self.stop
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(VqeError::config(format!(
                "sweep step must be positive, got {}",
                self.step
            )));
        }
        if self.stop <= self.start {
            return Err(VqeError::config(format!(
                "sweep [{}, {}) is empty",
                self.start, self.stop
            )));
        }
        if self.start + self.step == self.start {
            return Err(VqeError::config(format!(
                "sweep step {} does not advance from {}",
                self.step, self.start
            )));
        }
        let samples = ((self.stop - self.start) / self.step).ceil();
        if !samples.is_finite() || samples > MAX_SWEEP_SAMPLES as f64 {
            return Err(VqeError::config(format!(
                "sweep [{}, {}) at step {} needs more than {} samples",
                self.start, self.stop, self.step, MAX_SWEEP_SAMPLES
            )));
        }
        Ok(())
    }

    /// Number of samples; zero for a spec that fails validation.
    pub fn len(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut n = ((self.stop - self.start) / self.step).ceil().max(0.0) as usize;
        // ceil can land one past or short of the last sample on rounding
        while n > 0 && self.angle(n - 1) >= self.stop {
            n -= 1;
        }
        while self.angle(n) < self.stop {
            n += 1;
        }
        n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn angle(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    pub fn angles(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.angle(i)).collect()
    }
}

/// Quantity the angle sweep minimizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Objective {
    /// Hamiltonian energy of the record.
    #[default]
    Energy,
    /// ⟨ZI⟩+⟨IZ⟩+⟨ZZ⟩+⟨XX⟩+⟨YY⟩, coefficients not applied.
    ExpectationSum,
}

impl Objective {
    /// Column and axis name for values of this objective.
    pub fn label(self) -> &'static str {
        match self {
            Objective::Energy => "energy",
            Objective::ExpectationSum => "expectation_sum",
        }
    }
}

/// How the measurement distributions are obtained.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Sampling {
    /// Exact simulator probabilities.
    #[default]
    Exact,
    /// Finite-shot estimate, seeded per evaluation from `seed`.
    Shots { shots: usize, seed: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanConfig {
    pub sweep: SweepSpec,
    pub objective: Objective,
    /// Record the most probable Z-basis state at every angle.
    pub probe_most_likely: bool,
    pub sampling: Sampling,
    /// Record whose full angle curve is kept for plotting.
    pub plot_index: Option<usize>,
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sweep: SweepSpec::default(),
            objective: Objective::Energy,
            probe_most_likely: false,
            sampling: Sampling::Exact,
            plot_index: Some(REFERENCE_PLOT_INDEX),
            parallel: true,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn with_sweep(mut self, sweep: SweepSpec) -> Self {
        self.sweep = sweep;
        self
    }

    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    #[must_use]
    pub fn with_most_likely(mut self, probe: bool) -> Self {
        self.probe_most_likely = probe;
        self
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    #[must_use]
    pub fn with_plot_index(mut self, index: Option<usize>) -> Self {
        self.plot_index = index;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks everything that does not depend on the coefficient table.
    pub fn validate(&self) -> VqeResult<()> {
        self.sweep.validate()?;
        if let Sampling::Shots { shots: 0, .. } = self.sampling {
            return Err(VqeError::config("shot sampling needs at least one shot"));
        }
        Ok(())
    }

    /// Full pre-flight check against the table the scan will run over.
    pub fn validate_for(&self, table: &[HamiltonianRecord]) -> VqeResult<()> {
        self.validate()?;
        validate_table(table)?;
        if let Some(index) = self.plot_index {
            if index >= table.len() {
                return Err(VqeError::config(format!(
                    "plot index {} outside a table of {} records",
                    index,
                    table.len()
                )));
            }
        }
        Ok(())
    }
}

/// Non-empty, finite, strictly ascending distances.
pub fn validate_table(table: &[HamiltonianRecord]) -> VqeResult<()> {
    if table.is_empty() {
        return Err(VqeError::config("coefficient table is empty"));
    }
    if let Some(bad) = table.iter().find(|r| !r.distance.is_finite()) {
        return Err(VqeError::config(format!(
            "non-finite distance {} in coefficient table",
            bad.distance
        )));
    }
    for pair in table.windows(2) {
        if pair[1].distance <= pair[0].distance {
            return Err(VqeError::config(format!(
                "distances must be strictly ascending, got {} after {}",
                pair[1].distance, pair[0].distance
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum::reference_table;

    #[test]
    fn default_sweep_has_63_samples() {
        let sweep = SweepSpec::default();
        assert_eq!(sweep.len(), 63);
        let angles = sweep.angles();
        assert_eq!(angles[0], 0.0);
        assert!((angles[62] - 6.2).abs() < 1e-12);
        assert!(angles.iter().all(|a| *a < TAU));
    }

    #[test]
    fn sweep_excludes_stop() {
        assert_eq!(SweepSpec::new(0.0, 1.0, 0.25).angles(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(SweepSpec::new(0.0, 1.0, 2.0).len(), 1);
    }

    #[test]
    fn rejects_bad_sweeps() {
        for sweep in [
            SweepSpec::new(0.0, 1.0, 0.0),
            SweepSpec::new(0.0, 1.0, -0.1),
            SweepSpec::new(0.0, 1.0, f64::NAN),
            SweepSpec::new(1.0, 1.0, 0.1),
            SweepSpec::new(0.0, f64::INFINITY, 0.1),
            SweepSpec::new(0.0, 1.0, 1e-300),
            SweepSpec::new(0.0, f64::MAX, f64::MIN_POSITIVE),
            SweepSpec::new(1e20, 1e21, 1.0),
            SweepSpec::new(0.0, 1.0, 1.0 / (MAX_SWEEP_SAMPLES as f64 * 2.0)),
        ] {
            assert!(
                matches!(sweep.validate(), Err(VqeError::Config(_))),
                "{:?}",
                sweep
            );
            assert_eq!(sweep.len(), 0);
        }
    }

    #[test]
    fn largest_grid_is_accepted() {
        let sweep = SweepSpec::new(0.0, MAX_SWEEP_SAMPLES as f64, 1.0);
        assert!(sweep.validate().is_ok());
        assert_eq!(sweep.len(), MAX_SWEEP_SAMPLES);
    }

    #[test]
    fn objective_labels() {
        assert_eq!(Objective::Energy.label(), "energy");
        assert_eq!(Objective::ExpectationSum.label(), "expectation_sum");
    }

    #[test]
    fn rejects_zero_shots() {
        let cfg = ScanConfig::default().with_sampling(Sampling::Shots {
            shots: 0,
            seed: "s".into(),
        });
        assert!(matches!(cfg.validate(), Err(VqeError::Config(_))));
    }

    #[test]
    fn table_checks() {
        assert!(matches!(validate_table(&[]), Err(VqeError::Config(_))));

        let mut table = reference_table();
        assert!(validate_table(&table).is_ok());
        table.swap(3, 4);
        assert!(matches!(validate_table(&table), Err(VqeError::Config(_))));
    }

    #[test]
    fn plot_index_must_exist() {
        let table = reference_table();
        let cfg = ScanConfig::default().with_plot_index(Some(table.len()));
        assert!(matches!(cfg.validate_for(&table), Err(VqeError::Config(_))));
        assert!(ScanConfig::default().validate_for(&table).is_ok());
        assert!(ScanConfig::default()
            .with_plot_index(None)
            .validate_for(&table[..1])
            .is_ok());
    }
}
