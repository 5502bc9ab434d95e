//! Brute-force angle sweep for a single Hamiltonian record.

use quantum::{
    observables::accumulate, shot_estimator::sample_distribution, CircuitVariant, Distribution,
    ExpectationVector, HamiltonianRecord, Simulator,
};
use rayon::prelude::*;
use rng::ONDRng;
use tracing::debug;

use crate::ansatz;
use crate::config::{Objective, Sampling, ScanConfig};
use crate::error::{VqeError, VqeResult};

/// One sample of an energy-vs-angle curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyPoint {
    pub angle: f64,
    /// Objective value at `angle`; the expectation sum under
    /// [`Objective::ExpectationSum`].
    pub energy: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MostLikely {
    pub label: String,
    pub probability: f64,
}

/// Everything computed at one angle.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleEvaluation {
    pub angle: f64,
    pub expectations: ExpectationVector,
    /// Hamiltonian energy, whatever the objective.
    pub energy: f64,
    /// Value the sweep minimizes.
    pub value: f64,
    pub most_likely: Option<MostLikely>,
}

/// Sweep result for one record.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleScan {
    pub distance: f64,
    pub evaluations: Vec<AngleEvaluation>,
    pub min_index: usize,
}

impl AngleScan {
    pub fn minimum(&self) -> EnergyPoint {
        let e = &self.evaluations[self.min_index];
        EnergyPoint {
            angle: e.angle,
            energy: e.value,
        }
    }

    /// The (angle, objective value) curve in sweep order.
    pub fn curve(&self) -> Vec<EnergyPoint> {
        self.evaluations
            .iter()
            .map(|e| EnergyPoint {
                angle: e.angle,
                energy: e.value,
            })
            .collect()
    }
}

/// Position and value of the smallest entry. A later value must be strictly
/// smaller to replace an earlier one, so the first minimum wins ties.
pub fn first_minimum<I>(values: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.into_iter().enumerate() {
        match best {
            None => best = Some((i, v)),
            Some((_, b)) if v < b => best = Some((i, v)),
            Some(_) => {}
        }
    }
    best
}

/// Runs ansatz evaluations for one scan configuration.
pub struct Evaluator<'a, S> {
    sim: &'a S,
    config: &'a ScanConfig,
    shots: Option<(usize, ONDRng)>,
}

impl<'a, S: Simulator> Evaluator<'a, S> {
    pub fn new(sim: &'a S, config: &'a ScanConfig) -> Self {
        let shots = match &config.sampling {
            Sampling::Exact => None,
            Sampling::Shots { shots, seed } => Some((*shots, ONDRng::new(seed.as_bytes()))),
        };
        Self { sim, config, shots }
    }

    /// Evaluates the ansatz at sweep sample `angle_index` against `record`.
    /// `record_index` only keys the shot streams.
    pub fn evaluate(
        &self,
        record_index: usize,
        record: &HamiltonianRecord,
        angle_index: usize,
    ) -> VqeResult<AngleEvaluation> {
        let theta = self.config.sweep.angle(angle_index);

        let mut expectations = ExpectationVector::default();
        let [z, x, y] = ansatz::circuits(theta).map(|(variant, circuit)| {
            circuit
                .run(self.sim)
                .and_then(|dist| self.sample(dist, record_index, angle_index, variant))
                .and_then(|dist| {
                    accumulate(&mut expectations, variant, &dist)?;
                    Ok(dist)
                })
                .map_err(|source| VqeError::Simulator {
                    distance: record.distance,
                    angle: theta,
                    variant,
                    source,
                })
        });
        let (z, _, _) = (z?, x?, y?);

        let energy = record.energy(&expectations);
        let value = match self.config.objective {
            Objective::Energy => energy,
            Objective::ExpectationSum => expectations.sum(),
        };
        let most_likely = self.config.probe_most_likely.then(|| {
            let (index, probability) = z.most_likely();
            MostLikely {
                label: z.label(index),
                probability,
            }
        });

        match &most_likely {
            Some(m) => debug!(
                distance = record.distance,
                theta, value, state = %m.label, p = m.probability, "angle evaluated"
            ),
            None => debug!(distance = record.distance, theta, value, "angle evaluated"),
        }

        Ok(AngleEvaluation {
            angle: theta,
            expectations,
            energy,
            value,
            most_likely,
        })
    }

    /// Sweeps every angle for `record` and locates the first minimum.
    pub fn minimize(&self, record_index: usize, record: &HamiltonianRecord) -> VqeResult<AngleScan> {
        let n = self.config.sweep.len();
        let evaluations: Vec<AngleEvaluation> = if self.config.parallel {
            (0..n)
                .into_par_iter()
                .map(|i| self.evaluate(record_index, record, i))
                .collect::<VqeResult<_>>()?
        } else {
            (0..n)
                .map(|i| self.evaluate(record_index, record, i))
                .collect::<VqeResult<_>>()?
        };

        let (min_index, _) = first_minimum(evaluations.iter().map(|e| e.value))
            .ok_or_else(|| VqeError::config("angle sweep produced no samples"))?;

        Ok(AngleScan {
            distance: record.distance,
            evaluations,
            min_index,
        })
    }

    fn sample(
        &self,
        dist: Distribution,
        record_index: usize,
        angle_index: usize,
        variant: CircuitVariant,
    ) -> quantum::QuantumResult<Distribution> {
        match &self.shots {
            None => Ok(dist),
            Some((shots, root)) => {
                let label = format!("r{}-theta{}-{}", record_index, angle_index, variant);
                let mut rng = root.derive(label.as_bytes());
                sample_distribution(&dist, &mut rng, *shots)
            }
        }
    }
}

/// Minimum over the configured angle sweep for a single record.
pub fn minimize_angle<S: Simulator>(
    sim: &S,
    record: &HamiltonianRecord,
    config: &ScanConfig,
) -> VqeResult<AngleScan> {
    config.validate()?;
    Evaluator::new(sim, config).minimize(0, record)
}
