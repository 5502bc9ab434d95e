//! Distance scan over the whole coefficient table.

use quantum::{HamiltonianRecord, Simulator};
use rayon::prelude::*;
use tracing::info;

use crate::config::ScanConfig;
use crate::error::VqeResult;
use crate::sweep::{first_minimum, AngleScan, Evaluator};

/// Best energy found for one bond distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultPoint {
    pub distance: f64,
    /// Smallest objective value over the sweep.
    pub min_energy: f64,
    /// Angle at which `min_energy` was reached.
    pub angle: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanReport {
    /// One point per record, in table order.
    pub points: Vec<ResultPoint>,
    pub min_index: usize,
    /// Full sweep of the designated record, if one was requested.
    pub angle_curve: Option<AngleScan>,
}

impl ScanReport {
    pub fn minimum(&self) -> ResultPoint {
        self.points[self.min_index]
    }

    pub fn min_energy(&self) -> f64 {
        self.minimum().min_energy
    }

    pub fn equilibrium_distance(&self) -> f64 {
        self.minimum().distance
    }
}

/// Runs the angle sweep for every record and reports the global minimum.
///
/// Configuration and table are validated before any circuit is simulated; the
/// first simulator failure aborts the whole scan.
pub fn scan_distances<S: Simulator>(
    sim: &S,
    table: &[HamiltonianRecord],
    config: &ScanConfig,
) -> VqeResult<ScanReport> {
    config.validate_for(table)?;

    let evaluator = Evaluator::new(sim, config);
    let run = |(i, record): (usize, &HamiltonianRecord)| -> VqeResult<AngleScan> {
        let scan = evaluator.minimize(i, record)?;
        let min = scan.minimum();
        info!(
            distance = record.distance,
            min_energy = min.energy,
            theta = min.angle,
            "distance done"
        );
        Ok(scan)
    };

    let scans: Vec<AngleScan> = if config.parallel {
        table
            .par_iter()
            .enumerate()
            .map(run)
            .collect::<VqeResult<_>>()?
    } else {
        table
            .iter()
            .enumerate()
            .map(run)
            .collect::<VqeResult<_>>()?
    };

    let points: Vec<ResultPoint> = scans
        .iter()
        .map(|s| {
            let min = s.minimum();
            ResultPoint {
                distance: s.distance,
                min_energy: min.energy,
                angle: min.angle,
            }
        })
        .collect();

    // table is non-empty after validation
    let (min_index, min_energy) =
        first_minimum(points.iter().map(|p| p.min_energy)).unwrap_or((0, f64::NAN));
    info!(
        min_energy,
        distance = points[min_index].distance,
        "equilibrium found"
    );

    let angle_curve = config
        .plot_index
        .and_then(|i| scans.into_iter().nth(i));

    Ok(ScanReport {
        points,
        min_index,
        angle_curve,
    })
}
