use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::scan::ResultPoint;
use crate::sweep::EnergyPoint;

/// `theta,<value>` rows, where `value` names the minimized quantity.
pub fn write_angle_csv(path: &Path, value: &str, rows: &[EnergyPoint]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "theta,{}", value)?;
    for p in rows {
        writeln!(w, "{},{}", p.angle, p.energy)?;
    }
    w.flush()
}

pub fn write_distance_csv(path: &Path, value: &str, rows: &[ResultPoint]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "distance,min_{}", value)?;
    for p in rows {
        writeln!(w, "{},{}", p.distance, p.min_energy)?;
    }
    w.flush()
}
