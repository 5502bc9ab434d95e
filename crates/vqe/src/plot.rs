//! Square scatter plots of the scan curves.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{VqeError, VqeResult};

pub const PLOT_SIZE: (u32, u32) = (800, 800);

/// Labels for one scatter plot.
pub struct PlotSpec<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

/// Draws `points` as a circle-glyph scatter into an SVG file at `path`.
pub fn render_scatter(path: &Path, spec: &PlotSpec<'_>, points: &[(f64, f64)]) -> VqeResult<()> {
    draw(path, spec, points).map_err(|e| VqeError::Render {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn draw(
    path: &Path,
    spec: &PlotSpec<'_>,
    points: &[(f64, f64)],
) -> Result<(), Box<dyn std::error::Error>> {
    if points.is_empty() {
        return Err("nothing to plot".into());
    }
    let (x_range, y_range) = padded_ranges(points);

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 2, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn padded_ranges(points: &[(f64, f64)]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (pad(x_min, x_max), pad(y_min, y_max))
}

fn pad(lo: f64, hi: f64) -> std::ops::Range<f64> {
    let span = hi - lo;
    let margin = if span > 0.0 { span * 0.05 } else { 0.5 };
    (lo - margin)..(hi + margin)
}
