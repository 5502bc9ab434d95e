use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quantum::{hamiltonian::REFERENCE_PLOT_INDEX, reference_table, MpsSimulator};
use vqe::{
    output::{write_angle_csv, write_distance_csv},
    plot::{render_scatter, PlotSpec},
    scan_distances, Objective, Sampling, ScanConfig, ScanReport, SweepSpec, VqeResult,
};

/// H2 bond-length scan with a two-qubit VQE ansatz
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First variational angle (rad)
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Exclusive upper bound of the angle sweep (rad)
    #[arg(long, default_value_t = std::f64::consts::TAU)]
    stop: f64,

    /// Angle step (rad)
    #[arg(long, default_value_t = 0.1)]
    step: f64,

    /// Table row whose energy-vs-angle curve is plotted
    #[arg(long, default_value_t = REFERENCE_PLOT_INDEX)]
    plot_index: usize,

    /// Skip the plots
    #[arg(long)]
    no_plot: bool,

    /// Quantity minimized over the angle sweep
    #[arg(long, value_enum, default_value_t = ObjectiveArg::Energy)]
    objective: ObjectiveArg,

    /// Also report the most likely Z-basis state at every angle
    #[arg(long)]
    most_likely: bool,

    /// Measurement shots per circuit (0 = exact probabilities)
    #[arg(long, default_value_t = 0)]
    shots: usize,

    /// RNG seed for shot sampling
    #[arg(long, default_value = "h2-vqe")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Evaluate on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Directory for plots and CSV files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write the curves as CSV
    #[arg(long)]
    csv: bool,

    /// Increase verbosity (-v per-distance minima, -vv every angle's value, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ObjectiveArg {
    Energy,
    ExpectationSum,
}

impl From<ObjectiveArg> for Objective {
    fn from(arg: ObjectiveArg) -> Self {
        match arg {
            ObjectiveArg::Energy => Objective::Energy,
            ObjectiveArg::ExpectationSum => Objective::ExpectationSum,
        }
    }
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        let sampling = if self.shots == 0 {
            Sampling::Exact
        } else {
            Sampling::Shots {
                shots: self.shots,
                seed: self.seed.clone(),
            }
        };
        ScanConfig::default()
            .with_sweep(SweepSpec::new(self.start, self.stop, self.step))
            .with_objective(self.objective.into())
            .with_most_likely(self.most_likely)
            .with_sampling(sampling)
            .with_plot_index(Some(self.plot_index))
            .with_parallel(!self.sequential)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let table = reference_table();
    let config = args.scan_config();
    let report = scan_distances(&MpsSimulator::new(), &table, &config)?;

    if args.verbose > 0 {
        for p in &report.points {
            info!(distance = p.distance, min_energy = p.min_energy, theta = p.angle, "result");
        }
    }
    println!("{} {}", report.min_energy(), report.equilibrium_distance());

    // numeric results are final; output failures below do not change them
    let value = config.objective.label();
    if args.csv {
        if let Err(err) = write_csvs(&args.out_dir, value, &report) {
            error!("{err}");
        }
    }
    if !args.no_plot {
        if let Err(err) = write_plots(&args.out_dir, value, &report) {
            error!("{err}");
        }
    }

    Ok(())
}

/// `value` names the minimized quantity in headers and axis labels.
fn write_csvs(dir: &Path, value: &str, report: &ScanReport) -> VqeResult<()> {
    if let Some(curve) = &report.angle_curve {
        write_angle_csv(&dir.join("energy.csv"), value, &curve.curve())?;
    }
    write_distance_csv(&dir.join("min_energy.csv"), value, &report.points)?;
    Ok(())
}

fn write_plots(dir: &Path, value: &str, report: &ScanReport) -> VqeResult<()> {
    if let Some(curve) = &report.angle_curve {
        let points: Vec<(f64, f64)> = curve.curve().iter().map(|p| (p.angle, p.energy)).collect();
        render_scatter(
            &dir.join("energy.svg"),
            &PlotSpec {
                title: &format!("{} vs theta", value),
                x_label: "theta",
                y_label: value,
            },
            &points,
        )?;
    }

    let min_label = format!("min {}", value);
    let points: Vec<(f64, f64)> = report
        .points
        .iter()
        .map(|p| (p.distance, p.min_energy))
        .collect();
    render_scatter(
        &dir.join("min_energy.svg"),
        &PlotSpec {
            title: &format!("{} vs distance", min_label),
            x_label: "distance",
            y_label: &min_label,
        },
        &points,
    )
}
