mod error;
mod input;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use st_backward::PhSolver;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;
use crate::report::{ClassifyReport, Format, PsatReport, SolveReport, render};

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(about = "Steam tables - IAPWS-IF97 state from pressure and enthalpy", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// YAML file overriding the IF97 domain limits
    #[arg(long, global = true)]
    limits: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve for the full state at (p, h)
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Pressure in MPa
        p: f64,
        /// Specific enthalpy in kJ/kg
        h: f64,
    },
    /// Print the IF97 region of (p, h)
    #[command(allow_negative_numbers = true)]
    Classify {
        /// Pressure in MPa
        p: f64,
        /// Specific enthalpy in kJ/kg
        h: f64,
    },
    /// Saturation pressure from enthalpy
    PsatH {
        /// Specific enthalpy in kJ/kg
        h: f64,
    },
    /// Solve every point listed in a YAML file (`points: [{p, h}, ...]`)
    Batch {
        /// Path to the points file
        path: PathBuf,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let solver = build_solver(cli.limits.as_deref())?;

    match cli.command {
        Commands::Solve { p, h } => cmd_solve(&solver, cli.format, p, h),
        Commands::Classify { p, h } => emit(cli.format, &ClassifyReport::new(&solver, p, h)),
        Commands::PsatH { h } => emit(cli.format, &PsatReport::new(h)),
        Commands::Batch { path } => cmd_batch(&solver, cli.format, &path),
    }
}

fn build_solver(limits: Option<&Path>) -> CliResult<PhSolver> {
    match limits {
        Some(path) => {
            let limits = input::load_limits(path)?;
            info!(path = %path.display(), "using custom domain limits");
            Ok(PhSolver::with_limits(limits))
        }
        None => Ok(PhSolver::new()),
    }
}

fn cmd_solve(solver: &PhSolver, format: Format, p: f64, h: f64) -> CliResult<()> {
    let state = solver.try_solve(p, h)?;
    let report = SolveReport {
        p,
        h,
        region: solver.classify(p, h).to_string(),
        state: Some(state),
        error: None,
    };
    emit(format, &report)
}

fn cmd_batch(solver: &PhSolver, format: Format, path: &Path) -> CliResult<()> {
    let batch = input::load_batch(path)?;
    info!(points = batch.points.len(), "solving batch");
    let reports: Vec<SolveReport> = batch
        .points
        .iter()
        .map(|pt| SolveReport::new(solver, pt.p, pt.h))
        .collect();
    emit(format, reports.as_slice())
}

fn emit<T>(format: Format, report: &T) -> CliResult<()>
where
    T: report::TextReport + serde::Serialize + ?Sized,
{
    let out = render(format, report)?;
    io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}
