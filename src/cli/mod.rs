//! Command-line parsing for the random walk / MSD tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! simulation and fitting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Smallest step count accepted on the command line.
pub const MIN_STEPS: usize = 10;
/// Largest step count accepted on the command line.
pub const MAX_STEPS: usize = 100_000;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "rwmsd",
    version,
    about = "2-D random walk simulation with MSD-based diffusion estimation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate a walk, fit the MSD curve, print a summary and plots.
    Run(RunArgs),
    /// Print the MSD table only (useful for scripting).
    Msd(RunArgs),
    /// Re-render a run previously saved with `--export`.
    Plot(PlotArgs),
}

/// Options shared by `run` and `msd`.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Number of walk steps.
    #[arg(
        short = 'n',
        long,
        env = "RWMSD_STEPS",
        default_value_t = 1000,
        value_parser = parse_steps
    )]
    pub steps: usize,

    /// Largest lag in the MSD curve (defaults to steps / 2).
    #[arg(long)]
    pub max_lag: Option<usize>,

    /// Seed for a reproducible walk (omit for a fresh random walk).
    #[arg(long, env = "RWMSD_SEED")]
    pub seed: Option<u64>,

    /// Disable the terminal plots.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 24)]
    pub height: usize,

    /// Save the run (trajectory, MSD curve, fit) as JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Save the MSD curve and fitted values as CSV.
    #[arg(long = "export-msd")]
    pub export_msd: Option<PathBuf>,
}

/// Options for plotting a saved run.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Run JSON file produced by `rwmsd run --export`.
    #[arg(long, value_name = "JSON")]
    pub run: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 24)]
    pub height: usize,
}

fn parse_steps(s: &str) -> Result<usize, String> {
    let steps: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a whole number"))?;
    if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
        return Err(format!("steps must be in {MIN_STEPS}..={MAX_STEPS}"));
    }
    Ok(steps)
}
