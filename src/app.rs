//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs logging
//! - runs the simulate → MSD → fit pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, PlotArgs, RunArgs};
use crate::domain::{LagCurve, RunConfig, Trajectory};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rwmsd` binary.
pub fn run() -> Result<(), AppError> {
    // Optional `.env` so RWMSD_* defaults can live next to the project.
    let _ = dotenvy::dotenv();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => handle_run(args, OutputMode::Full),
        Command::Msd(args) => handle_run(args, OutputMode::TableOnly),
        Command::Plot(args) => handle_plot(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    TableOnly,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_run(args: RunArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_pipeline(&config)?;
    info!(
        steps = config.steps,
        seed = ?config.seed,
        diffusion_coefficient = run.fit.diffusion_coefficient,
        exponent = run.fit.exponent,
        "run complete"
    );

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format_run_summary(&run, &config));
            if config.plot {
                println!(
                    "{}",
                    crate::plot::render_trajectory_plot(&run.trajectory, config.plot_width, config.plot_height)
                );
                println!(
                    "{}",
                    crate::plot::render_msd_plot(&run.curve, &run.fit, config.plot_width, config.plot_height)
                );
            }
        }
        OutputMode::TableOnly => {
            print!("{}", crate::report::format_msd_table(&run.curve, &run.fit));
        }
    }

    if let Some(path) = &config.export_run {
        crate::io::write_run_json(path, &run, &config)?;
        info!(path = %path.display(), "wrote run JSON");
    }
    if let Some(path) = &config.export_msd {
        crate::io::write_msd_csv(path, &run.curve, &run.fit)?;
        info!(path = %path.display(), "wrote MSD CSV");
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_run_json(&args.run)?;
    let fit = file.fit;
    let trajectory = Trajectory::try_from(file.trajectory)?;
    let curve = LagCurve::try_from(file.curve)?;

    println!(
        "{}",
        crate::plot::render_trajectory_plot(&trajectory, args.width, args.height)
    );
    println!(
        "{}",
        crate::plot::render_msd_plot(&curve, &fit, args.width, args.height)
    );
    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        steps: args.steps,
        max_lag: args.max_lag,
        seed: args.seed,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_run: args.export.clone(),
        export_msd: args.export_msd.clone(),
    }
}

/// Rewrite argv so `rwmsd` defaults to `rwmsd run`.
///
/// Rules:
/// - `rwmsd`                      -> `rwmsd run`
/// - `rwmsd -n 5000 ...`          -> `rwmsd run -n 5000 ...`
/// - `rwmsd --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "run" | "msd" | "plot");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "run".to_string());
        return argv;
    }

    argv
}
