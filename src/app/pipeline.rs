//! Shared "simulate → MSD → fit" pipeline used by every front-end command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! walk generation -> MSD curve -> log-log fit
//!
//! Front-ends then focus on presentation (printing, plotting, exports).

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::data::generate_with_rng;
use crate::domain::{FitResult, LagCurve, RunConfig, Trajectory};
use crate::error::SimError;
use crate::fit::fit_diffusion;
use crate::msd::compute_msd;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub trajectory: Trajectory,
    pub curve: LagCurve,
    pub fit: FitResult,
}

/// Execute the full pipeline for `config`.
///
/// Seeds a `StdRng` from `config.seed` when present, otherwise from OS entropy.
pub fn run_pipeline(config: &RunConfig) -> Result<RunOutput, SimError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_pipeline_with_rng(config.steps, config.max_lag, &mut rng)
}

/// Execute the pipeline with an injected RNG.
///
/// A failing stage aborts the run; no partial output is returned.
pub fn run_pipeline_with_rng<R: Rng + ?Sized>(
    steps: usize,
    max_lag: Option<usize>,
    rng: &mut R,
) -> Result<RunOutput, SimError> {
    let started = Instant::now();
    let trajectory = generate_with_rng(steps, rng)?;
    debug!(steps, elapsed_us = started.elapsed().as_micros() as u64, "generated walk");

    let started = Instant::now();
    let curve = compute_msd(&trajectory, max_lag)?;
    debug!(
        max_lag = curve.max_lag(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "computed MSD curve"
    );

    let fit = fit_diffusion(&curve)?;
    debug!(
        diffusion_coefficient = fit.diffusion_coefficient,
        exponent = fit.exponent,
        "fitted log-log line"
    );

    Ok(RunOutput {
        trajectory,
        curve,
        fit,
    })
}
