//! Read/write run JSON files.
//!
//! A run file is the portable record of one simulation:
//! - walk coordinates and the MSD curve
//! - the log-log fit (D, exponent, line, quality)
//! - run metadata (steps, max lag, seed, generation time)
//!
//! The schema is defined by `domain::RunFile`. Readers must rebuild
//! `Trajectory`/`LagCurve` through their validating constructors.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::Utc;

use crate::app::pipeline::RunOutput;
use crate::domain::{CurveRecord, RunConfig, RunFile, TrajectoryRecord};
use crate::error::AppError;

/// Build the serializable record of a run.
pub fn run_file(run: &RunOutput, config: &RunConfig) -> RunFile {
    RunFile {
        tool: "rwmsd".to_string(),
        generated_at: Utc::now(),
        steps: run.trajectory.len(),
        max_lag: run.curve.max_lag(),
        seed: config.seed,
        trajectory: TrajectoryRecord::from(&run.trajectory),
        curve: CurveRecord::from(&run.curve),
        fit: run.fit.clone(),
    }
}

/// Write a run JSON file.
pub fn write_run_json(path: &Path, run: &RunOutput, config: &RunConfig) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create run JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(BufWriter::new(file), &run_file(run, config))
        .map_err(|e| AppError::new(2, format!("Failed to write run JSON: {e}")))?;

    Ok(())
}

/// Read a run JSON file.
pub fn read_run_json(path: &Path) -> Result<RunFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open run JSON '{}': {e}", path.display())))?;
    let run: RunFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid run JSON: {e}")))?;
    Ok(run)
}
