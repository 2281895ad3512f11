//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between pipeline stages in memory
//! - exported to JSON/CSV
//! - reloaded later for plotting
//!
//! `Trajectory` and `LagCurve` keep their fields private: their constructors
//! enforce the invariants the later stages rely on.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A 2-D walk: `x[i], y[i]` is the position after step `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Trajectory {
    /// Build a trajectory from caller-supplied coordinates.
    ///
    /// Axes must have equal length and every coordinate must be finite.
    pub fn from_xy(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SimError> {
        if x.len() != y.len() {
            return Err(SimError::MismatchedAxes {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if let Some(index) = x
            .iter()
            .zip(y.iter())
            .position(|(a, b)| !(a.is_finite() && b.is_finite()))
        {
            return Err(SimError::NonFinitePosition { index });
        }
        Ok(Self { x, y })
    }

    /// Generator output is finite by construction and skips the scan.
    pub(crate) fn from_walk(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterate over `(x, y)` positions in step order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn start(&self) -> Option<(f64, f64)> {
        Some((*self.x.first()?, *self.y.first()?))
    }

    pub fn end(&self) -> Option<(f64, f64)> {
        Some((*self.x.last()?, *self.y.last()?))
    }
}

impl TryFrom<TrajectoryRecord> for Trajectory {
    type Error = SimError;

    fn try_from(record: TrajectoryRecord) -> Result<Self, Self::Error> {
        Trajectory::from_xy(record.x, record.y)
    }
}

/// MSD sampled at lags `1..=max_lag`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LagCurve {
    lags: Vec<usize>,
    msd: Vec<f64>,
}

impl LagCurve {
    /// Build a curve from caller-supplied samples.
    ///
    /// Rejects empty input, length mismatches, lags that are zero or not strictly
    /// increasing, and negative or non-finite MSD values.
    pub fn new(lags: Vec<usize>, msd: Vec<f64>) -> Result<Self, SimError> {
        if lags.is_empty() {
            return Err(SimError::MalformedCurve("curve has no lags".to_string()));
        }
        if lags.len() != msd.len() {
            return Err(SimError::MalformedCurve(format!(
                "{} lags but {} MSD values",
                lags.len(),
                msd.len()
            )));
        }
        if lags[0] == 0 {
            return Err(SimError::MalformedCurve("lags must start at 1 or above".to_string()));
        }
        if lags.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SimError::MalformedCurve("lags must be strictly increasing".to_string()));
        }
        if let Some(i) = msd.iter().position(|v| !(v.is_finite() && *v >= 0.0)) {
            return Err(SimError::MalformedCurve(format!(
                "MSD at lag {} is {}",
                lags[i], msd[i]
            )));
        }
        Ok(Self { lags, msd })
    }

    pub(crate) fn from_estimator(lags: Vec<usize>, msd: Vec<f64>) -> Self {
        debug_assert_eq!(lags.len(), msd.len());
        Self { lags, msd }
    }

    pub fn lags(&self) -> &[usize] {
        &self.lags
    }

    pub fn msd(&self) -> &[f64] {
        &self.msd
    }

    pub fn len(&self) -> usize {
        self.lags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lags.is_empty()
    }

    pub fn max_lag(&self) -> usize {
        self.lags.last().copied().unwrap_or(0)
    }

    /// Iterate over `(lag, msd)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.lags.iter().copied().zip(self.msd.iter().copied())
    }
}

impl TryFrom<CurveRecord> for LagCurve {
    type Error = SimError;

    fn try_from(record: CurveRecord) -> Result<Self, Self::Error> {
        LagCurve::new(record.lags, record.msd)
    }
}

/// A straight line `ln(msd) = slope * ln(lag) + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Goodness of fit of the log-log regression (all in log space).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub n: usize,
    pub sse: f64,
    pub rmse: f64,
    /// `None` when `ln(msd)` is constant across lags.
    pub r_squared: Option<f64>,
}

/// Output of the diffusion fitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    /// `D = exp(intercept) / 4`.
    pub diffusion_coefficient: f64,
    /// Scaling exponent α in `MSD ∝ lag^α` (the regression slope).
    pub exponent: f64,
    pub line: LineFit,
    pub quality: FitQuality,
}

impl FitResult {
    /// Raw polynomial coefficients, highest degree first: `[slope, intercept]`.
    pub fn coefficients(&self) -> [f64; 2] {
        [self.line.slope, self.line.intercept]
    }

    /// MSD predicted by the fitted power law at `lag`.
    pub fn predict_msd(&self, lag: f64) -> f64 {
        self.line.eval(lag.ln()).exp()
    }

    /// Fitted `(lag, msd)` points at each lag of `curve`, for overlay plots.
    pub fn fitted_curve(&self, curve: &LagCurve) -> Vec<(f64, f64)> {
        curve
            .lags()
            .iter()
            .map(|&lag| {
                let t = lag as f64;
                (t, self.predict_msd(t))
            })
            .collect()
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub steps: usize,
    /// `None` means `steps / 2`.
    pub max_lag: Option<usize>,
    /// `None` draws from OS entropy (non-reproducible).
    pub seed: Option<u64>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_run: Option<PathBuf>,
    pub export_msd: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            max_lag: None,
            seed: None,
            plot: true,
            plot_width: 80,
            plot_height: 24,
            export_run: None,
            export_msd: None,
        }
    }
}

/// Serialized trajectory as stored in a run file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl From<&Trajectory> for TrajectoryRecord {
    fn from(t: &Trajectory) -> Self {
        Self {
            x: t.x().to_vec(),
            y: t.y().to_vec(),
        }
    }
}

/// Serialized lag curve as stored in a run file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveRecord {
    pub lags: Vec<usize>,
    pub msd: Vec<f64>,
}

impl From<&LagCurve> for CurveRecord {
    fn from(c: &LagCurve) -> Self {
        Self {
            lags: c.lags().to_vec(),
            msd: c.msd().to_vec(),
        }
    }
}

/// A saved run (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub steps: usize,
    pub max_lag: usize,
    pub seed: Option<u64>,
    pub trajectory: TrajectoryRecord,
    pub curve: CurveRecord,
    pub fit: FitResult,
}
