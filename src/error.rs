//! Error types.
//!
//! Two layers:
//!
//! - [`SimError`]: raised by the numeric core (walk, MSD, fit). Every variant maps
//!   onto one of two [`ErrorKind`]s so callers can branch on the taxonomy without
//!   matching individual variants.
//! - [`AppError`]: what the `rwmsd` binary reports, carrying a process exit code.

use thiserror::Error;

/// Coarse classification of core failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input shape or parameter (step count, max lag, malformed data).
    InvalidArgument,
    /// A value outside the domain of the math (log of a non-positive MSD).
    NumericDomain,
}

/// Errors raised by the simulation/estimation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("step count must be > 0")]
    ZeroSteps,

    #[error("trajectory has {len} point(s); at least 2 are needed to form a lag")]
    TrajectoryTooShort { len: usize },

    #[error("max lag {max_lag} out of range for trajectory of length {len} (need 1 <= max_lag < {len})")]
    MaxLagOutOfRange { max_lag: usize, len: usize },

    #[error("x and y must have the same length (x: {x_len}, y: {y_len})")]
    MismatchedAxes { x_len: usize, y_len: usize },

    #[error("non-finite coordinate at index {index}")]
    NonFinitePosition { index: usize },

    #[error("malformed lag curve: {0}")]
    MalformedCurve(String),

    #[error("need at least 2 lags to fit a line, got {got}")]
    TooFewLags { got: usize },

    #[error("MSD at lag {lag} is {msd}; log-log fit requires strictly positive values")]
    NonPositiveMsd { lag: usize, msd: f64 },

    #[error("log-log regression could not be solved")]
    RegressionFailed,
}

impl SimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::ZeroSteps
            | SimError::TrajectoryTooShort { .. }
            | SimError::MaxLagOutOfRange { .. }
            | SimError::MismatchedAxes { .. }
            | SimError::NonFinitePosition { .. }
            | SimError::MalformedCurve(_)
            | SimError::TooFewLags { .. } => ErrorKind::InvalidArgument,
            SimError::NonPositiveMsd { .. } | SimError::RegressionFailed => ErrorKind::NumericDomain,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<SimError> for AppError {
    fn from(err: SimError) -> Self {
        let code = match err.kind() {
            ErrorKind::InvalidArgument => 2,
            ErrorKind::NumericDomain => 4,
        };
        AppError::new(code, format!("Simulation failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
