//! `rw-msd` library crate.
//!
//! Simulate a 2-D Gaussian random walk, compute its time-averaged mean squared
//! displacement, and estimate the diffusion coefficient and scaling exponent
//! from a log-log line fit.
//!
//! The core is three pure functions, each feeding the next:
//!
//! - [`generate`]: `steps` → [`Trajectory`]
//! - [`compute_msd`]: [`Trajectory`] → [`LagCurve`]
//! - [`fit_diffusion`]: [`LagCurve`] → [`FitResult`]
//!
//! The binary (`rwmsd`) is a thin wrapper around this library so that the
//! numeric core is testable without spawning processes and any other front-end
//! can call the same functions.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod msd;
pub mod plot;
pub mod report;

pub use data::{generate, generate_with_rng};
pub use domain::{FitQuality, FitResult, LagCurve, LineFit, Trajectory};
pub use error::{ErrorKind, SimError};
pub use fit::fit_diffusion;
pub use msd::compute_msd;
