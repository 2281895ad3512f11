//! Diffusion fitting.
//!
//! Log-log regression of the MSD curve, producing the diffusion coefficient,
//! the anomalous-diffusion exponent, and the raw line for plotting.

pub mod diffusion;

pub use diffusion::*;
