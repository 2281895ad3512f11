//! Synthetic data: random walk generation.

pub mod walk;

pub use walk::*;
