//! Mean squared displacement estimation.

pub mod estimator;

pub use estimator::*;
