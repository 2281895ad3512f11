//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - pipeline values (`Trajectory`, `LagCurve`, `FitResult`)
//! - run configuration (`RunConfig`)
//! - the on-disk run format (`RunFile`)

pub mod types;

pub use types::*;
