//! Reporting utilities: run summaries and MSD tables.

pub mod format;

pub use format::*;
