//! Input/output helpers.
//!
//! - run JSON read/write (`run`)
//! - MSD curve export to CSV (`export`)

pub mod export;
pub mod run;

pub use export::*;
pub use run::*;
