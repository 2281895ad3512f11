//! Export the MSD curve to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{FitResult, LagCurve};
use crate::error::AppError;

/// Write `lag,msd,msd_fit` rows to a CSV file.
pub fn write_msd_csv(path: &Path, curve: &LagCurve, fit: &FitResult) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_msd_rows(BufWriter::new(file), curve, fit)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))
}

fn write_msd_rows<W: Write>(mut out: W, curve: &LagCurve, fit: &FitResult) -> std::io::Result<()> {
    writeln!(out, "lag,msd,msd_fit")?;
    for (lag, msd) in curve.iter() {
        writeln!(out, "{lag},{msd:.10},{:.10}", fit.predict_msd(lag as f64))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit_diffusion;

    #[test]
    fn csv_rows_per_lag() {
        let curve = LagCurve::new(vec![1, 2, 3], vec![2.0, 4.0, 6.0]).unwrap();
        let fit = fit_diffusion(&curve).unwrap();

        let mut buf = Vec::new();
        write_msd_rows(&mut buf, &curve, &fit).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "lag,msd,msd_fit");
        let row: Vec<f64> = lines[1].split(',').map(|v| v.parse().unwrap()).collect();
        assert_eq!(row[0], 1.0);
        assert_eq!(row[1], 2.0);
        assert!((row[2] - 2.0).abs() < 1e-8);
        assert!(lines[3].starts_with("3,6.0000000000,"));
    }
}
