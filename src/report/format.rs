//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (easy to snapshot-test)

use crate::app::pipeline::RunOutput;
use crate::domain::{FitResult, LagCurve, RunConfig};

/// Format the run summary (walk, curve extent, fit diagnostics).
pub fn format_run_summary(run: &RunOutput, config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== rwmsd - Random Walk MSD Fit ===\n");
    out.push_str(&format!(
        "Walk: steps={} | seed={}\n",
        run.trajectory.len(),
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string()),
    ));
    if let (Some((x0, y0)), Some((x1, y1))) = (run.trajectory.start(), run.trajectory.end()) {
        out.push_str(&format!(
            "Start: ({x0:.3}, {y0:.3}) | End: ({x1:.3}, {y1:.3})\n"
        ));
    }
    out.push_str(&format!(
        "MSD: lags=1..={} | msd=[{:.3}, {:.3}]\n",
        run.curve.max_lag(),
        run.curve.msd().first().copied().unwrap_or(f64::NAN),
        run.curve.msd().last().copied().unwrap_or(f64::NAN),
    ));

    out.push_str("\nDiffusion Coefficient and Slope:\n");
    out.push_str(&format!(
        "- Diffusion Coefficient: {:.2}\n",
        run.fit.diffusion_coefficient
    ));
    out.push_str(&format!("- Slope of Log-Log MSD Plot: {:.2}\n", run.fit.exponent));
    out.push_str(&format_fit_details(&run.fit));

    out
}

fn format_fit_details(fit: &FitResult) -> String {
    let [slope, intercept] = fit.coefficients();
    let r2 = fit
        .quality
        .r_squared
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "- ln(msd) = {slope:.6} * ln(lag) + {intercept:.6} | n={} RMSE={:.4} R2={r2}\n",
        fit.quality.n, fit.quality.rmse
    )
}

/// Format the MSD curve as a `lag / msd / msd_fit` table.
pub fn format_msd_table(curve: &LagCurve, fit: &FitResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>8} {:>14} {:>14}\n", "lag", "msd", "msd_fit"));
    out.push_str(&format!("{:->8} {:->14} {:->14}\n", "", "", ""));
    for (lag, msd) in curve.iter() {
        out.push_str(&format!(
            "{:>8} {:>14.4} {:>14.4}\n",
            lag,
            msd,
            fit.predict_msd(lag as f64)
        ));
    }
    out
}
