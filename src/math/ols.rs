//! Least squares solver and straight-line fit.
//!
//! The diffusion fit is a degree-1 polynomial regression:
//!
//! ```text
//! minimize Σ (y_i - (m x_i + c))^2
//! ```
//!
//! We build the tall `[x_i, 1]` design matrix and solve it with SVD, which
//! stays well behaved for the nearly-collinear columns that appear when
//! `x = ln(lag)` spans a narrow range.

use nalgebra::{DMatrix, DVector};

use crate::domain::{FitQuality, LineFit};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// Returns `None` for fewer than two points, mismatched lengths, a degenerate
/// design (all `x` equal), or a failed solve.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Option<LineFit> {
    let n = xs.len();
    if n < 2 || ys.len() != n {
        return None;
    }
    let x0 = xs[0];
    if xs.iter().all(|&x| x == x0) {
        return None;
    }

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { xs[i] } else { 1.0 });
    let target = DVector::from_column_slice(ys);
    let beta = solve_least_squares(&design, &target)?;

    Some(LineFit {
        slope: beta[0],
        intercept: beta[1],
    })
}

/// Residual diagnostics of `line` against the points it was fitted to.
pub fn line_quality(line: &LineFit, xs: &[f64], ys: &[f64]) -> FitQuality {
    let n = xs.len().min(ys.len());
    let sse: f64 = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| {
            let r = y - line.eval(x);
            r * r
        })
        .sum();

    let mean = ys.iter().take(n).sum::<f64>() / n.max(1) as f64;
    let sst: f64 = ys.iter().take(n).map(|&y| (y - mean) * (y - mean)).sum();
    let r_squared = if sst > 0.0 { Some(1.0 - sse / sst) } else { None };

    FitQuality {
        n,
        sse,
        rmse: (sse / n.max(1) as f64).sqrt(),
        r_squared,
    }
}
