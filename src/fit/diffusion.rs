//! Diffusion coefficient and scaling exponent from an MSD curve.
//!
//! In 2-D, normal diffusion follows `MSD(t) = 4 D t`. More generally
//! `MSD(t) = 4 D t^α`, so
//!
//! ```text
//! ln MSD = α ln t + ln(4 D)
//! ```
//!
//! A straight-line fit in log-log space gives `α` as the slope and
//! `D = exp(intercept) / 4`.

use crate::domain::{FitResult, LagCurve};
use crate::error::SimError;
use crate::math::{fit_line, line_quality};

/// `2 × d` for `d = 2` spatial dimensions.
pub const FICK_FACTOR_2D: f64 = 4.0;

/// Fit `ln(msd)` against `ln(lag)` and derive `D` and `α`.
///
/// Every MSD value must be strictly positive; a zero anywhere in the curve is
/// a [`SimError::NonPositiveMsd`] rather than a `-inf` in the regression.
pub fn fit_diffusion(curve: &LagCurve) -> Result<FitResult, SimError> {
    if let Some((lag, msd)) = curve.iter().find(|&(_, msd)| !(msd > 0.0 && msd.is_finite())) {
        return Err(SimError::NonPositiveMsd { lag, msd });
    }
    if curve.len() < 2 {
        return Err(SimError::TooFewLags { got: curve.len() });
    }

    let log_lag: Vec<f64> = curve.lags().iter().map(|&lag| (lag as f64).ln()).collect();
    let log_msd: Vec<f64> = curve.msd().iter().map(|msd| msd.ln()).collect();

    let line = fit_line(&log_lag, &log_msd).ok_or(SimError::RegressionFailed)?;
    let quality = line_quality(&line, &log_lag, &log_msd);

    Ok(FitResult {
        diffusion_coefficient: line.intercept.exp() / FICK_FACTOR_2D,
        exponent: line.slope,
        line,
        quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::msd::compute_msd;
    use crate::domain::Trajectory;

    #[test]
    fn drift_gives_ballistic_exponent() {
        let n = 100;
        let t = Trajectory::from_xy((0..n).map(|i| i as f64).collect(), vec![0.0; n]).unwrap();
        let curve = compute_msd(&t, None).unwrap();

        let fit = fit_diffusion(&curve).unwrap();
        assert!((fit.exponent - 2.0).abs() < 1e-10, "slope {}", fit.exponent);
        assert!(fit.line.intercept.abs() < 1e-10);
        assert!((fit.diffusion_coefficient - 0.25).abs() < 1e-10);
        assert_eq!(fit.coefficients()[0], fit.exponent);
    }

    #[test]
    fn linear_msd_recovers_d() {
        // MSD = 4 D t with D = 1.5.
        let lags: Vec<usize> = (1..=30).collect();
        let msd: Vec<f64> = lags.iter().map(|&l| 4.0 * 1.5 * l as f64).collect();
        let fit = fit_diffusion(&LagCurve::new(lags, msd).unwrap()).unwrap();
        assert!((fit.exponent - 1.0).abs() < 1e-10);
        assert!((fit.diffusion_coefficient - 1.5).abs() < 1e-9);
        assert!((fit.quality.r_squared.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn all_zero_curve_is_a_domain_error() {
        let t = Trajectory::from_xy(vec![0.0; 10], vec![0.0; 10]).unwrap();
        let curve = compute_msd(&t, None).unwrap();
        let err = fit_diffusion(&curve).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDomain);
        assert_eq!(err, SimError::NonPositiveMsd { lag: 1, msd: 0.0 });
    }

    #[test]
    fn single_zero_is_reported_at_its_lag() {
        let curve = LagCurve::new(vec![1, 2, 3], vec![1.0, 0.0, 3.0]).unwrap();
        assert_eq!(
            fit_diffusion(&curve).unwrap_err(),
            SimError::NonPositiveMsd { lag: 2, msd: 0.0 }
        );
    }

    #[test]
    fn single_lag_cannot_fit_a_line() {
        let curve = LagCurve::new(vec![1], vec![2.0]).unwrap();
        let err = fit_diffusion(&curve).unwrap_err();
        assert_eq!(err, SimError::TooFewLags { got: 1 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn fitted_line_passes_through_exact_power_law() {
        let lags: Vec<usize> = vec![1, 2, 4, 8];
        let msd: Vec<f64> = lags.iter().map(|&l| 0.8 * (l as f64).powf(0.6)).collect();
        let curve = LagCurve::new(lags, msd.clone()).unwrap();
        let fit = fit_diffusion(&curve).unwrap();
        for ((_, y_fit), y) in fit.fitted_curve(&curve).into_iter().zip(msd) {
            assert!((y_fit - y).abs() < 1e-9);
        }
        assert!((fit.diffusion_coefficient - 0.2).abs() < 1e-10);
    }
}
