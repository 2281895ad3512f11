//! Time-averaged mean squared displacement.
//!
//! For a single trajectory of length `n`, the MSD at lag `ℓ` is the mean of
//! `(x[i+ℓ] - x[i])² + (y[i+ℓ] - y[i])²` over the `n - ℓ` start indices. Every
//! lag is computed directly (O(n · max_lag)); there is no FFT shortcut.

use crate::domain::{LagCurve, Trajectory};
use crate::error::SimError;

/// Compute the MSD curve for lags `1..=max_lag`.
///
/// `max_lag` defaults to `len / 2`. An explicit value must satisfy
/// `1 <= max_lag < len`.
pub fn compute_msd(trajectory: &Trajectory, max_lag: Option<usize>) -> Result<LagCurve, SimError> {
    let n = trajectory.len();
    if n < 2 {
        return Err(SimError::TrajectoryTooShort { len: n });
    }

    let max_lag = resolve_max_lag(n, max_lag)?;
    let (x, y) = (trajectory.x(), trajectory.y());

    let mut lags = Vec::with_capacity(max_lag);
    let mut msd = Vec::with_capacity(max_lag);
    for lag in 1..=max_lag {
        lags.push(lag);
        msd.push(mean_squared_displacement(x, y, lag));
    }

    Ok(LagCurve::from_estimator(lags, msd))
}

/// Resolve the effective max lag for a trajectory of length `n` (`n >= 2`).
pub fn resolve_max_lag(n: usize, max_lag: Option<usize>) -> Result<usize, SimError> {
    match max_lag {
        None => {
            let m = n / 2;
            if m == 0 {
                return Err(SimError::TrajectoryTooShort { len: n });
            }
            Ok(m)
        }
        Some(m) if m >= 1 && m < n => Ok(m),
        Some(m) => Err(SimError::MaxLagOutOfRange { max_lag: m, len: n }),
    }
}

fn mean_squared_displacement(x: &[f64], y: &[f64], lag: usize) -> f64 {
    let pairs = x.len() - lag;
    let sum: f64 = x[lag..]
        .iter()
        .zip(&x[..pairs])
        .zip(y[lag..].iter().zip(&y[..pairs]))
        .map(|((x1, x0), (y1, y0))| {
            let dx = x1 - x0;
            let dy = y1 - y0;
            dx * dx + dy * dy
        })
        .sum();
    sum / pairs as f64
}
