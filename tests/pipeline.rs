//! End-to-end checks of the walk → MSD → fit pipeline through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rw_msd::{ErrorKind, LagCurve, SimError, Trajectory, compute_msd, fit_diffusion, generate, generate_with_rng};

#[test]
fn generated_walks_have_requested_length() {
    for steps in [2, 3, 17, 1000, 10_000] {
        let t = generate(steps).unwrap();
        assert_eq!(t.x().len(), steps);
        assert_eq!(t.y().len(), steps);
    }
}

#[test]
fn msd_lags_have_no_gaps() {
    let t = generate_with_rng(999, &mut StdRng::seed_from_u64(5)).unwrap();
    let curve = compute_msd(&t, None).unwrap();
    let expected: Vec<usize> = (1..=499).collect();
    assert_eq!(curve.lags(), expected.as_slice());
    assert!(curve.msd().iter().all(|&v| v >= 0.0));
}

#[test]
fn msd_is_a_pure_function() {
    let t = generate(2000).unwrap();
    assert_eq!(compute_msd(&t, Some(300)).unwrap(), compute_msd(&t, Some(300)).unwrap());
}

#[test]
fn stationary_walk_is_rejected_by_fit() {
    let t = Trajectory::from_xy(vec![0.0; 50], vec![0.0; 50]).unwrap();
    let curve = compute_msd(&t, None).unwrap();
    assert!(curve.msd().iter().all(|&v| v == 0.0));

    let err = fit_diffusion(&curve).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumericDomain);
}

#[test]
fn deterministic_drift_is_ballistic() {
    let n = 200;
    let t = Trajectory::from_xy((0..n).map(|i| i as f64).collect(), vec![0.0; n]).unwrap();
    let curve = compute_msd(&t, None).unwrap();
    for (lag, msd) in curve.iter() {
        assert_eq!(msd, (lag * lag) as f64);
    }

    let fit = fit_diffusion(&curve).unwrap();
    assert!((fit.exponent - 2.0).abs() < 1e-9);
    assert!((fit.diffusion_coefficient - 0.25).abs() < 1e-9);
    let [slope, intercept] = fit.coefficients();
    assert_eq!(slope, fit.exponent);
    assert!(intercept.abs() < 1e-9);
}

#[test]
fn largest_legal_max_lag() {
    let t = generate(40).unwrap();
    let curve = compute_msd(&t, Some(39)).unwrap();
    assert_eq!(curve.max_lag(), 39);

    let (x, y) = (t.x(), t.y());
    let last = (x[39] - x[0]).powi(2) + (y[39] - y[0]).powi(2);
    assert!((curve.msd()[38] - last).abs() <= 1e-12 * last.max(1.0));

    assert_eq!(
        compute_msd(&t, Some(40)).unwrap_err(),
        SimError::MaxLagOutOfRange { max_lag: 40, len: 40 }
    );
}

#[test]
fn one_step_walk_has_no_lags() {
    let t = generate(1).unwrap();
    let err = compute_msd(&t, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn zero_steps_is_invalid() {
    assert_eq!(generate(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unseeded_walks_differ() {
    let a = generate(50).unwrap();
    let b = generate(50).unwrap();
    assert_ne!(a.x(), b.x());
}

#[test]
fn hand_built_curve_fits() {
    // Sub-diffusive power law: MSD = 4 * 0.3 * t^0.5.
    let lags: Vec<usize> = (1..=64).collect();
    let msd: Vec<f64> = lags.iter().map(|&l| 1.2 * (l as f64).sqrt()).collect();
    let fit = fit_diffusion(&LagCurve::new(lags, msd).unwrap()).unwrap();
    assert!((fit.exponent - 0.5).abs() < 1e-10);
    assert!((fit.diffusion_coefficient - 0.3).abs() < 1e-10);
}
