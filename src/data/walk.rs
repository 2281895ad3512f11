//! Isotropic Gaussian random walk in the plane.
//!
//! Each axis is an independent stream of N(0, 1) increments, cumulatively
//! summed. The walk has exactly `steps` positions and no origin point is
//! prepended, so `position[0]` is the first increment itself.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::domain::Trajectory;
use crate::error::SimError;

/// Generate a walk of `steps` positions from the thread-local RNG.
///
/// Non-deterministic; use [`generate_with_rng`] with a seeded RNG for
/// reproducible walks.
pub fn generate(steps: usize) -> Result<Trajectory, SimError> {
    generate_with_rng(steps, &mut rand::thread_rng())
}

/// Generate a walk of `steps` positions from the given RNG.
///
/// All x increments are drawn before any y increment.
pub fn generate_with_rng<R: Rng + ?Sized>(steps: usize, rng: &mut R) -> Result<Trajectory, SimError> {
    if steps == 0 {
        return Err(SimError::ZeroSteps);
    }

    let x = cumulative_normal(steps, rng);
    let y = cumulative_normal(steps, rng);

    Ok(Trajectory::from_walk(x, y))
}

fn cumulative_normal<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    let mut pos = 0.0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let dz: f64 = StandardNormal.sample(rng);
        pos += dz;
        out.push(pos);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn length_matches_steps() {
        for steps in [1, 2, 10, 1000] {
            let t = generate(steps).unwrap();
            assert_eq!(t.x().len(), steps);
            assert_eq!(t.y().len(), steps);
        }
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert_eq!(generate(0).unwrap_err(), SimError::ZeroSteps);
    }

    #[test]
    fn first_point_is_first_increment() {
        // Replaying the same seed gives the raw increments: the walk must not
        // start at the origin.
        let mut rng = StdRng::seed_from_u64(7);
        let t = generate_with_rng(5, &mut rng).unwrap();

        let mut replay = StdRng::seed_from_u64(7);
        let dx0: f64 = StandardNormal.sample(&mut replay);
        assert_eq!(t.x()[0], dx0);
        assert_ne!(t.start(), Some((0.0, 0.0)));
    }

    #[test]
    fn axes_are_separate_streams() {
        // y increments come after all x increments in the RNG stream.
        let steps = 4;
        let t = generate_with_rng(steps, &mut StdRng::seed_from_u64(11)).unwrap();

        let mut replay = StdRng::seed_from_u64(11);
        let draws: Vec<f64> = (0..2 * steps).map(|_| StandardNormal.sample(&mut replay)).collect();
        let y_first = draws[steps];
        assert_eq!(t.y()[0], y_first);
        assert!((t.y()[1] - (draws[steps] + draws[steps + 1])).abs() < 1e-12);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = generate_with_rng(200, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with_rng(200, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unseeded_runs_differ() {
        let a = generate(100).unwrap();
        let b = generate(100).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn increments_look_standard_normal() {
        let steps = 20_000;
        let t = generate_with_rng(steps, &mut StdRng::seed_from_u64(3)).unwrap();

        let mut prev = 0.0;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for &x in t.x() {
            let d = x - prev;
            prev = x;
            sum += d;
            sum_sq += d * d;
        }
        let n = steps as f64;
        let mean = sum / n;
        let var = sum_sq / n - mean * mean;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "var {var}");
    }
}
