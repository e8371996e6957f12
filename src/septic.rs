//! Septic (4-5-6-7) time scaling.
//!
//! `s(τ) = 35τ⁴ - 84τ⁵ + 70τ⁶ - 20τ⁷` goes from 0 to 1 over the normalized time τ ∈ [0, 1]
//! with zero velocity, acceleration and jerk at both ends.

/// Peak of `s_dot` over [0, 1], reached at τ = 0.5.
pub const PEAK_VELOCITY_COEFFICIENT: f64 = 35.0 / 16.0;

/// Position scaling s(τ).
pub fn s(tau: f64) -> f64 {
    let tau2 = tau * tau;
    tau2 * tau2 * (35.0 + tau * (-84.0 + tau * (70.0 - 20.0 * tau)))
}

/// First derivative ds/dτ.
pub fn s_dot(tau: f64) -> f64 {
    tau * tau * tau * (140.0 + tau * (-420.0 + tau * (420.0 - 140.0 * tau)))
}

/// Second derivative d²s/dτ².
pub fn s_ddot(tau: f64) -> f64 {
    tau * tau * (420.0 + tau * (-1680.0 + tau * (2100.0 - 840.0 * tau)))
}

/// Third derivative d³s/dτ³.
pub fn s_dddot(tau: f64) -> f64 {
    tau * (840.0 + tau * (-5040.0 + tau * (8400.0 - 4200.0 * tau)))
}

/// Evaluates the blend on the half open grid τ_k = k / N, k = 0..N-1.
#[derive(Debug, Clone, Copy)]
pub struct MotionProfileSampler {
    samples: usize,
}

impl MotionProfileSampler {
    pub fn new(samples: usize) -> Self {
        MotionProfileSampler { samples }
    }

    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Normalized time of the k-th sample.
    pub fn tau(&self, k: usize) -> f64 {
        k as f64 / self.samples as f64
    }

    /// Yields (τ, s(τ), ds/dτ) for every sample.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        (0..self.samples).map(move |k| {
            let tau = self.tau(k);
            (tau, s(tau), s_dot(tau))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1E-9;

    #[test]
    fn test_boundary_positions() {
        assert!(s(0.0).abs() < TOLERANCE);
        assert!((s(1.0) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_boundary_velocity_acceleration_jerk() {
        for tau in [0.0, 1.0] {
            assert!(s_dot(tau).abs() < TOLERANCE, "velocity at {}", tau);
            assert!(s_ddot(tau).abs() < TOLERANCE, "acceleration at {}", tau);
            assert!(s_dddot(tau).abs() < TOLERANCE, "jerk at {}", tau);
        }
    }

    #[test]
    fn test_peak_velocity() {
        assert!((s_dot(0.5) - PEAK_VELOCITY_COEFFICIENT).abs() < TOLERANCE);
        assert!((s(0.5) - 0.5).abs() < TOLERANCE);
        for k in 0..=1000 {
            let tau = k as f64 / 1000.0;
            assert!(s_dot(tau) <= PEAK_VELOCITY_COEFFICIENT + TOLERANCE);
            assert!(s_dot(tau) >= -TOLERANCE);
        }
    }

    #[test]
    fn test_derivatives_match_finite_differences() {
        let h = 1E-6;
        for tau in [0.1, 0.33, 0.5, 0.71, 0.9] {
            let ds = (s(tau + h) - s(tau - h)) / (2.0 * h);
            let dds = (s_dot(tau + h) - s_dot(tau - h)) / (2.0 * h);
            let ddds = (s_ddot(tau + h) - s_ddot(tau - h)) / (2.0 * h);
            assert!((ds - s_dot(tau)).abs() < 1E-5);
            assert!((dds - s_ddot(tau)).abs() < 1E-4);
            assert!((ddds - s_dddot(tau)).abs() < 1E-3);
        }
    }

    #[test]
    fn test_sampler_grid_is_half_open() {
        let sampler = MotionProfileSampler::new(4);
        let taus: Vec<f64> = sampler.iter().map(|(tau, _, _)| tau).collect();
        assert_eq!(taus, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(MotionProfileSampler::new(0).is_empty());
    }
}
