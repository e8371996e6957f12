//! Point to point trajectory planning with the septic (4-5-6-7) blend.
//!
//! All joints start and stop together. The joint with the largest travel sets the duration so
//! that its peak velocity, reached in the middle of the movement, equals the velocity limit.
//! The other joints move proportionally slower.
//!
//! Planning goes through two stages that are encoded in types: a [`TrajectorySpec`] holds the
//! resolved start and end angles, the planner turns it into a [`TimedTrajectory`] once the
//! duration and the sample count are known, and only a timed trajectory can be sampled into
//! a [`MotionProfile`].

use crate::kinematic_traits::Joints;
use crate::kinematics_error::KinematicsError;
use crate::motion_profile::{MotionProfile, ProfileSample};
use crate::septic::{self, MotionProfileSampler, PEAK_VELOCITY_COEFFICIENT};
use tracing::debug;

/// Default sampling step, seconds (1 ms).
pub const DEFAULT_STEP: f64 = 0.001;

/// Default upper bound on the number of samples (about 16 minutes at 1 ms).
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Time between samples, seconds.
    pub step: f64,

    /// Trajectories needing more samples than this are rejected. Protects against
    /// unbounded allocation when the velocity limit is close to zero.
    pub max_samples: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            step: DEFAULT_STEP,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

/// Start and end angles with the velocity limit, all in actuator units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySpec {
    pub start: Joints,
    pub end: Joints,
    /// Maximal angular velocity of any joint, actuator units per second.
    pub max_velocity: f64,
}

impl TrajectorySpec {
    pub fn new(start: Joints, end: Joints, max_velocity: f64) -> Self {
        TrajectorySpec { start, end, max_velocity }
    }

    /// Travel of every joint, end - start.
    pub fn deltas(&self) -> Joints {
        std::array::from_fn(|j| self.end[j] - self.start[j])
    }

    /// Shortest duration that keeps every joint within the velocity limit.
    pub fn duration(&self) -> Result<f64, KinematicsError> {
        if !self.max_velocity.is_finite() || self.max_velocity <= 0.0 {
            return Err(KinematicsError::InvalidTrajectory(format!(
                "maximal velocity must be positive and finite (got {})", self.max_velocity
            )));
        }
        if !self.start.iter().chain(self.end.iter()).all(|a| a.is_finite()) {
            return Err(KinematicsError::InvalidTrajectory(
                "start and end angles must be finite".to_string()));
        }

        let duration = self.deltas().iter()
            .map(|delta| PEAK_VELOCITY_COEFFICIENT * delta.abs() / self.max_velocity)
            .fold(0.0, f64::max);

        if duration <= 0.0 {
            return Err(KinematicsError::InvalidTrajectory(format!(
                "duration must be positive (got {}), start and end are the same", duration
            )));
        }
        Ok(duration)
    }
}

/// Trajectory with the known duration and sample count, ready to be sampled.
/// Only the planner can construct it.
#[derive(Debug, Clone, Copy)]
pub struct TimedTrajectory {
    spec: TrajectorySpec,
    duration: f64,
    step: f64,
    samples: usize,
}

impl TimedTrajectory {
    pub fn spec(&self) -> &TrajectorySpec {
        &self.spec
    }

    /// Duration of the movement, seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Angles and velocities at the normalized time τ.
    pub fn at(&self, tau: f64) -> ProfileSample {
        self.evaluate(tau, septic::s(tau), septic::s_dot(tau))
    }

    fn evaluate(&self, tau: f64, s: f64, s_dot: f64) -> ProfileSample {
        let deltas = self.spec.deltas();
        ProfileSample {
            tau,
            time: tau * self.duration,
            angles: std::array::from_fn(|j| self.spec.start[j] + deltas[j] * s),
            velocities: std::array::from_fn(|j| deltas[j] / self.duration * s_dot),
        }
    }

    /// Produce the complete sampled profile.
    pub fn sample(&self) -> MotionProfile {
        let sampler = MotionProfileSampler::new(self.samples);
        let samples = sampler.iter()
            .map(|(tau, s, s_dot)| self.evaluate(tau, s, s_dot))
            .collect();
        MotionProfile::new(self.duration, self.step, samples)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrajectoryPlanner {
    config: PlannerConfig,
}

impl TrajectoryPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        TrajectoryPlanner { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Compute duration and sample count, checking every limit before anything is sampled.
    pub fn timed(&self, spec: &TrajectorySpec) -> Result<TimedTrajectory, KinematicsError> {
        let step = self.config.step;
        if !step.is_finite() || step <= 0.0 {
            return Err(KinematicsError::InvalidTrajectory(format!(
                "sampling step must be positive and finite (got {})", step
            )));
        }

        let duration = spec.duration()?;
        let count = (duration / step).floor();
        if count < 1.0 {
            return Err(KinematicsError::InvalidTrajectory(format!(
                "duration {} s is shorter than one sampling step of {} s", duration, step
            )));
        }
        if count > self.config.max_samples as f64 {
            return Err(KinematicsError::TooManySamples {
                samples: count as usize,
                limit: self.config.max_samples,
            });
        }

        debug!("duration {:.4} s, {} samples, deltas {:?}", duration, count, spec.deltas());
        Ok(TimedTrajectory {
            spec: *spec,
            duration,
            step,
            samples: count as usize,
        })
    }

    /// Plan and sample the whole movement.
    pub fn plan(&self, spec: &TrajectorySpec) -> Result<MotionProfile, KinematicsError> {
        Ok(self.timed(spec)?.sample())
    }

    /// Plan between the given angles.
    pub fn plan_between(&self, start: &Joints, end: &Joints, max_velocity: f64)
                        -> Result<MotionProfile, KinematicsError> {
        self.plan(&TrajectorySpec::new(*start, *end, max_velocity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner() -> TrajectoryPlanner {
        TrajectoryPlanner::new(PlannerConfig::default())
    }

    #[test]
    fn test_duration_set_by_largest_travel() {
        let spec = TrajectorySpec::new([0.0, 0.0, 0.0], [100.0, -350.0, 20.0], 700.0);
        let expected = 35.0 / 16.0 * 350.0 / 700.0;
        assert!((spec.duration().unwrap() - expected).abs() < 1E-12);
    }

    #[test]
    fn test_zero_velocity_rejected() {
        let spec = TrajectorySpec::new([0.0; 3], [10.0; 3], 0.0);
        assert!(matches!(planner().plan(&spec), Err(KinematicsError::InvalidTrajectory(_))));
    }

    #[test]
    fn test_negative_velocity_rejected() {
        let spec = TrajectorySpec::new([0.0; 3], [10.0; 3], -5.0);
        assert!(matches!(planner().plan(&spec), Err(KinematicsError::InvalidTrajectory(_))));
    }

    #[test]
    fn test_identical_endpoints_rejected() {
        let spec = TrajectorySpec::new([2360.0; 3], [2360.0; 3], 2430.0);
        assert!(matches!(planner().plan(&spec), Err(KinematicsError::InvalidTrajectory(_))));
    }

    #[test]
    fn test_shorter_than_step_rejected() {
        // 35/16 * 0.1 / 2430 is far below 1 ms
        let spec = TrajectorySpec::new([0.0; 3], [0.1, 0.0, 0.0], 2430.0);
        assert!(matches!(planner().plan(&spec), Err(KinematicsError::InvalidTrajectory(_))));
    }

    #[test]
    fn test_sample_cap() {
        let planner = TrajectoryPlanner::new(PlannerConfig { step: 0.001, max_samples: 100 });
        // Duration 35/16 s needs 2187 samples
        let spec = TrajectorySpec::new([0.0; 3], [1.0, 0.0, 0.0], 1.0);
        assert_eq!(planner.plan(&spec).unwrap_err(),
                   KinematicsError::TooManySamples { samples: 2187, limit: 100 });
    }

    #[test]
    fn test_tiny_velocity_does_not_allocate() {
        let spec = TrajectorySpec::new([0.0; 3], [1000.0; 3], 1E-300);
        assert!(matches!(planner().plan(&spec), Err(KinematicsError::TooManySamples { .. })));
    }

    #[test]
    fn test_invalid_step_rejected() {
        let planner = TrajectoryPlanner::new(PlannerConfig { step: 0.0, max_samples: 100 });
        let spec = TrajectorySpec::new([0.0; 3], [10.0; 3], 1.0);
        assert!(matches!(planner.plan(&spec), Err(KinematicsError::InvalidTrajectory(_))));
    }

    #[test]
    fn test_sample_count_and_boundaries() {
        let spec = TrajectorySpec::new([100.0, 200.0, 300.0], [500.0, 100.0, 300.0], 1000.0);
        let timed = planner().timed(&spec).unwrap();
        let duration = 35.0 / 16.0 * 400.0 / 1000.0;
        assert!((timed.duration() - duration).abs() < 1E-12);
        assert_eq!(timed.sample_count(), (duration / DEFAULT_STEP).floor() as usize);

        let profile = timed.sample();
        assert_eq!(profile.len(), timed.sample_count());

        let first = profile.first().unwrap();
        assert_eq!(first.tau, 0.0);
        assert_eq!(first.angles, spec.start);
        assert_eq!(first.velocities, [0.0, 0.0, 0.0]);

        let last = profile.last().unwrap();
        for j in 0..3 {
            assert!((last.angles[j] - spec.end[j]).abs() < 1E-3);
            assert!(last.velocities[j].abs() < 1.0);
        }

        // Joint without travel stays still
        assert!(profile.angles(2).iter().all(|a| *a == 300.0));
    }

    #[test]
    fn test_velocity_limit_respected() {
        let max_velocity = 2430.0;
        let spec = TrajectorySpec::new([3865.0, 2147.0, 2147.0], [2395.0, 2045.0, 2742.0], max_velocity);
        let profile = planner().plan(&spec).unwrap();
        for peak in profile.peak_velocities() {
            assert!(peak <= max_velocity + 1E-9);
        }
        // The limiting joint gets close to the limit in the middle of the movement
        assert!(profile.peak_velocities()[0] > 0.99 * max_velocity);
    }

    #[test]
    fn test_at_matches_samples() {
        let spec = TrajectorySpec::new([0.0; 3], [10.0, 20.0, -30.0], 100.0);
        let timed = planner().timed(&spec).unwrap();
        let profile = timed.sample();
        let k = profile.len() / 3;
        assert_eq!(timed.at(profile.samples()[k].tau), profile.samples()[k]);
    }
}
