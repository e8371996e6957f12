//! Sampled point to point motion

use crate::kinematic_traits::{Joints, LEGS};

/// Angles and angular velocities of all legs at one moment. Actuator units and actuator
/// units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// Normalized time in [0, 1).
    pub tau: f64,
    /// Time since the start of the movement, seconds.
    pub time: f64,
    pub angles: Joints,
    pub velocities: Joints,
}

/// Motion profile sampled at the fixed time step.
#[derive(Debug, Clone)]
pub struct MotionProfile {
    duration: f64,
    step: f64,
    samples: Vec<ProfileSample>,
}

impl MotionProfile {
    pub(crate) fn new(duration: f64, step: f64, samples: Vec<ProfileSample>) -> Self {
        MotionProfile { duration, step, samples }
    }

    /// Duration of the movement, seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time between two samples, seconds.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfileSample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&ProfileSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&ProfileSample> {
        self.samples.last()
    }

    /// Normalized times of all samples, the x axis for plotting.
    pub fn taus(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.tau).collect()
    }

    /// Angle sequence of a single leg.
    pub fn angles(&self, leg: usize) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.angles[leg]).collect()
    }

    /// Angular velocity sequence of a single leg.
    pub fn velocities(&self, leg: usize) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.velocities[leg]).collect()
    }

    /// Largest absolute angular velocity of every leg over the whole profile.
    pub fn peak_velocities(&self) -> Joints {
        let mut peaks: Joints = [0.0; LEGS];
        for sample in &self.samples {
            for (peak, velocity) in peaks.iter_mut().zip(sample.velocities) {
                *peak = peak.max(velocity.abs());
            }
        }
        peaks
    }
}

impl<'a> IntoIterator for &'a MotionProfile {
    type Item = &'a ProfileSample;
    type IntoIter = std::slice::Iter<'a, ProfileSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tau: f64, velocities: Joints) -> ProfileSample {
        ProfileSample { tau, time: tau, angles: [tau; 3], velocities }
    }

    #[test]
    fn test_peak_velocities_use_magnitude() {
        let profile = MotionProfile::new(1.0, 0.5, vec![
            sample(0.0, [1.0, -4.0, 0.0]),
            sample(0.5, [-3.0, 2.0, 0.5]),
        ]);
        assert_eq!(profile.peak_velocities(), [3.0, 4.0, 0.5]);
    }

    #[test]
    fn test_per_leg_sequences() {
        let profile = MotionProfile::new(1.0, 0.5, vec![
            sample(0.0, [1.0, 2.0, 3.0]),
            sample(0.5, [4.0, 5.0, 6.0]),
        ]);
        assert_eq!(profile.taus(), vec![0.0, 0.5]);
        assert_eq!(profile.velocities(1), vec![2.0, 5.0]);
        assert_eq!(profile.angles(2), vec![0.0, 0.5]);
        assert_eq!(profile.len(), 2);
        assert_eq!((&profile).into_iter().count(), 2);
    }
}
