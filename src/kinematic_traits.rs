extern crate nalgebra as na;

use crate::kinematics_error::KinematicsError;
use na::Vector3;

/// Position of the end effector (the center of the moving platform) in meters.
/// It is expressed in the global frame that is also the local frame of the first leg (alpha = 0).
/// ```
/// use nalgebra::Vector3;
/// type Point = Vector3<f64>;
///
/// let below_base = Point::new(0.0, 0.15, -0.4);
/// ```
pub type Point = Vector3<f64>;

/// Actuator angles, one per leg, in actuator units (degrees after the zero offset has been
/// added and the gearbox ratio applied). This is what the motor controller takes as a command.
pub type Joints = [f64; 3];

/// Number of legs of the delta robot.
pub const LEGS: usize = 3;

/// Indices of the legs, for readability.
pub const LEG_1: usize = 0;
pub const LEG_2: usize = 1;
pub const LEG_3: usize = 2;

pub trait Kinematics {
    /// Find the actuator angles that place the end effector at the given point.
    /// Fails if any of the legs cannot reach it. Nothing is retained between calls.
    fn inverse(&self, target: &Point) -> Result<Joints, KinematicsError>;
}
