//! Conversion between geometric leg angles and actuator units.
//!
//! The solver produces geometric angles of the active rods. The motors are driven through
//! a gearbox and have their own zero position, so the command sent to the motor controller is
//! `(geometric_degrees + zero_offset_degrees) * gearbox_ratio`. These constants belong to the
//! motor and gearbox pairing, not to the kinematic geometry.

use crate::kinematic_traits::Joints;
use crate::kinematics_error::KinematicsError;

pub const DEFAULT_GEARBOX_RATIO: f64 = 50.0;
pub const DEFAULT_ZERO_OFFSET_DEGREES: f64 = 47.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorCalibration {
    /// Motor turns per one turn of the active rod.
    pub gearbox_ratio: f64,

    /// Geometric angle (degrees) of the active rod when the motor is at zero, with the sign
    /// reversed.
    pub zero_offset_degrees: f64,
}

impl Default for ActuatorCalibration {
    fn default() -> Self {
        ActuatorCalibration {
            gearbox_ratio: DEFAULT_GEARBOX_RATIO,
            zero_offset_degrees: DEFAULT_ZERO_OFFSET_DEGREES,
        }
    }
}

impl ActuatorCalibration {
    pub fn new(gearbox_ratio: f64, zero_offset_degrees: f64) -> Self {
        ActuatorCalibration { gearbox_ratio, zero_offset_degrees }
    }

    pub fn validate(&self) -> Result<(), KinematicsError> {
        if !self.gearbox_ratio.is_finite() || self.gearbox_ratio == 0.0 {
            return Err(KinematicsError::InvalidGeometry(format!(
                "gearbox ratio must be finite and non-zero (got {})", self.gearbox_ratio
            )));
        }
        if !self.zero_offset_degrees.is_finite() {
            return Err(KinematicsError::InvalidGeometry(format!(
                "zero offset must be finite (got {})", self.zero_offset_degrees
            )));
        }
        Ok(())
    }

    /// Geometric angle in degrees to actuator units.
    pub fn to_actuator(&self, geometric_degrees: f64) -> f64 {
        (geometric_degrees + self.zero_offset_degrees) * self.gearbox_ratio
    }

    /// Actuator units back to the geometric angle in degrees.
    pub fn to_geometric(&self, actuator: f64) -> f64 {
        actuator / self.gearbox_ratio - self.zero_offset_degrees
    }

    /// Converts all three geometric angles (degrees) at once.
    pub fn joints_to_actuator(&self, geometric_degrees: &Joints) -> Joints {
        geometric_degrees.map(|angle| self.to_actuator(angle))
    }

    /// Actuator command that puts every active rod at the geometric zero (horizontal).
    pub fn home(&self) -> Joints {
        [self.to_actuator(0.0); 3]
    }
}
