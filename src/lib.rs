//! Rust implementation of inverse kinematics and point to point motion planning for three legged
//! parallel (delta) robots.
//!
//! Given the desired position of the end effector, the solver finds the angle of the active rod
//! of every leg. Each leg is solved in its own frame, rotated around the vertical axis by the leg
//! angle, where the elbow is the intersection of two circles. The result is converted into
//! actuator units (motor zero offset and gearbox ratio applied).
//!
//! Two such joint configurations are then connected with the septic (4-5-6-7) polynomial blend
//! `s(τ) = 35τ⁴ - 84τ⁵ + 70τ⁶ - 20τ⁷` that starts and stops with zero velocity, acceleration and
//! jerk. The duration is chosen so that no joint exceeds the velocity limit, and the movement is
//! sampled at the fixed time step (1 ms by default).
//!
//! # Features
//!
//! - Pure, stateless solver. Unreachable targets are reported per leg, never as NaN.
//! - Elbow down (default) or elbow up assembly configuration.
//! - Actuator calibration (gearbox ratio, zero offset) kept apart from the geometry.
//! - Bounded sample count, so that a near zero velocity limit cannot exhaust memory.
//! - Export of the velocity profile as C arrays for the motor controller firmware.
//! - Robot configuration from YAML and the `delta-p2p` command line planner
//!   (feature `allow_filesystem`).
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rs_delta_kinematics::kinematic_traits::Point;
//! use rs_delta_kinematics::kinematics_impl::DeltaKinematics;
//! use rs_delta_kinematics::parameters::delta_kinematics::Parameters;
//! use rs_delta_kinematics::point_to_point::PointToPoint;
//! use rs_delta_kinematics::trajectory::PlannerConfig;
//! use rs_delta_kinematics::utils::rpm_to_degrees_per_second;
//!
//! let robot = Arc::new(DeltaKinematics::new(Parameters::reference_delta()));
//! let mover = PointToPoint::new(robot, PlannerConfig::default());
//! let profile = mover.plan(
//!     &Point::new(0.0, 0.15, -0.4),
//!     &Point::new(0.05, 0.0, -0.4),
//!     rpm_to_degrees_per_second(405.0),
//! ).expect("both points are reachable");
//! assert!(profile.duration() > 0.0);
//! ```

pub mod kinematics_error;

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod calibration;
pub mod kinematics_impl;

pub mod septic;
pub mod motion_profile;
pub mod trajectory;
pub mod point_to_point;

pub mod firmware;

#[cfg(test)]
mod tests;
