//! Inverse kinematics of a three legged delta robot.
//!
//! Thanks to the 3-fold symmetry of the base and the platform, each leg is solved alone in
//! its own frame, rotated around the vertical axis by the leg angle. In this frame the active
//! rod moves in the y-z (sagittal) plane, so the elbow point J1 is the intersection of two
//! circles: radius r_f around the base anchor F1 and radius sqrt(r_e² - x0²) around E1', the
//! projection of the platform anchor E1 onto this plane.

use crate::calibration::ActuatorCalibration;
use crate::kinematic_traits::{Joints, Kinematics, Point, LEGS};
use crate::kinematics_error::KinematicsError;
use crate::parameters::delta_kinematics::Parameters;
use nalgebra::{Rotation3, Vector3};
use tracing::debug;

/// tan(30°), relates the radius of the anchor triangle to the distance of its side from the center.
pub const TAN_30_DEG: f64 = 0.5773502692;

/// Which of the two circle intersections is taken as the elbow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elbow {
    /// Negative square root branch, the elbow points outwards and down. This is the
    /// assembly configuration of the usual delta robot.
    #[default]
    Down,
    /// Positive square root branch.
    Up,
}

/// Intermediate points of the single leg solution, all in the local frame of the leg.
/// Returned by value, the solver keeps nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegSolution {
    /// Target point rotated into the leg frame.
    pub local_target: Point,
    /// Platform anchor of the passive rods.
    pub e1: Point,
    /// E1 projected onto the y-z plane (x = 0).
    pub e1_prime: Point,
    /// Base anchor of the active rod.
    pub f1: Point,
    /// Elbow between the active and the passive rod.
    pub j1: Point,
    /// Geometric angle of the active rod, radians.
    pub theta: f64,
}

#[derive(Debug, Clone)]
pub struct DeltaKinematics {
    parameters: Parameters,
    calibration: ActuatorCalibration,
    elbow: Elbow,
}

impl DeltaKinematics {
    /// Creates a new `DeltaKinematics` instance with the given parameters and the default
    /// actuator calibration.
    pub fn new(parameters: Parameters) -> Self {
        Self::new_with_calibration(parameters, ActuatorCalibration::default())
    }

    pub fn new_with_calibration(parameters: Parameters, calibration: ActuatorCalibration) -> Self {
        DeltaKinematics {
            parameters,
            calibration,
            elbow: Elbow::default(),
        }
    }

    /// Use the given elbow configuration instead of the default elbow down.
    pub fn with_elbow(self, elbow: Elbow) -> Self {
        DeltaKinematics { elbow, ..self }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn calibration(&self) -> &ActuatorCalibration {
        &self.calibration
    }

    pub fn elbow(&self) -> Elbow {
        self.elbow
    }

    /// Solve a single leg. The geometry is assumed to be already validated.
    pub fn solve_leg(&self, leg: usize, target: &Point) -> Result<LegSolution, KinematicsError> {
        let p = &self.parameters;
        let alpha = p.leg_angles[leg].to_radians();

        // Rotation by -alpha brings the target into the frame of this leg
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), -alpha);
        let local_target = rotation * *target;

        let e1 = local_target + Vector3::new(0.0, -p.ee_radius / 2.0 * TAN_30_DEG, 0.0);
        let e1_prime = Point::new(0.0, e1.y, e1.z);
        let f1 = Point::new(0.0, -p.base_radius / 2.0 * TAN_30_DEG, 0.0);

        let rf = p.active_rod;
        let re = p.passive_rod;
        let (x0, y0, z0) = (e1.x, e1.y, e1.z);
        let y_f = f1.y;

        if z0 == 0.0 {
            return Err(KinematicsError::InvalidGeometry(format!(
                "end effector anchor of leg {} lies in the base plane", leg + 1
            )));
        }
        if x0.abs() > re {
            debug!("leg {}: passive rod {} shorter than the offset {}", leg + 1, re, x0);
            return Err(KinematicsError::GeometryUnreachable { leg });
        }

        let c1 = (x0 * x0 + y0 * y0 + z0 * z0 + rf * rf - re * re - y_f * y_f) / (2.0 * z0);
        let c2 = (y_f - y0) / z0;
        let c3 = -(c1 + c2 * y_f) * (c1 + c2 * y_f) + rf * (c2 * c2 * rf + rf);
        if c3 < 0.0 {
            debug!("leg {}: circles do not intersect, discriminant {}", leg + 1, c3);
            return Err(KinematicsError::GeometryUnreachable { leg });
        }

        let root = match self.elbow {
            Elbow::Down => -c3.sqrt(),
            Elbow::Up => c3.sqrt(),
        };
        let y = (y_f - c1 * c2 + root) / (c2 * c2 + 1.0);
        let z = c1 + c2 * y;
        let j1 = Point::new(0.0, y, z);

        let theta = (-j1.z / (f1.y - j1.y)).atan();
        if !theta.is_finite() {
            return Err(KinematicsError::GeometryUnreachable { leg });
        }

        Ok(LegSolution {
            local_target,
            e1,
            e1_prime,
            f1,
            j1,
            theta,
        })
    }

    /// Solve all legs and return geometric angles of the active rods, in degrees.
    pub fn inverse_geometric(&self, target: &Point) -> Result<Joints, KinematicsError> {
        self.parameters.validate()?;
        if !target.iter().all(|c| c.is_finite()) {
            return Err(KinematicsError::InvalidGeometry(format!(
                "target must be finite (got {:?})", target
            )));
        }

        let mut angles: Joints = [0.0; LEGS];
        for (leg, angle) in angles.iter_mut().enumerate() {
            *angle = self.solve_leg(leg, target)?.theta.to_degrees();
        }
        Ok(angles)
    }
}

impl Kinematics for DeltaKinematics {
    fn inverse(&self, target: &Point) -> Result<Joints, KinematicsError> {
        self.calibration.validate()?;
        let geometric = self.inverse_geometric(target)?;
        Ok(self.calibration.joints_to_actuator(&geometric))
    }
}

/// Solve inverse kinematics for the target point with the given geometry and calibration,
/// using the default elbow down configuration. Returns actuator units.
pub fn solve(target: &Point, parameters: &Parameters, calibration: &ActuatorCalibration)
             -> Result<Joints, KinematicsError> {
    DeltaKinematics::new_with_calibration(*parameters, *calibration).inverse(target)
}
