//! Point to point movement of the end effector.
//!
//! Both end points are converted into actuator angles with the inverse kinematics first. If
//! either of them cannot be reached, nothing is planned. The angles are then connected with
//! the septic (4-5-6-7) profile that respects the velocity limit.

use std::sync::Arc;
use crate::kinematic_traits::{Joints, Kinematics, Point};
use crate::kinematics_error::KinematicsError;
use crate::motion_profile::MotionProfile;
use crate::trajectory::{PlannerConfig, TrajectoryPlanner, TrajectorySpec};
use tracing::debug;

#[derive(Clone)]
pub struct PointToPoint {
    /// Robot used to resolve the end points.
    pub robot: Arc<dyn Kinematics>,

    pub planner: TrajectoryPlanner,
}

impl PointToPoint {
    pub fn new(robot: Arc<dyn Kinematics>, config: PlannerConfig) -> Self {
        PointToPoint {
            robot,
            planner: TrajectoryPlanner::new(config),
        }
    }

    /// Resolve both end points into actuator angles.
    pub fn resolve(&self, start: &Point, end: &Point) -> Result<(Joints, Joints), KinematicsError> {
        let start_joints = self.robot.inverse(start)?;
        let end_joints = self.robot.inverse(end)?;
        debug!("resolved {:?} -> {:?}", start_joints, end_joints);
        Ok((start_joints, end_joints))
    }

    /// Build the trajectory spec for moving between two points.
    pub fn spec(&self, start: &Point, end: &Point, max_velocity: f64)
                -> Result<TrajectorySpec, KinematicsError> {
        let (start_joints, end_joints) = self.resolve(start, end)?;
        Ok(TrajectorySpec::new(start_joints, end_joints, max_velocity))
    }

    /// Plan the movement from start to end point. `max_velocity` is in actuator units per
    /// second.
    pub fn plan(&self, start: &Point, end: &Point, max_velocity: f64)
                -> Result<MotionProfile, KinematicsError> {
        self.planner.plan(&self.spec(start, end, max_velocity)?)
    }

    /// Plan the movement from already known actuator angles (like the home position)
    /// to the end point.
    pub fn plan_from(&self, start: &Joints, end: &Point, max_velocity: f64)
                     -> Result<MotionProfile, KinematicsError> {
        let end_joints = self.robot.inverse(end)?;
        self.planner.plan(&TrajectorySpec::new(*start, end_joints, max_velocity))
    }
}
