//! Errors reported by the solver and the planner

/// Reason why a planning request has been rejected. No partial results are ever returned
/// together with the error.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// The target has no elbow solution for this leg (index 0, 1 or 2).
    GeometryUnreachable { leg: usize },
    /// Degenerate robot geometry, calibration or target that cannot be solved at all.
    InvalidGeometry(String),
    /// Duration of the movement cannot be computed or is not positive.
    InvalidTrajectory(String),
    /// The trajectory would need more samples than allowed by the planner configuration.
    TooManySamples { samples: usize, limit: usize },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::GeometryUnreachable { leg } =>
                write!(f, "Target unreachable: no solution for leg {}", leg + 1),
            KinematicsError::InvalidGeometry(ref msg) =>
                write!(f, "Invalid geometry: {}", msg),
            KinematicsError::InvalidTrajectory(ref msg) =>
                write!(f, "Invalid trajectory: {}", msg),
            KinematicsError::TooManySamples { samples, limit } =>
                write!(f, "Trajectory needs {} samples, only {} allowed", samples, limit),
        }
    }
}

impl std::error::Error for KinematicsError {}
