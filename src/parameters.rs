//! Defines the delta robot parameter data structure

pub mod delta_kinematics {
    use crate::kinematics_error::KinematicsError;
    use crate::utils::number;

    /// Placement of the legs around the base, degrees. The legs are 120 degrees apart.
    pub const DEFAULT_LEG_ANGLES: [f64; 3] = [0.0, 120.0, 240.0];

    /// Parameters for the kinematic model of the delta robot. All lengths are in meters.
    /// See [parameters_robots.rs](parameters_robots.rs) for concrete robot models.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// The length of the active (upper) rod that is rotated by the motor (r_f).
        pub active_rod: f64,

        /// The length of the passive (lower) rods connecting the elbow with the end effector (r_e).
        pub passive_rod: f64,

        /// The radius of the fixed base (f).
        pub base_radius: f64,

        /// The radius of the moving end effector platform (e).
        pub ee_radius: f64,

        /// Rotation of each leg around the vertical axis, in degrees. The first leg defines
        /// the global frame and is normally at 0.
        pub leg_angles: [f64; 3],
    }

    impl Parameters {
        /// Check that the geometry can be used by the solver. Rod lengths must be positive,
        /// radii must not be negative and everything must be finite.
        pub fn validate(&self) -> Result<(), KinematicsError> {
            for (name, value) in [("active_rod", self.active_rod), ("passive_rod", self.passive_rod)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(KinematicsError::InvalidGeometry(format!(
                        "{} must be positive and finite (got {})", name, value
                    )));
                }
            }
            for (name, value) in [("base_radius", self.base_radius), ("ee_radius", self.ee_radius)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(KinematicsError::InvalidGeometry(format!(
                        "{} must be non-negative and finite (got {})", name, value
                    )));
                }
            }
            if let Some(angle) = self.leg_angles.iter().find(|a| !a.is_finite()) {
                return Err(KinematicsError::InvalidGeometry(format!(
                    "leg angle must be finite (got {})", angle
                )));
            }
            Ok(())
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "delta_kinematics_geometric_parameters:\n  \
              active_rod: {}\n  \
              passive_rod: {}\n  \
              base_radius: {}\n  \
              ee_radius: {}\n  \
              leg_angles: [{}]\n",
                number(self.active_rod),
                number(self.passive_rod),
                number(self.base_radius),
                number(self.ee_radius),
                self.leg_angles.iter().map(|x| number(*x))
                    .collect::<Vec<_>>().join(", "),
            )
        }
    }
}
