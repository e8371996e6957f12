//! Hardcoded parameters for known delta robots

pub mod delta_kinematics {
    use crate::parameters::delta_kinematics::{Parameters, DEFAULT_LEG_ANGLES};

    #[allow(dead_code)]
    impl Parameters {
        // Provides default values
        pub fn new() -> Self {
            Parameters {
                active_rod: 0.0,
                passive_rod: 0.0,
                base_radius: 0.0,
                ee_radius: 0.0,
                leg_angles: DEFAULT_LEG_ANGLES,
            }
        }

        /// The robot the 4-5-6-7 planner has been tuned on. Base and end effector radii
        /// correspond to equilateral anchor triangles with 0.6 m and 0.444 m sides.
        pub fn reference_delta() -> Self {
            Parameters {
                active_rod: 0.2,
                passive_rod: 0.46,
                base_radius: 0.3464101615,
                ee_radius: 0.2563435195,
                ..Self::new()
            }
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Self::new()
        }
    }
}
