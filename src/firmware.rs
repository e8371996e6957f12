//! Export of the velocity profile as C arrays for the motor controller firmware.
//!
//! Every leg produces one line, velocities in RPM rounded to 4 decimals:
//! ```text
//! float speeds_motor1[] = {0.0,0.0012,0.0098,...};
//! ```

use std::io::{self, Write};
use crate::kinematic_traits::LEGS;
use crate::motion_profile::MotionProfile;
use crate::utils::{degrees_per_second_to_rpm, number, round_to};

pub const DEFAULT_ARRAY_PREFIX: &str = "speeds_motor";

/// Decimal places kept in the exported values.
pub const DECIMALS: usize = 4;

/// Single `float name[] = {...};` line.
pub fn float_array(name: &str, values: &[f64]) -> String {
    let body = values.iter()
        .map(|v| number(round_to(*v, DECIMALS)))
        .collect::<Vec<_>>()
        .join(",");
    format!("float {}[] = {{{}}};\n", name, body)
}

/// Velocity arrays of all legs, named `prefix1`, `prefix2` and `prefix3`.
pub fn velocity_arrays(profile: &MotionProfile, prefix: &str) -> String {
    (0..LEGS)
        .map(|leg| {
            let rpm: Vec<f64> = profile.velocities(leg).into_iter()
                .map(degrees_per_second_to_rpm)
                .collect();
            float_array(&format!("{}{}", prefix, leg + 1), &rpm)
        })
        .collect()
}

pub fn write_velocity_arrays<W: Write>(writer: &mut W, profile: &MotionProfile, prefix: &str)
                                       -> io::Result<()> {
    writer.write_all(velocity_arrays(profile, prefix).as_bytes())?;
    writer.flush()
}
