//! Helper functions

use crate::kinematic_traits::Joints;
use crate::motion_profile::MotionProfile;

/// Degrees per second in one RPM.
pub const DEGREES_PER_SECOND_IN_RPM: f64 = 6.0;

/// Checks if all elements in the array are finite
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Motor speed limit in RPM to angular velocity in degrees per second.
pub fn rpm_to_degrees_per_second(rpm: f64) -> f64 {
    rpm * DEGREES_PER_SECOND_IN_RPM
}

/// Angular velocity in degrees per second to RPM.
pub fn degrees_per_second_to_rpm(velocity: f64) -> f64 {
    velocity / DEGREES_PER_SECOND_IN_RPM
}

/// Rounds to the given number of decimal places. Rounding works on the exact decimal
/// expansion of the value, ties go to the even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Shortest representation that reads back as the same value. Whole numbers keep
/// the trailing ".0" so that they stay float literals in C and YAML.
pub fn number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Print joint values in actuator units.
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..3 {
        row_str.push_str(&format!("{:9.3} ", joints[joint_idx]));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print the summary of the profile and every n-th sample.
pub fn dump_profile(profile: &MotionProfile, every: usize) {
    if profile.is_empty() {
        println!("Empty profile");
        return;
    }
    println!("duration {:.4} s, {} samples, step {} s", profile.duration(), profile.len(), profile.step());
    for sample in profile.iter().step_by(every.max(1)) {
        println!(
            "t {:7.4}  angles [{:9.3} {:9.3} {:9.3}]  velocities [{:9.3} {:9.3} {:9.3}]",
            sample.time,
            sample.angles[0], sample.angles[1], sample.angles[2],
            sample.velocities[0], sample.velocities[1], sample.velocities[2]
        );
    }
}
