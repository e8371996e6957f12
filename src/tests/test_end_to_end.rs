#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::calibration::ActuatorCalibration;
    use crate::firmware::{velocity_arrays, DEFAULT_ARRAY_PREFIX};
    use crate::kinematic_traits::{Joints, Kinematics, Point};
    use crate::kinematics_impl::DeltaKinematics;
    use crate::parameters::delta_kinematics::Parameters;
    use crate::point_to_point::PointToPoint;
    use crate::trajectory::PlannerConfig;
    use crate::utils::{dump_joints, is_valid, rpm_to_degrees_per_second};

    const START_JOINTS: Joints = [3865.675136819957, 2147.2732336602066, 2147.2732336602057];
    const END_JOINTS: Joints = [2395.3668523687284, 2045.055736769313, 2742.536023665091];

    fn reference_robot() -> Arc<DeltaKinematics> {
        let parameters = Parameters {
            active_rod: 0.2,
            passive_rod: 0.46,
            base_radius: 0.3464101615,
            ee_radius: 0.2563435195,
            ..Parameters::new()
        };
        Arc::new(DeltaKinematics::new(parameters))
    }

    fn assert_joints(actual: &Joints, expected: &Joints) {
        for (a, e) in actual.iter().zip(expected) {
            if (a - e).abs() > 1E-6 {
                dump_joints(actual);
                dump_joints(expected);
                panic!("Joints differ");
            }
        }
    }

    #[test]
    fn test_reference_endpoints() {
        let robot = reference_robot();
        let start = robot.inverse(&Point::new(0.0, 0.15, -0.4)).unwrap();
        let end = robot.inverse(&Point::new(0.05, 0.0, -0.40)).unwrap();
        assert!(is_valid(&start));
        assert!(is_valid(&end));
        assert_joints(&start, &START_JOINTS);
        assert_joints(&end, &END_JOINTS);
    }

    #[test]
    fn test_reference_movement() {
        let mover = PointToPoint::new(reference_robot(), PlannerConfig::default());
        let max_velocity = rpm_to_degrees_per_second(4050.0 * 0.1);
        let profile = mover.plan(&Point::new(0.0, 0.15, -0.4), &Point::new(0.05, 0.0, -0.40), max_velocity)
            .expect("reference movement must be planned");

        assert!(profile.duration() > 0.0);
        assert!((profile.duration() - 1.323579988574923).abs() < 1E-9);
        assert_eq!(profile.len(), (profile.duration() * 1000.0).floor() as usize);
        assert_eq!(profile.len(), 1323);

        let first = profile.first().unwrap();
        assert_eq!(first.tau, 0.0);
        assert_joints(&first.angles, &START_JOINTS);

        let last = profile.last().unwrap();
        assert!(last.tau < 1.0);
        for j in 0..3 {
            assert!((last.angles[j] - END_JOINTS[j]).abs() < 1E-6);
        }

        for peak in profile.peak_velocities() {
            assert!(peak <= max_velocity + 1E-9);
        }
    }

    #[test]
    fn test_movement_from_home() {
        // Start with all active rods horizontal, as the firmware does after homing
        let mover = PointToPoint::new(reference_robot(), PlannerConfig::default());
        let home = ActuatorCalibration::default().home();
        let profile = mover.plan_from(&home, &Point::new(0.05, 0.0, -0.40), 2430.0).unwrap();

        assert!((profile.duration() - 0.34436113241456223).abs() < 1E-9);
        assert_eq!(profile.len(), 344);
        assert_eq!(profile.first().unwrap().angles, home);

        let text = velocity_arrays(&profile, DEFAULT_ARRAY_PREFIX);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for (j, line) in lines.iter().enumerate() {
            let prefix = format!("float speeds_motor{}[] = {{", j + 1);
            assert!(line.starts_with(&prefix));
            let body = &line[prefix.len()..line.len() - 2];
            assert_eq!(body.split(',').count(), 344);
            // Four decimals at most
            for value in body.split(',') {
                let decimals = value.split('.').nth(1).map_or(0, |d| d.len());
                assert!(decimals <= 4, "{}", value);
            }
        }
    }
}
