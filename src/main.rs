use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;

use rs_delta_kinematics::calibration::ActuatorCalibration;
use rs_delta_kinematics::firmware::{write_velocity_arrays, DEFAULT_ARRAY_PREFIX};
use rs_delta_kinematics::kinematic_traits::{Kinematics, Point};
use rs_delta_kinematics::kinematics_impl::{DeltaKinematics, Elbow};
use rs_delta_kinematics::parameters::delta_kinematics::Parameters;
use rs_delta_kinematics::point_to_point::PointToPoint;
use rs_delta_kinematics::trajectory::PlannerConfig;
use rs_delta_kinematics::utils::{dump_joints, dump_profile, rpm_to_degrees_per_second};

/// Plans point to point movement of the delta robot end effector with the 4-5-6-7 profile.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Start position of the end effector, meters: x,y,z
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    from: Vec<f64>,

    /// End position of the end effector, meters: x,y,z
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    to: Vec<f64>,

    /// YAML file with geometry, calibration and trajectory settings.
    /// The reference robot is used if not given.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Motor speed limit, RPM
    #[arg(long, default_value_t = 405.0)]
    max_rpm: f64,

    /// Start from the home position (all active rods horizontal) instead of --from
    #[arg(long)]
    from_home: bool,

    /// Use the elbow up assembly configuration
    #[arg(long)]
    elbow_up: bool,

    /// Append velocity arrays for the firmware to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Name prefix of the exported arrays
    #[arg(long, default_value = DEFAULT_ARRAY_PREFIX)]
    prefix: String,

    /// Print every n-th sample of the profile
    #[arg(long, default_value_t = 100)]
    print_every: usize,
}

fn point(values: &[f64], name: &str) -> Result<Point> {
    ensure!(values.len() == 3, "--{} needs exactly three coordinates x,y,z, got {}", name, values.len());
    Ok(Point::new(values[0], values[1], values[2]))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let (parameters, calibration, config) = match &args.config {
        Some(path) => (
            Parameters::from_yaml_file(path)
                .with_context(|| format!("Failed to read geometry from {}", path.display()))?,
            ActuatorCalibration::from_yaml_file(path)
                .with_context(|| format!("Failed to read calibration from {}", path.display()))?,
            PlannerConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to read trajectory settings from {}", path.display()))?,
        ),
        None => (Parameters::reference_delta(), ActuatorCalibration::default(), PlannerConfig::default()),
    };
    info!("Robot:\n{}", parameters.to_yaml());

    let elbow = if args.elbow_up { Elbow::Up } else { Elbow::Down };
    let robot = Arc::new(DeltaKinematics::new_with_calibration(parameters, calibration).with_elbow(elbow));
    let mover = PointToPoint::new(robot.clone(), config);
    let max_velocity = rpm_to_degrees_per_second(args.max_rpm);
    let end = point(&args.to, "to")?;

    let started = Instant::now();
    let planned = if args.from_home {
        mover.plan_from(&calibration.home(), &end, max_velocity)
    } else {
        let start = point(&args.from, "from")?;
        mover.plan(&start, &end, max_velocity)
    };
    let profile = planned.context("Planning failed")?;
    info!("Planned in {:?}", started.elapsed());

    println!("Final joints:");
    dump_joints(&robot.inverse(&end)?);
    dump_profile(&profile, args.print_every);

    if let Some(path) = &args.output {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        write_velocity_arrays(&mut file, &profile, &args.prefix)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Velocity arrays appended to {}", path.display());
    }
    Ok(())
}
