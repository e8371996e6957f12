//! Supports extracting delta robot parameters from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::calibration::ActuatorCalibration;
use crate::parameter_error::ParameterError;
use crate::parameters::delta_kinematics::{Parameters, DEFAULT_LEG_ANGLES};
use crate::trajectory::PlannerConfig;

const GEOMETRY: &str = "delta_kinematics_geometric_parameters";
const CALIBRATION: &str = "actuator_calibration";
const TRAJECTORY: &str = "trajectory";

/// Read the first YAML document from the file.
fn load_yaml<P: AsRef<Path>>(path: P) -> Result<Yaml, ParameterError> {
    let contents = std::fs::read_to_string(path)?;
    parse_yaml(&contents)
}

fn parse_yaml(contents: &str) -> Result<Yaml, ParameterError> {
    let mut docs = YamlLoader::load_from_str(contents)
        .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
    if docs.is_empty() {
        return Err(ParameterError::ParseError("empty YAML document".to_string()));
    }
    Ok(docs.swap_remove(0))
}

/// Numbers may be written both as integers and as reals.
fn as_number(value: &Yaml) -> Option<f64> {
    match value {
        Yaml::Real(_) => value.as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

fn required_number(section: &Yaml, section_name: &str, key: &str) -> Result<f64, ParameterError> {
    let value = &section[key];
    if value.is_badvalue() {
        return Err(ParameterError::MissingField(format!("{}.{}", section_name, key)));
    }
    as_number(value).ok_or_else(|| ParameterError::ParseError(format!(
        "{}.{} must be a number (got {:?})", section_name, key, value
    )))
}

fn optional_number(section: &Yaml, section_name: &str, key: &str, default: f64)
                   -> Result<f64, ParameterError> {
    if section[key].is_badvalue() {
        Ok(default)
    } else {
        required_number(section, section_name, key)
    }
}

fn leg_angles(section: &Yaml) -> Result<[f64; 3], ParameterError> {
    let value = &section["leg_angles"];
    if value.is_badvalue() {
        return Ok(DEFAULT_LEG_ANGLES);
    }
    let items = value.as_vec().ok_or_else(|| ParameterError::ParseError(format!(
        "{}.leg_angles must be a list", GEOMETRY
    )))?;
    if items.len() != 3 {
        return Err(ParameterError::InvalidLength { expected: 3, found: items.len() });
    }
    let mut angles = [0.0; 3];
    for (angle, item) in angles.iter_mut().zip(items) {
        *angle = as_number(item).ok_or_else(|| ParameterError::ParseError(format!(
            "{}.leg_angles must contain numbers (got {:?})", GEOMETRY, item
        )))?;
    }
    Ok(angles)
}

impl Parameters {
    /// Read the robot geometry from YAML file. YAML file like this is supported:
    /// ```yaml
    /// delta_kinematics_geometric_parameters:
    ///   active_rod: 0.2
    ///   passive_rod: 0.46
    ///   base_radius: 0.3464101615
    ///   ee_radius: 0.2563435195
    ///   leg_angles: [0, 120, 240]
    /// ```
    /// Leg angles (degrees) are optional. The loaded geometry is validated.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        Self::from_yaml(&load_yaml(path)?)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        Self::from_yaml(&parse_yaml(contents)?)
    }

    fn from_yaml(root: &Yaml) -> Result<Self, ParameterError> {
        let gp = &root[GEOMETRY];
        if gp.is_badvalue() {
            return Err(ParameterError::MissingField(GEOMETRY.to_string()));
        }
        let parameters = Parameters {
            active_rod: required_number(gp, GEOMETRY, "active_rod")?,
            passive_rod: required_number(gp, GEOMETRY, "passive_rod")?,
            base_radius: required_number(gp, GEOMETRY, "base_radius")?,
            ee_radius: required_number(gp, GEOMETRY, "ee_radius")?,
            leg_angles: leg_angles(gp)?,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

impl ActuatorCalibration {
    /// Read the optional `actuator_calibration` section, defaults are used for anything
    /// that is not present:
    /// ```yaml
    /// actuator_calibration:
    ///   gearbox_ratio: 50
    ///   zero_offset_degrees: 47.2
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        Self::from_yaml(&load_yaml(path)?)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        Self::from_yaml(&parse_yaml(contents)?)
    }

    fn from_yaml(root: &Yaml) -> Result<Self, ParameterError> {
        let defaults = ActuatorCalibration::default();
        let section = &root[CALIBRATION];
        if section.is_badvalue() {
            return Ok(defaults);
        }
        let calibration = ActuatorCalibration {
            gearbox_ratio: optional_number(section, CALIBRATION, "gearbox_ratio", defaults.gearbox_ratio)?,
            zero_offset_degrees: optional_number(
                section, CALIBRATION, "zero_offset_degrees", defaults.zero_offset_degrees)?,
        };
        calibration.validate()?;
        Ok(calibration)
    }
}

impl PlannerConfig {
    /// Read the optional `trajectory` section (`step` in seconds, `max_samples`).
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        Self::from_yaml(&load_yaml(path)?)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        Self::from_yaml(&parse_yaml(contents)?)
    }

    fn from_yaml(root: &Yaml) -> Result<Self, ParameterError> {
        let defaults = PlannerConfig::default();
        let section = &root[TRAJECTORY];
        if section.is_badvalue() {
            return Ok(defaults);
        }
        let step = optional_number(section, TRAJECTORY, "step", defaults.step)?;
        if !step.is_finite() || step <= 0.0 {
            return Err(ParameterError::ParseError(format!(
                "{}.step must be positive (got {})", TRAJECTORY, step
            )));
        }
        let max_samples = match &section["max_samples"] {
            Yaml::BadValue => defaults.max_samples,
            Yaml::Integer(n) if *n > 0 => *n as usize,
            other => return Err(ParameterError::ParseError(format!(
                "{}.max_samples must be a positive integer (got {:?})", TRAJECTORY, other
            ))),
        };
        Ok(PlannerConfig { step, max_samples })
    }
}
