//! Scenario files describing initial conditions
//!
//! A [`Scenario`] is the serializable description of a run: the bodies, the
//! step size, the number of steps and the trajectory retention cap. Scenarios
//! are stored as JSON.
//!
//! ```json
//! {
//!   "name": "Sun-Earth",
//!   "dt": 86400.0,
//!   "steps": 365,
//!   "bodies": [
//!     { "name": "Sun", "mass": 1.989e30, "radius": 6.963e8,
//!       "position": {"x": 0.0, "y": 0.0, "z": 0.0},
//!       "velocity": {"x": 0.0, "y": 0.0, "z": 0.0},
//!       "color": {"r": 255, "g": 255, "b": 0} }
//!   ]
//! }
//! ```

pub mod synthetic;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::body::{CelestialBody, Color, TrajectoryRetention};
use crate::constants::{
    AU_M, DAY_S, EARTH_MASS, EARTH_ORBITAL_SPEED, EARTH_RADIUS, SUN_MASS, SUN_RADIUS, YEAR_DAYS,
};
use crate::simulator::Simulator;
use crate::vector::Vector3;
use crate::{OrreryError, Result};

pub use synthetic::ClusterConfig;

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    pub mass: f64,
    #[serde(default)]
    pub radius: f64,
    pub position: Vector3,
    #[serde(default)]
    pub velocity: Vector3,
    #[serde(default = "default_color")]
    pub color: Color,
}

fn default_color() -> Color {
    Color::WHITE
}

impl BodySpec {
    pub fn new(name: &str, mass: f64, radius: f64, position: Vector3, velocity: Vector3) -> Self {
        Self {
            name: name.to_string(),
            mass,
            radius,
            position,
            velocity,
            color: Color::WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn to_body(&self, retention: TrajectoryRetention) -> CelestialBody {
        CelestialBody::with_retention(
            &self.name,
            self.mass,
            self.radius,
            self.position,
            self.velocity,
            self.color,
            retention,
        )
    }
}

/// A complete run description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    /// Step size in seconds
    pub dt: f64,
    /// Number of steps to run
    pub steps: u64,
    /// Maximum trajectory length per body; absent means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectory_cap: Option<usize>,
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    /// Sun at rest at the origin and Earth at 1.496e11 m moving at 29783 m/s,
    /// stepped daily for one year
    pub fn sun_earth() -> Self {
        Self {
            name: "Sun-Earth".to_string(),
            dt: DAY_S,
            steps: YEAR_DAYS,
            trajectory_cap: None,
            bodies: vec![
                BodySpec::new("Sun", SUN_MASS, SUN_RADIUS, Vector3::zero(), Vector3::zero())
                    .with_color(Color::YELLOW),
                BodySpec::new(
                    "Earth",
                    EARTH_MASS,
                    EARTH_RADIUS,
                    Vector3::new(AU_M, 0.0, 0.0),
                    Vector3::new(0.0, EARTH_ORBITAL_SPEED, 0.0),
                )
                .with_color(Color::BLUE),
            ],
        }
    }

    /// Load a scenario from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading scenario from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let scenario: Scenario = serde_json::from_reader(reader)?;
        debug!(
            "Loaded scenario '{}' with {} bodies",
            scenario.name,
            scenario.bodies.len()
        );
        Ok(scenario)
    }

    /// Parse a scenario from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the scenario as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn retention(&self) -> TrajectoryRetention {
        TrajectoryRetention::from_cap(self.trajectory_cap)
    }

    /// Checks that the scenario describes a physically meaningful run
    ///
    /// Rejects an empty body list, non-finite `dt`, non-finite vectors,
    /// non-positive or non-finite masses, negative radii and a zero cap.
    pub fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            return Err(invalid("scenario has no bodies"));
        }
        if !self.dt.is_finite() {
            return Err(invalid(format!("dt must be finite, got {}", self.dt)));
        }
        if self.trajectory_cap == Some(0) {
            return Err(invalid("trajectory_cap must be at least 1"));
        }

        for spec in &self.bodies {
            if !(spec.mass.is_finite() && spec.mass > 0.0) {
                return Err(invalid(format!(
                    "body '{}' must have a positive finite mass, got {}",
                    spec.name, spec.mass
                )));
            }
            if !(spec.radius.is_finite() && spec.radius >= 0.0) {
                return Err(invalid(format!(
                    "body '{}' must have a non-negative radius, got {}",
                    spec.name, spec.radius
                )));
            }
            if !spec.position.is_finite() || !spec.velocity.is_finite() {
                return Err(invalid(format!(
                    "body '{}' has a non-finite position or velocity",
                    spec.name
                )));
            }
        }
        Ok(())
    }

    /// Validates and builds a simulator holding the scenario's bodies in order
    pub fn build_simulator(&self) -> Result<Simulator> {
        self.validate()?;
        let retention = self.retention();
        let bodies = self
            .bodies
            .iter()
            .map(|spec| spec.to_body(retention))
            .collect();
        Ok(Simulator::new(bodies))
    }
}

fn invalid(message: impl Into<String>) -> OrreryError {
    OrreryError::InvalidScenario(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sun_earth_preset() {
        let scenario = Scenario::sun_earth();
        assert_eq!(scenario.dt, 86_400.0);
        assert_eq!(scenario.steps, 365);
        assert_eq!(scenario.bodies.len(), 2);
        assert_eq!(scenario.bodies[1].position, Vector3::new(1.496e11, 0.0, 0.0));
        assert_eq!(scenario.bodies[1].velocity, Vector3::new(0.0, 29_783.0, 0.0));
        assert!(scenario.validate().is_ok());

        let sim = scenario.build_simulator().unwrap();
        assert_eq!(sim.body(0).unwrap().name, "Sun");
        assert_eq!(sim.body(1).unwrap().color, Color::BLUE);
    }

    #[test]
    fn test_parse_with_defaults() {
        let json = r#"{
            "dt": 1.0,
            "steps": 2,
            "bodies": [
                { "name": "Rock", "mass": 10.0, "position": {"x": 1.0, "y": 2.0, "z": 3.0} }
            ]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        let rock = &scenario.bodies[0];
        assert_eq!(rock.radius, 0.0);
        assert_eq!(rock.velocity, Vector3::zero());
        assert_eq!(rock.color, Color::WHITE);
        assert_eq!(scenario.retention(), TrajectoryRetention::Unbounded);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Scenario::from_json("{ not json"),
            Err(OrreryError::Json(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_bodies() {
        let mut scenario = Scenario::sun_earth();
        scenario.bodies[1].mass = 0.0;
        assert!(matches!(
            scenario.validate(),
            Err(OrreryError::InvalidScenario(_))
        ));

        let mut scenario = Scenario::sun_earth();
        scenario.bodies[0].radius = -1.0;
        assert!(scenario.build_simulator().is_err());

        let mut scenario = Scenario::sun_earth();
        scenario.bodies[0].velocity = Vector3::new(f64::NAN, 0.0, 0.0);
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::sun_earth();
        scenario.dt = f64::INFINITY;
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::sun_earth();
        scenario.trajectory_cap = Some(0);
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::sun_earth();
        scenario.bodies.clear();
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scenario.json");

        let mut scenario = Scenario::sun_earth();
        scenario.trajectory_cap = Some(30);
        scenario.save(&path).unwrap();

        let loaded = Scenario::from_file(&path).unwrap();
        assert_eq!(loaded, scenario);
        assert_eq!(loaded.retention(), TrajectoryRetention::Capped(30));
    }

    #[test]
    fn test_save_writes_complete_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cluster.json");

        // Large enough to span several buffer flushes
        let scenario = ClusterConfig::new().with_count(200).generate().unwrap();
        scenario.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, serde_json::to_string_pretty(&scenario).unwrap());
        assert_eq!(Scenario::from_file(&path).unwrap(), scenario);
    }

    #[test]
    fn test_save_into_directory_fails() {
        let dir = tempdir().unwrap();
        let result = Scenario::sun_earth().save(dir.path());
        assert!(matches!(result, Err(OrreryError::Io(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = Scenario::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(OrreryError::Io(_))));
    }
}
