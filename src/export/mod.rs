//! JSON export of simulation state for external renderers
//!
//! A [`SimulationSnapshot`] carries what a renderer reads after each tick:
//! every body's name, color, radius, current position and velocity, and
//! optionally the recorded trajectory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::body::{CelestialBody, Color};
use crate::simulator::Simulator;
use crate::vector::Vector3;
use crate::Result;

/// Exported state of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub color: Color,
    pub position: Vector3,
    pub velocity: Vector3,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trajectory: Vec<Vector3>,
}

impl BodySnapshot {
    fn from_body(body: &CelestialBody, include_trajectory: bool) -> Self {
        Self {
            name: body.name.clone(),
            mass: body.mass,
            radius: body.radius,
            color: body.color,
            position: body.position(),
            velocity: body.velocity(),
            trajectory: if include_trajectory {
                body.trajectory().to_vec()
            } else {
                Vec::new()
            },
        }
    }
}

/// Exported state of a whole simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Free-form description, including the creation date
    pub description: String,
    pub steps: u64,
    pub elapsed: f64,
    pub bodies: Vec<BodySnapshot>,
}

impl SimulationSnapshot {
    /// Captures the simulator's current state
    pub fn capture(simulator: &Simulator, include_trajectories: bool) -> Self {
        let description = format!(
            "{} bodies after {} steps, exported on {}",
            simulator.len(),
            simulator.steps(),
            chrono::Local::now().format("%Y-%m-%d")
        );
        Self {
            description,
            steps: simulator.steps(),
            elapsed: simulator.elapsed(),
            bodies: simulator
                .bodies()
                .iter()
                .map(|body| BodySnapshot::from_body(body, include_trajectories))
                .collect(),
        }
    }

    /// Writes pretty-printed JSON to any writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a snapshot back from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

/// Captures `simulator` and writes it to `path` as JSON
pub fn write_json<P: AsRef<Path>>(
    simulator: &Simulator,
    path: P,
    include_trajectories: bool,
) -> Result<()> {
    let path = path.as_ref();
    let snapshot = SimulationSnapshot::capture(simulator, include_trajectories);
    let mut writer = BufWriter::new(File::create(path)?);
    snapshot.write_to(&mut writer)?;
    writer.flush()?;
    debug!(
        "Exported {} bodies to {}",
        snapshot.bodies.len(),
        path.display()
    );
    Ok(())
}
