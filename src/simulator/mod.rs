//! Brute-force gravitational N-body simulator
//!
//! Each call to [`Simulator::step_simulation`] runs in two phases:
//!
//! 1. **Compute**: positions and masses of every body are copied into a
//!    snapshot and the net acceleration of each body is computed from it.
//!    With the `parallel` feature this phase is spread across a rayon pool.
//! 2. **Apply**: once every acceleration is known, each body's velocity is
//!    updated first and its position is then advanced with the *new* velocity
//!    (semi-implicit Euler), and the position is appended to its trajectory.
//!
//! No body is mutated until the compute phase has finished for all of them, so
//! the result does not depend on iteration order and a failed step leaves the
//! system unchanged.

mod diagnostics;
pub mod gravity;

use log::{debug, trace, warn};

use crate::body::{CelestialBody, TrajectoryRetention};
use crate::constants::G;
use crate::vector::Vector3;
use crate::{OrreryError, Result};

pub use diagnostics::Diagnostics;
use gravity::PointMass;

/// Owns a fixed set of bodies and advances them under mutual gravity
#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<CelestialBody>,
    g: f64,
    elapsed: f64,
    steps: u64,
    warned_non_finite: bool,
    warned_eviction: bool,
}

impl Simulator {
    /// Create a simulator over `bodies`; their order fixes iteration order
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        debug!("Creating simulator with {} bodies", bodies.len());
        Self {
            bodies,
            g: G,
            elapsed: 0.0,
            steps: 0,
            warned_non_finite: false,
            warned_eviction: false,
        }
    }

    /// Gravitational constant used for every force evaluation
    pub fn gravitational_constant(&self) -> f64 {
        self.g
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Body at `index`
    pub fn body(&self, index: usize) -> Result<&CelestialBody> {
        self.bodies.get(index).ok_or(OrreryError::BodyIndex {
            index,
            len: self.bodies.len(),
        })
    }

    /// First body whose name matches
    pub fn find_body(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|body| body.name == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Total simulated time in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Applies a retention policy to every body's trajectory
    pub fn set_trajectory_retention(&mut self, retention: TrajectoryRetention) {
        for body in &mut self.bodies {
            body.trajectory.set_retention(retention);
        }
    }

    /// Consumes the simulator, returning its bodies in order
    pub fn into_bodies(self) -> Vec<CelestialBody> {
        self.bodies
    }

    fn snapshot(&self) -> Vec<PointMass> {
        self.bodies
            .iter()
            .map(|body| PointMass {
                position: body.position,
                mass: body.mass,
            })
            .collect()
    }

    /// Net gravitational acceleration on the body at `index` from current state
    ///
    /// # Errors
    /// * [`OrreryError::BodyIndex`] if `index` is out of range
    /// * [`OrreryError::DivisionByZero`] if that body's mass is exactly zero
    pub fn calculate_acceleration(&self, index: usize) -> Result<Vector3> {
        self.body(index)?;
        gravity::acceleration_at(self.g, &self.snapshot(), index)
    }

    /// Force exerted on body `target` by body `source` alone
    ///
    /// Zero when the two are the same body or share a position.
    pub fn force_between(&self, target: usize, source: usize) -> Result<Vector3> {
        let target_body = self.body(target)?;
        let source_body = self.body(source)?;
        if target == source {
            return Ok(Vector3::zero());
        }

        let force = gravity::pairwise_force(
            self.g,
            &PointMass {
                position: target_body.position,
                mass: target_body.mass,
            },
            &PointMass {
                position: source_body.position,
                mass: source_body.mass,
            },
        );
        Ok(force.unwrap_or_default())
    }

    /// Accelerations for all bodies from one snapshot, in body order
    pub fn accelerations(&self) -> Result<Vec<Vector3>> {
        let snapshot = self.snapshot();
        compute_accelerations(self.g, &snapshot)
    }

    /// Advances every body by `dt` seconds
    ///
    /// `dt` is used as given: no sub-stepping, clamping or adaptivity.
    ///
    /// # Errors
    /// [`OrreryError::DivisionByZero`] if any body has zero mass. In that case
    /// no body is modified.
    pub fn step_simulation(&mut self, dt: f64) -> Result<()> {
        // Compute phase: every acceleration comes from the same snapshot
        let accelerations = self.accelerations()?;

        // Apply phase
        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            body.advance(acceleration, dt);
        }

        self.elapsed += dt;
        self.steps += 1;
        trace!("Step {} complete, t = {:.3} s", self.steps, self.elapsed);

        self.report_anomalies();
        Ok(())
    }

    /// Calls [`Simulator::step_simulation`] `steps` times with the same `dt`
    pub fn run(&mut self, steps: u64, dt: f64) -> Result<()> {
        debug!("Running {} steps with dt = {} s", steps, dt);
        for _ in 0..steps {
            self.step_simulation(dt)?;
        }
        Ok(())
    }

    fn report_anomalies(&mut self) {
        if !self.warned_non_finite {
            if let Some(body) = self.bodies.iter().find(|body| !body.position.is_finite()) {
                warn!(
                    "Body '{}' has a non-finite position after step {}",
                    body.name, self.steps
                );
                self.warned_non_finite = true;
            }
        }

        if !self.warned_eviction {
            if let Some(body) = self
                .bodies
                .iter()
                .find(|body| body.trajectory.evicted() > 0)
            {
                warn!(
                    "Trajectory cap reached for '{}'; oldest positions are now discarded",
                    body.name
                );
                self.warned_eviction = true;
            }
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn compute_accelerations(g: f64, snapshot: &[PointMass]) -> Result<Vec<Vector3>> {
    (0..snapshot.len())
        .map(|index| gravity::acceleration_at(g, snapshot, index))
        .collect()
}

#[cfg(feature = "parallel")]
fn compute_accelerations(g: f64, snapshot: &[PointMass]) -> Result<Vec<Vector3>> {
    use rayon::prelude::*;

    (0..snapshot.len())
        .into_par_iter()
        .map(|index| gravity::acceleration_at(g, snapshot, index))
        .collect()
}
