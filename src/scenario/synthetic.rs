//! Synthetic cluster generator
//!
//! Produces a reproducible [`Scenario`] with one dominant central mass and a
//! swarm of lighter bodies started on near-circular orbits around it. Useful
//! for benchmarking the O(n²) step and for stress-testing long runs.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

use super::{BodySpec, Scenario};
use crate::body::Color;
use crate::constants::{AU_M, DAY_S, G, SUN_MASS, SUN_RADIUS};
use crate::vector::Vector3;
use crate::{OrreryError, Result};

/// Configuration for synthetic cluster generation
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of orbiting bodies (the central mass is extra)
    pub count: usize,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Mass of the central body in kg
    pub central_mass: f64,
    /// Mass range for orbiting bodies in kg
    pub mass_range: (f64, f64),
    /// Orbital radius range in meters
    pub radius_range: (f64, f64),
    /// Maximum out-of-plane offset as a fraction of orbital radius
    pub thickness: f64,
    /// Step size written into the scenario
    pub dt: f64,
    /// Step count written into the scenario
    pub steps: u64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 42,
            central_mass: SUN_MASS,
            mass_range: (1.0e20, 1.0e24),
            radius_range: (0.3 * AU_M, 5.0 * AU_M),
            thickness: 0.02,
            dt: DAY_S,
            steps: 365,
        }
    }
}

impl ClusterConfig {
    /// Create a new cluster configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of orbiting bodies
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_central_mass(mut self, mass: f64) -> Self {
        self.central_mass = mass;
        self
    }

    pub fn with_mass_range(mut self, min: f64, max: f64) -> Self {
        self.mass_range = (min, max);
        self
    }

    /// Set the inner and outer orbital radius in meters
    pub fn with_radius_range(mut self, inner: f64, outer: f64) -> Self {
        self.radius_range = (inner, outer);
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the step size and step count of the generated scenario
    pub fn with_schedule(mut self, dt: f64, steps: u64) -> Self {
        self.dt = dt;
        self.steps = steps;
        self
    }

    fn check(&self) -> Result<()> {
        let (min_mass, max_mass) = self.mass_range;
        let (inner, outer) = self.radius_range;
        let all_finite = [self.central_mass, min_mass, max_mass, inner, outer]
            .iter()
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(OrreryError::InvalidScenario(format!(
                "cluster masses and radii must be finite, got central {}, mass range {:?}, radius range {:?}",
                self.central_mass, self.mass_range, self.radius_range
            )));
        }
        if !(self.central_mass > 0.0 && min_mass > 0.0 && min_mass < max_mass) {
            return Err(OrreryError::InvalidScenario(format!(
                "cluster masses must be positive with min < max, got central {} and range {:?}",
                self.central_mass, self.mass_range
            )));
        }
        if !(inner > 0.0 && inner < outer) {
            return Err(OrreryError::InvalidScenario(format!(
                "cluster radius range must satisfy 0 < inner < outer, got {:?}",
                self.radius_range
            )));
        }
        // Tilt is a fraction of the orbital radius
        if !(0.0..=1.0).contains(&self.thickness) {
            return Err(OrreryError::InvalidScenario(format!(
                "cluster thickness must be within [0, 1], got {}",
                self.thickness
            )));
        }
        if !self.dt.is_finite() {
            return Err(OrreryError::InvalidScenario(format!(
                "cluster dt must be finite, got {}",
                self.dt
            )));
        }
        Ok(())
    }

    /// Generate a scenario with the configured parameters
    pub fn generate(&self) -> Result<Scenario> {
        self.check()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mass_dist = Uniform::new(self.mass_range.0, self.mass_range.1);
        let radius_dist = Uniform::new(self.radius_range.0, self.radius_range.1);
        let angle_dist = Uniform::new(0.0, 2.0 * PI);
        let tilt_dist = Uniform::new_inclusive(-self.thickness, self.thickness);

        let mut bodies = Vec::with_capacity(self.count + 1);
        bodies.push(
            BodySpec::new(
                "Center",
                self.central_mass,
                SUN_RADIUS,
                Vector3::zero(),
                Vector3::zero(),
            )
            .with_color(Color::YELLOW),
        );

        for id in 1..=self.count {
            let radius = radius_dist.sample(&mut rng);
            let angle = angle_dist.sample(&mut rng);
            let height = radius * tilt_dist.sample(&mut rng);
            let mass = mass_dist.sample(&mut rng);

            // Circular speed around the central mass alone
            let speed = (G * self.central_mass / radius).sqrt();
            let position = Vector3::new(radius * angle.cos(), radius * angle.sin(), height);
            let velocity = Vector3::new(-speed * angle.sin(), speed * angle.cos(), 0.0);

            // Shade from blue (inner) to red (outer)
            let t = (radius - self.radius_range.0) / (self.radius_range.1 - self.radius_range.0);
            let color = Color::new((255.0 * t) as u8, 96, (255.0 * (1.0 - t)) as u8);

            bodies.push(
                BodySpec::new(&format!("Body {}", id), mass, 0.0, position, velocity)
                    .with_color(color),
            );
        }

        Ok(Scenario {
            name: format!("Synthetic cluster (n={}, seed={})", self.count, self.seed),
            dt: self.dt,
            steps: self.steps,
            trajectory_cap: None,
            bodies,
        })
    }
}
