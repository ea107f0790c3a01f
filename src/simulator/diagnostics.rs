//! Conserved-quantity diagnostics for a running simulation

use serde::Serialize;

use super::Simulator;
use crate::vector::Vector3;
use crate::Result;

/// Point-in-time summary of global quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Completed steps
    pub steps: u64,
    /// Simulated seconds
    pub elapsed: f64,
    /// Sum of `m|v|²/2` in joules
    pub kinetic_energy: f64,
    /// Sum of `-G m_i m_j / r` over distinct pairs, in joules
    pub potential_energy: f64,
    /// Total linear momentum in kg·m/s
    pub momentum: Vector3,
    /// Mass-weighted mean position
    pub center_of_mass: Vector3,
}

impl Diagnostics {
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}

impl Simulator {
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|body| body.kinetic_energy()).sum()
    }

    /// Gravitational potential energy; coincident pairs are skipped
    pub fn potential_energy(&self) -> f64 {
        let mut energy = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                let r = (b.position - a.position).magnitude();
                if r == 0.0 {
                    continue;
                }
                energy -= self.g * a.mass * b.mass / r;
            }
        }
        energy
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn total_momentum(&self) -> Vector3 {
        self.bodies
            .iter()
            .fold(Vector3::zero(), |acc, body| acc + body.momentum())
    }

    /// Mass-weighted mean position
    ///
    /// # Errors
    /// [`crate::OrreryError::DivisionByZero`] when the total mass is zero,
    /// which includes an empty simulator.
    pub fn center_of_mass(&self) -> Result<Vector3> {
        let total_mass: f64 = self.bodies.iter().map(|body| body.mass).sum();
        let weighted = self
            .bodies
            .iter()
            .fold(Vector3::zero(), |acc, body| acc + body.position * body.mass);
        weighted.divide(total_mass)
    }

    pub fn diagnostics(&self) -> Result<Diagnostics> {
        Ok(Diagnostics {
            steps: self.steps,
            elapsed: self.elapsed,
            kinetic_energy: self.kinetic_energy(),
            potential_energy: self.potential_energy(),
            momentum: self.total_momentum(),
            center_of_mass: self.center_of_mass()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{CelestialBody, Color};
    use crate::OrreryError;
    use approx::assert_relative_eq;

    fn pair() -> Simulator {
        Simulator::new(vec![
            CelestialBody::new(
                "Heavy",
                3.0,
                0.0,
                Vector3::zero(),
                Vector3::new(0.0, 1.0, 0.0),
                Color::WHITE,
            ),
            CelestialBody::new(
                "Light",
                1.0,
                0.0,
                Vector3::new(4.0, 0.0, 0.0),
                Vector3::new(0.0, -3.0, 0.0),
                Color::WHITE,
            ),
        ])
    }

    #[test]
    fn test_center_of_mass() {
        let sim = pair();
        assert_eq!(sim.center_of_mass().unwrap(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_momentum_and_energy() {
        let sim = pair();
        assert_eq!(sim.total_momentum(), Vector3::zero());
        assert_eq!(sim.kinetic_energy(), 1.5 + 4.5);
        assert_relative_eq!(
            sim.potential_energy(),
            -sim.gravitational_constant() * 3.0 / 4.0,
            max_relative = 1e-15
        );

        let diagnostics = sim.diagnostics().unwrap();
        assert_relative_eq!(
            diagnostics.total_energy(),
            sim.total_energy(),
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_empty_center_of_mass_fails() {
        let sim = Simulator::new(Vec::new());
        assert!(matches!(
            sim.center_of_mass(),
            Err(OrreryError::DivisionByZero)
        ));
    }
}
