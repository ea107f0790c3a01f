//! Celestial body definitions
//!
//! A [`CelestialBody`] is a named point mass. Its position, velocity and
//! trajectory are only ever changed by [`crate::simulator::Simulator`].

mod trajectory;

use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

pub use trajectory::{Trajectory, TrajectoryRetention};

/// Opaque RGB display color, passed through to renderers untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Components scaled to `[0, 1]` for graphics APIs
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

/// A body in the simulation
///
/// `name` is for diagnostics only and `radius` is carried for renderers; neither
/// takes part in the physics. Mass and radius are not validated here.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    /// Name of the body
    pub name: String,
    /// Mass in kg
    pub mass: f64,
    /// Radius in meters
    pub radius: f64,
    /// Display color
    pub color: Color,
    pub(crate) position: Vector3,
    pub(crate) velocity: Vector3,
    pub(crate) trajectory: Trajectory,
}

impl CelestialBody {
    /// Create a new celestial body with an unbounded trajectory
    pub fn new(
        name: &str,
        mass: f64,
        radius: f64,
        position: Vector3,
        velocity: Vector3,
        color: Color,
    ) -> Self {
        Self::with_retention(
            name,
            mass,
            radius,
            position,
            velocity,
            color,
            TrajectoryRetention::Unbounded,
        )
    }

    /// Create a new celestial body with an explicit trajectory retention policy
    pub fn with_retention(
        name: &str,
        mass: f64,
        radius: f64,
        position: Vector3,
        velocity: Vector3,
        color: Color,
        retention: TrajectoryRetention,
    ) -> Self {
        Self {
            name: name.to_string(),
            mass,
            radius,
            color,
            position,
            velocity,
            trajectory: Trajectory::new(position, retention),
        }
    }

    /// Current position in meters
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Current velocity in m/s
    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Recorded positions, oldest first
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    /// Kinetic energy `m * |v|² / 2`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.dot(self.velocity)
    }

    /// Applies one integration update and records the new position
    pub(crate) fn advance(&mut self, acceleration: Vector3, dt: f64) {
        self.velocity = self.velocity + acceleration * dt;
        self.position = self.position + self.velocity * dt;
        self.trajectory.push(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celestial_body() {
        let body = CelestialBody::new(
            "Test",
            5.0,
            1.0,
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 0.0),
            Color::BLUE,
        );
        assert_eq!(body.name, "Test");
        assert_eq!(body.position(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(body.velocity(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(body.trajectory().len(), 1);
        assert_eq!(body.trajectory().first(), Some(&body.position()));
        assert_eq!(body.trajectory().retention(), TrajectoryRetention::Unbounded);
    }

    #[test]
    fn test_advance_uses_updated_velocity() {
        let mut body = CelestialBody::new(
            "Probe",
            1.0,
            0.0,
            Vector3::zero(),
            Vector3::new(1.0, 0.0, 0.0),
            Color::WHITE,
        );
        body.advance(Vector3::new(2.0, 0.0, 0.0), 0.5);

        // v = 1 + 2*0.5 = 2, x = 0 + 2*0.5 = 1 (not 0.5, which forward Euler would give)
        assert_eq!(body.velocity(), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(body.position(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(body.trajectory().len(), 2);
        assert_eq!(body.trajectory().last(), Some(&Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_energy_and_momentum() {
        let body = CelestialBody::new(
            "Moving",
            4.0,
            0.0,
            Vector3::zero(),
            Vector3::new(3.0, 4.0, 0.0),
            Color::default(),
        );
        assert_eq!(body.momentum(), Vector3::new(12.0, 16.0, 0.0));
        assert_eq!(body.kinetic_energy(), 50.0);
    }

    #[test]
    fn test_color() {
        assert_eq!(Color::from((255, 255, 0)), Color::YELLOW);
        assert_eq!(Color::WHITE.to_unit_rgb(), [1.0, 1.0, 1.0]);
    }
}
