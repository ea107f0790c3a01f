//! Orrery: brute-force gravitational N-body simulation
//!
//! This crate advances a fixed set of point masses under mutual Newtonian
//! gravity and records each body's trajectory, ready to be drawn by an
//! external renderer.
//!
//! ```rust
//! use orrery::scenario::Scenario;
//!
//! let mut sim = Scenario::sun_earth().build_simulator().unwrap();
//! sim.run(10, 86_400.0).unwrap();
//! assert_eq!(sim.body(1).unwrap().trajectory().len(), 11);
//! ```

use thiserror::Error;

pub mod body;
pub mod constants;
pub mod export;
pub mod scenario;
pub mod simulator;
pub mod vector;

// Re-export commonly used types
pub use body::{CelestialBody, Color, Trajectory, TrajectoryRetention};
pub use scenario::Scenario;
pub use simulator::Simulator;
pub use vector::Vector3;

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Body index {index} out of range for {len} bodies")]
    BodyIndex { index: usize, len: usize },

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;
