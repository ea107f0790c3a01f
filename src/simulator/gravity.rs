//! Newtonian gravity kernel
//!
//! Pure functions over a position/mass snapshot. Nothing here touches a
//! [`crate::body::CelestialBody`], which is what lets the compute phase of a
//! step run against one frozen view of the system.

use crate::vector::Vector3;
use crate::{OrreryError, Result};

/// Position and mass of one body, frozen at the start of a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub position: Vector3,
    pub mass: f64,
}

/// Gravitational force exerted on `target` by `source`
///
/// Returns `None` when the two positions coincide exactly; that pair
/// contributes nothing rather than dividing by zero.
///
/// # Arguments
/// * `g` - Gravitational constant
/// * `target` - Body the force acts on
/// * `source` - Body exerting the force
///
/// # Returns
/// Force vector in newtons pointing from `target` toward `source`
#[inline]
pub fn pairwise_force(g: f64, target: &PointMass, source: &PointMass) -> Option<Vector3> {
    let r_vec = source.position - target.position;
    let r_mag = r_vec.magnitude();

    if r_mag == 0.0 {
        return None;
    }

    // F = G * m1 * m2 / r², evaluated left to right
    let force_magnitude = (g * target.mass * source.mass) / r_mag.powi(2);
    let unit_vector = r_vec.normalize();

    Some(unit_vector * force_magnitude)
}

/// Net acceleration on the body at `index` within `snapshot`
///
/// Forces from every other entry are summed in snapshot order, skipping
/// `index` itself by position in the slice (two distinct entries with
/// identical state are both counted). The total force is divided by the
/// target mass at the end.
///
/// # Errors
/// [`OrreryError::BodyIndex`] if `index` is outside `snapshot`, and
/// [`OrreryError::DivisionByZero`] if the target mass is exactly zero.
pub fn acceleration_at(g: f64, snapshot: &[PointMass], index: usize) -> Result<Vector3> {
    let target = snapshot.get(index).ok_or(OrreryError::BodyIndex {
        index,
        len: snapshot.len(),
    })?;
    let mut total_force = Vector3::zero();

    for (other_index, source) in snapshot.iter().enumerate() {
        if other_index == index {
            continue;
        }
        if let Some(force) = pairwise_force(g, target, source) {
            total_force = total_force + force;
        }
    }

    total_force.divide(target.mass)
}
