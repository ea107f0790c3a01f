//! # Three-dimensional vector algebra
//!
//! [`Vector3`] is the value type every piece of simulation state is built on:
//! positions, velocities, forces and accelerations.
//!
//! ## Value semantics
//!
//! All operations take `self` by value (the type is `Copy`) and return a new
//! vector. Nothing in this module mutates its operands.
//!
//! ## Degenerate cases
//!
//! - [`Vector3::normalize`] returns the zero vector for a zero-magnitude input
//!   instead of producing `NaN` components.
//! - [`Vector3::divide`] fails with [`OrreryError::DivisionByZero`] when the
//!   scalar is exactly zero. There is deliberately no `Div` operator impl so the
//!   failure cannot be bypassed.
//!
//! ## Examples
//!
//! ```rust
//! use orrery::vector::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(a.divide(2.0).unwrap(), Vector3::new(0.5, 1.0, 1.5));
//! assert!(a.divide(0.0).is_err());
//! ```

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::{OrreryError, Result};

/// Three-dimensional Cartesian vector with `f64` components
///
/// Components are stored exactly as given. The struct serializes as
/// `{"x": .., "y": .., "z": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::vector::Vector3;
    ///
    /// let v = Vector3::new(1.0, 0.0, 0.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 0.0);
    /// assert_eq!(v.z, 0.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    /// Component-wise sum
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    /// Component-wise difference `self - other`
    pub fn subtract(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Multiplies every component by `scalar`
    pub fn scale(self, scalar: f64) -> Vector3 {
        Vector3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }

    /// Divides every component by `scalar`
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::DivisionByZero`] when `scalar` is exactly `0.0`
    /// (either sign). Any other divisor, including subnormals, is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::vector::Vector3;
    /// use orrery::OrreryError;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert!(matches!(v.divide(0.0), Err(OrreryError::DivisionByZero)));
    /// ```
    pub fn divide(self, scalar: f64) -> Result<Vector3> {
        if scalar == 0.0 {
            return Err(OrreryError::DivisionByZero);
        }
        Ok(Vector3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        })
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::vector::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// A zero-magnitude input yields the zero vector rather than `NaN`s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::vector::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// assert_eq!(Vector3::zero().normalize(), Vector3::zero());
    /// ```
    pub fn normalize(self) -> Vector3 {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Vector3::zero();
        }
        Vector3 {
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Dot product `x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// True when every component is finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Components as an `(x, y, z)` tuple, the shape renderers consume
    pub fn to_tuple(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Converts to nalgebra `Vector3<f64>` for linear algebra operations
    ///
    /// ```rust
    /// use orrery::vector::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0).to_nalgebra();
    /// assert_eq!(v.y, 2.0);
    /// ```
    pub fn to_nalgebra(self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra `Vector3<f64>`
    pub fn from_nalgebra(vec: na::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<na::Vector3<f64>> for Vector3 {
    fn from(vec: na::Vector3<f64>) -> Self {
        Vector3::from_nalgebra(vec)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(vec: Vector3) -> Self {
        vec.to_nalgebra()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

// Operator forms of the named methods. Division is intentionally absent.
impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::add(self, other)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        self.subtract(other)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.scale(scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec.scale(self)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6e}, {:.6e}, {:.6e})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Vector3::default(), Vector3::zero());
    }

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vector3::new(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(Vector3::zero().magnitude(), 0.0);
        assert_eq!(Vector3::new(-2.0, -3.0, -6.0).magnitude(), 7.0);
    }

    #[test]
    fn test_normalize() {
        let normalized = Vector3::new(3.0, 4.0, 0.0).normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-15);
        assert!((normalized.x - 0.6).abs() < 1e-15);
        assert!((normalized.y - 0.8).abs() < 1e-15);
        assert_eq!(normalized.z, 0.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vector3::zero().normalize();
        assert_eq!(zero, Vector3::zero());
        assert!(zero.is_finite());

        // Negative zero still counts as zero magnitude
        let neg_zero = Vector3::new(-0.0, 0.0, -0.0).normalize();
        assert_eq!(neg_zero, Vector3::zero());
    }

    #[test]
    fn test_divide() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.divide(2.0).unwrap(), Vector3::new(0.5, 1.0, 1.5));
        assert!(matches!(v.divide(0.0), Err(OrreryError::DivisionByZero)));
        assert!(matches!(v.divide(-0.0), Err(OrreryError::DivisionByZero)));

        // Tiny but nonzero divisors are allowed
        assert!(v.divide(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let _ = a + b;
        let _ = a - b;
        let _ = a * 3.0;
        let _ = a.divide(4.0);
        let _ = a.normalize();
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        // Operators agree with the named methods
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * 0.5, a.scale(0.5));
    }

    #[test]
    fn test_dot_and_cross() {
        let x_axis = Vector3::new(1.0, 0.0, 0.0);
        let y_axis = Vector3::new(0.0, 1.0, 0.0);
        let z_axis = Vector3::new(0.0, 0.0, 1.0);

        assert_eq!(x_axis.dot(y_axis), 0.0);
        assert_eq!(x_axis.dot(Vector3::new(2.0, 0.0, 0.0)), 2.0);

        // Right-hand rule
        assert_eq!(x_axis.cross(y_axis), z_axis);
        assert_eq!(y_axis.cross(z_axis), x_axis);
        assert_eq!(z_axis.cross(x_axis), y_axis);
    }

    #[test]
    fn test_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.to_tuple(), (1.0, 2.0, 3.0));
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), v);

        let na_vec: na::Vector3<f64> = v.into();
        assert_eq!(na_vec.z, 3.0);
        assert_eq!(Vector3::from(na_vec), v);
    }

    #[test]
    fn test_serde_shape() {
        let v = Vector3::new(1.5, -2.0, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0,"z":0.0}"#);
    }
}
