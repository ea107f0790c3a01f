//! Constants module for gravitational simulation

/// Newtonian gravitational constant in m^3 kg^-1 s^-2
pub const G: f64 = 6.674e-11;

// Astronomical distances
/// Mean Sun-Earth distance used by the reference scenario, in meters
pub const AU_M: f64 = 1.496e11;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in the reference year
pub const YEAR_DAYS: u64 = 365;

// Reference bodies
/// Solar mass in kg
pub const SUN_MASS: f64 = 1.989e30;
/// Solar radius in meters
pub const SUN_RADIUS: f64 = 6.963e8;
/// Earth mass in kg
pub const EARTH_MASS: f64 = 5.972e24;
/// Earth mean radius in meters
pub const EARTH_RADIUS: f64 = 6.371e6;
/// Earth mean orbital speed in m/s
pub const EARTH_ORBITAL_SPEED: f64 = 29_783.0;
