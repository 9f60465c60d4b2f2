//! # Orbital Mechanics
//!
//! Kepler's third law for a body orbiting a much heavier central mass,
//! solved for each of its three quantities.
//!
//! T² = 4π²·a³ / (G·M)
//!
//! The orbiting body's own mass is neglected (M + m ≈ M).

use std::f64::consts::PI;

/// Orbital period: T = √(4π²a³ / GM)
#[inline]
pub fn orbital_period(semi_major_axis: f64, central_mass: f64, g: f64) -> f64 {
    (4.0 * PI * PI * semi_major_axis.powi(3) / (g * central_mass)).sqrt()
}

/// Semi-major axis: a = ∛(GMT² / 4π²)
#[inline]
pub fn semi_major_axis(period: f64, central_mass: f64, g: f64) -> f64 {
    (g * central_mass * period * period / (4.0 * PI * PI)).cbrt()
}

/// Central mass: M = 4π²a³ / (GT²)
#[inline]
pub fn central_mass(period: f64, semi_major_axis: f64, g: f64) -> f64 {
    4.0 * PI * PI * semi_major_axis.powi(3) / (g * period * period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITATIONAL_CONSTANT as G;

    const AU: f64 = 1.496e11;
    const SOLAR_MASS: f64 = 1.989e30;
    const YEAR: f64 = 31_557_600.0;

    #[test]
    fn test_earth_year() {
        let t = orbital_period(AU, SOLAR_MASS, G);
        assert!((t / YEAR - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_inverse_forms_agree() {
        let t = orbital_period(AU, SOLAR_MASS, G);
        assert!((semi_major_axis(t, SOLAR_MASS, G) / AU - 1.0).abs() < 1e-12);
        assert!((central_mass(t, AU, G) / SOLAR_MASS - 1.0).abs() < 1e-12);
    }
}
