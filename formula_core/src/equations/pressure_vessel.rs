//! # Thin-Walled Pressure Vessel Formulas
//!
//! Membrane stresses in a closed thin-walled cylinder under internal
//! pressure, and the strains they produce in a linear elastic wall.
//!
//! ## Notation
//!
//! - `p` = Internal (gauge) pressure
//! - `r` = Mean radius
//! - `t` = Wall thickness
//! - `E` = Young's modulus
//! - `ν` = Poisson's ratio
//!
//! ## Sign Conventions
//!
//! Tension positive. The radial stress varies through the wall from −p at
//! the inner surface to 0 at the outer surface and is taken as −p.
//!
//! ## Validity
//!
//! Membrane theory holds when the wall is thin relative to the radius,
//! conventionally d/t ≥ 20.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 13.1

use serde::{Deserialize, Serialize};

/// Circumferential (hoop) stress: σ_h = p·r / t
#[inline]
pub fn hoop_stress(pressure: f64, radius: f64, thickness: f64) -> f64 {
    pressure * radius / thickness
}

/// Longitudinal (axial) stress in a closed-end cylinder: σ_a = p·r / 2t
#[inline]
pub fn axial_stress(pressure: f64, radius: f64, thickness: f64) -> f64 {
    pressure * radius / (2.0 * thickness)
}

/// Radial stress at the inner surface: σ_r = −p
#[inline]
pub fn radial_stress(pressure: f64) -> f64 {
    -pressure
}

/// Diameter-to-thickness ratio: d/t = 2r/t
#[inline]
pub fn diameter_thickness_ratio(radius: f64, thickness: f64) -> f64 {
    2.0 * radius / thickness
}

/// Strains along the three principal directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalStrains {
    pub hoop: f64,
    pub axial: f64,
    pub radial: f64,
}

/// Generalized Hooke's law for the three principal stresses.
///
/// # Formulas
/// - ε_h = (σ_h − ν(σ_a + σ_r)) / E
/// - ε_a = (σ_a − ν(σ_h + σ_r)) / E
/// - ε_r = (σ_r − ν(σ_h + σ_a)) / E
pub fn principal_strains(hoop: f64, axial: f64, radial: f64, youngs_modulus: f64, poisson: f64) -> PrincipalStrains {
    PrincipalStrains {
        hoop: (hoop - poisson * (axial + radial)) / youngs_modulus,
        axial: (axial - poisson * (hoop + radial)) / youngs_modulus,
        radial: (radial - poisson * (hoop + axial)) / youngs_modulus,
    }
}

/// Growth of the radius under hoop strain: u = ε_h·r
#[inline]
pub fn radial_displacement(hoop_strain: f64, radius: f64) -> f64 {
    hoop_strain * radius
}

/// Minimum wall for an allowable hoop stress: t = p·r / σ_allow
#[inline]
pub fn required_thickness(pressure: f64, radius: f64, allowable_stress: f64) -> f64 {
    pressure * radius / allowable_stress
}

/// Pressure that brings the hoop stress to `allowable_stress`: p = σ·t / r
#[inline]
pub fn pressure_at_stress(allowable_stress: f64, radius: f64, thickness: f64) -> f64 {
    allowable_stress * thickness / radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membrane_stresses() {
        // 2 MPa, r = 100 mm, t = 5 mm
        assert!((hoop_stress(2.0e6, 0.1, 0.005) - 40.0e6).abs() < 1e-3);
        assert!((axial_stress(2.0e6, 0.1, 0.005) - 20.0e6).abs() < 1e-3);
        assert_eq!(radial_stress(2.0e6), -2.0e6);
        assert!((diameter_thickness_ratio(0.1, 0.005) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_strains_uniaxial_reduce_to_hooke() {
        let s = principal_strains(200.0e6, 0.0, 0.0, 200.0e9, 0.3);
        assert!((s.hoop - 1.0e-3).abs() < 1e-15);
        assert!((s.axial + 0.3e-3).abs() < 1e-15);
        assert!((s.radial + 0.3e-3).abs() < 1e-15);
    }

    #[test]
    fn test_thickness_and_pressure_are_inverse() {
        let t = required_thickness(2.0e6, 0.1, 40.0e6);
        assert!((t - 0.005).abs() < 1e-15);
        assert!((pressure_at_stress(40.0e6, 0.1, t) - 2.0e6).abs() < 1e-6);
    }
}
