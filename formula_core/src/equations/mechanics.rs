//! # Mechanics Formulas
//!
//! Rope tension, mechanical work, axial elongation, piston displacement and
//! spring-mass oscillation.
//!
//! ## Notation
//!
//! - `m` = Mass (kg)
//! - `g` = Gravitational acceleration (m/s²)
//! - `a` = Acceleration magnitude (m/s²)
//! - `F` = Force (N)
//! - `d` = Displacement (m)
//! - `θ` = Angle between force and displacement
//! - `k` = Spring constant (N/m)
//!
//! All functions take and return SI base units.

use std::f64::consts::PI;

// =============================================================================
// TENSION
// =============================================================================

/// Tension in a cord holding a mass at rest: T = m·g
#[inline]
pub fn static_tension(mass: f64, gravity: f64) -> f64 {
    mass * gravity
}

/// Tension in a cord accelerating a mass vertically.
///
/// # Formulas
/// - Accelerating upward: T = m(g + a)
/// - Accelerating downward: T = m(g − a)
///
/// # Arguments
/// * `vertical_acceleration` - Signed acceleration, positive upward
#[inline]
pub fn accelerating_tension(mass: f64, gravity: f64, vertical_acceleration: f64) -> f64 {
    mass * (gravity + vertical_acceleration)
}

// =============================================================================
// WORK
// =============================================================================

/// Work done by a constant force: W = F·d·cos θ
#[inline]
pub fn work_done(force: f64, distance: f64, angle_rad: f64) -> f64 {
    force * distance * angle_rad.cos()
}

/// Displacement needed for a given work: d = W / (F·cos θ)
#[inline]
pub fn distance_from_work(work: f64, force: f64, angle_rad: f64) -> f64 {
    work / (force * angle_rad.cos())
}

/// Force needed for a given work: F = W / (d·cos θ)
#[inline]
pub fn force_from_work(work: f64, distance: f64, angle_rad: f64) -> f64 {
    work / (distance * angle_rad.cos())
}

// =============================================================================
// ELONGATION
// =============================================================================

/// Engineering strain: ε = ΔL / L₀
#[inline]
pub fn engineering_strain(original_length: f64, elongation: f64) -> f64 {
    elongation / original_length
}

// =============================================================================
// PISTON DISPLACEMENT
// =============================================================================

/// Swept volume of one cylinder: V = π(b/2)²·s
#[inline]
pub fn cylinder_swept_volume(bore: f64, stroke: f64) -> f64 {
    PI * (bore / 2.0).powi(2) * stroke
}

/// Total engine displacement: V = π(b/2)²·s·n
#[inline]
pub fn engine_displacement(bore: f64, stroke: f64, cylinders: u32) -> f64 {
    cylinder_swept_volume(bore, stroke) * f64::from(cylinders)
}

// =============================================================================
// OSCILLATION
// =============================================================================

/// Natural frequency of an undamped spring-mass system: f = √(k/m) / 2π
#[inline]
pub fn spring_mass_frequency(spring_constant: f64, mass: f64) -> f64 {
    (spring_constant / mass).sqrt() / (2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STANDARD_GRAVITY;

    #[test]
    fn test_tension() {
        assert!((static_tension(10.0, STANDARD_GRAVITY) - 98.0665).abs() < 1e-9);
        assert!((accelerating_tension(10.0, STANDARD_GRAVITY, 2.0) - 118.0665).abs() < 1e-9);
        assert!((accelerating_tension(10.0, STANDARD_GRAVITY, -2.0) - 78.0665).abs() < 1e-9);
    }

    #[test]
    fn test_work_round_trip() {
        let angle = 30.0_f64.to_radians();
        let w = work_done(100.0, 5.0, angle);
        assert!((w - 433.0127).abs() < 1e-4);
        assert!((distance_from_work(w, 100.0, angle) - 5.0).abs() < 1e-12);
        assert!((force_from_work(w, 5.0, angle) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_engine_displacement() {
        // 86 mm square four: 1998 cc
        let v = engine_displacement(0.086, 0.086, 4);
        assert!((v * 1.0e6 - 1998.2).abs() < 0.1);
    }

    #[test]
    fn test_spring_mass() {
        // k = 4π² N/m, m = 1 kg → 1 Hz
        let f = spring_mass_frequency(4.0 * PI * PI, 1.0);
        assert!((f - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_strain() {
        assert!((engineering_strain(2.0, 0.01) - 0.005).abs() < 1e-15);
    }
}
