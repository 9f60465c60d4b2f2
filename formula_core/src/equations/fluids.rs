//! # Water Properties
//!
//! Liquid water viscosity and density as functions of temperature.
//!
//! Dynamic viscosity uses a Vogel-type correlation:
//!
//! μ(T) = A · 10^(B / (T − C)),  A = 2.414e-5 Pa·s, B = 247.8 K, C = 140 K
//!
//! with T in kelvin. It is fitted for roughly −20 °C to 150 °C and is
//! undefined at and below 140 K.

use crate::constants::{WATER_VISCOSITY_A_PA_S, WATER_VISCOSITY_B_K, WATER_VISCOSITY_C_K};

/// Dynamic viscosity of liquid water in Pa·s at `temperature_k`
#[inline]
pub fn water_dynamic_viscosity(temperature_k: f64) -> f64 {
    WATER_VISCOSITY_A_PA_S * 10f64.powf(WATER_VISCOSITY_B_K / (temperature_k - WATER_VISCOSITY_C_K))
}

/// Approximate density of liquid water in kg/m³ at `temperature_c`.
///
/// # Formulas
/// - T ≤ 4 °C: ρ = 1000 + 0.02·(T − 4)
/// - T > 4 °C: ρ = 999.972 − 0.0054·T − 0.00008·T²
pub fn water_density(temperature_c: f64) -> f64 {
    if temperature_c <= 4.0 {
        1000.0 + (temperature_c - 4.0) * 0.02
    } else {
        999.972 - 0.0054 * temperature_c - 0.00008 * temperature_c * temperature_c
    }
}

/// Kinematic viscosity ν = μ / ρ
#[inline]
pub fn kinematic_viscosity(dynamic_viscosity: f64, density: f64) -> f64 {
    dynamic_viscosity / density
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viscosity_at_room_temperature() {
        // ~1.0 mPa·s at 20 °C
        let mu = water_dynamic_viscosity(293.15);
        assert!((mu - 1.002e-3).abs() < 0.02e-3);
    }

    #[test]
    fn test_viscosity_decreases_with_temperature() {
        assert!(water_dynamic_viscosity(283.15) > water_dynamic_viscosity(303.15));
        assert!(water_dynamic_viscosity(303.15) > water_dynamic_viscosity(353.15));
    }

    #[test]
    fn test_density() {
        assert!((water_density(4.0) - 1000.0).abs() < 1e-12);
        assert!((water_density(0.0) - 999.92).abs() < 1e-9);
        assert!((water_density(20.0) - 999.832).abs() < 1e-9);
    }
}
