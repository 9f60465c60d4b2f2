//! Physical and mathematical constants used by the calculators.
//!
//! All values are SI unless the name says otherwise.

/// Golden ratio φ = (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Standard gravitational acceleration g₀ in m/s²
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Newtonian gravitational constant G in m³/(kg·s²) (CODATA 2018)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

// Magnus approximation for saturation vapour pressure over water,
// e_s(T) = A · exp(B·T / (T + C)) with T in °C and e_s in hPa.

/// Magnus coefficient A in hPa
pub const MAGNUS_A_HPA: f64 = 6.112;
/// Magnus coefficient B (dimensionless)
pub const MAGNUS_B: f64 = 17.67;
/// Magnus coefficient C in °C
pub const MAGNUS_C_DEG_C: f64 = 243.5;

/// Coldest temperature (°C) accepted by the psychrometric calculator; the
/// Magnus form has a pole at −C and underflows well before it
pub const MAGNUS_MIN_C: f64 = -100.0;
/// Lower bound (°C) of the range the Magnus coefficients are fitted to
pub const MAGNUS_FIT_MIN_C: f64 = -45.0;
/// Upper bound (°C) of the range the Magnus coefficients are fitted to
pub const MAGNUS_FIT_MAX_C: f64 = 60.0;

// Vogel-type correlation for liquid water viscosity,
// μ(T) = A · 10^(B / (T − C)) with T in kelvin and μ in Pa·s.

/// Viscosity coefficient A in Pa·s
pub const WATER_VISCOSITY_A_PA_S: f64 = 2.414e-5;
/// Viscosity coefficient B in K
pub const WATER_VISCOSITY_B_K: f64 = 247.8;
/// Viscosity coefficient C in K; the correlation diverges at and below it
pub const WATER_VISCOSITY_C_K: f64 = 140.0;

/// Lower bound (°C) of the range the viscosity correlation is fitted to
pub const WATER_VISCOSITY_MIN_C: f64 = -20.0;
/// Upper bound (°C) of the range the viscosity correlation is fitted to
pub const WATER_VISCOSITY_MAX_C: f64 = 150.0;

/// Reference temperature (°C) for tabulated wire resistivities
pub const RESISTIVITY_REFERENCE_C: f64 = 20.0;

/// Diameter-to-thickness ratio above which thin-wall theory applies
pub const THIN_WALL_MIN_RATIO: f64 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi_identities() {
        assert!((PHI - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-15);
        assert!((PHI * PHI - (PHI + 1.0)).abs() < 1e-12);
        assert!((1.0 / PHI - (PHI - 1.0)).abs() < 1e-12);
    }
}
