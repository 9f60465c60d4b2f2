//! # Electrical Formulas
//!
//! Capacitor energy storage, LC resonance, current draw from power, and
//! resistance of round conductors.
//!
//! All functions take and return SI base units (F, V, C, J, H, Hz, W, A, Ω,
//! Ω·m, m).

use std::f64::consts::PI;

// =============================================================================
// CAPACITOR ENERGY
// =============================================================================

/// Stored energy from capacitance and voltage: E = ½·C·V²
#[inline]
pub fn capacitor_energy_cv(capacitance: f64, voltage: f64) -> f64 {
    0.5 * capacitance * voltage * voltage
}

/// Stored energy from charge and voltage: E = ½·Q·V
#[inline]
pub fn capacitor_energy_qv(charge: f64, voltage: f64) -> f64 {
    0.5 * charge * voltage
}

/// Charge on a capacitor: Q = C·V
#[inline]
pub fn capacitor_charge(capacitance: f64, voltage: f64) -> f64 {
    capacitance * voltage
}

/// Voltage across a capacitor holding energy E: V = √(2E / C)
#[inline]
pub fn capacitor_voltage_from_energy(energy: f64, capacitance: f64) -> f64 {
    (2.0 * energy / capacitance).sqrt()
}

/// Voltage for a given energy and charge: V = 2E / Q
#[inline]
pub fn capacitor_voltage_from_charge(energy: f64, charge: f64) -> f64 {
    2.0 * energy / charge
}

// =============================================================================
// RESONANCE
// =============================================================================

/// Resonant frequency of an ideal LC tank: f = 1 / (2π√(LC))
#[inline]
pub fn lc_resonant_frequency(inductance: f64, capacitance: f64) -> f64 {
    1.0 / (2.0 * PI * (inductance * capacitance).sqrt())
}

/// Angular frequency for a cyclic frequency: ω = 2πf
#[inline]
pub fn angular_frequency(frequency: f64) -> f64 {
    2.0 * PI * frequency
}

// =============================================================================
// POWER TO CURRENT
// =============================================================================

/// Direct current drawn for a power: I = P / V
#[inline]
pub fn dc_current(power: f64, voltage: f64) -> f64 {
    power / voltage
}

/// Single-phase AC current for real power: I = P / (V·PF)
#[inline]
pub fn ac_current(power: f64, voltage: f64, power_factor: f64) -> f64 {
    power / (voltage * power_factor)
}

/// Apparent power for real power and power factor: S = P / PF
#[inline]
pub fn apparent_power(power: f64, power_factor: f64) -> f64 {
    power / power_factor
}

// =============================================================================
// CONDUCTOR RESISTANCE
// =============================================================================

/// Cross-sectional area of a round conductor: A = π(D/2)²
#[inline]
pub fn circular_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Resistivity corrected to temperature T: ρ(T) = ρ₀·(1 + α(T − T₀))
#[inline]
pub fn resistivity_at_temperature(rho_ref: f64, alpha: f64, temperature_c: f64, reference_c: f64) -> f64 {
    rho_ref * (1.0 + alpha * (temperature_c - reference_c))
}

/// Resistance of a uniform conductor: R = ρ·L / A
#[inline]
pub fn wire_resistance(resistivity: f64, length: f64, area: f64) -> f64 {
    resistivity * length / area
}

/// Conductor length for a target resistance: L = R·A / ρ
#[inline]
pub fn wire_length(resistance: f64, area: f64, resistivity: f64) -> f64 {
    resistance * area / resistivity
}

/// Round conductor diameter for a target resistance: D = 2√(ρL / πR)
#[inline]
pub fn wire_diameter(resistivity: f64, length: f64, resistance: f64) -> f64 {
    2.0 * (resistivity * length / (PI * resistance)).sqrt()
}

/// Resistivity from a measured sample: ρ = R·A / L
#[inline]
pub fn measured_resistivity(resistance: f64, area: f64, length: f64) -> f64 {
    resistance * area / length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacitor_energy_forms_agree() {
        let (c, v) = (100.0e-6, 12.0);
        let e = capacitor_energy_cv(c, v);
        assert!((e - 7.2e-3).abs() < 1e-15);

        let q = capacitor_charge(c, v);
        assert!((q - 1.2e-3).abs() < 1e-15);
        assert!((capacitor_energy_qv(q, v) - e).abs() < 1e-15);
        assert!((capacitor_voltage_from_energy(e, c) - v).abs() < 1e-9);
        assert!((capacitor_voltage_from_charge(e, q) - v).abs() < 1e-9);
    }

    #[test]
    fn test_lc_resonance() {
        // 10 μH with 100 nF
        let f = lc_resonant_frequency(10.0e-6, 100.0e-9);
        assert!((f - 159_154.94).abs() < 0.01);
        // 10 μH with 100 pF
        let f = lc_resonant_frequency(10.0e-6, 100.0e-12);
        assert!((f - 5_032_921.2).abs() < 0.5);
    }

    #[test]
    fn test_currents() {
        assert!((dc_current(60.0, 12.0) - 5.0).abs() < 1e-12);
        assert!((ac_current(2000.0, 230.0, 0.85) - 10.2302).abs() < 1e-4);
        assert!((apparent_power(2000.0, 0.8) - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn test_wire_round_trip() {
        // 100 m of 1.5 mm copper at 20 °C
        let rho = 0.0172e-6;
        let area = circular_area(1.5e-3);
        let r = wire_resistance(rho, 100.0, area);
        assert!((r - 0.9733).abs() < 1e-4);
        assert!((wire_length(r, area, rho) - 100.0).abs() < 1e-9);
        assert!((wire_diameter(rho, 100.0, r) - 1.5e-3).abs() < 1e-12);
        assert!((measured_resistivity(r, area, 100.0) - rho).abs() < 1e-20);
    }

    #[test]
    fn test_temperature_correction() {
        let rho = resistivity_at_temperature(0.0172, 0.00393, 70.0, 20.0);
        assert!((rho - 0.0172 * 1.1965).abs() < 1e-12);
    }
}
