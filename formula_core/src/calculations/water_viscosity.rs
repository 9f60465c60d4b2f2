//! # Water Viscosity
//!
//! Dynamic viscosity, density and kinematic viscosity of liquid water at a
//! given temperature. The viscosity correlation is fitted for −20 °C to
//! 150 °C; temperatures outside that band still compute but carry a
//! warning.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::CalculationReport;
use crate::constants::{WATER_VISCOSITY_C_K, WATER_VISCOSITY_MAX_C, WATER_VISCOSITY_MIN_C};
use crate::equations::fluids::{kinematic_viscosity, water_density, water_dynamic_viscosity};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::units::thermal::to_celsius;
use crate::units::{DynamicViscosityUnit, KinematicViscosityUnit, Quantity, TemperatureUnit};
use crate::validation::{finite_result, required};

const CALCULATION: &str = "Water viscosity";

/// ## JSON Example
///
/// ```json
/// { "temperature": 20.0, "temperature_unit": "°C", "viscosity_unit": "mPa·s" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaterViscosityInput {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    #[serde(default)]
    pub viscosity_unit: DynamicViscosityUnit,
    #[serde(default)]
    pub kinematic_unit: KinematicViscosityUnit,
}

impl WaterViscosityInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.temperature_q()?;
        Ok(())
    }

    fn temperature_q(&self) -> CalcResult<Quantity<TemperatureUnit>> {
        let value = required("temperature", self.temperature)?;
        let t = Quantity::new(value, self.temperature_unit);
        if t.to_base() <= WATER_VISCOSITY_C_K {
            return Err(CalcError::invalid_input(
                "temperature",
                value.to_string(),
                format!("Temperature must be above {} K", WATER_VISCOSITY_C_K),
            ));
        }
        Ok(t)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterViscosityResult {
    pub temperature: Quantity<TemperatureUnit>,
    pub dynamic_viscosity: Quantity<DynamicViscosityUnit>,
    /// kg/m³
    pub density: f64,
    pub kinematic_viscosity: Quantity<KinematicViscosityUnit>,
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CalculationReport for WaterViscosityResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Dynamic viscosity μ", &self.dynamic_viscosity),
            Term::new("Density ρ", self.density, "kg/m³"),
            Term::quantity("Kinematic viscosity ν", &self.kinematic_viscosity),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

pub fn calculate(input: &WaterViscosityInput) -> CalcResult<WaterViscosityResult> {
    let temperature = input.temperature_q()?;
    let kelvin = temperature.to_base();
    let celsius = to_celsius(temperature.value, temperature.unit);

    let mut warnings = Vec::new();
    if !(WATER_VISCOSITY_MIN_C..=WATER_VISCOSITY_MAX_C).contains(&celsius) {
        warn!(celsius, "water temperature outside the viscosity correlation range");
        warnings.push(format!(
            "{:.1} °C is outside the fitted range of {} °C to {} °C",
            celsius, WATER_VISCOSITY_MIN_C, WATER_VISCOSITY_MAX_C
        ));
    }

    let mu = finite_result(CALCULATION, "Dynamic viscosity", water_dynamic_viscosity(kelvin))?;
    let rho = water_density(celsius);
    let nu = kinematic_viscosity(mu, rho);

    let dynamic_viscosity = Quantity::from_base(mu, input.viscosity_unit);
    let kinematic = Quantity::from_base(nu, input.kinematic_unit);

    let steps = vec![
        Step::new("Absolute temperature")
            .with_quantity("T", &temperature)
            .yields("T", kelvin, "K"),
        Step::new("Dynamic viscosity")
            .formula("μ = A · 10^(B / (T − C))")
            .with("T", kelvin, "K")
            .yields_quantity("μ", &dynamic_viscosity)
            .equation(Equation::WaterViscosity),
        Step::new("Density")
            .with("T", celsius, "°C")
            .yields("ρ", rho, "kg/m³")
            .equation(Equation::WaterDensity),
        Step::new("Kinematic viscosity")
            .formula("ν = μ / ρ")
            .with("μ", mu, "Pa·s")
            .with("ρ", rho, "kg/m³")
            .yields_quantity("ν", &kinematic)
            .equation(Equation::KinematicViscosity),
    ];

    Ok(WaterViscosityResult {
        temperature,
        dynamic_viscosity,
        density: rho,
        kinematic_viscosity: kinematic,
        steps,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(temperature: f64, unit: TemperatureUnit) -> WaterViscosityInput {
        WaterViscosityInput {
            temperature: Some(temperature),
            temperature_unit: unit,
            ..Default::default()
        }
    }

    #[test]
    fn test_room_temperature() {
        let r = calculate(&at(20.0, TemperatureUnit::Celsius)).unwrap();
        assert!((r.dynamic_viscosity.value - 1.002e-3).abs() < 0.005e-3);
        assert!((r.density - 999.832).abs() < 1e-9);
        assert!((r.kinematic_viscosity.value - 1.002e-6).abs() < 0.005e-6);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_units_do_not_change_the_answer() {
        let c = calculate(&at(20.0, TemperatureUnit::Celsius)).unwrap();
        let f = calculate(&WaterViscosityInput {
            viscosity_unit: DynamicViscosityUnit::Centipoise,
            kinematic_unit: KinematicViscosityUnit::Centistokes,
            ..at(68.0, TemperatureUnit::Fahrenheit)
        })
        .unwrap();
        assert!((f.dynamic_viscosity.value - c.dynamic_viscosity.value * 1000.0).abs() < 1e-9);
        assert!((f.kinematic_viscosity.value - c.kinematic_viscosity.value * 1.0e6).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_warns() {
        let r = calculate(&at(160.0, TemperatureUnit::Celsius)).unwrap();
        assert_eq!(r.warnings.len(), 1);
        assert!(r.dynamic_viscosity.value > 0.0);
    }

    #[test]
    fn test_singular_temperature_rejected() {
        let err = calculate(&at(140.0, TemperatureUnit::Kelvin)).unwrap_err();
        assert_eq!(err.field(), Some("temperature"));
        assert_eq!(
            calculate(&WaterViscosityInput::default()).unwrap_err(),
            CalcError::missing_field("temperature")
        );
    }
}
