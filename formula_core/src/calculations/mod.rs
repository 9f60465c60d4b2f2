//! # Calculators
//!
//! Each calculator is a leaf module following the same pattern:
//!
//! - `*Input` - Input fields (JSON-serializable). Blank fields are `None`;
//!   every value has its own unit selector.
//! - `*Result` - Outputs in the selected units, the derivation as
//!   [`Step`]s, and any non-fatal warnings
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Calculators share nothing but the unit tables, the equation functions
//! and the settings. Identical inputs always produce identical results.
//!
//! ## Available Calculators
//!
//! | Module | Solves |
//! |--------|--------|
//! | [`golden_ratio`] | golden sections, rectangles, ratio check |
//! | [`percentage_change`] | relative change from an original value |
//! | [`percentage_difference`] | difference relative to the average |
//! | [`slope_percentage`] | grade, ratio and angle of a slope |
//! | [`capacitor_energy`] | stored energy, charge and voltage |
//! | [`hoop_stress`] | thin-wall pressure vessel stress and sizing |
//! | [`orbital_period`] | Kepler's third law |
//! | [`relative_humidity`] | any one of dry bulb, dew point, RH |
//! | [`resonant_frequency`] | LC circuit or spring-mass frequency |
//! | [`tension`] | cord tension under acceleration |
//! | [`water_viscosity`] | water viscosity and density |
//! | [`watts_to_amps`] | DC and AC load current |
//! | [`wire_resistance`] | conductor resistance, length, gauge |
//! | [`engine_displacement`] | piston engine swept volume |
//! | [`elongation`] | engineering strain |
//! | [`work`] | work done by a constant force |
//!
//! ## Dispatch
//!
//! [`CalculationItem`] wraps any calculator input under a `"calculator"`
//! tag, so one JSON document can name the calculator and its inputs:
//!
//! ```rust
//! use formula_core::calculations::{CalculationItem, CalculationReport};
//! use formula_core::settings::Settings;
//!
//! let item: CalculationItem = serde_json::from_str(
//!     r#"{ "calculator": "percentage_change", "old_value": 50, "new_value": 65 }"#,
//! ).unwrap();
//! let output = item.calculate(&Settings::default()).unwrap();
//! assert!((output.outputs()[0].value - 30.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;
use crate::settings::Settings;
use crate::steps::{Step, Term};
use crate::validation::finite_result;

/// Generates a mode/selector enum keyed by snake_case strings.
///
/// Each line reads `Variant => "key", "Display name"`. The key is the
/// serialized form and what `FromStr` accepts; the second string names the
/// field in parse errors. Mark the default with `#[default]`.
macro_rules! selector_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $key:literal, $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in selector order
            pub const ALL: &'static [Self] = &[$($name::$variant),+];

            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }

            /// Parse a key, ignoring case and treating `-` and spaces as `_`
            pub fn from_str_flexible(s: &str) -> $crate::errors::CalcResult<Self> {
                let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
                Self::ALL.iter().copied().find(|v| v.key() == wanted).ok_or_else(|| {
                    let keys: Vec<&str> = Self::ALL.iter().map(|v| v.key()).collect();
                    $crate::errors::CalcError::invalid_input(
                        $what,
                        s,
                        format!("Expected one of: {}", keys.join(", ")),
                    )
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.display_name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_str_flexible(s)
            }
        }
    };
}

pub mod capacitor_energy;
pub mod elongation;
pub mod engine_displacement;
pub mod golden_ratio;
pub mod hoop_stress;
pub mod orbital_period;
pub mod percentage_change;
pub mod percentage_difference;
pub mod relative_humidity;
pub mod resonant_frequency;
pub mod slope_percentage;
pub mod tension;
pub mod water_viscosity;
pub mod watts_to_amps;
pub mod wire_resistance;
pub mod work;

// Re-export commonly used types
pub use capacitor_energy::{CapacitorEnergyInput, CapacitorEnergyResult};
pub use elongation::{ElongationInput, ElongationResult};
pub use engine_displacement::{EngineDisplacementInput, EngineDisplacementResult};
pub use golden_ratio::{GoldenRatioInput, GoldenRatioResult};
pub use hoop_stress::{HoopStressInput, HoopStressResult};
pub use orbital_period::{OrbitalPeriodInput, OrbitalPeriodResult};
pub use percentage_change::{PercentageChangeInput, PercentageChangeResult};
pub use percentage_difference::{PercentageDifferenceInput, PercentageDifferenceResult};
pub use relative_humidity::{RelativeHumidityInput, RelativeHumidityResult};
pub use resonant_frequency::{ResonantFrequencyInput, ResonantFrequencyResult};
pub use slope_percentage::{SlopeInput, SlopeResult};
pub use tension::{TensionInput, TensionResult};
pub use water_viscosity::{WaterViscosityInput, WaterViscosityResult};
pub use watts_to_amps::{WattsToAmpsInput, WattsToAmpsResult};
pub use wire_resistance::{WireResistanceInput, WireResistanceResult};
pub use work::{WorkInput, WorkResult};

/// Uniform read access to any calculator result, for presentation.
pub trait CalculationReport {
    /// Headline values in their selected units
    fn outputs(&self) -> Vec<Term>;

    /// Derivation, in order
    fn steps(&self) -> &[Step];

    /// Non-fatal caveats (approximation limits, solver cut-off)
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Fail with `CalculationFailed` if any headline output overflowed.
pub(crate) fn ensure_finite<R: CalculationReport>(calculation: &str, result: R) -> CalcResult<R> {
    for term in result.outputs() {
        finite_result(calculation, &term.symbol, term.value)?;
    }
    Ok(result)
}

/// Key, display name and one-line summary of a calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
}

const fn info(key: &'static str, name: &'static str, summary: &'static str) -> CalculatorInfo {
    CalculatorInfo { key, name, summary }
}

/// Every calculator, in listing order. Keys match the `"calculator"` tag.
pub const CALCULATORS: &[CalculatorInfo] = &[
    info("golden_ratio", "Golden Ratio", "Golden sections, rectangles and ratio check"),
    info("percentage_change", "Percentage Change", "Relative change from an original value"),
    info("percentage_difference", "Percentage Difference", "Difference relative to the average"),
    info("slope_percentage", "Slope Percentage", "Grade, ratio and angle of a slope"),
    info("capacitor_energy", "Capacitor Energy", "Stored energy, charge and voltage"),
    info("hoop_stress", "Hoop Stress", "Thin-wall pressure vessel stress, strain and sizing"),
    info("orbital_period", "Orbital Period", "Kepler's third law for period, axis or mass"),
    info("relative_humidity", "Relative Humidity", "Any one of dry bulb, dew point and RH"),
    info("resonant_frequency", "Resonant Frequency", "LC circuit or spring-mass natural frequency"),
    info("tension", "Tension", "Cord tension at rest or under vertical acceleration"),
    info("water_viscosity", "Water Viscosity", "Viscosity and density of liquid water"),
    info("watts_to_amps", "Watts to Amps", "DC and single-phase AC load current"),
    info("wire_resistance", "Wire Resistance", "Conductor resistance, length, diameter or resistivity"),
    info("engine_displacement", "Engine Displacement", "Swept volume of a piston engine"),
    info("elongation", "Elongation", "Engineering strain from lengths"),
    info("work", "Work", "Work done by a constant force"),
];

/// Any calculator's input, tagged by calculator key.
///
/// ## JSON Example
///
/// ```json
/// { "calculator": "watts_to_amps", "circuit": "ac", "power": 2000, "voltage": 230, "power_factor": 0.85 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationItem {
    GoldenRatio(GoldenRatioInput),
    PercentageChange(PercentageChangeInput),
    PercentageDifference(PercentageDifferenceInput),
    SlopePercentage(SlopeInput),
    CapacitorEnergy(CapacitorEnergyInput),
    HoopStress(HoopStressInput),
    OrbitalPeriod(OrbitalPeriodInput),
    RelativeHumidity(RelativeHumidityInput),
    ResonantFrequency(ResonantFrequencyInput),
    Tension(TensionInput),
    WaterViscosity(WaterViscosityInput),
    WattsToAmps(WattsToAmpsInput),
    WireResistance(WireResistanceInput),
    EngineDisplacement(EngineDisplacementInput),
    Elongation(ElongationInput),
    Work(WorkInput),
}

impl CalculationItem {
    /// Calculator key, as used in the `"calculator"` tag
    pub fn key(&self) -> &'static str {
        match self {
            CalculationItem::GoldenRatio(_) => "golden_ratio",
            CalculationItem::PercentageChange(_) => "percentage_change",
            CalculationItem::PercentageDifference(_) => "percentage_difference",
            CalculationItem::SlopePercentage(_) => "slope_percentage",
            CalculationItem::CapacitorEnergy(_) => "capacitor_energy",
            CalculationItem::HoopStress(_) => "hoop_stress",
            CalculationItem::OrbitalPeriod(_) => "orbital_period",
            CalculationItem::RelativeHumidity(_) => "relative_humidity",
            CalculationItem::ResonantFrequency(_) => "resonant_frequency",
            CalculationItem::Tension(_) => "tension",
            CalculationItem::WaterViscosity(_) => "water_viscosity",
            CalculationItem::WattsToAmps(_) => "watts_to_amps",
            CalculationItem::WireResistance(_) => "wire_resistance",
            CalculationItem::EngineDisplacement(_) => "engine_displacement",
            CalculationItem::Elongation(_) => "elongation",
            CalculationItem::Work(_) => "work",
        }
    }

    /// Get the calculation type as a display string
    pub fn calc_type(&self) -> &'static str {
        display_name(self.key())
    }

    /// Run the wrapped calculator.
    pub fn calculate(&self, settings: &Settings) -> CalcResult<CalculationOutput> {
        debug!(calculator = self.key(), "running calculation");
        let output = match self {
            CalculationItem::GoldenRatio(i) => CalculationOutput::GoldenRatio(golden_ratio::calculate(i)?),
            CalculationItem::PercentageChange(i) => {
                CalculationOutput::PercentageChange(percentage_change::calculate(i)?)
            }
            CalculationItem::PercentageDifference(i) => {
                CalculationOutput::PercentageDifference(percentage_difference::calculate(i)?)
            }
            CalculationItem::SlopePercentage(i) => {
                CalculationOutput::SlopePercentage(slope_percentage::calculate(i)?)
            }
            CalculationItem::CapacitorEnergy(i) => {
                CalculationOutput::CapacitorEnergy(capacitor_energy::calculate(i)?)
            }
            CalculationItem::HoopStress(i) => CalculationOutput::HoopStress(hoop_stress::calculate(i)?),
            CalculationItem::OrbitalPeriod(i) => CalculationOutput::OrbitalPeriod(orbital_period::calculate(i)?),
            CalculationItem::RelativeHumidity(i) => CalculationOutput::RelativeHumidity(
                relative_humidity::calculate(i, &settings.humidity_solver)?,
            ),
            CalculationItem::ResonantFrequency(i) => {
                CalculationOutput::ResonantFrequency(resonant_frequency::calculate(i)?)
            }
            CalculationItem::Tension(i) => CalculationOutput::Tension(tension::calculate(i)?),
            CalculationItem::WaterViscosity(i) => CalculationOutput::WaterViscosity(water_viscosity::calculate(i)?),
            CalculationItem::WattsToAmps(i) => CalculationOutput::WattsToAmps(watts_to_amps::calculate(i)?),
            CalculationItem::WireResistance(i) => CalculationOutput::WireResistance(wire_resistance::calculate(i)?),
            CalculationItem::EngineDisplacement(i) => {
                CalculationOutput::EngineDisplacement(engine_displacement::calculate(i)?)
            }
            CalculationItem::Elongation(i) => CalculationOutput::Elongation(elongation::calculate(i)?),
            CalculationItem::Work(i) => CalculationOutput::Work(work::calculate(i)?),
        };
        debug!(
            calculator = self.key(),
            steps = output.steps().len(),
            warnings = output.warnings().len(),
            "calculation finished"
        );
        Ok(output)
    }
}

/// Any calculator's result, tagged the same way as [`CalculationItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationOutput {
    GoldenRatio(GoldenRatioResult),
    PercentageChange(PercentageChangeResult),
    PercentageDifference(PercentageDifferenceResult),
    SlopePercentage(SlopeResult),
    CapacitorEnergy(CapacitorEnergyResult),
    HoopStress(HoopStressResult),
    OrbitalPeriod(OrbitalPeriodResult),
    RelativeHumidity(RelativeHumidityResult),
    ResonantFrequency(ResonantFrequencyResult),
    Tension(TensionResult),
    WaterViscosity(WaterViscosityResult),
    WattsToAmps(WattsToAmpsResult),
    WireResistance(WireResistanceResult),
    EngineDisplacement(EngineDisplacementResult),
    Elongation(ElongationResult),
    Work(WorkResult),
}

impl CalculationOutput {
    fn report(&self) -> &dyn CalculationReport {
        match self {
            CalculationOutput::GoldenRatio(r) => r,
            CalculationOutput::PercentageChange(r) => r,
            CalculationOutput::PercentageDifference(r) => r,
            CalculationOutput::SlopePercentage(r) => r,
            CalculationOutput::CapacitorEnergy(r) => r,
            CalculationOutput::HoopStress(r) => r,
            CalculationOutput::OrbitalPeriod(r) => r,
            CalculationOutput::RelativeHumidity(r) => r,
            CalculationOutput::ResonantFrequency(r) => r,
            CalculationOutput::Tension(r) => r,
            CalculationOutput::WaterViscosity(r) => r,
            CalculationOutput::WattsToAmps(r) => r,
            CalculationOutput::WireResistance(r) => r,
            CalculationOutput::EngineDisplacement(r) => r,
            CalculationOutput::Elongation(r) => r,
            CalculationOutput::Work(r) => r,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CalculationOutput::GoldenRatio(_) => "golden_ratio",
            CalculationOutput::PercentageChange(_) => "percentage_change",
            CalculationOutput::PercentageDifference(_) => "percentage_difference",
            CalculationOutput::SlopePercentage(_) => "slope_percentage",
            CalculationOutput::CapacitorEnergy(_) => "capacitor_energy",
            CalculationOutput::HoopStress(_) => "hoop_stress",
            CalculationOutput::OrbitalPeriod(_) => "orbital_period",
            CalculationOutput::RelativeHumidity(_) => "relative_humidity",
            CalculationOutput::ResonantFrequency(_) => "resonant_frequency",
            CalculationOutput::Tension(_) => "tension",
            CalculationOutput::WaterViscosity(_) => "water_viscosity",
            CalculationOutput::WattsToAmps(_) => "watts_to_amps",
            CalculationOutput::WireResistance(_) => "wire_resistance",
            CalculationOutput::EngineDisplacement(_) => "engine_displacement",
            CalculationOutput::Elongation(_) => "elongation",
            CalculationOutput::Work(_) => "work",
        }
    }

    pub fn calc_type(&self) -> &'static str {
        display_name(self.key())
    }
}

impl CalculationReport for CalculationOutput {
    fn outputs(&self) -> Vec<Term> {
        self.report().outputs()
    }

    fn steps(&self) -> &[Step] {
        self.report().steps()
    }

    fn warnings(&self) -> &[String] {
        self.report().warnings()
    }
}

fn display_name(key: &str) -> &'static str {
    CALCULATORS
        .iter()
        .find(|c| c.key == key)
        .map_or("Calculation", |c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(json: &str) -> CalcResult<CalculationOutput> {
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        item.calculate(&Settings::default())
    }

    #[test]
    fn test_run_item_from_json() {
        let output = run(r#"{ "calculator": "watts_to_amps", "power": 60, "voltage": 12 }"#).unwrap();
        assert_eq!(output.calc_type(), "Watts to Amps");
        assert!((output.outputs()[0].value - 5.0).abs() < 1e-12);

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["calculator"], "watts_to_amps");
        assert_eq!(json["current"]["unit"], "A");
    }

    #[test]
    fn test_units_in_json() {
        let output = run(
            r#"{ "calculator": "capacitor_energy", "capacitance": 100, "capacitance_unit": "uF",
                 "voltage": 12, "energy_unit": "mJ" }"#,
        )
        .unwrap();
        assert!((output.outputs()[0].value - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_humidity_uses_solver_settings() {
        let output = run(r#"{ "calculator": "relative_humidity", "dew_point": 15, "relative_humidity": 53.9 }"#)
            .unwrap();
        match output {
            CalculationOutput::RelativeHumidity(r) => assert!(r.solver.is_some()),
            other => panic!("unexpected output {}", other.calc_type()),
        }
    }

    #[test]
    fn test_every_calculator_has_a_key() {
        assert_eq!(CALCULATORS.len(), 16);
        for info in CALCULATORS {
            let item: CalculationItem =
                serde_json::from_str(&format!(r#"{{ "calculator": "{}" }}"#, info.key)).unwrap();
            assert_eq!(item.key(), info.key);
            assert_eq!(item.calc_type(), info.name);
            // Blank inputs are always a validation error, never a panic
            assert!(item.calculate(&Settings::default()).is_err(), "{}", info.key);
        }
    }

    #[test]
    fn test_unknown_calculator() {
        assert!(serde_json::from_str::<CalculationItem>(r#"{ "calculator": "flux_capacitor" }"#).is_err());
    }

    #[test]
    fn test_warnings_surface_through_output() {
        let output = run(r#"{ "calculator": "water_viscosity", "temperature": 175 }"#).unwrap();
        assert_eq!(output.warnings().len(), 1);
    }

    #[test]
    fn test_overflowing_outputs_are_errors() {
        for json in [
            r#"{ "calculator": "golden_ratio", "mode": "multiply", "value": 1e308 }"#,
            r#"{ "calculator": "tension", "mass": 1e308 }"#,
            r#"{ "calculator": "watts_to_amps", "power": 1e308, "voltage": 1e-10 }"#,
            r#"{ "calculator": "engine_displacement", "bore": 1e200, "stroke": 1e200, "cylinders": 4 }"#,
            r#"{ "calculator": "hoop_stress", "pressure": 1e300, "radius": 1e10, "thickness": 1e-10 }"#,
        ] {
            let err = run(json).unwrap_err();
            assert_eq!(err.error_code(), "CALCULATION_FAILED", "{}", json);
        }
    }

    proptest! {
        #[test]
        fn same_input_same_output(old in 1.0f64..1e6, new in -1e6f64..1e6, c in 1e-12f64..1.0, v in 1e-3f64..1e4) {
            let items = [
                CalculationItem::PercentageChange(PercentageChangeInput {
                    old_value: Some(old),
                    new_value: Some(new),
                }),
                CalculationItem::CapacitorEnergy(CapacitorEnergyInput {
                    capacitance: Some(c),
                    voltage: Some(v),
                    ..Default::default()
                }),
            ];
            for item in &items {
                let first = serde_json::to_string(&item.calculate(&Settings::default()).unwrap()).unwrap();
                let second = serde_json::to_string(&item.calculate(&Settings::default()).unwrap()).unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
