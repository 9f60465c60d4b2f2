//! # Wire Resistance
//!
//! Resistance of a round conductor, R = ρL/A, solved for whichever of
//! resistance, length, diameter or resistivity the mode names.
//!
//! Tabulated resistivities are at 20 °C. Except in resistivity mode, the
//! resistivity is first corrected to the conductor temperature with
//! ρ(T) = ρ₂₀·(1 + α(T − 20)). A blank temperature means 20 °C.
//!
//! ```text
//! resistance   R = ρL / A
//! length       L = RA / ρ
//! diameter     D = 2√(ρL / πR)
//! resistivity  ρ = RA / L      (measured, no correction)
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::constants::RESISTIVITY_REFERENCE_C;
use crate::equations::electrical::{
    circular_area, measured_resistivity, resistivity_at_temperature, wire_diameter, wire_length,
    wire_resistance,
};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::materials::WireMaterial;
use crate::steps::{Step, Term};
use crate::units::thermal::to_celsius;
use crate::units::{LengthUnit, Quantity, ResistanceUnit, ResistivityUnit, TemperatureUnit};
use crate::validation::{finite, finite_result, required_positive};

const CALCULATION: &str = "Wire resistance";

selector_enum! {
    /// Quantity to solve for
    WireMode, "mode" {
        #[default]
        Resistance => "resistance", "Resistance",
        Length => "length", "Length",
        Diameter => "diameter", "Diameter",
        Resistivity => "resistivity", "Resistivity",
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "mode": "resistance",
///   "material": "copper",
///   "length": 100.0, "length_unit": "m",
///   "diameter": 1.5, "diameter_unit": "mm",
///   "temperature": 20.0
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireResistanceInput {
    #[serde(default)]
    pub mode: WireMode,
    #[serde(default)]
    pub material: WireMaterial,
    /// Resistivity at 20 °C, used when the material is custom
    #[serde(default)]
    pub custom_resistivity: Option<f64>,
    #[serde(default)]
    pub resistivity_unit: ResistivityUnit,
    /// Overrides the material's α (1/°C)
    #[serde(default)]
    pub temperature_coefficient: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub length_unit: LengthUnit,
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub diameter_unit: LengthUnit,
    #[serde(default)]
    pub resistance: Option<f64>,
    #[serde(default)]
    pub resistance_unit: ResistanceUnit,
}

impl WireResistanceInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.mode != WireMode::Resistivity {
            self.reference_resistivity()?;
            self.alpha()?;
            self.temperature_c()?;
        }
        if self.mode != WireMode::Length {
            self.length_q()?;
        }
        if self.mode != WireMode::Diameter {
            self.diameter_q()?;
        }
        if self.mode != WireMode::Resistance {
            self.resistance_q()?;
        }
        Ok(())
    }

    /// ρ₂₀ in Ω·m
    fn reference_resistivity(&self) -> CalcResult<Quantity<ResistivityUnit>> {
        match self.material.resistivity() {
            Some(rho) => Ok(rho),
            None => Ok(Quantity::new(
                required_positive("custom_resistivity", self.custom_resistivity)?,
                self.resistivity_unit,
            )),
        }
    }

    fn alpha(&self) -> CalcResult<f64> {
        match self.temperature_coefficient {
            Some(alpha) => finite("temperature_coefficient", alpha),
            None => Ok(self.material.temp_coefficient()),
        }
    }

    fn temperature_c(&self) -> CalcResult<f64> {
        match self.temperature {
            Some(t) => Ok(to_celsius(finite("temperature", t)?, self.temperature_unit)),
            None => Ok(RESISTIVITY_REFERENCE_C),
        }
    }

    fn length_q(&self) -> CalcResult<Quantity<LengthUnit>> {
        Ok(Quantity::new(required_positive("length", self.length)?, self.length_unit))
    }

    fn diameter_q(&self) -> CalcResult<Quantity<LengthUnit>> {
        Ok(Quantity::new(required_positive("diameter", self.diameter)?, self.diameter_unit))
    }

    fn resistance_q(&self) -> CalcResult<Quantity<ResistanceUnit>> {
        Ok(Quantity::new(required_positive("resistance", self.resistance)?, self.resistance_unit))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireResistanceResult {
    pub mode: WireMode,
    pub material: WireMaterial,
    pub resistance: Quantity<ResistanceUnit>,
    pub length: Quantity<LengthUnit>,
    pub diameter: Quantity<LengthUnit>,
    /// mm²
    pub cross_section_mm2: f64,
    /// At the conductor temperature, or as measured
    pub resistivity: Quantity<ResistivityUnit>,
    /// °C
    pub temperature: f64,
    pub steps: Vec<Step>,
}

impl CalculationReport for WireResistanceResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Resistance R", &self.resistance),
            Term::quantity("Length L", &self.length),
            Term::quantity("Diameter D", &self.diameter),
            Term::new("Cross-section A", self.cross_section_mm2, "mm²"),
            Term::quantity("Resistivity ρ", &self.resistivity),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &WireResistanceInput) -> CalcResult<WireResistanceResult> {
    input.validate()?;
    let mut steps = Vec::new();

    // Resistivity in Ω·m, corrected to temperature unless it is the unknown
    let (rho, temperature) = if input.mode == WireMode::Resistivity {
        (None, input.temperature_c()?)
    } else {
        let reference = input.reference_resistivity()?;
        let alpha = input.alpha()?;
        let t = input.temperature_c()?;
        let rho = resistivity_at_temperature(reference.to_base(), alpha, t, RESISTIVITY_REFERENCE_C);
        if rho <= 0.0 {
            return Err(CalcError::calculation_failed(
                CALCULATION,
                format!("Resistivity at {:.1} °C is not positive", t),
            ));
        }
        steps.push(
            Step::new("Resistivity at temperature")
                .formula("ρ = ρ₂₀·(1 + α(T − 20))")
                .with_quantity("ρ₂₀", &reference)
                .with("α", alpha, "1/°C")
                .with("T", t, "°C")
                .yields("ρ", rho, "Ω·m")
                .equation(Equation::ResistivityTemperature)
                .note(input.material.display_name()),
        );
        (Some(rho), t)
    };

    let (r, l, d, rho) = match input.mode {
        WireMode::Resistance => {
            let (length, diameter) = (input.length_q()?, input.diameter_q()?);
            let (l, d) = (length.to_base(), diameter.to_base());
            let rho = rho.unwrap_or_default();
            let a = area_step(&mut steps, d);
            let r = wire_resistance(rho, l, a);
            steps.push(
                Step::new("Resistance")
                    .formula("R = ρL / A")
                    .with_quantity("L", &length)
                    .yields("R", r, "Ω")
                    .equation(Equation::WireResistance),
            );
            (r, l, d, rho)
        }
        WireMode::Length => {
            let (resistance, diameter) = (input.resistance_q()?, input.diameter_q()?);
            let (r, d) = (resistance.to_base(), diameter.to_base());
            let rho = rho.unwrap_or_default();
            let a = area_step(&mut steps, d);
            let l = wire_length(r, a, rho);
            steps.push(
                Step::new("Length")
                    .formula("L = RA / ρ")
                    .with_quantity("R", &resistance)
                    .yields("L", l, "m")
                    .equation(Equation::WireResistance),
            );
            (r, l, d, rho)
        }
        WireMode::Diameter => {
            let (resistance, length) = (input.resistance_q()?, input.length_q()?);
            let (r, l) = (resistance.to_base(), length.to_base());
            let rho = rho.unwrap_or_default();
            let d = wire_diameter(rho, l, r);
            steps.push(
                Step::new("Diameter")
                    .formula("D = 2√(ρL / πR)")
                    .with_quantity("R", &resistance)
                    .with_quantity("L", &length)
                    .yields("D", d, "m")
                    .equation(Equation::WireResistance),
            );
            (r, l, d, rho)
        }
        WireMode::Resistivity => {
            let (resistance, length, diameter) =
                (input.resistance_q()?, input.length_q()?, input.diameter_q()?);
            let (r, l, d) = (resistance.to_base(), length.to_base(), diameter.to_base());
            let a = area_step(&mut steps, d);
            let rho = measured_resistivity(r, a, l);
            steps.push(
                Step::new("Resistivity")
                    .formula("ρ = RA / L")
                    .with_quantity("R", &resistance)
                    .with_quantity("L", &length)
                    .yields("ρ", rho, "Ω·m")
                    .equation(Equation::WireResistance),
            );
            (r, l, d, rho)
        }
    };

    let resistance = Quantity::from_base(finite_result(CALCULATION, "Resistance", r)?, input.resistance_unit);
    let length = Quantity::from_base(finite_result(CALCULATION, "Length", l)?, input.length_unit);
    let diameter = Quantity::from_base(finite_result(CALCULATION, "Diameter", d)?, input.diameter_unit);
    let resistivity =
        Quantity::from_base(finite_result(CALCULATION, "Resistivity", rho)?, input.resistivity_unit);

    steps.push(match input.mode {
        WireMode::Resistance => Step::new("Convert").yields_quantity("R", &resistance),
        WireMode::Length => Step::new("Convert").yields_quantity("L", &length),
        WireMode::Diameter => Step::new("Convert").yields_quantity("D", &diameter),
        WireMode::Resistivity => Step::new("Convert").yields_quantity("ρ", &resistivity),
    });

    Ok(WireResistanceResult {
        mode: input.mode,
        material: input.material,
        resistance,
        length,
        diameter,
        cross_section_mm2: circular_area(d) * 1.0e6,
        resistivity,
        temperature,
        steps,
    })
}

fn area_step(steps: &mut Vec<Step>, diameter_m: f64) -> f64 {
    let a = circular_area(diameter_m);
    steps.push(
        Step::new("Cross-section")
            .formula("A = π(D/2)²")
            .with("D", diameter_m * 1000.0, "mm")
            .yields("A", a * 1.0e6, "mm²")
            .equation(Equation::ConductorArea),
    );
    a
}
