//! # Capacitor Energy
//!
//! Energy, charge, voltage and capacitance of an ideal capacitor. Any two
//! of them fix the other two; the mode picks which two were entered.
//!
//! ## Modes
//!
//! - `energy_from_cv`: E = ½CV², Q = CV
//! - `energy_from_qv`: E = ½QV, C = Q/V
//! - `voltage_charge_from_energy`: V = √(2E/C), Q = CV
//! - `voltage_from_energy_charge`: V = 2E/Q, C = Q/V
//!
//! ## Example
//!
//! ```rust
//! use formula_core::calculations::capacitor_energy::{calculate, CapacitorEnergyInput};
//! use formula_core::units::{CapacitanceUnit, EnergyUnit};
//!
//! let input = CapacitorEnergyInput {
//!     capacitance: Some(100.0),
//!     capacitance_unit: CapacitanceUnit::Microfarad,
//!     voltage: Some(12.0),
//!     energy_unit: EnergyUnit::Millijoule,
//!     ..Default::default()
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.energy.value - 7.2).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::equations::electrical::{
    capacitor_charge, capacitor_energy_cv, capacitor_energy_qv, capacitor_voltage_from_charge,
    capacitor_voltage_from_energy,
};
use crate::equations::registry::Equation;
use crate::errors::CalcResult;
use crate::steps::{Step, Term};
use crate::units::{CapacitanceUnit, ChargeUnit, EnergyUnit, Quantity, VoltageUnit};
use crate::validation::{finite_result, required_positive};

const CALCULATION: &str = "Capacitor energy";

selector_enum! {
    /// Which pair of quantities is known
    CapacitorMode, "mode" {
        #[default]
        EnergyFromCv => "energy_from_cv", "Energy from capacitance and voltage",
        EnergyFromQv => "energy_from_qv", "Energy from charge and voltage",
        VoltageChargeFromEnergy => "voltage_charge_from_energy", "Voltage and charge from energy and capacitance",
        VoltageFromEnergyCharge => "voltage_from_energy_charge", "Voltage from energy and charge",
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "mode": "energy_from_cv",
///   "capacitance": 100.0,
///   "capacitance_unit": "μF",
///   "voltage": 12.0,
///   "voltage_unit": "V",
///   "energy_unit": "mJ"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapacitorEnergyInput {
    #[serde(default)]
    pub mode: CapacitorMode,
    #[serde(default)]
    pub capacitance: Option<f64>,
    #[serde(default)]
    pub capacitance_unit: CapacitanceUnit,
    #[serde(default)]
    pub voltage: Option<f64>,
    #[serde(default)]
    pub voltage_unit: VoltageUnit,
    #[serde(default)]
    pub charge: Option<f64>,
    #[serde(default)]
    pub charge_unit: ChargeUnit,
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub energy_unit: EnergyUnit,
}

impl CapacitorEnergyInput {
    pub fn validate(&self) -> CalcResult<()> {
        let fields: [(&str, Option<f64>); 2] = match self.mode {
            CapacitorMode::EnergyFromCv => [("capacitance", self.capacitance), ("voltage", self.voltage)],
            CapacitorMode::EnergyFromQv => [("charge", self.charge), ("voltage", self.voltage)],
            CapacitorMode::VoltageChargeFromEnergy => [("energy", self.energy), ("capacitance", self.capacitance)],
            CapacitorMode::VoltageFromEnergyCharge => [("energy", self.energy), ("charge", self.charge)],
        };
        for (field, value) in fields {
            required_positive(field, value)?;
        }
        Ok(())
    }

    fn capacitance_q(&self) -> CalcResult<Quantity<CapacitanceUnit>> {
        Ok(Quantity::new(required_positive("capacitance", self.capacitance)?, self.capacitance_unit))
    }

    fn voltage_q(&self) -> CalcResult<Quantity<VoltageUnit>> {
        Ok(Quantity::new(required_positive("voltage", self.voltage)?, self.voltage_unit))
    }

    fn charge_q(&self) -> CalcResult<Quantity<ChargeUnit>> {
        Ok(Quantity::new(required_positive("charge", self.charge)?, self.charge_unit))
    }

    fn energy_q(&self) -> CalcResult<Quantity<EnergyUnit>> {
        Ok(Quantity::new(required_positive("energy", self.energy)?, self.energy_unit))
    }
}

/// All four capacitor quantities, each in the unit selected for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitorEnergyResult {
    pub mode: CapacitorMode,
    pub energy: Quantity<EnergyUnit>,
    pub capacitance: Quantity<CapacitanceUnit>,
    pub voltage: Quantity<VoltageUnit>,
    pub charge: Quantity<ChargeUnit>,
    pub steps: Vec<Step>,
}

impl CalculationReport for CapacitorEnergyResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Energy", &self.energy),
            Term::quantity("Capacitance", &self.capacitance),
            Term::quantity("Voltage", &self.voltage),
            Term::quantity("Charge", &self.charge),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &CapacitorEnergyInput) -> CalcResult<CapacitorEnergyResult> {
    input.validate()?;

    // Base units: F, V, C, J
    let (c, v, q, e, steps) = match input.mode {
        CapacitorMode::EnergyFromCv => {
            let (cap, volt) = (input.capacitance_q()?, input.voltage_q()?);
            let (c, v) = (cap.to_base(), volt.to_base());
            let e = capacitor_energy_cv(c, v);
            let q = capacitor_charge(c, v);
            let steps = vec![
                Step::new("Convert to SI").with("C", c, "F").with("V", v, "V"),
                Step::new("Energy")
                    .formula("E = ½·C·V²")
                    .yields("E", e, "J")
                    .equation(Equation::CapacitorEnergyCV),
                Step::new("Charge")
                    .formula("Q = C·V")
                    .yields("Q", q, "C")
                    .equation(Equation::CapacitorCharge),
            ];
            (c, v, q, e, steps)
        }
        CapacitorMode::EnergyFromQv => {
            let (chg, volt) = (input.charge_q()?, input.voltage_q()?);
            let (q, v) = (chg.to_base(), volt.to_base());
            let e = capacitor_energy_qv(q, v);
            let c = q / v;
            let steps = vec![
                Step::new("Convert to SI").with("Q", q, "C").with("V", v, "V"),
                Step::new("Energy")
                    .formula("E = ½·Q·V")
                    .yields("E", e, "J")
                    .equation(Equation::CapacitorEnergyQV),
                Step::new("Capacitance")
                    .formula("C = Q / V")
                    .yields("C", c, "F")
                    .equation(Equation::CapacitorCharge),
            ];
            (c, v, q, e, steps)
        }
        CapacitorMode::VoltageChargeFromEnergy => {
            let (energy, cap) = (input.energy_q()?, input.capacitance_q()?);
            let (e, c) = (energy.to_base(), cap.to_base());
            let v = capacitor_voltage_from_energy(e, c);
            let q = capacitor_charge(c, v);
            let steps = vec![
                Step::new("Convert to SI").with("E", e, "J").with("C", c, "F"),
                Step::new("Voltage")
                    .formula("V = √(2E / C)")
                    .yields("V", v, "V")
                    .equation(Equation::CapacitorVoltageFromEnergy),
                Step::new("Charge")
                    .formula("Q = C·V")
                    .yields("Q", q, "C")
                    .equation(Equation::CapacitorCharge),
            ];
            (c, v, q, e, steps)
        }
        CapacitorMode::VoltageFromEnergyCharge => {
            let (energy, chg) = (input.energy_q()?, input.charge_q()?);
            let (e, q) = (energy.to_base(), chg.to_base());
            let v = capacitor_voltage_from_charge(e, q);
            let c = q / v;
            let steps = vec![
                Step::new("Convert to SI").with("E", e, "J").with("Q", q, "C"),
                Step::new("Voltage")
                    .formula("V = 2E / Q")
                    .yields("V", v, "V")
                    .equation(Equation::CapacitorVoltageFromEnergy),
                Step::new("Capacitance")
                    .formula("C = Q / V")
                    .yields("C", c, "F")
                    .equation(Equation::CapacitorCharge),
            ];
            (c, v, q, e, steps)
        }
    };

    Ok(CapacitorEnergyResult {
        mode: input.mode,
        energy: Quantity::from_base(finite_result(CALCULATION, "Energy", e)?, input.energy_unit),
        capacitance: Quantity::from_base(finite_result(CALCULATION, "Capacitance", c)?, input.capacitance_unit),
        voltage: Quantity::from_base(finite_result(CALCULATION, "Voltage", v)?, input.voltage_unit),
        charge: Quantity::from_base(finite_result(CALCULATION, "Charge", q)?, input.charge_unit),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CapacitorEnergyInput {
        CapacitorEnergyInput {
            capacitance: Some(100.0),
            capacitance_unit: CapacitanceUnit::Microfarad,
            voltage: Some(12.0),
            energy_unit: EnergyUnit::Millijoule,
            charge_unit: ChargeUnit::Millicoulomb,
            ..Default::default()
        }
    }

    #[test]
    fn test_energy_from_cv() {
        let r = calculate(&reference()).unwrap();
        assert!((r.energy.value - 7.2).abs() < 1e-9);
        assert_eq!(r.energy.unit, EnergyUnit::Millijoule);
        assert!((r.charge.value - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_energy_from_qv() {
        let input = CapacitorEnergyInput {
            mode: CapacitorMode::EnergyFromQv,
            charge: Some(1.2),
            charge_unit: ChargeUnit::Millicoulomb,
            voltage: Some(12.0),
            capacitance_unit: CapacitanceUnit::Microfarad,
            energy_unit: EnergyUnit::Millijoule,
            ..Default::default()
        };
        let r = calculate(&input).unwrap();
        assert!((r.energy.value - 7.2).abs() < 1e-9);
        assert!((r.capacitance.value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_voltage_and_charge_from_energy() {
        let input = CapacitorEnergyInput {
            mode: CapacitorMode::VoltageChargeFromEnergy,
            energy: Some(7.2),
            energy_unit: EnergyUnit::Millijoule,
            capacitance: Some(100.0),
            capacitance_unit: CapacitanceUnit::Microfarad,
            charge_unit: ChargeUnit::Millicoulomb,
            ..Default::default()
        };
        let r = calculate(&input).unwrap();
        assert!((r.voltage.value - 12.0).abs() < 1e-9);
        assert!((r.charge.value - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_voltage_from_energy_and_charge() {
        let input = CapacitorEnergyInput {
            mode: CapacitorMode::VoltageFromEnergyCharge,
            energy: Some(7.2),
            energy_unit: EnergyUnit::Millijoule,
            charge: Some(1.2),
            charge_unit: ChargeUnit::Millicoulomb,
            capacitance_unit: CapacitanceUnit::Microfarad,
            ..Default::default()
        };
        let r = calculate(&input).unwrap();
        assert!((r.voltage.value - 12.0).abs() < 1e-9);
        assert!((r.capacitance.value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_fields_required_per_mode() {
        let input = CapacitorEnergyInput {
            mode: CapacitorMode::EnergyFromQv,
            voltage: Some(5.0),
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("charge"));

        let input = CapacitorEnergyInput {
            voltage: Some(-5.0),
            ..reference()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("voltage"));
    }

    #[test]
    fn test_input_from_json_with_ascii_units() {
        let input: CapacitorEnergyInput = serde_json::from_str(
            r#"{"capacitance": 100, "capacitance_unit": "uF", "voltage": 12}"#,
        )
        .unwrap();
        assert_eq!(input.capacitance_unit, CapacitanceUnit::Microfarad);
        let r = calculate(&input).unwrap();
        assert!((r.energy.value - 0.0072).abs() < 1e-12);
    }
}
