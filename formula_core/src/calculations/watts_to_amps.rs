//! # Watts to Amps
//!
//! Current drawn by a load of known real power. DC circuits use I = P/V;
//! single-phase AC circuits divide by the power factor as well,
//! I = P/(V·PF), and also report the apparent power S = P/PF.

use serde::{Deserialize, Serialize};

use crate::calculations::{ensure_finite, CalculationReport};
use crate::equations::electrical::{ac_current, apparent_power, dc_current};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::units::{CurrentUnit, PowerUnit, Quantity, VoltageUnit};
use crate::validation::{finite, required_non_negative, required_positive};

const CALCULATION: &str = "Watts to amps";

selector_enum! {
    CircuitType, "circuit" {
        #[default]
        Dc => "dc", "DC",
        Ac => "ac", "AC single-phase",
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "circuit": "ac",
///   "power": 2.0, "power_unit": "kW",
///   "voltage": 230.0, "voltage_unit": "V",
///   "power_factor": 0.85
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WattsToAmpsInput {
    #[serde(default)]
    pub circuit: CircuitType,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub power_unit: PowerUnit,
    #[serde(default)]
    pub voltage: Option<f64>,
    #[serde(default)]
    pub voltage_unit: VoltageUnit,
    /// AC only, 0 < PF ≤ 1. Blank means 1.
    #[serde(default)]
    pub power_factor: Option<f64>,
    #[serde(default)]
    pub current_unit: CurrentUnit,
}

impl WattsToAmpsInput {
    pub fn validate(&self) -> CalcResult<()> {
        required_non_negative("power", self.power)?;
        required_positive("voltage", self.voltage)?;
        self.effective_power_factor()?;
        Ok(())
    }

    fn effective_power_factor(&self) -> CalcResult<f64> {
        if self.circuit == CircuitType::Dc {
            return Ok(1.0);
        }
        let pf = finite("power_factor", self.power_factor.unwrap_or(1.0))?;
        if pf <= 0.0 || pf > 1.0 {
            return Err(CalcError::invalid_input(
                "power_factor",
                pf.to_string(),
                "Power factor must be greater than 0 and at most 1",
            ));
        }
        Ok(pf)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WattsToAmpsResult {
    pub circuit: CircuitType,
    pub current: Quantity<CurrentUnit>,
    pub power_factor: f64,
    /// VA, AC only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparent_power: Option<f64>,
    pub steps: Vec<Step>,
}

impl CalculationReport for WattsToAmpsResult {
    fn outputs(&self) -> Vec<Term> {
        let mut out = vec![Term::quantity("Current I", &self.current)];
        if let Some(s) = self.apparent_power {
            out.push(Term::new("Apparent power S", s, "VA"));
        }
        out
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &WattsToAmpsInput) -> CalcResult<WattsToAmpsResult> {
    let power = Quantity::new(required_non_negative("power", input.power)?, input.power_unit);
    let voltage = Quantity::new(required_positive("voltage", input.voltage)?, input.voltage_unit);
    let pf = input.effective_power_factor()?;
    let (p, v) = (power.to_base(), voltage.to_base());

    let (amps, apparent, step) = match input.circuit {
        CircuitType::Dc => {
            let i = dc_current(p, v);
            let step = Step::new("Current")
                .formula("I = P / V")
                .with_quantity("P", &power)
                .with_quantity("V", &voltage)
                .yields("I", i, "A")
                .equation(Equation::DcCurrent);
            (i, None, step)
        }
        CircuitType::Ac => {
            let i = ac_current(p, v, pf);
            let step = Step::new("Current")
                .formula("I = P / (V · PF)")
                .with_quantity("P", &power)
                .with_quantity("V", &voltage)
                .with("PF", pf, "")
                .yields("I", i, "A")
                .equation(Equation::AcCurrent);
            (i, Some(apparent_power(p, pf)), step)
        }
    };

    let current = Quantity::from_base(amps, input.current_unit);
    let mut steps = vec![step, Step::new("Convert").yields_quantity("I", &current)];
    if let Some(s) = apparent {
        steps.push(Step::new("Apparent power").formula("S = P / PF").yields("S", s, "VA"));
    }

    ensure_finite(CALCULATION, WattsToAmpsResult {
        circuit: input.circuit,
        current,
        power_factor: pf,
        apparent_power: apparent,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dc() {
        let r = calculate(&WattsToAmpsInput {
            power: Some(60.0),
            voltage: Some(12.0),
            ..Default::default()
        })
        .unwrap();
        assert!((r.current.value - 5.0).abs() < 1e-12);
        assert!(r.apparent_power.is_none());
    }

    #[test]
    fn test_ac_with_power_factor() {
        let r = calculate(&WattsToAmpsInput {
            circuit: CircuitType::Ac,
            power: Some(2.0),
            power_unit: PowerUnit::Kilowatt,
            voltage: Some(230.0),
            power_factor: Some(0.85),
            ..Default::default()
        })
        .unwrap();
        assert!((r.current.value - 10.230_18).abs() < 1e-4);
        assert!((r.apparent_power.unwrap() - 2_352.941).abs() < 1e-3);
    }

    #[test]
    fn test_ac_blank_power_factor_is_unity() {
        let r = calculate(&WattsToAmpsInput {
            circuit: CircuitType::Ac,
            power: Some(1150.0),
            voltage: Some(230.0),
            current_unit: CurrentUnit::Milliampere,
            ..Default::default()
        })
        .unwrap();
        assert!((r.current.value - 5_000.0).abs() < 1e-9);
        assert_eq!(r.power_factor, 1.0);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let zero_volts = WattsToAmpsInput {
            power: Some(100.0),
            voltage: Some(0.0),
            ..Default::default()
        };
        assert_eq!(calculate(&zero_volts).unwrap_err().field(), Some("voltage"));

        let bad_pf = WattsToAmpsInput {
            circuit: CircuitType::Ac,
            voltage: Some(230.0),
            power_factor: Some(1.2),
            ..zero_volts
        };
        assert_eq!(calculate(&bad_pf).unwrap_err().field(), Some("power_factor"));
    }
}
