//! # Resonant Frequency
//!
//! Natural frequency of an ideal LC tank circuit, f = 1/(2π√(LC)), or of
//! an undamped spring-mass system, f = √(k/m)/(2π). Both also report the
//! angular frequency ω = 2πf and the period 1/f.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::equations::electrical::{angular_frequency, lc_resonant_frequency};
use crate::equations::mechanics::spring_mass_frequency;
use crate::equations::registry::Equation;
use crate::errors::CalcResult;
use crate::steps::{Step, Term};
use crate::units::{CapacitanceUnit, FrequencyUnit, InductanceUnit, MassUnit, Quantity, SpringConstantUnit, TimeUnit};
use crate::validation::{finite_result, required_positive};

const CALCULATION: &str = "Resonant frequency";

selector_enum! {
    ResonatorKind, "mode" {
        #[default]
        LcCircuit => "lc_circuit", "LC circuit",
        Mechanical => "mechanical", "Spring-mass system",
    }
}

/// LC mode uses inductance and capacitance; mechanical mode uses spring
/// constant and mass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "lc_circuit",
///   "inductance": 10.0, "inductance_unit": "μH",
///   "capacitance": 100.0, "capacitance_unit": "nF",
///   "frequency_unit": "kHz"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResonantFrequencyInput {
    #[serde(default)]
    pub mode: ResonatorKind,
    #[serde(default)]
    pub inductance: Option<f64>,
    #[serde(default)]
    pub inductance_unit: InductanceUnit,
    #[serde(default)]
    pub capacitance: Option<f64>,
    #[serde(default)]
    pub capacitance_unit: CapacitanceUnit,
    #[serde(default)]
    pub spring_constant: Option<f64>,
    #[serde(default)]
    pub spring_constant_unit: SpringConstantUnit,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub mass_unit: MassUnit,
    #[serde(default)]
    pub frequency_unit: FrequencyUnit,
    #[serde(default)]
    pub period_unit: TimeUnit,
}

impl ResonantFrequencyInput {
    pub fn validate(&self) -> CalcResult<()> {
        match self.mode {
            ResonatorKind::LcCircuit => {
                required_positive("inductance", self.inductance)?;
                required_positive("capacitance", self.capacitance)?;
            }
            ResonatorKind::Mechanical => {
                required_positive("spring_constant", self.spring_constant)?;
                required_positive("mass", self.mass)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonantFrequencyResult {
    pub mode: ResonatorKind,
    pub frequency: Quantity<FrequencyUnit>,
    /// rad/s
    pub angular_frequency: f64,
    pub period: Quantity<TimeUnit>,
    pub steps: Vec<Step>,
}

impl CalculationReport for ResonantFrequencyResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Frequency f", &self.frequency),
            Term::new("Angular frequency ω", self.angular_frequency, "rad/s"),
            Term::quantity("Period", &self.period),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &ResonantFrequencyInput) -> CalcResult<ResonantFrequencyResult> {
    input.validate()?;

    let (hz, first) = match input.mode {
        ResonatorKind::LcCircuit => {
            let l = Quantity::new(required_positive("inductance", input.inductance)?, input.inductance_unit);
            let c = Quantity::new(required_positive("capacitance", input.capacitance)?, input.capacitance_unit);
            let f = lc_resonant_frequency(l.to_base(), c.to_base());
            let step = Step::new("Resonant frequency")
                .formula("f = 1 / (2π√(LC))")
                .with_quantity("L", &l)
                .with_quantity("C", &c)
                .yields("f", f, "Hz")
                .equation(Equation::LcResonantFrequency);
            (f, step)
        }
        ResonatorKind::Mechanical => {
            let k = Quantity::new(
                required_positive("spring_constant", input.spring_constant)?,
                input.spring_constant_unit,
            );
            let m = Quantity::new(required_positive("mass", input.mass)?, input.mass_unit);
            let f = spring_mass_frequency(k.to_base(), m.to_base());
            let step = Step::new("Natural frequency")
                .formula("f = √(k/m) / 2π")
                .with_quantity("k", &k)
                .with_quantity("m", &m)
                .yields("f", f, "Hz")
                .equation(Equation::SpringMassFrequency);
            (f, step)
        }
    };
    let hz = finite_result(CALCULATION, "Frequency", hz)?;

    let omega = angular_frequency(hz);
    let frequency = Quantity::from_base(hz, input.frequency_unit);
    let period = Quantity::from_base(1.0 / hz, input.period_unit);

    let steps = vec![
        first,
        Step::new("Convert").yields_quantity("f", &frequency),
        Step::new("Angular frequency").formula("ω = 2πf").yields("ω", omega, "rad/s"),
        Step::new("Period").formula("T = 1 / f").yields_quantity("T", &period),
    ];

    Ok(ResonantFrequencyResult {
        mode: input.mode,
        frequency,
        angular_frequency: omega,
        period,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lc(capacitance: f64, unit: CapacitanceUnit) -> ResonantFrequencyInput {
        ResonantFrequencyInput {
            inductance: Some(10.0),
            inductance_unit: InductanceUnit::Microhenry,
            capacitance: Some(capacitance),
            capacitance_unit: unit,
            frequency_unit: FrequencyUnit::Kilohertz,
            ..Default::default()
        }
    }

    #[test]
    fn test_lc_circuit() {
        let r = calculate(&lc(100.0, CapacitanceUnit::Nanofarad)).unwrap();
        assert!((r.frequency.value - 159.154_94).abs() < 1e-4);

        let r = calculate(&lc(100.0, CapacitanceUnit::Picofarad)).unwrap();
        assert!((r.frequency.value - 5_032.921).abs() < 1e-3);
    }

    #[test]
    fn test_spring_mass() {
        let r = calculate(&ResonantFrequencyInput {
            mode: ResonatorKind::Mechanical,
            spring_constant: Some(100.0),
            mass: Some(1.0),
            ..Default::default()
        })
        .unwrap();
        assert!((r.frequency.value - 1.591_549_43).abs() < 1e-8);
        assert!((r.angular_frequency - 10.0).abs() < 1e-12);
        assert!((r.period.value - 0.628_318_53).abs() < 1e-8);
    }

    #[test]
    fn test_mode_selects_required_fields() {
        let err = calculate(&ResonantFrequencyInput {
            mode: ResonatorKind::Mechanical,
            inductance: Some(1.0),
            capacitance: Some(1.0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("spring_constant"));

        let err = calculate(&lc(0.0, CapacitanceUnit::Picofarad)).unwrap_err();
        assert_eq!(err.field(), Some("capacitance"));
    }
}
