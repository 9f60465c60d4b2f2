//! # Tension
//!
//! Tension in a vertical cord supporting a mass, at rest or accelerating,
//! with standard gravity g = 9.80665 m/s². A known applied force can also
//! be entered directly, in which case the tension equals it.
//!
//! Acceleration is entered as a magnitude; `direction` carries the sign.

use serde::{Deserialize, Serialize};

use crate::calculations::{ensure_finite, CalculationReport};
use crate::constants::STANDARD_GRAVITY;
use crate::equations::mechanics::{accelerating_tension, static_tension};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::units::{AccelerationUnit, ForceUnit, MassUnit, Quantity};
use crate::validation::{required_non_negative, required_positive};

const CALCULATION: &str = "Tension";

selector_enum! {
    TensionMode, "mode" {
        #[default]
        MassAcceleration => "mass_acceleration", "Mass and acceleration",
        Force => "force", "Applied force",
    }
}

selector_enum! {
    /// Direction of the vertical acceleration
    MotionDirection, "direction" {
        #[default]
        Static => "static", "At rest",
        Up => "up", "Accelerating upward",
        Down => "down", "Accelerating downward",
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "mode": "mass_acceleration",
///   "mass": 10.0, "mass_unit": "kg",
///   "direction": "up",
///   "acceleration": 2.0, "acceleration_unit": "m/s²",
///   "tension_unit": "N"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TensionInput {
    #[serde(default)]
    pub mode: TensionMode,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub mass_unit: MassUnit,
    #[serde(default)]
    pub direction: MotionDirection,
    /// Magnitude, ignored when static
    #[serde(default)]
    pub acceleration: Option<f64>,
    #[serde(default)]
    pub acceleration_unit: AccelerationUnit,
    #[serde(default)]
    pub force: Option<f64>,
    #[serde(default)]
    pub force_unit: ForceUnit,
    #[serde(default)]
    pub tension_unit: ForceUnit,
}

impl TensionInput {
    pub fn validate(&self) -> CalcResult<()> {
        match self.mode {
            TensionMode::Force => {
                required_non_negative("force", self.force)?;
            }
            TensionMode::MassAcceleration => {
                required_positive("mass", self.mass)?;
                self.signed_acceleration()?;
            }
        }
        Ok(())
    }

    /// Vertical acceleration in m/s², positive upward
    fn signed_acceleration(&self) -> CalcResult<f64> {
        if self.direction == MotionDirection::Static {
            return Ok(0.0);
        }
        let magnitude = required_non_negative("acceleration", self.acceleration)?;
        let a = Quantity::new(magnitude, self.acceleration_unit).to_base();
        match self.direction {
            MotionDirection::Down if a >= STANDARD_GRAVITY => Err(CalcError::invalid_input(
                "acceleration",
                magnitude.to_string(),
                "Downward acceleration must be less than g, or the cord goes slack",
            )),
            MotionDirection::Down => Ok(-a),
            _ => Ok(a),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TensionResult {
    pub mode: TensionMode,
    pub tension: Quantity<ForceUnit>,
    /// m·g, mass mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Quantity<ForceUnit>>,
    pub steps: Vec<Step>,
}

impl CalculationReport for TensionResult {
    fn outputs(&self) -> Vec<Term> {
        let mut out = vec![Term::quantity("Tension T", &self.tension)];
        if let Some(w) = &self.weight {
            out.push(Term::quantity("Weight mg", w));
        }
        out
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &TensionInput) -> CalcResult<TensionResult> {
    input.validate()?;

    match input.mode {
        TensionMode::Force => {
            let force = Quantity::new(required_non_negative("force", input.force)?, input.force_unit);
            let tension = force.convert_to(input.tension_unit);
            ensure_finite(CALCULATION, TensionResult {
                mode: input.mode,
                tension,
                weight: None,
                steps: vec![Step::new("Tension")
                    .formula("T = F")
                    .with_quantity("F", &force)
                    .yields_quantity("T", &tension)],
            })
        }
        TensionMode::MassAcceleration => {
            let mass = Quantity::new(required_positive("mass", input.mass)?, input.mass_unit);
            let m = mass.to_base();
            let a = input.signed_acceleration()?;
            let g = STANDARD_GRAVITY;

            let weight = Quantity::from_base(static_tension(m, g), input.tension_unit);
            let mut steps = vec![Step::new("Weight")
                .formula("W = m·g")
                .with_quantity("m", &mass)
                .with("g", g, "m/s²")
                .yields_quantity("W", &weight)
                .equation(Equation::StaticTension)];

            let tension = match input.direction {
                MotionDirection::Static => weight,
                MotionDirection::Up | MotionDirection::Down => {
                    let t = Quantity::from_base(accelerating_tension(m, g, a), input.tension_unit);
                    let formula = if a >= 0.0 { "T = m(g + a)" } else { "T = m(g − a)" };
                    steps.push(
                        Step::new("Tension")
                            .formula(formula)
                            .with("a", a.abs(), "m/s²")
                            .yields_quantity("T", &t)
                            .equation(Equation::AcceleratingTension)
                            .note(input.direction.display_name()),
                    );
                    t
                }
            };

            ensure_finite(CALCULATION, TensionResult {
                mode: input.mode,
                tension,
                weight: Some(weight),
                steps,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hanging(direction: MotionDirection, acceleration: Option<f64>) -> TensionInput {
        TensionInput {
            mass: Some(10.0),
            direction,
            acceleration,
            ..Default::default()
        }
    }

    #[test]
    fn test_static() {
        let r = calculate(&hanging(MotionDirection::Static, None)).unwrap();
        assert!((r.tension.value - 98.0665).abs() < 1e-9);
    }

    #[test]
    fn test_accelerating() {
        let up = calculate(&hanging(MotionDirection::Up, Some(2.0))).unwrap();
        assert!((up.tension.value - 118.0665).abs() < 1e-9);

        let down = calculate(&hanging(MotionDirection::Down, Some(2.0))).unwrap();
        assert!((down.tension.value - 78.0665).abs() < 1e-9);
        assert!((down.weight.unwrap().value - 98.0665).abs() < 1e-9);
    }

    #[test]
    fn test_free_fall_rejected() {
        let input = TensionInput {
            acceleration_unit: AccelerationUnit::StandardGravity,
            ..hanging(MotionDirection::Down, Some(1.0))
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("acceleration"));
    }

    #[test]
    fn test_missing_acceleration() {
        let err = calculate(&hanging(MotionDirection::Up, None)).unwrap_err();
        assert_eq!(err, CalcError::missing_field("acceleration"));
    }

    #[test]
    fn test_direct_force() {
        let r = calculate(&TensionInput {
            mode: TensionMode::Force,
            force: Some(50.0),
            force_unit: ForceUnit::PoundForce,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.tension.unit, ForceUnit::Newton);
        assert!((r.tension.value - 222.411).abs() < 1e-3);
        assert!(r.weight.is_none());
    }

    #[test]
    fn test_mass_must_be_positive() {
        let input = TensionInput {
            mass: Some(0.0),
            ..Default::default()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("mass"));
    }
}
