//! # Work
//!
//! Work done by a constant force acting at angle θ to the displacement,
//! W = F·d·cos θ. Leave one of work, force and distance blank to solve
//! for it; if all three are given, force and distance win.
//!
//! Solving for force or distance divides by cos θ, so θ = 90° only
//! works in the forward direction.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::equations::mechanics::{distance_from_work, force_from_work, work_done};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::units::{EnergyUnit, ForceUnit, LengthUnit, Quantity};
use crate::validation::{finite, finite_result, non_negative, required, required_non_negative, required_positive};

const CALCULATION: &str = "Work";

/// Below this |cos θ| the force has no component along the path
const PERPENDICULAR_EPSILON: f64 = 1e-12;

/// Which quantity was solved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkUnknown {
    Work,
    Force,
    Distance,
}

/// ## JSON Example
///
/// ```json
/// {
///   "force": 50.0, "force_unit": "N",
///   "distance": 10.0, "distance_unit": "m",
///   "angle": 60.0,
///   "energy_unit": "J"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkInput {
    #[serde(default)]
    pub work: Option<f64>,
    #[serde(default)]
    pub energy_unit: EnergyUnit,
    #[serde(default)]
    pub force: Option<f64>,
    #[serde(default)]
    pub force_unit: ForceUnit,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub distance_unit: LengthUnit,
    /// Degrees between force and displacement, 0 to 180. Blank means 0.
    #[serde(default)]
    pub angle: Option<f64>,
}

impl WorkInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.angle_degrees()?;
        self.unknown()?;
        Ok(())
    }

    fn angle_degrees(&self) -> CalcResult<f64> {
        let theta = finite("angle", self.angle.unwrap_or(0.0))?;
        if !(0.0..=180.0).contains(&theta) {
            return Err(CalcError::invalid_input(
                "angle",
                theta.to_string(),
                "Angle must be between 0° and 180°",
            ));
        }
        Ok(theta)
    }

    fn unknown(&self) -> CalcResult<WorkUnknown> {
        match (self.work, self.force, self.distance) {
            (_, Some(_), Some(_)) => Ok(WorkUnknown::Work),
            (Some(_), Some(_), None) => Ok(WorkUnknown::Distance),
            (Some(_), None, Some(_)) => Ok(WorkUnknown::Force),
            _ => Err(CalcError::invalid_input(
                "inputs",
                "fewer than two values",
                "Enter any two of work, force and distance",
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkResult {
    pub solved_for: WorkUnknown,
    pub work: Quantity<EnergyUnit>,
    pub force: Quantity<ForceUnit>,
    pub distance: Quantity<LengthUnit>,
    /// Degrees
    pub angle: f64,
    pub steps: Vec<Step>,
}

impl CalculationReport for WorkResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Work W", &self.work),
            Term::quantity("Force F", &self.force),
            Term::quantity("Distance d", &self.distance),
            Term::new("Angle θ", self.angle, "°"),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &WorkInput) -> CalcResult<WorkResult> {
    let theta = input.angle_degrees()?;
    let solved_for = input.unknown()?;
    let rad = theta.to_radians();
    let cos = rad.cos();

    let (w, f, d, step) = match solved_for {
        WorkUnknown::Work => {
            let force = Quantity::new(required_non_negative("force", input.force)?, input.force_unit);
            let distance = Quantity::new(
                required_non_negative("distance", input.distance)?,
                input.distance_unit,
            );
            let (f, d) = (force.to_base(), distance.to_base());
            let w = work_done(f, d, rad);
            let step = Step::new("Work")
                .formula("W = F·d·cos θ")
                .with_quantity("F", &force)
                .with_quantity("d", &distance)
                .with("θ", theta, "°")
                .yields("W", w, "J");
            (w, f, d, step)
        }
        WorkUnknown::Distance => {
            let work = Quantity::new(required("work", input.work)?, input.energy_unit);
            let force = Quantity::new(required_positive("force", input.force)?, input.force_unit);
            check_not_perpendicular(cos, theta)?;
            let (w, f) = (work.to_base(), force.to_base());
            let d = non_negative("distance", distance_from_work(w, f, rad))?;
            let step = Step::new("Distance")
                .formula("d = W / (F·cos θ)")
                .with_quantity("W", &work)
                .with_quantity("F", &force)
                .with("θ", theta, "°")
                .yields("d", d, "m");
            (w, f, d, step)
        }
        WorkUnknown::Force => {
            let work = Quantity::new(required("work", input.work)?, input.energy_unit);
            let distance = Quantity::new(
                required_positive("distance", input.distance)?,
                input.distance_unit,
            );
            check_not_perpendicular(cos, theta)?;
            let (w, d) = (work.to_base(), distance.to_base());
            let f = non_negative("force", force_from_work(w, d, rad))?;
            let step = Step::new("Force")
                .formula("F = W / (d·cos θ)")
                .with_quantity("W", &work)
                .with_quantity("d", &distance)
                .with("θ", theta, "°")
                .yields("F", f, "N");
            (w, f, d, step)
        }
    };

    let work = Quantity::from_base(finite_result(CALCULATION, "Work", w)?, input.energy_unit);
    let force = Quantity::from_base(finite_result(CALCULATION, "Force", f)?, input.force_unit);
    let distance = Quantity::from_base(finite_result(CALCULATION, "Distance", d)?, input.distance_unit);

    let converted = match solved_for {
        WorkUnknown::Work => Step::new("Convert").yields_quantity("W", &work),
        WorkUnknown::Force => Step::new("Convert").yields_quantity("F", &force),
        WorkUnknown::Distance => Step::new("Convert").yields_quantity("d", &distance),
    };

    Ok(WorkResult {
        solved_for,
        work,
        force,
        distance,
        angle: theta,
        steps: vec![step.equation(Equation::MechanicalWork), converted],
    })
}

fn check_not_perpendicular(cos: f64, theta: f64) -> CalcResult<()> {
    if cos.abs() < PERPENDICULAR_EPSILON {
        return Err(CalcError::invalid_input(
            "angle",
            theta.to_string(),
            "A force perpendicular to the motion does no work; cannot solve for force or distance",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(work: Option<f64>, force: Option<f64>, distance: Option<f64>, angle: Option<f64>) -> WorkInput {
        WorkInput {
            work,
            force,
            distance,
            angle,
            ..Default::default()
        }
    }

    #[test]
    fn test_forward() {
        let r = calculate(&input(None, Some(50.0), Some(10.0), None)).unwrap();
        assert_eq!(r.solved_for, WorkUnknown::Work);
        assert!((r.work.value - 500.0).abs() < 1e-12);

        let r = calculate(&input(None, Some(50.0), Some(10.0), Some(60.0))).unwrap();
        assert!((r.work.value - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse() {
        let d = calculate(&input(Some(500.0), Some(50.0), None, None)).unwrap();
        assert_eq!(d.solved_for, WorkUnknown::Distance);
        assert!((d.distance.value - 10.0).abs() < 1e-12);

        let f = calculate(&input(Some(250.0), None, Some(10.0), Some(60.0))).unwrap();
        assert_eq!(f.solved_for, WorkUnknown::Force);
        assert!((f.force.value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_perpendicular() {
        let r = calculate(&input(None, Some(50.0), Some(10.0), Some(90.0))).unwrap();
        assert!(r.work.value.abs() < 1e-9);

        let err = calculate(&input(Some(100.0), Some(50.0), None, Some(90.0))).unwrap_err();
        assert_eq!(err.field(), Some("angle"));
    }

    #[test]
    fn test_imperial_units() {
        let r = calculate(&WorkInput {
            force: Some(1.0),
            force_unit: ForceUnit::PoundForce,
            distance: Some(1.0),
            distance_unit: LengthUnit::Foot,
            energy_unit: EnergyUnit::FootPound,
            ..Default::default()
        })
        .unwrap();
        assert!((r.work.value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects() {
        let err = calculate(&input(Some(100.0), None, None, None)).unwrap_err();
        assert_eq!(err.field(), Some("inputs"));

        let err = calculate(&input(None, Some(1.0), Some(1.0), Some(200.0))).unwrap_err();
        assert_eq!(err.field(), Some("angle"));

        let err = calculate(&input(None, Some(-5.0), Some(1.0), None)).unwrap_err();
        assert_eq!(err.field(), Some("force"));

        // Positive work with an opposing force has no solution
        let err = calculate(&input(Some(100.0), Some(10.0), None, Some(120.0))).unwrap_err();
        assert_eq!(err.field(), Some("distance"));
    }
}
