//! # Slope Percentage
//!
//! Expresses a slope as a ratio, a percentage grade and an inclination
//! angle, from a rise and run, from two points, or from a known ratio.
//!
//! ## Grade Classes
//!
//! | \|grade\| | Class |
//! |---------|-------|
//! | < 0.01% | Horizontal |
//! | < 5% | Very gentle |
//! | < 10% | Gentle |
//! | < 25% | Moderate |
//! | < 50% | Steep |
//! | ≥ 50% | Very steep |

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::equations::ratios::{slope_angle_degrees, slope_from_points, slope_from_rise_run, slope_percentage};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::validation::{finite_result, required};

const CALCULATION: &str = "Slope percentage";

/// Run used to illustrate a slope entered as a bare ratio
pub const REFERENCE_RUN: f64 = 100.0;

selector_enum! {
    SlopeMode, "mode" {
        #[default]
        RiseRun => "rise_run", "Rise and run",
        TwoPoints => "two_points", "Two points",
        Slope => "slope", "Slope ratio",
    }
}

/// Qualitative steepness of a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeClass {
    Horizontal,
    VeryGentle,
    Gentle,
    Moderate,
    Steep,
    VerySteep,
}

impl GradeClass {
    /// Classify a percentage grade by its magnitude
    pub fn from_percentage(percentage: f64) -> Self {
        let grade = percentage.abs();
        if grade < 0.01 {
            GradeClass::Horizontal
        } else if grade < 5.0 {
            GradeClass::VeryGentle
        } else if grade < 10.0 {
            GradeClass::Gentle
        } else if grade < 25.0 {
            GradeClass::Moderate
        } else if grade < 50.0 {
            GradeClass::Steep
        } else {
            GradeClass::VerySteep
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GradeClass::Horizontal => "Essentially horizontal",
            GradeClass::VeryGentle => "Very gentle",
            GradeClass::Gentle => "Gentle",
            GradeClass::Moderate => "Moderate",
            GradeClass::Steep => "Steep",
            GradeClass::VerySteep => "Very steep",
        }
    }
}

impl std::fmt::Display for GradeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fields used depend on the mode: `rise`/`run`, `x1`/`y1`/`x2`/`y2`, or `slope`.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "two_points", "x1": 0.0, "y1": 0.0, "x2": 50.0, "y2": 4.0 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlopeInput {
    #[serde(default)]
    pub mode: SlopeMode,
    #[serde(default)]
    pub rise: Option<f64>,
    #[serde(default)]
    pub run: Option<f64>,
    #[serde(default)]
    pub x1: Option<f64>,
    #[serde(default)]
    pub y1: Option<f64>,
    #[serde(default)]
    pub x2: Option<f64>,
    #[serde(default)]
    pub y2: Option<f64>,
    /// Slope as a ratio (0.05 for a 5% grade)
    #[serde(default)]
    pub slope: Option<f64>,
}

impl SlopeInput {
    pub fn validate(&self) -> CalcResult<()> {
        calculate(self).map(|_| ())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlopeResult {
    pub mode: SlopeMode,
    /// rise / run
    pub slope: f64,
    pub percentage: f64,
    pub angle_degrees: f64,
    pub rise: f64,
    pub run: f64,
    pub classification: GradeClass,
    pub steps: Vec<Step>,
}

impl CalculationReport for SlopeResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::new("Slope", self.slope, ""),
            Term::new("Grade", self.percentage, "%"),
            Term::new("Angle", self.angle_degrees, "°"),
            Term::new("Rise", self.rise, ""),
            Term::new("Run", self.run, ""),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &SlopeInput) -> CalcResult<SlopeResult> {
    let mut steps = Vec::new();

    let (rise, run, slope) = match input.mode {
        SlopeMode::RiseRun => {
            let rise = required("rise", input.rise)?;
            let run = required("run", input.run)?;
            if run == 0.0 {
                return Err(CalcError::invalid_input("run", "0", "Run cannot be zero"));
            }
            let slope = slope_from_rise_run(rise, run);
            steps.push(
                Step::new("Slope")
                    .formula("m = rise / run")
                    .with("rise", rise, "")
                    .with("run", run, "")
                    .yields("m", slope, "")
                    .equation(Equation::SlopeRatio),
            );
            (rise, run, slope)
        }
        SlopeMode::TwoPoints => {
            let x1 = required("x1", input.x1)?;
            let y1 = required("y1", input.y1)?;
            let x2 = required("x2", input.x2)?;
            let y2 = required("y2", input.y2)?;
            if x1 == x2 {
                return Err(CalcError::invalid_input(
                    "x2",
                    x2.to_string(),
                    "x-coordinates are equal, the line is vertical",
                ));
            }
            let rise = y2 - y1;
            let run = x2 - x1;
            let slope = slope_from_points(x1, y1, x2, y2);
            steps.push(
                Step::new("Rise")
                    .formula("y₂ − y₁")
                    .with("y₂", y2, "")
                    .with("y₁", y1, "")
                    .yields("rise", rise, ""),
            );
            steps.push(
                Step::new("Run")
                    .formula("x₂ − x₁")
                    .with("x₂", x2, "")
                    .with("x₁", x1, "")
                    .yields("run", run, ""),
            );
            steps.push(
                Step::new("Slope")
                    .formula("m = rise / run")
                    .yields("m", slope, "")
                    .equation(Equation::SlopeRatio),
            );
            (rise, run, slope)
        }
        SlopeMode::Slope => {
            let slope = required("slope", input.slope)?;
            let rise = slope * REFERENCE_RUN;
            steps.push(
                Step::new("Reference rise")
                    .formula("rise = m × 100")
                    .with("m", slope, "")
                    .yields("rise", rise, "")
                    .note("for a run of 100"),
            );
            (rise, REFERENCE_RUN, slope)
        }
    };

    let rise = finite_result(CALCULATION, "Rise", rise)?;
    let run = finite_result(CALCULATION, "Run", run)?;
    let slope = finite_result(CALCULATION, "Slope", slope)?;
    let percentage = finite_result(CALCULATION, "Grade", slope_percentage(slope))?;
    let angle_degrees = slope_angle_degrees(slope);
    let classification = GradeClass::from_percentage(percentage);

    steps.push(
        Step::new("Grade")
            .formula("m × 100")
            .yields("grade", percentage, "%")
            .note(classification.display_name()),
    );
    steps.push(
        Step::new("Angle")
            .formula("θ = atan(m)")
            .yields("θ", angle_degrees, "°")
            .equation(Equation::SlopeAngle),
    );

    Ok(SlopeResult {
        mode: input.mode,
        slope,
        percentage,
        angle_degrees,
        rise,
        run,
        classification,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rise_run() {
        let r = calculate(&SlopeInput {
            rise: Some(1.0),
            run: Some(1.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.percentage, 100.0);
        assert!((r.angle_degrees - 45.0).abs() < 1e-12);
        assert_eq!(r.classification, GradeClass::VerySteep);
    }

    #[test]
    fn test_two_points() {
        let r = calculate(&SlopeInput {
            mode: SlopeMode::TwoPoints,
            x1: Some(0.0),
            y1: Some(0.0),
            x2: Some(50.0),
            y2: Some(4.0),
            ..Default::default()
        })
        .unwrap();
        assert!((r.percentage - 8.0).abs() < 1e-12);
        assert_eq!(r.rise, 4.0);
        assert_eq!(r.run, 50.0);
        assert_eq!(r.classification, GradeClass::Gentle);
    }

    #[test]
    fn test_slope_ratio_uses_reference_run() {
        let r = calculate(&SlopeInput {
            mode: SlopeMode::Slope,
            slope: Some(-0.03),
            ..Default::default()
        })
        .unwrap();
        assert!((r.rise + 3.0).abs() < 1e-12);
        assert_eq!(r.run, 100.0);
        assert!(r.angle_degrees < 0.0);
        assert_eq!(r.classification, GradeClass::VeryGentle);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(GradeClass::from_percentage(0.0), GradeClass::Horizontal);
        assert_eq!(GradeClass::from_percentage(5.0), GradeClass::Gentle);
        assert_eq!(GradeClass::from_percentage(-12.0), GradeClass::Moderate);
        assert_eq!(GradeClass::from_percentage(25.0), GradeClass::Steep);
    }

    #[test]
    fn test_vertical_rejected() {
        let err = calculate(&SlopeInput {
            rise: Some(3.0),
            run: Some(0.0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("run"));

        let err = calculate(&SlopeInput {
            mode: SlopeMode::TwoPoints,
            x1: Some(2.0),
            y1: Some(0.0),
            x2: Some(2.0),
            y2: Some(5.0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("x2"));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = calculate(&SlopeInput {
            mode: SlopeMode::Slope,
            slope: Some(1e308),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        let err = calculate(&SlopeInput {
            rise: Some(1e308),
            run: Some(1e-10),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
