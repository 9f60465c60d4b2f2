//! # Elongation
//!
//! Engineering strain from any two of original length L₀, final length L
//! and change in length ΔL = L − L₀. When all three are given, L₀ and L
//! win and a disagreeing ΔL is reported as a warning.
//!
//! ΔL may be negative (shortening); both lengths must be positive.

use serde::{Deserialize, Serialize};

use crate::calculations::{ensure_finite, CalculationReport};
use crate::equations::mechanics::engineering_strain;
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::units::{LengthUnit, Quantity};
use crate::validation::{finite, positive};

const CALCULATION: &str = "Elongation";

const AGREEMENT_TOLERANCE: f64 = 1e-9;

/// ## JSON Example
///
/// ```json
/// { "original_length": 100.0, "final_length": 102.0, "length_unit": "mm" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElongationInput {
    #[serde(default)]
    pub original_length: Option<f64>,
    #[serde(default)]
    pub final_length: Option<f64>,
    #[serde(default)]
    pub elongation: Option<f64>,
    /// Unit of all three lengths, in and out
    #[serde(default)]
    pub length_unit: LengthUnit,
}

impl ElongationInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.resolve()?;
        Ok(())
    }

    /// (L₀, L, ΔL) in the input unit
    fn resolve(&self) -> CalcResult<(f64, f64, f64)> {
        let l0 = self.original_length.map(|v| positive("original_length", v)).transpose()?;
        let l = self.final_length.map(|v| positive("final_length", v)).transpose()?;
        let dl = self.elongation.map(|v| finite("elongation", v)).transpose()?;

        match (l0, l, dl) {
            (Some(l0), Some(l), _) => Ok((l0, l, l - l0)),
            (Some(l0), None, Some(dl)) => Ok((l0, positive("final_length", l0 + dl)?, dl)),
            (None, Some(l), Some(dl)) => Ok((positive("original_length", l - dl)?, l, dl)),
            _ => Err(CalcError::invalid_input(
                "inputs",
                "fewer than two values",
                "Enter any two of original length, final length and elongation",
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElongationResult {
    pub original_length: Quantity<LengthUnit>,
    pub final_length: Quantity<LengthUnit>,
    pub elongation: Quantity<LengthUnit>,
    /// ΔL / L₀
    pub strain: f64,
    pub percent_elongation: f64,
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CalculationReport for ElongationResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Original length L₀", &self.original_length),
            Term::quantity("Final length L", &self.final_length),
            Term::quantity("Elongation ΔL", &self.elongation),
            Term::new("Strain ε", self.strain, ""),
            Term::new("Elongation", self.percent_elongation, "%"),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

pub fn calculate(input: &ElongationInput) -> CalcResult<ElongationResult> {
    let (l0, l, dl) = input.resolve()?;
    let unit = input.length_unit;
    let (original, fin, change) = (Quantity::new(l0, unit), Quantity::new(l, unit), Quantity::new(dl, unit));

    let mut warnings = Vec::new();
    if let (Some(_), Some(_), Some(given)) = (input.original_length, input.final_length, input.elongation) {
        if (given - dl).abs() > AGREEMENT_TOLERANCE * l0.max(l) {
            warnings.push(format!(
                "Given elongation {} {} does not match L − L₀ = {} {}; using the lengths",
                given, unit, dl, unit
            ));
        }
    }

    let solved = match (input.original_length, input.final_length) {
        (Some(_), Some(_)) => Step::new("Elongation").formula("ΔL = L − L₀").yields_quantity("ΔL", &change),
        (Some(_), None) => Step::new("Final length").formula("L = L₀ + ΔL").yields_quantity("L", &fin),
        _ => Step::new("Original length").formula("L₀ = L − ΔL").yields_quantity("L₀", &original),
    };

    // Ratio of like units, so no base conversion
    let strain = engineering_strain(l0, dl);
    let percent = strain * 100.0;

    let steps = vec![
        solved,
        Step::new("Strain")
            .formula("ε = ΔL / L₀")
            .with_quantity("ΔL", &change)
            .with_quantity("L₀", &original)
            .yields("ε", strain, "")
            .equation(Equation::EngineeringStrain),
        Step::new("Percent elongation").formula("ε × 100").yields("ε", percent, "%"),
    ];

    ensure_finite(CALCULATION, ElongationResult {
        original_length: original,
        final_length: fin,
        elongation: change,
        strain,
        percent_elongation: percent,
        steps,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(l0: Option<f64>, l: Option<f64>, dl: Option<f64>) -> ElongationInput {
        ElongationInput {
            original_length: l0,
            final_length: l,
            elongation: dl,
            length_unit: LengthUnit::Millimeter,
        }
    }

    #[test]
    fn test_any_two_of_three() {
        for input in [
            lengths(Some(100.0), Some(102.0), None),
            lengths(Some(100.0), None, Some(2.0)),
            lengths(None, Some(102.0), Some(2.0)),
        ] {
            let r = calculate(&input).unwrap();
            assert!((r.original_length.value - 100.0).abs() < 1e-12);
            assert!((r.final_length.value - 102.0).abs() < 1e-12);
            assert!((r.elongation.value - 2.0).abs() < 1e-12);
            assert!((r.strain - 0.02).abs() < 1e-12);
            assert!((r.percent_elongation - 2.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_shortening() {
        let r = calculate(&lengths(Some(50.0), None, Some(-1.0))).unwrap();
        assert!((r.strain + 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_lengths_win_over_conflicting_elongation() {
        let r = calculate(&lengths(Some(100.0), Some(102.0), Some(5.0))).unwrap();
        assert!((r.elongation.value - 2.0).abs() < 1e-12);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn test_errors() {
        let err = calculate(&lengths(Some(100.0), None, None)).unwrap_err();
        assert_eq!(err.field(), Some("inputs"));

        let err = calculate(&lengths(Some(10.0), None, Some(-10.0))).unwrap_err();
        assert_eq!(err.field(), Some("final_length"));

        let err = calculate(&lengths(Some(-1.0), Some(2.0), None)).unwrap_err();
        assert_eq!(err.field(), Some("original_length"));
    }
}
