//! # Percentage Difference
//!
//! Symmetric comparison of two values against their mean:
//! |a − b| / |(a + b)/2| × 100. Swapping the values gives the same answer.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::equations::ratios::percentage_difference;
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::validation::{finite_result, required};

const CALCULATION: &str = "Percentage difference";

/// ## JSON Example
///
/// ```json
/// { "value_a": 10.0, "value_b": 15.0 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PercentageDifferenceInput {
    pub value_a: Option<f64>,
    pub value_b: Option<f64>,
}

impl PercentageDifferenceInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.values().map(|_| ())
    }

    fn values(&self) -> CalcResult<(f64, f64)> {
        let a = required("value_a", self.value_a)?;
        let b = required("value_b", self.value_b)?;
        if (a + b) / 2.0 == 0.0 {
            return Err(CalcError::calculation_failed(
                CALCULATION,
                "The average of the two values is zero",
            ));
        }
        Ok((a, b))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageDifferenceResult {
    pub percentage_difference: f64,

    /// |a − b|
    pub absolute_difference: f64,

    /// (a + b) / 2
    pub average: f64,

    pub steps: Vec<Step>,
}

impl CalculationReport for PercentageDifferenceResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::new("Percentage difference", self.percentage_difference, "%"),
            Term::new("Absolute difference", self.absolute_difference, ""),
            Term::new("Average", self.average, ""),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &PercentageDifferenceInput) -> CalcResult<PercentageDifferenceResult> {
    let (a, b) = input.values()?;

    let absolute_difference = finite_result(CALCULATION, "Absolute difference", (a - b).abs())?;
    let average = finite_result(CALCULATION, "Average", (a + b) / 2.0)?;
    let pct = finite_result(CALCULATION, "Percentage difference", percentage_difference(a, b))?;

    let steps = vec![
        Step::new("Absolute difference")
            .formula("|a − b|")
            .with("a", a, "")
            .with("b", b, "")
            .yields("|Δ|", absolute_difference, ""),
        Step::new("Average")
            .formula("(a + b) / 2")
            .yields("avg", average, ""),
        Step::new("Percentage difference")
            .formula("|Δ| / |avg| × 100")
            .yields("difference", pct, "%")
            .equation(Equation::PercentageDifference),
    ];

    Ok(PercentageDifferenceResult {
        percentage_difference: pct,
        absolute_difference,
        average,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(a: f64, b: f64) -> CalcResult<PercentageDifferenceResult> {
        calculate(&PercentageDifferenceInput {
            value_a: Some(a),
            value_b: Some(b),
        })
    }

    #[test]
    fn test_reference_values() {
        let r = diff(10.0, 15.0).unwrap();
        assert!((r.percentage_difference - 40.0).abs() < 1e-12);
        assert_eq!(r.absolute_difference, 5.0);
        assert_eq!(r.average, 12.5);
    }

    #[test]
    fn test_symmetric() {
        let ab = diff(3.0, 11.0).unwrap().percentage_difference;
        let ba = diff(11.0, 3.0).unwrap().percentage_difference;
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_negative_average_stays_positive() {
        let r = diff(-10.0, -15.0).unwrap();
        assert!((r.percentage_difference - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_average_rejected() {
        let err = diff(5.0, -5.0).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = diff(1e308, 1e308).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        let err = diff(1e308, -1e308 + 1e292).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_missing_value() {
        let err = calculate(&PercentageDifferenceInput {
            value_a: Some(1.0),
            value_b: None,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("value_b"));
    }
}
