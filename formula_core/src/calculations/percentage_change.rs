//! # Percentage Change
//!
//! Relative change from an original value to a new value:
//! (new − old) / |old| × 100.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::equations::ratios::percentage_change;
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::validation::{finite_result, required};

const CALCULATION: &str = "Percentage change";

/// Direction of a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    NoChange,
}

impl ChangeDirection {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChangeDirection::Increase => "Increase",
            ChangeDirection::Decrease => "Decrease",
            ChangeDirection::NoChange => "No change",
        }
    }
}

impl std::fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// ## JSON Example
///
/// ```json
/// { "old_value": 50.0, "new_value": 65.0 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PercentageChangeInput {
    pub old_value: Option<f64>,
    pub new_value: Option<f64>,
}

impl PercentageChangeInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.values().map(|_| ())
    }

    fn values(&self) -> CalcResult<(f64, f64)> {
        let old = required("old_value", self.old_value)?;
        let new = required("new_value", self.new_value)?;
        if old == 0.0 {
            return Err(CalcError::invalid_input(
                "old_value",
                old.to_string(),
                "Original value cannot be zero",
            ));
        }
        Ok((old, new))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentageChangeResult {
    /// Signed percentage change
    pub percentage_change: f64,

    /// new − old
    pub absolute_change: f64,

    pub direction: ChangeDirection,

    pub steps: Vec<Step>,
}

impl CalculationReport for PercentageChangeResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::new("Percentage change", self.percentage_change, "%"),
            Term::new("Absolute change", self.absolute_change, ""),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &PercentageChangeInput) -> CalcResult<PercentageChangeResult> {
    let (old, new) = input.values()?;

    let absolute_change = finite_result(CALCULATION, "Absolute change", new - old)?;
    let pct = finite_result(CALCULATION, "Percentage change", percentage_change(old, new))?;
    let direction = if absolute_change > 0.0 {
        ChangeDirection::Increase
    } else if absolute_change < 0.0 {
        ChangeDirection::Decrease
    } else {
        ChangeDirection::NoChange
    };

    let steps = vec![
        Step::new("Difference")
            .formula("Δ = new − old")
            .with("new", new, "")
            .with("old", old, "")
            .yields("Δ", absolute_change, ""),
        Step::new("Percentage change")
            .formula("Δ / |old| × 100")
            .yields("change", pct, "%")
            .equation(Equation::PercentageChange)
            .note(direction.display_name()),
    ];

    Ok(PercentageChangeResult {
        percentage_change: pct,
        absolute_change,
        direction,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(old: f64, new: f64) -> CalcResult<PercentageChangeResult> {
        calculate(&PercentageChangeInput {
            old_value: Some(old),
            new_value: Some(new),
        })
    }

    #[test]
    fn test_increase() {
        let r = change(50.0, 65.0).unwrap();
        assert!((r.percentage_change - 30.0).abs() < 1e-12);
        assert_eq!(r.direction, ChangeDirection::Increase);
        assert_eq!(r.absolute_change, 15.0);
    }

    #[test]
    fn test_decrease() {
        let r = change(100.0, 75.0).unwrap();
        assert!((r.percentage_change + 25.0).abs() < 1e-12);
        assert_eq!(r.direction, ChangeDirection::Decrease);
    }

    #[test]
    fn test_negative_start_keeps_direction() {
        // -50 → -25 is an increase of 50%
        let r = change(-50.0, -25.0).unwrap();
        assert!((r.percentage_change - 50.0).abs() < 1e-12);
        assert_eq!(r.direction, ChangeDirection::Increase);
    }

    #[test]
    fn test_no_change() {
        let r = change(7.0, 7.0).unwrap();
        assert_eq!(r.percentage_change, 0.0);
        assert_eq!(r.direction, ChangeDirection::NoChange);
    }

    #[test]
    fn test_zero_original_rejected() {
        let err = change(0.0, 10.0).unwrap_err();
        assert_eq!(err.field(), Some("old_value"));
        assert!(err.to_string().contains("cannot be zero"));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = change(1e-320, 1e308).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        let err = change(-1e308, 1e308).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
