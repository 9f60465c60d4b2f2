//! # Golden Ratio Calculation
//!
//! Divides, extends or checks lengths against the golden ratio
//! φ = (1 + √5)/2 ≈ 1.6180339887.
//!
//! ## Modes
//!
//! | Mode | Input x is | Produces |
//! |------|-----------|----------|
//! | `value` | the whole length | larger = x/φ, smaller = x − larger |
//! | `multiply` | the smaller part | larger = xφ, whole = x + xφ |
//! | `divide` | the larger part | smaller = x/φ, whole = x + x/φ |
//! | `rectangle` | the long side | short side = x/φ, area |
//! | `check` | a ratio | whether \|x − φ\| < 1e-4 |
//!
//! ## Example
//!
//! ```rust
//! use formula_core::calculations::golden_ratio::{calculate, GoldenRatioInput, GoldenRatioMode};
//!
//! let input = GoldenRatioInput { mode: GoldenRatioMode::Value, value: Some(100.0) };
//! let result = calculate(&input).unwrap();
//! assert!((result.larger.unwrap() - 61.8034).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{ensure_finite, CalculationReport};
use crate::constants::PHI;
use crate::equations::ratios::{golden_larger, golden_smaller, golden_split, is_golden_ratio};
use crate::equations::registry::Equation;
use crate::errors::CalcResult;
use crate::steps::{Step, Term};
use crate::validation::required_positive;

const CALCULATION: &str = "Golden ratio";

/// Ratios within this distance of φ count as golden
pub const GOLDEN_TOLERANCE: f64 = 1.0e-4;

selector_enum! {
    /// What the entered value represents
    GoldenRatioMode, "mode" {
        #[default]
        Value => "value", "Divide a whole",
        Multiply => "multiply", "Extend a smaller part",
        Divide => "divide", "Reduce a larger part",
        Rectangle => "rectangle", "Golden rectangle",
        Check => "check", "Check a ratio",
    }
}

/// Input parameters for the golden ratio calculator.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "rectangle", "value": 10.0 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoldenRatioInput {
    #[serde(default)]
    pub mode: GoldenRatioMode,

    /// Length or ratio, depending on mode
    pub value: Option<f64>,
}

impl GoldenRatioInput {
    pub fn validate(&self) -> CalcResult<()> {
        required_positive("value", self.value).map(|_| ())
    }
}

/// Results from the golden ratio calculator. Unused fields stay empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenRatioResult {
    pub mode: GoldenRatioMode,

    /// Larger part, or the long side of a rectangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub larger: Option<f64>,

    /// Smaller part, or the short side of a rectangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smaller: Option<f64>,

    /// Whole length (larger + smaller)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,

    /// Rectangle area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    /// Check mode: whether the ratio is golden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_golden: Option<bool>,

    /// Check mode: |x − φ|
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deviation: Option<f64>,

    pub steps: Vec<Step>,
}

impl CalculationReport for GoldenRatioResult {
    fn outputs(&self) -> Vec<Term> {
        let mut out = Vec::new();
        if let Some(v) = self.larger {
            out.push(Term::new("Larger part", v, ""));
        }
        if let Some(v) = self.smaller {
            out.push(Term::new("Smaller part", v, ""));
        }
        if let Some(v) = self.total {
            out.push(Term::new("Whole", v, ""));
        }
        if let Some(v) = self.area {
            out.push(Term::new("Area", v, ""));
        }
        if let Some(v) = self.deviation {
            out.push(Term::new("Deviation from φ", v, ""));
        }
        out
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Apply the golden ratio in the selected mode.
pub fn calculate(input: &GoldenRatioInput) -> CalcResult<GoldenRatioResult> {
    let x = required_positive("value", input.value)?;

    let mut result = GoldenRatioResult {
        mode: input.mode,
        larger: None,
        smaller: None,
        total: None,
        area: None,
        is_golden: None,
        deviation: None,
        steps: Vec::new(),
    };
    let phi_step = Step::new("Golden ratio")
        .formula("φ = (1 + √5) / 2")
        .yields("φ", PHI, "");

    match input.mode {
        GoldenRatioMode::Value => {
            let (larger, smaller) = golden_split(x);
            result.steps = vec![
                phi_step,
                Step::new("Larger part")
                    .formula("a = x / φ")
                    .with("x", x, "")
                    .yields("a", larger, "")
                    .equation(Equation::GoldenRatioSplit),
                Step::new("Smaller part")
                    .formula("b = x − a")
                    .yields("b", smaller, ""),
            ];
            result.larger = Some(larger);
            result.smaller = Some(smaller);
            result.total = Some(x);
        }
        GoldenRatioMode::Multiply => {
            let larger = golden_larger(x);
            result.steps = vec![
                phi_step,
                Step::new("Larger part")
                    .formula("a = b × φ")
                    .with("b", x, "")
                    .yields("a", larger, "")
                    .equation(Equation::GoldenRatioSplit),
                Step::new("Whole")
                    .formula("x = a + b")
                    .yields("x", larger + x, ""),
            ];
            result.larger = Some(larger);
            result.smaller = Some(x);
            result.total = Some(larger + x);
        }
        GoldenRatioMode::Divide => {
            let smaller = golden_smaller(x);
            result.steps = vec![
                phi_step,
                Step::new("Smaller part")
                    .formula("b = a / φ")
                    .with("a", x, "")
                    .yields("b", smaller, "")
                    .equation(Equation::GoldenRatioSplit),
                Step::new("Whole")
                    .formula("x = a + b")
                    .yields("x", x + smaller, ""),
            ];
            result.larger = Some(x);
            result.smaller = Some(smaller);
            result.total = Some(x + smaller);
        }
        GoldenRatioMode::Rectangle => {
            let short = golden_smaller(x);
            let area = x * short;
            result.steps = vec![
                phi_step,
                Step::new("Short side")
                    .formula("w = l / φ")
                    .with("l", x, "")
                    .yields("w", short, "")
                    .equation(Equation::GoldenRatioSplit),
                Step::new("Area")
                    .formula("A = l × w")
                    .yields("A", area, ""),
            ];
            result.larger = Some(x);
            result.smaller = Some(short);
            result.area = Some(area);
        }
        GoldenRatioMode::Check => {
            let golden = is_golden_ratio(x, GOLDEN_TOLERANCE);
            let deviation = (x - PHI).abs();
            result.steps = vec![
                phi_step,
                Step::new("Deviation")
                    .formula("|r − φ|")
                    .with("r", x, "")
                    .yields("Δ", deviation, "")
                    .equation(Equation::GoldenRatioCheck)
                    .note(if golden { "golden ratio" } else { "not the golden ratio" }),
            ];
            result.is_golden = Some(golden);
            result.deviation = Some(deviation);
        }
    }

    ensure_finite(CALCULATION, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(mode: GoldenRatioMode, value: f64) -> GoldenRatioInput {
        GoldenRatioInput { mode, value: Some(value) }
    }

    #[test]
    fn test_split_whole() {
        let r = calculate(&input(GoldenRatioMode::Value, 100.0)).unwrap();
        let (a, b) = (r.larger.unwrap(), r.smaller.unwrap());
        assert!((a - 61.803_398_875).abs() < 1e-6);
        assert!((b - 38.196_601_125).abs() < 1e-6);
        assert!((a / b - PHI).abs() < 1e-9);
    }

    #[test]
    fn test_multiply_and_divide() {
        let r = calculate(&input(GoldenRatioMode::Multiply, 10.0)).unwrap();
        assert!((r.larger.unwrap() - 16.180_339_887).abs() < 1e-6);
        assert!((r.total.unwrap() - 26.180_339_887).abs() < 1e-6);

        let r = calculate(&input(GoldenRatioMode::Divide, 10.0)).unwrap();
        assert!((r.smaller.unwrap() - 6.180_339_887).abs() < 1e-6);
        assert!((r.total.unwrap() - 16.180_339_887).abs() < 1e-6);
    }

    #[test]
    fn test_rectangle() {
        let r = calculate(&input(GoldenRatioMode::Rectangle, 10.0)).unwrap();
        assert!((r.smaller.unwrap() - 6.180_339_887).abs() < 1e-6);
        assert!((r.area.unwrap() - 61.803_398_875).abs() < 1e-6);
        assert!(r.total.is_none());
    }

    #[test]
    fn test_check() {
        let r = calculate(&input(GoldenRatioMode::Check, 1.618)).unwrap();
        assert_eq!(r.is_golden, Some(true));

        let r = calculate(&input(GoldenRatioMode::Check, 1.6)).unwrap();
        assert_eq!(r.is_golden, Some(false));
        assert!((r.deviation.unwrap() - 0.018_034).abs() < 1e-5);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = calculate(&input(GoldenRatioMode::Value, 0.0)).unwrap_err();
        assert_eq!(err.field(), Some("value"));

        let err = calculate(&GoldenRatioInput::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(GoldenRatioMode::from_str_flexible("Rectangle").unwrap(), GoldenRatioMode::Rectangle);
        assert!(GoldenRatioMode::from_str_flexible("spiral").is_err());
    }
}
