//! # Calculation Steps
//!
//! Calculators describe how they reached a result as a list of [`Step`]s.
//! A step is pure data: the formula in symbolic form, the numbers that were
//! substituted into it, and the value it produced. Turning that into text is
//! the job of the presentation layer ([`Step::render`] is a plain default).
//!
//! ```rust
//! use formula_core::steps::Step;
//! use formula_core::settings::FormatSettings;
//!
//! let step = Step::new("Charge")
//!     .formula("Q = C·V")
//!     .with("C", 1.0e-4, "F")
//!     .with("V", 12.0, "V")
//!     .yields("Q", 1.2e-3, "C");
//!
//! let text = step.render(&FormatSettings::default());
//! assert_eq!(text, "Charge: Q = C·V, with C = 0.0001 F, V = 12 V → Q = 0.0012 C");
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::format::format_with_unit;
use crate::settings::FormatSettings;
use crate::units::{Quantity, Unit};

/// A named number with an optional unit symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub symbol: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Term {
    pub fn new(symbol: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        Term {
            symbol: symbol.into(),
            value,
            unit: if unit.is_empty() { None } else { Some(unit) },
        }
    }

    /// Term for a value in its selected unit
    pub fn quantity<U: Unit>(symbol: impl Into<String>, quantity: &Quantity<U>) -> Self {
        Term::new(symbol, quantity.value, quantity.unit.symbol())
    }

    pub fn render(&self, settings: &FormatSettings) -> String {
        format!(
            "{} = {}",
            self.symbol,
            format_with_unit(self.value, self.unit.as_deref(), settings)
        )
    }
}

/// One step of a calculation walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Short heading ("Hoop stress", "Convert inputs")
    pub label: String,

    /// Symbolic formula, empty for purely informational steps
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expression: String,

    /// Values substituted into the formula
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Term>,

    /// Value the step produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Term>,

    /// Registry entry for the formula applied, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<Equation>,

    /// Free-text remark (classification, caveat)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Step {
    pub fn new(label: impl Into<String>) -> Self {
        Step {
            label: label.into(),
            expression: String::new(),
            inputs: Vec::new(),
            result: None,
            equation: None,
            note: None,
        }
    }

    pub fn formula(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    pub fn with(mut self, symbol: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        self.inputs.push(Term::new(symbol, value, unit));
        self
    }

    pub fn yields(mut self, symbol: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        self.result = Some(Term::new(symbol, value, unit));
        self
    }

    pub fn with_quantity<U: Unit>(mut self, symbol: impl Into<String>, quantity: &Quantity<U>) -> Self {
        self.inputs.push(Term::quantity(symbol, quantity));
        self
    }

    pub fn yields_quantity<U: Unit>(mut self, symbol: impl Into<String>, quantity: &Quantity<U>) -> Self {
        self.result = Some(Term::quantity(symbol, quantity));
        self
    }

    pub fn equation(mut self, equation: Equation) -> Self {
        self.equation = Some(equation);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Plain one-line rendering.
    pub fn render(&self, settings: &FormatSettings) -> String {
        let mut line = self.label.clone();
        if !self.expression.is_empty() {
            line.push_str(": ");
            line.push_str(&self.expression);
        }
        if !self.inputs.is_empty() {
            let inputs: Vec<String> = self.inputs.iter().map(|t| t.render(settings)).collect();
            line.push_str(", with ");
            line.push_str(&inputs.join(", "));
        }
        if let Some(result) = &self.result {
            line.push_str(" → ");
            line.push_str(&result.render(settings));
        }
        if let Some(note) = &self.note {
            line.push_str(" (");
            line.push_str(note);
            line.push(')');
        }
        line
    }
}

/// Render a step list as numbered lines.
pub fn render_steps(steps: &[Step], settings: &FormatSettings) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step.render(settings)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_informational_step() {
        let step = Step::new("Mode").note("solve for length");
        assert_eq!(step.render(&FormatSettings::default()), "Mode (solve for length)");
    }

    #[test]
    fn test_unitless_term() {
        let term = Term::new("ε", 0.05, "");
        assert!(term.unit.is_none());
        assert_eq!(term.render(&FormatSettings::default()), "ε = 0.05");
    }

    #[test]
    fn test_render_steps_numbered() {
        let steps = vec![
            Step::new("First").yields("x", 1.0, ""),
            Step::new("Second").yields("y", 2.0, "m"),
        ];
        let lines = render_steps(&steps, &FormatSettings::default());
        assert_eq!(lines, vec!["1. First → x = 1", "2. Second → y = 2 m"]);
    }

    #[test]
    fn test_quantity_terms_use_unit_symbol() {
        use crate::units::PressureUnit;

        let p = Quantity::new(2.0, PressureUnit::Megapascal);
        let step = Step::new("Pressure").with_quantity("p", &p);
        assert_eq!(step.inputs[0].unit.as_deref(), Some("MPa"));
        assert_eq!(step.render(&FormatSettings::default()), "Pressure, with p = 2 MPa");
    }

    #[test]
    fn test_step_serialization_skips_empty() {
        let step = Step::new("Mode");
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"label":"Mode"}"#);
    }
}
