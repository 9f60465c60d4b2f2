//! Plain-text rendering of calculation results.

use std::fmt::Write;

use formula_core::calculations::{CalculationOutput, CalculationReport};
use formula_core::settings::FormatSettings;
use formula_core::steps::render_steps;

/// Headline outputs, numbered steps, then warnings.
pub fn render_output(output: &CalculationOutput, settings: &FormatSettings) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", output.calc_type());
    let _ = writeln!(text, "{}", "=".repeat(output.calc_type().chars().count()));

    for term in output.outputs() {
        let _ = writeln!(text, "  {}", term.render(settings));
    }

    let steps = render_steps(output.steps(), settings);
    if !steps.is_empty() {
        let _ = writeln!(text, "\nSteps:");
        for step in &steps {
            let _ = writeln!(text, "  {}", step);
        }
    }

    let warnings = output.warnings();
    if !warnings.is_empty() {
        let _ = writeln!(text, "\nWarnings:");
        for warning in warnings {
            let _ = writeln!(text, "  ! {}", warning);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_core::calculations::CalculationItem;
    use formula_core::settings::Settings;

    fn output(json: &str) -> CalculationOutput {
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        item.calculate(&Settings::default()).unwrap()
    }

    #[test]
    fn test_render_lists_outputs_and_steps() {
        let out = output(r#"{ "calculator": "watts_to_amps", "power": 60, "voltage": 12 }"#);
        let text = render_output(&out, &FormatSettings::default());
        assert!(text.starts_with("Watts to Amps\n============="));
        assert!(text.contains("Current I = 5 A"));
        assert!(text.contains("Steps:\n  1. Current: I = P / V"));
        assert!(!text.contains("Warnings:"));
    }

    #[test]
    fn test_render_warnings() {
        let out = output(r#"{ "calculator": "water_viscosity", "temperature": 175 }"#);
        let text = render_output(&out, &FormatSettings::default());
        assert!(text.contains("Warnings:\n  ! "));
    }
}
