//! Value formatting for display.
//!
//! One set of rules for every calculator: fixed notation for ordinary
//! magnitudes, scientific notation for very large or very small ones, and
//! `"Invalid"` for anything non-finite.
//!
//! ```rust
//! use formula_core::format::format_value;
//! use formula_core::settings::FormatSettings;
//!
//! let fmt = FormatSettings::default();
//! assert_eq!(format_value(7.2, &fmt), "7.2");
//! assert_eq!(format_value(159_154.943, &fmt), "159154.943");
//! assert_eq!(format_value(2.5e-7, &fmt), "2.5000e-7");
//! assert_eq!(format_value(f64::NAN, &fmt), "Invalid");
//! ```

use crate::settings::FormatSettings;
use crate::units::{Quantity, Unit};

/// Placeholder shown for NaN and infinite values
pub const INVALID_VALUE: &str = "Invalid";

/// Format a number according to `settings`.
pub fn format_value(value: f64, settings: &FormatSettings) -> String {
    if !value.is_finite() {
        return INVALID_VALUE.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= settings.scientific_upper || (magnitude > 0.0 && magnitude < settings.scientific_lower) {
        return format!("{:.*e}", settings.scientific_digits, value);
    }

    let fixed = format!("{:.*}", settings.precision, value);
    let fixed = if settings.trim_trailing_zeros {
        trim_zeros(&fixed)
    } else {
        fixed
    };

    // "-0" reads as a sign error to users
    if fixed == "-0" {
        "0".to_string()
    } else {
        fixed
    }
}

/// Format a quantity as `"<value> <symbol>"`.
pub fn format_quantity<U: Unit>(quantity: &Quantity<U>, settings: &FormatSettings) -> String {
    format!("{} {}", format_value(quantity.value, settings), quantity.unit.symbol())
}

/// Format a number with an optional free-text unit suffix.
pub fn format_with_unit(value: f64, unit: Option<&str>, settings: &FormatSettings) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{} {}", format_value(value, settings), unit),
        _ => format_value(value, settings),
    }
}

fn trim_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::CapacitanceUnit;

    #[test]
    fn test_fixed_notation() {
        let fmt = FormatSettings::default();
        assert_eq!(format_value(30.0, &fmt), "30");
        assert_eq!(format_value(-25.0, &fmt), "-25");
        assert_eq!(format_value(1.6180339887, &fmt), "1.618");
        assert_eq!(format_value(0.0, &fmt), "0");
    }

    #[test]
    fn test_negative_zero() {
        let fmt = FormatSettings::default();
        assert_eq!(format_value(-0.00001, &FormatSettings { scientific_lower: 1e-9, ..fmt }), "0");
    }

    #[test]
    fn test_scientific_thresholds() {
        let fmt = FormatSettings::default();
        assert_eq!(format_value(4.0e7, &fmt), "4.0000e7");
        assert_eq!(format_value(999_999.0, &fmt), "999999");
        assert_eq!(format_value(0.0001, &fmt), "0.0001");
        assert_eq!(format_value(0.00009, &fmt), "9.0000e-5");
    }

    #[test]
    fn test_no_trimming() {
        let fmt = FormatSettings {
            precision: 2,
            trim_trailing_zeros: false,
            ..FormatSettings::default()
        };
        assert_eq!(format_value(5.0, &fmt), "5.00");
    }

    #[test]
    fn test_non_finite() {
        let fmt = FormatSettings::default();
        assert_eq!(format_value(f64::INFINITY, &fmt), "Invalid");
        assert_eq!(format_value(f64::NEG_INFINITY, &fmt), "Invalid");
    }

    #[test]
    fn test_quantity() {
        let fmt = FormatSettings::default();
        let q = Quantity::new(100.0, CapacitanceUnit::Microfarad);
        assert_eq!(format_quantity(&q, &fmt), "100 μF");
        assert_eq!(format_with_unit(12.0, Some("V"), &fmt), "12 V");
        assert_eq!(format_with_unit(12.0, None, &fmt), "12");
    }
}
