//! Shared input checks.
//!
//! Calculator inputs arrive as `Option<f64>` fields: `None` means the field
//! was left blank. These helpers turn the common rules into [`CalcError`]s
//! that name the offending field.

use crate::errors::{CalcError, CalcResult};

/// Parse user text into an optional number.
///
/// Blank text is `Ok(None)`. Anything that is not a finite decimal number is
/// rejected, so `"abc"`, `"NaN"` and `"inf"` never reach a formula.
pub fn parse_number(field: &str, text: &str) -> CalcResult<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(CalcError::invalid_input(field, trimmed, "Value must be a finite number")),
    }
}

/// A field that must be present and finite.
pub fn required(field: &str, value: Option<f64>) -> CalcResult<f64> {
    let value = value.ok_or_else(|| CalcError::missing_field(field))?;
    finite(field, value)
}

pub fn finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

pub fn positive(field: &str, value: f64) -> CalcResult<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

pub fn non_negative(field: &str, value: f64) -> CalcResult<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(value)
}

/// A present, finite, strictly positive field.
pub fn required_positive(field: &str, value: Option<f64>) -> CalcResult<f64> {
    positive(field, required(field, value)?)
}

/// A present, finite, non-negative field.
pub fn required_non_negative(field: &str, value: Option<f64>) -> CalcResult<f64> {
    non_negative(field, required(field, value)?)
}

/// Guard a computed result before it is returned.
pub fn finite_result(calculation: &str, quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::calculation_failed(
            calculation,
            format!("{} is not a finite number", quantity),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("x", "  42.5 ").unwrap(), Some(42.5));
        assert_eq!(parse_number("x", "-1e3").unwrap(), Some(-1000.0));
        assert_eq!(parse_number("x", "   ").unwrap(), None);
        assert!(parse_number("x", "abc").is_err());
        assert!(parse_number("x", "NaN").is_err());
        assert!(parse_number("x", "inf").is_err());
    }

    #[test]
    fn test_required() {
        assert_eq!(required("mass", None).unwrap_err(), CalcError::missing_field("mass"));
        assert_eq!(required("mass", Some(2.0)).unwrap(), 2.0);
        assert!(required("mass", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_sign_checks() {
        assert!(positive("v", 0.0).is_err());
        assert!(positive("v", 1e-12).is_ok());
        assert!(non_negative("v", 0.0).is_ok());
        assert!(non_negative("v", -0.1).is_err());
        assert_eq!(required_positive("v", Some(-1.0)).unwrap_err().field(), Some("v"));
    }

    #[test]
    fn test_finite_result() {
        assert!(finite_result("Test", "x", f64::INFINITY).is_err());
        assert_eq!(finite_result("Test", "x", 3.0).unwrap(), 3.0);
    }
}
