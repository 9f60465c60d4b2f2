//! # Settings
//!
//! Engine-wide settings shared by every calculator: how results are
//! formatted and how the dry-bulb humidity solver searches.
//!
//! Settings are plain serde data. They can be built in code, or read from a
//! TOML file where every key is optional:
//!
//! ```toml
//! [format]
//! precision = 3
//! scientific_upper = 1e9
//!
//! [humidity_solver]
//! strategy = "fixed_step"
//! max_iterations = 500
//! ```
//!
//! ```rust
//! use formula_core::settings::{DryBulbStrategy, Settings};
//!
//! let settings = Settings::from_toml_str("[humidity_solver]\nstrategy = \"fixed_step\"").unwrap();
//! assert_eq!(settings.humidity_solver.strategy, DryBulbStrategy::FixedStep);
//! assert_eq!(settings.format.precision, 4);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "formulary.toml";

/// Root settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Numeric display rules
    pub format: FormatSettings,

    /// Dry-bulb temperature solver used by the relative humidity calculator
    pub humidity_solver: SolverSettings,
}

impl Settings {
    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` if given, otherwise from [`DEFAULT_SETTINGS_FILE`]
    /// when it exists, otherwise return defaults.
    ///
    /// An explicitly requested file that cannot be read is an error.
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_SETTINGS_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reject settings that would make formatting or solving meaningless.
    pub fn validate(&self) -> CalcResult<()> {
        self.format.validate()?;
        self.humidity_solver.validate()
    }
}

/// Rules for rendering numbers in results and steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Decimal places in fixed notation
    pub precision: usize,

    /// Magnitudes at or above this switch to scientific notation
    pub scientific_upper: f64,

    /// Non-zero magnitudes below this switch to scientific notation
    pub scientific_lower: f64,

    /// Mantissa digits in scientific notation
    pub scientific_digits: usize,

    /// Strip trailing zeros after the decimal point
    pub trim_trailing_zeros: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            precision: 4,
            scientific_upper: 1.0e6,
            scientific_lower: 1.0e-4,
            scientific_digits: 4,
            trim_trailing_zeros: true,
        }
    }
}

impl FormatSettings {
    fn validate(&self) -> CalcResult<()> {
        if self.precision > 15 {
            return Err(CalcError::invalid_input(
                "format.precision",
                self.precision.to_string(),
                "Precision must be at most 15 decimal places",
            ));
        }
        if !(self.scientific_lower > 0.0 && self.scientific_lower < self.scientific_upper) {
            return Err(CalcError::invalid_input(
                "format.scientific_lower",
                self.scientific_lower.to_string(),
                "Scientific thresholds must satisfy 0 < lower < upper",
            ));
        }
        Ok(())
    }
}

/// Search strategy for recovering dry-bulb temperature from dew point and RH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DryBulbStrategy {
    /// Bracketing bisection on [dew point, upper limit]
    #[default]
    Bisection,
    /// Hill climb from the dew point: +0.5 °C while short of the target
    /// pressure, −0.1 °C once past it
    FixedStep,
}

impl DryBulbStrategy {
    pub const ALL: [DryBulbStrategy; 2] = [DryBulbStrategy::Bisection, DryBulbStrategy::FixedStep];

    pub fn display_name(&self) -> &'static str {
        match self {
            DryBulbStrategy::Bisection => "Bisection",
            DryBulbStrategy::FixedStep => "Fixed step",
        }
    }
}

impl std::fmt::Display for DryBulbStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Dry-bulb solver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    pub strategy: DryBulbStrategy,

    /// Iteration cap
    pub max_iterations: u32,

    /// Convergence tolerance on vapour pressure, hPa
    pub tolerance_hpa: f64,

    /// Highest dry-bulb temperature the solver will consider, °C
    pub upper_limit_c: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            strategy: DryBulbStrategy::Bisection,
            max_iterations: 200,
            tolerance_hpa: 0.01,
            upper_limit_c: 100.0,
        }
    }
}

impl SolverSettings {
    fn validate(&self) -> CalcResult<()> {
        if self.max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "humidity_solver.max_iterations",
                "0",
                "Solver needs at least one iteration",
            ));
        }
        if !(self.tolerance_hpa > 0.0) {
            return Err(CalcError::invalid_input(
                "humidity_solver.tolerance_hpa",
                self.tolerance_hpa.to_string(),
                "Tolerance must be positive",
            ));
        }
        if !self.upper_limit_c.is_finite() {
            return Err(CalcError::invalid_input(
                "humidity_solver.upper_limit_c",
                self.upper_limit_c.to_string(),
                "Upper limit must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.format.precision, 4);
        assert_eq!(settings.humidity_solver.max_iterations, 200);
        assert_eq!(settings.humidity_solver.tolerance_hpa, 0.01);
        assert_eq!(settings.humidity_solver.strategy, DryBulbStrategy::Bisection);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_toml() {
        let text = r#"
            [format]
            precision = 2
            trim_trailing_zeros = false

            [humidity_solver]
            tolerance_hpa = 0.001
        "#;
        let settings = Settings::from_toml_str(text).unwrap();
        assert_eq!(settings.format.precision, 2);
        assert!(!settings.format.trim_trailing_zeros);
        assert_eq!(settings.format.scientific_upper, 1.0e6);
        assert_eq!(settings.humidity_solver.tolerance_hpa, 0.001);
        assert_eq!(settings.humidity_solver.max_iterations, 200);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let err = Settings::from_toml_str("[humidity_solver]\nmax_iterations = 0").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = Settings::from_toml_str("[format]\nprecision = \"four\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Settings::load_or_default(Some(Path::new("/nonexistent/formulary.toml"))).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
