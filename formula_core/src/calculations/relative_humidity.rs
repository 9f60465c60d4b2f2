//! # Relative Humidity
//!
//! Moist-air state from any two of dry-bulb temperature, dew point and
//! relative humidity, using the Magnus saturation vapour pressure.
//!
//! | Given | Solved | Method |
//! |-------|--------|--------|
//! | T, T_d | RH | e_s(T_d)/e_s(T) × 100 |
//! | T, RH | T_d | inverse Magnus |
//! | T_d, RH | T | numeric search (see [`solve_dry_bulb`]) |
//!
//! The dry-bulb search is configured through [`SolverSettings`]. A search
//! that stops before reaching tolerance still returns its estimate, with a
//! warning.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::CalculationReport;
use crate::constants::{MAGNUS_FIT_MAX_C, MAGNUS_FIT_MIN_C, MAGNUS_MIN_C};
use crate::equations::psychrometrics::{
    dew_point, relative_humidity, saturation_vapor_pressure, solve_dry_bulb, DryBulbSolution,
};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::settings::SolverSettings;
use crate::steps::{Step, Term};
use crate::units::thermal::{from_celsius, to_celsius};
use crate::units::{Quantity, TemperatureUnit, Unit};
use crate::validation::{finite, finite_result};

const CALCULATION: &str = "Relative humidity";

/// Which of the three quantities was left blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityUnknown {
    RelativeHumidity,
    DewPoint,
    DryBulb,
}

/// Leave exactly one of the three values blank.
///
/// ## JSON Example
///
/// ```json
/// { "dry_bulb": 25.0, "dew_point": 15.0, "temperature_unit": "°C" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelativeHumidityInput {
    #[serde(default)]
    pub dry_bulb: Option<f64>,
    #[serde(default)]
    pub dew_point: Option<f64>,
    /// Percent, 0 to 100
    #[serde(default)]
    pub relative_humidity: Option<f64>,
    /// Unit of both temperatures, in and out
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
}

/// Validated inputs, temperatures in °C
enum Known {
    DryDew { dry_c: f64, dew_c: f64 },
    DryRh { dry_c: f64, rh: f64 },
    DewRh { dew_c: f64, rh: f64 },
}

impl RelativeHumidityInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.known().map(|_| ())
    }

    fn celsius(&self, field: &str, value: f64) -> CalcResult<f64> {
        let value = finite(field, value)?;
        if self.temperature_unit.to_base(value) <= 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Temperature must be above absolute zero",
            ));
        }
        let celsius = to_celsius(value, self.temperature_unit);
        if celsius < MAGNUS_MIN_C {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                format!("Temperature must be at least {} °C for the Magnus approximation", MAGNUS_MIN_C),
            ));
        }
        Ok(celsius)
    }

    fn humidity(&self, value: f64, solving_temperature: bool) -> CalcResult<f64> {
        let rh = finite("relative_humidity", value)?;
        if !(0.0..=100.0).contains(&rh) {
            return Err(CalcError::invalid_input(
                "relative_humidity",
                rh.to_string(),
                "Relative humidity must be between 0% and 100%",
            ));
        }
        if solving_temperature && rh == 0.0 {
            return Err(CalcError::invalid_input(
                "relative_humidity",
                rh.to_string(),
                "Relative humidity must be greater than 0% to solve for a temperature",
            ));
        }
        Ok(rh)
    }

    fn known(&self) -> CalcResult<Known> {
        match (self.dry_bulb, self.dew_point, self.relative_humidity) {
            (Some(dry), Some(dew), None) => {
                let dry_c = self.celsius("dry_bulb", dry)?;
                let dew_c = self.celsius("dew_point", dew)?;
                if dew_c > dry_c {
                    return Err(CalcError::invalid_input(
                        "dew_point",
                        dew.to_string(),
                        "Dew point cannot exceed the dry-bulb temperature",
                    ));
                }
                Ok(Known::DryDew { dry_c, dew_c })
            }
            (Some(dry), None, Some(rh)) => Ok(Known::DryRh {
                dry_c: self.celsius("dry_bulb", dry)?,
                rh: self.humidity(rh, true)?,
            }),
            (None, Some(dew), Some(rh)) => Ok(Known::DewRh {
                dew_c: self.celsius("dew_point", dew)?,
                rh: self.humidity(rh, true)?,
            }),
            (dry, dew, rh) => {
                let given = [dry, dew, rh].iter().filter(|v| v.is_some()).count();
                Err(CalcError::invalid_input(
                    "inputs",
                    format!("{} values", given),
                    "Enter exactly two of dry-bulb temperature, dew point and relative humidity",
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeHumidityResult {
    pub solved_for: HumidityUnknown,
    pub dry_bulb: Quantity<TemperatureUnit>,
    pub dew_point: Quantity<TemperatureUnit>,
    /// Percent
    pub relative_humidity: f64,
    /// e_s at the dry-bulb temperature, hPa
    pub saturation_pressure_hpa: f64,
    /// Actual vapour pressure (e_s at the dew point), hPa
    pub vapor_pressure_hpa: f64,
    /// Search details when the dry-bulb was solved for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<DryBulbSolution>,
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CalculationReport for RelativeHumidityResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::new("Relative humidity", self.relative_humidity, "%"),
            Term::quantity("Dry-bulb temperature", &self.dry_bulb),
            Term::quantity("Dew point", &self.dew_point),
            Term::new("Saturation vapour pressure", self.saturation_pressure_hpa, "hPa"),
            Term::new("Vapour pressure", self.vapor_pressure_hpa, "hPa"),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

pub fn calculate(input: &RelativeHumidityInput, solver: &SolverSettings) -> CalcResult<RelativeHumidityResult> {
    let unit = input.temperature_unit;
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut solution = None;

    let (solved_for, dry_c, dew_c, rh) = match input.known()? {
        Known::DryDew { dry_c, dew_c } => {
            let rh = finite_result(CALCULATION, "Relative humidity", relative_humidity(dry_c, dew_c))?;
            steps.push(
                Step::new("Saturation pressures")
                    .formula("e_s(T) = 6.112·exp(17.67T / (T + 243.5))")
                    .with("T", dry_c, "°C")
                    .with("T_d", dew_c, "°C")
                    .equation(Equation::MagnusSaturationPressure),
            );
            steps.push(
                Step::new("Relative humidity")
                    .formula("RH = e_s(T_d) / e_s(T) × 100")
                    .yields("RH", rh, "%")
                    .equation(Equation::RelativeHumidity),
            );
            (HumidityUnknown::RelativeHumidity, dry_c, dew_c, rh)
        }
        Known::DryRh { dry_c, rh } => {
            let e = saturation_vapor_pressure(dry_c) * rh / 100.0;
            let dew_c = finite_result(CALCULATION, "Dew point", dew_point(dry_c, rh))?;
            if dew_c < MAGNUS_MIN_C {
                return Err(CalcError::calculation_failed(
                    CALCULATION,
                    format!("Dew point {:.1} °C is below the {} °C limit of the Magnus approximation", dew_c, MAGNUS_MIN_C),
                ));
            }
            steps.push(
                Step::new("Vapour pressure")
                    .formula("e = e_s(T) × RH / 100")
                    .with("T", dry_c, "°C")
                    .with("RH", rh, "%")
                    .yields("e", e, "hPa")
                    .equation(Equation::MagnusSaturationPressure),
            );
            steps.push(
                Step::new("Dew point")
                    .formula("T_d = 243.5γ / (17.67 − γ), γ = ln(e / 6.112)")
                    .yields("T_d", dew_c, "°C")
                    .equation(Equation::MagnusDewPoint),
            );
            (HumidityUnknown::DewPoint, dry_c, dew_c, rh)
        }
        Known::DewRh { dew_c, rh } => {
            let target = saturation_vapor_pressure(dew_c) * 100.0 / rh;
            let found = solve_dry_bulb(dew_c, rh, solver)?;
            steps.push(
                Step::new("Target saturation pressure")
                    .formula("e_s(T) = e_s(T_d) × 100 / RH")
                    .with("T_d", dew_c, "°C")
                    .with("RH", rh, "%")
                    .yields("e_s", target, "hPa")
                    .equation(Equation::MagnusSaturationPressure),
            );
            steps.push(
                Step::new("Dry-bulb search")
                    .formula("find T with |e_s(T) − target| < tolerance")
                    .with("tolerance", solver.tolerance_hpa, "hPa")
                    .yields("T", found.dry_bulb_c, "°C")
                    .equation(Equation::RelativeHumidity)
                    .note(format!("{}, {} iterations", found.strategy.display_name(), found.iterations)),
            );
            if !found.converged {
                warnings.push(format!(
                    "Dry-bulb search stopped after {} iterations with a residual of {:.4} hPa",
                    found.iterations, found.residual_hpa
                ));
            }
            let dry_c = found.dry_bulb_c;
            solution = Some(found);
            (HumidityUnknown::DryBulb, dry_c, dew_c, rh)
        }
    };

    for (name, t) in [("Dry-bulb temperature", dry_c), ("Dew point", dew_c)] {
        if !(MAGNUS_FIT_MIN_C..=MAGNUS_FIT_MAX_C).contains(&t) {
            warn!(temperature_c = t, "temperature outside the Magnus fitted range");
            warnings.push(format!(
                "{} {:.1} °C is outside the fitted range of {} °C to {} °C",
                name, t, MAGNUS_FIT_MIN_C, MAGNUS_FIT_MAX_C
            ));
        }
    }

    let dry_bulb = Quantity::new(from_celsius(dry_c, unit), unit);
    let dew = Quantity::new(from_celsius(dew_c, unit), unit);
    if unit != TemperatureUnit::Celsius {
        let converted = match solved_for {
            HumidityUnknown::DewPoint => Some(("T_d", &dew)),
            HumidityUnknown::DryBulb => Some(("T", &dry_bulb)),
            HumidityUnknown::RelativeHumidity => None,
        };
        if let Some((symbol, q)) = converted {
            steps.push(Step::new("Convert").yields_quantity(symbol, q));
        }
    }

    Ok(RelativeHumidityResult {
        solved_for,
        dry_bulb,
        dew_point: dew,
        relative_humidity: rh,
        saturation_pressure_hpa: saturation_vapor_pressure(dry_c),
        vapor_pressure_hpa: saturation_vapor_pressure(dew_c),
        solver: solution,
        steps,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DryBulbStrategy;

    fn solve(dry: Option<f64>, dew: Option<f64>, rh: Option<f64>) -> CalcResult<RelativeHumidityResult> {
        calculate(
            &RelativeHumidityInput {
                dry_bulb: dry,
                dew_point: dew,
                relative_humidity: rh,
                temperature_unit: TemperatureUnit::Celsius,
            },
            &SolverSettings::default(),
        )
    }

    #[test]
    fn test_rh_from_temperatures() {
        let r = solve(Some(25.0), Some(15.0), None).unwrap();
        assert_eq!(r.solved_for, HumidityUnknown::RelativeHumidity);
        assert!((r.relative_humidity - 53.8).abs() < 0.3);
        assert!((r.saturation_pressure_hpa - 31.67).abs() < 0.05);
    }

    #[test]
    fn test_fahrenheit_matches_celsius() {
        let r = calculate(
            &RelativeHumidityInput {
                dry_bulb: Some(77.0),
                dew_point: Some(59.0),
                relative_humidity: None,
                temperature_unit: TemperatureUnit::Fahrenheit,
            },
            &SolverSettings::default(),
        )
        .unwrap();
        let c = solve(Some(25.0), Some(15.0), None).unwrap();
        assert!((r.relative_humidity - c.relative_humidity).abs() < 1e-9);
    }

    #[test]
    fn test_dew_point_from_rh() {
        let rh = solve(Some(25.0), Some(15.0), None).unwrap().relative_humidity;
        let r = solve(Some(25.0), None, Some(rh)).unwrap();
        assert_eq!(r.solved_for, HumidityUnknown::DewPoint);
        assert!((r.dew_point.value - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_dry_bulb_from_dew_point_and_rh() {
        let rh = solve(Some(25.0), Some(15.0), None).unwrap().relative_humidity;
        let r = solve(None, Some(15.0), Some(rh)).unwrap();
        assert_eq!(r.solved_for, HumidityUnknown::DryBulb);
        assert!((r.dry_bulb.value - 25.0).abs() < 0.01);
        let solver = r.solver.unwrap();
        assert!(solver.converged);
        assert_eq!(solver.strategy, DryBulbStrategy::Bisection);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_dry_bulb_in_kelvin() {
        let r = calculate(
            &RelativeHumidityInput {
                dry_bulb: None,
                dew_point: Some(288.15),
                relative_humidity: Some(100.0),
                temperature_unit: TemperatureUnit::Kelvin,
            },
            &SolverSettings::default(),
        )
        .unwrap();
        assert!((r.dry_bulb.value - 288.15).abs() < 1e-9);
    }

    #[test]
    fn test_iteration_cap_warns() {
        let settings = SolverSettings {
            max_iterations: 2,
            ..SolverSettings::default()
        };
        let r = calculate(
            &RelativeHumidityInput {
                dry_bulb: None,
                dew_point: Some(10.0),
                relative_humidity: Some(40.0),
                temperature_unit: TemperatureUnit::Celsius,
            },
            &settings,
        )
        .unwrap();
        assert!(!r.solver.unwrap().converged);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn test_dew_point_above_dry_bulb() {
        let err = solve(Some(20.0), Some(22.0), None).unwrap_err();
        assert_eq!(err.field(), Some("dew_point"));
    }

    #[test]
    fn test_humidity_range() {
        assert_eq!(solve(Some(20.0), None, Some(120.0)).unwrap_err().field(), Some("relative_humidity"));
        assert_eq!(solve(Some(20.0), None, Some(0.0)).unwrap_err().field(), Some("relative_humidity"));
        assert_eq!(solve(None, Some(5.0), Some(-1.0)).unwrap_err().field(), Some("relative_humidity"));
    }

    #[test]
    fn test_exactly_two_required() {
        assert_eq!(solve(Some(20.0), Some(10.0), Some(50.0)).unwrap_err().field(), Some("inputs"));
        assert_eq!(solve(Some(20.0), None, None).unwrap_err().field(), Some("inputs"));
    }

    #[test]
    fn test_magnus_pole_rejected() {
        let err = solve(Some(-243.5), Some(-250.0), None).unwrap_err();
        assert_eq!(err.field(), Some("dry_bulb"));

        let err = solve(Some(20.0), Some(-250.0), None).unwrap_err();
        assert_eq!(err.field(), Some("dew_point"));

        let err = solve(None, Some(-120.0), Some(50.0)).unwrap_err();
        assert_eq!(err.field(), Some("dew_point"));
    }

    #[test]
    fn test_dew_point_below_magnus_limit() {
        let err = solve(Some(-90.0), None, Some(1e-12)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_outside_fitted_range_warns() {
        let r = solve(Some(-60.0), Some(-70.0), None).unwrap();
        assert!(r.relative_humidity > 0.0 && r.relative_humidity < 100.0);
        assert_eq!(r.warnings.len(), 2);

        let r = solve(Some(25.0), Some(15.0), None).unwrap();
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_below_absolute_zero() {
        let err = calculate(
            &RelativeHumidityInput {
                dry_bulb: Some(-10.0),
                dew_point: Some(-20.0),
                relative_humidity: None,
                temperature_unit: TemperatureUnit::Kelvin,
            },
            &SolverSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("dry_bulb"));
    }
}
