//! # Psychrometric Formulas
//!
//! Relationships between dry-bulb temperature, dew point and relative
//! humidity based on the Magnus approximation of saturation vapour pressure
//! over liquid water:
//!
//! e_s(T) = 6.112 · exp(17.67·T / (T + 243.5))   [hPa, T in °C]
//!
//! The actual vapour pressure of moist air equals the saturation pressure at
//! its dew point, so RH = e_s(T_d) / e_s(T) × 100.
//!
//! Dew point has a closed-form inverse. Dry-bulb temperature does not have a
//! convenient one in this form and is found numerically by
//! [`solve_dry_bulb`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{MAGNUS_A_HPA, MAGNUS_B, MAGNUS_C_DEG_C};
use crate::errors::{CalcError, CalcResult};
use crate::settings::{DryBulbStrategy, SolverSettings};

const CALCULATION: &str = "Relative humidity";

/// Saturation vapour pressure in hPa at `temperature_c`
#[inline]
pub fn saturation_vapor_pressure(temperature_c: f64) -> f64 {
    MAGNUS_A_HPA * (MAGNUS_B * temperature_c / (temperature_c + MAGNUS_C_DEG_C)).exp()
}

/// Relative humidity (%) from dry-bulb and dew point, clamped to [0, 100].
pub fn relative_humidity(dry_bulb_c: f64, dew_point_c: f64) -> f64 {
    let rh = saturation_vapor_pressure(dew_point_c) / saturation_vapor_pressure(dry_bulb_c) * 100.0;
    rh.clamp(0.0, 100.0)
}

/// Dew point (°C) for a vapour pressure in hPa, by inverting Magnus:
/// T_d = C·ln(e/A) / (B − ln(e/A))
#[inline]
pub fn dew_point_from_vapor_pressure(vapor_pressure_hpa: f64) -> f64 {
    let gamma = (vapor_pressure_hpa / MAGNUS_A_HPA).ln();
    MAGNUS_C_DEG_C * gamma / (MAGNUS_B - gamma)
}

/// Dew point (°C) from dry-bulb (°C) and relative humidity (%).
#[inline]
pub fn dew_point(dry_bulb_c: f64, relative_humidity_pct: f64) -> f64 {
    dew_point_from_vapor_pressure(saturation_vapor_pressure(dry_bulb_c) * relative_humidity_pct / 100.0)
}

/// Outcome of a dry-bulb search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DryBulbSolution {
    /// Dry-bulb temperature found, °C
    pub dry_bulb_c: f64,

    /// Iterations spent
    pub iterations: u32,

    /// |e_s(T) − target| at the returned temperature, hPa
    pub residual_hpa: f64,

    /// Whether the residual met the configured tolerance
    pub converged: bool,

    pub strategy: DryBulbStrategy,
}

/// Find the dry-bulb temperature whose saturation pressure makes the given
/// dew point correspond to `relative_humidity_pct`.
///
/// The target is e_s(T) = e_s(T_d) · 100 / RH. The search is bounded below
/// by the dew point and above by `settings.upper_limit_c`. A search that
/// leaves those bounds is an error. A search that runs out of iterations
/// returns its last estimate with `converged = false`.
pub fn solve_dry_bulb(
    dew_point_c: f64,
    relative_humidity_pct: f64,
    settings: &SolverSettings,
) -> CalcResult<DryBulbSolution> {
    if !(relative_humidity_pct > 0.0 && relative_humidity_pct <= 100.0) {
        return Err(CalcError::invalid_input(
            "relative_humidity",
            relative_humidity_pct.to_string(),
            "Relative humidity must be greater than 0% and at most 100% to solve for a temperature",
        ));
    }
    if dew_point_c > settings.upper_limit_c {
        return Err(CalcError::calculation_failed(
            CALCULATION,
            format!("Dew point exceeds the {} °C solver limit", settings.upper_limit_c),
        ));
    }

    let target = saturation_vapor_pressure(dew_point_c) * 100.0 / relative_humidity_pct;
    debug!(dew_point_c, relative_humidity_pct, target_hpa = target, strategy = ?settings.strategy, "solving dry-bulb");

    let solution = match settings.strategy {
        DryBulbStrategy::Bisection => bisection(dew_point_c, target, settings)?,
        DryBulbStrategy::FixedStep => fixed_step(dew_point_c, target, settings)?,
    };

    if solution.converged {
        debug!(iterations = solution.iterations, dry_bulb_c = solution.dry_bulb_c, "dry-bulb converged");
    } else {
        warn!(
            iterations = solution.iterations,
            residual_hpa = solution.residual_hpa,
            "dry-bulb search stopped before reaching tolerance"
        );
    }
    Ok(solution)
}

fn out_of_range(upper_limit_c: f64) -> CalcError {
    CalcError::calculation_failed(
        CALCULATION,
        format!(
            "No dry-bulb temperature between the dew point and {} °C matches these values",
            upper_limit_c
        ),
    )
}

/// e_s is strictly increasing, so [T_d, upper] brackets the root whenever
/// e_s(upper) ≥ target.
fn bisection(dew_point_c: f64, target: f64, settings: &SolverSettings) -> CalcResult<DryBulbSolution> {
    let mut lo = dew_point_c;
    let mut hi = settings.upper_limit_c;

    let residual_at_dew = (saturation_vapor_pressure(lo) - target).abs();
    if residual_at_dew < settings.tolerance_hpa {
        return Ok(DryBulbSolution {
            dry_bulb_c: lo,
            iterations: 0,
            residual_hpa: residual_at_dew,
            converged: true,
            strategy: DryBulbStrategy::Bisection,
        });
    }
    if saturation_vapor_pressure(hi) < target {
        return Err(out_of_range(settings.upper_limit_c));
    }

    let mut mid = lo;
    let mut residual = residual_at_dew;
    for iteration in 1..=settings.max_iterations {
        mid = 0.5 * (lo + hi);
        let diff = saturation_vapor_pressure(mid) - target;
        residual = diff.abs();
        if residual < settings.tolerance_hpa {
            return Ok(DryBulbSolution {
                dry_bulb_c: mid,
                iterations: iteration,
                residual_hpa: residual,
                converged: true,
                strategy: DryBulbStrategy::Bisection,
            });
        }
        if diff < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(DryBulbSolution {
        dry_bulb_c: mid,
        iterations: settings.max_iterations,
        residual_hpa: residual,
        converged: false,
        strategy: DryBulbStrategy::Bisection,
    })
}

const FIXED_STEP_UP_C: f64 = 0.5;
const FIXED_STEP_DOWN_C: f64 = 0.1;

/// Walk upward from the dew point in 0.5 °C steps while short of the target
/// pressure and back down in 0.1 °C steps once past it.
fn fixed_step(dew_point_c: f64, target: f64, settings: &SolverSettings) -> CalcResult<DryBulbSolution> {
    let mut t = dew_point_c;
    let mut residual = f64::INFINITY;

    for iteration in 0..settings.max_iterations {
        let es = saturation_vapor_pressure(t);
        residual = (es - target).abs();
        if residual < settings.tolerance_hpa {
            return Ok(DryBulbSolution {
                dry_bulb_c: t,
                iterations: iteration,
                residual_hpa: residual,
                converged: true,
                strategy: DryBulbStrategy::FixedStep,
            });
        }

        t += if es < target { FIXED_STEP_UP_C } else { -FIXED_STEP_DOWN_C };

        if t < dew_point_c || t > settings.upper_limit_c {
            return Err(out_of_range(settings.upper_limit_c));
        }
    }

    Ok(DryBulbSolution {
        dry_bulb_c: t,
        iterations: settings.max_iterations,
        residual_hpa: residual,
        converged: false,
        strategy: DryBulbStrategy::FixedStep,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturation_pressure_reference_points() {
        assert!((saturation_vapor_pressure(0.0) - 6.112).abs() < 1e-12);
        assert!((saturation_vapor_pressure(25.0) - 31.67).abs() < 0.05);
        // Magnus overshoots near boiling: ~1048 hPa rather than 1013
        assert!((saturation_vapor_pressure(100.0) - 1047.7).abs() < 0.5);
    }

    #[test]
    fn test_relative_humidity() {
        let rh = relative_humidity(25.0, 15.0);
        assert!((rh - 53.8).abs() < 0.3);
        assert_eq!(relative_humidity(20.0, 20.0), 100.0);
        // Dew point above dry-bulb clamps rather than exceeding 100
        assert_eq!(relative_humidity(20.0, 22.0), 100.0);
    }

    #[test]
    fn test_dew_point_inverts_rh() {
        let rh = relative_humidity(25.0, 15.0);
        assert!((dew_point(25.0, rh) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_bisection_recovers_dry_bulb() {
        let rh = relative_humidity(25.0, 15.0);
        let sol = solve_dry_bulb(15.0, rh, &SolverSettings::default()).unwrap();
        assert!(sol.converged);
        assert!((sol.dry_bulb_c - 25.0).abs() < 0.01);
        assert!(sol.iterations <= 200);
    }

    #[test]
    fn test_fixed_step_recovers_dry_bulb() {
        let settings = SolverSettings {
            strategy: DryBulbStrategy::FixedStep,
            ..SolverSettings::default()
        };
        let rh = relative_humidity(25.0, 15.0);
        let sol = solve_dry_bulb(15.0, rh, &settings).unwrap();
        assert_eq!(sol.strategy, DryBulbStrategy::FixedStep);
        // Step sizes limit accuracy; the estimate still lands near 25 °C
        assert!((sol.dry_bulb_c - 25.0).abs() < 0.6);
    }

    #[test]
    fn test_saturated_air_returns_dew_point() {
        let sol = solve_dry_bulb(18.0, 100.0, &SolverSettings::default()).unwrap();
        assert!(sol.converged);
        assert_eq!(sol.iterations, 0);
        assert_eq!(sol.dry_bulb_c, 18.0);
    }

    #[test]
    fn test_unreachable_target_fails() {
        // 1% RH at a 40 °C dew point needs a dry-bulb far above 100 °C
        let err = solve_dry_bulb(40.0, 1.0, &SolverSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");

        let settings = SolverSettings {
            strategy: DryBulbStrategy::FixedStep,
            ..SolverSettings::default()
        };
        assert!(solve_dry_bulb(40.0, 1.0, &settings).is_err());
    }

    #[test]
    fn test_zero_humidity_rejected() {
        let err = solve_dry_bulb(10.0, 0.0, &SolverSettings::default()).unwrap_err();
        assert_eq!(err.field(), Some("relative_humidity"));
    }

    #[test]
    fn test_iteration_cap_reports_not_converged() {
        let settings = SolverSettings {
            max_iterations: 3,
            ..SolverSettings::default()
        };
        let sol = solve_dry_bulb(15.0, 50.0, &settings).unwrap();
        assert!(!sol.converged);
        assert_eq!(sol.iterations, 3);
    }
}
