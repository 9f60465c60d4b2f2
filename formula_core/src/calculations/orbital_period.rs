//! # Orbital Period
//!
//! Kepler's third law for a small body orbiting a central mass,
//! T² = 4π²a³ / (GM), solved for whichever quantity the mode names.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::calculations::orbital_period::{calculate, OrbitalPeriodInput};
//! use formula_core::units::{LengthUnit, MassUnit, TimeUnit};
//!
//! let input = OrbitalPeriodInput {
//!     semi_major_axis: Some(1.0),
//!     distance_unit: LengthUnit::AstronomicalUnit,
//!     central_mass: Some(1.0),
//!     mass_unit: MassUnit::SolarMass,
//!     time_unit: TimeUnit::Day,
//!     ..Default::default()
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.period.value - 365.25).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationReport;
use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::equations::orbital::{central_mass, orbital_period, semi_major_axis};
use crate::equations::registry::Equation;
use crate::errors::CalcResult;
use crate::steps::{Step, Term};
use crate::units::{LengthUnit, MassUnit, Quantity, TimeUnit};
use crate::validation::{finite_result, required_positive};

const CALCULATION: &str = "Orbital period";

selector_enum! {
    /// Quantity to solve for
    OrbitalMode, "mode" {
        #[default]
        Period => "period", "Orbital period",
        SemiMajorAxis => "semi_major_axis", "Semi-major axis",
        CentralMass => "central_mass", "Central mass",
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "mode": "period",
///   "semi_major_axis": 5.2, "distance_unit": "AU",
///   "central_mass": 1.0, "mass_unit": "M☉",
///   "time_unit": "yr"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbitalPeriodInput {
    #[serde(default)]
    pub mode: OrbitalMode,
    #[serde(default)]
    pub semi_major_axis: Option<f64>,
    #[serde(default)]
    pub distance_unit: LengthUnit,
    #[serde(default)]
    pub central_mass: Option<f64>,
    #[serde(default)]
    pub mass_unit: MassUnit,
    #[serde(default)]
    pub period: Option<f64>,
    #[serde(default)]
    pub time_unit: TimeUnit,
}

impl OrbitalPeriodInput {
    pub fn validate(&self) -> CalcResult<()> {
        match self.mode {
            OrbitalMode::Period => {
                self.axis_q()?;
                self.mass_q()?;
            }
            OrbitalMode::SemiMajorAxis => {
                self.period_q()?;
                self.mass_q()?;
            }
            OrbitalMode::CentralMass => {
                self.period_q()?;
                self.axis_q()?;
            }
        }
        Ok(())
    }

    fn axis_q(&self) -> CalcResult<Quantity<LengthUnit>> {
        Ok(Quantity::new(required_positive("semi_major_axis", self.semi_major_axis)?, self.distance_unit))
    }

    fn mass_q(&self) -> CalcResult<Quantity<MassUnit>> {
        Ok(Quantity::new(required_positive("central_mass", self.central_mass)?, self.mass_unit))
    }

    fn period_q(&self) -> CalcResult<Quantity<TimeUnit>> {
        Ok(Quantity::new(required_positive("period", self.period)?, self.time_unit))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitalPeriodResult {
    pub mode: OrbitalMode,
    pub period: Quantity<TimeUnit>,
    pub semi_major_axis: Quantity<LengthUnit>,
    pub central_mass: Quantity<MassUnit>,
    pub steps: Vec<Step>,
}

impl CalculationReport for OrbitalPeriodResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Period T", &self.period),
            Term::quantity("Semi-major axis a", &self.semi_major_axis),
            Term::quantity("Central mass M", &self.central_mass),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &OrbitalPeriodInput) -> CalcResult<OrbitalPeriodResult> {
    input.validate()?;
    let g = GRAVITATIONAL_CONSTANT;
    let constant = Step::new("Gravitational constant").yields("G", g, "m³/(kg·s²)");

    let (t, a, m, solve) = match input.mode {
        OrbitalMode::Period => {
            let (axis, mass) = (input.axis_q()?, input.mass_q()?);
            let (a, m) = (axis.to_base(), mass.to_base());
            let t = orbital_period(a, m, g);
            let step = Step::new("Orbital period")
                .formula("T = √(4π²a³ / GM)")
                .with_quantity("a", &axis)
                .with_quantity("M", &mass)
                .yields("T", t, "s");
            (t, a, m, step)
        }
        OrbitalMode::SemiMajorAxis => {
            let (period, mass) = (input.period_q()?, input.mass_q()?);
            let (t, m) = (period.to_base(), mass.to_base());
            let a = semi_major_axis(t, m, g);
            let step = Step::new("Semi-major axis")
                .formula("a = ∛(GMT² / 4π²)")
                .with_quantity("T", &period)
                .with_quantity("M", &mass)
                .yields("a", a, "m");
            (t, a, m, step)
        }
        OrbitalMode::CentralMass => {
            let (period, axis) = (input.period_q()?, input.axis_q()?);
            let (t, a) = (period.to_base(), axis.to_base());
            let m = central_mass(t, a, g);
            let step = Step::new("Central mass")
                .formula("M = 4π²a³ / (GT²)")
                .with_quantity("T", &period)
                .with_quantity("a", &axis)
                .yields("M", m, "kg");
            (t, a, m, step)
        }
    };

    let period = Quantity::from_base(finite_result(CALCULATION, "Period", t)?, input.time_unit);
    let axis = Quantity::from_base(finite_result(CALCULATION, "Semi-major axis", a)?, input.distance_unit);
    let mass = Quantity::from_base(finite_result(CALCULATION, "Central mass", m)?, input.mass_unit);

    let converted = match input.mode {
        OrbitalMode::Period => Step::new("Convert").yields_quantity("T", &period),
        OrbitalMode::SemiMajorAxis => Step::new("Convert").yields_quantity("a", &axis),
        OrbitalMode::CentralMass => Step::new("Convert").yields_quantity("M", &mass),
    };

    Ok(OrbitalPeriodResult {
        mode: input.mode,
        period,
        semi_major_axis: axis,
        central_mass: mass,
        steps: vec![constant, solve.equation(Equation::KeplerThirdLaw), converted],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> OrbitalPeriodInput {
        OrbitalPeriodInput {
            semi_major_axis: Some(1.0),
            distance_unit: LengthUnit::AstronomicalUnit,
            central_mass: Some(1.0),
            mass_unit: MassUnit::SolarMass,
            period: Some(1.0),
            time_unit: TimeUnit::Year,
            ..Default::default()
        }
    }

    #[test]
    fn test_earth_year() {
        let r = calculate(&earth()).unwrap();
        assert!((r.period.value - 1.0).abs() < 0.01);
        assert_eq!(r.period.unit, TimeUnit::Year);
    }

    #[test]
    fn test_semi_major_axis_from_one_year() {
        let input = OrbitalPeriodInput {
            mode: OrbitalMode::SemiMajorAxis,
            ..earth()
        };
        let r = calculate(&input).unwrap();
        assert!((r.semi_major_axis.value - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_central_mass_from_earth_orbit() {
        let input = OrbitalPeriodInput {
            mode: OrbitalMode::CentralMass,
            ..earth()
        };
        let r = calculate(&input).unwrap();
        assert!((r.central_mass.value - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_modes_agree() {
        let forward = calculate(&OrbitalPeriodInput {
            semi_major_axis: Some(42_164.0),
            distance_unit: LengthUnit::Kilometer,
            central_mass: Some(1.0),
            mass_unit: MassUnit::EarthMass,
            time_unit: TimeUnit::Hour,
            ..Default::default()
        })
        .unwrap();
        // Geostationary orbit, one sidereal day
        assert!((forward.period.value - 23.93).abs() < 0.05);

        let back = calculate(&OrbitalPeriodInput {
            mode: OrbitalMode::SemiMajorAxis,
            period: Some(forward.period.value),
            time_unit: TimeUnit::Hour,
            central_mass: Some(1.0),
            mass_unit: MassUnit::EarthMass,
            distance_unit: LengthUnit::Kilometer,
            ..Default::default()
        })
        .unwrap();
        assert!((back.semi_major_axis.value - 42_164.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_mass() {
        let input = OrbitalPeriodInput {
            central_mass: None,
            ..earth()
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("central_mass"));
    }
}
