//! # Hoop Stress
//!
//! Thin-walled cylindrical pressure vessel under internal pressure.
//!
//! ## Modes
//!
//! - `stress`: hoop, axial and radial stress plus the d/t ratio
//! - `strain`: principal strains by generalized Hooke's law and the radial
//!   displacement of the wall
//! - `thickness`: minimum wall for an allowable stress, and a recommended
//!   wall at twice that
//! - `pressure`: pressure that reaches the allowable stress, and a working
//!   pressure at a quarter of that
//!
//! ## Assumptions
//!
//! - Membrane theory, valid for d/t ≥ 20. Thicker walls produce a warning,
//!   not an error.
//! - Closed ends, so the axial stress is half the hoop stress.
//! - Radial stress taken at the bore (−p).
//!
//! ## Example
//!
//! ```rust
//! use formula_core::calculations::hoop_stress::{calculate, HoopStressInput};
//! use formula_core::units::{LengthUnit, PressureUnit};
//!
//! let input = HoopStressInput {
//!     pressure: Some(2.0),
//!     pressure_unit: PressureUnit::Megapascal,
//!     radius: Some(100.0),
//!     radius_unit: LengthUnit::Millimeter,
//!     thickness: Some(5.0),
//!     thickness_unit: LengthUnit::Millimeter,
//!     stress_unit: PressureUnit::Megapascal,
//!     ..Default::default()
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.hoop_stress.unwrap().value - 40.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::{ensure_finite, CalculationReport};
use crate::constants::THIN_WALL_MIN_RATIO;
use crate::equations::pressure_vessel::{
    axial_stress, diameter_thickness_ratio, hoop_stress, pressure_at_stress, principal_strains,
    radial_displacement, radial_stress, required_thickness, PrincipalStrains,
};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::units::{LengthUnit, PressureUnit, Quantity};
use crate::validation::{required, required_positive};

const CALCULATION: &str = "Hoop stress";

/// Recommended wall thickness as a multiple of the minimum
pub const THICKNESS_FACTOR: f64 = 2.0;

/// Factor of safety between maximum and working pressure
pub const PRESSURE_SAFETY_FACTOR: f64 = 4.0;

selector_enum! {
    HoopStressMode, "mode" {
        #[default]
        Stress => "stress", "Hoop and axial stress",
        Strain => "strain", "Strain and displacement",
        Thickness => "thickness", "Required wall thickness",
        Pressure => "pressure", "Maximum pressure",
    }
}

/// Vessel geometry, loading and material.
///
/// Stresses (allowable stress input and all stress outputs) use
/// `stress_unit`; Young's modulus uses `modulus_unit`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "strain",
///   "pressure": 2.0, "pressure_unit": "MPa",
///   "radius": 100.0, "radius_unit": "mm",
///   "thickness": 5.0, "thickness_unit": "mm",
///   "youngs_modulus": 200.0, "modulus_unit": "GPa",
///   "poisson_ratio": 0.3
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoopStressInput {
    #[serde(default)]
    pub mode: HoopStressMode,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub pressure_unit: PressureUnit,
    /// Mean radius (half the diameter)
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub radius_unit: LengthUnit,
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(default)]
    pub thickness_unit: LengthUnit,
    #[serde(default)]
    pub youngs_modulus: Option<f64>,
    #[serde(default)]
    pub modulus_unit: PressureUnit,
    #[serde(default)]
    pub poisson_ratio: Option<f64>,
    #[serde(default)]
    pub allowable_stress: Option<f64>,
    #[serde(default)]
    pub stress_unit: PressureUnit,
}

impl HoopStressInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.radius_q()?;
        match self.mode {
            HoopStressMode::Stress => {
                self.pressure_q()?;
                self.thickness_q()?;
            }
            HoopStressMode::Strain => {
                self.pressure_q()?;
                self.thickness_q()?;
                self.modulus_q()?;
                self.poisson()?;
            }
            HoopStressMode::Thickness => {
                self.pressure_q()?;
                self.allowable_q()?;
            }
            HoopStressMode::Pressure => {
                self.thickness_q()?;
                self.allowable_q()?;
            }
        }
        Ok(())
    }

    fn pressure_q(&self) -> CalcResult<Quantity<PressureUnit>> {
        Ok(Quantity::new(required_positive("pressure", self.pressure)?, self.pressure_unit))
    }

    fn radius_q(&self) -> CalcResult<Quantity<LengthUnit>> {
        Ok(Quantity::new(required_positive("radius", self.radius)?, self.radius_unit))
    }

    fn thickness_q(&self) -> CalcResult<Quantity<LengthUnit>> {
        Ok(Quantity::new(required_positive("thickness", self.thickness)?, self.thickness_unit))
    }

    fn modulus_q(&self) -> CalcResult<Quantity<PressureUnit>> {
        Ok(Quantity::new(required_positive("youngs_modulus", self.youngs_modulus)?, self.modulus_unit))
    }

    fn allowable_q(&self) -> CalcResult<Quantity<PressureUnit>> {
        Ok(Quantity::new(required_positive("allowable_stress", self.allowable_stress)?, self.stress_unit))
    }

    fn poisson(&self) -> CalcResult<f64> {
        let nu = required("poisson_ratio", self.poisson_ratio)?;
        if !(0.0..=0.5).contains(&nu) {
            return Err(CalcError::invalid_input(
                "poisson_ratio",
                nu.to_string(),
                "Poisson's ratio must be between 0 and 0.5",
            ));
        }
        Ok(nu)
    }
}

/// Results from the hoop stress calculator. Fields outside the selected
/// mode stay empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoopStressResult {
    pub mode: HoopStressMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoop_stress: Option<Quantity<PressureUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axial_stress: Option<Quantity<PressureUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial_stress: Option<Quantity<PressureUnit>>,

    /// d/t for the wall used (the minimum wall in thickness mode)
    pub diameter_thickness_ratio: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strains: Option<PrincipalStrains>,
    /// Growth of the radius, in the thickness unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial_displacement: Option<Quantity<LengthUnit>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_thickness: Option<Quantity<LengthUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_thickness: Option<Quantity<LengthUnit>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_pressure: Option<Quantity<PressureUnit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_pressure: Option<Quantity<PressureUnit>>,

    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl HoopStressResult {
    fn empty(mode: HoopStressMode) -> Self {
        HoopStressResult {
            mode,
            hoop_stress: None,
            axial_stress: None,
            radial_stress: None,
            diameter_thickness_ratio: 0.0,
            strains: None,
            radial_displacement: None,
            minimum_thickness: None,
            recommended_thickness: None,
            maximum_pressure: None,
            working_pressure: None,
            steps: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl CalculationReport for HoopStressResult {
    fn outputs(&self) -> Vec<Term> {
        let mut out = Vec::new();
        let stresses = [
            ("Hoop stress σ_h", &self.hoop_stress),
            ("Axial stress σ_a", &self.axial_stress),
            ("Radial stress σ_r", &self.radial_stress),
            ("Maximum pressure", &self.maximum_pressure),
            ("Working pressure", &self.working_pressure),
        ];
        for (name, value) in stresses {
            if let Some(q) = value {
                out.push(Term::quantity(name, q));
            }
        }
        if let Some(s) = &self.strains {
            out.push(Term::new("Hoop strain ε_h", s.hoop, ""));
            out.push(Term::new("Axial strain ε_a", s.axial, ""));
            out.push(Term::new("Radial strain ε_r", s.radial, ""));
        }
        let lengths = [
            ("Radial displacement", &self.radial_displacement),
            ("Minimum thickness", &self.minimum_thickness),
            ("Recommended thickness", &self.recommended_thickness),
        ];
        for (name, value) in lengths {
            if let Some(q) = value {
                out.push(Term::quantity(name, q));
            }
        }
        out.push(Term::new("d/t", self.diameter_thickness_ratio, ""));
        out
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

pub fn calculate(input: &HoopStressInput) -> CalcResult<HoopStressResult> {
    input.validate()?;

    let mut result = HoopStressResult::empty(input.mode);
    let radius = input.radius_q()?;
    let r = radius.to_base();
    let stress = |pa: f64| Quantity::from_base(pa, input.stress_unit);

    let thickness_m = match input.mode {
        HoopStressMode::Stress | HoopStressMode::Strain => {
            let pressure = input.pressure_q()?;
            let thickness = input.thickness_q()?;
            let (p, t) = (pressure.to_base(), thickness.to_base());

            let sh = hoop_stress(p, r, t);
            let sa = axial_stress(p, r, t);
            let sr = radial_stress(p);

            result.steps.push(
                Step::new("Hoop stress")
                    .formula("σ_h = p·r / t")
                    .with_quantity("p", &pressure)
                    .with_quantity("r", &radius)
                    .with_quantity("t", &thickness)
                    .yields_quantity("σ_h", &stress(sh))
                    .equation(Equation::HoopStress),
            );
            result.steps.push(
                Step::new("Axial stress")
                    .formula("σ_a = p·r / 2t")
                    .yields_quantity("σ_a", &stress(sa))
                    .equation(Equation::AxialStress),
            );
            result.steps.push(
                Step::new("Radial stress")
                    .formula("σ_r = −p")
                    .yields_quantity("σ_r", &stress(sr))
                    .equation(Equation::RadialStress)
                    .note("at the inner surface"),
            );
            result.hoop_stress = Some(stress(sh));
            result.axial_stress = Some(stress(sa));
            result.radial_stress = Some(stress(sr));

            if input.mode == HoopStressMode::Strain {
                let modulus = input.modulus_q()?;
                let nu = input.poisson()?;
                let strains = principal_strains(sh, sa, sr, modulus.to_base(), nu);
                let u = Quantity::from_base(radial_displacement(strains.hoop, r), input.thickness_unit);

                result.steps.push(
                    Step::new("Principal strains")
                        .formula("ε_i = (σ_i − ν(σ_j + σ_k)) / E")
                        .with_quantity("E", &modulus)
                        .with("ν", nu, "")
                        .equation(Equation::PrincipalStrains),
                );
                result.steps.push(Step::new("Hoop strain").yields("ε_h", strains.hoop, ""));
                result.steps.push(Step::new("Axial strain").yields("ε_a", strains.axial, ""));
                result.steps.push(Step::new("Radial strain").yields("ε_r", strains.radial, ""));
                result.steps.push(
                    Step::new("Radial displacement")
                        .formula("u = ε_h·r")
                        .yields_quantity("u", &u)
                        .equation(Equation::RadialDisplacement),
                );
                result.strains = Some(strains);
                result.radial_displacement = Some(u);
            }
            t
        }
        HoopStressMode::Thickness => {
            let pressure = input.pressure_q()?;
            let allowable = input.allowable_q()?;
            let t_min = required_thickness(pressure.to_base(), r, allowable.to_base());
            let minimum = Quantity::from_base(t_min, input.thickness_unit);
            let recommended = Quantity::from_base(t_min * THICKNESS_FACTOR, input.thickness_unit);

            result.steps.push(
                Step::new("Minimum thickness")
                    .formula("t_min = p·r / σ_allow")
                    .with_quantity("p", &pressure)
                    .with_quantity("r", &radius)
                    .with_quantity("σ_allow", &allowable)
                    .yields_quantity("t_min", &minimum)
                    .equation(Equation::RequiredWallThickness),
            );
            result.steps.push(
                Step::new("Recommended thickness")
                    .formula("t = 2·t_min")
                    .yields_quantity("t", &recommended)
                    .note("allow for corrosion and fatigue"),
            );
            result.minimum_thickness = Some(minimum);
            result.recommended_thickness = Some(recommended);
            t_min
        }
        HoopStressMode::Pressure => {
            let thickness = input.thickness_q()?;
            let allowable = input.allowable_q()?;
            let t = thickness.to_base();
            let p_max = pressure_at_stress(allowable.to_base(), r, t);
            let maximum = Quantity::from_base(p_max, input.pressure_unit);
            let working = Quantity::from_base(p_max / PRESSURE_SAFETY_FACTOR, input.pressure_unit);

            result.steps.push(
                Step::new("Maximum pressure")
                    .formula("p_max = σ_allow·t / r")
                    .with_quantity("σ_allow", &allowable)
                    .with_quantity("t", &thickness)
                    .with_quantity("r", &radius)
                    .yields_quantity("p_max", &maximum)
                    .equation(Equation::AllowablePressure),
            );
            result.steps.push(
                Step::new("Working pressure")
                    .formula("p_work = p_max / 4")
                    .yields_quantity("p_work", &working)
                    .note("factor of safety 4"),
            );
            result.maximum_pressure = Some(maximum);
            result.working_pressure = Some(working);
            t
        }
    };

    let ratio = diameter_thickness_ratio(r, thickness_m);
    result.diameter_thickness_ratio = ratio;
    result.steps.push(Step::new("Wall ratio").formula("d/t = 2r / t").yields("d/t", ratio, ""));

    if ratio < THIN_WALL_MIN_RATIO {
        warn!(ratio, "thin-wall approximation outside its validity range");
        result.warnings.push(format!(
            "d/t = {:.1} is below {}; thin-wall formulas underestimate the peak stress in thick walls",
            ratio, THIN_WALL_MIN_RATIO
        ));
    }

    ensure_finite(CALCULATION, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel(mode: HoopStressMode) -> HoopStressInput {
        HoopStressInput {
            mode,
            pressure: Some(2.0),
            pressure_unit: PressureUnit::Megapascal,
            radius: Some(100.0),
            radius_unit: LengthUnit::Millimeter,
            thickness: Some(5.0),
            thickness_unit: LengthUnit::Millimeter,
            youngs_modulus: Some(200.0),
            modulus_unit: PressureUnit::Gigapascal,
            poisson_ratio: Some(0.3),
            allowable_stress: Some(200.0),
            stress_unit: PressureUnit::Megapascal,
        }
    }

    #[test]
    fn test_membrane_stresses() {
        let r = calculate(&vessel(HoopStressMode::Stress)).unwrap();
        assert!((r.hoop_stress.unwrap().value - 40.0).abs() < 1e-9);
        assert!((r.axial_stress.unwrap().value - 20.0).abs() < 1e-9);
        assert!((r.radial_stress.unwrap().value + 2.0).abs() < 1e-9);
        assert!((r.diameter_thickness_ratio - 40.0).abs() < 1e-9);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_strains() {
        let r = calculate(&vessel(HoopStressMode::Strain)).unwrap();
        let s = r.strains.unwrap();
        assert!((s.hoop - 1.73e-4).abs() < 1e-12);
        assert!((s.axial - 4.3e-5).abs() < 1e-12);
        assert!((s.radial + 1.0e-4).abs() < 1e-12);

        let u = r.radial_displacement.unwrap();
        assert_eq!(u.unit, LengthUnit::Millimeter);
        assert!((u.value - 0.0173).abs() < 1e-9);
    }

    #[test]
    fn test_required_thickness() {
        let r = calculate(&vessel(HoopStressMode::Thickness)).unwrap();
        assert!((r.minimum_thickness.unwrap().value - 1.0).abs() < 1e-9);
        assert!((r.recommended_thickness.unwrap().value - 2.0).abs() < 1e-9);
        assert!(r.hoop_stress.is_none());
    }

    #[test]
    fn test_maximum_pressure() {
        let r = calculate(&vessel(HoopStressMode::Pressure)).unwrap();
        assert!((r.maximum_pressure.unwrap().value - 10.0).abs() < 1e-9);
        assert!((r.working_pressure.unwrap().value - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_thick_wall_warning() {
        let input = HoopStressInput {
            thickness: Some(20.0),
            ..vessel(HoopStressMode::Stress)
        };
        let r = calculate(&input).unwrap();
        assert!((r.diameter_thickness_ratio - 10.0).abs() < 1e-9);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn test_poisson_range() {
        let input = HoopStressInput {
            poisson_ratio: Some(0.6),
            ..vessel(HoopStressMode::Strain)
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("poisson_ratio"));

        // Stress mode does not need a Poisson's ratio
        let input = HoopStressInput {
            poisson_ratio: None,
            ..vessel(HoopStressMode::Stress)
        };
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_missing_thickness() {
        let input = HoopStressInput {
            thickness: None,
            ..vessel(HoopStressMode::Stress)
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::missing_field("thickness"));
    }
}
