//! # Engine Displacement
//!
//! Swept volume of a piston engine, V = π(b/2)²·s·n, with the
//! single-cylinder volume and the bore/stroke ratio.

use serde::{Deserialize, Serialize};

use crate::calculations::{ensure_finite, CalculationReport};
use crate::equations::mechanics::{cylinder_swept_volume, engine_displacement};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::steps::{Step, Term};
use crate::units::{LengthUnit, Quantity, VolumeUnit};
use crate::validation::required_positive;

const CALCULATION: &str = "Engine displacement";

/// Ratios within this band of 1.0 count as square
const SQUARE_TOLERANCE: f64 = 0.02;

/// Bore/stroke classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoreStrokeClass {
    /// Stroke longer than bore
    Undersquare,
    Square,
    /// Bore larger than stroke
    Oversquare,
}

impl BoreStrokeClass {
    pub fn from_ratio(ratio: f64) -> Self {
        if (ratio - 1.0).abs() <= SQUARE_TOLERANCE {
            BoreStrokeClass::Square
        } else if ratio > 1.0 {
            BoreStrokeClass::Oversquare
        } else {
            BoreStrokeClass::Undersquare
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BoreStrokeClass::Undersquare => "Undersquare (long stroke)",
            BoreStrokeClass::Square => "Square",
            BoreStrokeClass::Oversquare => "Oversquare (short stroke)",
        }
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "bore": 86.0, "stroke": 86.0, "length_unit": "mm",
///   "cylinders": 4, "volume_unit": "L"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineDisplacementInput {
    #[serde(default)]
    pub bore: Option<f64>,
    #[serde(default)]
    pub stroke: Option<f64>,
    /// Unit of bore and stroke
    #[serde(default)]
    pub length_unit: LengthUnit,
    #[serde(default)]
    pub cylinders: Option<u32>,
    #[serde(default)]
    pub volume_unit: VolumeUnit,
}

impl EngineDisplacementInput {
    pub fn validate(&self) -> CalcResult<()> {
        required_positive("bore", self.bore)?;
        required_positive("stroke", self.stroke)?;
        self.cylinder_count()?;
        Ok(())
    }

    fn cylinder_count(&self) -> CalcResult<u32> {
        match self.cylinders {
            None => Err(CalcError::missing_field("cylinders")),
            Some(0) => Err(CalcError::invalid_input(
                "cylinders",
                "0",
                "Engine must have at least one cylinder",
            )),
            Some(n) => Ok(n),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineDisplacementResult {
    pub total: Quantity<VolumeUnit>,
    pub per_cylinder: Quantity<VolumeUnit>,
    pub bore_stroke_ratio: f64,
    pub classification: BoreStrokeClass,
    pub steps: Vec<Step>,
}

impl CalculationReport for EngineDisplacementResult {
    fn outputs(&self) -> Vec<Term> {
        vec![
            Term::quantity("Displacement", &self.total),
            Term::quantity("Per cylinder", &self.per_cylinder),
            Term::new("Bore/stroke", self.bore_stroke_ratio, ""),
        ]
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

pub fn calculate(input: &EngineDisplacementInput) -> CalcResult<EngineDisplacementResult> {
    let bore = Quantity::new(required_positive("bore", input.bore)?, input.length_unit);
    let stroke = Quantity::new(required_positive("stroke", input.stroke)?, input.length_unit);
    let n = input.cylinder_count()?;
    let (b, s) = (bore.to_base(), stroke.to_base());

    let single = Quantity::from_base(cylinder_swept_volume(b, s), input.volume_unit);
    let total = Quantity::from_base(engine_displacement(b, s, n), input.volume_unit);
    let ratio = b / s;
    let classification = BoreStrokeClass::from_ratio(ratio);

    let steps = vec![
        Step::new("Swept volume per cylinder")
            .formula("V₁ = π(b/2)²·s")
            .with_quantity("b", &bore)
            .with_quantity("s", &stroke)
            .yields_quantity("V₁", &single)
            .equation(Equation::EngineDisplacement),
        Step::new("Total displacement")
            .formula("V = V₁·n")
            .with("n", f64::from(n), "")
            .yields_quantity("V", &total),
        Step::new("Bore/stroke ratio")
            .formula("b / s")
            .yields("b/s", ratio, "")
            .note(classification.display_name()),
    ];

    ensure_finite(CALCULATION, EngineDisplacementResult {
        total,
        per_cylinder: single,
        bore_stroke_ratio: ratio,
        classification,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_litre() -> EngineDisplacementInput {
        EngineDisplacementInput {
            bore: Some(86.0),
            stroke: Some(86.0),
            length_unit: LengthUnit::Millimeter,
            cylinders: Some(4),
            volume_unit: VolumeUnit::CubicCentimeter,
        }
    }

    #[test]
    fn test_square_four() {
        let r = calculate(&two_litre()).unwrap();
        assert!((r.total.value - 1998.23).abs() < 0.01);
        assert!((r.per_cylinder.value * 4.0 - r.total.value).abs() < 1e-9);
        assert_eq!(r.classification, BoreStrokeClass::Square);
    }

    #[test]
    fn test_litres() {
        let r = calculate(&EngineDisplacementInput {
            volume_unit: VolumeUnit::Liter,
            ..two_litre()
        })
        .unwrap();
        assert!((r.total.value - 1.998).abs() < 1e-3);
    }

    #[test]
    fn test_oversquare() {
        let r = calculate(&EngineDisplacementInput {
            bore: Some(100.0),
            stroke: Some(80.0),
            ..two_litre()
        })
        .unwrap();
        assert!((r.bore_stroke_ratio - 1.25).abs() < 1e-12);
        assert_eq!(r.classification, BoreStrokeClass::Oversquare);
    }

    #[test]
    fn test_cylinder_count_required() {
        let none = EngineDisplacementInput {
            cylinders: None,
            ..two_litre()
        };
        assert_eq!(calculate(&none).unwrap_err(), CalcError::missing_field("cylinders"));

        let zero = EngineDisplacementInput {
            cylinders: Some(0),
            ..two_litre()
        };
        assert_eq!(calculate(&zero).unwrap_err().field(), Some("cylinders"));
    }
}
