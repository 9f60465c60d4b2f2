//! # Equation Registry
//!
//! Central registry of every formula the calculators apply. Each equation
//! has metadata: a plain-text formula, variable definitions, assumptions, a
//! reference, and the function that implements it.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Metadata for reference documentation (`EQUATIONS.md`)
//! - Serialization support so calculation steps can name the formula used
//!
//! ## Usage
//!
//! ```rust
//! use formula_core::equations::registry::{Equation, EquationCategory};
//!
//! let meta = Equation::HoopStress.metadata();
//! assert_eq!(meta.formula_plain, "sigma_h = p*r/t");
//! assert_eq!(meta.category, EquationCategory::PressureVessels);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source a formula is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    /// Roark's Formulas for Stress and Strain
    Roarks { edition: u8, table: &'static str },
    /// Bolton (1980), The computation of equivalent potential temperature
    Bolton1980,
    /// Al-Shemmeri (2012), Engineering Fluid Mechanics
    AlShemmeri2012,
    /// Kepler's laws of planetary motion (Newtonian form)
    Kepler,
    /// Mathematical definition
    Definition,
    /// Fundamental physics (no specific reference needed)
    Fundamental,
}

impl Reference {
    /// Full citation for reference documents
    pub fn citation(&self) -> String {
        match self {
            Reference::Roarks { edition, table } => format!("Roark's {}ed, {}", edition, table),
            Reference::Bolton1980 => "Bolton (1980), Mon. Wea. Rev. 108, 1046-1053".to_string(),
            Reference::AlShemmeri2012 => "Al-Shemmeri (2012), Engineering Fluid Mechanics".to_string(),
            Reference::Kepler => "Kepler's Third Law (Newtonian form)".to_string(),
            Reference::Definition => "Definition".to_string(),
            Reference::Fundamental => "Fundamental Physics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            Reference::Roarks { .. } => "Roark's",
            Reference::Bolton1980 => "Bolton",
            Reference::AlShemmeri2012 => "Al-Shemmeri",
            Reference::Kepler => "Kepler",
            Reference::Definition => "Definition",
            Reference::Fundamental => "Physics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in reference documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Ratios, percentages, slopes
    Mathematics,
    /// Forces, work, deformation, oscillation
    Mechanics,
    /// Thin-walled cylinder stresses and strains
    PressureVessels,
    /// Capacitors, resonance, current, resistance
    Electrical,
    /// Moist air relationships
    Psychrometrics,
    /// Water viscosity and density
    FluidProperties,
    /// Orbital mechanics
    Astronomy,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Mathematics => "Mathematics",
            EquationCategory::Mechanics => "Mechanics",
            EquationCategory::PressureVessels => "Pressure Vessels",
            EquationCategory::Electrical => "Electrical",
            EquationCategory::Psychrometrics => "Psychrometrics",
            EquationCategory::FluidProperties => "Fluid Properties",
            EquationCategory::Astronomy => "Astronomy",
        }
    }

    /// Sort order for reference documents (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Mathematics => 1,
            EquationCategory::Mechanics => 2,
            EquationCategory::PressureVessels => 3,
            EquationCategory::Electrical => 4,
            EquationCategory::Psychrometrics => 5,
            EquationCategory::FluidProperties => 6,
            EquationCategory::Astronomy => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "p", "r", "t")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// SI units the implementation works in
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Hoop Stress")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text (ASCII)
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula used by the Formulary calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Mathematics
    // -------------------------------------------------------------------------
    /// a = x/φ, b = x − a
    GoldenRatioSplit,
    /// |r − φ| < tolerance
    GoldenRatioCheck,
    /// (new − old)/|old| × 100
    PercentageChange,
    /// |a − b| / |(a+b)/2| × 100
    PercentageDifference,
    /// m = rise/run
    SlopeRatio,
    /// θ = atan(m)
    SlopeAngle,

    // -------------------------------------------------------------------------
    // Mechanics
    // -------------------------------------------------------------------------
    /// T = mg
    StaticTension,
    /// T = m(g ± a)
    AcceleratingTension,
    /// W = F·d·cos θ
    MechanicalWork,
    /// ε = ΔL/L₀
    EngineeringStrain,
    /// V = π(b/2)²·s·n
    EngineDisplacement,
    /// f = √(k/m)/2π
    SpringMassFrequency,

    // -------------------------------------------------------------------------
    // Pressure Vessels
    // -------------------------------------------------------------------------
    /// σ_h = pr/t
    HoopStress,
    /// σ_a = pr/2t
    AxialStress,
    /// σ_r = −p
    RadialStress,
    /// Generalized Hooke's law
    PrincipalStrains,
    /// u = ε_h·r
    RadialDisplacement,
    /// t = pr/σ
    RequiredWallThickness,
    /// p = σt/r
    AllowablePressure,

    // -------------------------------------------------------------------------
    // Electrical
    // -------------------------------------------------------------------------
    /// E = ½CV²
    CapacitorEnergyCV,
    /// E = ½QV
    CapacitorEnergyQV,
    /// Q = CV
    CapacitorCharge,
    /// V = √(2E/C)
    CapacitorVoltageFromEnergy,
    /// f = 1/(2π√(LC))
    LcResonantFrequency,
    /// I = P/V
    DcCurrent,
    /// I = P/(V·PF)
    AcCurrent,
    /// A = π(D/2)²
    ConductorArea,
    /// ρ(T) = ρ₀(1 + α(T − T₀))
    ResistivityTemperature,
    /// R = ρL/A
    WireResistance,

    // -------------------------------------------------------------------------
    // Psychrometrics
    // -------------------------------------------------------------------------
    /// e_s = 6.112·exp(17.67T/(T+243.5))
    MagnusSaturationPressure,
    /// RH = e_s(Td)/e_s(T) × 100
    RelativeHumidity,
    /// Td = 243.5γ/(17.67 − γ)
    MagnusDewPoint,

    // -------------------------------------------------------------------------
    // Fluid Properties
    // -------------------------------------------------------------------------
    /// μ = A·10^(B/(T − C))
    WaterViscosity,
    /// ρ(T) piecewise
    WaterDensity,
    /// ν = μ/ρ
    KinematicViscosity,

    // -------------------------------------------------------------------------
    // Astronomy
    // -------------------------------------------------------------------------
    /// T² = 4π²a³/(GM)
    KeplerThirdLaw,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            // Mathematics
            Equation::GoldenRatioSplit => EquationMetadata {
                name: "Golden Ratio Division",
                description: "Divide a length into two parts whose ratio equals the golden ratio",
                formula_plain: "a = x/phi, b = x - a, phi = (1 + sqrt(5))/2",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("x", "Whole length", "any"),
                    Variable::new("a", "Larger part", "any"),
                    Variable::new("b", "Smaller part", "any"),
                    Variable::new("phi", "Golden ratio, 1.6180339887...", "-"),
                ],
                assumptions: vec!["x > 0"],
                category: EquationCategory::Mathematics,
                source_module: "equations/ratios.rs",
                source_function: "golden_split",
            },

            Equation::GoldenRatioCheck => EquationMetadata {
                name: "Golden Ratio Check",
                description: "Test whether a ratio equals the golden ratio within tolerance",
                formula_plain: "|r - phi| < 1e-4",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("r", "Ratio under test", "-"),
                    Variable::new("phi", "Golden ratio", "-"),
                ],
                assumptions: vec!["Tolerance of 1e-4"],
                category: EquationCategory::Mathematics,
                source_module: "equations/ratios.rs",
                source_function: "is_golden_ratio",
            },

            Equation::PercentageChange => EquationMetadata {
                name: "Percentage Change",
                description: "Relative change from an original value to a new value",
                formula_plain: "%change = (new - old)/|old| * 100",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("old", "Original value", "any"),
                    Variable::new("new", "New value", "any"),
                ],
                assumptions: vec!["old != 0", "Dividing by |old| keeps the sign equal to the direction of change"],
                category: EquationCategory::Mathematics,
                source_module: "equations/ratios.rs",
                source_function: "percentage_change",
            },

            Equation::PercentageDifference => EquationMetadata {
                name: "Percentage Difference",
                description: "Symmetric difference between two values relative to their mean",
                formula_plain: "%diff = |a - b| / |(a + b)/2| * 100",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("a", "First value", "any"),
                    Variable::new("b", "Second value", "any"),
                ],
                assumptions: vec!["(a + b)/2 != 0", "Order of a and b does not matter"],
                category: EquationCategory::Mathematics,
                source_module: "equations/ratios.rs",
                source_function: "percentage_difference",
            },

            Equation::SlopeRatio => EquationMetadata {
                name: "Slope",
                description: "Slope as rise over run, from a rise and run or from two points",
                formula_plain: "m = rise/run = (y2 - y1)/(x2 - x1), grade = m * 100",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("m", "Slope ratio", "-"),
                    Variable::new("rise", "Vertical change", "any"),
                    Variable::new("run", "Horizontal change", "any"),
                ],
                assumptions: vec!["run != 0 (not a vertical line)"],
                category: EquationCategory::Mathematics,
                source_module: "equations/ratios.rs",
                source_function: "slope_from_rise_run",
            },

            Equation::SlopeAngle => EquationMetadata {
                name: "Slope Angle",
                description: "Angle of inclination above the horizontal",
                formula_plain: "theta = atan(m)",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("theta", "Inclination angle", "deg"),
                    Variable::new("m", "Slope ratio", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::Mathematics,
                source_module: "equations/ratios.rs",
                source_function: "slope_angle_degrees",
            },

            // Mechanics
            Equation::StaticTension => EquationMetadata {
                name: "Static Tension",
                description: "Tension in a vertical cord supporting a mass at rest",
                formula_plain: "T = m*g",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("T", "Tension", "N"),
                    Variable::new("m", "Suspended mass", "kg"),
                    Variable::new("g", "Standard gravity, 9.80665", "m/s^2"),
                ],
                assumptions: vec!["Massless, inextensible cord"],
                category: EquationCategory::Mechanics,
                source_module: "equations/mechanics.rs",
                source_function: "static_tension",
            },

            Equation::AcceleratingTension => EquationMetadata {
                name: "Tension Under Vertical Acceleration",
                description: "Tension in a cord accelerating a suspended mass up or down",
                formula_plain: "T = m(g + a) upward, T = m(g - a) downward",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("T", "Tension", "N"),
                    Variable::new("m", "Suspended mass", "kg"),
                    Variable::new("a", "Acceleration magnitude", "m/s^2"),
                ],
                assumptions: vec!["Massless, inextensible cord", "Downward a < g (cord stays taut)"],
                category: EquationCategory::Mechanics,
                source_module: "equations/mechanics.rs",
                source_function: "accelerating_tension",
            },

            Equation::MechanicalWork => EquationMetadata {
                name: "Mechanical Work",
                description: "Work done by a constant force over a straight displacement",
                formula_plain: "W = F*d*cos(theta)",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("W", "Work", "J"),
                    Variable::new("F", "Force magnitude", "N"),
                    Variable::new("d", "Displacement", "m"),
                    Variable::new("theta", "Angle between force and displacement", "deg"),
                ],
                assumptions: vec!["Constant force", "0 <= theta <= 180 deg"],
                category: EquationCategory::Mechanics,
                source_module: "equations/mechanics.rs",
                source_function: "work_done",
            },

            Equation::EngineeringStrain => EquationMetadata {
                name: "Engineering Strain",
                description: "Elongation relative to original length",
                formula_plain: "epsilon = dL/L0 = (L - L0)/L0, %elongation = epsilon * 100",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("epsilon", "Engineering strain", "-"),
                    Variable::new("L0", "Original length", "m"),
                    Variable::new("L", "Final length", "m"),
                    Variable::new("dL", "Change in length", "m"),
                ],
                assumptions: vec!["L0 > 0", "Uniform deformation along the gauge length"],
                category: EquationCategory::Mechanics,
                source_module: "equations/mechanics.rs",
                source_function: "engineering_strain",
            },

            Equation::EngineDisplacement => EquationMetadata {
                name: "Engine Displacement",
                description: "Total volume swept by all pistons in one revolution cycle",
                formula_plain: "V = pi * (b/2)^2 * s * n",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("V", "Displacement", "m^3"),
                    Variable::new("b", "Cylinder bore", "m"),
                    Variable::new("s", "Piston stroke", "m"),
                    Variable::new("n", "Number of cylinders", "-"),
                ],
                assumptions: vec!["Cylindrical bores", "All cylinders identical"],
                category: EquationCategory::Mechanics,
                source_module: "equations/mechanics.rs",
                source_function: "engine_displacement",
            },

            Equation::SpringMassFrequency => EquationMetadata {
                name: "Spring-Mass Natural Frequency",
                description: "Natural frequency of an undamped single degree of freedom oscillator",
                formula_plain: "f = sqrt(k/m) / (2*pi)",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("f", "Natural frequency", "Hz"),
                    Variable::new("k", "Spring constant", "N/m"),
                    Variable::new("m", "Mass", "kg"),
                ],
                assumptions: vec!["No damping", "Massless linear spring"],
                category: EquationCategory::Mechanics,
                source_module: "equations/mechanics.rs",
                source_function: "spring_mass_frequency",
            },

            // Pressure Vessels
            Equation::HoopStress => EquationMetadata {
                name: "Hoop Stress",
                description: "Circumferential membrane stress in a thin-walled cylinder",
                formula_plain: "sigma_h = p*r/t",
                reference: Reference::Roarks { edition: 8, table: "Table 13.1" },
                variables: vec![
                    Variable::new("sigma_h", "Hoop stress", "Pa"),
                    Variable::new("p", "Internal pressure", "Pa"),
                    Variable::new("r", "Mean radius", "m"),
                    Variable::new("t", "Wall thickness", "m"),
                ],
                assumptions: vec!["Thin wall, d/t >= 20", "Uniform internal pressure"],
                category: EquationCategory::PressureVessels,
                source_module: "equations/pressure_vessel.rs",
                source_function: "hoop_stress",
            },

            Equation::AxialStress => EquationMetadata {
                name: "Axial Stress",
                description: "Longitudinal membrane stress in a closed-end thin-walled cylinder",
                formula_plain: "sigma_a = p*r/(2t)",
                reference: Reference::Roarks { edition: 8, table: "Table 13.1" },
                variables: vec![
                    Variable::new("sigma_a", "Axial stress", "Pa"),
                    Variable::new("p", "Internal pressure", "Pa"),
                    Variable::new("r", "Mean radius", "m"),
                    Variable::new("t", "Wall thickness", "m"),
                ],
                assumptions: vec!["Closed ends carry the pressure load", "Thin wall, d/t >= 20"],
                category: EquationCategory::PressureVessels,
                source_module: "equations/pressure_vessel.rs",
                source_function: "axial_stress",
            },

            Equation::RadialStress => EquationMetadata {
                name: "Radial Stress",
                description: "Radial stress at the inner wall surface",
                formula_plain: "sigma_r = -p",
                reference: Reference::Roarks { edition: 8, table: "Table 13.1" },
                variables: vec![
                    Variable::new("sigma_r", "Radial stress", "Pa"),
                    Variable::new("p", "Internal pressure", "Pa"),
                ],
                assumptions: vec!["Varies from -p (inner) to 0 (outer); inner value used"],
                category: EquationCategory::PressureVessels,
                source_module: "equations/pressure_vessel.rs",
                source_function: "radial_stress",
            },

            Equation::PrincipalStrains => EquationMetadata {
                name: "Principal Strains",
                description: "Strains from the three principal stresses by generalized Hooke's law",
                formula_plain: "eps_h = (sigma_h - nu(sigma_a + sigma_r))/E, eps_a = (sigma_a - nu(sigma_h + sigma_r))/E, eps_r = (sigma_r - nu(sigma_h + sigma_a))/E",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("eps", "Strain", "-"),
                    Variable::new("E", "Young's modulus", "Pa"),
                    Variable::new("nu", "Poisson's ratio", "-"),
                ],
                assumptions: vec!["Linear elastic, isotropic material"],
                category: EquationCategory::PressureVessels,
                source_module: "equations/pressure_vessel.rs",
                source_function: "principal_strains",
            },

            Equation::RadialDisplacement => EquationMetadata {
                name: "Radial Displacement",
                description: "Increase in radius caused by hoop strain",
                formula_plain: "u = eps_h * r",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("u", "Radial displacement", "m"),
                    Variable::new("eps_h", "Hoop strain", "-"),
                    Variable::new("r", "Mean radius", "m"),
                ],
                assumptions: vec!["Small strains"],
                category: EquationCategory::PressureVessels,
                source_module: "equations/pressure_vessel.rs",
                source_function: "radial_displacement",
            },

            Equation::RequiredWallThickness => EquationMetadata {
                name: "Required Wall Thickness",
                description: "Minimum wall thickness that keeps hoop stress at the allowable value",
                formula_plain: "t_min = p*r/sigma_allow, t_rec = 2*t_min",
                reference: Reference::Roarks { edition: 8, table: "Table 13.1" },
                variables: vec![
                    Variable::new("t_min", "Minimum thickness", "m"),
                    Variable::new("sigma_allow", "Allowable stress", "Pa"),
                ],
                assumptions: vec!["Recommended thickness applies a factor of 2"],
                category: EquationCategory::PressureVessels,
                source_module: "equations/pressure_vessel.rs",
                source_function: "required_thickness",
            },

            Equation::AllowablePressure => EquationMetadata {
                name: "Maximum Pressure",
                description: "Internal pressure that brings the hoop stress to the allowable value",
                formula_plain: "p_max = sigma_allow*t/r, p_work = p_max/4",
                reference: Reference::Roarks { edition: 8, table: "Table 13.1" },
                variables: vec![
                    Variable::new("p_max", "Maximum pressure", "Pa"),
                    Variable::new("sigma_allow", "Allowable stress", "Pa"),
                ],
                assumptions: vec!["Working pressure applies a factor of safety of 4"],
                category: EquationCategory::PressureVessels,
                source_module: "equations/pressure_vessel.rs",
                source_function: "pressure_at_stress",
            },

            // Electrical
            Equation::CapacitorEnergyCV => EquationMetadata {
                name: "Capacitor Energy (C, V)",
                description: "Energy stored in a capacitor from its capacitance and voltage",
                formula_plain: "E = 0.5*C*V^2",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("E", "Stored energy", "J"),
                    Variable::new("C", "Capacitance", "F"),
                    Variable::new("V", "Voltage", "V"),
                ],
                assumptions: vec!["Ideal linear capacitor"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "capacitor_energy_cv",
            },

            Equation::CapacitorEnergyQV => EquationMetadata {
                name: "Capacitor Energy (Q, V)",
                description: "Energy stored in a capacitor from its charge and voltage",
                formula_plain: "E = 0.5*Q*V",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("E", "Stored energy", "J"),
                    Variable::new("Q", "Charge", "C"),
                    Variable::new("V", "Voltage", "V"),
                ],
                assumptions: vec!["Ideal linear capacitor"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "capacitor_energy_qv",
            },

            Equation::CapacitorCharge => EquationMetadata {
                name: "Capacitor Charge",
                description: "Charge held by a capacitor at a given voltage",
                formula_plain: "Q = C*V",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("Q", "Charge", "C"),
                    Variable::new("C", "Capacitance", "F"),
                    Variable::new("V", "Voltage", "V"),
                ],
                assumptions: vec![],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "capacitor_charge",
            },

            Equation::CapacitorVoltageFromEnergy => EquationMetadata {
                name: "Capacitor Voltage from Energy",
                description: "Voltage across a capacitor holding a known energy",
                formula_plain: "V = sqrt(2E/C) = 2E/Q",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("V", "Voltage", "V"),
                    Variable::new("E", "Stored energy", "J"),
                    Variable::new("C", "Capacitance", "F"),
                    Variable::new("Q", "Charge", "C"),
                ],
                assumptions: vec!["Ideal linear capacitor"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "capacitor_voltage_from_energy",
            },

            Equation::LcResonantFrequency => EquationMetadata {
                name: "LC Resonant Frequency",
                description: "Resonant frequency of an ideal inductor-capacitor circuit",
                formula_plain: "f = 1/(2*pi*sqrt(L*C))",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("f", "Resonant frequency", "Hz"),
                    Variable::new("L", "Inductance", "H"),
                    Variable::new("C", "Capacitance", "F"),
                ],
                assumptions: vec!["No resistance in the loop"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "lc_resonant_frequency",
            },

            Equation::DcCurrent => EquationMetadata {
                name: "DC Current from Power",
                description: "Current drawn by a DC load of known power",
                formula_plain: "I = P/V",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("I", "Current", "A"),
                    Variable::new("P", "Power", "W"),
                    Variable::new("V", "Voltage", "V"),
                ],
                assumptions: vec![],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "dc_current",
            },

            Equation::AcCurrent => EquationMetadata {
                name: "AC Current from Power",
                description: "Current drawn by a single-phase AC load of known real power",
                formula_plain: "I = P/(V*PF), S = P/PF",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("I", "RMS current", "A"),
                    Variable::new("P", "Real power", "W"),
                    Variable::new("V", "RMS voltage", "V"),
                    Variable::new("PF", "Power factor, 0 < PF <= 1", "-"),
                    Variable::new("S", "Apparent power", "VA"),
                ],
                assumptions: vec!["Single phase", "Sinusoidal steady state"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "ac_current",
            },

            Equation::ConductorArea => EquationMetadata {
                name: "Conductor Cross-Section",
                description: "Cross-sectional area of a round conductor",
                formula_plain: "A = pi*(D/2)^2",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("A", "Area", "m^2"),
                    Variable::new("D", "Diameter", "m"),
                ],
                assumptions: vec!["Solid round conductor"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "circular_area",
            },

            Equation::ResistivityTemperature => EquationMetadata {
                name: "Resistivity Temperature Correction",
                description: "Linear correction of resistivity from its 20 C reference value",
                formula_plain: "rho(T) = rho_20 * (1 + alpha*(T - 20))",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("rho_20", "Resistivity at 20 C", "ohm*m"),
                    Variable::new("alpha", "Temperature coefficient", "1/C"),
                    Variable::new("T", "Conductor temperature", "C"),
                ],
                assumptions: vec!["Linear over moderate temperature ranges"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "resistivity_at_temperature",
            },

            Equation::WireResistance => EquationMetadata {
                name: "Wire Resistance",
                description: "Resistance of a uniform conductor, rearranged for length, diameter or resistivity",
                formula_plain: "R = rho*L/A, L = R*A/rho, D = 2*sqrt(rho*L/(pi*R)), rho = R*A/L",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("R", "Resistance", "ohm"),
                    Variable::new("rho", "Resistivity", "ohm*m"),
                    Variable::new("L", "Length", "m"),
                    Variable::new("A", "Cross-sectional area", "m^2"),
                ],
                assumptions: vec!["DC resistance, no skin effect"],
                category: EquationCategory::Electrical,
                source_module: "equations/electrical.rs",
                source_function: "wire_resistance",
            },

            // Psychrometrics
            Equation::MagnusSaturationPressure => EquationMetadata {
                name: "Saturation Vapour Pressure (Magnus)",
                description: "Saturation vapour pressure over liquid water",
                formula_plain: "e_s(T) = 6.112 * exp(17.67*T/(T + 243.5))",
                reference: Reference::Bolton1980,
                variables: vec![
                    Variable::new("e_s", "Saturation vapour pressure", "hPa"),
                    Variable::new("T", "Temperature", "C"),
                ],
                assumptions: vec!["Over liquid water", "Most accurate between -30 C and 35 C"],
                category: EquationCategory::Psychrometrics,
                source_module: "equations/psychrometrics.rs",
                source_function: "saturation_vapor_pressure",
            },

            Equation::RelativeHumidity => EquationMetadata {
                name: "Relative Humidity",
                description: "Ratio of actual to saturation vapour pressure",
                formula_plain: "RH = e_s(Td)/e_s(T) * 100",
                reference: Reference::Bolton1980,
                variables: vec![
                    Variable::new("RH", "Relative humidity", "%"),
                    Variable::new("T", "Dry-bulb temperature", "C"),
                    Variable::new("Td", "Dew point", "C"),
                ],
                assumptions: vec!["Result clamped to 0-100%", "Dry-bulb solved numerically when unknown"],
                category: EquationCategory::Psychrometrics,
                source_module: "equations/psychrometrics.rs",
                source_function: "relative_humidity",
            },

            Equation::MagnusDewPoint => EquationMetadata {
                name: "Dew Point (Inverse Magnus)",
                description: "Temperature at which the actual vapour pressure saturates",
                formula_plain: "gamma = ln(e/6.112), Td = 243.5*gamma/(17.67 - gamma), e = e_s(T)*RH/100",
                reference: Reference::Bolton1980,
                variables: vec![
                    Variable::new("Td", "Dew point", "C"),
                    Variable::new("e", "Actual vapour pressure", "hPa"),
                ],
                assumptions: vec!["RH > 0"],
                category: EquationCategory::Psychrometrics,
                source_module: "equations/psychrometrics.rs",
                source_function: "dew_point",
            },

            // Fluid Properties
            Equation::WaterViscosity => EquationMetadata {
                name: "Water Dynamic Viscosity",
                description: "Dynamic viscosity of liquid water as a function of temperature",
                formula_plain: "mu = 2.414e-5 * 10^(247.8/(T - 140))",
                reference: Reference::AlShemmeri2012,
                variables: vec![
                    Variable::new("mu", "Dynamic viscosity", "Pa*s"),
                    Variable::new("T", "Absolute temperature", "K"),
                ],
                assumptions: vec!["Fitted for -20 C to 150 C", "Undefined for T <= 140 K"],
                category: EquationCategory::FluidProperties,
                source_module: "equations/fluids.rs",
                source_function: "water_dynamic_viscosity",
            },

            Equation::WaterDensity => EquationMetadata {
                name: "Water Density",
                description: "Approximate density of liquid water",
                formula_plain: "rho = 1000 + 0.02(T - 4) for T <= 4 C, rho = 999.972 - 0.0054T - 0.00008T^2 otherwise",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("rho", "Density", "kg/m^3"),
                    Variable::new("T", "Temperature", "C"),
                ],
                assumptions: vec!["Pure water at atmospheric pressure", "Engineering approximation"],
                category: EquationCategory::FluidProperties,
                source_module: "equations/fluids.rs",
                source_function: "water_density",
            },

            Equation::KinematicViscosity => EquationMetadata {
                name: "Kinematic Viscosity",
                description: "Dynamic viscosity divided by density",
                formula_plain: "nu = mu/rho",
                reference: Reference::Definition,
                variables: vec![
                    Variable::new("nu", "Kinematic viscosity", "m^2/s"),
                    Variable::new("mu", "Dynamic viscosity", "Pa*s"),
                    Variable::new("rho", "Density", "kg/m^3"),
                ],
                assumptions: vec![],
                category: EquationCategory::FluidProperties,
                source_module: "equations/fluids.rs",
                source_function: "kinematic_viscosity",
            },

            // Astronomy
            Equation::KeplerThirdLaw => EquationMetadata {
                name: "Kepler's Third Law",
                description: "Relation between orbital period, semi-major axis and central mass",
                formula_plain: "T = sqrt(4*pi^2*a^3/(G*M)), a = cbrt(G*M*T^2/(4*pi^2)), M = 4*pi^2*a^3/(G*T^2)",
                reference: Reference::Kepler,
                variables: vec![
                    Variable::new("T", "Orbital period", "s"),
                    Variable::new("a", "Semi-major axis", "m"),
                    Variable::new("M", "Central mass", "kg"),
                    Variable::new("G", "Gravitational constant, 6.67430e-11", "m^3/(kg*s^2)"),
                ],
                assumptions: vec!["Orbiting mass negligible relative to M", "Two-body problem"],
                category: EquationCategory::Astronomy,
                source_module: "equations/orbital.rs",
                source_function: "orbital_period",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories, sorted by `sort_order`
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            Mathematics,
            Mechanics,
            PressureVessels,
            Electrical,
            Psychrometrics,
            FluidProperties,
            Astronomy,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Mathematics
    Equation::GoldenRatioSplit,
    Equation::GoldenRatioCheck,
    Equation::PercentageChange,
    Equation::PercentageDifference,
    Equation::SlopeRatio,
    Equation::SlopeAngle,
    // Mechanics
    Equation::StaticTension,
    Equation::AcceleratingTension,
    Equation::MechanicalWork,
    Equation::EngineeringStrain,
    Equation::EngineDisplacement,
    Equation::SpringMassFrequency,
    // Pressure vessels
    Equation::HoopStress,
    Equation::AxialStress,
    Equation::RadialStress,
    Equation::PrincipalStrains,
    Equation::RadialDisplacement,
    Equation::RequiredWallThickness,
    Equation::AllowablePressure,
    // Electrical
    Equation::CapacitorEnergyCV,
    Equation::CapacitorEnergyQV,
    Equation::CapacitorCharge,
    Equation::CapacitorVoltageFromEnergy,
    Equation::LcResonantFrequency,
    Equation::DcCurrent,
    Equation::AcCurrent,
    Equation::ConductorArea,
    Equation::ResistivityTemperature,
    Equation::WireResistance,
    // Psychrometrics
    Equation::MagnusSaturationPressure,
    Equation::RelativeHumidity,
    Equation::MagnusDewPoint,
    // Fluid properties
    Equation::WaterViscosity,
    Equation::WaterDensity,
    Equation::KinematicViscosity,
    // Astronomy
    Equation::KeplerThirdLaw,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equation reference as a markdown document.
///
/// Used by the `gen-equations` binary to write `EQUATIONS.md` and by the
/// CLI `equations` command.
///
/// ```rust
/// use formula_core::equations::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("## Pressure Vessels"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(r#"# Formulary Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula the Formulary calculators apply.
Each equation includes its formula, reference, source location, and assumptions.
Implementations work in SI base units; calculators convert inputs before
applying a formula and convert results back to the selected units.

## Sign Conventions

| Quantity | Positive Direction |
|----------|-------------------|
| Stress | Tension |
| Vertical acceleration | Upward |
| Elongation | Lengthening |
| Percentage change | Increase |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output.push_str(r#"## How to Audit

1. Find the equation you want to verify in the sections above
2. Check the **Reference** for the original source
3. Follow the **Source** link to the implementing function
4. Run `cargo test` to check each formula against known values
"#);

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        assert!(Equation::CapacitorEnergyCV.metadata().formula_plain.contains("0.5*C*V^2"));
        assert!(Equation::LcResonantFrequency.metadata().formula_plain.contains("sqrt(L*C)"));
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Equation::all_categories() {
            assert!(
                !Equation::in_category(category).is_empty(),
                "Category {:?} has no equations",
                category
            );
        }
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_reference_citation() {
        let roark = Reference::Roarks { edition: 8, table: "Table 13.1" };
        assert_eq!(roark.citation(), "Roark's 8ed, Table 13.1");
        assert_eq!(Reference::Bolton1980.short_form(), "Bolton");
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Formulary Equations Reference"));
        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Sign Conventions"));

        for category in Equation::all_categories() {
            assert!(
                markdown.contains(&format!("## {}", category.display_name())),
                "Missing {:?}",
                category
            );
        }

        assert!(markdown.contains("### Hoop Stress"));
        assert!(markdown.contains("`sigma_h = p*r/t`"));
        assert!(markdown.contains("equations/psychrometrics.rs"));
        assert!(markdown.contains(&format!("**Total Equations:** {}", ALL_EQUATIONS.len())));
        assert!(markdown.contains("**Categories:** 7"));
        assert!(markdown.contains("## How to Audit"));
    }

    #[test]
    fn test_equation_serializes_by_name() {
        let json = serde_json::to_string(&Equation::KeplerThirdLaw).unwrap();
        assert_eq!(json, "\"KeplerThirdLaw\"");
    }
}
